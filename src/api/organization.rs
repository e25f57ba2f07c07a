//! Organization Operations

use serde::Deserialize;
use scoped_graphql::{NoVariables, Operation, OperationKind};

use crate::models::Organization;

pub struct GetOrganizations;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrganizationsData {
    pub organizations: Vec<Organization>,
}

impl Operation for GetOrganizations {
    const NAME: &'static str = super::GET_ORGANIZATIONS;
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"
        query GetOrganizations {
            organizations {
                id
                name
                slug
            }
        }
    "#;
    type Variables = NoVariables;
    type Data = OrganizationsData;
}
