//! Scripted transport and toy operations shared by the unit tests

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::operation::{NoVariables, Operation, OperationKind};
use crate::tenant::TenantSlug;
use crate::transport::{GraphqlRequest, GraphqlResponse, Transport};

pub fn slug(s: &str) -> TenantSlug {
    TenantSlug::parse(s).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub tenant: TenantSlug,
    pub operation: &'static str,
    pub variables: Value,
}

/// Replays queued responses in order and records every request
#[derive(Default)]
pub struct ScriptedTransport {
    responses: RefCell<VecDeque<ApiResult<GraphqlResponse>>>,
    calls: RefCell<Vec<Call>>,
    hook: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_data(&self, data: Value) {
        self.responses.borrow_mut().push_back(Ok(GraphqlResponse::data(data)));
    }

    pub fn push_graphql_error(&self, message: &str) {
        self.responses.borrow_mut().push_back(Ok(GraphqlResponse::error(message)));
    }

    pub fn push_error(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    /// Runs while the next request is "in flight"
    pub fn on_next_request(&self, hook: impl FnOnce() + 'static) {
        *self.hook.borrow_mut() = Some(Box::new(hook));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.borrow().iter().map(|c| c.operation).collect()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn execute(
        &self,
        tenant: &TenantSlug,
        request: &GraphqlRequest,
    ) -> ApiResult<GraphqlResponse> {
        self.calls.borrow_mut().push(Call {
            tenant: tenant.clone(),
            operation: request.operation_name,
            variables: request.variables.clone(),
        });
        let hook = self.hook.borrow_mut().take();
        if let Some(hook) = hook {
            hook();
        }
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
    }
}

pub struct ListThings;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ThingsData {
    pub things: Vec<String>,
}

impl Operation for ListThings {
    const NAME: &'static str = "ListThings";
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = "query ListThings { things }";
    type Variables = NoVariables;
    type Data = ThingsData;
}

pub struct AddThing;

#[derive(Debug, Clone, Serialize)]
pub struct AddThingVars {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddThingData {
    pub add_thing: Value,
}

impl Operation for AddThing {
    const NAME: &'static str = "AddThing";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = "mutation AddThing($name: String!) { addThing(name: $name) { ok } }";
    const INVALIDATES: &'static [&'static str] = &["ListThings"];
    type Variables = AddThingVars;
    type Data = AddThingData;
}
