//! Project Operations

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use scoped_graphql::{ApiClient, ApiResult, NoVariables, Operation, OperationKind, TenantSlug, Transport};

use super::{GET_PROJECTS, GET_PROJECT_DETAILS};
use crate::forms::{ProjectDraft, SubmitError};
use crate::models::{Project, ProjectDetail, ProjectStatus};

// ========================
// Queries
// ========================

pub struct GetProjects;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
}

impl Operation for GetProjects {
    const NAME: &'static str = GET_PROJECTS;
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"
        query GetProjects {
            projects {
                id
                name
                description
                status
                dueDate
                taskCount
                completionRate
            }
        }
    "#;
    type Variables = NoVariables;
    type Data = ProjectsData;
}

pub struct GetProjectDetails;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectIdVariables {
    pub id: String,
}

/// `project` is null when the id resolves to nothing
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectDetailsData {
    pub project: Option<ProjectDetail>,
}

impl Operation for GetProjectDetails {
    const NAME: &'static str = GET_PROJECT_DETAILS;
    const KIND: OperationKind = OperationKind::Query;
    const DOCUMENT: &'static str = r#"
        query GetProjectDetails($id: ID!) {
            project(id: $id) {
                id
                name
                description
                status
                dueDate
                taskCount
                completionRate
                tasks {
                    id
                    title
                    description
                    status
                    assigneeEmail
                    comments {
                        id
                        content
                        authorEmail
                        createdAt
                    }
                }
            }
        }
    "#;
    type Variables = ProjectIdVariables;
    type Data = ProjectDetailsData;
}

// ========================
// Mutations
// ========================

const PROJECT_FIELDS_INVALIDATED: &[&str] = &[GET_PROJECTS, GET_PROJECT_DETAILS];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectVariables {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProjectPayload {
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectData {
    pub create_project: ProjectPayload,
}

pub struct CreateProject;

impl Operation for CreateProject {
    const NAME: &'static str = "CreateProject";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation CreateProject($name: String!, $description: String, $dueDate: Date) {
            createProject(name: $name, description: $description, dueDate: $dueDate) {
                project {
                    id
                    name
                    description
                    status
                    dueDate
                    taskCount
                    completionRate
                }
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = &[GET_PROJECTS];
    type Variables = CreateProjectVariables;
    type Data = CreateProjectData;
}

/// Partial update: absent fields are left unchanged server-side
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectVariables {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectData {
    pub update_project: ProjectPayload,
}

pub struct UpdateProject;

impl Operation for UpdateProject {
    const NAME: &'static str = "UpdateProject";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation UpdateProject($id: ID!, $name: String, $description: String, $status: String, $dueDate: Date) {
            updateProject(id: $id, name: $name, description: $description, status: $status, dueDate: $dueDate) {
                project {
                    id
                    name
                    description
                    status
                    dueDate
                    taskCount
                    completionRate
                }
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = PROJECT_FIELDS_INVALIDATED;
    type Variables = UpdateProjectVariables;
    type Data = UpdateProjectData;
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OkPayload {
    pub ok: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProjectData {
    pub delete_project: OkPayload,
}

/// Server cascades to the project's tasks
pub struct DeleteProject;

impl Operation for DeleteProject {
    const NAME: &'static str = "DeleteProject";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation DeleteProject($id: ID!) {
            deleteProject(id: $id) {
                ok
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = PROJECT_FIELDS_INVALIDATED;
    type Variables = ProjectIdVariables;
    type Data = DeleteProjectData;
}

// ========================
// Submit helpers
// ========================

pub async fn create_project<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    draft: &ProjectDraft,
) -> Result<Project, SubmitError> {
    let variables = draft.to_create()?;
    let data = client.mutate::<CreateProject>(tenant, &variables).await?;
    log::info!("created project {} [{}]", data.create_project.project.id, tenant);
    Ok(data.create_project.project)
}

pub async fn update_project<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    id: &str,
    draft: &ProjectDraft,
) -> Result<Project, SubmitError> {
    let variables = draft.to_update(id)?;
    let data = client.mutate::<UpdateProject>(tenant, &variables).await?;
    Ok(data.update_project.project)
}

/// Call only after the user confirmed
pub async fn delete_project<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    id: &str,
) -> ApiResult<bool> {
    let variables = ProjectIdVariables { id: id.to_string() };
    let data = client.mutate::<DeleteProject>(tenant, &variables).await?;
    log::info!("deleted project {} [{}]", id, tenant);
    Ok(data.delete_project.ok.unwrap_or(false))
}
