//! Task Operations

use serde::{Deserialize, Serialize};
use scoped_graphql::{ApiClient, ApiResult, Operation, OperationKind, TenantSlug, Transport};

use super::project::OkPayload;
use super::{GET_PROJECTS, GET_PROJECT_DETAILS};
use crate::forms::{SubmitError, TaskDraft};
use crate::models::{Task, TaskStatus};

/// Task changes alter the detail page and the dashboard's counts
const TASK_INVALIDATES: &[&str] = &[GET_PROJECT_DETAILS, GET_PROJECTS];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskPayload {
    pub task: Task,
}

// ========================
// Create
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskVariables {
    pub title: String,
    pub project_id: String,
    pub description: Option<String>,
    pub assignee_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskData {
    pub create_task: TaskPayload,
}

pub struct CreateTask;

impl Operation for CreateTask {
    const NAME: &'static str = "CreateTask";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation CreateTask($title: String!, $projectId: ID!, $description: String, $assigneeEmail: String) {
            createTask(title: $title, projectId: $projectId, description: $description, assigneeEmail: $assigneeEmail) {
                task {
                    id
                    title
                    description
                    status
                    assigneeEmail
                }
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = TASK_INVALIDATES;
    type Variables = CreateTaskVariables;
    type Data = CreateTaskData;
}

// ========================
// Update (full)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskVariables {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskData {
    pub update_task: TaskPayload,
}

pub struct UpdateTask;

impl Operation for UpdateTask {
    const NAME: &'static str = "UpdateTask";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation UpdateTask($id: ID!, $title: String, $description: String, $status: String, $assigneeEmail: String) {
            updateTask(id: $id, title: $title, description: $description, status: $status, assigneeEmail: $assigneeEmail) {
                task {
                    id
                    title
                    description
                    status
                    assigneeEmail
                }
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = TASK_INVALIDATES;
    type Variables = UpdateTaskVariables;
    type Data = UpdateTaskData;
}

// ========================
// Update (status only)
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatusVariables {
    pub id: String,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskStatusRecord {
    pub id: String,
    pub status: TaskStatus,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaskStatusPayload {
    pub task: TaskStatusRecord,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskStatusData {
    pub update_task: TaskStatusPayload,
}

pub struct UpdateTaskStatus;

impl Operation for UpdateTaskStatus {
    const NAME: &'static str = "UpdateTaskStatus";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation UpdateTaskStatus($id: ID!, $status: String!) {
            updateTask(id: $id, status: $status) {
                task {
                    id
                    status
                }
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = TASK_INVALIDATES;
    type Variables = TaskStatusVariables;
    type Data = UpdateTaskStatusData;
}

// ========================
// Delete
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskIdVariables {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTaskData {
    pub delete_task: OkPayload,
}

pub struct DeleteTask;

impl Operation for DeleteTask {
    const NAME: &'static str = "DeleteTask";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation DeleteTask($id: ID!) {
            deleteTask(id: $id) {
                ok
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = TASK_INVALIDATES;
    type Variables = TaskIdVariables;
    type Data = DeleteTaskData;
}

// ========================
// Submit helpers
// ========================

pub async fn create_task<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    project_id: &str,
    draft: &TaskDraft,
) -> Result<Task, SubmitError> {
    let variables = draft.to_create(project_id)?;
    let data = client.mutate::<CreateTask>(tenant, &variables).await?;
    Ok(data.create_task.task)
}

pub async fn update_task<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    id: &str,
    draft: &TaskDraft,
) -> Result<Task, SubmitError> {
    let variables = draft.to_update(id)?;
    let data = client.mutate::<UpdateTask>(tenant, &variables).await?;
    Ok(data.update_task.task)
}

/// Inline status dropdown
pub async fn set_task_status<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    id: &str,
    status: TaskStatus,
) -> ApiResult<TaskStatus> {
    let variables = TaskStatusVariables {
        id: id.to_string(),
        status,
    };
    let data = client.mutate::<UpdateTaskStatus>(tenant, &variables).await?;
    Ok(data.update_task.task.status)
}

/// Call only after the user confirmed
pub async fn delete_task<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    id: &str,
) -> ApiResult<bool> {
    let variables = TaskIdVariables { id: id.to_string() };
    let data = client.mutate::<DeleteTask>(tenant, &variables).await?;
    log::info!("deleted task {} [{}]", id, tenant);
    Ok(data.delete_task.ok.unwrap_or(false))
}
