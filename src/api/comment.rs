//! Comment Operations
//!
//! Comments are create-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use scoped_graphql::{ApiClient, Operation, OperationKind, TenantSlug, Transport};

use super::GET_PROJECT_DETAILS;
use crate::forms::{CommentDraft, SubmitError};
use crate::models::Comment;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentVariables {
    pub content: String,
    pub author_email: String,
    pub task_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommentPayload {
    pub comment: Comment,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentData {
    pub add_comment_to_task: CommentPayload,
}

pub struct AddCommentToTask;

impl Operation for AddCommentToTask {
    const NAME: &'static str = "AddCommentToTask";
    const KIND: OperationKind = OperationKind::Mutation;
    const DOCUMENT: &'static str = r#"
        mutation AddCommentToTask($content: String!, $authorEmail: String!, $taskId: ID!) {
            addCommentToTask(content: $content, authorEmail: $authorEmail, taskId: $taskId) {
                comment {
                    id
                    content
                    authorEmail
                    createdAt
                }
            }
        }
    "#;
    const INVALIDATES: &'static [&'static str] = &[GET_PROJECT_DETAILS];
    type Variables = AddCommentVariables;
    type Data = AddCommentData;
}

/// `author_email` is the configured placeholder, not a user identity
pub async fn add_comment<T: Transport>(
    client: &ApiClient<T>,
    tenant: &TenantSlug,
    task_id: &str,
    author_email: &str,
    draft: &CommentDraft,
) -> Result<Comment, SubmitError> {
    let variables = draft.to_create(task_id, author_email)?;
    let data = client.mutate::<AddCommentToTask>(tenant, &variables).await?;
    Ok(data.add_comment_to_task.comment)
}

/// Display form of a comment timestamp
pub fn comment_date(created_at: &DateTime<Utc>) -> String {
    created_at.format("%Y-%m-%d").to_string()
}
