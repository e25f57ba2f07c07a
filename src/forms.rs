//! Form Drafts
//!
//! Local field state for the create/edit forms and its conversion into
//! mutation variables. The only validation is a presence check on the one
//! required field of each form.

use chrono::NaiveDate;
use scoped_graphql::ApiError;
use thiserror::Error;

use crate::api::comment::AddCommentVariables;
use crate::api::project::{CreateProjectVariables, UpdateProjectVariables};
use crate::api::task::{CreateTaskVariables, UpdateTaskVariables};
use crate::models::{Project, ProjectStatus, Task, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Project name is required.")]
    ProjectNameRequired,
    #[error("Task title is required.")]
    TaskTitleRequired,
    #[error("Comment cannot be empty.")]
    CommentRequired,
    #[error("Due date must be a date (YYYY-MM-DD).")]
    InvalidDueDate,
}

/// Why a submit did not go through
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    /// Caught locally; the transport was never called
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn required(value: &str, missing: ValidationError) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(missing)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Blank -> absent
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn due_date(value: &str) -> Result<Option<NaiveDate>, ValidationError> {
    match optional(value) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ValidationError::InvalidDueDate),
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub status: ProjectStatus,
    /// As typed into the date input, `YYYY-MM-DD` or blank
    pub due_date: String,
}

impl ProjectDraft {
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone().unwrap_or_default(),
            status: project.status,
            due_date: project
                .due_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn to_create(&self) -> Result<CreateProjectVariables, ValidationError> {
        Ok(CreateProjectVariables {
            name: required(&self.name, ValidationError::ProjectNameRequired)?,
            description: optional(&self.description),
            due_date: due_date(&self.due_date)?,
        })
    }

    /// Every field is sent; the description may be cleared, the due date may not
    pub fn to_update(&self, id: &str) -> Result<UpdateProjectVariables, ValidationError> {
        Ok(UpdateProjectVariables {
            id: id.to_string(),
            name: Some(required(&self.name, ValidationError::ProjectNameRequired)?),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
            due_date: due_date(&self.due_date)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub assignee_email: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            status: task.status,
            assignee_email: task.assignee_email.clone().unwrap_or_default(),
        }
    }

    pub fn to_create(&self, project_id: &str) -> Result<CreateTaskVariables, ValidationError> {
        Ok(CreateTaskVariables {
            title: required(&self.title, ValidationError::TaskTitleRequired)?,
            project_id: project_id.to_string(),
            description: optional(&self.description),
            assignee_email: optional(&self.assignee_email),
        })
    }

    pub fn to_update(&self, id: &str) -> Result<UpdateTaskVariables, ValidationError> {
        Ok(UpdateTaskVariables {
            id: id.to_string(),
            title: Some(required(&self.title, ValidationError::TaskTitleRequired)?),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
            assignee_email: optional(&self.assignee_email),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentDraft {
    pub content: String,
}

impl CommentDraft {
    pub fn to_create(&self, task_id: &str, author_email: &str) -> Result<AddCommentVariables, ValidationError> {
        Ok(AddCommentVariables {
            content: required(&self.content, ValidationError::CommentRequired)?,
            author_email: author_email.to_string(),
            task_id: task_id.to_string(),
        })
    }
}
