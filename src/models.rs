//! Frontend Models
//!
//! Typed records matching the GraphQL schema. Decoding happens once, at the
//! transport boundary; a response that doesn't fit these shapes is an error.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Project status (fixed set)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    OnHold,
    Cancelled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::Active,
        ProjectStatus::Completed,
        ProjectStatus::OnHold,
        ProjectStatus::Cancelled,
    ];

    /// Wire value
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Completed => "COMPLETED",
            ProjectStatus::OnHold => "ON_HOLD",
            ProjectStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Cancelled => "Cancelled",
        }
    }
}

/// Task status (fixed set)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Todo => "TODO",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Done => "DONE",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }
}

/// A fixed status set rendered as a dropdown
pub trait StatusChoice: Copy + PartialEq + Send + Sync + 'static {
    const OPTIONS: &'static [Self];
    fn wire(self) -> &'static str;
    fn label(self) -> &'static str;

    fn from_wire(value: &str) -> Option<Self> {
        Self::OPTIONS.iter().copied().find(|s| s.wire() == value)
    }
}

impl StatusChoice for ProjectStatus {
    const OPTIONS: &'static [Self] = &ProjectStatus::ALL;

    fn wire(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        ProjectStatus::label(self)
    }
}

impl StatusChoice for TaskStatus {
    const OPTIONS: &'static [Self] = &TaskStatus::ALL;

    fn wire(self) -> &'static str {
        self.as_str()
    }

    fn label(self) -> &'static str {
        TaskStatus::label(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// Project as listed on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
    pub task_count: i32,
    /// Percentage of DONE tasks, 0-100
    pub completion_rate: f64,
}

/// Project with its tasks and their comments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub due_date: Option<NaiveDate>,
    pub task_count: i32,
    pub completion_rate: f64,
    pub tasks: Vec<Task>,
}

impl ProjectDetail {
    /// Summary view used by the edit form
    pub fn summary(&self) -> Project {
        Project {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
            due_date: self.due_date,
            task_count: self.task_count,
            completion_rate: self.completion_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub assignee_email: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Comments are create-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub author_email: String,
    pub created_at: DateTime<Utc>,
}

/// Human form of a completion percentage
pub fn format_percent(rate: f64) -> String {
    format!("{}%", rate.clamp(0.0, 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(serde_json::to_value(ProjectStatus::OnHold).unwrap(), json!("ON_HOLD"));
        assert_eq!(serde_json::to_value(TaskStatus::InProgress).unwrap(), json!("IN_PROGRESS"));
        assert_eq!(ProjectStatus::from_wire("CANCELLED"), Some(ProjectStatus::Cancelled));
        assert_eq!(TaskStatus::from_wire("DONE"), Some(TaskStatus::Done));
        assert_eq!(TaskStatus::from_wire("done"), None);
    }

    #[test]
    fn test_status_choice_options() {
        assert_eq!(<TaskStatus as StatusChoice>::OPTIONS.len(), 3);
        assert_eq!(ProjectStatus::from_wire("ON_HOLD"), Some(ProjectStatus::OnHold));
        assert_eq!(StatusChoice::label(ProjectStatus::OnHold), "On Hold");
    }

    #[test]
    fn test_project_decodes_from_wire() {
        let project: Project = serde_json::from_value(json!({
            "id": "7",
            "name": "Alpha",
            "description": "first",
            "status": "ACTIVE",
            "dueDate": "2025-01-01",
            "taskCount": 2,
            "completionRate": 50.0
        }))
        .unwrap();
        assert_eq!(project.due_date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(project.task_count, 2);
        assert_eq!(format_percent(project.completion_rate), "50%");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result: Result<Project, _> = serde_json::from_value(json!({
            "id": "7", "name": "Alpha", "description": null, "status": "ARCHIVED",
            "dueDate": null, "taskCount": 0, "completionRate": 0
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_task_with_comments() {
        let task: Task = serde_json::from_value(json!({
            "id": "3",
            "title": "Write docs",
            "description": "",
            "status": "IN_PROGRESS",
            "assigneeEmail": null,
            "comments": [{
                "id": "1",
                "content": "started",
                "authorEmail": "user@example.com",
                "createdAt": "2025-01-02T10:30:00.123456+00:00"
            }]
        }))
        .unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.comments[0].created_at.format("%Y-%m-%d").to_string(), "2025-01-02");
    }

    #[test]
    fn test_percent_is_clamped_and_rounded() {
        assert_eq!(format_percent(66.666), "67%");
        assert_eq!(format_percent(-3.0), "0%");
        assert_eq!(format_percent(140.0), "100%");
    }
}
