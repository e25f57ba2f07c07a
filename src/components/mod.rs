//! UI Components
//!
//! Pages, forms and the small pieces they share.

mod add_comment_form;
mod change_organization;
mod create_project_form;
mod create_task_form;
mod dashboard;
mod delete_confirm_button;
mod edit_project_form;
mod edit_task_form;
mod link;
mod nav_bar;
mod not_found;
mod project_page;
mod query_error;
mod status_select;
mod task_card;

pub use add_comment_form::AddCommentForm;
pub use change_organization::ChangeOrganization;
pub use create_project_form::CreateProjectForm;
pub use create_task_form::CreateTaskForm;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_project_form::EditProjectForm;
pub use edit_task_form::EditTaskForm;
pub use link::Link;
pub use nav_bar::NavBar;
pub use not_found::NotFound;
pub use project_page::ProjectPage;
pub use query_error::QueryError;
pub use status_select::StatusSelect;
pub use task_card::TaskCard;
