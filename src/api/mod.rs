//! GraphQL Operations
//!
//! Typed bindings to the remote service, organized by entity.
//! Every mutation names the reads it makes stale; the client refetches them.

pub mod comment;
pub mod organization;
pub mod project;
pub mod task;


/// Operation names used as invalidation keys
pub const GET_PROJECTS: &str = "GetProjects";
pub const GET_PROJECT_DETAILS: &str = "GetProjectDetails";
pub const GET_ORGANIZATIONS: &str = "GetOrganizations";
