//! Scoped GraphQL
//!
//! Client-side plumbing for a multi-tenant GraphQL service:
//! - tenant: resolve and switch the active organization
//! - transport: one HTTP endpoint, tenant header on every request
//! - cache: per-tenant response cache with purge epochs
//! - client: typed query/mutate and mutation-driven invalidation
//! - live: view-bound queries that ignore late results

mod cache;
mod client;
mod error;
mod live;
mod operation;
mod tenant;
mod transport;

#[cfg(test)]
mod testing;

pub use cache::{CacheKey, FetchPolicy, ResponseCache};
pub use client::{ApiClient, Watcher};
pub use error::{ApiError, ApiResult};
pub use live::{LiveQuery, MountFlag, QueryState};
pub use operation::{NoVariables, Operation, OperationKind};
pub use tenant::{switch_tenant, FlagStore, MemoryFlagStore, TenantContext, TenantResolver, TenantSlug};
pub use transport::{
    GraphqlErrorEntry, GraphqlRequest, GraphqlResponse, HttpTransport, Transport,
    DEFAULT_TENANT_HEADER,
};
