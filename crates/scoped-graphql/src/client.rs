//! GraphQL Client
//!
//! Reads and writes go through one client; the tenant is an explicit argument
//! on every call. A successful mutation evicts the reads it declares stale and
//! re-issues every live view watching one of them before returning.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use async_trait::async_trait;
use serde_json::Value;

use crate::cache::{CacheKey, FetchPolicy, ResponseCache};
use crate::error::{ApiError, ApiResult};
use crate::operation::{Operation, OperationKind};
use crate::tenant::TenantSlug;
use crate::transport::{GraphqlRequest, Transport};

/// A mounted view that re-reads when its operation is invalidated
#[async_trait(?Send)]
pub trait Watcher {
    fn operation(&self) -> &'static str;
    fn tenant(&self) -> &TenantSlug;
    /// False once unmounted or errored
    fn wants_refetch(&self) -> bool;
    async fn revalidate(&self);
}

struct ClientInner<T> {
    transport: T,
    cache: RefCell<ResponseCache>,
    watchers: RefCell<Vec<Weak<dyn Watcher>>>,
}

/// Shared handle; clones point at the same cache and watcher registry
pub struct ApiClient<T> {
    inner: Rc<ClientInner<T>>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            inner: Rc::new(ClientInner {
                transport,
                cache: RefCell::new(ResponseCache::new()),
                watchers: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Run a read operation under `tenant`
    pub async fn query<Op: Operation>(
        &self,
        tenant: &TenantSlug,
        variables: &Op::Variables,
        policy: FetchPolicy,
    ) -> ApiResult<Op::Data> {
        debug_assert_eq!(Op::KIND, OperationKind::Query);
        let variables = encode::<Op>(variables)?;
        let key = CacheKey::new(tenant, Op::NAME, &variables);

        if policy == FetchPolicy::CacheFirst {
            let hit = self.inner.cache.borrow().get(&key).cloned();
            if let Some(data) = hit {
                log::debug!("{} [{}] served from cache", Op::NAME, tenant);
                return decode::<Op>(data);
            }
        }

        let started = self.inner.cache.borrow().epoch();
        let data = self.send::<Op>(tenant, variables).await?;
        let decoded = decode::<Op>(data.clone())?;

        if policy != FetchPolicy::NoCache {
            let stored = self.inner.cache.borrow_mut().insert(key, data, started);
            if !stored {
                log::debug!("{} [{}] finished after a purge, not cached", Op::NAME, tenant);
            }
        }
        Ok(decoded)
    }

    /// Run a mutation, then refetch whatever it invalidates.
    ///
    /// Refetches complete before this returns; on failure nothing is refetched.
    pub async fn mutate<Op: Operation>(
        &self,
        tenant: &TenantSlug,
        variables: &Op::Variables,
    ) -> ApiResult<Op::Data> {
        debug_assert_eq!(Op::KIND, OperationKind::Mutation);
        let variables = encode::<Op>(variables)?;
        let data = self.send::<Op>(tenant, variables).await?;
        let decoded = decode::<Op>(data)?;
        self.invalidate(tenant, Op::INVALIDATES).await;
        Ok(decoded)
    }

    /// Evict `operations` from the cache and re-issue live watchers of them under `tenant`
    pub async fn invalidate(&self, tenant: &TenantSlug, operations: &[&str]) {
        if operations.is_empty() {
            return;
        }
        let evicted = self.inner.cache.borrow_mut().evict_operations(operations);
        let targets = self.live_watchers(tenant, operations);
        log::debug!(
            "invalidated {:?} [{}]: {} evicted, {} views refetching",
            operations,
            tenant,
            evicted,
            targets.len()
        );
        for watcher in targets {
            watcher.revalidate().await;
        }
    }

    /// Register a view for invalidation-driven refetches
    pub fn watch(&self, watcher: Weak<dyn Watcher>) {
        let mut watchers = self.inner.watchers.borrow_mut();
        watchers.retain(|w| w.strong_count() > 0);
        watchers.push(watcher);
    }

    /// Discard every cached response. Returns how many were dropped.
    pub fn purge_all(&self) -> usize {
        let dropped = self.inner.cache.borrow_mut().purge_all();
        log::info!("response cache purged ({} entries)", dropped);
        dropped
    }

    pub fn cached_responses(&self) -> usize {
        self.inner.cache.borrow().len()
    }

    pub fn holds_tenant(&self, tenant: &TenantSlug) -> bool {
        self.inner.cache.borrow().holds_tenant(tenant)
    }

    fn live_watchers(&self, tenant: &TenantSlug, operations: &[&str]) -> Vec<Rc<dyn Watcher>> {
        let mut watchers = self.inner.watchers.borrow_mut();
        watchers.retain(|w| w.strong_count() > 0);
        watchers
            .iter()
            .filter_map(|w| w.upgrade())
            .filter(|w| {
                w.wants_refetch() && w.tenant() == tenant && operations.contains(&w.operation())
            })
            .collect()
    }

    async fn send<Op: Operation>(&self, tenant: &TenantSlug, variables: Value) -> ApiResult<Value> {
        let request = GraphqlRequest {
            query: Op::DOCUMENT,
            operation_name: Op::NAME,
            variables,
        };
        log::debug!("{} [{}]", Op::NAME, tenant);
        let result = self
            .inner
            .transport
            .execute(tenant, &request)
            .await
            .and_then(|response| response.into_data());
        if let Err(e) = &result {
            log::warn!("{} [{}] failed: {}", Op::NAME, tenant, e);
        }
        result
    }
}

fn encode<Op: Operation>(variables: &Op::Variables) -> ApiResult<Value> {
    serde_json::to_value(variables).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<Op: Operation>(data: Value) -> ApiResult<Op::Data> {
    serde_json::from_value(data).map_err(|e| ApiError::Decode(format!("{}: {}", Op::NAME, e)))
}
