//! Response Cache
//!
//! Stores raw `data` payloads per (tenant, operation, variables).
//! A purge drops everything and advances the epoch so in-flight responses
//! started before the purge can never write back.

use std::collections::HashMap;

use serde_json::Value;

use crate::tenant::TenantSlug;

/// How a read treats previously cached results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Always hit the network, store the result
    #[default]
    NetworkOnly,
    /// Serve a cached result when present
    CacheFirst,
    /// Hit the network and never touch the cache
    NoCache,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub tenant: TenantSlug,
    pub operation: &'static str,
    pub variables: String,
}

impl CacheKey {
    pub fn new(tenant: &TenantSlug, operation: &'static str, variables: &Value) -> Self {
        Self {
            tenant: tenant.clone(),
            operation,
            variables: variables.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: HashMap<CacheKey, Value>,
    epoch: u64,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn get(&self, key: &CacheKey) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Store `data` only if no purge happened since `started_epoch`
    pub fn insert(&mut self, key: CacheKey, data: Value, started_epoch: u64) -> bool {
        if started_epoch != self.epoch {
            return false;
        }
        self.entries.insert(key, data);
        true
    }

    /// Drop entries for the named operations, across all tenants
    pub fn evict_operations(&mut self, operations: &[&str]) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|key, _| !operations.contains(&key.operation));
        before - self.entries.len()
    }

    /// Drop every entry. Returns how many were dropped.
    pub fn purge_all(&mut self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        self.epoch += 1;
        dropped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn holds_tenant(&self, tenant: &TenantSlug) -> bool {
        self.entries.keys().any(|k| k.tenant == *tenant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(tenant: &str, op: &'static str) -> CacheKey {
        CacheKey::new(&TenantSlug::parse(tenant).unwrap(), op, &json!({}))
    }

    #[test]
    fn test_keys_are_tenant_scoped() {
        let mut cache = ResponseCache::new();
        cache.insert(key("acme", "GetProjects"), json!({ "projects": [] }), 0);
        assert!(cache.get(&key("acme", "GetProjects")).is_some());
        assert!(cache.get(&key("default-organization", "GetProjects")).is_none());
    }

    #[test]
    fn test_purge_drops_everything_and_advances_epoch() {
        let mut cache = ResponseCache::new();
        cache.insert(key("acme", "GetProjects"), json!(1), 0);
        cache.insert(key("acme", "GetOrganizations"), json!(2), 0);

        assert_eq!(cache.purge_all(), 2);
        assert!(cache.is_empty());
        assert_eq!(cache.epoch(), 1);
    }

    #[test]
    fn test_insert_from_before_purge_is_refused() {
        let mut cache = ResponseCache::new();
        let started = cache.epoch();
        cache.purge_all();

        assert!(!cache.insert(key("acme", "GetProjects"), json!(1), started));
        assert!(cache.is_empty());
        assert!(cache.insert(key("acme", "GetProjects"), json!(1), cache.epoch()));
    }

    #[test]
    fn test_evict_operations() {
        let mut cache = ResponseCache::new();
        cache.insert(key("acme", "GetProjects"), json!(1), 0);
        cache.insert(key("globex", "GetProjects"), json!(1), 0);
        cache.insert(key("acme", "GetOrganizations"), json!(2), 0);

        assert_eq!(cache.evict_operations(&["GetProjects", "GetProjectDetails"]), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.holds_tenant(&TenantSlug::parse("acme").unwrap()));
        assert!(!cache.holds_tenant(&TenantSlug::parse("globex").unwrap()));
    }
}
