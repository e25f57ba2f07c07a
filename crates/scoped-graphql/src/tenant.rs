//! Tenant Context
//!
//! Resolves which organization every request is scoped to.
//! Precedence: navigation hint > persisted flag > fallback.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::transport::Transport;

/// Organization slug used as the tenant selector
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantSlug(String);

impl TenantSlug {
    /// Trimmed slug, or `None` when blank
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TenantSlug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Process-wide key-value flag surviving reloads.
///
/// Writes never fail from the caller's point of view; implementations log and move on.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// In-memory flag store for hosts without browser storage
#[derive(Debug, Default)]
pub struct MemoryFlagStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryFlagStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FlagStore for MemoryFlagStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

impl<S: FlagStore + ?Sized> FlagStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }
}

/// Combines the persisted flag with the fallback slug
pub struct TenantResolver<S> {
    store: S,
    key: String,
    fallback: TenantSlug,
}

impl<S: FlagStore> TenantResolver<S> {
    pub fn new(store: S, key: impl Into<String>, fallback: TenantSlug) -> Self {
        Self {
            store,
            key: key.into(),
            fallback,
        }
    }

    /// Always yields a slug; blank hints and blank flags are skipped.
    pub fn resolve(&self, hint: Option<&str>) -> TenantSlug {
        if let Some(slug) = hint.and_then(TenantSlug::parse) {
            return slug;
        }
        if let Some(slug) = self.persisted() {
            return slug;
        }
        self.fallback.clone()
    }

    pub fn persisted(&self) -> Option<TenantSlug> {
        self.store.get(&self.key).as_deref().and_then(TenantSlug::parse)
    }

    pub fn persist(&self, slug: &TenantSlug) {
        self.store.set(&self.key, slug.as_str());
    }
}

/// The active tenant for this session
pub struct TenantContext<S> {
    resolver: TenantResolver<S>,
    current: RefCell<TenantSlug>,
}

impl<S: FlagStore> TenantContext<S> {
    /// Resolve the starting tenant, honouring a one-shot navigation hint
    pub fn new(resolver: TenantResolver<S>, hint: Option<&str>) -> Self {
        let current = resolver.resolve(hint);
        log::info!("active organization: {}", current);
        Self {
            resolver,
            current: RefCell::new(current),
        }
    }

    pub fn current_tenant(&self) -> TenantSlug {
        self.current.borrow().clone()
    }

    /// Persist `slug` as the default for future loads and make it current
    pub fn select_tenant(&self, slug: &TenantSlug) {
        self.resolver.persist(slug);
        *self.current.borrow_mut() = slug.clone();
    }

    /// Make `slug` current without persisting it. Returns whether the tenant changed.
    pub fn apply_hint(&self, slug: &TenantSlug) -> bool {
        let mut current = self.current.borrow_mut();
        if *current == *slug {
            return false;
        }
        *current = slug.clone();
        true
    }

    /// The current tenant when it comes from a navigation hint rather than
    /// the persisted choice or fallback
    pub fn active_hint(&self) -> Option<TenantSlug> {
        let current = self.current_tenant();
        (current != self.resolver.resolve(None)).then_some(current)
    }

    pub fn resolver(&self) -> &TenantResolver<S> {
        &self.resolver
    }
}

/// Persist the new tenant, then purge every cached response.
///
/// Callers navigate only after this returns, so the next read always goes to the network.
pub fn switch_tenant<S: FlagStore, T: Transport>(
    tenants: &TenantContext<S>,
    client: &ApiClient<T>,
    slug: &TenantSlug,
) {
    let previous = tenants.current_tenant();
    tenants.select_tenant(slug);
    let purged = client.purge_all();
    log::info!(
        "switched organization {} -> {} ({} cached responses purged)",
        previous,
        slug,
        purged
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    fn slug(s: &str) -> TenantSlug {
        TenantSlug::parse(s).unwrap()
    }

    fn resolver(store: Rc<MemoryFlagStore>) -> TenantResolver<Rc<MemoryFlagStore>> {
        TenantResolver::new(store, "orgSlug", slug("default-organization"))
    }

    #[test]
    fn test_slug_is_trimmed_and_rejects_blank() {
        assert_eq!(slug("  acme ").as_str(), "acme");
        assert!(TenantSlug::parse("   ").is_none());
        assert!(TenantSlug::parse("").is_none());
    }

    #[test]
    fn test_fallback_when_nothing_persisted() {
        let r = resolver(Rc::new(MemoryFlagStore::new()));
        assert_eq!(r.resolve(None), slug("default-organization"));
    }

    #[test]
    fn test_persisted_beats_fallback() {
        let store = Rc::new(MemoryFlagStore::new());
        store.set("orgSlug", "acme");
        assert_eq!(resolver(store).resolve(None), slug("acme"));
    }

    #[test]
    fn test_hint_beats_persisted() {
        let store = Rc::new(MemoryFlagStore::new());
        store.set("orgSlug", "acme");
        assert_eq!(resolver(store).resolve(Some("globex")), slug("globex"));
    }

    #[test]
    fn test_blank_values_are_skipped() {
        let store = Rc::new(MemoryFlagStore::new());
        store.set("orgSlug", "  ");
        assert_eq!(resolver(store).resolve(Some("")), slug("default-organization"));
    }

    #[test]
    fn test_select_persists_and_hint_does_not() {
        let store = Rc::new(MemoryFlagStore::new());
        let ctx = TenantContext::new(resolver(store.clone()), None);

        assert!(ctx.apply_hint(&slug("globex")));
        assert_eq!(ctx.current_tenant(), slug("globex"));
        assert_eq!(store.get("orgSlug"), None);
        assert!(!ctx.apply_hint(&slug("globex")));

        ctx.select_tenant(&slug("acme"));
        assert_eq!(ctx.current_tenant(), slug("acme"));
        assert_eq!(store.get("orgSlug").as_deref(), Some("acme"));

        assert_eq!(ctx.active_hint(), None);

        // reload: fresh context over the same store
        let reloaded = TenantContext::new(resolver(store), None);
        assert_eq!(reloaded.current_tenant(), slug("acme"));
    }

    #[test]
    fn test_active_hint_only_while_previewing() {
        let store = Rc::new(MemoryFlagStore::new());
        store.set("orgSlug", "acme");
        let ctx = TenantContext::new(resolver(store), Some("globex"));
        assert_eq!(ctx.active_hint(), Some(slug("globex")));

        ctx.apply_hint(&slug("acme"));
        assert_eq!(ctx.active_hint(), None);
    }
}
