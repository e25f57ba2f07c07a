//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use scoped_graphql::{ApiClient, FlagStore, HttpTransport, TenantContext, TenantResolver, TenantSlug};

use crate::config::AppConfig;
use crate::router::{self, Route};
use crate::storage::BrowserFlagStore;

pub type AppClient = ApiClient<HttpTransport>;
pub type AppTenants = TenantContext<BrowserFlagStore>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<AppClient, LocalStorage>,
    tenants: StoredValue<AppTenants, LocalStorage>,
    config: StoredValue<AppConfig>,
    /// Organization every request is scoped to - read
    pub tenant: ReadSignal<TenantSlug>,
    /// Organization every request is scoped to - write
    set_tenant: WriteSignal<TenantSlug>,
    /// Bumped on each organization switch; the routed page remounts - read
    pub generation: ReadSignal<u32>,
    /// Bumped on each organization switch - write
    set_generation: WriteSignal<u32>,
    /// Current page - read
    pub route: ReadSignal<Route>,
    /// Current page - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    /// Build the client and resolve the starting organization
    pub fn new(config: AppConfig, route: Route, hint: Option<String>) -> Self {
        let transport = HttpTransport::new(config.endpoint.clone())
            .with_tenant_header(config.tenant_header.clone());
        let fallback = TenantSlug::parse(&config.fallback_organization)
            .or_else(|| TenantSlug::parse(&AppConfig::default().fallback_organization))
            .unwrap_or_else(|| unreachable!("default fallback organization is not blank"));
        let resolver = TenantResolver::new(BrowserFlagStore, config.storage_key.clone(), fallback);
        let tenants = TenantContext::new(resolver, hint.as_deref());
        let (tenant, set_tenant) = signal(tenants.current_tenant());
        let (generation, set_generation) = signal(0u32);
        let (route, set_route) = signal(route);

        Self {
            client: StoredValue::new_local(ApiClient::new(transport)),
            tenants: StoredValue::new_local(tenants),
            config: StoredValue::new(config),
            tenant,
            set_tenant,
            generation,
            set_generation,
            route,
            set_route,
        }
    }

    pub fn client(&self) -> AppClient {
        self.client.get_value()
    }

    pub fn comment_author(&self) -> String {
        self.config.with_value(|c| c.comment_author.clone())
    }

    /// Go to `route`; an organization preview in effect carries over
    pub fn navigate(&self, route: Route) {
        self.go(route, None);
    }

    /// Go to `route` scoped to `slug` without persisting it
    pub fn navigate_with_hint(&self, route: Route, slug: &TenantSlug) {
        self.go(route, Some(slug));
    }

    /// Back/forward: the entry's own hint, or none, decides the organization
    pub fn restore(&self, route: Route, hint: Option<String>) {
        self.show(route, hint.as_deref());
    }

    /// Persist `slug`, drop every cached response, then open the dashboard
    pub fn switch_tenant(&self, slug: TenantSlug) {
        self.client.with_value(|client| {
            self.tenants
                .with_value(|tenants| scoped_graphql::switch_tenant(tenants, client, &slug))
        });
        self.set_tenant.set(slug);
        self.set_generation.update(|g| *g += 1);
        self.navigate(Route::Dashboard);
    }

    fn go(&self, route: Route, explicit: Option<&TenantSlug>) {
        let hint = self
            .tenants
            .with_value(|tenants| navigation_hint(tenants, explicit));
        let hint = hint.as_ref().map(TenantSlug::as_str);
        router::push(&route, hint);
        self.show(route, hint);
    }

    fn show(&self, route: Route, hint: Option<&str>) {
        let changed = self.tenants.with_value(|tenants| enter_entry(tenants, hint));
        if let Some(slug) = changed {
            log::info!("organization for this view: {}", slug);
            self.set_tenant.set(slug);
        }
        self.set_route.set(route);
    }
}

/// Hint recorded on a new history entry: the explicit one, else the preview
/// still in effect
fn navigation_hint<S: FlagStore>(
    tenants: &TenantContext<S>,
    explicit: Option<&TenantSlug>,
) -> Option<TenantSlug> {
    explicit.cloned().or_else(|| tenants.active_hint())
}

/// Make the organization a history entry calls for current.
/// Returns it when it differs from the previous one.
fn enter_entry<S: FlagStore>(tenants: &TenantContext<S>, hint: Option<&str>) -> Option<TenantSlug> {
    let slug = tenants.resolver().resolve(hint);
    tenants.apply_hint(&slug).then_some(slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use scoped_graphql::MemoryFlagStore;

    fn slug(s: &str) -> TenantSlug {
        TenantSlug::parse(s).unwrap()
    }

    fn tenants(store: Rc<MemoryFlagStore>) -> TenantContext<Rc<MemoryFlagStore>> {
        TenantContext::new(
            TenantResolver::new(store, "orgSlug", slug("default-organization")),
            None,
        )
    }

    #[test]
    fn test_preview_survives_in_app_navigation() {
        let tenants = tenants(Rc::new(MemoryFlagStore::new()));

        // Preview on the organization switcher
        let hint = navigation_hint(&tenants, Some(&slug("acme")));
        assert_eq!(enter_entry(&tenants, hint.as_ref().map(TenantSlug::as_str)), Some(slug("acme")));

        // project card link from the previewed dashboard
        let hint = navigation_hint(&tenants, None);
        assert_eq!(hint, Some(slug("acme")));
        assert_eq!(enter_entry(&tenants, hint.as_ref().map(TenantSlug::as_str)), None);
        assert_eq!(tenants.current_tenant(), slug("acme"));
    }

    #[test]
    fn test_entry_without_hint_returns_to_persisted() {
        let store = Rc::new(MemoryFlagStore::new());
        store.set("orgSlug", "globex");
        let tenants = tenants(store);
        enter_entry(&tenants, Some("acme"));

        // back to an entry recorded before the preview
        assert_eq!(enter_entry(&tenants, None), Some(slug("globex")));
        assert_eq!(navigation_hint(&tenants, None), None);
    }

    #[test]
    fn test_selected_organization_is_not_a_hint() {
        let tenants = tenants(Rc::new(MemoryFlagStore::new()));
        enter_entry(&tenants, Some("acme"));
        tenants.select_tenant(&slug("acme"));

        assert_eq!(navigation_hint(&tenants, None), None);
        assert_eq!(enter_entry(&tenants, None), None);
    }
}
