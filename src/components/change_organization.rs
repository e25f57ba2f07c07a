//! Change Organization Component
//!
//! Lists organizations. Select persists the choice and starts over from an
//! empty cache; Preview opens the dashboard under that organization once.

use leptos::prelude::*;
use scoped_graphql::{NoVariables, QueryState, TenantSlug};

use super::QueryError;
use crate::api::organization::GetOrganizations;
use crate::context::AppContext;
use crate::models::Organization;
use crate::query::use_live_query;
use crate::router::Route;

#[component]
pub fn ChangeOrganization() -> impl IntoView {
    let organizations = use_live_query::<GetOrganizations>(NoVariables {});

    view! {
        <div class="change-organization">
            <h1>"Change Organization"</h1>
            {move || match organizations.state.get() {
                QueryState::Loading => view! { <p class="loading">"Loading organizations..."</p> }.into_any(),
                QueryState::Errored(error) => view! {
                    <QueryError error=error on_retry=move |_: ()| organizations.refetch() />
                }.into_any(),
                QueryState::Ready(data) if data.organizations.is_empty() => view! {
                    <p class="empty">"No organizations available."</p>
                }.into_any(),
                QueryState::Ready(data) => view! {
                    <ul class="organization-list">
                        {data.organizations.into_iter().map(|org| view! { <OrganizationRow org=org /> }).collect_view()}
                    </ul>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OrganizationRow(org: Organization) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let slug = StoredValue::new(TenantSlug::parse(&org.slug));
    let is_current = move || slug.get_value().is_some_and(|s| ctx.tenant.get() == s);

    view! {
        <li class=move || if is_current() { "organization current" } else { "organization" }>
            <span class="organization-name">{org.name}</span>
            <code class="organization-slug">{org.slug}</code>
            <Show when=is_current>
                <span class="current-marker">"Current"</span>
            </Show>
            <button
                type="button"
                disabled=move || slug.get_value().is_none() || is_current()
                on:click=move |_| {
                    if let Some(slug) = slug.get_value() {
                        ctx.switch_tenant(slug);
                    }
                }
            >
                "Select"
            </button>
            <button
                type="button"
                class="preview-btn"
                disabled=move || slug.get_value().is_none()
                on:click=move |_| {
                    if let Some(slug) = slug.get_value() {
                        ctx.navigate_with_hint(Route::Dashboard, &slug);
                    }
                }
            >
                "Preview"
            </button>
        </li>
    }
}
