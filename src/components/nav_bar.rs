//! Navigation Bar Component

use leptos::prelude::*;

use super::Link;
use crate::context::AppContext;
use crate::router::Route;

/// Top bar with the active organization
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <header class="nav-bar">
            <Link to=Route::Dashboard class="brand">"Project Board"</Link>
            <nav class="nav-links">
                <Link to=Route::Dashboard>"Projects"</Link>
                <Link to=Route::ChangeOrganization class="org-link">
                    "Organization: "
                    <strong>{move || ctx.tenant.get().to_string()}</strong>
                </Link>
            </nav>
        </header>
    }
}
