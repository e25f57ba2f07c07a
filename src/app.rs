//! Project Board App
//!
//! Root component: navigation bar plus the routed page.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{ChangeOrganization, Dashboard, NavBar, NotFound, ProjectPage};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::router::{self, Route};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (route, hint) = router::initial_location();
    let ctx = AppContext::new(config, route, hint);

    // Provide context to all children
    provide_context(ctx);

    // Back/forward
    let _ = window_event_listener(ev::popstate, move |ev: web_sys::PopStateEvent| {
        let (route, hint) = router::restored_location(&ev.state());
        ctx.restore(route, hint);
    });

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || {
                    // every page remounts when the organization changes
                    let generation = ctx.generation.get();
                    let tenant = ctx.tenant.get();
                    let route = ctx.route.get();
                    log::debug!("render {:?} [{}] generation {}", route, tenant, generation);
                    match route {
                        Route::Dashboard => view! { <Dashboard /> }.into_any(),
                        Route::Project(id) => view! { <ProjectPage id=id /> }.into_any(),
                        Route::ChangeOrganization => view! { <ChangeOrganization /> }.into_any(),
                        Route::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
                    }
                }}
            </main>
        </div>
    }
}
