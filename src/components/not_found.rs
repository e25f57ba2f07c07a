//! Not Found Component

use leptos::prelude::*;

use super::Link;
use crate::router::Route;

#[component]
pub fn NotFound(path: String) -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
            <p>"Nothing lives at " <code>{path}</code> "."</p>
            <Link to=Route::Dashboard>"Back to projects"</Link>
        </div>
    }
}
