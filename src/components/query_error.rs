//! Query Error Component

use leptos::prelude::*;
use scoped_graphql::ApiError;

/// Errored read with its message and a Retry action
#[component]
pub fn QueryError(
    error: ApiError,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="query-error" role="alert">
            <p class="error-text">{error.to_string()}</p>
            <button type="button" class="retry-btn" on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
