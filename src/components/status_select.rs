//! Status Select Component
//!
//! Dropdown over a fixed status set.

use leptos::prelude::*;

use crate::models::StatusChoice;

/// Status dropdown; `on_change` only fires with a member of the set
#[component]
pub fn StatusSelect<S>(
    #[prop(into)] value: Signal<S>,
    #[prop(into)] on_change: Callback<S>,
    #[prop(into, optional)] disabled: Signal<bool>,
) -> impl IntoView
where
    S: StatusChoice,
{
    view! {
        <select
            class="status-select"
            disabled=move || disabled.get()
            prop:value=move || value.get().wire()
            on:change=move |ev| {
                if let Some(status) = S::from_wire(&event_target_value(&ev)) {
                    on_change.run(status);
                }
            }
        >
            {S::OPTIONS.iter().map(|option| {
                let option = *option;
                view! {
                    <option value=option.wire() selected=move || value.get() == option>
                        {option.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
