//! Delete Confirm Button Component
//!
//! Inline two-step delete: nothing is sent until the user confirms.

use leptos::prelude::*;

/// Where the button is in its confirm cycle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmStep {
    #[default]
    Idle,
    Confirming,
}

impl ConfirmStep {
    pub fn ask(self) -> Self {
        ConfirmStep::Confirming
    }

    pub fn cancel(self) -> Self {
        ConfirmStep::Idle
    }

    /// Next step, and whether the delete should run
    pub fn confirm(self) -> (Self, bool) {
        match self {
            ConfirmStep::Confirming => (ConfirmStep::Idle, true),
            ConfirmStep::Idle => (ConfirmStep::Idle, false),
        }
    }
}

/// Inline delete confirmation button
///
/// Shows a "Delete" button initially. When clicked, shows the prompt with
/// confirm/cancel buttons.
///
/// # Arguments
/// * `prompt` - Question shown in the confirm step
/// * `disabled` - True while a request is in flight
/// * `on_confirm` - Runs once per confirmed click
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] prompt: String,
    #[prop(into)] disabled: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (step, set_step) = signal(ConfirmStep::Idle);

    view! {
        <Show when=move || step.get() == ConfirmStep::Idle>
            <button
                type="button"
                class="delete-btn"
                disabled=move || disabled.get()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_step.update(|s| *s = s.ask());
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || step.get() == ConfirmStep::Confirming>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    type="button"
                    class="confirm-btn"
                    disabled=move || disabled.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let (next, run) = step.get_untracked().confirm();
                        set_step.set(next);
                        if run {
                            on_confirm.run(());
                        }
                    }
                >
                    "Yes, delete"
                </button>
                <button
                    type="button"
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_step.update(|s| *s = s.cancel());
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_requires_ask_first() {
        assert_eq!(ConfirmStep::Idle.confirm(), (ConfirmStep::Idle, false));
        let asked = ConfirmStep::Idle.ask();
        assert_eq!(asked, ConfirmStep::Confirming);
        assert_eq!(asked.confirm(), (ConfirmStep::Idle, true));
    }

    #[test]
    fn test_cancel_returns_to_idle() {
        let step = ConfirmStep::Idle.ask().cancel();
        assert_eq!(step, ConfirmStep::Idle);
        assert_eq!(step.confirm().1, false);
    }
}
