//! Edit Project Form Component
//!
//! Overlay editor for an existing project, with a confirm-guarded delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{DeleteConfirmButton, StatusSelect};
use crate::api::project::{delete_project, update_project};
use crate::context::AppContext;
use crate::forms::ProjectDraft;
use crate::models::{Project, ProjectStatus};

#[component]
pub fn EditProjectForm(
    project: Project,
    /// Cancel or saved
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_deleted: Callback<()>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = StoredValue::new(project.id.clone());

    let (draft, set_draft) = signal(ProjectDraft::from_project(&project));
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let client = ctx.client();
        let tenant = ctx.tenant.get_untracked();
        let submitted = draft.get_untracked();
        let id = id.get_value();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = update_project(&client, &tenant, &id, &submitted).await;
            set_pending.set(false);
            match result {
                Ok(_) => on_close.run(()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    let on_delete = move |_: ()| {
        let client = ctx.client();
        let tenant = ctx.tenant.get_untracked();
        let id = id.get_value();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            let result = delete_project(&client, &tenant, &id).await;
            set_pending.set(false);
            match result {
                Ok(_) => on_deleted.run(()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="overlay" on:click=move |_| on_close.run(())>
            <form
                class="entity-form edit-project-form"
                on:submit=on_submit
                on:click=|ev| ev.stop_propagation()
            >
                <h2>"Edit Project"</h2>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || draft.get().name
                        on:input=move |ev| set_draft.update(|d| d.name = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Description"
                    <textarea
                        prop:value=move || draft.get().description
                        on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label>
                    "Status"
                    <StatusSelect<ProjectStatus>
                        value=Signal::derive(move || draft.get().status)
                        on_change=move |status: ProjectStatus| set_draft.update(|d| d.status = status)
                    />
                </label>
                <label>
                    "Due date"
                    <input
                        type="date"
                        prop:value=move || draft.get().due_date
                        on:input=move |ev| set_draft.update(|d| d.due_date = event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <div class="form-actions">
                    <button type="submit" disabled=move || pending.get()>
                        {move || if pending.get() { "Saving..." } else { "Save" }}
                    </button>
                    <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <DeleteConfirmButton
                        prompt="Delete this project and all its tasks?"
                        disabled=pending
                        on_confirm=on_delete
                    />
                </div>
            </form>
        </div>
    }
}
