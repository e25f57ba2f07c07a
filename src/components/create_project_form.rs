//! Create Project Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::project::create_project;
use crate::context::AppContext;
use crate::forms::ProjectDraft;

/// Form beside the dashboard list; new projects start as Active
#[component]
pub fn CreateProjectForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (draft, set_draft) = signal(ProjectDraft::default());
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
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match create_project(&client, &tenant, &submitted).await {
                Ok(_) => set_draft.set(ProjectDraft::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="entity-form create-project-form" on:submit=on_submit>
            <h2>"New Project"</h2>
            <label>
                "Name"
                <input
                    type="text"
                    placeholder="Project name"
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
                "Due date"
                <input
                    type="date"
                    prop:value=move || draft.get().due_date
                    on:input=move |ev| set_draft.update(|d| d.due_date = event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Creating..." } else { "Create Project" }}
            </button>
        </form>
    }
}
