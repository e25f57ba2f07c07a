//! Create Task Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::task::create_task;
use crate::context::AppContext;
use crate::forms::TaskDraft;

/// New tasks start as To Do
#[component]
pub fn CreateTaskForm(project_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let project_id = StoredValue::new(project_id);

    let (draft, set_draft) = signal(TaskDraft::default());
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
        let project_id = project_id.get_value();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match create_task(&client, &tenant, &project_id, &submitted).await {
                Ok(_) => set_draft.set(TaskDraft::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="entity-form create-task-form" on:submit=on_submit>
            <h3>"New Task"</h3>
            <input
                type="text"
                placeholder="Task title"
                prop:value=move || draft.get().title
                on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || draft.get().description
                on:input=move |ev| set_draft.update(|d| d.description = event_target_value(&ev))
            ></textarea>
            <input
                type="email"
                placeholder="Assignee email"
                prop:value=move || draft.get().assignee_email
                on:input=move |ev| set_draft.update(|d| d.assignee_email = event_target_value(&ev))
            />
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Adding..." } else { "Add Task" }}
            </button>
        </form>
    }
}
