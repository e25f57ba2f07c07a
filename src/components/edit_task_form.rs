//! Edit Task Form Component
//!
//! Full task editor shown under an expanded task card.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{DeleteConfirmButton, StatusSelect};
use crate::api::task::{delete_task, update_task};
use crate::context::AppContext;
use crate::forms::TaskDraft;
use crate::models::{Task, TaskStatus};

#[component]
pub fn EditTaskForm(task: Task, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = StoredValue::new(task.id.clone());

    let (draft, set_draft) = signal(TaskDraft::from_task(&task));
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
            let result = update_task(&client, &tenant, &id, &submitted).await;
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
            // on success the detail refetch replaces this card
            if let Err(e) = delete_task(&client, &tenant, &id).await {
                set_error.set(Some(e.to_string()));
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="entity-form edit-task-form" on:submit=on_submit>
            <label>
                "Title"
                <input
                    type="text"
                    prop:value=move || draft.get().title
                    on:input=move |ev| set_draft.update(|d| d.title = event_target_value(&ev))
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
                <StatusSelect<TaskStatus>
                    value=Signal::derive(move || draft.get().status)
                    on_change=move |status: TaskStatus| set_draft.update(|d| d.status = status)
                />
            </label>
            <label>
                "Assignee"
                <input
                    type="email"
                    prop:value=move || draft.get().assignee_email
                    on:input=move |ev| set_draft.update(|d| d.assignee_email = event_target_value(&ev))
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
                <DeleteConfirmButton prompt="Delete this task?" disabled=pending on_confirm=on_delete />
            </div>
        </form>
    }
}
