//! Add Comment Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::comment::add_comment;
use crate::context::AppContext;
use crate::forms::CommentDraft;

#[component]
pub fn AddCommentForm(task_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let task_id = StoredValue::new(task_id);

    let (draft, set_draft) = signal(CommentDraft::default());
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let client = ctx.client();
        let tenant = ctx.tenant.get_untracked();
        let author = ctx.comment_author();
        let submitted = draft.get_untracked();
        let task_id = task_id.get_value();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            match add_comment(&client, &tenant, &task_id, &author, &submitted).await {
                Ok(_) => set_draft.set(CommentDraft::default()),
                Err(e) => set_error.set(Some(e.to_string())),
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="add-comment-form" on:submit=on_submit>
            <textarea
                placeholder="Add a comment..."
                prop:value=move || draft.get().content
                on:input=move |ev| set_draft.update(|d| d.content = event_target_value(&ev))
            ></textarea>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <button type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Posting..." } else { "Comment" }}
            </button>
        </form>
    }
}
