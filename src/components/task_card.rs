//! Task Card Component
//!
//! One task on the project page: inline status dropdown, expandable editor,
//! comment list and comment form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{AddCommentForm, EditTaskForm, StatusSelect};
use crate::api::comment::comment_date;
use crate::api::task::set_task_status;
use crate::context::AppContext;
use crate::models::{Comment, Task, TaskStatus};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = StoredValue::new(task.id.clone());
    let editable = StoredValue::new(task.clone());

    // server value; a pick only shows once the refetch re-renders this card
    let (status, set_status) = signal(task.status);
    let (pending, set_pending) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let (expanded, set_expanded) = signal(false);

    let on_status = move |picked: TaskStatus| {
        let Some(next) = status_request(status.get_untracked(), picked, pending.get_untracked()) else {
            return;
        };
        let client = ctx.client();
        let tenant = ctx.tenant.get_untracked();
        let id = id.get_value();
        set_pending.set(true);
        set_error.set(None);

        spawn_local(async move {
            if let Err(e) = set_task_status(&client, &tenant, &id, next).await {
                // resync the dropdown with the unchanged server value
                set_status.set(status.get_untracked());
                set_error.set(Some(e.to_string()));
            }
            set_pending.set(false);
        });
    };

    let Task {
        title,
        description,
        assignee_email,
        comments,
        ..
    } = task;

    view! {
        <article class="task-card">
            <div class="task-header">
                <h4 class="task-title">{title}</h4>
                <StatusSelect<TaskStatus> value=status on_change=on_status disabled=pending />
                <button
                    type="button"
                    class="edit-btn"
                    on:click=move |_| set_expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "Close" } else { "Edit" }}
                </button>
            </div>
            {description.filter(|d| !d.is_empty()).map(|d| view! { <p class="task-description">{d}</p> })}
            <p class="task-assignee">
                {assignee_email.unwrap_or_else(|| "Unassigned".to_string())}
            </p>
            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
            <Show when=move || expanded.get()>
                <EditTaskForm task=editable.get_value() on_close=move |_: ()| set_expanded.set(false) />
            </Show>
            <section class="comments">
                <h5>{format!("Comments ({})", comments.len())}</h5>
                <ul class="comment-list">
                    {comments.into_iter().map(|comment| view! { <CommentItem comment=comment /> }).collect_view()}
                </ul>
                <AddCommentForm task_id=id.get_value() />
            </section>
        </article>
    }
}

#[component]
fn CommentItem(comment: Comment) -> impl IntoView {
    view! {
        <li class="comment">
            <p class="comment-content">{comment.content}</p>
            <p class="comment-meta">
                {comment.author_email} " · " {comment_date(&comment.created_at)}
            </p>
        </li>
    }
}

/// Status to send for a dropdown pick, if any
fn status_request(server: TaskStatus, picked: TaskStatus, pending: bool) -> Option<TaskStatus> {
    (!pending && picked != server).then_some(picked)
}
