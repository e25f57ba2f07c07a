//! Project Page Component
//!
//! Detail view of one project: header, tasks with comments, create-task form.

use leptos::prelude::*;
use scoped_graphql::QueryState;

use super::{CreateTaskForm, EditProjectForm, Link, QueryError, TaskCard};
use crate::api::project::{GetProjectDetails, ProjectDetailsData, ProjectIdVariables};
use crate::context::AppContext;
use crate::models::{format_percent, ProjectDetail};
use crate::query::use_live_query;
use crate::router::Route;

#[component]
pub fn ProjectPage(id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let detail = use_live_query::<GetProjectDetails>(ProjectIdVariables { id });
    let (editing, set_editing) = signal(false);

    view! {
        <div class="project-page">
            <Link to=Route::Dashboard class="back-link">"← All projects"</Link>
            {move || match detail.state.get() {
                QueryState::Loading => view! { <p class="loading">"Loading project..."</p> }.into_any(),
                QueryState::Errored(error) if error.is_not_found() => view! { <ProjectNotFound /> }.into_any(),
                QueryState::Errored(error) => view! {
                    <QueryError error=error on_retry=move |_: ()| detail.refetch() />
                }.into_any(),
                QueryState::Ready(ProjectDetailsData { project: None }) => view! { <ProjectNotFound /> }.into_any(),
                QueryState::Ready(ProjectDetailsData { project: Some(project) }) => view! {
                    <ProjectView project=project on_edit=move |_: ()| set_editing.set(true) />
                }.into_any(),
            }}
            {move || {
                let project = detail.state.get().ready().and_then(|d| d.project.clone())?;
                editing.get().then(|| view! {
                    <EditProjectForm
                        project=project.summary()
                        on_close=move |_: ()| set_editing.set(false)
                        on_deleted=move |_: ()| ctx.navigate(Route::Dashboard)
                    />
                })
            }}
        </div>
    }
}

#[component]
fn ProjectView(project: ProjectDetail, #[prop(into)] on_edit: Callback<()>) -> impl IntoView {
    let status_class = format!("status-badge status-{}", project.status.as_str().to_lowercase());
    let project_id = project.id.clone();

    view! {
        <header class="project-header">
            <h1>{project.name}</h1>
            <span class=status_class>{project.status.label()}</span>
            <button type="button" class="edit-btn" on:click=move |_| on_edit.run(())>"Edit Project"</button>
        </header>
        {project.description.filter(|d| !d.is_empty()).map(|d| view! { <p class="project-description">{d}</p> })}
        <p class="project-meta">
            {project.due_date.map(|d| format!("Due {}", d.format("%Y-%m-%d"))).unwrap_or_else(|| "No due date".to_string())}
            " · "
            {format!("{} tasks, {} done", project.task_count, format_percent(project.completion_rate))}
        </p>
        <section class="task-list">
            <h2>"Tasks"</h2>
            {if project.tasks.is_empty() {
                view! { <p class="empty">"No tasks yet."</p> }.into_any()
            } else {
                project.tasks.into_iter().map(|task| view! { <TaskCard task=task /> }).collect_view().into_any()
            }}
            <CreateTaskForm project_id=project_id />
        </section>
    }
}

#[component]
fn ProjectNotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Project not found"</h1>
            <p>"It may have been deleted, or it belongs to another organization."</p>
            <Link to=Route::Dashboard>"Back to projects"</Link>
        </div>
    }
}
