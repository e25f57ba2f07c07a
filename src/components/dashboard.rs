//! Dashboard Component
//!
//! Project list for the active organization plus the create form.

use leptos::prelude::*;
use scoped_graphql::{NoVariables, QueryState};

use super::{CreateProjectForm, EditProjectForm, Link, QueryError};
use crate::api::project::GetProjects;
use crate::models::{format_percent, Project};
use crate::query::use_live_query;
use crate::router::Route;

#[component]
pub fn Dashboard() -> impl IntoView {
    let projects = use_live_query::<GetProjects>(NoVariables {});
    let (editing, set_editing) = signal::<Option<Project>>(None);

    view! {
        <div class="dashboard">
            <section class="project-list">
                <h1>"Projects"</h1>
                {move || match projects.state.get() {
                    QueryState::Loading => view! { <p class="loading">"Loading projects..."</p> }.into_any(),
                    QueryState::Errored(error) => view! {
                        <QueryError error=error on_retry=move |_: ()| projects.refetch() />
                    }.into_any(),
                    QueryState::Ready(data) if data.projects.is_empty() => view! {
                        <p class="empty">"No projects yet. Create the first one."</p>
                    }.into_any(),
                    QueryState::Ready(data) => view! {
                        <div class="project-grid">
                            {data.projects.into_iter().map(|project| view! {
                                <ProjectCard project=project on_edit=move |p: Project| set_editing.set(Some(p)) />
                            }).collect_view()}
                        </div>
                    }.into_any(),
                }}
            </section>
            <aside class="side-panel">
                <CreateProjectForm />
            </aside>
            {move || editing.get().map(|project| view! {
                <EditProjectForm
                    project=project
                    on_close=move |_: ()| set_editing.set(None)
                    on_deleted=move |_: ()| set_editing.set(None)
                />
            })}
        </div>
    }
}

#[component]
fn ProjectCard(project: Project, #[prop(into)] on_edit: Callback<Project>) -> impl IntoView {
    let route = Route::Project(project.id.clone());
    let status_class = format!("status-badge status-{}", project.status.as_str().to_lowercase());
    let percent = format_percent(project.completion_rate);
    let editable = StoredValue::new(project.clone());

    view! {
        <article class="project-card">
            <div class="project-card-header">
                <Link to=route class="project-name">{project.name}</Link>
                <span class=status_class>{project.status.label()}</span>
            </div>
            {project.description.filter(|d| !d.is_empty()).map(|d| view! { <p class="project-description">{d}</p> })}
            <dl class="project-stats">
                <dt>"Due"</dt>
                <dd>{project.due_date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_else(|| "No due date".to_string())}</dd>
                <dt>"Tasks"</dt>
                <dd>{project.task_count}</dd>
                <dt>"Done"</dt>
                <dd>{percent.clone()}</dd>
            </dl>
            <div class="progress-bar">
                <div class="progress-fill" style=format!("width: {}", percent)></div>
            </div>
            <button type="button" class="edit-btn" on:click=move |_| on_edit.run(editable.get_value())>
                "Edit"
            </button>
        </article>
    }
}
