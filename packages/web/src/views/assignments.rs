use api::models::{AssignmentOverview, PostKind};
use dioxus::prelude::*;
use ui::components::{EmptyView, ErrorView, LoadingView, StatCard};
use ui::format::format_datetime;
use ui::{use_api_client, Action, LoadState, RequireAction};

use crate::Route;

#[component]
pub fn Assignments() -> Element {
    rsx! {
        RequireAction { action: Action::ViewAssignments, AssignmentList {} }
    }
}

#[component]
fn AssignmentList() -> Element {
    let client = use_api_client();
    let overview =
        use_resource(move || async move { api::assignments::list_assignments(&client()).await });

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Assignments" }
            match LoadState::from(overview.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(overview) => rsx! { Overview { overview } },
            }
        }
    }
}

#[component]
fn Overview(overview: AssignmentOverview) -> Element {
    let total: usize = overview.subjects.iter().map(|s| s.assignments.len()).sum();
    let pending = overview.pending();

    rsx! {
        div {
            class: "stat-grid",
            StatCard { value: "{total}", label: "Total" }
            StatCard { value: "{pending}", label: "Pending" }
            StatCard { value: "{total - pending}", label: "Submitted" }
        }
        if total == 0 {
            EmptyView { message: "No assignments." }
        }
        for subject in overview.subjects.iter().filter(|s| !s.assignments.is_empty()) {
            section {
                key: "{subject.class_id}",
                class: "card",
                div {
                    class: "section-header",
                    h2 { class: "section-title", "{subject.name}" }
                    span { class: "muted small", "{subject.professor}" }
                }
                ul {
                    class: "assignment-list",
                    for assignment in subject.assignments.iter() {
                        li {
                            key: "{assignment.post_id}",
                            class: "assignment-item",
                            Link {
                                class: "link",
                                to: Route::post(PostKind::Assignment, subject.class_id, assignment.post_id),
                                "{assignment.title}"
                            }
                            span { class: "muted small", "Due {format_datetime(&assignment.date)}" }
                            if assignment.submitted {
                                span { class: "badge badge-success", "Submitted" }
                            } else {
                                span { class: "badge badge-warning", "Pending" }
                            }
                        }
                    }
                }
            }
        }
    }
}
