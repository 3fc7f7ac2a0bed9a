use api::models::{ActivityKind, DashboardData, PostKind};
use dioxus::prelude::*;
use ui::components::{EmptyView, ErrorView, LoadingView, StatCard, WeeklyTimetable};
use ui::format::{format_date, format_gpa};
use ui::timetable::Timetable as Schedule;
use ui::{allowed, use_api_client, use_auth, Action, LoadState};

use super::courses::CourseCard;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let client = use_api_client();
    let data = use_resource(move || async move { api::dashboard::get_dashboard(&client()).await });

    match LoadState::from(data.cloned()) {
        LoadState::Loading => rsx! { LoadingView {} },
        LoadState::Failed(error) => rsx! { ErrorView { error } },
        LoadState::Ready(data) => rsx! { DashboardContent { data } },
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> Element {
    let auth = use_auth();
    let state = auth();
    let name = state.user().map(|u| u.display_name().to_string()).unwrap_or_default();
    let shows_grades = state.role().is_some_and(|r| allowed(r, Action::ViewGrades));
    let schedule = Schedule::build(data.courses());
    let courses = data.courses().iter().take(3).cloned().collect::<Vec<_>>();

    rsx! {
        div {
            class: "page",
            div {
                class: "card welcome",
                h1 { "Welcome back, {name}!" }
                p {
                    class: "muted",
                    "You have {data.pending_assignments} pending assignments this semester."
                }
            }

            div {
                class: "stat-grid",
                StatCard { value: "{data.courses().len()}", label: "Enrolled Courses" }
                StatCard { value: "{data.pending_assignments}", label: "Pending Assignments" }
                if shows_grades {
                    StatCard { value: format_gpa(data.gpa), label: "GPA" }
                }
                StatCard { value: "{data.activity.len()}", label: "Recent Posts" }
            }

            section {
                div {
                    class: "section-header",
                    h2 { class: "section-title", "My Courses" }
                    Link { to: Route::Courses {}, class: "link", "View all" }
                }
                if courses.is_empty() {
                    EmptyView { message: "You are not enrolled in any course." }
                }
                div {
                    class: "card-grid",
                    for course in courses {
                        CourseCard { key: "{course.class_id}", course: course.clone() }
                    }
                }
            }

            div {
                class: "two-column",
                section {
                    h2 { class: "section-title", "Recent Activity" }
                    div {
                        class: "card activity-list",
                        if data.activity.is_empty() {
                            EmptyView { message: "Nothing new." }
                        }
                        for item in data.activity.iter() {
                            Link {
                                key: "{item.class_id}-{item.post_id}",
                                class: "activity-item",
                                to: Route::post(post_kind(item.kind), item.class_id, item.post_id),
                                span { class: "badge", "{item.kind.label()}" }
                                div {
                                    div { class: "activity-title", "{item.title}" }
                                    div { class: "muted small", "{item.class_name} · {format_date(&item.date)}" }
                                }
                            }
                        }
                    }
                }
                section {
                    div {
                        class: "section-header",
                        h2 { class: "section-title", "My Timetable" }
                        Link { to: Route::Timetable {}, class: "link", "View full timetable" }
                    }
                    div {
                        class: "card",
                        WeeklyTimetable { table: schedule }
                    }
                }
            }
        }
    }
}

fn post_kind(kind: ActivityKind) -> PostKind {
    match kind {
        ActivityKind::Assignment => PostKind::Assignment,
        ActivityKind::Notice => PostKind::Notice,
    }
}
