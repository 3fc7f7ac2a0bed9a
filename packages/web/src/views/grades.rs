use api::models::GradeReport;
use dioxus::prelude::*;
use ui::components::{EmptyView, ErrorView, LoadingView, StatCard};
use ui::format::format_gpa;
use ui::{use_api_client, Action, LoadState, RequireAction};

#[component]
pub fn Grades() -> Element {
    rsx! {
        RequireAction { action: Action::ViewGrades, GradeList {} }
    }
}

#[component]
fn GradeList() -> Element {
    let client = use_api_client();
    let report = use_resource(move || async move { api::grades::get_grades(&client()).await });

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "Grades" }
            match LoadState::from(report.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(report) => rsx! { Transcript { report } },
            }
        }
    }
}

/// GPA is shown exactly as the backend computed it; credits are a plain sum.
#[component]
fn Transcript(report: GradeReport) -> Element {
    let records = report.by_semester();

    rsx! {
        div {
            class: "stat-grid",
            StatCard { value: format_gpa(report.gpa), label: "GPA" }
            StatCard { value: "{report.total_credits()}", label: "Credits" }
            StatCard { value: "{records.len()}", label: "Courses" }
        }
        if records.is_empty() {
            EmptyView { message: "No grades yet." }
        } else {
            div {
                class: "card",
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Semester" }
                            th { "Course" }
                            th { "Professor" }
                            th { "Credits" }
                            th { "Grade" }
                        }
                    }
                    tbody {
                        for record in records.iter() {
                            tr {
                                key: "{record.semester}-{record.class_id}",
                                td { "{record.semester_label()}" }
                                td { "{record.name}" }
                                td { "{record.professor}" }
                                td { "{record.credits}" }
                                td { span { class: "badge", "{record.grade}" } }
                            }
                        }
                    }
                }
            }
        }
    }
}
