use api::models::Subject;
use dioxus::prelude::*;
use ui::components::{Alert, Button, EmptyView, ErrorView, LoadingView, Notice};
use ui::{use_api_client, Action, LoadState, RequireAction};

#[component]
pub fn CourseRegistration() -> Element {
    rsx! {
        RequireAction { action: Action::RegisterCourses, AvailableCourses {} }
    }
}

#[component]
fn AvailableCourses() -> Element {
    let client = use_api_client();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut enrolling = use_signal(|| Option::<i64>::None);
    let mut available =
        use_resource(move || async move { api::courses::list_available(&client()).await });

    let mut enroll = move |subject: Subject| {
        enrolling.set(Some(subject.class_id));
        spawn(async move {
            let result = api::courses::enroll(&client(), subject.class_id).await;
            enrolling.set(None);
            match result {
                Ok(reply) if reply.message.is_empty() => {
                    notice.set(Some(Notice::success(format!("Enrolled in {}", subject.name))));
                }
                Ok(reply) => notice.set(Some(Notice::success(reply.message))),
                Err(e) => {
                    tracing::warn!("enroll in {} failed: {e}", subject.class_id);
                    notice.set(Some(Notice::error(e.to_string())));
                }
            }
            available.restart();
        });
    };

    rsx! {
        div {
            class: "page",
            Alert { notice }
            h1 { class: "page-title", "Course Registration" }
            match LoadState::from(available.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(subjects) if subjects.is_empty() => rsx! {
                    EmptyView { message: "No courses are open for registration." }
                },
                LoadState::Ready(subjects) => rsx! {
                    div {
                        class: "card",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "Course" }
                                    th { "Professor" }
                                    th { "Schedule" }
                                    th { "Room" }
                                    th {}
                                }
                            }
                            tbody {
                                for subject in subjects {
                                    tr {
                                        key: "{subject.class_id}",
                                        td { "{subject.name}" }
                                        td { "{subject.professor}" }
                                        td { "{subject.schedule()}" }
                                        td { "{subject.rooms()}" }
                                        td {
                                            Button {
                                                small: true,
                                                disabled: enrolling().is_some(),
                                                onclick: {
                                                    let subject = subject.clone();
                                                    move |_| enroll(subject.clone())
                                                },
                                                if enrolling() == Some(subject.class_id) { "Enrolling..." } else { "Enroll" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
