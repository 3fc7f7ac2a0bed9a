use api::models::{NewCourse, Subject};
use dioxus::prelude::*;
use ui::components::{
    Alert, Button, ButtonVariant, ConfirmDialog, EmptyView, ErrorView, Input, Label, LoadingView,
    Notice,
};
use ui::icons::{FaPlus, FaTrash};
use ui::{use_api_client, Action, Icon, LoadState, RequireAction};

#[component]
pub fn CourseManagement() -> Element {
    rsx! {
        RequireAction { action: Action::ManageCourses, Catalog {} }
    }
}

#[component]
fn Catalog() -> Element {
    let client = use_api_client();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut pending_delete = use_signal(|| Option::<Subject>::None);
    let mut catalog =
        use_resource(move || async move { api::courses::list_catalog(&client()).await });

    let confirm_delete = move |_: ()| {
        let Some(subject) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match api::courses::delete_course(&client(), subject.class_id).await {
                Ok(()) => {
                    notice.set(Some(Notice::success(format!("Deleted {}", subject.name))));
                    catalog.restart();
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            Alert { notice }
            h1 { class: "page-title", "Course Management" }
            CourseForm {
                on_created: move |name: String| {
                    notice.set(Some(Notice::success(format!("Created {name}"))));
                    catalog.restart();
                },
                on_error: move |message: String| notice.set(Some(Notice::error(message))),
            }
            match LoadState::from(catalog.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(subjects) if subjects.is_empty() => rsx! {
                    EmptyView { message: "No courses yet." }
                },
                LoadState::Ready(subjects) => rsx! {
                    div {
                        class: "card",
                        table {
                            class: "table",
                            thead {
                                tr {
                                    th { "ID" }
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
                                        td { "{subject.class_id}" }
                                        td { "{subject.name}" }
                                        td { "{subject.professor}" }
                                        td { "{subject.schedule()}" }
                                        td { "{subject.rooms()}" }
                                        td {
                                            button {
                                                class: "icon-button",
                                                title: "Delete",
                                                onclick: {
                                                    let subject = subject.clone();
                                                    move |_| pending_delete.set(Some(subject.clone()))
                                                },
                                                Icon { icon: FaTrash, width: 12, height: 12 }
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

        if let Some(subject) = pending_delete() {
            ConfirmDialog {
                title: "Delete course",
                message: "Delete {subject.name}? Enrolled students lose access to its boards.",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

/// Times and rooms are entered comma separated, e.g. `월1, 수2`.
#[component]
fn CourseForm(on_created: EventHandler<String>, on_error: EventHandler<String>) -> Element {
    let client = use_api_client();
    let mut name = use_signal(String::new);
    let mut professor = use_signal(String::new);
    let mut times = use_signal(String::new);
    let mut locations = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let course = NewCourse::from_form(&name(), &professor(), &times(), &locations());
        if let Err(message) = course.validate() {
            on_error.call(message.to_string());
            return;
        }
        saving.set(true);
        spawn(async move {
            let result = api::courses::create_course(&client(), &course).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    name.set(String::new());
                    professor.set(String::new());
                    times.set(String::new());
                    locations.set(String::new());
                    on_created.call(course.name);
                }
                Err(e) => on_error.call(e.to_string()),
            }
        });
    };

    rsx! {
        form {
            class: "card form-grid",
            onsubmit: submit,
            h2 { class: "section-title", "Add course" }
            div {
                Label { html_for: "course-name", "Course name" }
                Input {
                    id: "course-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div {
                Label { html_for: "course-professor", "Professor" }
                Input {
                    id: "course-professor",
                    value: professor(),
                    oninput: move |evt: FormEvent| professor.set(evt.value()),
                }
            }
            div {
                Label { html_for: "course-times", "Times" }
                Input {
                    id: "course-times",
                    value: times(),
                    placeholder: "월1, 수2",
                    oninput: move |evt: FormEvent| times.set(evt.value()),
                }
            }
            div {
                Label { html_for: "course-rooms", "Rooms" }
                Input {
                    id: "course-rooms",
                    value: locations(),
                    placeholder: "B101, B101",
                    oninput: move |evt: FormEvent| locations.set(evt.value()),
                }
            }
            div {
                class: "form-actions",
                Button {
                    r#type: "submit",
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    if saving() { "Saving..." } else { "Add course" }
                }
            }
        }
    }
}
