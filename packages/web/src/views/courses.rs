use api::models::Subject;
use dioxus::prelude::*;
use ui::components::{EmptyView, ErrorView, LoadingView};
use ui::icons::{FaClock, FaLocationDot, FaUser};
use ui::{use_api_client, Icon, LoadState};

use crate::Route;

#[component]
pub fn Courses() -> Element {
    let client = use_api_client();
    let courses = use_resource(move || async move { api::courses::list_enrolled(&client()).await });

    rsx! {
        div {
            class: "page",
            h1 { class: "page-title", "My Courses" }
            match LoadState::from(courses.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(list) if list.is_empty() => rsx! {
                    EmptyView { message: "You are not enrolled in any course." }
                },
                LoadState::Ready(list) => rsx! {
                    div {
                        class: "card-grid",
                        for course in list {
                            CourseCard { key: "{course.class_id}", course: course.clone() }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn CourseCard(course: Subject) -> Element {
    rsx! {
        Link {
            to: Route::CourseDetail { class_id: course.class_id },
            class: "card course-card",
            h3 { class: "course-name", "{course.name}" }
            div {
                class: "course-meta",
                Icon { icon: FaUser, width: 12, height: 12 }
                span { "{course.professor}" }
            }
            if !course.times.is_empty() {
                div {
                    class: "course-meta",
                    Icon { icon: FaClock, width: 12, height: 12 }
                    span { "{course.schedule()}" }
                }
            }
            if !course.locations.is_empty() {
                div {
                    class: "course-meta",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    span { "{course.rooms()}" }
                }
            }
        }
    }
}
