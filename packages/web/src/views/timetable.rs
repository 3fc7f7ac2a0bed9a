use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, EmptyView, ErrorView, LoadingView, WeeklyTimetable};
use ui::timetable::Timetable as Schedule;
use ui::{use_api_client, LoadState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Week,
    List,
}

#[component]
pub fn Timetable() -> Element {
    let client = use_api_client();
    let mut mode = use_signal(|| ViewMode::Week);
    let subjects = use_resource(move || async move { api::courses::get_timetable(&client()).await });

    let variant = move |m: ViewMode| {
        if mode() == m {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Secondary
        }
    };

    rsx! {
        div {
            class: "page",
            div {
                class: "section-header",
                h1 { class: "page-title", "My Timetable" }
                div {
                    class: "button-row",
                    Button {
                        small: true,
                        variant: variant(ViewMode::Week),
                        onclick: move |_| mode.set(ViewMode::Week),
                        "Week view"
                    }
                    Button {
                        small: true,
                        variant: variant(ViewMode::List),
                        onclick: move |_| mode.set(ViewMode::List),
                        "List view"
                    }
                }
            }
            match LoadState::from(subjects.cloned()).map(|s| Schedule::build(&s)) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(table) if table.is_empty() => rsx! {
                    EmptyView { message: "No classes this semester." }
                },
                LoadState::Ready(table) => match mode() {
                    ViewMode::Week => rsx! {
                        div { class: "card", WeeklyTimetable { table } }
                    },
                    ViewMode::List => rsx! { ScheduleList { table } },
                },
            }
        }
    }
}

#[component]
fn ScheduleList(table: Schedule) -> Element {
    rsx! {
        for (name, entries) in table.by_course() {
            div {
                key: "{name}",
                class: "card",
                h3 { class: "course-name", "{name}" }
                for entry in entries {
                    div {
                        key: "{entry.slot.day}-{entry.slot.period}",
                        class: "schedule-row",
                        span { "{entry.slot.label()}" }
                        span { class: "muted", {entry.room.clone().unwrap_or_default()} }
                    }
                }
            }
        }
        if !table.unplaced.is_empty() {
            div {
                class: "card",
                h3 { class: "course-name", "Unscheduled" }
                for (name, slot) in table.unplaced.iter() {
                    div {
                        class: "schedule-row",
                        span { "{name}" }
                        span { class: "muted", "{slot}" }
                    }
                }
            }
        }
    }
}
