use dioxus::prelude::*;

use crate::timetable::{period_label, Timetable, DAYS};

/// Period × weekday grid. Empty cells show a dash.
#[component]
pub fn WeeklyTimetable(table: Timetable) -> Element {
    let days = &DAYS[..table.days()];
    let periods = table.periods();

    if periods.is_empty() {
        return rsx! {
            div { class: "empty-state", "No scheduled classes." }
        };
    }

    rsx! {
        div {
            class: "table-scroll",
            table {
                class: "timetable",
                thead {
                    tr {
                        th { "Time" }
                        for day in days.iter() {
                            th { key: "{day}", "{day}" }
                        }
                    }
                }
                tbody {
                    for period in periods {
                        tr {
                            key: "{period}",
                            th { "{period_label(period)}" }
                            for day in 0..days.len() {
                                match table.at(day, period) {
                                    Some(entry) => rsx! {
                                        td {
                                            div {
                                                class: "timetable-cell",
                                                div { class: "timetable-course", "{entry.name}" }
                                                if let Some(room) = &entry.room {
                                                    div { class: "timetable-room", "{room}" }
                                                }
                                            }
                                        }
                                    },
                                    None => rsx! {
                                        td { class: "timetable-empty", "-" }
                                    },
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
