use dioxus::prelude::*;

#[component]
pub fn StatCard(value: String, label: String) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
        }
    }
}
