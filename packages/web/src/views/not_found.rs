use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "status-page",
            h1 { class: "page-title", "Page not found" }
            p { class: "muted", "There is nothing at /{path}." }
            Link { class: "btn btn-primary", to: Route::Dashboard {}, "Back to dashboard" }
        }
    }
}
