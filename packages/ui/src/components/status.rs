use api::ApiError;
use dioxus::prelude::*;

use crate::auth::LogoutButton;
use crate::icons::{FaCircleExclamation, FaSpinner};
use crate::Icon;

#[component]
pub fn LoadingView(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        div {
            class: "status-view",
            Icon { icon: FaSpinner, width: 20, height: 20, class: "spin" }
            span { "{label}" }
        }
    }
}

/// Failed request. When the session is gone the user is offered a way back
/// to the login page instead of stale data.
#[component]
pub fn ErrorView(error: ApiError) -> Element {
    rsx! {
        div {
            class: "status-view status-error",
            Icon { icon: FaCircleExclamation, width: 20, height: 20 }
            span { "{error}" }
            if error.needs_login() {
                LogoutButton { label: "Log in again", class: "btn btn-primary btn-sm" }
            }
        }
    }
}

#[component]
pub fn EmptyView(message: String) -> Element {
    rsx! {
        div { class: "empty-state", "{message}" }
    }
}
