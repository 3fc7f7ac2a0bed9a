use dioxus::prelude::*;

use ui::icons::FaGraduationCap;
use ui::{decide, use_auth, Area, GuardDecision, Icon};

use crate::Route;

/// Centered card for the login and register pages. Signed-in users are sent
/// to the dashboard.
#[component]
pub fn AuthLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    use_effect(move || {
        if decide(Area::AuthOnly, &auth.read()) == GuardDecision::RedirectToDashboard {
            nav.replace(Route::Dashboard {});
        }
    });

    if decide(Area::AuthOnly, &auth.read()) != GuardDecision::Render {
        return rsx! {};
    }

    rsx! {
        div {
            class: "auth-shell",
            div {
                class: "auth-brand",
                Icon { icon: FaGraduationCap, width: 32, height: 32 }
                span { "AcademicMS" }
            }
            div {
                class: "card auth-card",
                Outlet::<Route> {}
            }
        }
    }
}
