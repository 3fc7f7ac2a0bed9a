//! Route guard: which pages render for the current session.

use dioxus::prelude::*;

use crate::auth::{use_auth, AuthState};
use crate::permissions::{allowed, Action};

/// Access class of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// Renders for everyone (not-found page).
    Public,
    /// Login and register: only for signed-out visitors.
    AuthOnly,
    /// Everything behind the main layout.
    Protected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

/// Pure function of the session state; no retries.
pub fn decide(area: Area, auth: &AuthState) -> GuardDecision {
    match (area, auth.is_authenticated()) {
        (Area::Public, _) => GuardDecision::Render,
        (Area::AuthOnly, false) | (Area::Protected, true) => GuardDecision::Render,
        (Area::AuthOnly, true) => GuardDecision::RedirectToDashboard,
        (Area::Protected, false) => GuardDecision::RedirectToLogin,
    }
}

/// Renders `children` only when the signed-in role may perform `action`;
/// otherwise a short notice.
#[component]
pub fn RequireAction(action: Action, children: Element) -> Element {
    let auth = use_auth();
    let role = auth().role();
    let permitted = role.is_some_and(|role| allowed(role, action));

    if permitted {
        rsx! { {children} }
    } else {
        tracing::debug!("{action:?} not allowed for {role:?}");
        rsx! {
            div {
                class: "card empty-state",
                h2 { class: "section-title", "Not available" }
                p { class: "muted", "This page is not available for your account." }
            }
        }
    }
}

/// Renders `children` only when the signed-in role may perform `action`,
/// and nothing otherwise. For single controls inside a page.
#[component]
pub fn IfAllowed(action: Action, children: Element) -> Element {
    let auth = use_auth();
    if auth().role().is_some_and(|role| allowed(role, action)) {
        rsx! { {children} }
    } else {
        rsx! {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_as;
    use store::{Role, Session, SessionUser};

    fn signed_in() -> AuthState {
        AuthState::signed_in(Session {
            token: "t".to_string(),
            user: SessionUser {
                id: "s1".to_string(),
                name: "Hong".to_string(),
                role: Role::Student,
            },
        })
    }

    #[test]
    fn test_signed_out_visitor() {
        let auth = AuthState::default();
        assert_eq!(decide(Area::Protected, &auth), GuardDecision::RedirectToLogin);
        assert_eq!(decide(Area::AuthOnly, &auth), GuardDecision::Render);
        assert_eq!(decide(Area::Public, &auth), GuardDecision::Render);
    }

    #[test]
    fn test_signed_in_user() {
        let auth = signed_in();
        assert_eq!(decide(Area::Protected, &auth), GuardDecision::Render);
        assert_eq!(decide(Area::AuthOnly, &auth), GuardDecision::RedirectToDashboard);
        assert_eq!(decide(Area::Public, &auth), GuardDecision::Render);
    }

    fn account_admin() -> Element {
        rsx! {
            RequireAction { action: Action::ManageAccounts, button { "Add account" } }
        }
    }

    fn delete_post_control() -> Element {
        rsx! {
            IfAllowed { action: Action::DeletePost, button { "Delete notice" } }
        }
    }

    fn enroll_page() -> Element {
        rsx! {
            RequireAction { action: Action::RegisterCourses, button { "Enroll" } }
        }
    }

    #[test]
    fn test_management_pages_render_for_admins_only() {
        let admin = render_as(Some(Role::Admin), account_admin);
        assert!(admin.contains("Add account"));
        assert!(!admin.contains("Not available"));

        for role in [Some(Role::Student), Some(Role::Professor), None] {
            let html = render_as(role, account_admin);
            assert!(!html.contains("Add account"), "{role:?}");
            assert!(html.contains("Not available"), "{role:?}");
        }
    }

    #[test]
    fn test_delete_post_control_for_professors_only() {
        assert!(render_as(Some(Role::Professor), delete_post_control).contains("Delete notice"));
        for role in [Some(Role::Student), Some(Role::Admin), None] {
            let html = render_as(role, delete_post_control);
            assert!(!html.contains("Delete notice"), "{role:?}");
            assert!(!html.contains("Not available"), "{role:?}");
        }
    }

    #[test]
    fn test_enroll_hidden_from_admins() {
        assert!(render_as(Some(Role::Student), enroll_page).contains("Enroll"));
        assert!(render_as(Some(Role::Professor), enroll_page).contains("Enroll"));
        assert!(!render_as(Some(Role::Admin), enroll_page).contains("Enroll"));
    }
}
