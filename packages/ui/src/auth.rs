//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] restores the persisted session once, on mount, and keeps
//! it in a `Signal<AuthState>`. Login, registration and logout go through the
//! helpers below so storage and the signal never disagree.

use api::{ApiClient, ApiError, Registration, SessionManager};
use dioxus::prelude::*;
use store::{ClientConfig, Role, Session, SessionUser};

use crate::icons::FaRightFromBracket;
use crate::storage::{platform_storage, PlatformStorage};
use crate::Icon;

pub type Sessions = SessionManager<PlatformStorage>;

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    pub fn signed_in(session: Session) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(Session::role)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

pub fn use_sessions() -> Sessions {
    use_context::<Sessions>()
}

/// Client carrying the current session token. Recomputed when the session
/// changes, so resources that read it refetch after login.
pub fn use_api_client() -> Memo<ApiClient> {
    let auth = use_auth();
    let sessions = use_sessions();
    use_memo(move || sessions.client(auth.read().session.as_ref()))
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(config: ClientConfig, children: Element) -> Element {
    let sessions = use_context_provider(|| SessionManager::new(config, platform_storage()));
    let restored = sessions.clone();
    use_context_provider(|| {
        let session = restored.restore();
        match &session {
            Some(s) => tracing::debug!("Restored session for {}", s.user.id),
            None => tracing::debug!("No stored session"),
        }
        Signal::new(AuthState { session })
    });

    rsx! {
        {children}
    }
}

pub async fn sign_in(
    mut auth: Signal<AuthState>,
    sessions: &Sessions,
    user_id: &str,
    password: &str,
) -> Result<(), ApiError> {
    let session = sessions.login(user_id, password).await?;
    tracing::info!("Signed in as {} ({})", session.user.id, session.role());
    auth.set(AuthState::signed_in(session));
    Ok(())
}

pub async fn register(
    mut auth: Signal<AuthState>,
    sessions: &Sessions,
    registration: &Registration,
) -> Result<(), ApiError> {
    let session = sessions.register(registration).await?;
    tracing::info!("Registered and signed in as {}", session.user.id);
    auth.set(AuthState::signed_in(session));
    Ok(())
}

pub fn sign_out(mut auth: Signal<AuthState>, sessions: &Sessions) {
    sessions.logout();
    tracing::info!("Signed out");
    auth.set(AuthState::default());
}

/// Button to log out the current user. Protected routes redirect to the
/// login page once the session is gone.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    /// Show only the icon, with the label as tooltip.
    #[props(default)]
    icon_only: bool,
) -> Element {
    let auth = use_auth();
    let sessions = use_sessions();

    rsx! {
        button {
            class: "{class}",
            title: "{label}",
            onclick: move |_| sign_out(auth, &sessions),
            Icon { icon: FaRightFromBracket, width: 16, height: 16 }
            if !icon_only {
                span { "{label}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_accessors() {
        let state = AuthState::default();
        assert!(!state.is_authenticated());
        assert_eq!(state.role(), None);

        let state = AuthState::signed_in(Session {
            token: "t".to_string(),
            user: SessionUser {
                id: "p01".to_string(),
                name: "Kim".to_string(),
                role: Role::Professor,
            },
        });
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::Professor));
        assert_eq!(state.user().map(|u| u.name.as_str()), Some("Kim"));
    }
}
