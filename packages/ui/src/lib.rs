//! This crate contains all shared UI for the workspace: session context,
//! route guard, role checks and the components pages are built from.

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod auth;
pub use auth::{
    register, sign_in, sign_out, use_api_client, use_auth, use_sessions, AuthProvider, AuthState,
    LogoutButton, Sessions,
};

pub mod format;
pub mod guard;
pub use guard::{decide, Area, GuardDecision, IfAllowed, RequireAction};

mod load;
pub use load::LoadState;

pub mod permissions;
pub use permissions::{allowed, can_delete_comment, can_write, navigation, Action, Page};

mod storage;
pub use storage::{platform_storage, PlatformStorage};

pub mod timetable;

#[cfg(test)]
mod testing;
