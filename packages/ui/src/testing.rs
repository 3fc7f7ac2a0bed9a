//! Server-side rendering of components under a given session, for tests.

use dioxus::prelude::*;
use store::{Role, Session, SessionUser};

use crate::auth::AuthState;

/// Session of a user called `u1` with `role`.
pub fn session(role: Role) -> Session {
    Session {
        token: "t".to_string(),
        user: SessionUser {
            id: "u1".to_string(),
            name: "Test User".to_string(),
            role,
        },
    }
}

fn harness((role, content): (Option<Role>, fn() -> Element)) -> Element {
    use_context_provider(|| {
        Signal::new(AuthState {
            session: role.map(session),
        })
    });
    content()
}

/// Render `content` to HTML with a signed-in `role` (or signed out).
pub fn render_as(role: Option<Role>, content: fn() -> Element) -> String {
    let mut dom = VirtualDom::new_with_props(harness, (role, content));
    dom.rebuild_in_place();
    dioxus::ssr::render(&dom)
}
