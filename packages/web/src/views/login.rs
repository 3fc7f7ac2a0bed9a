//! Login page with id/password form.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Input, Label};
use ui::{sign_in, use_auth, use_sessions};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let sessions = use_sessions();
    let nav = use_navigator();
    let mut user_id = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let sessions = sessions.clone();
        spawn(async move {
            error.set(None);
            let id = user_id().trim().to_string();
            let pw = password();
            if id.is_empty() || pw.is_empty() {
                error.set(Some("Please enter your ID and password".to_string()));
                return;
            }

            loading.set(true);
            match sign_in(auth, &sessions, &id, &pw).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Login failed for {id}: {e}");
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    rsx! {
        h1 { class: "auth-title", "Sign in" }
        p { class: "auth-subtitle muted", "Use your university ID to continue." }

        form {
            class: "form-stack",
            onsubmit: handle_login,

            if let Some(err) = error() {
                div { class: "form-error", role: "alert", "{err}" }
            }

            div {
                Label { html_for: "login-id", "ID" }
                Input {
                    id: "login-id",
                    placeholder: "Student or staff ID",
                    autocomplete: "username",
                    value: user_id(),
                    oninput: move |evt: FormEvent| user_id.set(evt.value()),
                }
            }
            div {
                Label { html_for: "login-password", "Password" }
                Input {
                    id: "login-password",
                    r#type: "password",
                    autocomplete: "current-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "btn-block",
                disabled: loading(),
                if loading() { "Signing in..." } else { "Sign in" }
            }
        }

        p {
            class: "auth-footer muted",
            "No account yet? "
            Link { to: Route::Register {}, "Create one" }
        }
    }
}
