//! Registration page. A successful signup signs the new user in.

use api::Registration;
use dioxus::prelude::*;
use store::Role;
use ui::components::{Button, ButtonVariant, Input, Label, Select};
use ui::{register, use_auth, use_sessions};

use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let sessions = use_sessions();
    let nav = use_navigator();
    let mut user_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let sessions = sessions.clone();
        spawn(async move {
            error.set(None);
            let registration = Registration {
                user_id: user_id(),
                name: name(),
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
                role: role(),
            };
            if let Err(message) = registration.validate() {
                error.set(Some(message.to_string()));
                return;
            }

            loading.set(true);
            match register(auth, &sessions, &registration).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {e}");
                    error.set(Some(e.to_string()));
                    loading.set(false);
                }
            }
        });
    };

    let roles = [Role::Student, Role::Professor]
        .into_iter()
        .map(|r| (r.as_str().to_string(), r.label().to_string()))
        .collect::<Vec<_>>();

    rsx! {
        h1 { class: "auth-title", "Create account" }
        p { class: "auth-subtitle muted", "Sign up for AcademicMS" }

        form {
            class: "form-stack",
            onsubmit: handle_register,

            if let Some(err) = error() {
                div { class: "form-error", role: "alert", "{err}" }
            }

            div {
                Label { html_for: "register-id", "ID" }
                Input {
                    id: "register-id",
                    autocomplete: "username",
                    value: user_id(),
                    oninput: move |evt: FormEvent| user_id.set(evt.value()),
                }
            }
            div {
                Label { html_for: "register-name", "Name" }
                Input {
                    id: "register-name",
                    autocomplete: "name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div {
                Label { html_for: "register-email", "Email" }
                Input {
                    id: "register-email",
                    r#type: "email",
                    autocomplete: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                Label { html_for: "register-role", "I am a" }
                Select {
                    id: "register-role",
                    value: role().as_str().to_string(),
                    options: roles,
                    onchange: move |evt: FormEvent| {
                        if let Some(r) = Role::parse(&evt.value()) {
                            role.set(r);
                        }
                    },
                }
            }
            div {
                Label { html_for: "register-password", "Password" }
                Input {
                    id: "register-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            div {
                Label { html_for: "register-confirm", "Confirm password" }
                Input {
                    id: "register-confirm",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                class: "btn-block",
                disabled: loading(),
                if loading() { "Creating account..." } else { "Sign up" }
            }
        }

        p {
            class: "auth-footer muted",
            "Already have an account? "
            Link { to: Route::Login {}, "Sign in" }
        }
    }
}
