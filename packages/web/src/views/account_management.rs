use api::models::{Account, AccountGroups, AccountStatus, NewAccount};
use dioxus::prelude::*;
use store::Role;
use ui::components::{
    Alert, Button, ButtonVariant, ConfirmDialog, EmptyView, ErrorView, Input, Label, LoadingView,
    Notice, Select, StatCard,
};
use ui::icons::{FaTrash, FaUserPlus};
use ui::{use_api_client, use_auth, Action, Icon, LoadState, RequireAction};

#[component]
pub fn AccountManagement() -> Element {
    rsx! {
        RequireAction { action: Action::ManageAccounts, Accounts {} }
    }
}

#[component]
fn Accounts() -> Element {
    let client = use_api_client();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut query = use_signal(String::new);
    let mut pending_delete = use_signal(|| Option::<Account>::None);
    let mut accounts =
        use_resource(move || async move { api::accounts::list_accounts(&client()).await });

    let confirm_delete = move |_: ()| {
        let Some(account) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match api::accounts::delete_account(&client(), &account.user_id).await {
                Ok(()) => {
                    notice.set(Some(Notice::success(format!("Deleted {}", account.name))));
                    accounts.restart();
                }
                Err(e) => notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            Alert { notice }
            h1 { class: "page-title", "Account Management" }
            AccountForm {
                on_created: move |name: String| {
                    notice.set(Some(Notice::success(format!("Created account for {name}"))));
                    accounts.restart();
                },
                on_error: move |message: String| notice.set(Some(Notice::error(message))),
            }
            match LoadState::from(accounts.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(groups) => rsx! {
                    div {
                        class: "stat-grid",
                        StatCard { value: "{groups.student.len()}", label: "Students" }
                        StatCard { value: "{groups.professor.len()}", label: "Professors" }
                        StatCard { value: "{groups.admin.len()}", label: "Admins" }
                    }
                    div {
                        class: "card",
                        div {
                            class: "section-header",
                            h2 { class: "section-title", "Accounts" }
                            Input {
                                class: "search-input",
                                value: query(),
                                placeholder: "Search by name, email or ID",
                                oninput: move |evt: FormEvent| query.set(evt.value()),
                            }
                        }
                        AccountTable {
                            groups,
                            query: query(),
                            on_delete: move |account: Account| pending_delete.set(Some(account)),
                        }
                    }
                },
            }
        }

        if let Some(account) = pending_delete() {
            ConfirmDialog {
                title: "Delete account",
                message: "Delete the account of {account.name} ({account.user_id})?",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn AccountTable(groups: AccountGroups, query: String, on_delete: EventHandler<Account>) -> Element {
    let auth = use_auth();
    let own_id = auth().user().map(|u| u.id.clone());
    let shown: Vec<Account> = groups.all().filter(|a| a.matches(&query)).cloned().collect();

    if shown.is_empty() {
        return rsx! {
            EmptyView { message: "No matching accounts." }
        };
    }

    rsx! {
        table {
            class: "table",
            thead {
                tr {
                    th { "ID" }
                    th { "Name" }
                    th { "Email" }
                    th { "Role" }
                    th { "Status" }
                    th {}
                }
            }
            tbody {
                for account in shown {
                    tr {
                        key: "{account.user_id}",
                        td { "{account.user_id}" }
                        td { "{account.name}" }
                        td { "{account.email}" }
                        td { span { class: "badge", "{account.role.label()}" } }
                        td { "{account.status.label()}" }
                        td {
                            // Deleting the signed-in admin would end the session mid-request.
                            if own_id.as_deref() != Some(account.user_id.as_str()) {
                                button {
                                    class: "icon-button",
                                    title: "Delete",
                                    onclick: {
                                        let account = account.clone();
                                        move |_| on_delete.call(account.clone())
                                    },
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn role_options() -> Vec<(String, String)> {
    [Role::Student, Role::Professor, Role::Admin]
        .into_iter()
        .map(|r| (r.code().to_string(), r.label().to_string()))
        .collect()
}

fn status_options() -> Vec<(String, String)> {
    [AccountStatus::Active, AccountStatus::Inactive]
        .into_iter()
        .map(|s| (s.label().to_lowercase(), s.label().to_string()))
        .collect()
}

#[component]
fn AccountForm(on_created: EventHandler<String>, on_error: EventHandler<String>) -> Element {
    let client = use_api_client();
    let mut user_id = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Student);
    let mut status = use_signal(|| AccountStatus::Active);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let account = NewAccount::new(&user_id(), &name(), &password(), &email(), role(), status());
        if let Err(message) = account.validate() {
            on_error.call(message.to_string());
            return;
        }
        saving.set(true);
        spawn(async move {
            let result = api::accounts::add_account(&client(), &account).await;
            saving.set(false);
            match result {
                Ok(()) => {
                    user_id.set(String::new());
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    on_created.call(account.name);
                }
                Err(e) => on_error.call(e.to_string()),
            }
        });
    };

    rsx! {
        form {
            class: "card form-grid",
            onsubmit: submit,
            h2 { class: "section-title", "Add account" }
            div {
                Label { html_for: "account-id", "User ID" }
                Input {
                    id: "account-id",
                    value: user_id(),
                    oninput: move |evt: FormEvent| user_id.set(evt.value()),
                }
            }
            div {
                Label { html_for: "account-name", "Name" }
                Input {
                    id: "account-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
            }
            div {
                Label { html_for: "account-email", "Email" }
                Input {
                    id: "account-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
            }
            div {
                Label { html_for: "account-password", "Initial password" }
                Input {
                    id: "account-password",
                    r#type: "password",
                    autocomplete: "new-password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
            }
            div {
                Label { html_for: "account-role", "Role" }
                Select {
                    id: "account-role",
                    value: role().code().to_string(),
                    options: role_options(),
                    onchange: move |evt: FormEvent| {
                        if let Some(r) = evt.value().parse::<u8>().ok().and_then(Role::from_code) {
                            role.set(r);
                        }
                    },
                }
            }
            div {
                Label { html_for: "account-status", "Status" }
                Select {
                    id: "account-status",
                    value: status().label().to_lowercase(),
                    options: status_options(),
                    onchange: move |evt: FormEvent| {
                        status.set(if evt.value() == "inactive" {
                            AccountStatus::Inactive
                        } else {
                            AccountStatus::Active
                        });
                    },
                }
            }
            div {
                class: "form-actions",
                Button {
                    r#type: "submit",
                    variant: ButtonVariant::Primary,
                    disabled: saving(),
                    Icon { icon: FaUserPlus, width: 12, height: 12 }
                    if saving() { "Saving..." } else { "Add account" }
                }
            }
        }
    }
}
