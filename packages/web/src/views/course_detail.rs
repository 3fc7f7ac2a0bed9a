//! A course with its three boards: notices, materials and assignments.

use api::models::{Board, NewPost, PostKind, PostSummary};
use dioxus::prelude::*;
use ui::components::{
    Alert, Button, ButtonVariant, ConfirmDialog, EmptyView, ErrorView, Input, Label, LoadingView,
    ModalOverlay, Notice, Textarea,
};
use ui::format::format_datetime;
use ui::icons::{FaPlus, FaTrash};
use ui::{allowed, can_write, use_api_client, use_auth, Action, Icon, LoadState};

use crate::Route;

#[component]
pub fn CourseDetail(class_id: i64) -> Element {
    let client = use_api_client();
    let mut tab = use_signal(|| PostKind::Notice);
    let mut notice = use_signal(|| Option::<Notice>::None);
    // Tagged with the tab it was fetched for, so a stale board is never
    // rendered under the newly selected tab.
    let mut board = use_resource(use_reactive!(|(class_id,)| async move {
        let kind = tab();
        (kind, api::posts::get_board(&client(), kind, class_id).await)
    }));

    rsx! {
        div {
            class: "page",
            Alert { notice }

            if let Some((_, Ok(loaded))) = &*board.read() {
                CourseHeader { board: loaded.clone() }
            }

            nav {
                class: "tabs",
                for kind in PostKind::ALL {
                    button {
                        key: "{kind.slug()}",
                        class: if tab() == kind { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(kind),
                        "{kind.plural()}"
                    }
                }
            }

            match LoadState::keyed(&tab(), board.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(loaded) => rsx! {
                    BoardView {
                        kind: tab(),
                        board: loaded,
                        on_changed: move |message: String| {
                            notice.set(Some(Notice::success(message)));
                            board.restart();
                        },
                        on_error: move |message: String| notice.set(Some(Notice::error(message))),
                    }
                },
            }
        }
    }
}

#[component]
fn CourseHeader(board: Board) -> Element {
    let subject = &board.subject.subject;
    rsx! {
        div {
            class: "card course-header",
            h1 { class: "page-title", "{subject.name}" }
            div { class: "muted", "Professor: {subject.professor}" }
            div { class: "muted small", "Room: {subject.rooms()}" }
            div { class: "muted small", "Schedule: {subject.schedule()}" }
        }
    }
}

#[component]
fn BoardView(
    kind: PostKind,
    board: Board,
    on_changed: EventHandler<String>,
    on_error: EventHandler<String>,
) -> Element {
    let auth = use_auth();
    let client = use_api_client();
    let role = auth().role();
    let class_id = board.subject.subject.class_id;
    let writable = role.is_some_and(|r| can_write(r, board.subject.write_enable));
    let deletable = role.is_some_and(|r| allowed(r, Action::DeletePost));
    let mut creating = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<PostSummary>::None);

    let confirm_delete = move |_: ()| {
        let Some(post) = pending_delete() else {
            return;
        };
        pending_delete.set(None);
        spawn(async move {
            match api::posts::delete_post(&client(), kind, post.post_id).await {
                Ok(()) => on_changed.call(format!("Deleted \"{}\"", post.title)),
                Err(e) => on_error.call(e.to_string()),
            }
        });
    };

    rsx! {
        section {
            class: "card",
            div {
                class: "section-header",
                h2 { class: "section-title", "{kind.plural()}" }
                if writable {
                    Button {
                        small: true,
                        onclick: move |_| creating.set(true),
                        Icon { icon: FaPlus, width: 12, height: 12 }
                        "New {kind.label().to_lowercase()}"
                    }
                }
            }

            if board.posts.is_empty() {
                EmptyView { message: "No {kind.plural().to_lowercase()} yet." }
            } else {
                table {
                    class: "table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Author" }
                            th { "Date" }
                            if deletable {
                                th {}
                            }
                        }
                    }
                    tbody {
                        for post in board.posts.iter().cloned() {
                            PostRow {
                                key: "{post.post_id}",
                                kind,
                                class_id,
                                post: post.clone(),
                                deletable,
                                on_delete: move |post: PostSummary| pending_delete.set(Some(post)),
                            }
                        }
                    }
                }
            }
        }

        if creating() {
            NewPostDialog {
                kind,
                class_id,
                on_close: move |_| creating.set(false),
                on_created: move |message: String| {
                    creating.set(false);
                    on_changed.call(message);
                },
            }
        }

        if let Some(post) = pending_delete() {
            ConfirmDialog {
                title: "Delete {kind.label().to_lowercase()}",
                message: "Delete \"{post.title}\"? This cannot be undone.",
                on_confirm: confirm_delete,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn PostRow(
    kind: PostKind,
    class_id: i64,
    post: PostSummary,
    deletable: bool,
    on_delete: EventHandler<PostSummary>,
) -> Element {
    let target = post.clone();
    rsx! {
        tr {
            td {
                Link {
                    class: "link",
                    to: Route::post(kind, class_id, post.post_id),
                    "{post.title}"
                }
            }
            td { "{post.author}" }
            td { "{format_datetime(&post.date)}" }
            if deletable {
                td {
                    button {
                        class: "icon-button",
                        title: "Delete",
                        onclick: move |_| on_delete.call(target.clone()),
                        Icon { icon: FaTrash, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

#[component]
fn NewPostDialog(
    kind: PostKind,
    class_id: i64,
    on_close: EventHandler<()>,
    on_created: EventHandler<String>,
) -> Element {
    let client = use_api_client();
    let mut title = use_signal(String::new);
    let mut contents = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let post = NewPost {
            class_id,
            title: title().trim().to_string(),
            contents: contents(),
        };
        if let Err(message) = post.validate() {
            error.set(Some(message.to_string()));
            return;
        }
        saving.set(true);
        spawn(async move {
            match api::posts::create_post(&client(), kind, &post).await {
                Ok(()) => on_created.call(format!("Posted \"{}\"", post.title)),
                Err(e) => {
                    error.set(Some(e.to_string()));
                    saving.set(false);
                }
            }
        });
    };

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "modal-form",
                onsubmit: submit,
                h3 { class: "modal-title", "New {kind.label().to_lowercase()}" }
                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }
                div {
                    Label { html_for: "post-title", "Title" }
                    Input {
                        id: "post-title",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div {
                    Label { html_for: "post-contents", "Contents" }
                    Textarea {
                        id: "post-contents",
                        rows: 8,
                        value: contents(),
                        oninput: move |evt: FormEvent| contents.set(evt.value()),
                    }
                }
                div {
                    class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        r#type: "submit",
                        disabled: saving(),
                        if saving() { "Posting..." } else { "Post" }
                    }
                }
            }
        }
    }
}
