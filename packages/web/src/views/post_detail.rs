//! Detail pages of notices, course materials and assignments.

use api::models::{NewComment, PostKind, PostPage};
use dioxus::prelude::*;
use ui::components::{
    Alert, Button, ButtonVariant, CommentList, ConfirmDialog, ErrorView, LoadingView, Notice,
    PostBody,
};
use ui::icons::{FaArrowLeft, FaTrash};
use ui::{use_api_client, Action, Icon, IfAllowed, LoadState};

use crate::Route;

#[component]
pub fn NoticeDetail(class_id: i64, post_id: i64) -> Element {
    rsx! { PostView { kind: PostKind::Notice, class_id, post_id } }
}

#[component]
pub fn MaterialDetail(class_id: i64, post_id: i64) -> Element {
    rsx! { PostView { kind: PostKind::Material, class_id, post_id } }
}

#[component]
pub fn AssignmentDetail(class_id: i64, post_id: i64) -> Element {
    rsx! { PostView { kind: PostKind::Assignment, class_id, post_id } }
}

#[component]
fn PostView(kind: PostKind, class_id: i64, post_id: i64) -> Element {
    let client = use_api_client();
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut page = use_resource(use_reactive!(|(kind, class_id, post_id)| async move {
        api::posts::get_post(&client(), kind, class_id, post_id).await
    }));

    rsx! {
        div {
            class: "page",
            Alert { notice }
            Link {
                class: "link back-link",
                to: Route::CourseDetail { class_id },
                Icon { icon: FaArrowLeft, width: 12, height: 12 }
                span { "Back to course" }
            }
            match LoadState::from(page.cloned()) {
                LoadState::Loading => rsx! { LoadingView {} },
                LoadState::Failed(error) => rsx! { ErrorView { error } },
                LoadState::Ready(loaded) => rsx! {
                    PostContent {
                        kind,
                        page: loaded,
                        on_changed: move |message: String| {
                            notice.set(Some(Notice::success(message)));
                            page.restart();
                        },
                        on_error: move |message: String| notice.set(Some(Notice::error(message))),
                    }
                },
            }
        }
    }
}

#[component]
fn PostContent(
    kind: PostKind,
    page: PostPage,
    on_changed: EventHandler<String>,
    on_error: EventHandler<String>,
) -> Element {
    let client = use_api_client();
    let nav = use_navigator();
    let mut confirming = use_signal(|| false);
    let mut busy = use_signal(|| false);
    let class_id = page.subject.subject.class_id;
    let post_id = page.post.post_id;

    let add_comment = move |contents: String| {
        let comment = NewComment {
            post_id,
            title: String::new(),
            contents,
        };
        busy.set(true);
        spawn(async move {
            let result = api::posts::add_comment(&client(), &comment).await;
            busy.set(false);
            match result {
                Ok(()) => on_changed.call("Comment added".to_string()),
                Err(e) => on_error.call(e.to_string()),
            }
        });
    };

    let delete_comment = move |comment_id: i64| {
        busy.set(true);
        spawn(async move {
            let result = api::posts::delete_comment(&client(), comment_id).await;
            busy.set(false);
            match result {
                Ok(()) => on_changed.call("Comment deleted".to_string()),
                Err(e) => on_error.call(e.to_string()),
            }
        });
    };

    let delete_post = move |_: ()| {
        confirming.set(false);
        spawn(async move {
            match api::posts::delete_post(&client(), kind, post_id).await {
                Ok(()) => {
                    tracing::info!("Deleted {} {post_id}", kind.label());
                    nav.replace(Route::CourseDetail { class_id });
                }
                Err(e) => on_error.call(e.to_string()),
            }
        });
    };

    rsx! {
        div {
            class: "post-course muted",
            "{page.subject.subject.name} · {kind.label()}"
        }
        PostBody { post: page.post.clone() }
        IfAllowed {
            action: Action::DeletePost,
            div {
                class: "post-actions",
                Button {
                    variant: ButtonVariant::Danger,
                    small: true,
                    onclick: move |_| confirming.set(true),
                    Icon { icon: FaTrash, width: 12, height: 12 }
                    "Delete"
                }
            }
        }
        CommentList {
            comments: page.post.comments.clone(),
            busy: busy(),
            on_add: add_comment,
            on_delete: delete_comment,
        }
        if confirming() {
            ConfirmDialog {
                title: "Delete {kind.label().to_lowercase()}",
                message: "Delete \"{page.post.title}\"? This cannot be undone.",
                on_confirm: delete_post,
                on_cancel: move |_| confirming.set(false),
            }
        }
    }
}
