//! Post body, attachment link and comment thread.

use api::models::{Comment, PostDetail};
use dioxus::prelude::*;

use super::{Button, ButtonVariant, EmptyView, Textarea};
use crate::auth::{use_api_client, use_auth};
use crate::format::{body_lines, format_datetime};
use crate::icons::{FaPaperclip, FaTrash};
use crate::permissions::can_delete_comment;
use crate::Icon;

/// Title, metadata, body and attachment of a post.
#[component]
pub fn PostBody(post: PostDetail) -> Element {
    let client = use_api_client();
    let attachment = post.attachment().map(|file| (file.to_string(), client().download_url(file)));

    rsx! {
        article {
            class: "card post",
            h1 { class: "post-title", "{post.title}" }
            div {
                class: "post-meta",
                span { "{post.author}" }
                span { "{format_datetime(&post.date)}" }
            }
            div {
                class: "post-contents",
                for (i, line) in body_lines(&post.contents).into_iter().enumerate() {
                    p { key: "{i}", "{line}" }
                }
            }
            if let Some((name, href)) = attachment {
                a {
                    class: "attachment",
                    href: "{href}",
                    target: "_blank",
                    rel: "noopener",
                    Icon { icon: FaPaperclip, width: 14, height: 14 }
                    span { "{name}" }
                }
            }
        }
    }
}

/// Comments under a post plus the form to add one.
///
/// Delete buttons show on the user's own comments, and on every comment for
/// admins.
#[component]
pub fn CommentList(
    comments: Vec<Comment>,
    on_add: EventHandler<String>,
    on_delete: EventHandler<i64>,
    #[props(default)] busy: bool,
) -> Element {
    let auth = use_auth();
    let mut draft = use_signal(String::new);
    let user = auth().user().cloned();
    let count = comments.len();

    rsx! {
        section {
            class: "card comments",
            h2 { class: "section-title", "Comments ({count})" }
            if count == 0 {
                EmptyView { message: "No comments yet." }
            }
            ul {
                class: "comment-list",
                for comment in comments.iter().cloned() {
                    li {
                        key: "{comment.comment_id}",
                        class: "comment",
                        div {
                            class: "comment-header",
                            span { class: "comment-author", "{comment.author}" }
                            span { class: "muted", "{format_datetime(&comment.date)}" }
                            if user.as_ref().is_some_and(|u| can_delete_comment(u, &comment.author_id)) {
                                button {
                                    class: "icon-button",
                                    title: "Delete comment",
                                    disabled: busy,
                                    onclick: move |_| on_delete.call(comment.comment_id),
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                        p { class: "comment-body", "{comment.contents}" }
                    }
                }
            }
            form {
                class: "comment-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let text = draft().trim().to_string();
                    if text.is_empty() {
                        return;
                    }
                    on_add.call(text);
                    draft.set(String::new());
                },
                Textarea {
                    id: "comment-draft",
                    rows: 3,
                    placeholder: "Write a comment",
                    value: draft(),
                    oninput: move |evt: FormEvent| draft.set(evt.value()),
                }
                Button {
                    r#type: "submit",
                    variant: ButtonVariant::Primary,
                    small: true,
                    disabled: busy || draft().trim().is_empty(),
                    "Add comment"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render_as;
    use store::Role;

    fn comment(id: i64, author_id: &str) -> Comment {
        Comment {
            comment_id: id,
            title: String::new(),
            author_id: author_id.to_string(),
            author: author_id.to_string(),
            date: "2025-05-01 10:00:00".to_string(),
            contents: format!("comment {id}"),
            file: None,
        }
    }

    fn thread() -> Element {
        rsx! {
            CommentList {
                comments: vec![comment(1, "u1"), comment(2, "other")],
                on_add: |_| {},
                on_delete: |_| {},
            }
        }
    }

    #[test]
    fn test_comment_delete_buttons() {
        let count = |html: String| html.matches("Delete comment").count();
        assert_eq!(count(render_as(Some(Role::Student), thread)), 1);
        assert_eq!(count(render_as(Some(Role::Professor), thread)), 1);
        assert_eq!(count(render_as(Some(Role::Admin), thread)), 2);
        assert_eq!(count(render_as(None, thread)), 0);
    }
}
