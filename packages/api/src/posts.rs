//! Notice, material and assignment boards and their comments.

use crate::client::ApiClient;
use crate::error::{ApiError, Call};
use crate::models::{Board, NewComment, NewPost, PostKind, PostPage};

fn load_call(kind: PostKind) -> Call {
    Call::Other(match kind {
        PostKind::Notice => "Failed to load notices",
        PostKind::Material => "Failed to load course materials",
        PostKind::Assignment => "Failed to load assignments",
    })
}

pub async fn get_board(client: &ApiClient, kind: PostKind, class_id: i64) -> Result<Board, ApiError> {
    client
        .get(kind.path(), &[("classID", class_id.to_string())], load_call(kind))
        .await
}

pub async fn get_post(
    client: &ApiClient,
    kind: PostKind,
    class_id: i64,
    post_id: i64,
) -> Result<PostPage, ApiError> {
    client
        .get(
            kind.path(),
            &[("classID", class_id.to_string()), ("postID", post_id.to_string())],
            load_call(kind),
        )
        .await
}

pub async fn create_post(client: &ApiClient, kind: PostKind, post: &NewPost) -> Result<(), ApiError> {
    if let Err(message) = post.validate() {
        return Err(ApiError::Failed {
            status: 400,
            message: message.to_string(),
        });
    }
    let call = Call::Other(match kind {
        PostKind::Notice => "Failed to post the notice",
        PostKind::Material => "Failed to post the course material",
        PostKind::Assignment => "Failed to post the assignment",
    });
    client.submit(kind.path(), post, call).await
}

pub async fn delete_post(client: &ApiClient, kind: PostKind, post_id: i64) -> Result<(), ApiError> {
    let call = Call::Other(match kind {
        PostKind::Notice => "Failed to delete the notice",
        PostKind::Material => "Failed to delete the course material",
        PostKind::Assignment => "Failed to delete the assignment",
    });
    client
        .delete(kind.path(), &[("postID", post_id.to_string())], call)
        .await
}

pub async fn add_comment(client: &ApiClient, comment: &NewComment) -> Result<(), ApiError> {
    if comment.contents.trim().is_empty() {
        return Err(ApiError::Failed {
            status: 400,
            message: "Comment is empty".to_string(),
        });
    }
    client
        .submit("/comment", comment, Call::Other("Failed to add the comment"))
        .await
}

pub async fn delete_comment(client: &ApiClient, comment_id: i64) -> Result<(), ApiError> {
    client
        .delete(
            "/comment",
            &[("commentID", comment_id.to_string())],
            Call::Other("Failed to delete the comment"),
        )
        .await
}
