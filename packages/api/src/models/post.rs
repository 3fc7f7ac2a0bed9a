//! Posts: notices, course materials and assignments, with their comments.
//!
//! The three boards share one shape on the wire. Only the path and the name of
//! the list field differ (`notice`, `material`, `assignment`), which
//! [`PostKind`] and the serde aliases on [`Board`] / [`PostPage`] absorb.

use serde::{Deserialize, Serialize};

use super::course::BoardSubject;
use super::id;

/// Which board a post lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostKind {
    Notice,
    Material,
    Assignment,
}

impl PostKind {
    pub const ALL: [PostKind; 3] = [PostKind::Notice, PostKind::Material, PostKind::Assignment];

    /// Backend path of the board.
    pub fn path(self) -> &'static str {
        match self {
            PostKind::Notice => "/classNotice",
            PostKind::Material => "/classCourse",
            PostKind::Assignment => "/classAssignment",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PostKind::Notice => "Notice",
            PostKind::Material => "Course material",
            PostKind::Assignment => "Assignment",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            PostKind::Notice => "Notices",
            PostKind::Material => "Materials",
            PostKind::Assignment => "Assignments",
        }
    }

    /// Route segment used by the web client (`notices`, `materials`, ...).
    pub fn slug(self) -> &'static str {
        match self {
            PostKind::Notice => "notices",
            PostKind::Material => "materials",
            PostKind::Assignment => "assignments",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == slug)
    }
}

/// One row of a board listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    #[serde(rename = "postID", with = "id")]
    pub post_id: i64,
    #[serde(rename = "postName")]
    pub title: String,
    #[serde(rename = "postUserName", default)]
    pub author: String,
    #[serde(rename = "postDate", default)]
    pub date: String,
}

/// A comment under a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "commentID", with = "id")]
    pub comment_id: i64,
    #[serde(rename = "commentName", default)]
    pub title: String,
    #[serde(rename = "commentUserID", with = "id::text")]
    pub author_id: String,
    #[serde(rename = "commentUserName", default)]
    pub author: String,
    #[serde(rename = "commentDate", default)]
    pub date: String,
    #[serde(rename = "commentContents", default)]
    pub contents: String,
    #[serde(rename = "commentFile", default)]
    pub file: Option<String>,
}

impl Comment {
    pub fn is_written_by(&self, user_id: &str) -> bool {
        self.author_id == user_id
    }
}

/// A full post with body, attachment and comments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetail {
    #[serde(rename = "postID", with = "id")]
    pub post_id: i64,
    #[serde(rename = "postName")]
    pub title: String,
    #[serde(rename = "postUserID", with = "id::text", default)]
    pub author_id: String,
    #[serde(rename = "postUserName", default)]
    pub author: String,
    #[serde(rename = "postDate", default)]
    pub date: String,
    #[serde(rename = "postContents", default)]
    pub contents: String,
    #[serde(rename = "postFile", default)]
    pub file: Option<String>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl PostDetail {
    /// Attachment name, treating an empty string as no attachment.
    pub fn attachment(&self) -> Option<&str> {
        self.file.as_deref().filter(|f| !f.trim().is_empty())
    }
}

/// A course board: the course header plus the posts of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub subject: BoardSubject,
    #[serde(alias = "notice", alias = "material", alias = "assignment", default)]
    pub posts: Vec<PostSummary>,
}

/// A single post together with its course header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub subject: BoardSubject,
    #[serde(alias = "notice", alias = "material", alias = "assignment")]
    pub post: PostDetail,
}

/// Body for creating a post.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPost {
    #[serde(rename = "classID")]
    pub class_id: i64,
    #[serde(rename = "postName")]
    pub title: String,
    #[serde(rename = "postString")]
    pub contents: String,
}

impl NewPost {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.contents.trim().is_empty() {
            return Err("Contents are required");
        }
        Ok(())
    }
}

/// Body for adding a comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewComment {
    #[serde(rename = "postID")]
    pub post_id: i64,
    #[serde(rename = "commentName")]
    pub title: String,
    #[serde(rename = "commentContents")]
    pub contents: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOTICE_DETAIL: &str = r#"{
        "subject": {
            "ClassID": 12,
            "ClassName": "Software Engineering",
            "ClassProf": "Lee",
            "ClassTime": ["월1", "수2"],
            "ClassLocation": ["Saebit 203", "Saebit 203"],
            "writeEnable": 0
        },
        "notice": {
            "postID": 1,
            "postName": "Syllabus",
            "postUserID": 12000001,
            "postUserName": "Lee",
            "postDate": "2025-02-26 12:00:32",
            "postContents": "Syllabus attached.<br>Please read it.",
            "postFile": "syllabus.pdf",
            "comments": [{
                "commentID": 1,
                "commentName": "Correction",
                "commentUserID": 12000001,
                "commentUserName": "Lee",
                "commentDate": "2025-02-27 12:00:32",
                "commentContents": "Fixed a typo.",
                "commentFile": null
            }]
        }
    }"#;

    #[test]
    fn test_notice_detail_parses() {
        let page: PostPage = serde_json::from_str(NOTICE_DETAIL).unwrap();
        assert_eq!(page.subject.subject.name, "Software Engineering");
        assert!(!page.subject.write_enable);
        assert_eq!(page.post.post_id, 1);
        assert_eq!(page.post.author_id, "12000001");
        assert_eq!(page.post.attachment(), Some("syllabus.pdf"));
        assert_eq!(page.post.comments.len(), 1);
        assert!(page.post.comments[0].is_written_by("12000001"));
        assert!(page.post.comments[0].file.is_none());
    }

    #[test]
    fn test_board_accepts_each_list_name() {
        for key in ["notice", "material", "assignment"] {
            let json = format!(
                r#"{{"subject": {{"ClassID": 3, "ClassName": "OS", "writeEnable": 1}},
                    "{key}": [{{"postID": 9, "postName": "Midterm", "postUserName": "Kim", "postDate": "2025-05-03 14:37:22"}}]}}"#
            );
            let board: Board = serde_json::from_str(&json).unwrap();
            assert_eq!(board.posts.len(), 1, "list under {key}");
            assert_eq!(board.posts[0].title, "Midterm");
        }
    }

    #[test]
    fn test_empty_attachment_is_none() {
        let mut page: PostPage = serde_json::from_str(NOTICE_DETAIL).unwrap();
        page.post.file = Some(String::new());
        assert_eq!(page.post.attachment(), None);
    }

    #[test]
    fn test_post_kind_slugs() {
        for kind in PostKind::ALL {
            assert_eq!(PostKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(PostKind::from_slug("grades"), None);
        assert_eq!(PostKind::Material.path(), "/classCourse");
    }

    #[test]
    fn test_new_post_validation() {
        let post = NewPost {
            class_id: 3,
            title: "Week 1 slides".to_string(),
            contents: " ".to_string(),
        };
        assert_eq!(post.validate(), Err("Contents are required"));
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["classID"], 3);
        assert_eq!(json["postName"], "Week 1 slides");
    }
}
