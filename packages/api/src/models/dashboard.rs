use serde::{Deserialize, Serialize};

use super::course::{Counted, Subject};
use super::id;

/// Kind of a recent-activity entry. The backend names them in Korean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    #[serde(rename = "과제", alias = "assignment")]
    Assignment,
    #[serde(rename = "공지사항", alias = "notice")]
    Notice,
}

impl ActivityKind {
    pub fn label(self) -> &'static str {
        match self {
            ActivityKind::Assignment => "Assignment",
            ActivityKind::Notice => "Notice",
        }
    }
}

/// A recent post in one of the user's courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "ClassID", with = "id")]
    pub class_id: i64,
    #[serde(rename = "ClassName")]
    pub class_name: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    #[serde(rename = "postID", with = "id")]
    pub post_id: i64,
    #[serde(rename = "postName")]
    pub title: String,
    #[serde(rename = "postDate", default)]
    pub date: String,
}

/// Everything the dashboard shows, in one response from `GET /`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    #[serde(rename = "subject", default)]
    pub courses: Counted<Subject>,
    #[serde(rename = "GPA", default)]
    pub gpa: f64,
    /// Number of assignments still to submit.
    #[serde(rename = "assignment", default)]
    pub pending_assignments: u32,
    #[serde(rename = "activity", default)]
    pub activity: Vec<Activity>,
}

impl DashboardData {
    pub fn courses(&self) -> &[Subject] {
        &self.courses.subjects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_parses() {
        let json = r#"{
            "subject": {"count": 1, "subjects": [
                {"ClassID": 1, "ClassName": "OS", "ClassProf": "Kim", "ClassTime": ["월1"], "ClassLocation": ["Saebit 101"]}
            ]},
            "GPA": 4.12,
            "assignment": 2,
            "activity": [
                {"ClassID": 1, "ClassName": "OS", "type": "과제", "postID": 5, "postName": "HW3", "postDate": "2025-05-01 09:00:00"},
                {"ClassID": 1, "ClassName": "OS", "type": "공지사항", "postID": 6, "postName": "Room change", "postDate": "2025-05-02 09:00:00"}
            ]
        }"#;
        let data: DashboardData = serde_json::from_str(json).unwrap();
        assert_eq!(data.courses().len(), 1);
        assert_eq!(data.pending_assignments, 2);
        assert_eq!(data.activity[0].kind, ActivityKind::Assignment);
        assert_eq!(data.activity[1].kind, ActivityKind::Notice);
    }

    #[test]
    fn test_unknown_activity_kind_rejected() {
        let json = r#"{"ClassID": 1, "ClassName": "OS", "type": "퀴즈", "postID": 5, "postName": "Q"}"#;
        assert!(serde_json::from_str::<Activity>(json).is_err());
    }
}
