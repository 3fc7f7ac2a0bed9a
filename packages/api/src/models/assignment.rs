use serde::{Deserialize, Serialize};

use super::id;

/// An assignment as listed on the student's assignment overview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    #[serde(rename = "postID", with = "id")]
    pub post_id: i64,
    #[serde(rename = "postName")]
    pub title: String,
    /// Due date.
    #[serde(rename = "postDate", default)]
    pub date: String,
    #[serde(rename = "submit", with = "id::flag", default)]
    pub submitted: bool,
}

/// Assignments of one enrolled course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectAssignments {
    #[serde(rename = "ClassID", with = "id")]
    pub class_id: i64,
    #[serde(rename = "ClassName")]
    pub name: String,
    #[serde(rename = "ClassProf", default)]
    pub professor: String,
    #[serde(rename = "Assignment", default)]
    pub assignments: Vec<AssignmentSummary>,
}

impl SubjectAssignments {
    pub fn pending(&self) -> usize {
        self.assignments.iter().filter(|a| !a.submitted).count()
    }
}

/// Envelope of `GET /assignment`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssignmentOverview {
    #[serde(default)]
    pub subjects: Vec<SubjectAssignments>,
}

impl AssignmentOverview {
    pub fn pending(&self) -> usize {
        self.subjects.iter().map(SubjectAssignments::pending).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_counts_pending() {
        let json = r#"{"subjects": [
            {"ClassID": 1, "ClassName": "OS", "ClassProf": "Kim", "Assignment": [
                {"postID": 1, "postName": "HW1", "postDate": "2025-04-01 23:59:00", "submit": 1},
                {"postID": 2, "postName": "HW2", "postDate": "2025-04-15 23:59:00", "submit": 0}
            ]},
            {"ClassID": "2", "ClassName": "DB", "Assignment": []}
        ]}"#;
        let overview: AssignmentOverview = serde_json::from_str(json).unwrap();
        assert_eq!(overview.subjects.len(), 2);
        assert_eq!(overview.subjects[0].pending(), 1);
        assert_eq!(overview.pending(), 1);
        assert!(overview.subjects[0].assignments[0].submitted);
    }
}
