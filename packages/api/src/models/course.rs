use serde::{Deserialize, Serialize};

use super::id;

/// A class offering: name, professor, weekly time slots and rooms.
///
/// `times[i]` is held in `locations[i]` when both lists have the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    #[serde(rename = "ClassID", with = "id")]
    pub class_id: i64,
    #[serde(rename = "ClassName")]
    pub name: String,
    #[serde(rename = "ClassProf", default)]
    pub professor: String,
    #[serde(rename = "ClassTime", default)]
    pub times: Vec<String>,
    #[serde(rename = "ClassLocation", default)]
    pub locations: Vec<String>,
}

impl Subject {
    /// Time slots joined for display, e.g. `"월1, 수2"`.
    pub fn schedule(&self) -> String {
        self.times.join(", ")
    }

    /// Rooms joined for display, with consecutive duplicates collapsed.
    pub fn rooms(&self) -> String {
        let mut rooms: Vec<&str> = self.locations.iter().map(String::as_str).collect();
        rooms.dedup();
        rooms.join(", ")
    }

    /// Room of the `i`-th time slot, falling back to the first room.
    pub fn room_for_slot(&self, i: usize) -> Option<&str> {
        self.locations
            .get(i)
            .or_else(|| self.locations.first())
            .map(String::as_str)
    }
}

/// Course header shown above a notice/material/assignment board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSubject {
    #[serde(flatten)]
    pub subject: Subject,
    /// Whether the current user may post on this course's boards.
    #[serde(rename = "writeEnable", with = "id::flag", default)]
    pub write_enable: bool,
}

/// A list the backend wraps together with its length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Counted<T> {
    #[serde(default)]
    pub count: usize,
    #[serde(default = "Vec::new")]
    pub subjects: Vec<T>,
}

impl<T> Counted<T> {
    /// Unwrap the list. A disagreeing `count` is logged; the list wins.
    pub fn into_items(self, what: &str) -> Vec<T> {
        if self.count != self.subjects.len() {
            tracing::warn!(
                "{what}: backend reported count {} but sent {} items",
                self.count,
                self.subjects.len()
            );
        }
        self.subjects
    }
}

impl<T> Default for Counted<T> {
    fn default() -> Self {
        Self {
            count: 0,
            subjects: Vec::new(),
        }
    }
}

/// Body for creating a course (admin).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCourse {
    #[serde(rename = "ClassName")]
    pub name: String,
    #[serde(rename = "ClassProf")]
    pub professor: String,
    #[serde(rename = "ClassTime")]
    pub times: Vec<String>,
    #[serde(rename = "ClassLocation")]
    pub locations: Vec<String>,
}

impl NewCourse {
    /// Build from comma separated form fields; blank entries are dropped.
    pub fn from_form(name: &str, professor: &str, times: &str, locations: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            professor: professor.trim().to_string(),
            times: split_list(times),
            locations: split_list(locations),
        }
    }

    /// First problem with the form, if any.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_empty() {
            return Err("Course name is required");
        }
        if self.professor.is_empty() {
            return Err("Professor is required");
        }
        if self.times.is_empty() {
            return Err("At least one time slot is required");
        }
        Ok(())
    }
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Backend reply to an enrollment request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollResult {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_subject_flattens() {
        let json = r#"{
            "ClassID": 10,
            "ClassName": "Capstone Design",
            "ClassProf": "Kim",
            "ClassTime": ["월1", "수2"],
            "ClassLocation": ["Saebit 102", "Saebit 102"],
            "writeEnable": 1
        }"#;
        let board: BoardSubject = serde_json::from_str(json).unwrap();
        assert_eq!(board.subject.class_id, 10);
        assert!(board.write_enable);
        assert_eq!(board.subject.schedule(), "월1, 수2");
        assert_eq!(board.subject.rooms(), "Saebit 102");
    }

    #[test]
    fn test_subject_defaults_optional_lists() {
        let subject: Subject =
            serde_json::from_str(r#"{"ClassID": "7", "ClassName": "OS"}"#).unwrap();
        assert_eq!(subject.class_id, 7);
        assert!(subject.times.is_empty());
        assert_eq!(subject.room_for_slot(0), None);
    }

    #[test]
    fn test_counted_list_wins_over_count() {
        let counted: Counted<u8> = serde_json::from_str(r#"{"count": 5, "subjects": [1, 2]}"#).unwrap();
        assert_eq!(counted.into_items("test"), vec![1, 2]);
    }

    #[test]
    fn test_new_course_from_form() {
        let course = NewCourse::from_form(" Databases ", "Park", "화3, 목3,", "Bima 301");
        assert_eq!(course.name, "Databases");
        assert_eq!(course.times, vec!["화3", "목3"]);
        assert_eq!(course.locations, vec!["Bima 301"]);
        assert!(course.validate().is_ok());

        let json = serde_json::to_value(&course).unwrap();
        assert_eq!(json["ClassName"], "Databases");
        assert_eq!(json["ClassTime"][1], "목3");

        assert_eq!(
            NewCourse::from_form("", "Park", "화3", "").validate(),
            Err("Course name is required")
        );
    }
}
