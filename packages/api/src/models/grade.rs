use serde::{Deserialize, Serialize};

use super::course::Counted;
use super::id;

/// Final grade of one completed course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRecord {
    #[serde(rename = "ClassID", with = "id")]
    pub class_id: i64,
    #[serde(rename = "ClassName")]
    pub name: String,
    #[serde(rename = "ClassProf", default)]
    pub professor: String,
    /// Year and term packed as `YYYYT`, e.g. `20241` for 2024 term 1.
    #[serde(rename = "ClassSemester")]
    pub semester: u32,
    /// Letter grade as issued (`A+`, `B0`, `P`, ...).
    #[serde(rename = "ClassGrade")]
    pub grade: String,
    #[serde(rename = "ClassCredit")]
    pub credits: u32,
    #[serde(rename = "ClassScore", default)]
    pub score: f64,
}

impl GradeRecord {
    /// `20241` becomes `"2024-1"`. Values that do not look packed are shown
    /// as-is.
    pub fn semester_label(&self) -> String {
        let year = self.semester / 10;
        let term = self.semester % 10;
        if (1000..=9999).contains(&year) && term > 0 {
            format!("{year}-{term}")
        } else {
            self.semester.to_string()
        }
    }
}

/// Transcript: the GPA as computed by the backend and every graded course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeReport {
    #[serde(rename = "GPA")]
    pub gpa: f64,
    #[serde(rename = "subject", default)]
    pub records: Counted<GradeRecord>,
}

impl GradeReport {
    pub fn records(&self) -> &[GradeRecord] {
        &self.records.subjects
    }

    /// Sum of the credits of every listed course.
    pub fn total_credits(&self) -> u32 {
        self.records().iter().map(|r| r.credits).sum()
    }

    /// Records ordered newest semester first, keeping backend order within a
    /// semester.
    pub fn by_semester(&self) -> Vec<&GradeRecord> {
        let mut records: Vec<&GradeRecord> = self.records().iter().collect();
        records.sort_by(|a, b| b.semester.cmp(&a.semester));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"{
        "GPA": 3.8,
        "subject": {
            "count": 3,
            "subjects": [
                {"ClassID": 10, "ClassName": "System Programming", "ClassProf": "Kim", "ClassSemester": 20241, "ClassGrade": "A", "ClassCredit": 3, "ClassScore": 90},
                {"ClassID": 11, "ClassName": "Data Structures", "ClassProf": "Lee", "ClassSemester": 20232, "ClassGrade": "B+", "ClassCredit": 3, "ClassScore": 82},
                {"ClassID": 13, "ClassName": "Digital Logic 1", "ClassProf": "Lee", "ClassSemester": 20231, "ClassGrade": "A+", "ClassCredit": 2, "ClassScore": 99}
            ]
        }
    }"#;

    #[test]
    fn test_report_parses_and_sums_credits() {
        let report: GradeReport = serde_json::from_str(REPORT).unwrap();
        assert_eq!(report.gpa, 3.8);
        assert_eq!(report.records().len(), 3);
        assert_eq!(report.total_credits(), 8);
    }

    #[test]
    fn test_same_input_same_totals() {
        let a: GradeReport = serde_json::from_str(REPORT).unwrap();
        let b: GradeReport = serde_json::from_str(&serde_json::to_string(&a).unwrap()).unwrap();
        assert_eq!(a.gpa, b.gpa);
        assert_eq!(a.total_credits(), b.total_credits());
    }

    #[test]
    fn test_semester_label() {
        let report: GradeReport = serde_json::from_str(REPORT).unwrap();
        assert_eq!(report.records()[0].semester_label(), "2024-1");
        let mut odd = report.records()[0].clone();
        odd.semester = 7;
        assert_eq!(odd.semester_label(), "7");
    }

    #[test]
    fn test_by_semester_newest_first() {
        let report: GradeReport = serde_json::from_str(REPORT).unwrap();
        let order: Vec<u32> = report.by_semester().iter().map(|r| r.semester).collect();
        assert_eq!(order, vec![20241, 20232, 20231]);
    }
}
