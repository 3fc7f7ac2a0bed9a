//! Display formatting shared by the pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// `"2025-04-18 11:30:12"` → `"2025-04-18 11:30"`. RFC 3339 timestamps are
/// accepted too; anything unparseable is shown as sent.
pub fn format_datetime(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%Y-%m-%d %H:%M").to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.naive_local().format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}

/// Date part only, for compact lists.
pub fn format_date(raw: &str) -> String {
    let formatted = format_datetime(raw);
    match NaiveDate::parse_from_str(formatted.get(..10).unwrap_or_default(), "%Y-%m-%d") {
        Ok(date) => date.format("%Y-%m-%d").to_string(),
        Err(_) => formatted,
    }
}

/// The backend's GPA exactly as sent; no rounding or recomputation.
pub fn format_gpa(gpa: f64) -> String {
    gpa.to_string()
}

/// Split a post body on the `<br>` tags the backend stores line breaks as.
/// No other markup is interpreted; the lines are rendered as text.
pub fn body_lines(body: &str) -> Vec<String> {
    let mut normalized = body.replace("\r\n", "\n");
    for tag in ["<br />", "<br/>", "<BR>", "<br>"] {
        normalized = normalized.replace(tag, "\n");
    }
    normalized.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2025-04-18 11:30:12"), "2025-04-18 11:30");
        assert_eq!(format_datetime("2025-04-18T11:30:12+09:00"), "2025-04-18 11:30");
        assert_eq!(format_datetime("yesterday"), "yesterday");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-04-18 11:30:12"), "2025-04-18");
        assert_eq!(format_date("soon"), "soon");
    }

    #[test]
    fn test_format_gpa_passes_value_through() {
        assert_eq!(format_gpa(3.875), format_gpa(3.875));
        assert_eq!(format_gpa(3.875), "3.875");
        assert_eq!(format_gpa(4.12), "4.12");
        assert_eq!(format_gpa(4.0), "4");
    }

    #[test]
    fn test_body_lines() {
        assert_eq!(
            body_lines("Syllabus attached.<br>Please read it.<br />Thanks"),
            vec!["Syllabus attached.", "Please read it.", "Thanks"]
        );
        assert_eq!(body_lines("<b>plain</b>"), vec!["<b>plain</b>"]);
    }
}
