//! Weekly timetable built from course time slots.
//!
//! The backend encodes a slot as a weekday character followed by a period
//! number: `"월1"` is Monday, first period. Slots that do not follow this
//! shape are kept aside so the list view can still show them.

use api::models::Subject;

/// Weekday labels, Monday first. Index matches [`Slot::day`].
pub const DAYS: [&str; 6] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const DAY_CHARS: [char; 6] = ['월', '화', '수', '목', '금', '토'];

/// A parsed time slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    pub day: usize,
    pub period: u8,
}

impl Slot {
    pub fn parse(raw: &str) -> Option<Slot> {
        let raw = raw.trim();
        let split = raw.find(|c: char| c.is_ascii_digit())?;
        let (day, period) = raw.split_at(split);
        let day = day_index(day.trim())?;
        let period = period.trim().parse::<u8>().ok().filter(|p| *p > 0)?;
        Some(Slot { day, period })
    }

    pub fn label(&self) -> String {
        format!("{} {}", DAYS[self.day], period_label(self.period))
    }
}

fn day_index(day: &str) -> Option<usize> {
    let mut chars = day.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(i) = DAY_CHARS.iter().position(|d| *d == c) {
            return Some(i);
        }
    }
    DAYS.iter()
        .position(|d| d.eq_ignore_ascii_case(day.get(..3).unwrap_or(day)))
}

pub fn period_label(period: u8) -> String {
    format!("Period {period}")
}

/// One occupied cell of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub slot: Slot,
    pub class_id: i64,
    pub name: String,
    pub room: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timetable {
    /// Sorted by day, then period.
    pub entries: Vec<Entry>,
    /// `(course name, raw slot)` pairs that could not be placed.
    pub unplaced: Vec<(String, String)>,
}

impl Timetable {
    pub fn build(subjects: &[Subject]) -> Self {
        let mut table = Timetable::default();
        for subject in subjects {
            for (i, raw) in subject.times.iter().enumerate() {
                match Slot::parse(raw) {
                    Some(slot) => table.entries.push(Entry {
                        slot,
                        class_id: subject.class_id,
                        name: subject.name.clone(),
                        room: subject.room_for_slot(i).map(str::to_string),
                    }),
                    None => table.unplaced.push((subject.name.clone(), raw.clone())),
                }
            }
        }
        table.entries.sort_by_key(|e| e.slot);
        table
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty() && self.unplaced.is_empty()
    }

    /// Days shown as columns: Monday to Friday, plus Saturday when used.
    pub fn days(&self) -> usize {
        if self.entries.iter().any(|e| e.slot.day == 5) {
            6
        } else {
            5
        }
    }

    /// Periods shown as rows: 1 through the latest period used.
    pub fn periods(&self) -> Vec<u8> {
        let last = self.entries.iter().map(|e| e.slot.period).max().unwrap_or(0);
        (1..=last).collect()
    }

    pub fn at(&self, day: usize, period: u8) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|e| e.slot.day == day && e.slot.period == period)
    }

    /// Entries grouped per course for the list view, in first-slot order.
    pub fn by_course(&self) -> Vec<(String, Vec<&Entry>)> {
        let mut groups: Vec<(i64, String, Vec<&Entry>)> = Vec::new();
        for entry in &self.entries {
            match groups.iter_mut().find(|(id, _, _)| *id == entry.class_id) {
                Some((_, _, list)) => list.push(entry),
                None => groups.push((entry.class_id, entry.name.clone(), vec![entry])),
            }
        }
        groups.into_iter().map(|(_, name, list)| (name, list)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(id: i64, name: &str, times: &[&str], rooms: &[&str]) -> Subject {
        Subject {
            class_id: id,
            name: name.to_string(),
            professor: "Lee".to_string(),
            times: times.iter().map(|s| s.to_string()).collect(),
            locations: rooms.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!(Slot::parse("월1"), Some(Slot { day: 0, period: 1 }));
        assert_eq!(Slot::parse(" 금 10 "), Some(Slot { day: 4, period: 10 }));
        assert_eq!(Slot::parse("Wed3"), Some(Slot { day: 2, period: 3 }));
        assert_eq!(Slot::parse("일1"), None);
        assert_eq!(Slot::parse("월"), None);
        assert_eq!(Slot::parse("월0"), None);
    }

    #[test]
    fn test_build_grid() {
        let table = Timetable::build(&[
            subject(1, "Algorithms", &["수2", "월1"], &["B101", "B102"]),
            subject(2, "Databases", &["화3", "TBA"], &["C201"]),
        ]);
        assert_eq!(table.entries.len(), 3);
        assert_eq!(table.entries[0].slot, Slot { day: 0, period: 1 });
        assert_eq!(table.at(0, 1).and_then(|e| e.room.as_deref()), Some("B102"));
        assert_eq!(table.at(1, 3).map(|e| e.name.as_str()), Some("Databases"));
        assert_eq!(table.at(4, 1), None);
        assert_eq!(table.periods(), vec![1, 2, 3]);
        assert_eq!(table.days(), 5);
        assert_eq!(table.unplaced, vec![("Databases".to_string(), "TBA".to_string())]);
    }

    #[test]
    fn test_by_course() {
        let table = Timetable::build(&[
            subject(1, "Algorithms", &["월1", "수2"], &["B101"]),
            subject(2, "Databases", &["화3"], &["C201"]),
        ]);
        let groups = table.by_course();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Algorithms");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].room.as_deref(), Some("B101"));
    }
}
