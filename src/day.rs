// 📅 Festival Days - Closed set of day partitions
// Every author list and schedule is segmented by one of these days.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// DAY
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// All days in festival order
    pub const ALL: [Day; 3] = [Day::Friday, Day::Saturday, Day::Sunday];

    /// Human-readable name, used as the section header in reports
    pub fn name(&self) -> &'static str {
        match self {
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }

    /// Lower-case label matched against header lines
    pub fn label(&self) -> &'static str {
        match self {
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Schedule file name for this day (e.g. "friday.txt")
    pub fn schedule_file_name(&self) -> String {
        format!("{}.txt", self.label())
    }

    /// Parse a header line into a day
    ///
    /// Matching is a case-insensitive prefix match, so anything after the
    /// label is ignored:
    /// - "Friday" → Some(Friday)
    /// - "SATURDAY Stage A" → Some(Saturday)
    /// - "Daft Punk" → None
    pub fn from_label(text: &str) -> Option<Day> {
        let lower = text.trim_start().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| lower.starts_with(day.label()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_exact() {
        assert_eq!(Day::from_label("friday"), Some(Day::Friday));
        assert_eq!(Day::from_label("Saturday"), Some(Day::Saturday));
        assert_eq!(Day::from_label("SUNDAY"), Some(Day::Sunday));
    }

    #[test]
    fn test_from_label_ignores_trailing_text() {
        assert_eq!(Day::from_label("Friday Stage A"), Some(Day::Friday));
        assert_eq!(Day::from_label("sunday (day 3)"), Some(Day::Sunday));
    }

    #[test]
    fn test_from_label_rejects_acts() {
        assert_eq!(Day::from_label("daft punk"), None);
        assert_eq!(Day::from_label("fri"), None);
        assert_eq!(Day::from_label(""), None);
    }

    #[test]
    fn test_day_ordering_and_names() {
        let mut days = vec![Day::Sunday, Day::Friday, Day::Saturday];
        days.sort();
        assert_eq!(days, Day::ALL.to_vec());
        assert_eq!(Day::Saturday.to_string(), "Saturday");
        assert_eq!(Day::Sunday.schedule_file_name(), "sunday.txt");
    }
}
