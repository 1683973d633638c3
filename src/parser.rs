// 🏗️ Lineup Parser - Author list files → per-day act lists
//
// Format:
//   Author Name
//
//   Friday
//   Daft Punk
//   Skrillex
//
//   Saturday
//   ...
//
// Parsing is a small state machine:
//   AwaitingHeader → (day header) → InPartition(day) → (day header) → ...
// Lines before the first header are dropped. Every header, even a repeated
// label, starts a new run with an empty dedupe set.

use crate::day::Day;
use crate::error::LineupError;
use crate::normalizer::normalize;
use anyhow::{Context, Result};
use log::{info, trace, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

// ============================================================================
// AUTHOR LIST
// ============================================================================

/// One author's lineup, normalized and split by day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorList {
    /// Author name (first non-blank line of the file)
    pub author: String,

    /// Where this list came from (file name or test label)
    pub source_file: String,

    /// Normalized acts per day, in file order
    pub days: BTreeMap<Day, Vec<String>>,
}

impl AuthorList {
    /// Empty list for an author
    pub fn new(author: impl Into<String>) -> Self {
        AuthorList {
            author: author.into(),
            source_file: String::new(),
            days: BTreeMap::new(),
        }
    }

    /// Builder pattern: add acts for a day (raw text, normalized here)
    pub fn with_acts(mut self, day: Day, acts: &[&str]) -> Self {
        let list = self.days.entry(day).or_default();
        list.extend(acts.iter().map(|a| normalize(a)).filter(|a| !a.is_empty()));
        self
    }

    /// Acts listed for a day (empty if the day never appeared)
    pub fn acts(&self, day: Day) -> &[String] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total acts across all days
    pub fn total_acts(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

// ============================================================================
// PARSER STATE
// ============================================================================

enum ParseState {
    AwaitingHeader,
    InPartition { day: Day, seen: HashSet<String> },
}

/// Parse list text
///
/// `source_file` is only used for error messages and provenance.
pub fn parse_list(content: &str, source_file: &str) -> Result<AuthorList, LineupError> {
    let mut lines = content.lines().enumerate();

    let author = lines
        .by_ref()
        .map(|(_, line)| line.trim_end())
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| LineupError::EmptyList {
            path: source_file.into(),
        })?
        .to_string();

    let mut list = AuthorList::new(author);
    list.source_file = source_file.to_string();

    let mut state = ParseState::AwaitingHeader;

    for (line_idx, line) in lines {
        let name = normalize(line);
        if name.is_empty() {
            continue;
        }

        if let Some(day) = Day::from_label(&name) {
            list.days.entry(day).or_default();
            state = ParseState::InPartition {
                day,
                seen: HashSet::new(),
            };
            continue;
        }

        match &mut state {
            ParseState::AwaitingHeader => {
                trace!("{}:{}: dropped before first day header: '{}'", source_file, line_idx + 1, line);
            }
            ParseState::InPartition { day, seen } => {
                if seen.contains(&name) {
                    trace!("{}:{}: duplicate '{}' in {} run", source_file, line_idx + 1, name, day);
                    continue;
                }
                seen.insert(name.clone());
                list.days.entry(*day).or_default().push(name);
            }
        }
    }

    Ok(list)
}

/// Read and parse a list file
pub fn load_list(path: &Path) -> Result<AuthorList> {
    let content = fs::read_to_string(path).map_err(|source| LineupError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("unknown.txt")
        .to_string();

    let list = parse_list(&content, &filename)
        .with_context(|| format!("Failed to parse list: {}", path.display()))?;

    let per_day: Vec<String> = list
        .days
        .iter()
        .map(|(day, acts)| format!("{} {}", day, acts.len()))
        .collect();
    info!("Loaded list '{}' by {} ({})", filename, list.author, per_day.join(", "));

    if list.total_acts() == 0 {
        warn!("List '{}' by {} has no acts under any day header", filename, list.author);
    }

    Ok(list)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_list() {
        let content = "Alice\n\nFriday\nDaft Punk\nSkrillex\n\nSaturday\nZedd\n\nSunday\nRezz\n";
        let list = parse_list(content, "alice.txt").unwrap();

        assert_eq!(list.author, "Alice");
        assert_eq!(list.source_file, "alice.txt");
        assert_eq!(list.acts(Day::Friday), &["daft punk", "skrillex"]);
        assert_eq!(list.acts(Day::Saturday), &["zedd"]);
        assert_eq!(list.acts(Day::Sunday), &["rezz"]);
        assert_eq!(list.total_acts(), 4);
    }

    #[test]
    fn test_header_with_trailing_text() {
        let content = "Bob\nFRIDAY - Main Stage\nRezz\n";
        let list = parse_list(content, "bob.txt").unwrap();
        assert_eq!(list.acts(Day::Friday), &["rezz"]);
    }

    #[test]
    fn test_lines_before_header_are_dropped() {
        let content = "Carol\nZedd\nDaft Punk\nSaturday\nRezz\n";
        let list = parse_list(content, "carol.txt").unwrap();
        assert_eq!(list.acts(Day::Friday), &[] as &[String]);
        assert_eq!(list.acts(Day::Saturday), &["rezz"]);
        assert_eq!(list.total_acts(), 1);
    }

    #[test]
    fn test_dedupe_within_run() {
        let content = "Dave\nFriday\nDaft Punk\ndaft punk (live)\nDAFT PUNK\nZedd\n";
        let list = parse_list(content, "dave.txt").unwrap();
        assert_eq!(list.acts(Day::Friday), &["daft punk", "zedd"]);
    }

    #[test]
    fn test_dedupe_resets_on_repeated_header() {
        let content = "Erin\nFriday\nact1\nFriday\nact1\n";
        let list = parse_list(content, "erin.txt").unwrap();
        assert_eq!(list.acts(Day::Friday), &["act1", "act1"]);
    }

    #[test]
    fn test_dedupe_resets_between_days() {
        let content = "Frank\nFriday\nRezz\nSaturday\nRezz\n";
        let list = parse_list(content, "frank.txt").unwrap();
        assert_eq!(list.acts(Day::Friday), &["rezz"]);
        assert_eq!(list.acts(Day::Saturday), &["rezz"]);
    }

    #[test]
    fn test_empty_acts_dropped() {
        let content = "Gina\nSunday\n(TBA)\n   \nRezz\n";
        let list = parse_list(content, "gina.txt").unwrap();
        assert_eq!(list.acts(Day::Sunday), &["rezz"]);
    }

    #[test]
    fn test_author_is_first_non_blank_line() {
        let content = "\n\nHank  \nFriday\nZedd\n";
        let list = parse_list(content, "hank.txt").unwrap();
        assert_eq!(list.author, "Hank");
    }

    #[test]
    fn test_empty_file_is_error() {
        let err = parse_list("\n  \n", "empty.txt").unwrap_err();
        assert!(matches!(err, LineupError::EmptyList { .. }));
    }

    #[test]
    fn test_builder() {
        let list = AuthorList::new("Ivy").with_acts(Day::Friday, &["Daft Punk (Live)", "(tba)"]);
        assert_eq!(list.acts(Day::Friday), &["daft punk"]);
        assert_eq!(list.acts(Day::Sunday).len(), 0);
    }
}
