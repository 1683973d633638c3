// 🕒 Day Schedule - Set times and stages for one festival day
//
// Format (one file per day, e.g. friday.txt):
//   Main Stage
//   Daft Punk,10:46 PM - 11:59 PM
//   Rezz,9:00 PM - 10:15 PM
//   Second Stage
//   ...
//
// Entries are sorted by start time, then rotated so the day begins at the
// first set starting at or after `day_start_hour`. Sets before that hour
// (after midnight) wrap to the end.

use crate::day::Day;
use crate::error::LineupError;
use crate::normalizer::normalize;
use anyhow::{Context, Result};
use chrono::{NaiveTime, Timelike};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

// ============================================================================
// SCHEDULE ENTRY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub start: NaiveTime,
    pub end: NaiveTime,

    /// Normalized act name
    pub act: String,

    pub stage: String,
}

impl ScheduleEntry {
    /// "22:46-23:59"
    pub fn time_range(&self) -> String {
        format!("{}-{}", format_24h(self.start), format_24h(self.end))
    }
}

// ============================================================================
// SCHEDULE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub day: Day,

    /// Entries in festival order (sorted, then rotated)
    pub entries: Vec<ScheduleEntry>,
}

impl Schedule {
    /// Sort by (start, act, stage) and rotate to the first start at or
    /// after `day_start_hour`
    pub fn new(day: Day, mut entries: Vec<ScheduleEntry>, day_start_hour: u32) -> Self {
        entries.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| a.act.cmp(&b.act))
                .then_with(|| a.stage.cmp(&b.stage))
        });

        let first = entries
            .iter()
            .position(|e| e.start.hour() >= day_start_hour)
            .unwrap_or(entries.len());
        entries.rotate_left(first);

        Schedule { day, entries }
    }

    /// Distinct acts in schedule order (reference names for reconciliation)
    ///
    /// An act scheduled twice keeps only its first position, so for last-match
    /// ties it ranks by where it first appears.
    pub fn acts(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(|e| seen.insert(e.act.as_str()))
            .map(|e| e.act.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// PARSING
// ============================================================================

/// Parse schedule text for one day
///
/// Fails on the first malformed line: a bad time range, an empty act name
/// or a set listed before any stage header.
pub fn parse_schedule(
    content: &str,
    day: Day,
    source_file: &str,
    day_start_hour: u32,
) -> Result<Schedule, LineupError> {
    let mut entries = Vec::new();
    let mut stage: Option<String> = None;

    for (line_idx, raw_line) in content.lines().enumerate() {
        let line = raw_line.trim_end();
        let line_no = line_idx + 1;

        if line.trim().is_empty() {
            continue;
        }

        // Split at the last comma: act names may contain commas, times never do
        let Some((act_raw, times)) = line.rsplit_once(',') else {
            stage = Some(line.trim().to_string());
            continue;
        };

        let stage_name = stage
            .clone()
            .ok_or_else(|| LineupError::malformed(source_file, line_no, line, "set listed before any stage"))?;

        let (start, end) = parse_time_range(times)
            .map_err(|reason| LineupError::malformed(source_file, line_no, line, reason))?;

        let act = normalize(act_raw);
        if act.is_empty() {
            return Err(LineupError::malformed(source_file, line_no, line, "empty act name"));
        }

        entries.push(ScheduleEntry {
            start,
            end,
            act,
            stage: stage_name,
        });
    }

    Ok(Schedule::new(day, entries, day_start_hour))
}

/// Read and parse `<dir>/<day>.txt`
pub fn load_schedule(dir: &Path, day: Day, day_start_hour: u32) -> Result<Schedule> {
    let path = dir.join(day.schedule_file_name());
    let content = fs::read_to_string(&path).map_err(|source| LineupError::Io {
        path: path.clone(),
        source,
    })?;

    let schedule = parse_schedule(&content, day, &day.schedule_file_name(), day_start_hour)
        .with_context(|| format!("Failed to parse schedule: {}", path.display()))?;

    info!("Loaded {} schedule: {} sets", day, schedule.len());
    Ok(schedule)
}

/// "10:46 PM - 11:59 PM" → (22:46, 23:59)
pub fn parse_time_range(text: &str) -> Result<(NaiveTime, NaiveTime), String> {
    let (start, end) = text
        .split_once('-')
        .ok_or_else(|| "expected '<start> - <end>'".to_string())?;
    Ok((parse_time(start)?, parse_time(end)?))
}

/// "9:05 PM" → 21:05
pub fn parse_time(text: &str) -> Result<NaiveTime, String> {
    let text = text.trim();
    NaiveTime::parse_from_str(&text.to_uppercase(), "%I:%M %p")
        .map_err(|e| format!("invalid time '{}' ({})", text, e))
}

/// 24-hour "H:MM"
pub fn format_24h(time: NaiveTime) -> String {
    time.format("%-H:%M").to_string()
}

// ============================================================================
// TESTS
// ============================================================================
