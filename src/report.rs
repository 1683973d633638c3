// 🖨️ Report Rendering - Merged lineup → text / CSV
//
// List report:              Schedule report:
//   Friday                    Friday
//   daft punk [A, B]          21:00-22:15,rezz,Main Stage,"[A, B]"
//   rezz [B]                  ...
//
//   Saturday                  Saturday
//   ...                       ...

use crate::aggregate::MergedLineup;
use crate::day::Day;
use crate::schedule::Schedule;
use anyhow::{Context, Result};
use std::io::Write;

/// "[A, B]"
pub fn format_authors(authors: &[String]) -> String {
    format!("[{}]", authors.join(", "))
}

/// Write every day: header, then `act [authors]` in act order
pub fn write_lineup_report<W: Write>(out: &mut W, merged: &MergedLineup) -> Result<()> {
    for (i, day) in Day::ALL.into_iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", day)?;

        for (act, authors) in merged.day(day).iter() {
            writeln!(out, "{} {}", act, format_authors(authors))?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Write every scheduled set that at least one author listed, in schedule order
///
/// Rows are CSV: `start-end,act,stage,[authors]`.
pub fn write_schedule_report<W: Write>(
    out: &mut W,
    schedules: &[Schedule],
    merged: &MergedLineup,
) -> Result<()> {
    for (i, schedule) in schedules.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", schedule.day)?;

        let attribution = merged.day(schedule.day);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(&mut *out);

        for entry in &schedule.entries {
            let Some(authors) = attribution.authors(&entry.act) else {
                continue;
            };

            writer
                .write_record([
                    entry.time_range(),
                    entry.act.clone(),
                    entry.stage.clone(),
                    format_authors(authors),
                ])
                .with_context(|| format!("Failed to write {} row for '{}'", schedule.day, entry.act))?;
        }

        writer.flush()?;
    }

    out.flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
