// Lineup Merge - schedule-aware CLI
// Reads friday.txt / saturday.txt / sunday.txt and prints, per day and in
// set order, each listed act with its time, stage and authors.

use anyhow::Result;
use clap::Parser;
use log::info;
use std::io;
use std::path::PathBuf;

use lineup_merge::{
    load_schedules, logging, merge_files_with_schedules, write_schedule_report, MergeConfig,
};

#[derive(Parser, Debug)]
#[command(name = "lineup-schedule", version, about = "Match lineup lists against the festival schedule")]
struct Cli {
    /// Author list files, merged in the order given
    #[arg(required = true, value_name = "LIST")]
    lists: Vec<PathBuf>,

    /// Directory holding friday.txt, saturday.txt and sunday.txt
    #[arg(long, value_name = "DIR", default_value = ".")]
    schedule_dir: PathBuf,

    /// JSON config (aliases, typo tolerance, day start hour)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Schedule day starts at this hour; earlier sets wrap to the end
    #[arg(long, value_name = "HOUR", value_parser = clap::value_parser!(u32).range(0..24))]
    day_start_hour: Option<u32>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => MergeConfig::from_file(path)?,
        None => MergeConfig::default(),
    };
    if let Some(hour) = cli.day_start_hour {
        config.day_start_hour = hour;
    }

    let schedules = load_schedules(&cli.schedule_dir, &config)?;
    info!(
        "lineup-schedule {}: {} sets across {} days",
        lineup_merge::VERSION,
        schedules.iter().map(|s| s.len()).sum::<usize>(),
        schedules.len()
    );

    let merged = merge_files_with_schedules(&cli.lists, &schedules, &config)?;
    write_schedule_report(&mut io::stdout().lock(), &schedules, &merged)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_no_lists_is_usage_error() {
        let err = Cli::try_parse_from(["lineup-schedule"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["lineup-schedule", "a.txt"]).unwrap();
        assert_eq!(cli.lists, vec![PathBuf::from("a.txt")]);
        assert_eq!(cli.schedule_dir, PathBuf::from("."));
        assert!(cli.day_start_hour.is_none());
    }

    #[test]
    fn test_day_start_hour_range() {
        let cli = Cli::try_parse_from(["lineup-schedule", "--day-start-hour", "18", "a.txt"]).unwrap();
        assert_eq!(cli.day_start_hour, Some(18));

        let err = Cli::try_parse_from(["lineup-schedule", "--day-start-hour", "24", "a.txt"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }
}
