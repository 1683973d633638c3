// Lineup Merge - Core Library
// Normalizes, reconciles and merges festival lineup lists from many authors.
// Shared by the list-only CLI (`lineup-merge`) and the schedule-aware CLI
// (`lineup-schedule`).

pub mod day;
pub mod error;
pub mod normalizer;
pub mod aliases;
pub mod similarity;
pub mod reconciliation;
pub mod aggregate;
pub mod parser;
pub mod schedule;
pub mod config;
pub mod report;
pub mod pipeline;
pub mod logging;

// Re-export commonly used types
pub use day::Day;
pub use error::LineupError;
pub use normalizer::normalize;
pub use aliases::AliasTable;
pub use similarity::{edit_distance, non_alpha_count, MatchRule, SimilarityEngine};
pub use reconciliation::{reconcile, reconcile_with_report, ReconciledList, Rewrite};
pub use aggregate::{AttributionMap, LineupMerger, MergeSummary, MergedLineup, Vocabulary};
pub use parser::{load_list, parse_list, AuthorList};
pub use schedule::{load_schedule, parse_schedule, Schedule, ScheduleEntry};
pub use config::{MergeConfig, TypoConfig, VocabularyPolicy};
pub use report::{write_lineup_report, write_schedule_report};
pub use pipeline::{merge_files, merge_files_with_schedules, merge_lists, load_schedules};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
