// 🔗 Merge Pipeline - Files in, merged lineup out
//
// list-only:   load each list → reconcile against the growing (or first-list)
//              vocabulary → merge
// schedule:    load each day's schedule → seed a fixed vocabulary with its
//              acts → load each list → reconcile → merge
//
// Lists are processed in the order given; any failure stops the run.

use crate::aggregate::{LineupMerger, MergedLineup};
use crate::config::{MergeConfig, VocabularyPolicy};
use crate::day::Day;
use crate::error::LineupError;
use crate::parser::{load_list, AuthorList};
use crate::schedule::{load_schedule, Schedule};
use anyhow::Result;
use log::info;
use std::path::{Path, PathBuf};

/// Merge already-parsed lists with the config's vocabulary policy
///
/// `fixed` is rejected here: nothing seeds the vocabulary without schedules,
/// so every list would reconcile against an empty reference.
pub fn merge_lists(lists: &[AuthorList], config: &MergeConfig) -> Result<MergedLineup> {
    if config.vocabulary == VocabularyPolicy::Fixed {
        return Err(LineupError::ConfigParse(
            "vocabulary 'fixed' needs schedules to seed it; use 'growing' or 'first_list'".to_string(),
        )
        .into());
    }

    let mut merger = LineupMerger::new(config.similarity_engine()?, config.vocabulary);
    for list in lists {
        let summary = merger.add_list(list);
        info!("Merged {}", summary.summary());
    }
    Ok(merger.finish())
}

/// Load and merge list files, in order
pub fn merge_files(paths: &[PathBuf], config: &MergeConfig) -> Result<MergedLineup> {
    let lists = paths
        .iter()
        .map(|p| load_list(p))
        .collect::<Result<Vec<_>>>()?;

    info!(
        "Merging {} lists (vocabulary: {})",
        lists.len(),
        config.vocabulary.as_str()
    );
    merge_lists(&lists, config)
}

/// Load the three day schedules from a directory
pub fn load_schedules(dir: &Path, config: &MergeConfig) -> Result<Vec<Schedule>> {
    Day::ALL
        .into_iter()
        .map(|day| load_schedule(dir, day, config.day_start_hour))
        .collect()
}

/// Merge lists against schedule acts (fixed vocabulary)
pub fn merge_lists_with_schedules(
    lists: &[AuthorList],
    schedules: &[Schedule],
    config: &MergeConfig,
) -> Result<MergedLineup> {
    let mut merger = LineupMerger::new(config.similarity_engine()?, VocabularyPolicy::Fixed);
    for schedule in schedules {
        merger.seed_vocabulary(schedule.day, &schedule.acts());
    }

    for list in lists {
        let summary = merger.add_list(list);
        info!("Merged {}", summary.summary());
    }
    Ok(merger.finish())
}

/// Load list files and merge them against the schedules
pub fn merge_files_with_schedules(
    paths: &[PathBuf],
    schedules: &[Schedule],
    config: &MergeConfig,
) -> Result<MergedLineup> {
    let lists = paths
        .iter()
        .map(|p| load_list(p))
        .collect::<Result<Vec<_>>>()?;
    merge_lists_with_schedules(&lists, schedules, config)
}
