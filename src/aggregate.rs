// 🧮 Merge Aggregator - Fold author lists into per-day attribution maps
//
// For each list, in the order given:
//   1. reconcile each day's acts against that day's vocabulary
//   2. append the author to every reconciled act's attribution list
//   3. grow the vocabulary according to the policy
//
// Lists are processed strictly one after another: each list is reconciled
// against names that earlier lists contributed.

use crate::config::VocabularyPolicy;
use crate::day::Day;
use crate::parser::AuthorList;
use crate::reconciliation::{reconcile_with_report, Rewrite};
use crate::similarity::SimilarityEngine;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

// ============================================================================
// ATTRIBUTION MAP
// ============================================================================

/// Canonical act → authors who listed it, in processing order
///
/// Iteration is in lexicographic order of act name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributionMap {
    entries: BTreeMap<String, Vec<String>>,
}

impl AttributionMap {
    pub fn new() -> Self {
        AttributionMap::default()
    }

    /// Attribute an act to an author
    ///
    /// Returns false when the author was already recorded for this act.
    pub fn record(&mut self, act: &str, author: &str) -> bool {
        let authors = self.entries.entry(act.to_string()).or_default();
        if authors.iter().any(|a| a == author) {
            return false;
        }
        authors.push(author.to_string());
        true
    }

    pub fn authors(&self, act: &str) -> Option<&[String]> {
        self.entries.get(act).map(Vec::as_slice)
    }

    pub fn contains(&self, act: &str) -> bool {
        self.entries.contains_key(act)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// VOCABULARY
// ============================================================================

/// Insertion-ordered set of canonical names
///
/// Order matters: reconciliation lets the last matching reference win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    names: Vec<String>,
    index: HashSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Vocabulary::default()
    }

    /// Add a name if not already present
    pub fn insert(&mut self, name: &str) -> bool {
        if self.index.contains(name) {
            return false;
        }
        self.index.insert(name.to_string());
        self.names.push(name.to_string());
        true
    }

    pub fn extend<'a, I: IntoIterator<Item = &'a String>>(&mut self, names: I) {
        for name in names {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains(name)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ============================================================================
// MERGE SUMMARY
// ============================================================================

/// What one list contributed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeSummary {
    pub author: String,

    /// Acts seen across all days
    pub acts: usize,

    /// Acts renamed to an existing canonical spelling
    pub rewrites: Vec<Rewrite>,

    /// Acts that were not in the attribution map before this list
    pub new_acts: usize,
}

impl MergeSummary {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} acts, {} reconciled, {} new",
            self.author,
            self.acts,
            self.rewrites.len(),
            self.new_acts
        )
    }
}

// ============================================================================
// MERGED LINEUP
// ============================================================================

/// Final per-day attribution maps, ready for rendering
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedLineup {
    /// Authors in processing order
    pub authors: Vec<String>,

    pub days: BTreeMap<Day, AttributionMap>,
}

impl MergedLineup {
    /// Attribution map for a day (empty if nobody listed that day)
    pub fn day(&self, day: Day) -> &AttributionMap {
        static EMPTY: AttributionMap = AttributionMap {
            entries: BTreeMap::new(),
        };
        self.days.get(&day).unwrap_or(&EMPTY)
    }
}

// ============================================================================
// LINEUP MERGER
// ============================================================================

#[derive(Debug, Default)]
struct DayState {
    vocabulary: Vocabulary,
    attribution: AttributionMap,
}

pub struct LineupMerger {
    engine: SimilarityEngine,
    policy: VocabularyPolicy,
    authors: Vec<String>,
    days: BTreeMap<Day, DayState>,
}

impl LineupMerger {
    pub fn new(engine: SimilarityEngine, policy: VocabularyPolicy) -> Self {
        LineupMerger {
            engine,
            policy,
            authors: Vec::new(),
            days: Day::ALL.into_iter().map(|d| (d, DayState::default())).collect(),
        }
    }

    pub fn policy(&self) -> VocabularyPolicy {
        self.policy
    }

    /// Add reference names for a day
    ///
    /// This is how the `Fixed` policy gets its vocabulary (e.g. the acts of
    /// a schedule). Works with the other policies too.
    pub fn seed_vocabulary(&mut self, day: Day, names: &[String]) {
        self.state_mut(day).vocabulary.extend(names);
    }

    /// Current reference names for a day
    pub fn vocabulary(&self, day: Day) -> &[String] {
        self.days
            .get(&day)
            .map(|s| s.vocabulary.as_slice())
            .unwrap_or(&[])
    }

    /// Reconcile and merge one author's full list
    pub fn add_list(&mut self, list: &AuthorList) -> MergeSummary {
        let is_first = self.authors.is_empty();
        self.register_author(&list.author);

        let mut summary = MergeSummary {
            author: list.author.clone(),
            ..Default::default()
        };

        for day in Day::ALL {
            let acts = list.acts(day);
            if acts.is_empty() {
                continue;
            }

            let reconciled = reconcile_with_report(&self.engine, self.vocabulary(day), acts);

            for rewrite in &reconciled.rewrites {
                debug!("{} / {}: {}", list.author, day, rewrite.reason());
            }

            summary.acts += reconciled.names.len();
            summary.new_acts += self.merge(day, &list.author, &reconciled.names);
            summary.rewrites.extend(reconciled.rewrites);

            let grow = match self.policy {
                VocabularyPolicy::Growing => true,
                VocabularyPolicy::FirstList => is_first,
                VocabularyPolicy::Fixed => false,
            };
            if grow {
                self.state_mut(day).vocabulary.extend(&reconciled.names);
            }
        }

        summary
    }

    /// Append `author` to the attribution of each act on `day`
    ///
    /// Acts must already be reconciled. Returns how many acts were new.
    pub fn merge(&mut self, day: Day, author: &str, acts: &[String]) -> usize {
        self.register_author(author);
        let attribution = &mut self.state_mut(day).attribution;

        let mut new_acts = 0;
        for act in acts {
            if !attribution.contains(act) {
                new_acts += 1;
            }
            attribution.record(act, author);
        }
        new_acts
    }

    pub fn attribution(&self, day: Day) -> Option<&AttributionMap> {
        self.days.get(&day).map(|s| &s.attribution)
    }

    /// Consume the merger and hand back the attribution maps
    pub fn finish(self) -> MergedLineup {
        MergedLineup {
            authors: self.authors,
            days: self
                .days
                .into_iter()
                .map(|(day, state)| (day, state.attribution))
                .collect(),
        }
    }

    fn register_author(&mut self, author: &str) {
        if !self.authors.iter().any(|a| a == author) {
            self.authors.push(author.to_string());
        }
    }

    fn state_mut(&mut self, day: Day) -> &mut DayState {
        self.days.entry(day).or_default()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn merger(policy: VocabularyPolicy) -> LineupMerger {
        LineupMerger::new(SimilarityEngine::default(), policy)
    }

    #[test]
    fn test_attribution_order_is_processing_order() {
        let mut m = merger(VocabularyPolicy::Growing);
        m.add_list(&AuthorList::new("Zoe").with_acts(Day::Friday, &["Rezz"]));
        m.add_list(&AuthorList::new("Adam").with_acts(Day::Friday, &["Rezz"]));

        let merged = m.finish();
        assert_eq!(merged.day(Day::Friday).authors("rezz").unwrap(), &["Zoe", "Adam"]);
        assert_eq!(merged.authors, names(&["Zoe", "Adam"]));
    }

    #[test]
    fn test_parenthetical_variant_merges() {
        let mut m = merger(VocabularyPolicy::Growing);
        m.add_list(&AuthorList::new("A").with_acts(Day::Friday, &["Daft Punk"]));
        m.add_list(&AuthorList::new("B").with_acts(Day::Friday, &["Daft Punk (Live)"]));

        let merged = m.finish();
        let friday = merged.day(Day::Friday);
        assert_eq!(friday.len(), 1);
        assert_eq!(friday.authors("daft punk").unwrap(), &["A", "B"]);
    }

    #[test]
    fn test_typo_merges_under_first_spelling() {
        let mut m = merger(VocabularyPolicy::Growing);
        m.add_list(&AuthorList::new("A").with_acts(Day::Saturday, &["Skrillex"]));
        let summary = m.add_list(&AuthorList::new("B").with_acts(Day::Saturday, &["Skrilex"]));

        assert_eq!(summary.rewrites.len(), 1);
        assert_eq!(summary.new_acts, 0);

        let merged = m.finish();
        assert_eq!(merged.day(Day::Saturday).authors("skrillex").unwrap(), &["A", "B"]);
        assert!(!merged.day(Day::Saturday).contains("skrilex"));
    }

    #[test]
    fn test_transposition_stays_separate() {
        let mut m = merger(VocabularyPolicy::Growing);
        m.add_list(&AuthorList::new("A").with_acts(Day::Friday, &["skrillex"]));
        m.add_list(&AuthorList::new("B").with_acts(Day::Friday, &["skrlilex"]));

        let merged = m.finish();
        let friday = merged.day(Day::Friday);
        assert_eq!(friday.len(), 2);
        assert_eq!(friday.authors("skrillex").unwrap(), &["A"]);
        assert_eq!(friday.authors("skrlilex").unwrap(), &["B"]);
    }

    #[test]
    fn test_growing_vocabulary_links_third_list() {
        // C only matches a name B introduced
        let mut m = merger(VocabularyPolicy::Growing);
        m.add_list(&AuthorList::new("A").with_acts(Day::Friday, &["Rezz"]));
        m.add_list(&AuthorList::new("B").with_acts(Day::Friday, &["Kaskade"]));
        m.add_list(&AuthorList::new("C").with_acts(Day::Friday, &["Kaskadee"]));

        assert_eq!(m.vocabulary(Day::Friday), &["rezz", "kaskade"]);
        let merged = m.finish();
        assert_eq!(merged.day(Day::Friday).authors("kaskade").unwrap(), &["B", "C"]);
    }

    #[test]
    fn test_first_list_vocabulary_is_frozen() {
        let mut m = merger(VocabularyPolicy::FirstList);
        m.add_list(&AuthorList::new("A").with_acts(Day::Friday, &["Rezz"]));
        m.add_list(&AuthorList::new("B").with_acts(Day::Friday, &["Kaskade"]));
        m.add_list(&AuthorList::new("C").with_acts(Day::Friday, &["Kaskadee"]));

        assert_eq!(m.vocabulary(Day::Friday), &["rezz"]);
        let merged = m.finish();
        assert_eq!(merged.day(Day::Friday).authors("kaskade").unwrap(), &["B"]);
        assert_eq!(merged.day(Day::Friday).authors("kaskadee").unwrap(), &["C"]);
    }

    #[test]
    fn test_fixed_vocabulary_from_seed() {
        let mut m = merger(VocabularyPolicy::Fixed);
        m.seed_vocabulary(Day::Sunday, &names(&["black tiger sex machine"]));
        m.add_list(&AuthorList::new("A").with_acts(Day::Sunday, &["BTSM", "Rezz"]));

        assert_eq!(m.vocabulary(Day::Sunday), &["black tiger sex machine"]);
        let merged = m.finish();
        let sunday = merged.day(Day::Sunday);
        assert_eq!(sunday.authors("black tiger sex machine").unwrap(), &["A"]);
        assert_eq!(sunday.authors("rezz").unwrap(), &["A"]);
    }

    #[test]
    fn test_author_recorded_once_per_act() {
        // Repeated run of the same day in one list
        let mut m = merger(VocabularyPolicy::Growing);
        let list = AuthorList::new("A").with_acts(Day::Friday, &["act1", "act1"]);
        let summary = m.add_list(&list);

        assert_eq!(summary.acts, 2);
        assert_eq!(summary.new_acts, 1);
        assert_eq!(m.attribution(Day::Friday).unwrap().authors("act1").unwrap(), &["A"]);
    }

    #[test]
    fn test_days_are_independent() {
        let mut m = merger(VocabularyPolicy::Growing);
        m.add_list(&AuthorList::new("A").with_acts(Day::Friday, &["Skrillex"]));
        m.add_list(&AuthorList::new("B").with_acts(Day::Saturday, &["Skrilex"]));

        let merged = m.finish();
        assert!(merged.day(Day::Friday).contains("skrillex"));
        assert!(merged.day(Day::Saturday).contains("skrilex"));
        assert!(!merged.day(Day::Saturday).contains("skrillex"));
    }

    #[test]
    fn test_output_is_lexicographic() {
        let mut m = merger(VocabularyPolicy::Growing);
        m.merge(Day::Friday, "A", &names(&["zedd", "rezz", "above and beyond"]));

        let merged = m.finish();
        let acts: Vec<&str> = merged.day(Day::Friday).iter().map(|(act, _)| act).collect();
        assert_eq!(acts, vec!["above and beyond", "rezz", "zedd"]);
    }

    #[test]
    fn test_summary_text() {
        let mut m = merger(VocabularyPolicy::Growing);
        let summary = m.add_list(&AuthorList::new("A").with_acts(Day::Friday, &["Rezz", "Zedd"]));
        assert_eq!(summary.summary(), "A: 2 acts, 0 reconciled, 2 new");
    }

    #[test]
    fn test_vocabulary_set_semantics() {
        let mut vocab = Vocabulary::new();
        assert!(vocab.insert("rezz"));
        assert!(!vocab.insert("rezz"));
        assert!(vocab.insert("zedd"));
        assert_eq!(vocab.as_slice(), &["rezz", "zedd"]);
        assert!(vocab.contains("zedd"));
        assert_eq!(vocab.len(), 2);
    }
}
