// ⚖️ Reconciliation Engine - Rewrite candidate names to canonical spellings
//
// Every (reference, candidate) pair is compared. A candidate that matches a
// reference name takes the reference spelling; when several references
// match, the LAST one in reference order wins. Candidates that match
// nothing keep their own spelling and become new acts.
//
// Cost is O(|reference| × |candidates|) comparisons, each O(len²).
// Fine for festival lineups (tens to hundreds of acts), not for big corpora.

use crate::similarity::{MatchRule, SimilarityEngine};
use serde::{Deserialize, Serialize};

// ============================================================================
// REWRITE RECORD
// ============================================================================

/// One candidate that was renamed to a reference spelling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rewrite {
    /// Position in the candidate list
    pub index: usize,

    /// Candidate spelling before reconciliation
    pub from: String,

    /// Winning reference spelling
    pub to: String,

    /// Rule that matched the winning reference
    pub rule: MatchRule,
}

impl Rewrite {
    /// Human-readable reason (for debug logs)
    pub fn reason(&self) -> String {
        format!("'{}' → '{}' ({})", self.from, self.to, self.rule.as_str())
    }
}

// ============================================================================
// RECONCILED LIST
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReconciledList {
    /// Candidates after rewriting, same length and order as the input
    pub names: Vec<String>,

    /// Candidates whose spelling actually changed
    pub rewrites: Vec<Rewrite>,
}

// ============================================================================
// RECONCILE
// ============================================================================

/// Reconcile candidates against reference names
///
/// Pure: returns a new list, the inputs are untouched.
pub fn reconcile(engine: &SimilarityEngine, reference: &[String], candidates: &[String]) -> Vec<String> {
    reconcile_with_report(engine, reference, candidates).names
}

/// Same as `reconcile`, also reporting which candidates changed and why
pub fn reconcile_with_report(
    engine: &SimilarityEngine,
    reference: &[String],
    candidates: &[String],
) -> ReconciledList {
    // Winning (reference, rule) per candidate; later references overwrite
    let mut winners: Vec<Option<(&str, MatchRule)>> = vec![None; candidates.len()];

    for std_name in reference {
        for (j, candidate) in candidates.iter().enumerate() {
            if let Some(rule) = engine.classify(std_name, candidate) {
                winners[j] = Some((std_name.as_str(), rule));
            }
        }
    }

    let mut names = Vec::with_capacity(candidates.len());
    let mut rewrites = Vec::new();

    for (index, (candidate, winner)) in candidates.iter().zip(winners).enumerate() {
        match winner {
            Some((canonical, rule)) => {
                if canonical != candidate.as_str() {
                    rewrites.push(Rewrite {
                        index,
                        from: candidate.clone(),
                        to: canonical.to_string(),
                        rule,
                    });
                }
                names.push(canonical.to_string());
            }
            None => names.push(candidate.clone()),
        }
    }

    ReconciledList { names, rewrites }
}

// ============================================================================
// TESTS
// ============================================================================
