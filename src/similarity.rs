// 🔍 Similarity Engine - Decide when two act names are the same act
//
// Two rules:
// 1. Equivalence: identical strings, or linked through the alias table
// 2. Typo: small edit distance, bounded by how much non-letter noise
//    (spaces, digits, punctuation) the names already carry
//
// Inputs are expected to be normalized already (see normalizer.rs).

use crate::aliases::AliasTable;
use crate::config::TypoConfig;
use serde::{Deserialize, Serialize};

// ============================================================================
// MATCH RULE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchRule {
    /// Identical normalized names
    Exact,

    /// Linked through the alias table ("btsm" ↔ "black tiger sex machine")
    Alias,

    /// Within the edit-distance budget
    Typo,
}

impl MatchRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchRule::Exact => "exact",
            MatchRule::Alias => "alias",
            MatchRule::Typo => "typo",
        }
    }
}

// ============================================================================
// SIMILARITY ENGINE
// ============================================================================

#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    /// Known aliases (injected, not hardcoded)
    pub aliases: AliasTable,

    /// Typo tolerance settings
    pub typo: TypoConfig,
}

impl SimilarityEngine {
    pub fn new(aliases: AliasTable, typo: TypoConfig) -> Self {
        SimilarityEngine { aliases, typo }
    }

    /// Typo rule
    ///
    /// Both names need at least `min_length` characters, and
    /// `1 <= distance <= max(floor, noise(s0), noise(s1))`.
    /// Identical names never count as typos.
    pub fn is_typo(&self, s0: &str, s1: &str) -> bool {
        let min_length = self.typo.min_length;
        if s0.chars().count() < min_length || s1.chars().count() < min_length {
            return false;
        }

        let floor = if self.typo.noise_floor { 1 } else { 0 };
        let budget = floor.max(non_alpha_count(s0)).max(non_alpha_count(s1));
        let distance = edit_distance(s0, s1);

        distance >= 1 && distance <= budget
    }

    /// Equivalence rule: equal, or one side aliases the other
    pub fn is_equivalent(&self, s0: &str, s1: &str) -> bool {
        s0 == s1 || self.aliases.links(s0, s1)
    }

    /// Which rule (if any) says these are the same act
    pub fn classify(&self, s0: &str, s1: &str) -> Option<MatchRule> {
        if s0 == s1 {
            Some(MatchRule::Exact)
        } else if self.aliases.links(s0, s1) {
            Some(MatchRule::Alias)
        } else if self.is_typo(s0, s1) {
            Some(MatchRule::Typo)
        } else {
            None
        }
    }

    /// Same act? Symmetric in its arguments.
    pub fn same_act(&self, s0: &str, s1: &str) -> bool {
        self.is_typo(s0, s1) || self.is_equivalent(s0, s1)
    }
}

impl Default for SimilarityEngine {
    fn default() -> Self {
        SimilarityEngine::new(AliasTable::with_defaults(), TypoConfig::default())
    }
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Count characters that are not letters (digits, punctuation, spaces)
pub fn non_alpha_count(s: &str) -> usize {
    s.chars().filter(|c| !c.is_alphabetic()).count()
}

/// Levenshtein distance between two strings
///
/// Insertions, deletions and substitutions cost 1. Works on chars, keeps
/// only two rows sized by the shorter string.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let (small, big) = if a_chars.len() <= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    if small.is_empty() {
        return big.len();
    }

    let mut prev: Vec<usize> = (0..=small.len()).collect();
    let mut curr = vec![0; small.len() + 1];

    for (i, big_c) in big.iter().enumerate() {
        curr[0] = i + 1;
        for (j, small_c) in small.iter().enumerate() {
            curr[j + 1] = if small_c == big_c {
                prev[j]
            } else {
                1 + prev[j + 1].min(curr[j]).min(prev[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[small.len()]
}

// ============================================================================
// TESTS
// ============================================================================
