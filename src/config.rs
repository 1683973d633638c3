// ⚙️ Merge Configuration - Matching parameters as data
//
// Loaded from JSON; every field is optional:
//
// {
//   "aliases": { "btsm": "black tiger sex machine" },
//   "typo": { "min_length": 5, "noise_floor": true },
//   "vocabulary": "growing",
//   "day_start_hour": 16
// }

use crate::aliases::{default_aliases, AliasTable};
use crate::error::LineupError;
use crate::similarity::SimilarityEngine;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// TYPO TOLERANCE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypoConfig {
    /// Names shorter than this are never typo-matched (default: 5)
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Allow at least one edit even for names without non-letters (default: true)
    #[serde(default = "default_true")]
    pub noise_floor: bool,
}

impl Default for TypoConfig {
    fn default() -> Self {
        TypoConfig {
            min_length: default_min_length(),
            noise_floor: true,
        }
    }
}

fn default_min_length() -> usize {
    5
}

fn default_true() -> bool {
    true
}

// ============================================================================
// VOCABULARY POLICY
// ============================================================================

/// Which reference names each incoming list is reconciled against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyPolicy {
    /// Every canonical act merged so far, in first-seen order
    #[default]
    Growing,

    /// Only the first list's acts
    FirstList,

    /// Seeded once by the caller (e.g. from a schedule), never grows
    Fixed,
}

impl VocabularyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            VocabularyPolicy::Growing => "growing",
            VocabularyPolicy::FirstList => "first_list",
            VocabularyPolicy::Fixed => "fixed",
        }
    }
}

// ============================================================================
// MERGE CONFIG
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeConfig {
    /// alias → canonical name (raw spelling, normalized on load)
    #[serde(default = "default_aliases")]
    pub aliases: BTreeMap<String, String>,

    #[serde(default)]
    pub typo: TypoConfig,

    #[serde(default)]
    pub vocabulary: VocabularyPolicy,

    /// Schedules are rotated to start at the first set at or after this hour
    #[serde(default = "default_day_start_hour")]
    pub day_start_hour: u32,
}

fn default_day_start_hour() -> u32 {
    16
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            aliases: default_aliases(),
            typo: TypoConfig::default(),
            vocabulary: VocabularyPolicy::default(),
            day_start_hour: default_day_start_hour(),
        }
    }
}

impl MergeConfig {
    /// Load config from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LineupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Parse and validate config JSON
    pub fn from_json(content: &str) -> Result<Self, LineupError> {
        let config: MergeConfig = serde_json::from_str(content)
            .map_err(|e| LineupError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LineupError> {
        if self.day_start_hour >= 24 {
            return Err(LineupError::ConfigParse(format!(
                "day_start_hour must be between 0 and 23, got {}",
                self.day_start_hour
            )));
        }

        // Surfaces empty alias entries
        self.alias_table()?;
        Ok(())
    }

    /// Alias table with both sides normalized
    pub fn alias_table(&self) -> Result<AliasTable, LineupError> {
        AliasTable::from_pairs(&self.aliases)
    }

    /// Similarity engine built from this config
    pub fn similarity_engine(&self) -> Result<SimilarityEngine, LineupError> {
        Ok(SimilarityEngine::new(self.alias_table()?, self.typo.clone()))
    }
}

// ============================================================================
// TESTS
// ============================================================================
