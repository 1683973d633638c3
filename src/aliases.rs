// 🏷️ Alias Table - Known alternate names for acts
//
// Some acts bill under names no edit distance will ever connect:
// "BTSM" and "Black Tiger Sex Machine" are the same act.
// The table is data, not code: it comes from config and can be extended
// without touching the matcher.

use crate::error::LineupError;
use crate::normalizer::normalize;
use std::collections::BTreeMap;

// ============================================================================
// ALIAS TABLE
// ============================================================================

/// Mapping alias → canonical spelling, stored in normalized form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}

impl AliasTable {
    /// Create empty table
    pub fn new() -> Self {
        AliasTable {
            entries: BTreeMap::new(),
        }
    }

    /// Table with the built-in aliases
    pub fn with_defaults() -> Self {
        let mut table = AliasTable::new();
        for (alias, canonical) in default_aliases() {
            table.entries.insert(alias, canonical);
        }
        table
    }

    /// Build from raw (un-normalized) pairs, e.g. straight from a config file
    ///
    /// Both sides are normalized so config authors can write
    /// "Black Tiger Sex Machine" instead of the comparison form.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, LineupError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = AliasTable::new();
        for (alias, canonical) in pairs {
            table.insert(alias.as_ref(), canonical.as_ref())?;
        }
        Ok(table)
    }

    /// Add one alias (normalizes both sides)
    pub fn insert(&mut self, alias: &str, canonical: &str) -> Result<(), LineupError> {
        let alias_norm = normalize(alias);
        let canonical_norm = normalize(canonical);

        if alias_norm.is_empty() || canonical_norm.is_empty() {
            return Err(LineupError::ConfigParse(format!(
                "alias entries must be non-empty after normalization: {:?} → {:?}",
                alias, canonical
            )));
        }

        self.entries.insert(alias_norm, canonical_norm);
        Ok(())
    }

    /// Canonical spelling for an alias key, if known
    pub fn lookup(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    /// True when one side is an alias key and the other is its mapped value
    pub fn links(&self, s0: &str, s1: &str) -> bool {
        self.lookup(s0) == Some(s1) || self.lookup(s1) == Some(s0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Built-in aliases, already in normalized form
pub fn default_aliases() -> BTreeMap<String, String> {
    let mut aliases = BTreeMap::new();
    aliases.insert("btsm".to_string(), "black tiger sex machine".to_string());
    aliases
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_contain_btsm() {
        let table = AliasTable::with_defaults();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("btsm"), Some("black tiger sex machine"));
    }

    #[test]
    fn test_links_both_directions() {
        let table = AliasTable::with_defaults();
        assert!(table.links("btsm", "black tiger sex machine"));
        assert!(table.links("black tiger sex machine", "btsm"));
        assert!(!table.links("btsm", "black tiger"));
        assert!(!table.links("btsm", "btsm"));
    }

    #[test]
    fn test_from_pairs_normalizes() {
        let table = AliasTable::from_pairs(vec![
            ("GTA", "Good Times Ahead"),
            ("Kx5 (Live)", "Kaskade & Deadmau5"),
        ])
        .unwrap();

        assert_eq!(table.lookup("gta"), Some("good times ahead"));
        assert_eq!(table.lookup("kx5"), Some("kaskade and deadmau5"));
    }

    #[test]
    fn test_insert_rejects_empty() {
        let mut table = AliasTable::new();
        assert!(table.insert("   ", "something").is_err());
        assert!(table.insert("abc", "(tba)").is_err());
        assert!(table.is_empty());
    }
}
