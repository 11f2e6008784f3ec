//! Franchise identity resolution.
//!
//! Historical team codes change when a franchise relocates or renames; the
//! registry maps every code a franchise has played under to one stable
//! franchise code so its seasons are tracked as a single continuous entity.

use rustc_hash::FxHashMap;

/// Lookup table from historical team code to canonical franchise code.
///
/// Codes absent from the table map to themselves, so a registry built from an
/// empty table degrades to identity. Immutable after load; lookups take
/// `&self` and are safe for unsynchronized concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct FranchiseRegistry {
    codes: FxHashMap<String, String>,
}

impl FranchiseRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            codes: FxHashMap::default(),
        }
    }

    /// Build a registry from (team code, franchise code) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (team, franchise) in pairs {
            registry.insert(team, franchise);
        }
        registry
    }

    /// Insert a mapping.
    pub fn insert<S: Into<String>>(&mut self, team: S, franchise: S) {
        self.codes.insert(team.into(), franchise.into());
    }

    /// Resolve a team code to its franchise code, or the code itself when the
    /// table has no entry for it.
    pub fn convert<'a>(&'a self, team: &'a str) -> &'a str {
        self.codes.get(team).map(String::as_str).unwrap_or(team)
    }

    /// Get number of mappings.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_convert() {
        let mut registry = FranchiseRegistry::new();
        registry.insert("MON", "WAS");
        registry.insert("BRO", "LAN");

        assert_eq!(registry.convert("MON"), "WAS");
        assert_eq!(registry.convert("BRO"), "LAN");
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_identity_fallback() {
        let registry = FranchiseRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.convert("BOS"), "BOS");
    }

    #[test]
    fn test_from_pairs() {
        let registry = FranchiseRegistry::from_pairs([("SE1", "MIL"), ("ML4", "MIL")]);
        assert_eq!(registry.convert("SE1"), "MIL");
        assert_eq!(registry.convert("ML4"), "MIL");
        assert_eq!(registry.convert("MIL"), "MIL");
    }
}
