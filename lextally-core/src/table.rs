//! Identifier frequency table.
//!
//! The sole product of a scan. Keys are lowercased identifiers,
//! values are occurrence counts (always at least 1).

use std::collections::HashMap;

/// Frequency table mapping lowercased identifiers to occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: HashMap<String, u64>,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of an identifier.
    ///
    /// The lexeme is lowercased before insertion. Empty lexemes are ignored,
    /// so the table never holds an empty key or a zero count.
    pub(crate) fn record(&mut self, lexeme: &str) {
        if lexeme.is_empty() {
            return;
        }
        *self.entries.entry(lexeme.to_lowercase()).or_insert(0) += 1;
    }

    /// Occurrence count for an identifier, 0 when absent.
    ///
    /// The lookup key must already be lowercase.
    pub fn count(&self, name: &str) -> u64 {
        self.entries.get(name).copied().unwrap_or(0)
    }

    /// Occurrence count for an identifier, `None` when absent.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.get(name).copied()
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no identifiers.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of occurrences across all identifiers.
    pub fn total(&self) -> u64 {
        self.entries.values().sum()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
    }

    /// Entries sorted by identifier, ascending. Report order.
    pub fn sorted_entries(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
