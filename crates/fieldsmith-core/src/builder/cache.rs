//! Per-field validation cache
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use super::{CacheEntry, CacheOutcome, CacheStats};
use serde_json::Value;
use std::collections::HashMap;

/// Memo of the last value tried on each field and its validation outcome
///
/// Holds at most one entry per field. Values are compared structurally.
#[derive(Debug, Clone, Default)]
pub struct ValidationCache {
    entries: HashMap<String, CacheEntry>,
    hits: u64,
    misses: u64,
}

impl ValidationCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the recorded outcome for `value` on `field`
    ///
    /// Returns `None` when the field has no entry or its last value differs.
    /// Each call counts as a hit or a miss.
    pub fn lookup(&mut self, field: &str, value: &Value) -> Option<&CacheEntry> {
        match self.entries.get(field) {
            Some(entry) if entry.last_value == *value => {
                self.hits += 1;
                Some(entry)
            }
            _ => {
                self.misses += 1;
                None
            }
        }
    }

    /// Record the outcome for `value` on `field`, replacing any previous entry
    pub fn record(&mut self, field: &str, value: Value, outcome: CacheOutcome) {
        self.entries.insert(
            field.to_string(),
            CacheEntry {
                last_value: value,
                outcome,
            },
        );
    }

    /// Get the entry for a field
    pub fn get(&self, field: &str) -> Option<&CacheEntry> {
        self.entries.get(field)
    }

    /// Check if the cache has an entry for a field
    pub fn contains(&self, field: &str) -> bool {
        self.entries.contains_key(field)
    }

    /// Number of fields with an entry
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no field has an entry
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(field, entry)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CacheEntry)> {
        self.entries.iter().map(|(field, entry)| (field.as_str(), entry))
    }

    /// Clear all entries and counters
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits,
            misses: self.misses,
        }
    }
}
