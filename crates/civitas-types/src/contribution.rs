//! Per-source yield tables.
//!
//! A [`SourceContribution`] maps a source identifier (building name, policy
//! name, `"Population"`, `"Specialists"`) to the [`YieldBundle`] it produces.
//! Insertion order is display order and is preserved by every operation.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bundle::YieldBundle;

/// Per-source happiness amounts, in display order.
pub type HappinessDeltas = IndexMap<String, Decimal>;

/// Insertion-ordered mapping from source identifier to yield bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceContribution(IndexMap<String, YieldBundle>);

impl SourceContribution {
    /// An empty table.
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Set the bundle for `source`. An existing source keeps its position.
    pub fn insert(&mut self, source: impl Into<String>, bundle: YieldBundle) -> Option<YieldBundle> {
        self.0.insert(source.into(), bundle)
    }

    /// Add `bundle` to the entry for `source`, appending it if new.
    pub fn accumulate(&mut self, source: impl Into<String>, bundle: &YieldBundle) {
        let entry = self.entry_mut(source);
        *entry = entry.saturating_add(bundle);
    }

    /// The bundle for `source`, appending an empty one if it has none.
    pub fn entry_mut(&mut self, source: impl Into<String>) -> &mut YieldBundle {
        self.0.entry(source.into()).or_insert(YieldBundle::ZERO)
    }

    /// The bundle for `source`, if present.
    pub fn get(&self, source: &str) -> Option<&YieldBundle> {
        self.0.get(source)
    }

    /// `(source, bundle)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &YieldBundle)> {
        self.0.iter().map(|(source, bundle)| (source.as_str(), bundle))
    }

    /// Source identifiers in insertion order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of sources.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no sources.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of every source's bundle.
    pub fn total(&self) -> YieldBundle {
        self.0
            .values()
            .fold(YieldBundle::ZERO, |acc, bundle| acc.saturating_add(bundle))
    }
}

impl<S: Into<String>> FromIterator<(S, YieldBundle)> for SourceContribution {
    fn from_iter<I: IntoIterator<Item = (S, YieldBundle)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (source, bundle) in iter {
            table.accumulate(source, &bundle);
        }
        table
    }
}
