//! Per-key breakdowns of where every unit of a yield comes from.
//!
//! A [`Breakdown`] maps a key (a [`YieldType`] or a [`GreatPersonKind`]) to
//! the [`SourceAmounts`] that produce it. Both levels keep two invariants
//! that the presentation layer relies on:
//!
//! - no recorded amount is zero, and no key maps to an empty source list;
//! - `total` always equals the sum of the visible per-source amounts.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;
use ts_rs::TS;

use crate::enums::{GreatPersonKind, YieldType};

/// Per-source amounts for a single key, with their total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SourceAmounts {
    #[ts(as = "std::collections::HashMap<String, String>")]
    sources: IndexMap<String, Decimal>,
    #[ts(as = "String")]
    total: Decimal,
}

impl SourceAmounts {
    /// An empty source list with a zero total.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` for `source`.
    ///
    /// Zero amounts are ignored. A source whose accumulated amount returns to
    /// zero is removed, keeping the order of the remaining sources.
    pub fn record(&mut self, source: &str, amount: Decimal) {
        if amount.is_zero() {
            return;
        }
        let updated = self
            .sources
            .get(source)
            .map_or(amount, |existing| existing.saturating_add(amount));
        if updated.is_zero() {
            self.sources.shift_remove(source);
        } else {
            self.sources.insert(source.to_owned(), updated);
        }
        self.total = self.sources.values().fold(Decimal::ZERO, |acc, v| acc.saturating_add(*v));
    }

    /// The amount recorded for `source`.
    pub fn get(&self, source: &str) -> Option<Decimal> {
        self.sources.get(source).copied()
    }

    /// `(source, amount)` pairs in the order they were first recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.sources
            .iter()
            .map(|(source, amount)| (source.as_str(), *amount))
    }

    /// Sum of the recorded amounts.
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// Number of contributing sources.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Whether no source contributes.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

/// Mapping from key to its contributing sources. Keys with no contributing
/// source are absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Breakdown<K> {
    entries: BTreeMap<K, SourceAmounts>,
}

/// Breakdown of city yields by yield type.
pub type YieldBreakdown = Breakdown<YieldType>;

/// Breakdown of great person points by great person.
pub type GreatPersonBreakdown = Breakdown<GreatPersonKind>;

impl<K> Default for Breakdown<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> Breakdown<K> {
    /// An empty breakdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` from `source` under `key`. Zero amounts leave the
    /// breakdown untouched.
    pub fn record(&mut self, key: K, source: &str, amount: Decimal) {
        if amount.is_zero() {
            return;
        }
        let amounts = self.entries.entry(key).or_default();
        amounts.record(source, amount);
        if amounts.is_empty() {
            self.entries.remove(&key);
        }
    }

    /// Contributing sources for `key`.
    pub fn get(&self, key: K) -> Option<&SourceAmounts> {
        self.entries.get(&key)
    }

    /// Total for `key`; zero when nothing contributes.
    pub fn total(&self, key: K) -> Decimal {
        self.entries
            .get(&key)
            .map_or(Decimal::ZERO, SourceAmounts::total)
    }

    /// `(key, sources)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &SourceAmounts)> {
        self.entries.iter().map(|(key, amounts)| (*key, amounts))
    }

    /// Keys with at least one contributing source, in order.
    pub fn keys(&self) -> impl Iterator<Item = K> + '_ {
        self.entries.keys().copied()
    }

    /// Number of keys present.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing contributes to any key.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_amounts_are_never_recorded() {
        let mut breakdown = YieldBreakdown::new();
        breakdown.record(YieldType::Food, "Farm", dec!(0));
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total(YieldType::Food), dec!(0));
    }

    #[test]
    fn total_tracks_recorded_amounts() {
        let mut breakdown = YieldBreakdown::new();
        breakdown.record(YieldType::Food, "Farm", dec!(2));
        breakdown.record(YieldType::Food, "Population", dec!(-4));
        breakdown.record(YieldType::Food, "Granary", dec!(1.5));

        let food = breakdown.get(YieldType::Food);
        assert_eq!(food.map(SourceAmounts::len), Some(3));
        assert_eq!(breakdown.total(YieldType::Food), dec!(-0.5));
        let sum = food.map(|f| f.iter().map(|(_, v)| v).sum::<Decimal>());
        assert_eq!(sum, Some(dec!(-0.5)));
    }

    #[test]
    fn cancelling_amounts_remove_the_source_and_key() {
        let mut breakdown = YieldBreakdown::new();
        breakdown.record(YieldType::Gold, "Market", dec!(2));
        breakdown.record(YieldType::Gold, "Market", dec!(-2));
        assert!(breakdown.get(YieldType::Gold).is_none());
        assert!(breakdown.is_empty());
    }

    #[test]
    fn keys_are_in_declaration_order() {
        let mut breakdown = YieldBreakdown::new();
        breakdown.record(YieldType::Happiness, "Temple", dec!(1));
        breakdown.record(YieldType::Production, "Workshop", dec!(2));
        breakdown.record(YieldType::Science, "Library", dec!(1));
        let keys: Vec<_> = breakdown.keys().collect();
        assert_eq!(
            keys,
            vec![YieldType::Production, YieldType::Science, YieldType::Happiness]
        );
    }

    #[test]
    fn sources_keep_first_recorded_order() {
        let mut amounts = SourceAmounts::new();
        amounts.record("Population", dec!(3));
        amounts.record("Library", dec!(1));
        amounts.record("Population", dec!(1));
        let order: Vec<_> = amounts.iter().map(|(s, _)| s).collect();
        assert_eq!(order, vec!["Population", "Library"]);
        assert_eq!(amounts.get("Population"), Some(dec!(4)));
        assert_eq!(amounts.total(), dec!(5));
    }

    #[test]
    fn serializes_as_nested_maps() {
        let mut breakdown = YieldBreakdown::new();
        breakdown.record(YieldType::Food, "Farm", dec!(2));
        let json = serde_json::to_value(&breakdown).ok();
        let total = json
            .as_ref()
            .and_then(|v| v.pointer("/entries/Food/total"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(total, Some("2"));
    }
}
