//! Fixed per-yield records.
//!
//! [`YieldBundle`] holds one [`Decimal`] amount per [`YieldType`] and
//! [`SpecialistCounts`] holds one `u32` count per [`YieldType`]. Both are
//! plain records with one field per variant, so every lookup is an
//! exhaustive `match` and there is no "missing key" case. Fields absent from
//! serialized input read as zero.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::YieldType;

// ---------------------------------------------------------------------------
// YieldBundle
// ---------------------------------------------------------------------------

/// An amount of every yield type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct YieldBundle {
    /// Production amount.
    #[ts(as = "String")]
    pub production: Decimal,
    /// Food amount.
    #[ts(as = "String")]
    pub food: Decimal,
    /// Gold amount.
    #[ts(as = "String")]
    pub gold: Decimal,
    /// Science amount.
    #[ts(as = "String")]
    pub science: Decimal,
    /// Culture amount.
    #[ts(as = "String")]
    pub culture: Decimal,
    /// Happiness amount.
    #[ts(as = "String")]
    pub happiness: Decimal,
}

impl YieldBundle {
    /// A bundle with every amount at zero.
    pub const ZERO: Self = Self {
        production: Decimal::ZERO,
        food: Decimal::ZERO,
        gold: Decimal::ZERO,
        science: Decimal::ZERO,
        culture: Decimal::ZERO,
        happiness: Decimal::ZERO,
    };

    /// A bundle with a single nonzero entry.
    pub fn single(yield_type: YieldType, amount: Decimal) -> Self {
        Self::ZERO.with(yield_type, amount)
    }

    /// The amount of `yield_type`.
    pub const fn get(&self, yield_type: YieldType) -> Decimal {
        match yield_type {
            YieldType::Production => self.production,
            YieldType::Food => self.food,
            YieldType::Gold => self.gold,
            YieldType::Science => self.science,
            YieldType::Culture => self.culture,
            YieldType::Happiness => self.happiness,
        }
    }

    const fn slot_mut(&mut self, yield_type: YieldType) -> &mut Decimal {
        match yield_type {
            YieldType::Production => &mut self.production,
            YieldType::Food => &mut self.food,
            YieldType::Gold => &mut self.gold,
            YieldType::Science => &mut self.science,
            YieldType::Culture => &mut self.culture,
            YieldType::Happiness => &mut self.happiness,
        }
    }

    /// Overwrite the amount of `yield_type`.
    pub const fn set(&mut self, yield_type: YieldType, amount: Decimal) {
        *self.slot_mut(yield_type) = amount;
    }

    /// Builder form of [`set`](Self::set).
    #[must_use]
    pub const fn with(mut self, yield_type: YieldType, amount: Decimal) -> Self {
        self.set(yield_type, amount);
        self
    }

    /// Add `amount` to `yield_type`, saturating at the [`Decimal`] bounds.
    pub fn add(&mut self, yield_type: YieldType, amount: Decimal) {
        let slot = self.slot_mut(yield_type);
        *slot = slot.saturating_add(amount);
    }

    /// Element-wise sum of two bundles, saturating.
    #[must_use]
    pub fn saturating_add(&self, other: &Self) -> Self {
        let mut sum = *self;
        for (yield_type, amount) in other.iter() {
            sum.add(yield_type, amount);
        }
        sum
    }

    /// Every amount multiplied by `factor`, saturating.
    #[must_use]
    pub fn scaled(&self, factor: Decimal) -> Self {
        self.iter()
            .map(|(yield_type, amount)| (yield_type, amount.saturating_mul(factor)))
            .collect()
    }

    /// `(yield type, amount)` pairs in display order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (YieldType, Decimal)> + '_ {
        YieldType::ALL
            .into_iter()
            .map(move |yield_type| (yield_type, self.get(yield_type)))
    }

    /// `(yield type, amount)` pairs in display order, zeros skipped.
    pub fn nonzero(&self) -> impl Iterator<Item = (YieldType, Decimal)> + '_ {
        self.iter().filter(|(_, amount)| !amount.is_zero())
    }

    /// Whether every amount is zero.
    pub fn is_zero(&self) -> bool {
        self.nonzero().next().is_none()
    }
}

/// Collects `(yield type, amount)` pairs, summing repeated yield types.
impl FromIterator<(YieldType, Decimal)> for YieldBundle {
    fn from_iter<I: IntoIterator<Item = (YieldType, Decimal)>>(iter: I) -> Self {
        let mut bundle = Self::ZERO;
        for (yield_type, amount) in iter {
            bundle.add(yield_type, amount);
        }
        bundle
    }
}

// ---------------------------------------------------------------------------
// SpecialistCounts
// ---------------------------------------------------------------------------

/// A count per yield type.
///
/// Used for specialist slots granted by a building, for the city-wide
/// maximum derived from those slots, and for the specialists currently
/// assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "bindings/")]
pub struct SpecialistCounts {
    /// Production (engineer) count.
    pub production: u32,
    /// Food count.
    pub food: u32,
    /// Gold (merchant) count.
    pub gold: u32,
    /// Science (scientist) count.
    pub science: u32,
    /// Culture (artist) count.
    pub culture: u32,
    /// Happiness count.
    pub happiness: u32,
}

impl SpecialistCounts {
    /// Every count at zero.
    pub const ZERO: Self = Self {
        production: 0,
        food: 0,
        gold: 0,
        science: 0,
        culture: 0,
        happiness: 0,
    };

    /// The count for `yield_type`.
    pub const fn get(&self, yield_type: YieldType) -> u32 {
        match yield_type {
            YieldType::Production => self.production,
            YieldType::Food => self.food,
            YieldType::Gold => self.gold,
            YieldType::Science => self.science,
            YieldType::Culture => self.culture,
            YieldType::Happiness => self.happiness,
        }
    }

    const fn slot_mut(&mut self, yield_type: YieldType) -> &mut u32 {
        match yield_type {
            YieldType::Production => &mut self.production,
            YieldType::Food => &mut self.food,
            YieldType::Gold => &mut self.gold,
            YieldType::Science => &mut self.science,
            YieldType::Culture => &mut self.culture,
            YieldType::Happiness => &mut self.happiness,
        }
    }

    /// Builder that overwrites the count for `yield_type`.
    #[must_use]
    pub const fn with(mut self, yield_type: YieldType, count: u32) -> Self {
        *self.slot_mut(yield_type) = count;
        self
    }

    /// A copy with `yield_type` raised by one, or `None` on overflow.
    pub fn incremented(&self, yield_type: YieldType) -> Option<Self> {
        let count = self.get(yield_type).checked_add(1)?;
        Some(self.with(yield_type, count))
    }

    /// A copy with `yield_type` lowered by one, or `None` if it is zero.
    pub fn decremented(&self, yield_type: YieldType) -> Option<Self> {
        let count = self.get(yield_type).checked_sub(1)?;
        Some(self.with(yield_type, count))
    }

    /// Element-wise sum of two count records, saturating.
    #[must_use]
    pub fn saturating_add(&self, other: &Self) -> Self {
        let mut sum = *self;
        for (yield_type, count) in other.iter() {
            let slot = sum.slot_mut(yield_type);
            *slot = slot.saturating_add(count);
        }
        sum
    }

    /// Sum over all yield types, or `None` on overflow.
    pub fn total(&self) -> Option<u32> {
        self.iter()
            .try_fold(0_u32, |acc, (_, count)| acc.checked_add(count))
    }

    /// `(yield type, count)` pairs in display order, zeros included.
    pub fn iter(&self) -> impl Iterator<Item = (YieldType, u32)> + '_ {
        YieldType::ALL
            .into_iter()
            .map(move |yield_type| (yield_type, self.get(yield_type)))
    }

    /// `(yield type, count)` pairs in display order, zeros skipped.
    pub fn nonzero(&self) -> impl Iterator<Item = (YieldType, u32)> + '_ {
        self.iter().filter(|(_, count)| *count > 0)
    }

    /// Whether every count is zero.
    pub fn is_empty(&self) -> bool {
        self.nonzero().next().is_none()
    }
}
