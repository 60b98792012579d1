//! Entity structs shared by the city core and its collaborators.
//!
//! Covers completed [`Building`]s and adoptable [`Policy`] definitions. Both
//! deserialize from the YAML ruleset and scenario files, with every optional
//! attribute defaulting to "no effect".

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::bundle::{SpecialistCounts, YieldBundle};
use crate::enums::YieldType;

// ---------------------------------------------------------------------------
// Buildings
// ---------------------------------------------------------------------------

/// A completed building in a city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    /// Display name; also the source identifier for its yields.
    pub name: String,
    /// Wonders are unique and listed apart from ordinary buildings.
    #[serde(default)]
    pub is_wonder: bool,
    /// Specialist slots granted per role. `None` means the building provides
    /// no specialists at all.
    #[serde(default)]
    pub specialist_slots: Option<SpecialistCounts>,
    /// Flat yields the building adds every turn.
    #[serde(default)]
    pub yields: YieldBundle,
    /// Happiness the building adds every turn.
    #[serde(default)]
    pub happiness: Decimal,
    /// Great person points the building adds every turn.
    #[serde(default)]
    pub great_person_points: YieldBundle,
}

impl Building {
    /// A plain building with no effects.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_wonder: false,
            specialist_slots: None,
            yields: YieldBundle::ZERO,
            happiness: Decimal::ZERO,
            great_person_points: YieldBundle::ZERO,
        }
    }

    /// Mark the building as a wonder.
    #[must_use]
    pub fn wonder(mut self) -> Self {
        self.is_wonder = true;
        self
    }

    /// Grant specialist slots.
    #[must_use]
    pub fn with_specialist_slots(mut self, slots: SpecialistCounts) -> Self {
        self.specialist_slots = Some(slots);
        self
    }

    /// Set the flat yields.
    #[must_use]
    pub fn with_yields(mut self, yields: YieldBundle) -> Self {
        self.yields = yields;
        self
    }

    /// Set the happiness contribution.
    #[must_use]
    pub fn with_happiness(mut self, happiness: Decimal) -> Self {
        self.happiness = happiness;
        self
    }

    /// Set the great person points.
    #[must_use]
    pub fn with_great_person_points(mut self, points: YieldBundle) -> Self {
        self.great_person_points = points;
        self
    }
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// How a modifier changes a specialist's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModifierEffect {
    /// Add a fixed amount.
    Flat {
        /// Amount added to the target yield.
        amount: Decimal,
    },
    /// Scale by a percentage, e.g. `50` for +50%.
    Percent {
        /// Percentage change applied to the target yield.
        percent: Decimal,
    },
}

/// A policy effect on specialist output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistModifier {
    /// Specialist role affected; `None` affects every role.
    #[serde(default)]
    pub role: Option<YieldType>,
    /// Yield of the specialist's output that changes.
    pub target: YieldType,
    /// The change applied.
    pub effect: ModifierEffect,
}

impl SpecialistModifier {
    /// A flat bonus for every specialist role.
    pub const fn flat(target: YieldType, amount: Decimal) -> Self {
        Self {
            role: None,
            target,
            effect: ModifierEffect::Flat { amount },
        }
    }

    /// A percentage bonus for every specialist role.
    pub const fn percent(target: YieldType, percent: Decimal) -> Self {
        Self {
            role: None,
            target,
            effect: ModifierEffect::Percent { percent },
        }
    }

    /// Restrict the modifier to one specialist role.
    #[must_use]
    pub const fn for_role(mut self, role: YieldType) -> Self {
        self.role = Some(role);
        self
    }

    /// Whether the modifier affects specialists of `role`.
    pub fn applies_to(&self, role: YieldType) -> bool {
        self.role.is_none_or(|r| r == role)
    }
}

/// An adoptable civilization policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Policy name; also the source identifier for its happiness.
    pub name: String,
    /// Happiness every city gains while the policy is adopted.
    #[serde(default)]
    pub city_happiness: Decimal,
    /// Effects on specialist output.
    #[serde(default)]
    pub specialist_modifiers: Vec<SpecialistModifier>,
}

impl Policy {
    /// A policy with no effects.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city_happiness: Decimal::ZERO,
            specialist_modifiers: Vec::new(),
        }
    }

    /// Add a specialist modifier.
    #[must_use]
    pub fn with_modifier(mut self, modifier: SpecialistModifier) -> Self {
        self.specialist_modifiers.push(modifier);
        self
    }

    /// Set the per-city happiness.
    #[must_use]
    pub fn with_city_happiness(mut self, happiness: Decimal) -> Self {
        self.city_happiness = happiness;
        self
    }
}
