//! Enumeration types for the city screen core.
//!
//! [`YieldType`] is the closed set of per-turn city outputs. Declaration order
//! is display order: derived `Ord` keeps every `BTreeMap<YieldType, _>` sorted
//! the way the city screen lists its stats.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Yield types
// ---------------------------------------------------------------------------

/// A category of resource a city produces each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum YieldType {
    /// Hammers spent on constructions.
    Production,
    /// Growth; consumed by citizens.
    Food,
    /// Treasury income.
    Gold,
    /// Research points.
    Science,
    /// Points toward new policies.
    Culture,
    /// Civilization-wide contentment.
    Happiness,
}

impl YieldType {
    /// Every yield type, in display order.
    pub const ALL: [Self; 6] = [
        Self::Production,
        Self::Food,
        Self::Gold,
        Self::Science,
        Self::Culture,
        Self::Happiness,
    ];

    /// The great person this yield type generates points toward, if any.
    pub const fn great_person(self) -> Option<GreatPersonKind> {
        match self {
            Self::Production => Some(GreatPersonKind::Engineer),
            Self::Gold => Some(GreatPersonKind::Merchant),
            Self::Science => Some(GreatPersonKind::Scientist),
            Self::Culture => Some(GreatPersonKind::Artist),
            Self::Food | Self::Happiness => None,
        }
    }
}

impl core::fmt::Display for YieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Production => "Production",
            Self::Food => "Food",
            Self::Gold => "Gold",
            Self::Science => "Science",
            Self::Culture => "Culture",
            Self::Happiness => "Happiness",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Great people
// ---------------------------------------------------------------------------

/// A great person a city accumulates points toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum GreatPersonKind {
    /// Fed by production points.
    Engineer,
    /// Fed by gold points.
    Merchant,
    /// Fed by science points.
    Scientist,
    /// Fed by culture points.
    Artist,
}

impl GreatPersonKind {
    /// The yield type whose points feed this great person.
    pub const fn yield_type(self) -> YieldType {
        match self {
            Self::Engineer => YieldType::Production,
            Self::Merchant => YieldType::Gold,
            Self::Scientist => YieldType::Science,
            Self::Artist => YieldType::Culture,
        }
    }

    /// Display title, e.g. "Great Scientist".
    pub const fn title(self) -> &'static str {
        match self {
            Self::Engineer => "Great Engineer",
            Self::Merchant => "Great Merchant",
            Self::Scientist => "Great Scientist",
            Self::Artist => "Great Artist",
        }
    }
}

// ---------------------------------------------------------------------------
// Specialist adjustments
// ---------------------------------------------------------------------------

/// A single-step change to a specialist role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Adjustment {
    /// Move one free citizen into the role (+1).
    Assign,
    /// Release one specialist back to free population (-1).
    Unassign,
}

impl Adjustment {
    /// Interpret a numeric delta. Only `+1` and `-1` are valid steps.
    pub const fn from_delta(delta: i32) -> Option<Self> {
        match delta {
            1 => Some(Self::Assign),
            -1 => Some(Self::Unassign),
            _ => None,
        }
    }

    /// The signed step this adjustment applies to the assigned count.
    pub const fn delta(self) -> i32 {
        match self {
            Self::Assign => 1,
            Self::Unassign => -1,
        }
    }
}
