//! Game rules consulted when computing city stats.
//!
//! The [`Ruleset`] carries the base output of each specialist role, the
//! per-citizen yields, and the policy definitions. Defaults match the
//! standard game; `civitas-config.yaml` can override any section.

use std::collections::{BTreeMap, BTreeSet};

use civitas_types::{Policy, SpecialistModifier, YieldBundle, YieldType};
use rust_decimal::Decimal;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Specialist yields
// ---------------------------------------------------------------------------

/// Base output of one specialist, per role.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SpecialistYieldTable(BTreeMap<YieldType, YieldBundle>);

impl SpecialistYieldTable {
    /// Build a table from `(role, output)` pairs.
    pub fn new(entries: impl IntoIterator<Item = (YieldType, YieldBundle)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Base output of a `role` specialist; zero for roles with no entry.
    pub fn get(&self, role: YieldType) -> YieldBundle {
        self.0.get(&role).copied().unwrap_or(YieldBundle::ZERO)
    }
}

impl Default for SpecialistYieldTable {
    fn default() -> Self {
        Self::new([
            (
                YieldType::Production,
                YieldBundle::single(YieldType::Production, Decimal::TWO),
            ),
            (
                YieldType::Gold,
                YieldBundle::single(YieldType::Gold, Decimal::TWO),
            ),
            (
                YieldType::Science,
                YieldBundle::single(YieldType::Science, Decimal::from(3)),
            ),
            (
                YieldType::Culture,
                YieldBundle::single(YieldType::Culture, Decimal::from(3)),
            ),
        ])
    }
}

// ---------------------------------------------------------------------------
// Population
// ---------------------------------------------------------------------------

/// Yields every citizen produces or consumes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PopulationRules {
    /// Food eaten per citizen.
    #[serde(default = "default_food_per_citizen")]
    pub food_per_citizen: Decimal,

    /// Science produced per citizen.
    #[serde(default = "default_science_per_citizen")]
    pub science_per_citizen: Decimal,

    /// Production produced per citizen not assigned as a specialist.
    #[serde(default = "default_production_per_free_citizen")]
    pub production_per_free_citizen: Decimal,

    /// Unhappiness caused per citizen.
    #[serde(default = "default_unhappiness_per_citizen")]
    pub unhappiness_per_citizen: Decimal,
}

impl Default for PopulationRules {
    fn default() -> Self {
        Self {
            food_per_citizen: default_food_per_citizen(),
            science_per_citizen: default_science_per_citizen(),
            production_per_free_citizen: default_production_per_free_citizen(),
            unhappiness_per_citizen: default_unhappiness_per_citizen(),
        }
    }
}

// ---------------------------------------------------------------------------
// Ruleset
// ---------------------------------------------------------------------------

/// All rules the city core consults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ruleset {
    /// Base output per specialist role.
    #[serde(default)]
    pub specialist_yields: SpecialistYieldTable,

    /// Per-citizen yields.
    #[serde(default)]
    pub population: PopulationRules,

    /// Great person points each specialist adds toward its role's great person.
    #[serde(default = "default_great_person_points_per_specialist")]
    pub great_person_points_per_specialist: Decimal,

    /// Adoptable policies.
    #[serde(default = "default_policies")]
    pub policies: Vec<Policy>,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            specialist_yields: SpecialistYieldTable::default(),
            population: PopulationRules::default(),
            great_person_points_per_specialist: default_great_person_points_per_specialist(),
            policies: default_policies(),
        }
    }
}

impl Ruleset {
    /// Policy definition by name.
    pub fn policy(&self, name: &str) -> Option<&Policy> {
        self.policies.iter().find(|p| p.name == name)
    }

    /// Definitions of the adopted policies, in ruleset order. Names with no
    /// definition are skipped.
    pub fn adopted<'a>(
        &'a self,
        adopted: &'a BTreeSet<String>,
    ) -> impl Iterator<Item = &'a Policy> + 'a {
        self.policies
            .iter()
            .filter(move |p| adopted.contains(&p.name))
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_food_per_citizen() -> Decimal {
    Decimal::TWO
}

const fn default_science_per_citizen() -> Decimal {
    Decimal::ONE
}

const fn default_production_per_free_citizen() -> Decimal {
    Decimal::ONE
}

const fn default_unhappiness_per_citizen() -> Decimal {
    Decimal::ONE
}

fn default_great_person_points_per_specialist() -> Decimal {
    Decimal::from(3)
}

fn default_policies() -> Vec<Policy> {
    vec![
        Policy::new("Commerce Complete")
            .with_modifier(SpecialistModifier::flat(YieldType::Gold, Decimal::ONE)),
        Policy::new("Secularism")
            .with_modifier(SpecialistModifier::flat(YieldType::Science, Decimal::TWO)),
    ]
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_specialist_table() {
        let table = SpecialistYieldTable::default();
        assert_eq!(
            table.get(YieldType::Science),
            YieldBundle::single(YieldType::Science, dec!(3))
        );
        assert_eq!(
            table.get(YieldType::Gold),
            YieldBundle::single(YieldType::Gold, dec!(2))
        );
        assert!(table.get(YieldType::Food).is_zero());
    }

    #[test]
    fn default_policies_are_known() {
        let rules = Ruleset::default();
        assert!(rules.policy("Secularism").is_some());
        assert!(rules.policy("Commerce Complete").is_some());
        assert!(rules.policy("Tradition").is_none());
    }

    #[test]
    fn adopted_skips_unknown_names_and_keeps_ruleset_order() {
        let rules = Ruleset::default();
        let adopted: BTreeSet<String> = ["Secularism", "Tradition", "Commerce Complete"]
            .into_iter()
            .map(String::from)
            .collect();
        let names: Vec<_> = rules.adopted(&adopted).map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Commerce Complete", "Secularism"]);
    }
}
