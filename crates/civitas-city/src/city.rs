//! The city model and its stat tables.
//!
//! A [`City`] owns its population and its buildings. Nothing derived from
//! them is stored: [`City::stats`] rebuilds the per-source tables from the
//! current population, buildings and the policies in the given
//! [`StatContext`], so a change to any of them shows up on the next read.

use std::collections::BTreeSet;

use civitas_types::{
    Building, CityId, GreatPersonBreakdown, HappinessDeltas, Policy, SourceContribution,
    SpecialistCounts, YieldBreakdown, YieldBundle, YieldType,
};
use rust_decimal::Decimal;
use tracing::debug;

use crate::aggregator;
use crate::classifier::{self, BuildingPartition};
use crate::error::CityError;
use crate::population::{self, Population};
use crate::ruleset::Ruleset;
use crate::specialist::{self, SpecialistAllocator};

/// Source name for per-citizen yields.
pub const POPULATION_SOURCE: &str = "Population";

/// Source name for the combined output of all specialists.
pub const SPECIALISTS_SOURCE: &str = "Specialists";

/// Rules and adopted policies a city's stats are computed under.
#[derive(Debug, Clone, Copy)]
pub struct StatContext<'a> {
    /// The ruleset.
    pub ruleset: &'a Ruleset,
    /// Names of the owning civilization's adopted policies.
    pub adopted: &'a BTreeSet<String>,
}

impl<'a> StatContext<'a> {
    /// Bundle a ruleset with a set of adopted policy names.
    pub const fn new(ruleset: &'a Ruleset, adopted: &'a BTreeSet<String>) -> Self {
        Self { ruleset, adopted }
    }

    /// Definitions of the adopted policies known to the ruleset.
    pub fn adopted_policies(self) -> impl Iterator<Item = &'a Policy> {
        self.ruleset.adopted(self.adopted)
    }

    /// Output of one `role` specialist under the adopted policies.
    pub fn specialist_yield(self, role: YieldType) -> YieldBundle {
        specialist::specialist_yield(
            role,
            &self.ruleset.specialist_yields,
            self.adopted_policies(),
        )
    }
}

/// Per-source tables a city's screen is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityStats {
    base_contributions: SourceContribution,
    happiness: HappinessDeltas,
    great_person_points: SourceContribution,
}

impl CityStats {
    /// Yields per source, happiness excluded.
    pub const fn base_contributions(&self) -> &SourceContribution {
        &self.base_contributions
    }

    /// Happiness per source.
    pub const fn happiness(&self) -> &HappinessDeltas {
        &self.happiness
    }

    /// Great person points per source, keyed by the yield of the great person
    /// they feed.
    pub const fn great_person_points(&self) -> &SourceContribution {
        &self.great_person_points
    }

    /// Every yield with its contributing sources and total.
    pub fn yield_breakdown(&self) -> YieldBreakdown {
        aggregator::aggregate(&self.base_contributions, &self.happiness)
    }

    /// Great person points per great person with their sources.
    pub fn great_person_breakdown(&self) -> GreatPersonBreakdown {
        aggregator::great_person_breakdown(&self.great_person_points)
    }
}

/// A city on the city screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    id: CityId,
    name: String,
    population: Population,
    buildings: Vec<Building>,
}

impl City {
    /// A city with no specialists assigned.
    pub fn new(name: impl Into<String>, size: u32, buildings: Vec<Building>) -> Self {
        Self {
            id: CityId::new(),
            name: name.into(),
            population: Population::new(size),
            buildings,
        }
    }

    /// A city with initial specialist assignments.
    ///
    /// # Errors
    ///
    /// - [`CityError::TooManySpecialists`] if more specialists than citizens
    ///   are requested,
    /// - [`CityError::SpecialistCapacity`] if a role exceeds the slots its
    ///   buildings grant.
    pub fn with_specialists(
        name: impl Into<String>,
        size: u32,
        buildings: Vec<Building>,
        specialists: SpecialistCounts,
    ) -> Result<Self, CityError> {
        let max = population::max_specialists(&buildings);
        if let Some((yield_type, assigned)) = specialists
            .nonzero()
            .find(|&(role, count)| count > max.get(role))
        {
            return Err(CityError::SpecialistCapacity {
                yield_type,
                assigned,
                max: max.get(yield_type),
            });
        }
        let population = Population::with_specialists(size, specialists)?;
        Ok(Self {
            id: CityId::new(),
            name: name.into(),
            population,
            buildings,
        })
    }

    /// City identifier.
    pub const fn id(&self) -> CityId {
        self.id
    }

    /// City name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Citizens and their specialist roles.
    pub const fn population(&self) -> &Population {
        &self.population
    }

    pub(crate) const fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    /// Completed buildings, in construction order.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// Specialist slots per role granted by the city's buildings.
    pub fn max_specialists(&self) -> SpecialistCounts {
        population::max_specialists(&self.buildings)
    }

    /// Buildings grouped into wonders, specialist providers and the rest.
    pub fn building_partition(&self) -> BuildingPartition<'_> {
        classifier::partition(&self.buildings)
    }

    /// Every yield with its contributing sources and total.
    pub fn yield_breakdown(&self, ctx: StatContext<'_>) -> YieldBreakdown {
        self.stats(ctx).yield_breakdown()
    }

    /// Great person points per great person with their sources.
    pub fn great_person_breakdown(&self, ctx: StatContext<'_>) -> GreatPersonBreakdown {
        self.stats(ctx).great_person_breakdown()
    }

    /// Complete a building. Its yields and slots count from the next read.
    pub fn add_building(&mut self, building: Building) {
        debug!(city = %self.name, building = %building.name, "Building added");
        self.buildings.push(building);
    }

    /// Handle for assigning and releasing specialists.
    pub const fn specialists<'a>(&'a mut self, ctx: StatContext<'a>) -> SpecialistAllocator<'a> {
        SpecialistAllocator::new(self, ctx)
    }

    /// Build every stat table from population, buildings and policies.
    ///
    /// A building's Happiness yield and its `happiness` field both land in
    /// the happiness table, summed, so neither hides the other.
    pub fn stats(&self, ctx: StatContext<'_>) -> CityStats {
        let rules = &ctx.ruleset.population;
        let size = Decimal::from(self.population.size());
        let free = Decimal::from(self.population.free());

        let mut base = SourceContribution::new();
        let citizens = YieldBundle::ZERO
            .with(YieldType::Science, size.saturating_mul(rules.science_per_citizen))
            .with(
                YieldType::Production,
                free.saturating_mul(rules.production_per_free_citizen),
            )
            .with(
                YieldType::Food,
                Decimal::ZERO.saturating_sub(size.saturating_mul(rules.food_per_citizen)),
            );
        if !citizens.is_zero() {
            base.insert(POPULATION_SOURCE, citizens);
        }
        for building in &self.buildings {
            let yields = building.yields.with(YieldType::Happiness, Decimal::ZERO);
            if !yields.is_zero() {
                base.accumulate(building.name.as_str(), &yields);
            }
        }
        let specialist_output = self
            .population
            .specialists()
            .nonzero()
            .map(|(role, count)| ctx.specialist_yield(role).scaled(Decimal::from(count)))
            .fold(YieldBundle::ZERO, |acc, output| acc.saturating_add(&output));
        if !specialist_output.is_zero() {
            base.insert(SPECIALISTS_SOURCE, specialist_output);
        }

        let mut happiness = HappinessDeltas::new();
        let unhappiness = size.saturating_mul(rules.unhappiness_per_citizen);
        if !unhappiness.is_zero() {
            happiness.insert(
                POPULATION_SOURCE.to_owned(),
                Decimal::ZERO.saturating_sub(unhappiness),
            );
        }
        let building_happiness = self.buildings.iter().map(|b| {
            let delta = b.happiness.saturating_add(b.yields.get(YieldType::Happiness));
            (b.name.as_str(), delta)
        });
        let policy_happiness = ctx
            .adopted_policies()
            .map(|p| (p.name.as_str(), p.city_happiness));
        for (source, delta) in building_happiness.chain(policy_happiness) {
            if delta.is_zero() {
                continue;
            }
            let entry = happiness.entry(source.to_owned()).or_insert(Decimal::ZERO);
            *entry = entry.saturating_add(delta);
        }

        let mut great_person_points = SourceContribution::new();
        for building in self
            .buildings
            .iter()
            .filter(|b| !b.great_person_points.is_zero())
        {
            great_person_points.accumulate(building.name.as_str(), &building.great_person_points);
        }
        let per_specialist = ctx.ruleset.great_person_points_per_specialist;
        let specialist_points: YieldBundle = self
            .population
            .specialists()
            .nonzero()
            .map(|(role, count)| (role, Decimal::from(count).saturating_mul(per_specialist)))
            .collect();
        if !specialist_points.is_zero() {
            great_person_points.insert(SPECIALISTS_SOURCE, specialist_points);
        }

        debug!(
            city = %self.name,
            population = self.population.size(),
            free = self.population.free(),
            sources = base.len(),
            "City stats computed"
        );
        CityStats {
            base_contributions: base,
            happiness,
            great_person_points,
        }
    }
}
