//! Building classification for the city screen.
//!
//! Every completed building lands in exactly one group. Wonder status is
//! checked first, so a wonder that also grants specialist slots is listed
//! with the wonders.

use civitas_types::{Building, BuildingGroups};

/// Display group of a single building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingCategory {
    /// A wonder.
    Wonder,
    /// A building that grants specialist slots.
    SpecialistProvider,
    /// Anything else.
    Other,
}

/// Classify a single building.
pub const fn classify(building: &Building) -> BuildingCategory {
    if building.is_wonder {
        BuildingCategory::Wonder
    } else if building.specialist_slots.is_some() {
        BuildingCategory::SpecialistProvider
    } else {
        BuildingCategory::Other
    }
}

/// Buildings split into the three display groups, input order preserved
/// within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingPartition<'a> {
    /// Wonders.
    pub wonders: Vec<&'a Building>,
    /// Buildings granting specialist slots.
    pub specialist_providers: Vec<&'a Building>,
    /// Everything else.
    pub others: Vec<&'a Building>,
}

impl BuildingPartition<'_> {
    /// Total number of buildings across all groups.
    pub fn len(&self) -> usize {
        self.wonders
            .len()
            .saturating_add(self.specialist_providers.len())
            .saturating_add(self.others.len())
    }

    /// Whether all groups are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Building names per group, for the report.
    pub fn names(&self) -> BuildingGroups {
        BuildingGroups {
            wonders: group_names(&self.wonders),
            specialist_buildings: group_names(&self.specialist_providers),
            other_buildings: group_names(&self.others),
        }
    }
}

fn group_names(group: &[&Building]) -> Vec<String> {
    group.iter().map(|b| b.name.clone()).collect()
}

/// Partition `buildings` into wonders, specialist providers, and others.
pub fn partition(buildings: &[Building]) -> BuildingPartition<'_> {
    let mut groups = BuildingPartition::default();
    for building in buildings {
        match classify(building) {
            BuildingCategory::Wonder => groups.wonders.push(building),
            BuildingCategory::SpecialistProvider => groups.specialist_providers.push(building),
            BuildingCategory::Other => groups.others.push(building),
        }
    }
    groups
}
