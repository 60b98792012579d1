//! Read models handed to the presentation layer.
//!
//! A [`CityReport`] is everything the city screen shows, pulled in one call:
//! building lists, the yield and great person breakdowns, and one
//! [`SpecialistRow`] per role the city has slots for.

use rust_decimal::Decimal;
use serde::Serialize;
use ts_rs::TS;

use crate::breakdown::{GreatPersonBreakdown, YieldBreakdown};
use crate::bundle::YieldBundle;
use crate::enums::YieldType;
use crate::ids::CityId;

/// A single nonzero yield amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct YieldAmount {
    /// The yield type.
    pub yield_type: YieldType,
    /// The amount, never zero.
    #[ts(as = "String")]
    pub amount: Decimal,
}

impl YieldAmount {
    /// The nonzero entries of `bundle`, in display order.
    pub fn nonzero_entries(bundle: &YieldBundle) -> Vec<Self> {
        bundle
            .nonzero()
            .map(|(yield_type, amount)| Self { yield_type, amount })
            .collect()
    }
}

/// One specialist role on the allocation panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SpecialistRow {
    /// The specialist role.
    pub yield_type: YieldType,
    /// Specialists currently assigned to the role.
    pub assigned: u32,
    /// Slots available for the role.
    pub max: u32,
    /// Whether one more specialist can be assigned.
    pub can_increment: bool,
    /// Whether one specialist can be released.
    pub can_decrement: bool,
    /// What a single specialist of this role currently produces.
    pub specialist_yield: Vec<YieldAmount>,
}

/// Building names grouped the way the city screen lists them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BuildingGroups {
    /// Wonders.
    pub wonders: Vec<String>,
    /// Buildings granting specialist slots.
    pub specialist_buildings: Vec<String>,
    /// Everything else.
    pub other_buildings: Vec<String>,
}

/// Full snapshot of the city screen's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CityReport {
    /// City identifier.
    pub city_id: CityId,
    /// City name.
    pub name: String,
    /// Total population.
    pub population: u32,
    /// Citizens not assigned as specialists.
    pub free_population: u32,
    /// Completed buildings by display group.
    pub buildings: BuildingGroups,
    /// Yield sources and totals.
    pub yields: YieldBreakdown,
    /// Great person point sources and totals.
    pub great_people: GreatPersonBreakdown,
    /// Specialist allocation panel rows.
    pub specialists: Vec<SpecialistRow>,
}
