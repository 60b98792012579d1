//! Shared type definitions for the Civitas city screen core.
//!
//! This crate is the single source of truth for the data that flows between
//! the city model, the yield and specialist logic in `civitas-city`, and the
//! presentation layer. Presentation-facing types derive `ts-rs` bindings.
//!
//! # Modules
//!
//! - [`ids`] -- [`CityId`], the UUID v7 city identifier
//! - [`enums`] -- Yield types, great people, specialist adjustments
//! - [`bundle`] -- Fixed per-yield records ([`YieldBundle`], [`SpecialistCounts`])
//! - [`contribution`] -- Insertion-ordered per-source yield tables
//! - [`breakdown`] -- Per-yield source breakdowns with totals
//! - [`structs`] -- Buildings and policies
//! - [`report`] -- Read models for the city screen

pub mod breakdown;
pub mod bundle;
pub mod contribution;
pub mod enums;
pub mod ids;
pub mod report;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use breakdown::{Breakdown, GreatPersonBreakdown, SourceAmounts, YieldBreakdown};
pub use bundle::{SpecialistCounts, YieldBundle};
pub use contribution::{HappinessDeltas, SourceContribution};
pub use enums::{Adjustment, GreatPersonKind, YieldType};
pub use ids::CityId;
pub use report::{BuildingGroups, CityReport, SpecialistRow, YieldAmount};
pub use structs::{Building, ModifierEffect, Policy, SpecialistModifier};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation for the presentation layer.

    #[test]
    fn export_bindings() {
        // Files are written to `bindings/` relative to the crate root.
        use ts_rs::TS;

        let _ = crate::ids::CityId::export_all();

        let _ = crate::enums::YieldType::export_all();
        let _ = crate::enums::GreatPersonKind::export_all();
        let _ = crate::enums::Adjustment::export_all();

        let _ = crate::bundle::YieldBundle::export_all();
        let _ = crate::bundle::SpecialistCounts::export_all();

        let _ = crate::breakdown::SourceAmounts::export_all();
        let _ = crate::breakdown::YieldBreakdown::export_all();
        let _ = crate::breakdown::GreatPersonBreakdown::export_all();

        let _ = crate::report::YieldAmount::export_all();
        let _ = crate::report::SpecialistRow::export_all();
        let _ = crate::report::BuildingGroups::export_all();
        let _ = crate::report::CityReport::export_all();
    }
}
