//! City yield breakdown, building classification, and specialist allocation.
//!
//! This crate owns the logic behind the city screen. It computes where every
//! yield a city produces comes from, sorts its buildings into display
//! groups, and moves citizens between free work and specialist roles.
//!
//! # Modules
//!
//! - [`aggregator`] -- Per-source tables inverted into per-yield breakdowns
//! - [`city`] -- The [`City`] model and its stat recomputation
//! - [`classifier`] -- Wonder / specialist provider / other grouping
//! - [`config`] -- Configuration loading from `civitas-config.yaml`
//! - [`error`] -- Allocation and construction errors
//! - [`population`] -- Citizen counts and specialist capacity
//! - [`report`] -- The [`CityReport`] read model
//! - [`ruleset`] -- Specialist output, per-citizen yields, policies
//! - [`specialist`] -- Specialist output and the [`SpecialistAllocator`]
//!
//! [`City`]: city::City
//! [`CityReport`]: civitas_types::CityReport
//! [`SpecialistAllocator`]: specialist::SpecialistAllocator

pub mod aggregator;
pub mod city;
pub mod classifier;
pub mod config;
pub mod error;
pub mod population;
pub mod report;
pub mod ruleset;
pub mod specialist;

pub use city::{City, CityStats, StatContext};
pub use classifier::{BuildingCategory, BuildingPartition};
pub use config::{CivitasConfig, ConfigError, LoggingConfig};
pub use error::{AllocationError, CityError};
pub use population::Population;
pub use report::city_report;
pub use ruleset::{PopulationRules, Ruleset, SpecialistYieldTable};
pub use specialist::SpecialistAllocator;
