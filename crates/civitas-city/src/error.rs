//! Error types for the `civitas-city` crate.
//!
//! Allocation failures are expected, recoverable conditions: the caller gets
//! the reason back and city state is left exactly as it was.

use civitas_types::YieldType;

/// Reasons a specialist adjustment is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    /// Every slot for the role is already filled.
    #[error("{yield_type} specialists at capacity ({assigned}/{max})")]
    CapacityExceeded {
        /// The specialist role.
        yield_type: YieldType,
        /// Specialists currently assigned.
        assigned: u32,
        /// Slots available.
        max: u32,
    },

    /// No unassigned citizen is left to become a specialist.
    #[error("no free population to assign as {yield_type} specialist")]
    PopulationExhausted {
        /// The specialist role.
        yield_type: YieldType,
    },

    /// The role has no specialist to release.
    #[error("no {yield_type} specialist to unassign")]
    Underflow {
        /// The specialist role.
        yield_type: YieldType,
    },

    /// A numeric step other than `+1` or `-1` was requested.
    #[error("invalid specialist delta {0}, expected +1 or -1")]
    InvalidDelta(i32),
}

/// Errors that can occur while constructing a city.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CityError {
    /// Initial specialist assignments exceed the population.
    #[error("{assigned} specialists assigned but population is {population}")]
    TooManySpecialists {
        /// Total specialists requested.
        assigned: u64,
        /// City population.
        population: u32,
    },

    /// An initial assignment exceeds the slots the buildings grant.
    #[error("{assigned} {yield_type} specialists assigned but only {max} slots")]
    SpecialistCapacity {
        /// The specialist role.
        yield_type: YieldType,
        /// Specialists requested.
        assigned: u32,
        /// Slots available.
        max: u32,
    },
}
