//! City population and specialist bookkeeping.
//!
//! A [`Population`] is a citizen count plus the specialists assigned per
//! role. Free population is never stored: it is always the remainder
//! `size - sum(assigned)`, so the two cannot drift apart. Specialist
//! capacity comes from the city's buildings ([`max_specialists`]).
//!
//! Assignments change only through [`SpecialistAllocator`], which checks
//! [`Population::can_assign`] / [`Population::can_unassign`] before every
//! step.
//!
//! [`SpecialistAllocator`]: crate::specialist::SpecialistAllocator

use civitas_types::{Adjustment, Building, SpecialistCounts, YieldType};

use crate::error::{AllocationError, CityError};

/// Maximum specialists per role: the sum of every building's slots.
pub fn max_specialists(buildings: &[Building]) -> SpecialistCounts {
    buildings
        .iter()
        .filter_map(|b| b.specialist_slots.as_ref())
        .fold(SpecialistCounts::ZERO, |acc, slots| acc.saturating_add(slots))
}

/// Citizens of a city and their specialist roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    size: u32,
    specialists: SpecialistCounts,
}

impl Population {
    /// A population with no specialists.
    pub const fn new(size: u32) -> Self {
        Self {
            size,
            specialists: SpecialistCounts::ZERO,
        }
    }

    /// A population with initial specialist assignments.
    ///
    /// # Errors
    ///
    /// Returns [`CityError::TooManySpecialists`] if the assignments exceed
    /// `size`.
    pub fn with_specialists(size: u32, specialists: SpecialistCounts) -> Result<Self, CityError> {
        let assigned = specialists
            .iter()
            .map(|(_, count)| u64::from(count))
            .fold(0_u64, u64::saturating_add);
        if assigned > u64::from(size) {
            return Err(CityError::TooManySpecialists {
                assigned,
                population: size,
            });
        }
        Ok(Self { size, specialists })
    }

    /// Total citizens.
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Specialists assigned per role.
    pub const fn specialists(&self) -> &SpecialistCounts {
        &self.specialists
    }

    /// Specialists assigned to `role`.
    pub const fn assigned(&self, role: YieldType) -> u32 {
        self.specialists.get(role)
    }

    /// Citizens not assigned to any specialist role.
    pub fn free(&self) -> u32 {
        self.specialists
            .total()
            .and_then(|assigned| self.size.checked_sub(assigned))
            .unwrap_or(0)
    }

    /// Whether one more `role` specialist fits under `max` and a free citizen
    /// is available.
    pub fn can_assign(&self, role: YieldType, max: u32) -> bool {
        self.assigned(role) < max && self.free() > 0
    }

    /// Whether a `role` specialist can be released.
    pub const fn can_unassign(&self, role: YieldType) -> bool {
        self.assigned(role) > 0
    }

    /// Apply one adjustment to `role`, validating first.
    ///
    /// Assigning checks capacity before free population. On error nothing
    /// changes.
    pub(crate) fn apply(
        &mut self,
        role: YieldType,
        adjustment: Adjustment,
        max: u32,
    ) -> Result<(), AllocationError> {
        let assigned = self.assigned(role);
        let updated = match adjustment {
            Adjustment::Assign => {
                if assigned >= max {
                    return Err(AllocationError::CapacityExceeded {
                        yield_type: role,
                        assigned,
                        max,
                    });
                }
                if self.free() == 0 {
                    return Err(AllocationError::PopulationExhausted { yield_type: role });
                }
                self.specialists.incremented(role)
            }
            Adjustment::Unassign => self.specialists.decremented(role),
        };
        // incremented() only fails at u32::MAX, which the capacity check rules out.
        self.specialists = updated.ok_or(AllocationError::Underflow { yield_type: role })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn science(count: u32) -> SpecialistCounts {
        SpecialistCounts::ZERO.with(YieldType::Science, count)
    }

    #[test]
    fn free_is_the_remainder() {
        let pop = Population::with_specialists(5, science(2).with(YieldType::Gold, 1));
        assert_eq!(pop.as_ref().map(Population::free).ok(), Some(2));
        assert_eq!(Population::new(4).free(), 4);
    }

    #[test]
    fn too_many_specialists_rejected() {
        let pop = Population::with_specialists(1, science(2));
        assert!(matches!(
            pop,
            Err(CityError::TooManySpecialists {
                assigned: 2,
                population: 1
            })
        ));
    }

    #[test]
    fn max_specialists_sums_slots() {
        let buildings = vec![
            Building::new("Library").with_specialist_slots(science(1)),
            Building::new("University").with_specialist_slots(science(2)),
            Building::new("Market")
                .with_specialist_slots(SpecialistCounts::ZERO.with(YieldType::Gold, 1)),
            Building::new("Walls"),
        ];
        let max = max_specialists(&buildings);
        assert_eq!(max.get(YieldType::Science), 3);
        assert_eq!(max.get(YieldType::Gold), 1);
        assert_eq!(max.get(YieldType::Culture), 0);
        assert!(max_specialists(&[]).is_empty());
    }

    #[test]
    fn assign_moves_a_free_citizen() {
        let mut pop = Population::new(3);
        assert!(pop.can_assign(YieldType::Science, 2));
        let result = pop.apply(YieldType::Science, Adjustment::Assign, 2);
        assert!(result.is_ok());
        assert_eq!(pop.assigned(YieldType::Science), 1);
        assert_eq!(pop.free(), 2);
    }

    #[test]
    fn assign_at_capacity_fails_unchanged() {
        let mut pop = Population::with_specialists(3, science(2))
            .ok()
            .unwrap_or_else(|| Population::new(0));
        let before = pop.clone();
        assert!(!pop.can_assign(YieldType::Science, 2));
        let result = pop.apply(YieldType::Science, Adjustment::Assign, 2);
        assert_eq!(
            result,
            Err(AllocationError::CapacityExceeded {
                yield_type: YieldType::Science,
                assigned: 2,
                max: 2
            })
        );
        assert_eq!(pop, before);
    }

    #[test]
    fn assign_without_free_population_fails_unchanged() {
        let mut pop = Population::with_specialists(2, science(2))
            .ok()
            .unwrap_or_else(|| Population::new(0));
        let before = pop.clone();
        assert_eq!(pop.free(), 0);
        let result = pop.apply(YieldType::Science, Adjustment::Assign, 5);
        assert_eq!(
            result,
            Err(AllocationError::PopulationExhausted {
                yield_type: YieldType::Science
            })
        );
        assert_eq!(pop, before);
    }

    #[test]
    fn unassign_from_empty_role_underflows() {
        let mut pop = Population::new(3);
        assert!(!pop.can_unassign(YieldType::Science));
        let result = pop.apply(YieldType::Science, Adjustment::Unassign, 2);
        assert_eq!(
            result,
            Err(AllocationError::Underflow {
                yield_type: YieldType::Science
            })
        );
        assert_eq!(pop.free(), 3);
    }

    #[test]
    fn unassign_returns_citizen_to_free_pool() {
        let mut pop = Population::with_specialists(3, science(1))
            .ok()
            .unwrap_or_else(|| Population::new(0));
        assert!(pop.can_unassign(YieldType::Science));
        assert!(pop.apply(YieldType::Science, Adjustment::Unassign, 1).is_ok());
        assert_eq!(pop.assigned(YieldType::Science), 0);
        assert_eq!(pop.free(), 3);
    }
}
