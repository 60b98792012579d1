//! Specialist output and allocation.
//!
//! [`specialist_yield`] is what one specialist of a role produces: the base
//! output from the ruleset, adjusted by the modifiers of every adopted
//! policy. Flat bonuses apply first; percentage bonuses on the same yield add
//! together and scale the result once.
//!
//! [`SpecialistAllocator`] is the only way to move citizens in and out of
//! specialist roles. It borrows the city mutably, so nothing else can touch
//! the population between the check and the write. The city's breakdowns
//! are rebuilt on every read, so the next one reflects the change.

use civitas_types::{
    Adjustment, ModifierEffect, Policy, SpecialistRow, YieldAmount, YieldBundle, YieldType,
};
use rust_decimal::Decimal;
use tracing::debug;

use crate::city::{City, StatContext};
use crate::error::AllocationError;
use crate::ruleset::SpecialistYieldTable;

/// Output of one `role` specialist under the given policies.
pub fn specialist_yield<'p>(
    role: YieldType,
    base: &SpecialistYieldTable,
    policies: impl IntoIterator<Item = &'p Policy>,
) -> YieldBundle {
    let mut output = base.get(role);
    let mut percent = YieldBundle::ZERO;

    let modifiers = policies
        .into_iter()
        .flat_map(|policy| policy.specialist_modifiers.iter())
        .filter(|modifier| modifier.applies_to(role));
    for modifier in modifiers {
        match modifier.effect {
            ModifierEffect::Flat { amount } => output.add(modifier.target, amount),
            ModifierEffect::Percent { percent: pct } => percent.add(modifier.target, pct),
        }
    }

    for (yield_type, pct) in percent.nonzero() {
        output.set(yield_type, apply_percent(output.get(yield_type), pct));
    }
    output
}

/// `amount * (100 + pct) / 100`, saturating.
fn apply_percent(amount: Decimal, pct: Decimal) -> Decimal {
    let scaled = amount.saturating_mul(Decimal::ONE_HUNDRED.saturating_add(pct));
    scaled
        .checked_div(Decimal::ONE_HUNDRED)
        .unwrap_or(scaled)
}

/// One row per role the city has specialist slots for, in yield order.
pub fn specialist_rows(city: &City, ctx: StatContext<'_>) -> Vec<SpecialistRow> {
    let max = city.max_specialists();
    let population = city.population();
    max.nonzero()
        .map(|(role, slots)| SpecialistRow {
            yield_type: role,
            assigned: population.assigned(role),
            max: slots,
            can_increment: population.can_assign(role, slots),
            can_decrement: population.can_unassign(role),
            specialist_yield: YieldAmount::nonzero_entries(&ctx.specialist_yield(role)),
        })
        .collect()
}

/// Mutable handle for assigning and releasing specialists in one city.
#[derive(Debug)]
pub struct SpecialistAllocator<'a> {
    city: &'a mut City,
    ctx: StatContext<'a>,
}

impl<'a> SpecialistAllocator<'a> {
    /// Borrow `city` for allocation under the rules and policies in `ctx`.
    pub const fn new(city: &'a mut City, ctx: StatContext<'a>) -> Self {
        Self { city, ctx }
    }

    /// Specialists assigned to `role`.
    pub const fn assigned(&self, role: YieldType) -> u32 {
        self.city.population().assigned(role)
    }

    /// Slots available for `role`.
    pub fn max(&self, role: YieldType) -> u32 {
        self.city.max_specialists().get(role)
    }

    /// Citizens not assigned to any role.
    pub fn free_population(&self) -> u32 {
        self.city.population().free()
    }

    /// Whether [`adjust`](Self::adjust) with [`Adjustment::Assign`] would
    /// succeed for `role`.
    pub fn can_increment(&self, role: YieldType) -> bool {
        self.city.population().can_assign(role, self.max(role))
    }

    /// Whether [`adjust`](Self::adjust) with [`Adjustment::Unassign`] would
    /// succeed for `role`.
    pub const fn can_decrement(&self, role: YieldType) -> bool {
        self.city.population().can_unassign(role)
    }

    /// Assign or release one `role` specialist.
    ///
    /// # Errors
    ///
    /// - [`AllocationError::CapacityExceeded`] when every slot is filled,
    /// - [`AllocationError::PopulationExhausted`] when no citizen is free,
    /// - [`AllocationError::Underflow`] when releasing from an empty role.
    ///
    /// City state is unchanged on error.
    pub fn adjust(&mut self, role: YieldType, adjustment: Adjustment) -> Result<(), AllocationError> {
        let max = self.max(role);
        if let Err(err) = self.city.population_mut().apply(role, adjustment, max) {
            debug!(city = %self.city.name(), %role, ?adjustment, %err, "Specialist adjustment rejected");
            return Err(err);
        }
        debug!(
            city = %self.city.name(),
            %role,
            ?adjustment,
            assigned = self.assigned(role),
            free = self.free_population(),
            "Specialist adjusted"
        );
        Ok(())
    }

    /// [`adjust`](Self::adjust) with a numeric step of `+1` or `-1`.
    ///
    /// # Errors
    ///
    /// [`AllocationError::InvalidDelta`] for any other step, otherwise as
    /// [`adjust`](Self::adjust).
    pub fn adjust_by(&mut self, role: YieldType, delta: i32) -> Result<(), AllocationError> {
        let adjustment = Adjustment::from_delta(delta).ok_or(AllocationError::InvalidDelta(delta))?;
        self.adjust(role, adjustment)
    }

    /// Output of one `role` specialist under the adopted policies.
    pub fn yield_of_specialist(&self, role: YieldType) -> YieldBundle {
        self.ctx.specialist_yield(role)
    }

    /// Allocation panel rows for the borrowed city.
    pub fn rows(&self) -> Vec<SpecialistRow> {
        specialist_rows(&*self.city, self.ctx)
    }
}
