//! Scenario files: a city to build and the specialist moves to replay on it.
//!
//! ```yaml
//! name: Babylon
//! population: 6
//! adopted_policies: [Secularism]
//! buildings:
//!   - name: Library
//!     yields: { science: 1 }
//!     specialist_slots: { science: 1 }
//! specialists: { science: 1 }
//! adjustments:
//!   - { yield_type: Science, delta: 1 }
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use civitas_city::{City, StatContext};
use civitas_types::{Building, SpecialistCounts, YieldType};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ReportError;

/// A city and the allocation steps to apply to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// City name.
    #[serde(default = "default_city_name")]
    pub name: String,

    /// Total citizens.
    #[serde(default)]
    pub population: u32,

    /// Completed buildings, in construction order.
    #[serde(default)]
    pub buildings: Vec<Building>,

    /// Policy names adopted by the owning civilization.
    #[serde(default)]
    pub adopted_policies: BTreeSet<String>,

    /// Specialists assigned when the city is built.
    #[serde(default)]
    pub specialists: SpecialistCounts,

    /// Allocation steps replayed in order after the city is built.
    #[serde(default)]
    pub adjustments: Vec<ScenarioAdjustment>,
}

/// One `+1` / `-1` step on a specialist role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScenarioAdjustment {
    /// The specialist role.
    pub yield_type: YieldType,
    /// `1` to assign, `-1` to release.
    pub delta: i32,
}

fn default_city_name() -> String {
    String::from("Capital")
}

impl Scenario {
    /// Load a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ScenarioIo`] if the file cannot be read, or
    /// [`ReportError::ScenarioYaml`] if it does not describe a scenario.
    pub fn from_file(path: &Path) -> Result<Self, ReportError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ReportError::ScenarioIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::ScenarioYaml`] if the string does not describe
    /// a scenario.
    pub fn parse(yaml: &str) -> Result<Self, ReportError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Build the city and replay the adjustments.
    ///
    /// Rejected adjustments are logged and skipped; the rest still apply.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::City`] if the initial specialists do not fit
    /// the population or the buildings' slots.
    pub fn build(&self, ctx: StatContext<'_>) -> Result<City, ReportError> {
        let mut city = City::with_specialists(
            self.name.as_str(),
            self.population,
            self.buildings.clone(),
            self.specialists,
        )?;
        info!(
            city = %city.name(),
            population = self.population,
            buildings = city.buildings().len(),
            "City built"
        );

        let mut allocator = city.specialists(ctx);
        for step in &self.adjustments {
            if let Err(err) = allocator.adjust_by(step.yield_type, step.delta) {
                warn!(role = %step.yield_type, delta = step.delta, error = %err, "Adjustment skipped");
            }
        }
        Ok(city)
    }
}
