//! City screen report for a Civitas scenario.
//!
//! Builds the city a scenario file describes, replays its specialist
//! adjustments, and prints the resulting city screen as JSON.
//!
//! ```text
//! civitas-report [SCENARIO.yaml]
//! ```
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `$CIVITAS_CONFIG` or `civitas-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Load the scenario (the bundled capital when no path is given)
//! 4. Build the city and apply adjustments
//! 5. Print the report

mod error;
mod scenario;

use std::path::PathBuf;

use civitas_city::{CivitasConfig, StatContext, city_report};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::ReportError;
use crate::scenario::Scenario;

const DEFAULT_CONFIG_PATH: &str = "civitas-config.yaml";
const DEFAULT_SCENARIO_PATH: &str = "scenarios/capital.yaml";

/// Application entry point for the report binary.
///
/// # Errors
///
/// Returns an error if the configuration or scenario cannot be loaded, the
/// scenario describes an impossible city, or the report cannot be encoded.
fn main() -> Result<(), ReportError> {
    // Logging is configured from the config file, so load that first.
    let config = load_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!(
        policies = config.rules.policies.len(),
        log_level = config.logging.level,
        "Configuration loaded"
    );

    let scenario_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_SCENARIO_PATH), PathBuf::from);
    let scenario = Scenario::from_file(&scenario_path)?;
    info!(
        path = %scenario_path.display(),
        adjustments = scenario.adjustments.len(),
        "Scenario loaded"
    );

    let ctx = StatContext::new(&config.rules, &scenario.adopted_policies);
    let city = scenario.build(ctx)?;
    let report = city_report(&city, ctx);

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Load configuration from `$CIVITAS_CONFIG` or `civitas-config.yaml`.
///
/// Falls back to defaults when neither exists.
fn load_config() -> Result<CivitasConfig, ReportError> {
    let config_path = std::env::var_os("CIVITAS_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    if config_path.exists() {
        Ok(CivitasConfig::from_file(&config_path)?)
    } else {
        Ok(CivitasConfig::default())
    }
}
