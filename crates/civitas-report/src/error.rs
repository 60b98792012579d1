//! Error types for the report binary.

/// Top-level error for the report binary.
///
/// Each variant wraps a specific failure, so `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: civitas_city::ConfigError,
    },

    /// The scenario file could not be read.
    #[error("failed to read scenario {path}: {source}")]
    ScenarioIo {
        /// Path of the scenario file.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The scenario file is not valid YAML or has the wrong shape.
    #[error("failed to parse scenario YAML: {source}")]
    ScenarioYaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// The scenario describes an impossible city.
    #[error("invalid city: {source}")]
    City {
        /// The underlying city error.
        #[from]
        source: civitas_city::CityError,
    },

    /// The report could not be serialized.
    #[error("failed to serialize report: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
