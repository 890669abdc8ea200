//! Application configuration management.

use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::Jurisdiction;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Dataset configuration.
    #[serde(default)]
    pub dataset: DatasetConfig,
    /// Map boundary configuration.
    #[serde(default)]
    pub boundaries: BoundariesConfig,
    /// View defaults.
    #[serde(default)]
    pub view: ViewConfig,
    /// Population overrides keyed by jurisdiction code (e.g. `NSW = 8000000`).
    #[serde(default)]
    pub populations: HashMap<String, u64>,
}

/// Dataset configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to the tab-separated spending file.
    #[serde(default = "default_dataset_path")]
    pub path: String,
    /// Reject the whole file on an unknown state code instead of skipping the row.
    #[serde(default)]
    pub strict_states: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            strict_states: false,
        }
    }
}

fn default_dataset_path() -> String {
    "govspendingdata.tsv".to_string()
}

/// Map boundary configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundariesConfig {
    /// Path to the GeoJSON state boundaries. The map has no regions when unset.
    #[serde(default)]
    pub path: Option<String>,
}

/// View defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Number of categories shown in a state's drill-down chart.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    /// Divisor used for the across-jurisdiction category average.
    #[serde(default = "default_jurisdiction_count")]
    pub jurisdiction_count: u32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            jurisdiction_count: default_jurisdiction_count(),
        }
    }
}

fn default_top_n() -> usize {
    10
}

fn default_jurisdiction_count() -> u32 {
    9 // 8 states and territories + federal
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or fails validation.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("GOVSPEND")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        tracing::debug!(run_mode = %run_mode, dataset = %config.dataset.path, "Configuration loaded");
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for a zero `top_n`, a zero
    /// `jurisdiction_count`, or a bad population override.
    pub fn validate(&self) -> AppResult<()> {
        if self.view.top_n == 0 {
            return Err(AppError::Validation("view.top_n must be at least 1".into()));
        }
        if self.view.jurisdiction_count == 0 {
            return Err(AppError::Validation(
                "view.jurisdiction_count must be at least 1".into(),
            ));
        }
        self.population_overrides().map(|_| ())
    }

    /// Parses the population overrides, sorted by jurisdiction.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` for an unknown jurisdiction code or a
    /// zero population.
    pub fn population_overrides(&self) -> AppResult<Vec<(Jurisdiction, u64)>> {
        let mut overrides = self
            .populations
            .iter()
            .map(|(code, &population)| {
                let jurisdiction: Jurisdiction =
                    code.parse().map_err(AppError::Validation)?;
                if population == 0 {
                    return Err(AppError::Validation(format!(
                        "population for {jurisdiction} must be positive"
                    )));
                }
                Ok((jurisdiction, population))
            })
            .collect::<AppResult<Vec<_>>>()?;
        overrides.sort_by_key(|(j, _)| *j);
        Ok(overrides)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
