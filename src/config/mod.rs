#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::{DemoConfig, GreetingConfig, LoggingConfig, TomlConfig};

use crate::utils::error::{DrillError, Result};
use crate::utils::validation;

/// Parses a comma separated integer list such as `1,-3, 8`. Blank input is an empty list.
pub fn parse_int_list(input: &str) -> Result<Vec<i64>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    input
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<i64>()
                .map_err(|e| DrillError::InputParseError {
                    input: item.trim().to_string(),
                    reason: e.to_string(),
                })
        })
        .collect()
}

/// Loads the given file, or the built-in defaults when no path is given.
pub fn load_config(path: Option<&str>) -> Result<TomlConfig> {
    match path {
        Some(path) => {
            validation::validate_path("config", path)?;
            tracing::debug!("Loading configuration from: {}", path);
            TomlConfig::from_file(path)
        }
        None => Ok(TomlConfig::default()),
    }
}
