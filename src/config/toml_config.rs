use crate::domain::model::SearchBound;
use crate::utils::error::{DrillError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub greeting: GreetingConfig,
    pub demo: DemoConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub show_welcome: bool,
    pub app_name: String,
    pub version: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            show_welcome: true,
            app_name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Inputs for `demo`. Defaults are the classic live-coding literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub merge_left: Vec<i64>,
    pub merge_right: Vec<i64>,
    pub palindromes: Vec<String>,
    pub reverse_text: String,
    pub pair_values: Vec<i64>,
    pub pair_target: i64,
    pub pair_search: SearchBound,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            merge_left: vec![1, 3, 5, -1, -6],
            merge_right: vec![11, -11, 8],
            palindromes: vec!["madam".to_string(), "madam2".to_string()],
            reverse_text: "this is string to be reversed".to_string(),
            pair_values: vec![1, 5, -3, 8, 6, 10, 2, 15],
            pair_target: 12,
            pair_search: SearchBound::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DrillError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DrillError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DrillError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("greeting.app_name", &self.greeting.app_name)?;
        validation::validate_non_empty_string("greeting.version", &self.greeting.version)?;
        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        validation::validate_non_empty_list("demo.palindromes", &self.demo.palindromes)?;
        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
