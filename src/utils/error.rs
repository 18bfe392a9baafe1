use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrillError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Could not parse input '{input}': {reason}")]
    InputParseError { input: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DrillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DrillError::IoError(_) => ErrorCategory::Io,
            DrillError::SerializationError(_) => ErrorCategory::Serialization,
            DrillError::ConfigError { .. }
            | DrillError::ConfigValidationError { .. }
            | DrillError::InvalidConfigValueError { .. }
            | DrillError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DrillError::InputParseError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DrillError::InputParseError { .. } => ErrorSeverity::Medium,
            DrillError::ConfigError { .. }
            | DrillError::ConfigValidationError { .. }
            | DrillError::InvalidConfigValueError { .. }
            | DrillError::MissingConfigError { .. } => ErrorSeverity::High,
            DrillError::SerializationError(_) => ErrorSeverity::High,
            DrillError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DrillError::IoError(_) => {
                "Check that the file exists and that stdout is writable".to_string()
            }
            DrillError::SerializationError(_) => {
                "Retry with --format text to bypass JSON rendering".to_string()
            }
            DrillError::ConfigError { .. } | DrillError::ConfigValidationError { .. } => {
                "Make sure the configuration file is valid TOML".to_string()
            }
            DrillError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            DrillError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration file", field)
            }
            DrillError::InputParseError { .. } => {
                "Pass integers as a comma separated list, e.g. 1,-3,8".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Io => format!("Could not read or write data: {}", self),
            ErrorCategory::Serialization => format!("Could not render output: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Input => format!("Bad input: {}", self),
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, DrillError>;
