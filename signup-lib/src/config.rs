//! Form configuration

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(3000);
pub const DEFAULT_SUCCESS_MESSAGE: &str = "🎉 High five! Form submitted successfully!";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Please fix all errors before submitting";

/// Submit-flow settings.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use signup_lib::FormConfig;
///
/// let config = FormConfig::default()
///     .with_reset_delay(Duration::from_secs(5))
///     .with_success_message("Welcome aboard!");
/// assert_eq!(config.reset_delay, Duration::from_secs(5));
/// ```
///
/// As JSON, every key is optional:
///
/// ```json
/// { "reset_delay_ms": 3000, "success_message": "...", "failure_message": "..." }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Delay between a successful submit and the form reset.
    ///
    /// Default: 3 seconds
    #[serde(rename = "reset_delay_ms", with = "millis")]
    pub reset_delay: Duration,

    /// Aggregate message shown on a successful submit.
    pub success_message: String,

    /// Aggregate message shown when any field is invalid.
    pub failure_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            reset_delay: DEFAULT_RESET_DELAY,
            success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            failure_message: DEFAULT_FAILURE_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reset delay.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    /// Sets the success message.
    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    /// Sets the failure message.
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = message.into();
        self
    }

    /// Parses a JSON config. Missing keys keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        Self::from_json_str(&json)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.reset_delay.is_zero() {
            return Err(ConfigError::InvalidDelay);
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
