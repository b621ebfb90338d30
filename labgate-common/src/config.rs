//! Page configuration
//!
//! Settings are resolved from two sources:
//! 1. A JSON document embedded in the host page (highest priority)
//! 2. Default values (lowest priority)
//!
//! Keys missing from the JSON document keep their defaults.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{Error, Result};

/// Delay before a successful login resets the form
pub const DEFAULT_RESET_DELAY_MS: u64 = 3000;
pub const MAX_RESET_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoginConfig {
    /// Page heading
    pub heading: String,
    /// Line under the heading
    pub subtitle: String,
    /// Caption under the form
    pub footer: String,
    /// Milliseconds between a successful submit and the form reset
    pub reset_delay_ms: u64,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            heading: "Sign In".to_string(),
            subtitle: "Access the laboratory system".to_string(),
            footer: "Lab Assignment • Login Form".to_string(),
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

impl LoginConfig {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.reset_delay_ms == 0 {
            return Err(Error::InvalidConfig("reset_delay_ms must be positive".to_string()));
        }
        if self.reset_delay_ms > MAX_RESET_DELAY_MS {
            return Err(Error::InvalidConfig(format!(
                "reset_delay_ms too large (max {})",
                MAX_RESET_DELAY_MS
            )));
        }
        Ok(())
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}
