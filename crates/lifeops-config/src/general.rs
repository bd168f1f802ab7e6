//! General application configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Offset from UTC, in whole hours, used to decide what "today" is.
    #[serde(default)]
    pub timezone_offset_hours: i32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            timezone_offset_hours: 0,
        }
    }
}

impl GeneralConfig {
    /// Reject offsets no real time zone uses.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-12..=14).contains(&self.timezone_offset_hours) {
            return Err(ConfigError::InvalidValue {
                field: "general.timezone_offset_hours".into(),
                reason: format!(
                    "{} is outside -12..=14",
                    self.timezone_offset_hours
                ),
            });
        }
        if self.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Offset in seconds, for building a fixed time zone.
    #[must_use]
    pub const fn timezone_offset_secs(&self) -> i32 {
        self.timezone_offset_hours * 3600
    }
}
