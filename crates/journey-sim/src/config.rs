//! Engine configuration
//!
//! Day-count bounds and the start-of-day time used for event labels.
//! Values can come from defaults, a TOML document, or the builder.

use crate::clock::{DayClock, MINUTES_PER_DAY};
use crate::error::{JourneyError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest accepted day count.
pub const MIN_DAYS: u32 = 7;
/// Largest accepted day count.
pub const MAX_DAYS: u32 = 90;
/// Day count used when the caller does not pick one.
pub const DEFAULT_DAYS: u32 = 30;
/// Largest `max_days` whose elapsed minutes still fit in a `u32`.
pub const MAX_SUPPORTED_DAYS: u32 = u32::MAX / MINUTES_PER_DAY;

fn default_day_start() -> NaiveTime {
    DayClock::default().day_start()
}

/// Simulation engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Requests below this are raised to it
    pub min_days: u32,
    /// Requests above this are lowered to it
    pub max_days: u32,
    /// Day count for callers that do not choose
    pub default_days: u32,
    /// Time of day that client activity is stamped with
    pub day_start: NaiveTime,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_days: MIN_DAYS,
            max_days: MAX_DAYS,
            default_days: DEFAULT_DAYS,
            day_start: default_day_start(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: EngineConfig = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| JourneyError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Check that the bounds are usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_days == 0 {
            return Err(JourneyError::invalid_config("min_days must be at least 1"));
        }
        if self.min_days > self.max_days {
            return Err(JourneyError::invalid_config(format!(
                "min_days ({}) exceeds max_days ({})",
                self.min_days, self.max_days
            )));
        }
        if self.max_days > MAX_SUPPORTED_DAYS {
            return Err(JourneyError::invalid_config(format!(
                "max_days ({}) exceeds the supported limit of {MAX_SUPPORTED_DAYS}",
                self.max_days
            )));
        }
        if !(self.min_days..=self.max_days).contains(&self.default_days) {
            return Err(JourneyError::invalid_config(format!(
                "default_days ({}) is outside [{}, {}]",
                self.default_days, self.min_days, self.max_days
            )));
        }
        Ok(())
    }

    /// Clamp a requested day count into the configured bounds.
    pub fn clamp_days(&self, requested: u32) -> u32 {
        requested.max(self.min_days).min(self.max_days)
    }

    /// Clock anchored at the configured start of day.
    pub fn clock(&self) -> DayClock {
        DayClock::new(self.day_start)
    }
}

/// Type-safe builder for engine configuration
pub struct EngineConfigBuilder {
    config: EngineConfig,
}

impl EngineConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    /// Set the accepted day-count range
    pub fn with_day_bounds(mut self, min_days: u32, max_days: u32) -> Self {
        self.config.min_days = min_days;
        self.config.max_days = max_days;
        self
    }

    /// Set the day count used when none is requested
    pub fn with_default_days(mut self, days: u32) -> Self {
        self.config.default_days = days;
        self
    }

    /// Set the start-of-day time for event labels
    pub fn with_day_start(mut self, day_start: NaiveTime) -> Self {
        self.config.day_start = day_start;
        self
    }

    /// Build the configuration with validation
    pub fn build(self) -> Result<EngineConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> EngineConfig {
        self.config
    }
}

impl Default for EngineConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
