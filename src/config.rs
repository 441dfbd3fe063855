//! Application configuration
//!
//! Centralized configuration for the UI shell and the numeric entry policy.

use crate::ui::numeric::NumericFormat;
use crate::{FlowcaseError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window title
    pub window_title: String,

    /// Whether to use the dark theme
    pub dark_theme: bool,

    /// Capacity of the timeline event channel
    pub event_capacity: usize,

    /// Accepted range and precision for motion fields
    pub numeric: NumericFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Flowcase".to_string(),
            dark_theme: true,
            event_capacity: 64,
            numeric: NumericFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    pub fn with_light_theme(mut self) -> Self {
        self.dark_theme = false;
        self
    }

    pub fn with_numeric(mut self, numeric: NumericFormat) -> Self {
        self.numeric = numeric;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.window_title.trim().is_empty() {
            return Err(FlowcaseError::ConfigError(
                "window title is required".to_string(),
            ));
        }
        if self.event_capacity == 0 {
            return Err(FlowcaseError::ConfigError(
                "event capacity must be at least 1".to_string(),
            ));
        }
        if self.numeric.max <= self.numeric.min {
            return Err(FlowcaseError::ConfigError(format!(
                "numeric range is empty: [{}, {})",
                self.numeric.min, self.numeric.max
            )));
        }
        Ok(())
    }
}
