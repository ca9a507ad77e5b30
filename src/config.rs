//! Presentation and scheduling settings for trace replay.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Shaft geometry and frame pacing.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use liftstate::config::ReplayConfig;
///
/// let config = ReplayConfig::from_json_str(r#"{ "floors": 9 }"#).unwrap();
/// assert_eq!(config.floors, 9);
/// assert_eq!(config.floor_height_px, 90.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Number of floors drawn in the shaft. Floors are numbered from 1.
    pub floors: u32,
    pub floor_height_px: f64,
    pub cabin_height_px: f64,
    pub cabin_width_px: f64,
    /// Target spacing between animation frames.
    pub frame_interval_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            floors: 5,
            floor_height_px: 90.0,
            cabin_height_px: 70.0,
            cabin_width_px: 70.0,
            frame_interval_ms: 16,
        }
    }
}

impl ReplayConfig {
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    /// Total drawn shaft height.
    pub fn shaft_height_px(&self) -> f64 {
        f64::from(self.floors) * self.floor_height_px
    }

    pub fn with_floors(mut self, floors: u32) -> Self {
        self.floors = floors;
        self
    }
}
