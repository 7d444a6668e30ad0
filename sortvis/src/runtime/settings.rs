use serde::{Deserialize, Serialize};

use crate::model::ValueRange;
use crate::model::dataset::{DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE};
use crate::render::DEFAULT_PITCH;

pub const SETTINGS_VERSION: &str = "1";

/// Speeds offered by shells, before [`Settings::speed_multiplier`]
pub const SPEEDS: [f32; 6] = [0.25, 0.5, 1.0, 2.0, 4.0, 10.0];

/// Bar counts offered by shells
pub const BAR_COUNTS: [usize; 5] = [10, 20, 30, 50, 100];

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    pub version: String,
    pub algorithm: String,
    pub count: usize,
    pub speed: f32,
    pub speed_multiplier: f32,
    pub min_value: u32,
    pub max_value: u32,
    pub bar_pitch: f32,
    pub fps: f32,
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: SETTINGS_VERSION.to_string(),
            algorithm: "insertion".to_string(),
            count: 20,
            speed: 10.0,
            speed_multiplier: 15.0,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            bar_pitch: DEFAULT_PITCH,
            fps: 60.0,
            seed: None,
        }
    }
}

impl Settings {
    /// The factor the animation clock divides delays by
    pub fn effective_speed(&self) -> f32 {
        self.speed * self.speed_multiplier
    }

    pub fn value_range(&self) -> ValueRange {
        ValueRange::new(self.min_value, self.max_value)
    }

    /// Next or previous entry of [`SPEEDS`] relative to the current speed
    pub fn step_speed(&self, faster: bool) -> f32 {
        let current = self.speed;
        let next = if faster {
            SPEEDS.iter().find(|&&s| s > current)
        } else {
            SPEEDS.iter().rev().find(|&&s| s < current)
        };
        next.copied().unwrap_or(current)
    }

    /// Next or previous entry of [`BAR_COUNTS`] relative to the current count
    pub fn step_count(&self, more: bool) -> usize {
        let current = self.count;
        let next = if more {
            BAR_COUNTS.iter().find(|&&n| n > current)
        } else {
            BAR_COUNTS.iter().rev().find(|&&n| n < current)
        };
        next.copied().unwrap_or(current)
    }
}
