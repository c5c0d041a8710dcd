//! Live-adjustable game balance
//!
//! Three parameters the player can nudge from the keyboard mid-run, each
//! independently clamped and restorable to its documented default. Persisted
//! as a small JSON file next to the binary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::consts::SCREEN_HEIGHT;

/// Defaults: the values the reset key restores
pub const DEFAULT_SCROLL_SPEED: f32 = 5.0;
pub const DEFAULT_CORRIDOR_HEIGHT: f32 = 200.0;
pub const DEFAULT_TILT_ANGLE_MAX: f32 = 45.0;

/// Adjustment steps per key press
const SCROLL_STEP: f32 = 1.0;
const CORRIDOR_STEP: f32 = 10.0;
const TILT_STEP: f32 = 5.0;

/// Clamp ranges
const SCROLL_MIN: f32 = 1.0;
const CORRIDOR_MIN: f32 = 50.0;
const CORRIDOR_MAX: f32 = SCREEN_HEIGHT - 50.0;
const TILT_MIN: f32 = 15.0;
const TILT_MAX: f32 = 75.0;

/// Live tuning parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuningState {
    /// Terrain scroll in pixels per tick (min 1, no max)
    pub scroll_speed: f32,
    /// Target corridor height, feeds the ceiling sampling range
    pub corridor_height: f32,
    /// Sprite tilt magnitude in degrees
    pub tilt_angle_max: f32,
}

impl Default for TuningState {
    fn default() -> Self {
        Self {
            scroll_speed: DEFAULT_SCROLL_SPEED,
            corridor_height: DEFAULT_CORRIDOR_HEIGHT,
            tilt_angle_max: DEFAULT_TILT_ANGLE_MAX,
        }
    }
}

impl TuningState {
    pub fn speed_up(&mut self) {
        self.scroll_speed += SCROLL_STEP;
    }

    pub fn speed_down(&mut self) {
        self.scroll_speed = (self.scroll_speed - SCROLL_STEP).max(SCROLL_MIN);
    }

    pub fn widen_corridor(&mut self) {
        self.corridor_height = (self.corridor_height + CORRIDOR_STEP).min(CORRIDOR_MAX);
    }

    pub fn narrow_corridor(&mut self) {
        self.corridor_height = (self.corridor_height - CORRIDOR_STEP).max(CORRIDOR_MIN);
    }

    pub fn tilt_up(&mut self) {
        self.tilt_angle_max = (self.tilt_angle_max + TILT_STEP).min(TILT_MAX);
    }

    pub fn tilt_down(&mut self) {
        self.tilt_angle_max = (self.tilt_angle_max - TILT_STEP).max(TILT_MIN);
    }

    /// Restore all three parameters to their defaults
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-apply the clamps (for values read from disk)
    fn clamped(mut self) -> Self {
        self.scroll_speed = self.scroll_speed.max(SCROLL_MIN);
        self.corridor_height = self.corridor_height.clamp(CORRIDOR_MIN, CORRIDOR_MAX);
        self.tilt_angle_max = self.tilt_angle_max.clamp(TILT_MIN, TILT_MAX);
        self
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning.clamped()
                }
                Err(e) => {
                    log::warn!("Ignoring corrupt tuning file {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Save to a JSON file (best effort)
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(path, json) {
                    log::warn!("Failed to save tuning to {}: {}", path.display(), e);
                } else {
                    log::info!("Tuning saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize tuning: {}", e),
        }
    }
}
