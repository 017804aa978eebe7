//! Game settings and preferences
//!
//! Loaded from JSON. Gameplay constants are fixed in `consts`; settings only
//! cover presentation and the headless demo run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SHRINK_DURATION_MS, TRAIL_FADE_ALPHA};
use crate::error::SettingsError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed (random per session when unset)
    pub seed: Option<u64>,

    // === Visual Effects ===
    /// Explosion particles on hits
    pub particles: bool,
    /// Motion trails (translucent clear instead of a full wipe)
    pub trails: bool,

    // === Accessibility ===
    /// Reduced motion (enemies shrink instantly instead of animating)
    pub reduced_motion: bool,

    // === Headless demo ===
    /// Canvas size used when there is no browser window
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Maximum frames to simulate
    pub demo_frames: u32,
    /// Autopilot fires once every this many frames
    pub demo_fire_interval: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,

            // Visual effects - all on by default
            particles: true,
            trails: true,

            // Accessibility
            reduced_motion: false,

            // Headless demo: one minute at 60 fps
            canvas_width: 1280.0,
            canvas_height: 720.0,
            demo_frames: 60 * 60,
            demo_fire_interval: 12,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for (field, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be a positive number, got {value}"),
                });
            }
        }
        if self.demo_fire_interval == 0 {
            return Err(SettingsError::Invalid {
                field: "demo_fire_interval",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Alpha of the black overlay drawn at the start of each frame
    pub fn overlay_alpha(&self) -> f64 {
        if self.trails { TRAIL_FADE_ALPHA } else { 1.0 }
    }

    /// Duration of the enemy shrink animation (respects reduced_motion)
    pub fn shrink_duration_ms(&self) -> f64 {
        if self.reduced_motion {
            0.0
        } else {
            SHRINK_DURATION_MS
        }
    }
}
