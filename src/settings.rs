//! Host settings and preferences
//!
//! Only the host reads these; the simulation has no tunables. Gameplay
//! constants live in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::FRAME_RATE;
use crate::platform::KeyBindings;

/// Errors loading settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    /// The JSON could not be parsed into [`Settings`].
    #[error("Parsing failed : {0}")]
    Parse(#[from] serde_json::Error),

    /// The frame rate is outside 1..=1000.
    #[error("Frame rate {0} is out of range (1..=1000)")]
    FrameRate(u32),

    /// The demo length is above [`Settings::MAX_DEMO_FRAMES`].
    #[error("Demo length of {0} frames is above the limit of {max}", max = Settings::MAX_DEMO_FRAMES)]
    DemoFrames(u64),
}

/// Host preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed frame cadence (frames per second). One frame is one tick.
    pub frame_rate: u32,
    /// Key bindings for both players and quit
    pub bindings: KeyBindings,

    // === Headless demo ===
    /// Seed for the demo keyboard
    pub demo_seed: u64,
    /// Frames to run before stopping
    pub demo_frames: u64,
    /// Sleep between frames to hold the cadence (otherwise run flat out)
    pub paced: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            bindings: KeyBindings::default(),
            demo_seed: 1,
            demo_frames: 3600,
            paced: false,
        }
    }
}

impl Settings {
    /// Environment variable holding a settings JSON document
    pub const ENV_VAR: &'static str = "PONG_DUEL_SETTINGS";

    /// Longest demo run: one day at 1000 Hz
    pub const MAX_DEMO_FRAMES: u64 = 1000 * 60 * 60 * 24;

    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(1..=1000).contains(&self.frame_rate) {
            return Err(SettingsError::FrameRate(self.frame_rate));
        }
        if self.demo_frames > Self::MAX_DEMO_FRAMES {
            return Err(SettingsError::DemoFrames(self.demo_frames));
        }
        Ok(())
    }

    /// Time budget of one frame
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.frame_rate.max(1)))
    }

    /// Load settings from the environment, falling back to defaults
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => Self::load_from(&json),
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    fn load_from(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", Self::ENV_VAR);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {e}. Using default settings", Self::ENV_VAR);
                Self::default()
            }
        }
    }
}
