//! Controls Configuration

use std::time::Duration;

use serde::Deserialize;

use crate::ControlsError;

/// Keyboard shortcut keys
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Shortcuts {
    pub play: char,
    pub mute: char,
    pub fullscreen: char,
    pub pip: char,
}

impl Default for Shortcuts {
    fn default() -> Self {
        Self {
            play: 'k',
            mute: 'm',
            fullscreen: 'f',
            pip: 'p',
        }
    }
}

/// Controls configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Delay before the control bar hides after a keyboard play
    pub auto_hide_delay_ms: u64,

    /// Length of the play/pause pulse
    pub pulse_duration_ms: u64,

    pub shortcuts: Shortcuts,
}

impl ControlsConfig {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ControlsError> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }

    pub fn auto_hide_delay(&self) -> Duration {
        Duration::from_millis(self.auto_hide_delay_ms)
    }

    pub fn pulse_duration(&self) -> Duration {
        Duration::from_millis(self.pulse_duration_ms)
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            auto_hide_delay_ms: 2000,
            pulse_duration_ms: 500,
            shortcuts: Shortcuts::default(),
        }
    }
}
