use crate::nav::TabId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Dashboard settings, read from `settings.json` at startup
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DashConfig {
    /// Tab shown at startup
    pub start_tab: TabId,
    pub sound_enabled: bool,
    /// Cue volume, 0.0 to 1.0
    pub volume: f32,
    /// Sparkles, background drift and icon glow
    pub effects_enabled: bool,
    pub clock_24h: bool,
    /// How long a notification stays before sliding out
    pub notification_secs: f32,
    /// Poll evdev gamepads for navigation
    pub gamepad_enabled: bool,
    pub fullscreen: bool,
}

impl Default for DashConfig {
    fn default() -> Self {
        DashConfig {
            start_tab: TabId::Home,
            sound_enabled: true,
            volume: 1.0,
            effects_enabled: true,
            clock_24h: false,
            notification_secs: 3.0,
            gamepad_enabled: true,
            fullscreen: false,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Missing value for {0}")]
    MissingValue(&'static str),
}
