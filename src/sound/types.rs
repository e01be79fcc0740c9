//! Sound module type definitions

use std::fmt;
use thiserror::Error;

/// Named short tone played on UI events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Hover,
    Select,
    TabSwitch,
    Action,
    Navigate,
    Back,
}

impl Cue {
    #[cfg(test)]
    pub const ALL: [Cue; 6] = [
        Cue::Hover,
        Cue::Select,
        Cue::TabSwitch,
        Cue::Action,
        Cue::Navigate,
        Cue::Back,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Cue::Hover => "hover",
            Cue::Select => "select",
            Cue::TabSwitch => "tabSwitch",
            Cue::Action => "action",
            Cue::Navigate => "navigate",
            Cue::Back => "back",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Fixed tone parameters for a cue
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CuePreset {
    /// Frequency schedule as (offset in seconds, Hz); first step starts at 0
    pub steps: &'static [(f32, f32)],
    /// Tone length in seconds
    pub duration: f32,
    /// Starting gain; decays exponentially to `GAIN_FLOOR` over the duration
    pub gain: f32,
}

/// Gain reached at the end of every cue
pub const GAIN_FLOOR: f32 = 0.01;

#[derive(Error, Debug)]
pub enum SoundError {
    #[error("SDL initialisation failed: {0}")]
    Init(String),

    #[error("Failed to open audio queue: {0}")]
    Open(String),
}
