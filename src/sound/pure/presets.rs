// Cue tone presets

use crate::sound::types::{Cue, CuePreset};

/// Tone parameters for each cue
pub fn preset(cue: Cue) -> CuePreset {
    match cue {
        Cue::Hover => CuePreset {
            steps: &[(0.0, 800.0)],
            duration: 0.1,
            gain: 0.1,
        },
        Cue::Select => CuePreset {
            steps: &[(0.0, 1000.0)],
            duration: 0.2,
            gain: 0.2,
        },
        // Two-note rise
        Cue::TabSwitch => CuePreset {
            steps: &[(0.0, 600.0), (0.1, 800.0)],
            duration: 0.2,
            gain: 0.15,
        },
        Cue::Action => CuePreset {
            steps: &[(0.0, 1200.0)],
            duration: 0.3,
            gain: 0.25,
        },
        Cue::Navigate => CuePreset {
            steps: &[(0.0, 400.0)],
            duration: 0.1,
            gain: 0.1,
        },
        Cue::Back => CuePreset {
            steps: &[(0.0, 300.0)],
            duration: 0.2,
            gain: 0.2,
        },
    }
}
