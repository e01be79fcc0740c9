// Tone synthesis (pure functions)

use std::f32::consts::TAU;

use crate::sound::pure::presets::preset;
use crate::sound::types::{Cue, CuePreset, GAIN_FLOOR};

/// Frequency in effect at `t` seconds into the tone
pub fn frequency_at(preset: &CuePreset, t: f32) -> f32 {
    preset
        .steps
        .iter()
        .take_while(|(offset, _)| *offset <= t)
        .last()
        .or(preset.steps.first())
        .map(|(_, hz)| *hz)
        .unwrap_or(0.0)
}

/// Exponential gain ramp from `preset.gain` down to `GAIN_FLOOR`
pub fn envelope(preset: &CuePreset, t: f32) -> f32 {
    let progress = (t / preset.duration).clamp(0.0, 1.0);
    preset.gain * (GAIN_FLOOR / preset.gain).powf(progress)
}

/// Render a cue as mono f32 samples, scaled by `volume` (0..=1)
pub fn render_cue(cue: Cue, sample_rate: u32, volume: f32) -> Vec<f32> {
    let preset = preset(cue);
    let volume = volume.clamp(0.0, 1.0);
    let rate = sample_rate as f32;
    let len = (preset.duration * rate).round() as usize;

    let mut samples = Vec::with_capacity(len);
    let mut phase = 0.0f32;
    for n in 0..len {
        let t = n as f32 / rate;
        samples.push(phase.sin() * envelope(&preset, t) * volume);
        // Accumulate phase so frequency steps don't click
        phase = (phase + TAU * frequency_at(&preset, t) / rate) % TAU;
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATE: u32 = 44_100;

    #[test]
    fn test_length_matches_duration() {
        assert_eq!(render_cue(Cue::Hover, RATE, 1.0).len(), 4410);
        assert_eq!(render_cue(Cue::Action, RATE, 1.0).len(), 13230);
    }

    #[test]
    fn test_amplitude_bounded_by_gain_and_volume() {
        for cue in Cue::ALL {
            let gain = preset(cue).gain;
            let samples = render_cue(cue, RATE, 0.5);
            assert_eq!(samples[0], 0.0);
            assert!(samples.iter().all(|s| s.abs() <= gain * 0.5 + 1e-6));
        }
    }

    #[test]
    fn test_zero_volume_is_silent() {
        assert!(render_cue(Cue::Back, RATE, 0.0).iter().all(|s| *s == 0.0));
    }

    #[test]
    fn test_envelope_decays_to_floor() {
        let p = preset(Cue::Select);
        assert!((envelope(&p, 0.0) - 0.2).abs() < 1e-6);
        assert!((envelope(&p, p.duration) - GAIN_FLOOR).abs() < 1e-6);
        assert!(envelope(&p, 0.05) > envelope(&p, 0.1));
    }

    #[test]
    fn test_tab_switch_steps_up() {
        let p = preset(Cue::TabSwitch);
        assert_eq!(frequency_at(&p, 0.0), 600.0);
        assert_eq!(frequency_at(&p, 0.099), 600.0);
        assert_eq!(frequency_at(&p, 0.1), 800.0);
        assert_eq!(frequency_at(&p, 0.19), 800.0);
    }
}
