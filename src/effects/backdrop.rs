// Slow background drift and icon glow pulse

use std::f32::consts::PI;
use std::time::{Duration, Instant};

use crate::effects::interval::Interval;

const STEP: Duration = Duration::from_millis(50);
const PHASE_PER_STEP: f32 = 0.01;
/// One full dim → bright → dim cycle
const PULSE_PERIOD_SECS: f32 = 4.0;

/// Background anchor in percent of the screen, orbiting (50, 50) by ±10
pub fn backdrop_position(phase: f32) -> (f32, f32) {
    (50.0 + phase.sin() * 10.0, 50.0 + (phase * 0.7).cos() * 10.0)
}

/// Glow strength (0..=1) for the active/selected icon
pub fn pulse(elapsed_secs: f32) -> f32 {
    0.5 - 0.5 * (2.0 * PI * elapsed_secs / PULSE_PERIOD_SECS).cos()
}

pub struct Backdrop {
    phase: f32,
    step: Interval,
}

impl Backdrop {
    pub fn new(now: Instant) -> Self {
        Self {
            phase: 0.0,
            step: Interval::new(STEP, now),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.phase += PHASE_PER_STEP * self.step.due(now) as f32;
    }

    pub fn position(&self) -> (f32, f32) {
        backdrop_position(self.phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_starts_offset_vertically() {
        assert_eq!(backdrop_position(0.0), (50.0, 60.0));
    }

    #[test]
    fn test_position_stays_in_orbit() {
        for i in 0..1000 {
            let (x, y) = backdrop_position(i as f32 * 0.37);
            assert!((40.0..=60.0).contains(&x));
            assert!((40.0..=60.0).contains(&y));
        }
    }

    #[test]
    fn test_phase_advances_per_step() {
        let start = Instant::now();
        let mut backdrop = Backdrop::new(start);
        backdrop.tick(start + Duration::from_millis(520));
        assert!((backdrop.phase - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_pulse_alternates() {
        assert!(pulse(0.0).abs() < 1e-6);
        assert!((pulse(2.0) - 1.0).abs() < 1e-6);
        assert!(pulse(4.0).abs() < 1e-5);
    }
}
