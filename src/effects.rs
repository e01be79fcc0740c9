//! Cosmetic, independently scheduled effects
//!
//! None of these read or write navigation state. Each owns its own timer and
//! is advanced once per frame with the current instant.

mod backdrop;
mod clock;
mod interval;
mod sparkles;

use std::time::Instant;

pub use backdrop::{pulse, Backdrop};
pub use clock::Clock;
pub use sparkles::{sparkle_intensity, Sparkles};

pub struct Effects {
    pub clock: Clock,
    /// `None` when decorative effects are disabled
    pub sparkles: Option<Sparkles>,
    pub backdrop: Option<Backdrop>,
    started: Instant,
}

impl Effects {
    pub fn new(decorations: bool, clock_24h: bool, now: Instant) -> Self {
        Self {
            clock: Clock::new(clock_24h, now),
            sparkles: decorations.then(|| Sparkles::new(now)),
            backdrop: decorations.then(|| Backdrop::new(now)),
            started: now,
        }
    }

    pub fn tick(&mut self, now: Instant) {
        self.clock.tick(now);
        if let Some(sparkles) = &mut self.sparkles {
            sparkles.tick(now, &mut rand::rng());
        }
        if let Some(backdrop) = &mut self.backdrop {
            backdrop.tick(now);
        }
    }

    /// Current glow strength, steady when decorations are off
    pub fn glow(&self, now: Instant) -> f32 {
        if self.backdrop.is_none() {
            return 1.0;
        }
        pulse(now.saturating_duration_since(self.started).as_secs_f32())
    }
}
