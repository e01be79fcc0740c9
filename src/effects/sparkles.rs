// Background sparkle particles

use std::time::{Duration, Instant};

use rand::Rng;

use crate::effects::interval::Interval;

pub const SPARKLE_LIFETIME: Duration = Duration::from_secs(2);
const SPAWN_PERIOD: Duration = Duration::from_secs(2);
const INITIAL_SPARKLES: u32 = 5;
const INITIAL_STAGGER: Duration = Duration::from_millis(200);
// Catch-up cap after the window was hidden for a while
const MAX_SPAWN_PER_TICK: u32 = 3;

/// A sparkle at a normalized (0..1) screen position
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkle {
    pub x: f32,
    pub y: f32,
    pub born: Instant,
}

/// Scale/opacity of a sparkle: rises to 1 at half-life, back to 0 at the end.
///
/// Returns `None` once the sparkle has expired.
pub fn sparkle_intensity(age: Duration) -> Option<f32> {
    if age >= SPARKLE_LIFETIME {
        return None;
    }
    let t = age.as_secs_f32() / SPARKLE_LIFETIME.as_secs_f32();
    Some(1.0 - (2.0 * t - 1.0).abs())
}

pub struct Sparkles {
    sparkles: Vec<Sparkle>,
    spawn: Interval,
    initial: Vec<Instant>,
}

impl Sparkles {
    pub fn new(now: Instant) -> Self {
        let initial = (0..INITIAL_SPARKLES)
            .map(|i| now + INITIAL_STAGGER * i)
            .collect();
        Self {
            sparkles: Vec::new(),
            spawn: Interval::new(SPAWN_PERIOD, now),
            initial,
        }
    }

    pub fn tick(&mut self, now: Instant, rng: &mut impl Rng) {
        let (ready, pending): (Vec<Instant>, Vec<Instant>) = std::mem::take(&mut self.initial)
            .into_iter()
            .partition(|at| *at <= now);
        self.initial = pending;

        let periodic = self.spawn.due(now).min(MAX_SPAWN_PER_TICK);
        for _ in 0..ready.len() as u32 + periodic {
            self.sparkles.push(Sparkle {
                x: rng.random::<f32>(),
                y: rng.random::<f32>(),
                born: now,
            });
        }

        self.sparkles
            .retain(|s| now.saturating_duration_since(s.born) < SPARKLE_LIFETIME);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sparkle> {
        self.sparkles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_intensity_curve() {
        assert_eq!(sparkle_intensity(Duration::ZERO), Some(0.0));
        assert_eq!(sparkle_intensity(Duration::from_secs(1)), Some(1.0));
        let late = sparkle_intensity(Duration::from_millis(1500)).unwrap();
        assert!((late - 0.5).abs() < 1e-6);
        assert_eq!(sparkle_intensity(SPARKLE_LIFETIME), None);
    }

    #[test]
    fn test_initial_burst_is_staggered() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sparkles = Sparkles::new(start);

        sparkles.tick(start, &mut rng);
        assert_eq!(sparkles.iter().count(), 1);

        sparkles.tick(start + Duration::from_millis(850), &mut rng);
        assert_eq!(sparkles.iter().count(), 5);
    }

    #[test]
    fn test_periodic_spawn_and_expiry() {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(7);
        let mut sparkles = Sparkles::new(start);
        sparkles.tick(start + Duration::from_millis(800), &mut rng);

        // Initial sparkles expire, one periodic sparkle spawns
        sparkles.tick(start + Duration::from_millis(2800), &mut rng);
        assert_eq!(sparkles.iter().count(), 1);

        for s in sparkles.iter() {
            assert!((0.0..1.0).contains(&s.x));
            assert!((0.0..1.0).contains(&s.y));
        }

        sparkles.tick(start + Duration::from_millis(4900), &mut rng);
        assert_eq!(sparkles.iter().count(), 1);
    }
}
