// Stick hold-to-repeat state (pure: caller supplies the clock)

use std::time::{Duration, Instant};

use crate::input::types::{PadButton, StickDirection};

pub const INITIAL_DELAY: Duration = Duration::from_millis(300);
pub const REPEAT_RATE: Duration = Duration::from_millis(80);

#[derive(Debug, Default)]
pub struct StickRepeat {
    held: Option<(StickDirection, Instant)>,
    last_repeat: Option<Instant>,
}

impl StickRepeat {
    /// Feed the current stick direction. Emits once on push, then repeats while held.
    pub fn update(&mut self, dir: Option<StickDirection>, now: Instant) -> Option<PadButton> {
        match (dir, self.held) {
            (Some(dir), Some((held, since))) if dir == held => {
                let last = self.last_repeat.unwrap_or(since);
                if now.duration_since(since) > INITIAL_DELAY
                    && now.duration_since(last) > REPEAT_RATE
                {
                    self.last_repeat = Some(now);
                    Some(dir.to_button())
                } else {
                    None
                }
            }
            (Some(dir), _) => {
                self.held = Some((dir, now));
                self.last_repeat = Some(now);
                Some(dir.to_button())
            }
            (None, _) => {
                self.held = None;
                self.last_repeat = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_emits_once_then_waits() {
        let t0 = Instant::now();
        let mut stick = StickRepeat::default();
        assert_eq!(stick.update(Some(StickDirection::Right), t0), Some(PadButton::Right));
        assert_eq!(stick.update(Some(StickDirection::Right), t0 + Duration::from_millis(100)), None);
        assert_eq!(stick.update(Some(StickDirection::Right), t0 + Duration::from_millis(290)), None);
    }

    #[test]
    fn hold_repeats_after_delay() {
        let t0 = Instant::now();
        let mut stick = StickRepeat::default();
        stick.update(Some(StickDirection::Down), t0);
        let t1 = t0 + Duration::from_millis(350);
        assert_eq!(stick.update(Some(StickDirection::Down), t1), Some(PadButton::Down));
        assert_eq!(stick.update(Some(StickDirection::Down), t1 + Duration::from_millis(50)), None);
        assert_eq!(
            stick.update(Some(StickDirection::Down), t1 + Duration::from_millis(90)),
            Some(PadButton::Down)
        );
    }

    #[test]
    fn release_and_direction_change_reset() {
        let t0 = Instant::now();
        let mut stick = StickRepeat::default();
        stick.update(Some(StickDirection::Left), t0);
        assert_eq!(stick.update(None, t0 + Duration::from_millis(10)), None);
        assert_eq!(
            stick.update(Some(StickDirection::Left), t0 + Duration::from_millis(20)),
            Some(PadButton::Left)
        );
        assert_eq!(
            stick.update(Some(StickDirection::Up), t0 + Duration::from_millis(30)),
            Some(PadButton::Up)
        );
    }
}
