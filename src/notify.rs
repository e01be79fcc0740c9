//! Transient notification banners
//!
//! Each toast slides in, stays for the configured duration, then slides out
//! and is pruned. Timing is driven by the frame loop passing `now`.

use std::time::{Duration, Instant};

use tracing::info;

use crate::nav::Notifier;

/// Slide-in and slide-out length
pub const SLIDE: Duration = Duration::from_millis(300);

/// Vertical travel during a slide, as a fraction of the screen height
const SLIDE_TRAVEL: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

/// How a toast should be drawn at a given instant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastPhase {
    pub opacity: f32,
    /// Offset from the resting position (negative = above)
    pub offset: f32,
}

pub struct Toasts {
    toasts: Vec<Toast>,
    visible_for: Duration,
}

impl Toasts {
    pub fn new(visible_for: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            visible_for,
        }
    }

    pub fn push_at(&mut self, message: String, at: Instant) {
        self.toasts.push(Toast {
            message,
            shown_at: at,
        });
    }

    /// Drop toasts whose slide-out has finished
    pub fn prune(&mut self, now: Instant) {
        let lifetime = self.visible_for + SLIDE;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.shown_at) < lifetime);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Opacity/offset for `toast` at `now`, or `None` once it has expired
    pub fn phase(&self, toast: &Toast, now: Instant) -> Option<ToastPhase> {
        let age = now.saturating_duration_since(toast.shown_at);
        let slide = SLIDE.as_secs_f32();

        if age < SLIDE {
            let t = age.as_secs_f32() / slide;
            Some(ToastPhase {
                opacity: t,
                offset: -SLIDE_TRAVEL * (1.0 - t),
            })
        } else if age < self.visible_for {
            Some(ToastPhase {
                opacity: 1.0,
                offset: 0.0,
            })
        } else if age < self.visible_for + SLIDE {
            let t = (age - self.visible_for).as_secs_f32() / slide;
            Some(ToastPhase {
                opacity: 1.0 - t,
                offset: SLIDE_TRAVEL * t,
            })
        } else {
            None
        }
    }
}

impl Notifier for Toasts {
    fn show(&mut self, message: String) {
        info!("Notification: {}", message);
        self.push_at(message, Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_toast_lifecycle() {
        let start = Instant::now();
        let mut toasts = Toasts::new(ms(3000));
        toasts.push_at("Copying Halo...".to_string(), start);

        let toast = toasts.iter().next().unwrap().clone();

        let entering = toasts.phase(&toast, start + ms(150)).unwrap();
        assert!((entering.opacity - 0.5).abs() < 1e-3);
        assert!(entering.offset < 0.0);

        let resting = toasts.phase(&toast, start + ms(1500)).unwrap();
        assert_eq!(resting, ToastPhase { opacity: 1.0, offset: 0.0 });

        let leaving = toasts.phase(&toast, start + ms(3150)).unwrap();
        assert!((leaving.opacity - 0.5).abs() < 1e-3);
        assert!(leaving.offset > 0.0);

        assert!(toasts.phase(&toast, start + ms(3300)).is_none());
    }

    #[test]
    fn test_prune_removes_expired_only() {
        let start = Instant::now();
        let mut toasts = Toasts::new(ms(3000));
        toasts.push_at("first".to_string(), start);
        toasts.push_at("second".to_string(), start + ms(2000));

        toasts.prune(start + ms(3299));
        assert_eq!(toasts.iter().count(), 2);

        toasts.prune(start + ms(3300));
        let left: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["second"]);

        toasts.prune(start + ms(5300));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_show_records_message() {
        let mut toasts = Toasts::new(ms(3000));
        toasts.show("Starting item...".to_string());
        assert_eq!(toasts.iter().next().map(|t| t.message.as_str()), Some("Starting item..."));
    }
}
