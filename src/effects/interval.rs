// Frame-polled fixed-period timer

use std::time::{Duration, Instant};

/// Counts whole periods elapsed since it last fired
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    last: Instant,
}

impl Interval {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last: start,
        }
    }

    /// Number of periods that elapsed up to `now`; consumes them
    pub fn due(&mut self, now: Instant) -> u32 {
        if self.period.is_zero() {
            return 0;
        }
        let elapsed = now.saturating_duration_since(self.last);
        let count = (elapsed.as_nanos() / self.period.as_nanos()).min(u32::MAX as u128) as u32;
        self.last += self.period * count;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_elapsed_periods() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_millis(50), start);

        assert_eq!(interval.due(start + Duration::from_millis(49)), 0);
        assert_eq!(interval.due(start + Duration::from_millis(50)), 1);
        assert_eq!(interval.due(start + Duration::from_millis(99)), 0);
        assert_eq!(interval.due(start + Duration::from_millis(260)), 4);
        assert_eq!(interval.due(start + Duration::from_millis(299)), 0);
        assert_eq!(interval.due(start + Duration::from_millis(300)), 1);
    }

    #[test]
    fn test_zero_period_never_fires() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::ZERO, start);
        assert_eq!(interval.due(start + Duration::from_secs(1)), 0);
    }
}
