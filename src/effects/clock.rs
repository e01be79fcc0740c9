// Top bar clock, refreshed once per second

use std::time::{Duration, Instant};

use chrono::{Local, NaiveTime};

use crate::effects::interval::Interval;

const REFRESH: Duration = Duration::from_secs(1);

/// `1:05 PM` style, or `13:05` when `h24` is set
pub fn format_clock(time: NaiveTime, h24: bool) -> String {
    if h24 {
        time.format("%H:%M").to_string()
    } else {
        time.format("%-I:%M %p").to_string()
    }
}

pub struct Clock {
    text: String,
    h24: bool,
    refresh: Interval,
}

impl Clock {
    pub fn new(h24: bool, now: Instant) -> Self {
        Self {
            text: format_clock(Local::now().time(), h24),
            h24,
            refresh: Interval::new(REFRESH, now),
        }
    }

    pub fn tick(&mut self, now: Instant) {
        if self.refresh.due(now) > 0 {
            self.text = format_clock(Local::now().time(), self.h24);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_twelve_hour_format() {
        assert_eq!(format_clock(at(13, 5), false), "1:05 PM");
        assert_eq!(format_clock(at(0, 30), false), "12:30 AM");
        assert_eq!(format_clock(at(9, 0), false), "9:00 AM");
    }

    #[test]
    fn test_twenty_four_hour_format() {
        assert_eq!(format_clock(at(13, 5), true), "13:05");
        assert_eq!(format_clock(at(7, 45), true), "07:45");
    }

    #[test]
    fn test_clock_has_text_immediately() {
        let clock = Clock::new(false, Instant::now());
        assert!(clock.text().ends_with("AM") || clock.text().ends_with("PM"));
    }
}
