// Gamepad device and poll implementation (I/O: calls fetch_events)

use std::time::Instant;

use evdev::{AbsoluteAxisCode, Device, EventSummary};

use crate::input::pure::classify::{map_hat, map_key, stick_direction};
use crate::input::pure::stick::StickRepeat;
use crate::input::types::{PadButton, PollResult};

const MAX_EVENTS_PER_POLL: usize = 256;

pub struct Gamepad {
    path: String,
    name: String,
    dev: Device,
    enabled: bool,
    // Last reported left stick position, persisted between polls
    stick_x: i32,
    stick_y: i32,
    stick_center: i32,
    stick_threshold: i32,
    stick: StickRepeat,
}

impl Gamepad {
    pub fn new(path: String, dev: Device, stick_center: i32, stick_threshold: i32) -> Self {
        let name = dev.name().unwrap_or("Gamepad").to_string();
        Self {
            path,
            name,
            dev,
            enabled: true,
            stick_x: stick_center,
            stick_y: stick_center,
            stick_center,
            stick_threshold,
            stick: StickRepeat::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn poll(&mut self) -> PollResult {
        if !self.enabled {
            return PollResult::None;
        }
        if !std::path::Path::new(&self.path).exists() {
            self.enabled = false;
            return PollResult::DeviceDisabled(format!("device node gone: {}", self.path));
        }

        let mut btn: Option<PadButton> = None;

        match self.dev.fetch_events() {
            Ok(events) => {
                for (count, event) in events.enumerate() {
                    if count >= MAX_EVENTS_PER_POLL {
                        self.enabled = false;
                        return PollResult::DeviceDisabled(format!(
                            "exceeded max events for {}",
                            self.path
                        ));
                    }

                    let pressed = match event.destructure() {
                        EventSummary::Key(_, code, value) => map_key(code, value),
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_X, val) => {
                            self.stick_x = val;
                            None
                        }
                        EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_Y, val) => {
                            self.stick_y = val;
                            None
                        }
                        EventSummary::AbsoluteAxis(_, axis, value) => map_hat(axis, value),
                        _ => None,
                    };
                    // Keep the first press of the batch
                    btn = btn.or(pressed);
                }
            }
            Err(e) if e.raw_os_error() == Some(libc::ENODEV) => {
                self.enabled = false;
                return PollResult::DeviceDisabled(format!("device disconnected: {}", self.path));
            }
            // EAGAIN: nothing queued
            Err(_) => {}
        }

        if let Some(b) = btn {
            return PollResult::Button(b);
        }

        let dir = stick_direction(
            self.stick_x,
            self.stick_y,
            self.stick_center,
            self.stick_threshold,
        );
        match self.stick.update(dir, Instant::now()) {
            Some(b) => PollResult::Button(b),
            None => PollResult::None,
        }
    }
}
