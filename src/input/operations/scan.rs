// Gamepad scanning (I/O: evdev enumeration)

use evdev::AbsoluteAxisCode;
use tracing::{debug, info, warn};

use crate::input::operations::device::Gamepad;
use crate::input::pure::classify::{calculate_stick_calibration, is_gamepad};

// Signed 16-bit range with a 25% deadzone
const DEFAULT_STICK_CALIBRATION: (i32, i32) = (0, 8000);

/// Enumerate evdev nodes and open every gamepad non-blocking
pub fn scan_gamepads() -> Vec<Gamepad> {
    let mut pads: Vec<Gamepad> = Vec::new();
    for (path, dev) in evdev::enumerate() {
        if !is_gamepad(dev.supported_keys()) {
            continue;
        }
        let Some(path_str) = path.to_str().map(str::to_string) else {
            continue;
        };
        if let Err(e) = dev.set_nonblocking(true) {
            warn!("Failed to set non-blocking mode for {}: {}", path_str, e);
            continue;
        }

        let (center, threshold) = dev
            .get_abs_state()
            .ok()
            .and_then(|abs| {
                abs.get(AbsoluteAxisCode::ABS_X.0 as usize)
                    .map(|x| calculate_stick_calibration(x.minimum, x.maximum))
            })
            .unwrap_or(DEFAULT_STICK_CALIBRATION);
        debug!(
            "{} stick center={}, threshold={}",
            path_str, center, threshold
        );

        let pad = Gamepad::new(path_str, dev, center, threshold);
        info!("Gamepad found: {} ({})", pad.name(), pad.path());
        pads.push(pad);
    }
    pads.sort_by(|a, b| a.path().cmp(b.path()));
    pads
}
