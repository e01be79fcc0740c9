// Device classification and event mapping (pure functions)

use evdev::{AbsoluteAxisCode, AttributeSetRef, KeyCode};

use crate::input::types::{PadButton, StickDirection};

/// A device is treated as a gamepad when it exposes the south face button
pub fn is_gamepad(supported_keys: Option<&AttributeSetRef<KeyCode>>) -> bool {
    supported_keys.is_some_and(|keys| keys.contains(KeyCode::BTN_SOUTH))
}

/// Map a key press (value 1) to a pad button
pub fn map_key(code: KeyCode, value: i32) -> Option<PadButton> {
    if value != 1 {
        return None;
    }
    match code {
        KeyCode::BTN_SOUTH => Some(PadButton::ABtn),
        KeyCode::BTN_EAST => Some(PadButton::BBtn),
        KeyCode::BTN_START => Some(PadButton::StartBtn),
        KeyCode::BTN_SELECT => Some(PadButton::SelectBtn),
        KeyCode::BTN_TL => Some(PadButton::LB),
        KeyCode::BTN_TR => Some(PadButton::RB),
        // Pads that report the d-pad as buttons instead of a hat
        KeyCode::BTN_DPAD_UP => Some(PadButton::Up),
        KeyCode::BTN_DPAD_DOWN => Some(PadButton::Down),
        KeyCode::BTN_DPAD_LEFT => Some(PadButton::Left),
        KeyCode::BTN_DPAD_RIGHT => Some(PadButton::Right),
        _ => None,
    }
}

/// Map a d-pad hat axis event to a pad button
pub fn map_hat(axis: AbsoluteAxisCode, value: i32) -> Option<PadButton> {
    match (axis, value) {
        (AbsoluteAxisCode::ABS_HAT0X, -1) => Some(PadButton::Left),
        (AbsoluteAxisCode::ABS_HAT0X, 1) => Some(PadButton::Right),
        (AbsoluteAxisCode::ABS_HAT0Y, -1) => Some(PadButton::Up),
        (AbsoluteAxisCode::ABS_HAT0Y, 1) => Some(PadButton::Down),
        _ => None,
    }
}

/// Calculate stick center and threshold from axis min/max values
/// Returns (center, threshold) where threshold is 25% of range
pub fn calculate_stick_calibration(min: i32, max: i32) -> (i32, i32) {
    let center = (min + max) / 2;
    let range = max - min;
    let threshold = range / 4; // 25% deadzone
    (center, threshold)
}

/// Direction the left stick is pushed past the deadzone, vertical first
pub fn stick_direction(x: i32, y: i32, center: i32, threshold: i32) -> Option<StickDirection> {
    if y < center - threshold {
        Some(StickDirection::Up)
    } else if y > center + threshold {
        Some(StickDirection::Down)
    } else if x < center - threshold {
        Some(StickDirection::Left)
    } else if x > center + threshold {
        Some(StickDirection::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_none_is_not_gamepad() {
        assert!(!is_gamepad(None));
    }

    #[test]
    fn face_and_shoulder_presses() {
        assert_eq!(map_key(KeyCode::BTN_SOUTH, 1), Some(PadButton::ABtn));
        assert_eq!(map_key(KeyCode::BTN_EAST, 1), Some(PadButton::BBtn));
        assert_eq!(map_key(KeyCode::BTN_TL, 1), Some(PadButton::LB));
        assert_eq!(map_key(KeyCode::BTN_TR, 1), Some(PadButton::RB));
        assert_eq!(map_key(KeyCode::BTN_DPAD_LEFT, 1), Some(PadButton::Left));
    }

    #[test]
    fn releases_and_repeats_are_ignored() {
        assert_eq!(map_key(KeyCode::BTN_SOUTH, 0), None);
        assert_eq!(map_key(KeyCode::BTN_SOUTH, 2), None);
        assert_eq!(map_key(KeyCode::KEY_A, 1), None);
    }

    #[test]
    fn hat_directions() {
        assert_eq!(map_hat(AbsoluteAxisCode::ABS_HAT0X, -1), Some(PadButton::Left));
        assert_eq!(map_hat(AbsoluteAxisCode::ABS_HAT0X, 1), Some(PadButton::Right));
        assert_eq!(map_hat(AbsoluteAxisCode::ABS_HAT0Y, -1), Some(PadButton::Up));
        assert_eq!(map_hat(AbsoluteAxisCode::ABS_HAT0Y, 1), Some(PadButton::Down));
        assert_eq!(map_hat(AbsoluteAxisCode::ABS_HAT0X, 0), None);
        assert_eq!(map_hat(AbsoluteAxisCode::ABS_X, 1), None);
    }

    #[test]
    fn calibration_signed_16_bit() {
        assert_eq!(calculate_stick_calibration(-32768, 32767), (0, 16383));
    }

    #[test]
    fn calibration_unsigned_8_bit() {
        assert_eq!(calculate_stick_calibration(0, 255), (127, 63));
    }

    #[test]
    fn stick_deadzone() {
        assert_eq!(stick_direction(0, 0, 0, 8000), None);
        assert_eq!(stick_direction(7999, -7999, 0, 8000), None);
        assert_eq!(stick_direction(-9000, 0, 0, 8000), Some(StickDirection::Left));
        assert_eq!(stick_direction(9000, 0, 0, 8000), Some(StickDirection::Right));
        // Vertical wins on diagonals
        assert_eq!(stick_direction(9000, 9000, 0, 8000), Some(StickDirection::Down));
    }
}
