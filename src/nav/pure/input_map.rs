// Input mapping from keys and gamepad buttons to NavInput

use eframe::egui::Key;

use crate::input::PadButton;
use crate::nav::types::{NavDirection, NavInput};

/// Map a gamepad button to a navigation input
pub fn map_button_to_nav(button: PadButton) -> Option<NavInput> {
    match button {
        // D-pad → Directional navigation
        PadButton::Up => Some(NavInput::Direction(NavDirection::Up)),
        PadButton::Down => Some(NavInput::Direction(NavDirection::Down)),
        PadButton::Left => Some(NavInput::Direction(NavDirection::Left)),
        PadButton::Right => Some(NavInput::Direction(NavDirection::Right)),

        // Face buttons
        PadButton::ABtn => Some(NavInput::Accept),
        PadButton::BBtn => Some(NavInput::Back),

        // Shoulder buttons → Tab navigation
        PadButton::LB => Some(NavInput::TabPrev),
        PadButton::RB => Some(NavInput::TabNext),

        PadButton::StartBtn | PadButton::SelectBtn => None,
    }
}

/// Map a keyboard key to a navigation input
pub fn map_key_to_nav(key: Key) -> Option<NavInput> {
    match key {
        Key::ArrowUp => Some(NavInput::Direction(NavDirection::Up)),
        Key::ArrowDown => Some(NavInput::Direction(NavDirection::Down)),
        Key::ArrowLeft => Some(NavInput::Direction(NavDirection::Left)),
        Key::ArrowRight => Some(NavInput::Direction(NavDirection::Right)),
        Key::Enter | Key::Space => Some(NavInput::Accept),
        Key::Escape => Some(NavInput::Back),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dpad_mapping() {
        assert_eq!(
            map_button_to_nav(PadButton::Up),
            Some(NavInput::Direction(NavDirection::Up))
        );
        assert_eq!(
            map_button_to_nav(PadButton::Right),
            Some(NavInput::Direction(NavDirection::Right))
        );
    }

    #[test]
    fn test_face_and_shoulder_buttons() {
        assert_eq!(map_button_to_nav(PadButton::ABtn), Some(NavInput::Accept));
        assert_eq!(map_button_to_nav(PadButton::BBtn), Some(NavInput::Back));
        assert_eq!(map_button_to_nav(PadButton::LB), Some(NavInput::TabPrev));
        assert_eq!(map_button_to_nav(PadButton::RB), Some(NavInput::TabNext));
    }

    #[test]
    fn test_non_nav_buttons() {
        assert_eq!(map_button_to_nav(PadButton::StartBtn), None);
        assert_eq!(map_button_to_nav(PadButton::SelectBtn), None);
    }

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(
            map_key_to_nav(Key::ArrowLeft),
            Some(NavInput::Direction(NavDirection::Left))
        );
        assert_eq!(map_key_to_nav(Key::Enter), Some(NavInput::Accept));
        assert_eq!(map_key_to_nav(Key::Space), Some(NavInput::Accept));
        assert_eq!(map_key_to_nav(Key::Escape), Some(NavInput::Back));
        assert_eq!(map_key_to_nav(Key::Tab), None);
    }
}
