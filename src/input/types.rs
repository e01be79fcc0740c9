// Gamepad input types

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PadButton {
    Left,
    Right,
    Up,
    Down,
    ABtn,
    BBtn,
    StartBtn,
    SelectBtn,
    LB, // Left bumper (BTN_TL)
    RB, // Right bumper (BTN_TR)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StickDirection {
    Up,
    Down,
    Left,
    Right,
}

impl StickDirection {
    pub fn to_button(self) -> PadButton {
        match self {
            StickDirection::Up => PadButton::Up,
            StickDirection::Down => PadButton::Down,
            StickDirection::Left => PadButton::Left,
            StickDirection::Right => PadButton::Right,
        }
    }
}

/// Result of polling a gamepad
#[derive(Debug, PartialEq)]
pub enum PollResult {
    /// A button was pressed
    Button(PadButton),
    /// Device was disabled (with reason for logging at the app layer)
    DeviceDisabled(String),
    /// No input
    None,
}
