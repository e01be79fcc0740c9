mod operations;
mod pure;
mod types;

// Re-export types
pub use types::{PadButton, PollResult};

// Re-export operations
pub use operations::{Gamepad, scan_gamepads};
