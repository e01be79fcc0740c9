mod device;
mod scan;

pub use device::Gamepad;
pub use scan::scan_gamepads;
