//! Keyboard and gamepad input, fed to the navigation controller
//!
//! - `keyboard` - arrow keys, Enter/Space, Escape from egui's raw input
//! - `gamepad` - evdev pads polled once per frame

mod gamepad;
mod keyboard;
