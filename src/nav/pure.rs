pub mod input_map;
pub mod tabs;

// Re-exports
pub use input_map::{map_button_to_nav, map_key_to_nav};
pub use tabs::neighbor_index;
