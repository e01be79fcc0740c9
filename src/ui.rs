pub mod components;
pub mod surface;
pub mod theme;

pub use surface::PanelView;
pub use theme::apply_theme;
