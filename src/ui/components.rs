mod backdrop;
mod item_card;
mod tab_bar;
mod toasts;

pub use backdrop::paint_backdrop;
pub use item_card::item_card;
pub use tab_bar::tab_bar;
pub use toasts::paint_toasts;
