//! Dashboard navigation: tabs, item selection and simulated actions
//!
//! ## Module Structure
//! - `types.rs`: TabId, Item, ActionKind, NavInput, NavigationState
//! - `catalog.rs`: declared tabs and their content
//! - `collaborators.rs`: render/audio/notification seams
//! - `pure/`: tab strip movement and input mapping
//! - `controller.rs`: the state machine driving the collaborators

mod catalog;
mod collaborators;
mod controller;
mod error;
pub mod pure;
mod types;

pub use catalog::Catalog;
#[cfg(test)]
pub use catalog::TabPanel;
pub use collaborators::{CuePlayer, Notifier, RenderSurface};
pub use controller::NavigationController;
pub use error::NavError;
pub use types::{ActionKind, Item, ItemCategory, ItemId, TabId};

pub type Result<T> = std::result::Result<T, NavError>;
