//! Navigation error types

use thiserror::Error;

use crate::nav::types::{ItemId, TabId};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum NavError {
    #[error("Tab not declared by the catalog: {0}")]
    UnknownTab(TabId),

    #[error("Item not found: {0}")]
    UnknownItem(ItemId),

    #[error("Item {item} belongs to tab {owner}, active tab is {active}")]
    ItemNotInActiveTab {
        item: ItemId,
        owner: TabId,
        active: TabId,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}
