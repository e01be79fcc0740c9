//! Navigation types for the dashboard

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Tabs and items
// =============================================================================

/// Dashboard tab identifier
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    #[default]
    Home,
    Games,
    Music,
    Video,
    Settings,
}

impl TabId {
    pub const ALL: [TabId; 5] = [
        TabId::Home,
        TabId::Games,
        TabId::Music,
        TabId::Video,
        TabId::Settings,
    ];

    /// Stable lowercase key (used by config and the command line)
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Games => "games",
            Self::Music => "music",
            Self::Video => "video",
            Self::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Games => "Games",
            Self::Music => "Music",
            Self::Video => "Video",
            Self::Settings => "Settings",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.key().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Content category of an item
#[derive(Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Game,
    Music,
    Video,
    Setting,
}

impl ItemCategory {
    /// Actions offered on items of this category
    pub fn actions(self) -> &'static [ActionKind] {
        match self {
            Self::Game | Self::Music | Self::Video => &ActionKind::ALL,
            Self::Setting => &[],
        }
    }
}

/// Unique item key, e.g. `games/halo`
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A selectable entry in a tab's content grid
#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub category: ItemCategory,
    pub title: String,
}

impl Item {
    pub fn new(id: impl Into<String>, category: ItemCategory, title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            category,
            title: title.into(),
        }
    }
}

// =============================================================================
// Actions
// =============================================================================

/// Simulated item actions (nothing is actually played, copied or deleted)
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum ActionKind {
    Play,
    Copy,
    Delete,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Play, ActionKind::Copy, ActionKind::Delete];

    pub fn label(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Copy => "Copy",
            Self::Delete => "Delete",
        }
    }

    /// Progressive form shown in the notification banner
    pub fn verb(self) -> &'static str {
        match self {
            Self::Play => "Starting",
            Self::Copy => "Copying",
            Self::Delete => "Deleting",
        }
    }
}

// =============================================================================
// Input
// =============================================================================

/// Direction of navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Discrete navigation input, independent of the device that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavInput {
    Direction(NavDirection),
    Accept,
    Back,
    TabPrev,
    TabNext,
}

// =============================================================================
// State
// =============================================================================

/// Current tab plus the (optional) selected item of that tab
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub active_tab: TabId,
    pub selected: Option<Item>,
}

impl NavigationState {
    pub fn new(active_tab: TabId) -> Self {
        Self {
            active_tab,
            selected: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_keys() {
        for tab in TabId::ALL {
            assert_eq!(TabId::from_key(tab.key()), Some(tab));
        }
        assert_eq!(TabId::from_key(" Music "), Some(TabId::Music));
        assert_eq!(TabId::from_key("dashboard"), None);
    }

    #[test]
    fn test_tab_serde_uses_keys() {
        let json = serde_json::to_string(&TabId::Video).unwrap();
        assert_eq!(json, "\"video\"");
        let tab: TabId = serde_json::from_str("\"settings\"").unwrap();
        assert_eq!(tab, TabId::Settings);
    }

    #[test]
    fn test_setting_items_have_no_actions() {
        assert!(ItemCategory::Setting.actions().is_empty());
        assert_eq!(ItemCategory::Game.actions().len(), 3);
    }

    #[test]
    fn test_action_verbs() {
        assert_eq!(ActionKind::Play.verb(), "Starting");
        assert_eq!(ActionKind::Copy.verb(), "Copying");
        assert_eq!(ActionKind::Delete.verb(), "Deleting");
    }
}
