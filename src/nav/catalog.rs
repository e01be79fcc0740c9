//! Dashboard content: declared tabs (in order) and the items of each tab

use std::collections::HashSet;

use crate::nav::error::NavError;
use crate::nav::pure::neighbor_index;
use crate::nav::types::{Item, ItemCategory, ItemId, NavDirection, TabId};
use crate::nav::Result;

/// One tab header plus its content region
#[derive(Debug, Clone)]
pub struct TabPanel {
    pub tab: TabId,
    pub items: Vec<Item>,
}

impl TabPanel {
    pub fn new(tab: TabId, items: Vec<Item>) -> Self {
        Self { tab, items }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    panels: Vec<TabPanel>,
}

impl Catalog {
    /// Build a catalog, rejecting empty panel lists and duplicate tabs or item ids
    pub fn new(panels: Vec<TabPanel>) -> Result<Self> {
        if panels.is_empty() {
            return Err(NavError::InvalidCatalog("no tabs declared".to_string()));
        }

        let mut tabs = HashSet::new();
        let mut ids = HashSet::new();
        for panel in &panels {
            if !tabs.insert(panel.tab) {
                return Err(NavError::InvalidCatalog(format!(
                    "tab {} declared twice",
                    panel.tab
                )));
            }
            for item in &panel.items {
                if !ids.insert(item.id.clone()) {
                    return Err(NavError::InvalidCatalog(format!(
                        "item {} declared twice",
                        item.id
                    )));
                }
            }
        }

        Ok(Self { panels })
    }

    /// Tabs in declaration order
    pub fn tabs(&self) -> impl Iterator<Item = TabId> + '_ {
        self.panels.iter().map(|panel| panel.tab)
    }

    pub fn first_tab(&self) -> TabId {
        self.panels[0].tab
    }

    pub fn contains(&self, tab: TabId) -> bool {
        self.position(tab).is_some()
    }

    pub fn position(&self, tab: TabId) -> Option<usize> {
        self.panels.iter().position(|panel| panel.tab == tab)
    }

    /// Previous/next tab in declaration order, clamped at both ends
    pub fn neighbor(&self, tab: TabId, direction: NavDirection) -> Option<TabId> {
        let index = self.position(tab)?;
        neighbor_index(index, self.panels.len(), direction).map(|i| self.panels[i].tab)
    }

    /// Items of a tab's content region (empty for undeclared tabs)
    pub fn items(&self, tab: TabId) -> &[Item] {
        self.panels
            .iter()
            .find(|panel| panel.tab == tab)
            .map(|panel| panel.items.as_slice())
            .unwrap_or(&[])
    }

    /// Look up an item and the tab that owns it
    pub fn find(&self, id: &ItemId) -> Option<(TabId, &Item)> {
        self.panels.iter().find_map(|panel| {
            panel
                .items
                .iter()
                .find(|item| &item.id == id)
                .map(|item| (panel.tab, item))
        })
    }
}

impl Catalog {
    /// The dashboard's built-in content
    pub fn builtin() -> Result<Self> {
        use ItemCategory::*;

        let panels = vec![
            TabPanel::new(
                TabId::Home,
                vec![
                    Item::new("home/halo-2", Game, "Halo 2"),
                    Item::new("home/jet-set-radio", Game, "Jet Set Radio Future"),
                    Item::new("home/recent-mix", Music, "Recent Mix"),
                ],
            ),
            TabPanel::new(
                TabId::Games,
                vec![
                    Item::new("games/halo", Game, "Halo"),
                    Item::new("games/fable", Game, "Fable"),
                    Item::new("games/ninja-gaiden", Game, "Ninja Gaiden"),
                    Item::new("games/pgr2", Game, "Project Gotham Racing 2"),
                    Item::new("games/mechassault", Game, "MechAssault"),
                    Item::new("games/crimson-skies", Game, "Crimson Skies"),
                ],
            ),
            TabPanel::new(
                TabId::Music,
                vec![
                    Item::new("music/halo-ost", Music, "Halo Original Soundtrack"),
                    Item::new("music/jsrf-mix", Music, "Jet Set Radio Mix"),
                    Item::new("music/ripped-01", Music, "Ripped CD 01"),
                    Item::new("music/ripped-02", Music, "Ripped CD 02"),
                ],
            ),
            TabPanel::new(
                TabId::Video,
                vec![
                    Item::new("video/halo-2-trailer", Video, "Halo 2 Trailer"),
                    Item::new("video/fable-preview", Video, "Fable Preview"),
                    Item::new("video/dashboard-tour", Video, "Dashboard Tour"),
                ],
            ),
            TabPanel::new(
                TabId::Settings,
                vec![
                    Item::new("settings/clock", Setting, "Clock"),
                    Item::new("settings/audio", Setting, "Audio"),
                    Item::new("settings/video", Setting, "Video"),
                    Item::new("settings/network", Setting, "Network"),
                    Item::new("settings/language", Setting, "Language"),
                    Item::new("settings/system", Setting, "System Info"),
                ],
            ),
        ];

        Self::new(panels)
    }
}
