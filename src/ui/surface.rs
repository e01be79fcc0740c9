//! Display state the controller writes and the drawing code reads

use std::collections::HashSet;

use crate::nav::{ItemId, RenderSurface, TabId};

#[derive(Debug, Default)]
pub struct PanelView {
    active_panels: HashSet<TabId>,
    selected_items: HashSet<ItemId>,
}

impl PanelView {
    pub fn is_panel_active(&self, tab: TabId) -> bool {
        self.active_panels.contains(&tab)
    }

    pub fn is_item_selected(&self, item: &ItemId) -> bool {
        self.selected_items.contains(item)
    }

    /// The panel to draw; the first active one if several are flagged
    pub fn visible_panel(&self, order: impl IntoIterator<Item = TabId>) -> Option<TabId> {
        order.into_iter().find(|tab| self.is_panel_active(*tab))
    }
}

impl RenderSurface for PanelView {
    fn set_panel_active(&mut self, tab: TabId, active: bool) {
        if active {
            self.active_panels.insert(tab);
        } else {
            self.active_panels.remove(&tab);
        }
    }

    fn set_item_selected(&mut self, item: &ItemId, selected: bool) {
        if selected {
            self.selected_items.insert(item.clone());
        } else {
            self.selected_items.remove(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{Catalog, NavigationController, Notifier};
    use crate::sound::Cue;

    struct Quiet;
    impl crate::nav::CuePlayer for Quiet {
        fn play(&mut self, _cue: Cue) {}
    }
    impl Notifier for Quiet {
        fn show(&mut self, _message: String) {}
    }

    #[test]
    fn test_flags_toggle() {
        let mut view = PanelView::default();
        let id = ItemId::from("games/halo");
        view.set_panel_active(TabId::Games, true);
        view.set_item_selected(&id, true);
        assert!(view.is_panel_active(TabId::Games));
        assert!(view.is_item_selected(&id));

        view.set_panel_active(TabId::Games, false);
        view.set_item_selected(&id, false);
        assert!(!view.is_panel_active(TabId::Games));
        assert!(!view.is_item_selected(&id));
    }

    #[test]
    fn test_controller_drives_view() {
        let catalog = Catalog::builtin().unwrap();
        let order: Vec<TabId> = catalog.tabs().collect();
        let mut nav =
            NavigationController::new(catalog, TabId::Games, PanelView::default(), Quiet, Quiet)
                .unwrap();
        assert_eq!(nav.surface().visible_panel(order.clone()), Some(TabId::Games));

        let halo = ItemId::from("games/halo");
        nav.select_item(&halo).unwrap();
        assert!(nav.surface().is_item_selected(&halo));

        nav.switch_tab(TabId::Music).unwrap();
        assert_eq!(nav.surface().visible_panel(order), Some(TabId::Music));
        assert!(!nav.surface().is_panel_active(TabId::Games));
        assert!(!nav.surface().is_item_selected(&halo));
    }
}
