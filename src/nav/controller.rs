//! Navigation controller
//!
//! Owns the dashboard's `NavigationState` and turns discrete input into
//! state transitions plus requests to its collaborators. The controller is
//! the single source of truth for the active tab and the selection; the
//! render surface is only told what to show.

use tracing::{debug, warn};

use crate::nav::catalog::Catalog;
use crate::nav::collaborators::{CuePlayer, Notifier, RenderSurface};
use crate::nav::error::NavError;
use crate::nav::types::{
    ActionKind, Item, ItemId, NavDirection, NavInput, NavigationState, TabId,
};
use crate::nav::Result;
use crate::sound::Cue;

/// Title used in notifications when no item is selected
pub const FALLBACK_TITLE: &str = "item";

pub struct NavigationController<S, C, N> {
    catalog: Catalog,
    state: NavigationState,
    surface: S,
    cues: C,
    notifier: N,
}

impl<S, C, N> NavigationController<S, C, N>
where
    S: RenderSurface,
    C: CuePlayer,
    N: Notifier,
{
    /// Create the controller with `start_tab` active and nothing selected.
    ///
    /// Activates the start panel on the surface without playing a cue.
    pub fn new(
        catalog: Catalog,
        start_tab: TabId,
        mut surface: S,
        cues: C,
        notifier: N,
    ) -> Result<Self> {
        if !catalog.contains(start_tab) {
            return Err(NavError::UnknownTab(start_tab));
        }
        surface.set_panel_active(start_tab, true);

        Ok(Self {
            catalog,
            state: NavigationState::new(start_tab),
            surface,
            cues,
            notifier,
        })
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn active_tab(&self) -> TabId {
        self.state.active_tab
    }

    pub fn selected(&self) -> Option<&Item> {
        self.state.selected.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Activate `target`'s panel and clear the selection.
    ///
    /// Switching to the already-active tab re-applies the same effects.
    pub fn switch_tab(&mut self, target: TabId) -> Result<()> {
        if !self.catalog.contains(target) {
            return Err(NavError::UnknownTab(target));
        }

        let previous = self.state.active_tab;
        self.surface.set_panel_active(previous, false);
        if let Some(item) = self.state.selected.take() {
            self.surface.set_item_selected(&item.id, false);
        }
        self.surface.set_panel_active(target, true);
        self.state.active_tab = target;
        self.cues.play(Cue::TabSwitch);

        debug!(from = %previous, to = %target, "tab switched");
        Ok(())
    }

    /// Select an item of the active tab, replacing any prior selection
    pub fn select_item(&mut self, id: &ItemId) -> Result<()> {
        let (owner, item) = self
            .catalog
            .find(id)
            .ok_or_else(|| NavError::UnknownItem(id.clone()))?;
        if owner != self.state.active_tab {
            return Err(NavError::ItemNotInActiveTab {
                item: id.clone(),
                owner,
                active: self.state.active_tab,
            });
        }
        let item = item.clone();

        if let Some(previous) = self.state.selected.take() {
            self.surface.set_item_selected(&previous.id, false);
        }
        self.surface.set_item_selected(&item.id, true);
        debug!(item = %item.id, "item selected");
        self.state.selected = Some(item);
        self.cues.play(Cue::Select);
        Ok(())
    }

    /// Simulate an action on the selected item; returns the notification text
    pub fn activate_action(&mut self, action: ActionKind) -> String {
        let title = self
            .state
            .selected
            .as_ref()
            .map(|item| item.title.as_str())
            .unwrap_or(FALLBACK_TITLE);
        let message = format!("{} {}...", action.verb(), title);

        self.cues.play(Cue::Action);
        self.notifier.show(message.clone());
        message
    }

    /// Returns true if the active tab changed.
    ///
    /// Up/Down only play the navigate cue; grid movement is not implemented.
    pub fn navigate(&mut self, direction: NavDirection) -> bool {
        match direction {
            NavDirection::Left | NavDirection::Right => {
                match self.catalog.neighbor(self.state.active_tab, direction) {
                    Some(next) => self.switch_tab(next).is_ok(),
                    None => false,
                }
            }
            NavDirection::Up | NavDirection::Down => {
                self.cues.play(Cue::Navigate);
                false
            }
        }
    }

    /// Re-run the selected item's default action (same as clicking it)
    pub fn activate_selection(&mut self) -> Result<bool> {
        let Some(id) = self.state.selected.as_ref().map(|item| item.id.clone()) else {
            return Ok(false);
        };
        self.select_item(&id)?;
        Ok(true)
    }

    /// Plays the back cue; there is no page history to return to
    pub fn go_back(&mut self) {
        self.cues.play(Cue::Back);
    }

    /// Pointer entered a tab header
    pub fn hover_tab(&mut self, tab: TabId) {
        if self.catalog.contains(tab) {
            self.cues.play(Cue::Hover);
        }
    }

    /// Dispatch a device-independent input
    pub fn handle_input(&mut self, input: NavInput) {
        match input {
            NavInput::Direction(direction) => {
                self.navigate(direction);
            }
            NavInput::TabPrev => {
                self.navigate(NavDirection::Left);
            }
            NavInput::TabNext => {
                self.navigate(NavDirection::Right);
            }
            NavInput::Accept => {
                if let Err(e) = self.activate_selection() {
                    warn!("Failed to activate selection: {}", e);
                }
            }
            NavInput::Back => self.go_back(),
        }
    }
}
