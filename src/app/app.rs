// Core app structure

mod eframe_impl;

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::config::DashConfig;
use crate::effects::Effects;
use crate::input::{scan_gamepads, Gamepad};
use crate::nav::{Catalog, CuePlayer, NavError, NavigationController, TabId};
use crate::notify::Toasts;
use crate::sound::open_cue_player;
use crate::ui::PanelView;

const DEFAULT_TOAST: Duration = Duration::from_secs(3);

pub type DashNav = NavigationController<PanelView, Box<dyn CuePlayer>, Toasts>;

pub struct DashApp {
    pub nav: DashNav,
    pub effects: Effects,
    pub gamepads: Vec<Gamepad>,
    /// Tab under the pointer last frame, so hover cues fire on enter only
    pub hovered_tab: Option<TabId>,
}

impl DashApp {
    pub fn new(config: &DashConfig, catalog: Catalog) -> Result<Self, NavError> {
        let cues = open_cue_player(config.sound_enabled, config.volume);
        Self::with_cues(config, catalog, cues)
    }

    pub fn with_cues(
        config: &DashConfig,
        catalog: Catalog,
        cues: Box<dyn CuePlayer>,
    ) -> Result<Self, NavError> {
        let now = Instant::now();

        let start_tab = if catalog.contains(config.start_tab) {
            config.start_tab
        } else {
            warn!(
                "Start tab {} has no panel; using {}",
                config.start_tab,
                catalog.first_tab()
            );
            catalog.first_tab()
        };

        let nav = NavigationController::new(
            catalog,
            start_tab,
            PanelView::default(),
            cues,
            Toasts::new(toast_duration(config.notification_secs)),
        )?;

        let gamepads = if config.gamepad_enabled {
            scan_gamepads()
        } else {
            info!("Gamepad input disabled");
            Vec::new()
        };
        info!("{} gamepad(s) connected", gamepads.len());

        Ok(Self {
            nav,
            effects: Effects::new(config.effects_enabled, config.clock_24h, now),
            gamepads,
            hovered_tab: None,
        })
    }

    /// Play the hover cue when the pointer enters a tab header
    pub(super) fn track_hover(&mut self, hovered: Option<TabId>) {
        if hovered != self.hovered_tab {
            if let Some(tab) = hovered {
                self.nav.hover_tab(tab);
            }
            self.hovered_tab = hovered;
        }
    }
}

/// Toast lifetime; out-of-range values fall back to the default
fn toast_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or(DEFAULT_TOAST)
}
