//! Keyboard navigation handling

use eframe::egui;
use tracing::trace;

use crate::app::DashApp;
use crate::nav::pure::map_key_to_nav;

impl DashApp {
    /// Feed mapped key presses to the controller and drop them from egui's input
    pub(crate) fn handle_keyboard(&mut self, raw_input: &mut egui::RawInput) {
        let mut consumed = false;
        for event in &raw_input.events {
            if let egui::Event::Key {
                key, pressed: true, ..
            } = event
            {
                if let Some(input) = map_key_to_nav(*key) {
                    self.nav.handle_input(input);
                    trace!(?input, state = ?self.nav.state(), "input handled");
                    consumed = true;
                }
            }
        }

        if consumed {
            raw_input.events.retain(|event| {
                !matches!(event, egui::Event::Key { key, .. } if map_key_to_nav(*key).is_some())
            });
        }
    }
}
