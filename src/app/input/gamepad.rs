//! Gamepad polling

use tracing::{trace, warn};

use crate::app::DashApp;
use crate::input::PollResult;
use crate::nav::pure::map_button_to_nav;

impl DashApp {
    pub(crate) fn handle_gamepads(&mut self) {
        let results: Vec<PollResult> = self
            .gamepads
            .iter_mut()
            .filter(|pad| pad.enabled())
            .map(|pad| pad.poll())
            .collect();

        for result in results {
            match result {
                PollResult::Button(button) => {
                    if let Some(input) = map_button_to_nav(button) {
                        self.nav.handle_input(input);
                        trace!(?input, state = ?self.nav.state(), "pad input handled");
                    }
                }
                PollResult::DeviceDisabled(reason) => warn!("Gamepad disabled: {}", reason),
                PollResult::None => {}
            }
        }

        self.gamepads.retain(|pad| pad.enabled());
    }
}
