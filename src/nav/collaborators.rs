//! Services the navigation controller drives but does not implement
//!
//! The controller only ever *tells* these what to do; it never reads
//! display state back from them.

use crate::nav::types::{ItemId, TabId};
use crate::sound::Cue;

/// Shows/hides tab panels and toggles item highlight
pub trait RenderSurface {
    fn set_panel_active(&mut self, tab: TabId, active: bool);
    fn set_item_selected(&mut self, item: &ItemId, selected: bool);
}

/// Plays a named short tone
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Displays a transient message that dismisses itself
pub trait Notifier {
    fn show(&mut self, message: String);
}

impl<T: CuePlayer + ?Sized> CuePlayer for Box<T> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }
}
