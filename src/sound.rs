//! Synthesized UI sound cues
//!
//! ## Module Structure
//! - `types.rs`: Cue, CuePreset, SoundError
//! - `pure/`: tone presets and sample synthesis
//! - `operations.rs`: SDL2 playback and the silent fallback

mod operations;
mod pure;
mod types;

pub use operations::open_cue_player;
pub use types::Cue;
