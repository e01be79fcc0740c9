// Cue playback (I/O: SDL2 audio queue)

use sdl2::audio::{AudioQueue, AudioSpecDesired};
use tracing::{info, trace, warn};

use crate::nav::CuePlayer;
use crate::sound::pure::render_cue;
use crate::sound::types::{Cue, SoundError};

const SAMPLE_RATE: i32 = 44_100;

/// Plays cues through an SDL2 mono f32 queue
pub struct SdlCuePlayer {
    queue: AudioQueue<f32>,
    sample_rate: u32,
    volume: f32,
    _sdl: sdl2::Sdl,
}

impl SdlCuePlayer {
    pub fn open(volume: f32) -> Result<Self, SoundError> {
        let sdl = sdl2::init().map_err(SoundError::Init)?;
        let audio = sdl.audio().map_err(SoundError::Init)?;

        let desired = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: Some(512),
        };
        let queue: AudioQueue<f32> = audio
            .open_queue(None::<&str>, &desired)
            .map_err(SoundError::Open)?;
        queue.resume();

        let sample_rate = queue.spec().freq as u32;
        info!(
            "Audio queue opened: {} Hz, driver {}",
            sample_rate,
            audio.current_audio_driver()
        );

        Ok(Self {
            queue,
            sample_rate,
            volume: volume.clamp(0.0, 1.0),
            _sdl: sdl,
        })
    }
}

impl CuePlayer for SdlCuePlayer {
    fn play(&mut self, cue: Cue) {
        let samples = render_cue(cue, self.sample_rate, self.volume);
        // Newest cue replaces whatever is still queued
        self.queue.clear();
        if let Err(e) = self.queue.queue_audio(&samples) {
            warn!("Failed to queue {} cue: {}", cue, e);
        }
    }
}

/// Used when sound is disabled or no audio device could be opened
pub struct SilentCuePlayer;

impl CuePlayer for SilentCuePlayer {
    fn play(&mut self, cue: Cue) {
        trace!(cue = %cue, "cue muted");
    }
}

/// Open the configured cue player, falling back to silence
pub fn open_cue_player(enabled: bool, volume: f32) -> Box<dyn CuePlayer> {
    if !enabled {
        info!("Sound disabled");
        return Box::new(SilentCuePlayer);
    }

    match SdlCuePlayer::open(volume) {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("{}; continuing without sound", e);
            Box::new(SilentCuePlayer)
        }
    }
}
