//! `<audio>` element sink
//!
//! Playback promises are dropped: a blocked autoplay rejects in the
//! browser and never reaches the game.

use game_core::{AudioSink, SinkError};
use wasm_bindgen::JsValue;
use web_sys::HtmlAudioElement;

const MUSIC_VOLUME: f64 = 0.5;

fn audio_err(e: JsValue) -> SinkError {
    SinkError::Audio(format!("{e:?}"))
}

pub struct DomAudio {
    hit: HtmlAudioElement,
    score: HtmlAudioElement,
    music: HtmlAudioElement,
}

impl DomAudio {
    pub fn new(hit: HtmlAudioElement, score: HtmlAudioElement, music: HtmlAudioElement) -> Self {
        Self { hit, score, music }
    }

    /// Restart a clip from the top
    fn retrigger(clip: &HtmlAudioElement) -> Result<(), SinkError> {
        clip.set_current_time(0.0);
        clip.play().map(drop).map_err(audio_err)
    }
}

impl AudioSink for DomAudio {
    fn play_hit(&mut self) -> Result<(), SinkError> {
        Self::retrigger(&self.hit)
    }

    fn play_score(&mut self) -> Result<(), SinkError> {
        Self::retrigger(&self.score)
    }

    fn play_music(&mut self) -> Result<(), SinkError> {
        self.music.set_volume(MUSIC_VOLUME);
        self.music.play().map(drop).map_err(audio_err)
    }

    fn stop_music(&mut self) -> Result<(), SinkError> {
        self.music.pause().map_err(audio_err)?;
        self.music.set_current_time(0.0);
        Ok(())
    }
}
