//! Collaborator interfaces
//!
//! The core never touches a drawing surface, an audio device or the DOM
//! directly. Front-ends implement these traits; every call is best-effort
//! and a failure never reaches the simulation.

use thiserror::Error;

use crate::{Court, Rect, Score, Side};

/// Failure reported by a collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("audio playback failed: {0}")]
    Audio(String),
    #[error("presentation failed: {0}")]
    Present(String),
    #[error("ui update failed: {0}")]
    Ui(String),
}

/// Fire-and-forget sound triggers and background music
pub trait AudioSink {
    fn play_hit(&mut self) -> Result<(), SinkError>;
    fn play_score(&mut self) -> Result<(), SinkError>;
    fn play_music(&mut self) -> Result<(), SinkError>;
    fn stop_music(&mut self) -> Result<(), SinkError>;
}

/// Per-frame draw commands
pub trait Presenter {
    fn clear(&mut self, court: Court) -> Result<(), SinkError>;
    /// Dashed vertical line down the middle of the court
    fn draw_divider(&mut self, court: Court) -> Result<(), SinkError>;
    fn draw_paddle(&mut self, rect: Rect) -> Result<(), SinkError>;
    fn draw_ball(&mut self, rect: Rect) -> Result<(), SinkError>;
    /// Overlay with the winner's name and a restart prompt
    fn draw_game_over(&mut self, court: Court, winner: Side) -> Result<(), SinkError>;
}

/// Status line text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Instructions,
    InProgress,
    Paused,
    GameOver,
}

impl Message {
    pub fn text(self) -> &'static str {
        match self {
            Message::Instructions => {
                "Move your mouse or drag left side on mobile to control the left paddle!"
            }
            Message::InProgress => "Game in progress...",
            Message::Paused => "Paused",
            Message::GameOver => "Game Over!",
        }
    }
}

pub fn pause_label(paused: bool) -> &'static str {
    if paused {
        "Resume"
    } else {
        "Pause"
    }
}

pub fn mute_label(muted: bool) -> &'static str {
    if muted {
        "Unmute Music"
    } else {
        "Mute Music"
    }
}

/// Score display, status line and the pause/mute buttons
pub trait UiControls {
    fn set_scores(&mut self, score: Score) -> Result<(), SinkError>;
    fn set_message(&mut self, message: Message) -> Result<(), SinkError>;
    fn set_pause_control(&mut self, enabled: bool, paused: bool) -> Result<(), SinkError>;
    fn set_mute_control(&mut self, enabled: bool, muted: bool) -> Result<(), SinkError>;
}

/// Collaborator that accepts and discards everything (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl AudioSink for NullSink {
    fn play_hit(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
    fn play_score(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
    fn play_music(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
    fn stop_music(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

impl Presenter for NullSink {
    fn clear(&mut self, _court: Court) -> Result<(), SinkError> {
        Ok(())
    }
    fn draw_divider(&mut self, _court: Court) -> Result<(), SinkError> {
        Ok(())
    }
    fn draw_paddle(&mut self, _rect: Rect) -> Result<(), SinkError> {
        Ok(())
    }
    fn draw_ball(&mut self, _rect: Rect) -> Result<(), SinkError> {
        Ok(())
    }
    fn draw_game_over(&mut self, _court: Court, _winner: Side) -> Result<(), SinkError> {
        Ok(())
    }
}

impl UiControls for NullSink {
    fn set_scores(&mut self, _score: Score) -> Result<(), SinkError> {
        Ok(())
    }
    fn set_message(&mut self, _message: Message) -> Result<(), SinkError> {
        Ok(())
    }
    fn set_pause_control(&mut self, _enabled: bool, _paused: bool) -> Result<(), SinkError> {
        Ok(())
    }
    fn set_mute_control(&mut self, _enabled: bool, _muted: bool) -> Result<(), SinkError> {
        Ok(())
    }
}
