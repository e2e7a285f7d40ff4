use crate::{FrameSnapshot, MatchPhase, Presenter, SinkError, Side};

pub const RESTART_PROMPT: &str = "Click Start to play again";

pub fn game_over_headline(winner: Side) -> String {
    format!("{} Wins!", winner.display_name())
}

/// Issue the draw commands for one frame, back to front
pub fn render(frame: &FrameSnapshot, presenter: &mut dyn Presenter) -> Result<(), SinkError> {
    presenter.clear(frame.court)?;
    presenter.draw_divider(frame.court)?;
    presenter.draw_paddle(frame.player.rect())?;
    presenter.draw_paddle(frame.opponent.rect())?;
    presenter.draw_ball(frame.ball.rect())?;

    if frame.phase == MatchPhase::GameOver {
        if let Some(winner) = frame.winner {
            presenter.draw_game_over(frame.court, winner)?;
        }
    }
    Ok(())
}
