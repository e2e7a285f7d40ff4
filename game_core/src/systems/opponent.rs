use crate::{Config, MatchState};

/// Move the opponent paddle toward the ball center at a capped rate.
/// No prediction and no easing: it simply chases the ball's current height.
pub fn track_ball(state: &mut MatchState, config: &Config) {
    let delta = state.ball.center().y - state.opponent.center_y();
    let step = delta.abs().min(config.opponent_speed);
    state.opponent.y = config.clamp_paddle_y(state.opponent.y + delta.signum() * step);
}
