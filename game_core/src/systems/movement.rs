use crate::{Config, MatchState};

/// Ease the human paddle a fixed fraction of the way toward its target
pub fn ease_player(state: &mut MatchState, config: &Config) {
    let paddle = &mut state.player;
    paddle.y += (paddle.target_y - paddle.y) * config.player_easing;
}

/// Move ball by one tick of velocity
pub fn move_ball(state: &mut MatchState) {
    state.ball.pos += state.ball.vel;
}

/// Clamp both paddles to court bounds
pub fn clamp_paddles(state: &mut MatchState, config: &Config) {
    state.player.y = config.clamp_paddle_y(state.player.y);
    state.opponent.y = config.clamp_paddle_y(state.opponent.y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;
    use glam::DVec2;

    fn setup() -> (MatchState, Config) {
        let config = Config::new();
        let state = MatchState::new(&config, &mut GameRng::default());
        (state, config)
    }

    #[test]
    fn test_ease_player_moves_fraction_of_gap() {
        let (mut state, config) = setup();
        state.player.y = 100.0;
        state.player.target_y = 200.0;

        ease_player(&mut state, &config);

        assert!((state.player.y - 119.0).abs() < 1e-12);
        assert_eq!(state.player.target_y, 200.0);
    }

    #[test]
    fn test_move_ball_integrates_velocity() {
        let (mut state, _config) = setup();
        state.ball.pos = DVec2::new(100.0, 100.0);
        state.ball.vel = DVec2::new(7.5, -2.0);

        move_ball(&mut state);

        assert_eq!(state.ball.pos, DVec2::new(107.5, 98.0));
    }

    #[test]
    fn test_clamp_paddles() {
        let (mut state, config) = setup();
        state.player.y = -3.0;
        state.opponent.y = 450.0;

        clamp_paddles(&mut state, &config);

        assert_eq!(state.player.y, 0.0);
        assert_eq!(state.opponent.y, config.court_height - config.paddle_height);
    }
}
