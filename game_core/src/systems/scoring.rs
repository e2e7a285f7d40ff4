use crate::{Config, Events, GameEvent, GameRng, MatchState, PhaseEvent, Side};

/// Check if ball left the court (scoring). At most one point per tick.
pub fn check_scoring(
    state: &mut MatchState,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    if state.ball.left() < 0.0 {
        register_point(state, Side::Opponent, config, rng, events);
    } else if state.ball.right() > state.court.width {
        register_point(state, Side::Human, config, rng, events);
    }
}

/// Award a point to `scorer`. Ends the match when the win score is reached,
/// otherwise serves a new rally toward the side that conceded.
/// Returns the winner if this point decided the match.
pub fn register_point(
    state: &mut MatchState,
    scorer: Side,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> Option<Side> {
    let total = state.score.increment(scorer);
    events.push(GameEvent::Point(scorer));
    log::debug!(
        "{} scores ({} - {})",
        scorer.display_name(),
        state.score.player,
        state.score.ai
    );

    if total >= config.win_score {
        state.phase.apply(PhaseEvent::Win);
        events.push(GameEvent::GameOver { winner: scorer });
        log::info!(
            "{} wins {} - {}",
            scorer.display_name(),
            state.score.player,
            state.score.ai
        );
        return Some(scorer);
    }

    let conceded = scorer.other();
    state.reset_rally(conceded.direction(), config, rng);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchPhase;
    use glam::DVec2;

    fn setup() -> (MatchState, Config, GameRng, Events) {
        let config = Config::new();
        let mut rng = GameRng::new(12345); // Fixed seed for deterministic tests
        let mut state = MatchState::new(&config, &mut rng);
        state.start(&config, &mut rng);
        (state, config, rng, Events::new())
    }

    #[test]
    fn test_opponent_scores_when_ball_exits_left() {
        let (mut state, config, mut rng, mut events) = setup();
        state.ball.pos = DVec2::new(-1.0, 200.0);

        check_scoring(&mut state, &config, &mut rng, &mut events);

        assert_eq!(state.score.ai, 1, "Opponent should score");
        assert_eq!(state.score.player, 0, "Human should not score");
        assert_eq!(events.scored(), Some(Side::Opponent));
    }

    #[test]
    fn test_human_scores_when_ball_exits_right() {
        let (mut state, config, mut rng, mut events) = setup();
        state.ball.pos = DVec2::new(state.court.width - state.ball.size + 0.5, 200.0);

        check_scoring(&mut state, &config, &mut rng, &mut events);

        assert_eq!(state.score.player, 1);
        assert_eq!(state.score.ai, 0);
        assert_eq!(events.scored(), Some(Side::Human));
    }

    #[test]
    fn test_ball_touching_edge_is_still_in_play() {
        let (mut state, config, mut rng, mut events) = setup();
        state.ball.pos = DVec2::new(0.0, 200.0);
        check_scoring(&mut state, &config, &mut rng, &mut events);

        state.ball.pos = DVec2::new(state.court.width - state.ball.size, 200.0);
        check_scoring(&mut state, &config, &mut rng, &mut events);

        assert_eq!(state.score.player + state.score.ai, 0);
        assert!(events.list.is_empty());
    }

    #[test]
    fn test_serve_goes_toward_side_that_conceded() {
        let (mut state, config, mut rng, mut events) = setup();

        register_point(&mut state, Side::Opponent, &config, &mut rng, &mut events);
        assert!(state.ball.vel.x < 0.0, "Human conceded, serve goes left");
        assert_eq!(state.ball.pos, state.court.ball_spawn(config.ball_size));

        register_point(&mut state, Side::Human, &config, &mut rng, &mut events);
        assert!(state.ball.vel.x > 0.0, "Opponent conceded, serve goes right");
    }

    #[test]
    fn test_reaching_win_score_ends_match() {
        let (mut state, config, mut rng, mut events) = setup();
        state.score.ai = config.win_score - 1;
        let ball_before = state.ball;

        let winner = register_point(&mut state, Side::Opponent, &config, &mut rng, &mut events);

        assert_eq!(winner, Some(Side::Opponent));
        assert_eq!(state.score.ai, config.win_score);
        assert_eq!(state.phase, MatchPhase::GameOver);
        assert_eq!(events.winner(), Some(Side::Opponent));
        assert_eq!(state.ball, ball_before, "No new serve after the final point");
    }

    #[test]
    fn test_scores_accumulate() {
        let (mut state, config, mut rng, mut events) = setup();
        for _ in 0..3 {
            register_point(&mut state, Side::Human, &config, &mut rng, &mut events);
        }
        assert_eq!(state.score.player, 3, "Scores should accumulate");
        assert_eq!(state.score.ai, 0);
        assert_eq!(state.phase, MatchPhase::Running);
    }

    #[test]
    fn test_winning_point_is_the_only_point_that_tick() {
        let (mut state, config, mut rng, mut events) = setup();
        state.score.ai = config.win_score - 1;
        // Ball pokes out of both edges at once
        state.ball.pos = DVec2::new(-1.0, 200.0);
        state.ball.size = state.court.width + 2.0;

        check_scoring(&mut state, &config, &mut rng, &mut events);

        assert_eq!(state.score.ai, config.win_score);
        assert_eq!(state.score.player, 0, "Right edge is not scored after the win");
        assert_eq!(state.phase, MatchPhase::GameOver);
        let points = events
            .list
            .iter()
            .filter(|e| matches!(e, GameEvent::Point(_)))
            .count();
        assert_eq!(points, 1);
    }
}
