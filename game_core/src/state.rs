use glam::DVec2;

use crate::{
    Ball, Config, Court, GameRng, MatchPhase, Paddle, PhaseEvent, Score, Side, Transition,
};

/// Everything the simulation mutates: paddles, ball, score and phase
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub court: Court,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
}

impl MatchState {
    /// Build a freshly reset match in the `Idle` phase
    pub fn new(config: &Config, rng: &mut GameRng) -> Self {
        let court = config.court();
        let center_y = config.paddle_center_y();
        let mut state = Self {
            court,
            player: Paddle::new(
                Side::Human,
                config.paddle_x(Side::Human),
                center_y,
                config.paddle_width,
                config.paddle_height,
            ),
            opponent: Paddle::new(
                Side::Opponent,
                config.paddle_x(Side::Opponent),
                center_y,
                config.paddle_width,
                config.paddle_height,
            ),
            ball: Ball::new(court.ball_spawn(config.ball_size), DVec2::ZERO, config.ball_size),
            score: Score::new(),
            phase: MatchPhase::Idle,
        };
        state.reset_match(config, rng);
        state
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Human => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Zero the score, center both paddles, serve in a random direction and
    /// return to `Idle`.
    pub fn reset_match(&mut self, config: &Config, rng: &mut GameRng) {
        self.score = Score::new();

        let center_y = config.paddle_center_y();
        self.player.y = center_y;
        self.player.target_y = center_y;
        self.opponent.y = center_y;
        self.opponent.target_y = center_y;

        let direction = rng.sign();
        self.reset_rally(direction, config, rng);
        self.phase.apply(PhaseEvent::Reset);
    }

    /// Recenter the ball with a fresh serve. `direction` scales the
    /// x-component: positive serves right, negative serves left.
    pub fn reset_rally(&mut self, direction: f64, config: &Config, rng: &mut GameRng) {
        self.ball.size = config.ball_size;
        self.ball.pos = self.court.ball_spawn(config.ball_size);

        let angle = rng.symmetric(config.ball_max_angle);
        self.ball.vel = DVec2::new(
            config.ball_speed * angle.cos() * direction,
            config.ball_speed * angle.sin(),
        );

        let center_y = config.paddle_center_y();
        self.opponent.y = center_y;
        self.player.target_y = center_y;
    }

    /// Begin a new match. Only honored from `Idle` or `GameOver`; returns
    /// whether a match was started.
    pub fn start(&mut self, config: &Config, rng: &mut GameRng) -> bool {
        if !self.phase.can(PhaseEvent::Start) {
            log::debug!("start ignored while {:?}", self.phase);
            return false;
        }
        self.reset_match(config, rng);
        self.phase.apply(PhaseEvent::Start).success
    }

    pub fn toggle_pause(&mut self) -> Transition {
        self.phase.apply(PhaseEvent::TogglePause)
    }

    /// Store a clamped target for the human paddle. Ignored unless running;
    /// returns whether the target was accepted.
    pub fn set_human_target(&mut self, y: f64, config: &Config) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        self.player.target_y = config.clamp_paddle_y(y);
        true
    }

    /// Side with strictly more points, if any
    pub fn leader(&self) -> Option<Side> {
        use std::cmp::Ordering;
        match self.score.player.cmp(&self.score.ai) {
            Ordering::Greater => Some(Side::Human),
            Ordering::Less => Some(Side::Opponent),
            Ordering::Equal => None,
        }
    }

    /// Read-only copy for presentation
    pub fn snapshot(&self, tick: u64) -> FrameSnapshot {
        FrameSnapshot {
            tick,
            court: self.court,
            player: self.player,
            opponent: self.opponent,
            ball: self.ball,
            score: self.score,
            phase: self.phase,
            winner: self.leader().filter(|_| self.phase == MatchPhase::GameOver),
        }
    }
}

/// State captured at the end of a tick; renderers only ever see this
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub court: Court,
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: MatchPhase,
    pub winner: Option<Side>,
}
