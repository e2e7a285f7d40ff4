//! Headless match driver
//!
//! Owns the simulation and the injected collaborators. Commands and input
//! mutate [`MatchState`]; collaborators are told about the outcome after
//! each step and their failures are logged, never propagated.

use crate::{
    advance, render, AudioSink, Config, ConfigError, Events, FrameSnapshot, GameEvent, GameRng,
    MatchPhase, MatchState, Message, PointerInput, Presenter, Score, SinkError, UiControls,
};

fn best_effort(what: &str, result: Result<(), SinkError>) {
    if let Err(err) = result {
        log::warn!("{what}: {err}");
    }
}

pub struct Game {
    state: MatchState,
    config: Config,
    rng: GameRng,
    events: Events,
    pointer: PointerInput,
    muted: bool, // Music mute flag, survives restarts
    tick: u64,
    audio: Box<dyn AudioSink>,
    presenter: Box<dyn Presenter>,
    ui: Box<dyn UiControls>,
}

impl Game {
    pub fn new(
        config: Config,
        seed: u64,
        audio: Box<dyn AudioSink>,
        presenter: Box<dyn Presenter>,
        ui: Box<dyn UiControls>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = GameRng::new(seed);
        let state = MatchState::new(&config, &mut rng);

        let mut game = Self {
            state,
            config,
            rng,
            events: Events::new(),
            pointer: PointerInput::new(),
            muted: false,
            tick: 0,
            audio,
            presenter,
            ui,
        };
        game.show_reset();
        Ok(game)
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Unchecked access to the match, skipping phase gating and paddle
    /// clamping. Test harnesses only; game code goes through the commands.
    #[doc(hidden)]
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase
    }

    pub fn score(&self) -> Score {
        self.state.score
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of simulation steps taken since construction
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        self.state.snapshot(self.tick)
    }

    /// Begin a new match from `Idle` or `GameOver`. Returns whether a
    /// match was started.
    pub fn start(&mut self) -> bool {
        if !self.state.start(&self.config, &mut self.rng) {
            return false;
        }
        self.events.clear();
        self.show_reset();

        best_effort("pause control", self.ui.set_pause_control(true, false));
        best_effort("mute control", self.ui.set_mute_control(true, self.muted));
        best_effort("message", self.ui.set_message(Message::InProgress));
        self.play_music();
        log::info!("match started");
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        let transition = self.state.toggle_pause();
        if !transition.success {
            return false;
        }
        let paused = transition.to == MatchPhase::Paused;
        best_effort("pause control", self.ui.set_pause_control(true, paused));
        if paused {
            best_effort("message", self.ui.set_message(Message::Paused));
            best_effort("stop music", self.audio.stop_music());
        } else {
            best_effort("message", self.ui.set_message(Message::InProgress));
            self.play_music();
        }
        true
    }

    /// Flip the music mute flag. Only honored once a match has started.
    pub fn toggle_mute(&mut self) -> bool {
        if !self.state.phase.mute_enabled() {
            log::debug!("mute ignored while {:?}", self.state.phase);
            return false;
        }
        self.muted = !self.muted;
        best_effort("mute control", self.ui.set_mute_control(true, self.muted));
        if self.muted {
            best_effort("stop music", self.audio.stop_music());
        } else if self.state.phase.is_running() {
            self.play_music();
        }
        true
    }

    pub fn set_human_target(&mut self, y: f64) -> bool {
        self.state.set_human_target(y, &self.config)
    }

    pub fn mouse_move(&mut self, y: f64) -> bool {
        let target = self.pointer.mouse_move(y, &self.config);
        self.set_human_target(target)
    }

    /// Returns whether the touch grabbed the paddle
    pub fn touch_start(&mut self, x: f64, y: f64) -> bool {
        if !self.state.phase.is_running() {
            return false;
        }
        match self.pointer.touch_start(x, y, &self.config) {
            Some(target) => self.set_human_target(target),
            None => false,
        }
    }

    pub fn touch_move(&mut self, y: f64) -> bool {
        if !self.state.phase.is_running() {
            return false;
        }
        match self.pointer.touch_move(y, &self.config) {
            Some(target) => self.set_human_target(target),
            None => false,
        }
    }

    pub fn touch_end(&mut self) {
        self.pointer.touch_end();
    }

    /// Advance the simulation one step if running, then notify collaborators
    pub fn tick(&mut self) {
        if !self.state.phase.is_running() {
            return;
        }
        advance(&mut self.state, &self.config, &mut self.rng, &mut self.events);
        self.tick += 1;
        self.dispatch_events();
    }

    /// Draw the current state
    pub fn render(&mut self) {
        let frame = self.snapshot();
        best_effort("render", render(&frame, self.presenter.as_mut()));
    }

    /// One display frame: step, then draw the result
    pub fn frame(&mut self) {
        self.tick();
        self.render();
    }

    fn dispatch_events(&mut self) {
        for event in self.events.take() {
            match event {
                GameEvent::WallHit | GameEvent::PaddleHit(_) => {
                    best_effort("hit sound", self.audio.play_hit());
                }
                GameEvent::Point(_) => {
                    best_effort("scores", self.ui.set_scores(self.state.score));
                    best_effort("score sound", self.audio.play_score());
                }
                GameEvent::GameOver { .. } => {
                    best_effort("pause control", self.ui.set_pause_control(false, false));
                    best_effort("mute control", self.ui.set_mute_control(true, self.muted));
                    best_effort("message", self.ui.set_message(Message::GameOver));
                    best_effort("stop music", self.audio.stop_music());
                }
            }
        }
    }

    /// Collaborator side of a match reset
    fn show_reset(&mut self) {
        best_effort("scores", self.ui.set_scores(self.state.score));
        best_effort("pause control", self.ui.set_pause_control(false, false));
        best_effort("mute control", self.ui.set_mute_control(false, self.muted));
        best_effort("message", self.ui.set_message(Message::Instructions));
        best_effort("stop music", self.audio.stop_music());
    }

    fn play_music(&mut self) {
        if !self.muted {
            best_effort("play music", self.audio.play_music());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NullSink;

    fn game() -> Game {
        Game::new(
            Config::new(),
            12345,
            Box::new(NullSink),
            Box::new(NullSink),
            Box::new(NullSink),
        )
        .unwrap()
    }

    #[test]
    fn test_game_initialization() {
        let game = game();
        assert_eq!(game.phase(), MatchPhase::Idle);
        assert_eq!(game.score(), Score::new());
        assert_eq!(game.ticks(), 0);
        assert!(!game.is_muted());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            court_height: 0.0,
            ..Config::new()
        };
        let result = Game::new(
            config,
            1,
            Box::new(NullSink),
            Box::new(NullSink),
            Box::new(NullSink),
        );
        assert!(matches!(result, Err(ConfigError::InvalidCourt { .. })));
    }

    #[test]
    fn test_negative_bounce_angle_is_rejected_before_serving() {
        let config = Config {
            ball_max_angle: -0.5,
            ..Config::new()
        };
        let result = Game::new(
            config,
            1,
            Box::new(NullSink),
            Box::new(NullSink),
            Box::new(NullSink),
        );
        assert!(matches!(result, Err(ConfigError::InvalidAngle(a)) if a == -0.5));
    }

    #[test]
    fn test_tick_only_counts_while_running() {
        let mut game = game();
        game.tick();
        assert_eq!(game.ticks(), 0);

        game.start();
        game.tick();
        game.tick();
        assert_eq!(game.ticks(), 2);

        game.toggle_pause();
        game.tick();
        assert_eq!(game.ticks(), 2);
    }

    #[test]
    fn test_mute_gated_until_started() {
        let mut game = game();
        assert!(!game.toggle_mute());
        assert!(!game.is_muted());

        game.start();
        assert!(game.toggle_mute());
        assert!(game.is_muted());
    }

    #[test]
    fn test_touch_ignored_while_idle() {
        let mut game = game();
        assert!(!game.touch_start(10.0, 10.0));
        game.start();
        assert!(game.touch_start(10.0, 10.0));
        assert!(game.touch_move(300.0));
        game.touch_end();
        assert!(!game.touch_move(300.0));
    }
}
