use crate::Side;

/// Match score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32, // Human (left) points
    pub ai: u32,     // Opponent (right) points
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.player,
            Side::Opponent => self.ai,
        }
    }

    /// Add one point for `side` and return its new total
    pub fn increment(&mut self, side: Side) -> u32 {
        let counter = match side {
            Side::Human => &mut self.player,
            Side::Opponent => &mut self.ai,
        };
        *counter += 1;
        *counter
    }

    pub fn has_winner(&self, win_score: u32) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Human)
        } else if self.ai >= win_score {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// Uniform sample from `[-max, max]`
    pub fn symmetric(&mut self, max: f64) -> f64 {
        use rand::Rng;
        self.0.gen_range(-max..=max)
    }

    /// Either `1.0` or `-1.0` with equal probability
    pub fn sign(&mut self) -> f64 {
        use rand::Rng;
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something that happened during a tick that collaborators may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit,
    PaddleHit(Side),
    Point(Side),
    GameOver { winner: Side },
}

/// Events that occurred during this tick, in order
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn ball_hit_wall(&self) -> bool {
        self.list.contains(&GameEvent::WallHit)
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.list
            .iter()
            .any(|e| matches!(e, GameEvent::PaddleHit(_)))
    }

    /// Side that scored this tick, if any
    pub fn scored(&self) -> Option<Side> {
        self.list.iter().find_map(|e| match e {
            GameEvent::Point(side) => Some(*side),
            _ => None,
        })
    }

    pub fn winner(&self) -> Option<Side> {
        self.list.iter().find_map(|e| match e {
            GameEvent::GameOver { winner } => Some(*winner),
            _ => None,
        })
    }

    /// Drain events for dispatch, leaving the buffer empty
    pub fn take(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment_player() {
        let mut score = Score::new();
        assert_eq!(score.player, 0);
        assert_eq!(score.increment(Side::Human), 1);
        assert_eq!(score.increment(Side::Human), 2);
        assert_eq!(score.ai, 0, "Only the scorer's counter moves");
    }

    #[test]
    fn test_score_increment_ai() {
        let mut score = Score::new();
        score.increment(Side::Opponent);
        assert_eq!(score.ai, 1);
        assert_eq!(score.player, 0);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..6 {
            score.increment(Side::Opponent);
        }
        assert_eq!(score.has_winner(7), None, "No winner below threshold");
        score.increment(Side::Opponent);
        assert_eq!(score.has_winner(7), Some(Side::Opponent));
    }

    #[test]
    fn test_rng_symmetric_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.symmetric(std::f64::consts::FRAC_PI_4);
            assert!(v.abs() <= std::f64::consts::FRAC_PI_4);
        }
    }

    #[test]
    fn test_rng_is_deterministic() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        for _ in 0..10 {
            assert_eq!(a.symmetric(1.0), b.symmetric(1.0));
            assert_eq!(a.sign(), b.sign());
        }
    }

    #[test]
    fn test_events_queries() {
        let mut events = Events::new();
        events.push(GameEvent::WallHit);
        events.push(GameEvent::Point(Side::Human));

        assert!(events.ball_hit_wall());
        assert!(!events.ball_hit_paddle());
        assert_eq!(events.scored(), Some(Side::Human));
        assert_eq!(events.winner(), None);

        let drained = events.take();
        assert_eq!(drained.len(), 2);
        assert!(events.list.is_empty());
    }
}
