//! Match phase state machine
//!
//! Every phase change goes through [`MatchPhase::next`]; pairs missing from
//! the table are rejected and leave the phase untouched.

/// Match phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    /// Before the first start, or after a reset
    #[default]
    Idle,
    /// Ticks advance the simulation
    Running,
    /// Ticks only present the last state
    Paused,
    /// Terminal until the next start
    GameOver,
}

/// Events that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Start,
    TogglePause,
    Win,
    Reset,
}

/// Result of a phase transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub success: bool,
    pub from: MatchPhase,
    pub to: MatchPhase,
    pub event: PhaseEvent,
}

impl MatchPhase {
    /// Get next phase for a given event (if valid)
    pub fn next(self, event: PhaseEvent) -> Option<MatchPhase> {
        match (self, event) {
            // Starting always begins a fresh match
            (MatchPhase::Idle, PhaseEvent::Start) => Some(MatchPhase::Running),
            (MatchPhase::GameOver, PhaseEvent::Start) => Some(MatchPhase::Running),

            (MatchPhase::Running, PhaseEvent::TogglePause) => Some(MatchPhase::Paused),
            (MatchPhase::Paused, PhaseEvent::TogglePause) => Some(MatchPhase::Running),

            (MatchPhase::Running, PhaseEvent::Win) => Some(MatchPhase::GameOver),

            (_, PhaseEvent::Reset) => Some(MatchPhase::Idle),

            // Invalid transition
            _ => None,
        }
    }

    pub fn can(self, event: PhaseEvent) -> bool {
        self.next(event).is_some()
    }

    /// Attempt a transition in place
    pub fn apply(&mut self, event: PhaseEvent) -> Transition {
        let from = *self;
        match self.next(event) {
            Some(to) => {
                *self = to;
                log::debug!("phase {from:?} -> {to:?} on {event:?}");
                Transition {
                    success: true,
                    from,
                    to,
                    event,
                }
            }
            None => {
                log::debug!("ignored {event:?} while {from:?}");
                Transition {
                    success: false,
                    from,
                    to: from,
                    event,
                }
            }
        }
    }

    pub fn is_running(self) -> bool {
        self == MatchPhase::Running
    }

    /// Pause control is only live while a rally can be frozen or resumed
    pub fn pause_enabled(self) -> bool {
        matches!(self, MatchPhase::Running | MatchPhase::Paused)
    }

    /// Mute control is live once a match has been started
    pub fn mute_enabled(self) -> bool {
        matches!(
            self,
            MatchPhase::Running | MatchPhase::Paused | MatchPhase::GameOver
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_phase() {
        assert_eq!(MatchPhase::default(), MatchPhase::Idle);
    }

    #[test]
    fn test_valid_transition() {
        let mut phase = MatchPhase::Idle;
        let result = phase.apply(PhaseEvent::Start);
        assert!(result.success);
        assert_eq!(result.from, MatchPhase::Idle);
        assert_eq!(phase, MatchPhase::Running);
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut phase = MatchPhase::Idle;
        assert!(!phase.apply(PhaseEvent::TogglePause).success);
        assert!(!phase.apply(PhaseEvent::Win).success);
        assert_eq!(phase, MatchPhase::Idle);

        let mut phase = MatchPhase::Running;
        let result = phase.apply(PhaseEvent::Start);
        assert!(!result.success, "Start while running is rejected");
        assert_eq!(result.to, MatchPhase::Running);

        let mut phase = MatchPhase::GameOver;
        assert!(!phase.apply(PhaseEvent::TogglePause).success);
        assert_eq!(phase, MatchPhase::GameOver);
    }

    #[test]
    fn test_full_match_flow() {
        let mut phase = MatchPhase::Idle;
        phase.apply(PhaseEvent::Start);
        phase.apply(PhaseEvent::TogglePause);
        assert_eq!(phase, MatchPhase::Paused);
        assert!(!phase.can(PhaseEvent::Win), "No scoring while paused");
        phase.apply(PhaseEvent::TogglePause);
        assert_eq!(phase, MatchPhase::Running);
        phase.apply(PhaseEvent::Win);
        assert_eq!(phase, MatchPhase::GameOver);
        phase.apply(PhaseEvent::Reset);
        assert_eq!(phase, MatchPhase::Idle);
    }

    #[test]
    fn test_control_enablement() {
        assert!(!MatchPhase::Idle.pause_enabled());
        assert!(MatchPhase::Running.pause_enabled());
        assert!(MatchPhase::Paused.pause_enabled());
        assert!(!MatchPhase::GameOver.pause_enabled());

        assert!(!MatchPhase::Idle.mute_enabled());
        assert!(MatchPhase::GameOver.mute_enabled());
    }
}
