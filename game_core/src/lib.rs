pub mod components;
pub mod config;
pub mod court;
pub mod fsm;
pub mod game;
pub mod input;
pub mod params;
pub mod render;
pub mod resources;
pub mod sinks;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use fsm::*;
pub use game::*;
pub use input::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use sinks::*;
pub use state::*;

use systems::*;

/// Run one deterministic simulation tick.
///
/// Does nothing unless the match is running. Events produced by the tick
/// are left in `events` for the caller to dispatch.
pub fn advance(state: &mut MatchState, config: &Config, rng: &mut GameRng, events: &mut Events) {
    if !state.phase.is_running() {
        return;
    }

    // Clear events at start of tick
    events.clear();

    // 1. Ease human paddle toward its target
    ease_player(state, config);

    // 2. Move ball
    move_ball(state);

    // 3. Bounce off top and bottom walls
    check_wall_collisions(state, events);

    // 4. Bounce off paddles (human first)
    check_paddle_collisions(state, config, events);

    // 5. Check scoring (ball left the court)
    check_scoring(state, config, rng, events);

    // 6. Opponent chases the ball
    track_ball(state, config);

    // 7. Keep both paddles on the court
    clamp_paddles(state, config);
}
