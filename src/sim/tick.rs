//! Fixed timestep simulation tick
//!
//! One call advances the match by exactly one tick, always in the same
//! order: paddle intents, ball flight, dimension lock, paddle collisions,
//! goal check. Velocities are per-tick displacements; the outer loop picks
//! the real-time pacing (`consts::TICK_HZ` is the nominal rate).

use serde::{Deserialize, Serialize};

use super::collision::resolve_paddle_collisions;
use super::goal::evaluate_goal;
use super::state::{GameEvent, MatchState, MoveDir, PlayerSide};

/// One player's movement intent for a tick: a unit step along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleMove {
    pub player: PlayerSide,
    pub axis: usize,
    pub dir: MoveDir,
}

/// Input commands for a single tick (deterministic)
///
/// The input layer samples its devices once per tick and submits every
/// held direction here; a player holding two keys moves diagonally via
/// two entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub moves: Vec<PaddleMove>,
}

impl TickInput {
    /// No input this tick
    pub fn none() -> Self {
        Self::default()
    }

    /// Add one movement intent, builder style
    pub fn with_move(mut self, player: PlayerSide, axis: usize, dir: MoveDir) -> Self {
        self.moves.push(PaddleMove { player, axis, dir });
        self
    }
}

/// Advance the match by one tick.
///
/// Returns the tick's events in the order they happened. The core only
/// ever acts on a goal by re-serving the ball; score keeping, sound and
/// display belong to the caller.
pub fn tick<const N: usize>(state: &mut MatchState<N>, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Paddle intents, in submission order. Each step clamps on its own,
    // so simultaneous moves commute.
    for mv in &input.moves {
        state.paddles[mv.player.index()].move_along(mv.axis, mv.dir, &state.config.arena);
    }

    // Ball flight and wall containment.
    let wall_hits = state.ball.integrate(&state.config.arena);
    for (axis, hit) in wall_hits.into_iter().enumerate() {
        if hit {
            events.push(GameEvent::WallBounce { axis });
        }
    }

    // Reduced-dimension modes pin the unused axes before any collision
    // math reads them.
    state.apply_dimension_lock();

    resolve_paddle_collisions(
        &mut state.ball,
        &state.paddles,
        &state.config.arena,
        &mut events,
    );

    let landing = evaluate_goal(&state.config.arena, state.config.active_dims, state.ball.pos);
    if let Some(scorer) = landing {
        log::debug!("{} scores at tick {}", scorer.as_str(), state.time_ticks);
        events.push(GameEvent::Goal { scorer });
        state.reset_ball();
    }

    state.time_ticks += 1;
    events
}
