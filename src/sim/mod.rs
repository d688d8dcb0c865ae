//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed tick only, velocities are per-tick displacements
//! - No randomness, no clock, no I/O
//! - One generic code path for every dimensionality
//! - No rendering or platform dependencies

pub mod collision;
pub mod goal;
pub mod state;
pub mod tick;
pub mod vec;

pub use collision::resolve_paddle_collisions;
pub use goal::evaluate_goal;
pub use state::{Ball, GameEvent, MatchState, MoveDir, Paddle, PlayerSide};
pub use tick::{PaddleMove, TickInput, tick};
pub use vec::VecN;
