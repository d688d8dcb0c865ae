//! Hyper Pong - a two-player reflex game in up to four spatial dimensions
//!
//! Core modules:
//! - `sim`: Deterministic N-dimensional simulation (physics, collisions, match state)
//! - `config`: Arena geometry and match tuning, validated before play
//!
//! The ball is a point mass in an axis-aligned box; the paddles are
//! hyperspheres guarding goal windows on the two end faces of axis 0.
//! The same generic code runs the 2D, 3D and 4D modes: inactive axes are
//! locked to their arena centerline every tick.

pub mod config;
pub mod sim;

pub use config::{ArenaConfig, ConfigError, GameConfig, MatchMode};

/// Game configuration constants
pub mod consts {
    /// Nominal fixed tick rate. Velocities are per-tick displacements, so
    /// this only sets real-time pacing, never the physics.
    pub const TICK_HZ: u32 = 60;
    /// Highest dimensionality the stock game plays in
    pub const MAX_DIMS: usize = 4;

    /// Arena dimensions
    pub const ARENA_LENGTH: f32 = 600.0;
    /// Extent along every axis other than the goal axis
    pub const ARENA_BREADTH: f32 = 300.0;
    /// Goal window bounds on each non-goal axis
    pub const GOAL_MIN: f32 = 100.0;
    pub const GOAL_MAX: f32 = 200.0;

    /// Paddle defaults
    pub const PADDLE_RADIUS: f32 = 40.0;
    /// How far outside the playfield a paddle may retreat on any axis
    pub const PADDLE_MARGIN: f32 = 50.0;
    /// Paddle start positions along the goal axis
    pub const PADDLE_LEFT_START: f32 = 100.0;
    pub const PADDLE_RIGHT_START: f32 = 500.0;

    /// Ball defaults
    pub const BALL_SPEED: f32 = 4.0;
    /// Axis the serve velocity points along (y)
    pub const SERVE_AXIS: usize = 1;

    /// Center-to-center distances below this count as degenerate contact:
    /// the ball sits at the paddle's center and no surface normal exists.
    pub const CONTACT_EPSILON: f32 = 1e-4;
}

/// Human-readable label for an axis index
#[inline]
pub fn axis_label(axis: usize) -> &'static str {
    match axis {
        0 => "x",
        1 => "y",
        2 => "z",
        3 => "w",
        _ => "?",
    }
}
