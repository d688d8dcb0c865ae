//! Match configuration and validation
//!
//! Everything tunable about a match lives here and is handed to the
//! simulation at construction. An invalid arena is rejected up front;
//! nothing in the core reads global state.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{
    ARENA_BREADTH, ARENA_LENGTH, BALL_SPEED, GOAL_MAX, GOAL_MIN, MAX_DIMS, PADDLE_LEFT_START,
    PADDLE_MARGIN, PADDLE_RADIUS, PADDLE_RIGHT_START, SERVE_AXIS,
};
use crate::sim::VecN;

/// Rejected configuration: the reason a match refused to start
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena needs at least 2 axes, got {dims}")]
    TooFewAxes { dims: usize },
    #[error("active_dims must be in 2..={max}, got {dims}")]
    ActiveDimsOutOfRange { dims: usize, max: usize },
    #[error("serve axis {axis} is not active (active_dims = {active})")]
    ServeAxisInactive { axis: usize, active: usize },
    #[error("paddle radius must be positive and finite, got {0}")]
    NonPositivePaddleRadius(f32),
    #[error("ball speed must be non-negative and finite, got {0}")]
    InvalidBallSpeed(f32),
    #[error("paddle margin must be non-negative and finite, got {0}")]
    InvalidPaddleMargin(f32),
    #[error("extent on axis {axis} must be positive and finite, got {extent}")]
    NonPositiveExtent { axis: usize, extent: f32 },
    #[error("goal window on axis {axis} is empty or not finite: ({min}, {max})")]
    EmptyGoalWindow { axis: usize, min: f32, max: f32 },
    #[error("goal window ({min}, {max}) on axis {axis} reaches outside the arena extent {extent}")]
    GoalWindowOutsideArena {
        axis: usize,
        min: f32,
        max: f32,
        extent: f32,
    },
    #[error("paddle {player} start position is not finite on axis {axis}")]
    NonFinitePaddleStart { player: usize, axis: usize },
}

/// Which of the game's menu modes to play. Every mode runs the same
/// generic simulation; the mode only picks how many axes stay active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MatchMode {
    /// Two active axes, z and w locked to the arena centerline
    TwoD,
    /// Three active axes, w locked
    ThreeD,
    /// The full game
    #[default]
    FourD,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::TwoD => "2D",
            MatchMode::ThreeD => "3D",
            MatchMode::FourD => "4D",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "2d" | "2" => Some(MatchMode::TwoD),
            "3d" | "3" => Some(MatchMode::ThreeD),
            "4d" | "4" => Some(MatchMode::FourD),
            _ => None,
        }
    }

    /// Number of axes taking part in play for this mode
    pub fn active_dims(&self) -> usize {
        match self {
            MatchMode::TwoD => 2,
            MatchMode::ThreeD => 3,
            MatchMode::FourD => 4,
        }
    }
}

/// Static arena geometry
///
/// The playfield spans `[0, extents[i]]` on every axis. Axis 0 is the goal
/// axis; each end face carries a goal window bounded by `goal_min` and
/// `goal_max` on the remaining axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig<const N: usize> {
    /// Arena size per axis
    pub extents: VecN<N>,
    /// Goal window lower bounds (ignored on axis 0)
    pub goal_min: VecN<N>,
    /// Goal window upper bounds (ignored on axis 0)
    pub goal_max: VecN<N>,
    /// How far beyond the playfield a paddle may retreat on any axis
    pub paddle_margin: f32,
}

impl<const N: usize> ArenaConfig<N> {
    /// Arena midpoint, where the ball is served from
    pub fn center(&self) -> VecN<N> {
        self.extents * 0.5
    }
}

impl<const N: usize> Default for ArenaConfig<N> {
    fn default() -> Self {
        let mut extents = VecN::splat(ARENA_BREADTH);
        if N > 0 {
            extents[0] = ARENA_LENGTH;
        }
        Self {
            extents,
            goal_min: VecN::splat(GOAL_MIN),
            goal_max: VecN::splat(GOAL_MAX),
            paddle_margin: PADDLE_MARGIN,
        }
    }
}

/// Everything the simulation needs to start a match
///
/// Immutable once a match is built from it. The defaults reproduce the
/// stock game; [`GameConfig::validate`] runs before any state exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig<const N: usize> {
    pub arena: ArenaConfig<N>,
    /// Axes taking part in play; axes at or past this index are locked to
    /// the arena centerline every tick
    pub active_dims: usize,
    /// Axis the serve velocity points along (must be active)
    pub serve_axis: usize,
    /// Serve speed in units per tick
    pub ball_speed: f32,
    pub paddle_radius: f32,
    /// Start positions, Left then Right
    pub paddle_starts: [VecN<N>; 2],
}

impl<const N: usize> Default for GameConfig<N> {
    fn default() -> Self {
        let arena = ArenaConfig::default();
        let mut left = arena.center();
        let mut right = arena.center();
        if N > 0 {
            left[0] = PADDLE_LEFT_START;
            right[0] = PADDLE_RIGHT_START;
        }
        Self {
            arena,
            active_dims: N,
            serve_axis: if SERVE_AXIS < N { SERVE_AXIS } else { 0 },
            ball_speed: BALL_SPEED,
            paddle_radius: PADDLE_RADIUS,
            paddle_starts: [left, right],
        }
    }
}

impl GameConfig<MAX_DIMS> {
    /// The stock 600x300x300x300 arena, played in the given mode
    pub fn classic(mode: MatchMode) -> Self {
        Self {
            active_dims: mode.active_dims(),
            ..Self::default()
        }
    }
}

impl<const N: usize> GameConfig<N> {
    /// Check every construction-time invariant. A config that fails here
    /// never becomes a running match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if N < 2 {
            return Err(ConfigError::TooFewAxes { dims: N });
        }
        if self.active_dims < 2 || self.active_dims > N {
            return Err(ConfigError::ActiveDimsOutOfRange {
                dims: self.active_dims,
                max: N,
            });
        }
        if self.serve_axis >= self.active_dims {
            return Err(ConfigError::ServeAxisInactive {
                axis: self.serve_axis,
                active: self.active_dims,
            });
        }
        if !self.paddle_radius.is_finite() || self.paddle_radius <= 0.0 {
            return Err(ConfigError::NonPositivePaddleRadius(self.paddle_radius));
        }
        if !self.ball_speed.is_finite() || self.ball_speed < 0.0 {
            return Err(ConfigError::InvalidBallSpeed(self.ball_speed));
        }
        if !self.arena.paddle_margin.is_finite() || self.arena.paddle_margin < 0.0 {
            return Err(ConfigError::InvalidPaddleMargin(self.arena.paddle_margin));
        }
        for axis in 0..N {
            let extent = self.arena.extents[axis];
            if !extent.is_finite() || extent <= 0.0 {
                return Err(ConfigError::NonPositiveExtent { axis, extent });
            }
        }
        // Goal windows only matter on active non-goal axes; locked axes may
        // carry whatever the file says.
        for axis in 1..self.active_dims {
            let (min, max) = (self.arena.goal_min[axis], self.arena.goal_max[axis]);
            let extent = self.arena.extents[axis];
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(ConfigError::EmptyGoalWindow { axis, min, max });
            }
            if min < 0.0 || max > extent {
                return Err(ConfigError::GoalWindowOutsideArena {
                    axis,
                    min,
                    max,
                    extent,
                });
            }
        }
        for (player, start) in self.paddle_starts.iter().enumerate() {
            for axis in 0..N {
                if !start[axis].is_finite() {
                    return Err(ConfigError::NonFinitePaddleStart { player, axis });
                }
            }
        }
        Ok(())
    }

    /// Initial ball velocity: `ball_speed` along the serve axis
    pub fn serve_velocity(&self) -> VecN<N> {
        VecN::along_axis(self.serve_axis, self.ball_speed)
    }

    /// Load a config from a JSON file, falling back to the defaults when
    /// the file is missing or does not parse. Validation still happens at
    /// match construction.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("Ignoring config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("Could not read config {}: {err}", path.display());
                Self::default()
            }
        }
    }
}
