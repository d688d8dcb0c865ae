//! Match state and core simulation types
//!
//! All state that changes during a match lives here. The module is pure:
//! no I/O, no randomness, no clock. Scores deliberately do not appear;
//! goals are reported as [`GameEvent`]s and tallied by whoever drives the
//! match.

use serde::{Deserialize, Serialize};

use super::vec::VecN;
use crate::config::{ArenaConfig, ConfigError, GameConfig};
use crate::consts::*;

/// Which player a paddle or a goal belongs to
///
/// `Left` defends the `pos[0] == 0` face, `Right` the far face. Doubles as
/// the paddle's identity tag for presentation (colors, key maps).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerSide {
    Left,
    Right,
}

impl PlayerSide {
    /// Index into per-player arrays; also the collision resolution order
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PlayerSide::Left => 0,
            PlayerSide::Right => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerSide::Left => PlayerSide::Right,
            PlayerSide::Right => PlayerSide::Left,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PlayerSide::Left => "Left",
            PlayerSide::Right => "Right",
        }
    }
}

/// Direction of a unit paddle step along an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDir {
    Positive,
    Negative,
}

impl MoveDir {
    /// The signed displacement this direction applies
    #[inline]
    pub fn step(self) -> f32 {
        match self {
            MoveDir::Positive => 1.0,
            MoveDir::Negative => -1.0,
        }
    }
}

/// What happened during a tick, in the order it happened
///
/// The core never acts on these beyond the round reset; scoreboards,
/// sound and UI layers consume them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The ball hit an arena wall and that velocity component flipped
    WallBounce { axis: usize },
    /// The ball reflected off a paddle
    PaddleHit { side: PlayerSide },
    /// The ball crossed an end face inside the goal window; the ball has
    /// already been re-served when this is observed
    Goal { scorer: PlayerSide },
}

/// The ball: a point mass in N-space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball<const N: usize> {
    pub pos: VecN<N>,
    pub vel: VecN<N>,
}

impl<const N: usize> Ball<N> {
    pub fn new(pos: VecN<N>, vel: VecN<N>) -> Self {
        Self { pos, vel }
    }

    /// Advance one tick and keep the ball inside the arena. Any axis that
    /// reaches or leaves `[0, extent]` has its position saturated to the
    /// wall and its velocity component sign-flipped. Returns which axes
    /// touched a wall.
    pub fn integrate(&mut self, arena: &ArenaConfig<N>) -> [bool; N] {
        let mut wall_hit = [false; N];
        self.pos += self.vel;
        for axis in 0..N {
            let extent = arena.extents[axis];
            if self.pos[axis] >= extent {
                self.pos[axis] = extent;
                self.vel[axis] = -self.vel[axis];
                wall_hit[axis] = true;
            } else if self.pos[axis] <= 0.0 {
                self.pos[axis] = 0.0;
                self.vel[axis] = -self.vel[axis];
                wall_hit[axis] = true;
            }
        }
        wall_hit
    }

    /// Reflect off a paddle the ball overlaps (`depth >= 0`)
    ///
    /// The outward surface normal is `(pos - paddle_pos) / (radius - depth)`.
    /// That denominator is exactly the current center distance, so the
    /// normal comes out unit length without a normalize. When the distance
    /// is degenerate (ball at the paddle's center) there is no usable
    /// normal: the ball keeps its velocity this tick and we log instead.
    ///
    /// After reflecting, the ball is pushed `depth` along the normal to sit
    /// on the paddle surface, then re-clamped into the arena so a paddle
    /// can never shove it off the field.
    ///
    /// Returns whether a reflection was applied.
    pub fn bounce(
        &mut self,
        paddle_pos: VecN<N>,
        depth: f32,
        paddle_radius: f32,
        arena: &ArenaConfig<N>,
    ) -> bool {
        let distance = paddle_radius - depth;
        if distance.abs() < CONTACT_EPSILON {
            log::warn!("ball at paddle center (distance {distance:.6}), skipping reflection");
            return false;
        }
        let normal = (self.pos - paddle_pos) / distance;
        self.vel = self.vel.reflect(normal);
        self.pos += normal * depth;
        self.clamp_to_arena(arena);
        true
    }

    /// Saturate the position into `[0, extent]` on every axis, leaving
    /// velocity alone
    pub fn clamp_to_arena(&mut self, arena: &ArenaConfig<N>) {
        for axis in 0..N {
            self.pos[axis] = self.pos[axis].clamp(0.0, arena.extents[axis]);
        }
    }

    /// Put the ball back on its serve state
    pub fn reset(&mut self, center: VecN<N>, serve_vel: VecN<N>) {
        self.pos = center;
        self.vel = serve_vel;
    }
}

/// A player's hypersphere paddle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle<const N: usize> {
    pub pos: VecN<N>,
    pub radius: f32,
    /// Which face this paddle defends
    pub side: PlayerSide,
}

impl<const N: usize> Paddle<N> {
    pub fn new(side: PlayerSide, pos: VecN<N>, radius: f32) -> Self {
        Self { pos, radius, side }
    }

    /// Step one unit along `axis`, then clamp every axis into the movement
    /// envelope `[-margin, extent + margin]`. Steps along axes the arena
    /// does not have are dropped with a warning; bad input never stops the
    /// match.
    pub fn move_along(&mut self, axis: usize, dir: MoveDir, arena: &ArenaConfig<N>) {
        if axis >= N {
            log::warn!("ignoring paddle step along axis {axis}: arena has {N} axes");
            return;
        }
        self.pos[axis] += dir.step();
        self.clamp_to_envelope(arena);
    }

    /// Saturate into the movement envelope on every axis
    pub fn clamp_to_envelope(&mut self, arena: &ArenaConfig<N>) {
        let margin = arena.paddle_margin;
        for axis in 0..N {
            self.pos[axis] = self.pos[axis].clamp(-margin, arena.extents[axis] + margin);
        }
    }

    /// How deep `point` sits inside this paddle: `radius - distance`.
    /// Non-negative means contact; callers test `depth >= 0.0`.
    #[inline]
    pub fn collision_depth(&self, point: VecN<N>) -> f32 {
        self.radius - self.pos.distance(point)
    }
}

/// Complete match state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState<const N: usize> {
    /// Immutable tuning this match was built from
    pub config: GameConfig<N>,
    pub ball: Ball<N>,
    /// Left then Right
    pub paddles: [Paddle<N>; 2],
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl<const N: usize> MatchState<N> {
    /// Validate `config` and set up the serve. Paddle starts are clamped
    /// into the movement envelope and locked axes are centered before the
    /// first tick runs.
    pub fn new(config: GameConfig<N>) -> Result<Self, ConfigError> {
        config.validate()?;
        let ball = Ball::new(config.arena.center(), config.serve_velocity());
        let mut paddles = [
            Paddle::new(
                PlayerSide::Left,
                config.paddle_starts[0],
                config.paddle_radius,
            ),
            Paddle::new(
                PlayerSide::Right,
                config.paddle_starts[1],
                config.paddle_radius,
            ),
        ];
        for paddle in &mut paddles {
            paddle.clamp_to_envelope(&config.arena);
        }
        let mut state = Self {
            config,
            ball,
            paddles,
            time_ticks: 0,
        };
        state.apply_dimension_lock();
        Ok(state)
    }

    /// The paddle belonging to `side`
    pub fn paddle(&self, side: PlayerSide) -> &Paddle<N> {
        &self.paddles[side.index()]
    }

    /// Re-serve the ball from the arena center
    pub fn reset_ball(&mut self) {
        self.ball
            .reset(self.config.arena.center(), self.config.serve_velocity());
    }

    /// Pin every inactive axis to the center of its extent, for the ball
    /// and both paddles, and zero the ball's velocity there. Collision
    /// resolution runs full-N math and would otherwise drift the locked
    /// axes, so this runs every tick, not just at serve.
    pub fn apply_dimension_lock(&mut self) {
        for axis in self.config.active_dims..N {
            let center = self.config.arena.extents[axis] * 0.5;
            self.ball.pos[axis] = center;
            self.ball.vel[axis] = 0.0;
            for paddle in &mut self.paddles {
                paddle.pos[axis] = center;
            }
        }
    }
}
