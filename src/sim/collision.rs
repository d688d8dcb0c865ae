//! Paddle collision resolution
//!
//! Detection is discrete: the ball is tested once per tick at its current
//! position. A ball fast enough to cross a whole paddle between two ticks
//! tunnels through without contact; that is a known boundary condition of
//! the game, not something swept tests paper over here.

use super::state::{Ball, GameEvent, Paddle};
use crate::config::ArenaConfig;

/// Test the ball against both paddles and bounce it off any it overlaps.
///
/// The order is fixed, Left then Right. When the ball somehow overlaps
/// both paddles in the same tick it reflects off Left first and meets
/// Right with the already-updated position and velocity. Every applied
/// bounce pushes a [`GameEvent::PaddleHit`].
pub fn resolve_paddle_collisions<const N: usize>(
    ball: &mut Ball<N>,
    paddles: &[Paddle<N>; 2],
    arena: &ArenaConfig<N>,
    events: &mut Vec<GameEvent>,
) {
    for paddle in paddles {
        let depth = paddle.collision_depth(ball.pos);
        if depth >= 0.0 {
            log::trace!(
                "ball contacts {} paddle at depth {depth:.3}",
                paddle.side.as_str()
            );
            if ball.bounce(paddle.pos, depth, paddle.radius, arena) {
                events.push(GameEvent::PaddleHit { side: paddle.side });
            }
        }
    }
}
