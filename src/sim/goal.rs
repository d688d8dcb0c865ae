//! Goal detection on the arena end faces
//!
//! Axis 0 is the goal axis. Each end face carries a goal volume bounded by
//! the arena's goal window on every other active axis; a ball reaching an
//! end face inside that window scores for the attacker of that face.

use super::state::PlayerSide;
use super::vec::VecN;
use crate::config::ArenaConfig;

/// Decide whether `pos` lies in either goal volume.
///
/// The window test is strict on both bounds: a ball exactly on a window
/// edge is a plain wall bounce, not a goal. Locked axes take no part in
/// the test, so a 2D match never demands anything of z or w.
pub fn evaluate_goal<const N: usize>(
    arena: &ArenaConfig<N>,
    active_dims: usize,
    pos: VecN<N>,
) -> Option<PlayerSide> {
    let through_window = (1..active_dims)
        .all(|axis| arena.goal_min[axis] < pos[axis] && pos[axis] < arena.goal_max[axis]);
    if !through_window {
        return None;
    }
    if pos[0] <= 0.0 {
        // Left face breached: the Right player scores.
        Some(PlayerSide::Right)
    } else if pos[0] >= arena.extents[0] {
        Some(PlayerSide::Left)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> ArenaConfig<2> {
        ArenaConfig::default()
    }

    #[test]
    fn test_left_face_scores_for_right() {
        // Stock 600x300 arena, window (100, 200) on y.
        assert_eq!(
            evaluate_goal(&arena(), 2, VecN::new([0.0, 150.0])),
            Some(PlayerSide::Right)
        );
        // An unclamped overshoot past the face scores the same way.
        assert_eq!(
            evaluate_goal(&arena(), 2, VecN::new([-1.0, 150.0])),
            Some(PlayerSide::Right)
        );
    }

    #[test]
    fn test_right_face_scores_for_left() {
        assert_eq!(
            evaluate_goal(&arena(), 2, VecN::new([600.0, 150.0])),
            Some(PlayerSide::Left)
        );
    }

    #[test]
    fn test_mid_field_is_never_a_goal() {
        assert_eq!(evaluate_goal(&arena(), 2, VecN::new([300.0, 150.0])), None);
        assert_eq!(evaluate_goal(&arena(), 2, VecN::new([599.9, 150.0])), None);
    }

    #[test]
    fn test_outside_window_is_no_goal() {
        assert_eq!(evaluate_goal(&arena(), 2, VecN::new([0.0, 50.0])), None);
        assert_eq!(evaluate_goal(&arena(), 2, VecN::new([600.0, 250.0])), None);
    }

    #[test]
    fn test_window_edge_is_no_goal() {
        // Strict bounds: exactly 100 or 200 bounces instead of scoring.
        assert_eq!(evaluate_goal(&arena(), 2, VecN::new([0.0, 100.0])), None);
        assert_eq!(evaluate_goal(&arena(), 2, VecN::new([0.0, 200.0])), None);
        assert_eq!(
            evaluate_goal(&arena(), 2, VecN::new([0.0, 100.1])),
            Some(PlayerSide::Right)
        );
    }

    #[test]
    fn test_every_active_axis_must_line_up() {
        let arena = ArenaConfig::<4>::default();
        // y and z inside the window, w outside: no goal in 4D...
        let pos = VecN::new([0.0, 150.0, 150.0, 250.0]);
        assert_eq!(evaluate_goal(&arena, 4, pos), None);
        // ...but the same position scores in 3D, where w is locked.
        assert_eq!(evaluate_goal(&arena, 3, pos), Some(PlayerSide::Right));
    }
}
