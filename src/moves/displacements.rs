//! Direction and offset tables for piece movement.

use crate::game_state::chess_types::Color;
use crate::game_state::chess_rules::forward_dir;
use crate::game_state::position::Displacement;

pub const ORTHO: [Displacement; 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

pub const DIAG: [Displacement; 4] = [(-1, -1), (1, 1), (1, -1), (-1, 1)];

/// Orthogonal then diagonal: the king's step set and the queen's rays.
pub const STAR: [Displacement; 8] = [
    (1, 0),
    (0, 1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
];

pub const KNIGHT_LS: [Displacement; 8] = [
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// The two diagonal capture steps of a pawn.
#[inline]
pub const fn pawn_captures(color: Color) -> [Displacement; 2] {
    let dy = forward_dir(color);
    [(1, dy), (-1, dy)]
}
