//! Canonical chess-rule constants.
//!
//! Home squares, pawn geometry and the standard starting layout. Row 0 is
//! black's back rank, so white pawns advance toward row 0.

use crate::game_state::chess_types::{Color, Wing};
use crate::game_state::position::Position;

/// Standard chess starting layout (piece placement field only).
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub const KING_HOME_FILE: i32 = 4;
pub const QUEEN_SIDE_ROOK_FILE: i32 = 0;
pub const KING_SIDE_ROOK_FILE: i32 = 7;

#[inline]
pub const fn home_row(color: Color) -> i32 {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> i32 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Row step of a pawn moving forward.
#[inline]
pub const fn forward_dir(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

#[inline]
pub const fn king_home(color: Color) -> Position {
    Position::new(KING_HOME_FILE, home_row(color))
}

#[inline]
pub const fn rook_home(color: Color, wing: Wing) -> Position {
    let file = match wing {
        Wing::KingSide => KING_SIDE_ROOK_FILE,
        Wing::QueenSide => QUEEN_SIDE_ROOK_FILE,
    };
    Position::new(file, home_row(color))
}
