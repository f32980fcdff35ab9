//! Squares a piece attacks.
//!
//! Used for check and castling-safety tests only. Sliding pieces cast one ray
//! per direction and stop on (and include) the first occupied square, friend
//! or foe. Knights, kings and pawns emit their fixed on-board offsets; a pawn
//! controls only its two forward diagonals.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::position::{Displacement, Position};
use crate::moves::displacements::{pawn_captures, DIAG, KNIGHT_LS, ORTHO, STAR};

pub fn controlled_squares(board: &Board, square: Square) -> Vec<Square> {
    let Some(piece) = board.at(square) else {
        return Vec::new();
    };
    let from = Position::from_index(square);

    match piece.kind() {
        PieceKind::Pawn => sweep(from, &pawn_captures(piece.color())),
        PieceKind::Knight => sweep(from, &KNIGHT_LS),
        PieceKind::King => sweep(from, &STAR),
        PieceKind::Rook => seek_all(board, from, &ORTHO),
        PieceKind::Bishop => seek_all(board, from, &DIAG),
        PieceKind::Queen => seek_all(board, from, &STAR),
    }
}

/// One step per displacement, kept if on the board.
fn sweep(from: Position, displacements: &[Displacement]) -> Vec<Square> {
    displacements
        .iter()
        .filter_map(|d| (from + *d).square())
        .collect()
}

fn seek_all(board: &Board, from: Position, directions: &[Displacement]) -> Vec<Square> {
    let mut out = Vec::with_capacity(14);
    for direction in directions {
        seek(board, from, *direction, &mut out);
    }
    out
}

/// Walks a ray until it leaves the board or hits a piece (which is kept).
fn seek(board: &Board, from: Position, direction: Displacement, out: &mut Vec<Square>) {
    let mut candidate = from + direction;
    while let Some(square) = candidate.square() {
        out.push(square);
        if board.at(square).is_some() {
            break;
        }
        candidate = candidate + direction;
    }
}
