//! King safety: check detection, square safety and castling availability.

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, rook_home};
use crate::game_state::chess_types::{Color, PieceKind, Square, Wing};
use crate::game_state::game_state::GameState;
use crate::game_state::piece::Piece;
use crate::move_generation::controlled_squares::controlled_squares;

#[inline]
pub fn find_king(board: &Board, color: Color) -> Result<Square, ChessErrors> {
    board
        .find(PieceKind::King, color)
        .ok_or(ChessErrors::KingNotFound(color))
}

/// True iff no piece of `color`'s opponent controls `square`.
pub fn safe(board: &Board, square: Square, color: Color) -> bool {
    !board
        .pieces_of(color.opposite())
        .any(|(from, _)| controlled_squares(board, from).contains(&square))
}

pub fn under_check(board: &Board, color: Color) -> Result<bool, ChessErrors> {
    let king_square = find_king(board, color)?;
    Ok(!safe(board, king_square, color))
}

/// Whether `color` may castle on `wing` right now.
///
/// Needs the right still set, king and rook on their home squares, every
/// square between them empty, and the king's transit and landing squares
/// safe. The king's own square is not tested. On the queen side the square
/// next to the rook must be empty but may be attacked.
pub fn can_castle(game_state: &GameState, color: Color, wing: Wing) -> Result<bool, ChessErrors> {
    if !game_state.castling_rights.has(color, wing) {
        return Ok(false);
    }

    let board = &game_state.board;
    let king_square = find_king(board, color)?;
    let home = king_home(color);
    if home.square() != Some(king_square) {
        return Ok(false);
    }
    if board.at_position(rook_home(color, wing)) != Some(Piece::new(PieceKind::Rook, color)) {
        return Ok(false);
    }

    let dir = wing.direction();
    let between: &[i32] = match wing {
        Wing::KingSide => &[1, 2],
        Wing::QueenSide => &[1, 2, 3],
    };
    if !between.iter().all(|step| board.is_empty_at(home + (dir * step, 0))) {
        return Ok(false);
    }

    let king_path = [1, 2].map(|step| home + (dir * step, 0));
    Ok(king_path
        .iter()
        .all(|pos| pos.square().is_some_and(|sq| safe(board, sq, color))))
}
