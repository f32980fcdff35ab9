//! Move application.
//!
//! `apply_move` is the unconditional board primitive used both for real moves
//! and on look-ahead snapshots. `play` is the turn-level entry point: it
//! checks piece presence and ownership, applies the move, then updates the
//! en-passant target, castling rights and side to move.

use tracing::{debug, warn};

use crate::chess_errors::{check_square, ChessErrors};
use crate::game_state::chess_rules::{forward_dir, pawn_start_row, rook_home};
use crate::game_state::chess_types::{PieceKind, Square, Wing};
use crate::game_state::game_state::GameState;
use crate::game_state::position::Position;
use crate::moves::applied_move::AppliedMove;

/// Relocates the piece on `from` to `to` with no legality checks.
///
/// A pawn landing on the en-passant target also removes the pawn behind it.
/// A king moving two files also moves that wing's rook next to it. Fails
/// without touching the board when `from` is empty (for castling, when the
/// rook's home square is empty).
pub fn apply_move(game_state: &mut GameState, from: Square, to: Square) -> Result<AppliedMove, ChessErrors> {
    check_square(from)?;
    check_square(to)?;

    let piece = game_state
        .board
        .at(from)
        .ok_or(ChessErrors::NoPieceAtSource(from))?;
    let from_pos = Position::from_index(from);
    let to_pos = Position::from_index(to);

    let castled = if piece.is(PieceKind::King) && (to_pos.x - from_pos.x).abs() == 2 {
        let wing = if to_pos.x > from_pos.x {
            Wing::KingSide
        } else {
            Wing::QueenSide
        };
        let rook_from = rook_home(piece.color(), wing).to_index();
        let rook_to = (to_pos + (-wing.direction(), 0)).to_index();
        apply_move(game_state, rook_from, rook_to)?;
        debug!(?wing, rook_from, rook_to, "castling rook relocated");
        Some(wing)
    } else {
        None
    };

    let mut captured = game_state.board.at(to);
    let mut en_passant = false;
    if piece.is(PieceKind::Pawn) && to_pos.matches(game_state.en_passant_target) {
        let victim = to_pos + (0, -forward_dir(piece.color()));
        if let Some(victim_square) = victim.square() {
            captured = game_state.board.take(victim_square);
            en_passant = captured.is_some();
            debug!(victim_square, "en-passant capture");
        }
    }

    game_state.board.place(from, None);
    game_state.board.place(to, Some(piece));

    Ok(AppliedMove {
        from,
        to,
        piece,
        captured,
        castled,
        en_passant,
    })
}

/// Commits a move for the side to move.
///
/// The caller is expected to pass a destination returned by
/// `legal_squares(from)` this turn; only piece presence and ownership are
/// re-checked here. Failures leave the state untouched.
pub fn play(game_state: &mut GameState, from: Square, to: Square) -> Result<AppliedMove, ChessErrors> {
    check_square(from)?;
    check_square(to)?;

    let Some(piece) = game_state.board.at(from) else {
        warn!(from, to, "play rejected: source square is empty");
        return Err(ChessErrors::NoPieceAtSource(from));
    };
    let active = game_state.active_player;
    if piece.color() != active {
        warn!(from, to, owner = ?piece.color(), ?active, "play rejected: not this side's turn");
        return Err(ChessErrors::NotYourTurn {
            square: from,
            owner: piece.color(),
            active,
        });
    }

    let applied = apply_move(game_state, from, to)?;

    let color = piece.color();
    let from_pos = Position::from_index(from);
    let dy = forward_dir(color);
    game_state.en_passant_target = if piece.is(PieceKind::Pawn)
        && from_pos.y == pawn_start_row(color)
        && Position::from_index(to) == from_pos + (0, 2 * dy)
    {
        Some(from_pos + (0, dy))
    } else {
        None
    };

    match piece.kind() {
        PieceKind::King => game_state.castling_rights.clear_side(color),
        PieceKind::Rook => {
            for wing in Wing::ALL {
                if from_pos == rook_home(color, wing) {
                    game_state.castling_rights.clear(color, wing);
                }
            }
        }
        _ => {}
    }

    game_state.active_player = color.opposite();

    debug!(
        from,
        to,
        piece = %piece.code(),
        captured = ?applied.captured.map(|p| p.code()),
        en_passant_target = ?game_state.en_passant_target,
        "move played"
    );

    Ok(applied)
}
