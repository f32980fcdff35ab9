//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the board model, the
//! layout importer and move generation/application.
//!
//! - `NoPieceAtSource` and `NotYourTurn` are ordinary outcomes of a caller
//!   proposing a bad move; the state is left untouched.
//! - `KingNotFound` means the position itself is broken (usually a malformed
//!   layout). The operation that needed the king is aborted.
//! - Parsing variants report the offending character.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// Tried to move from an empty square.
    #[error("no piece on source square {0}")]
    NoPieceAtSource(Square),

    /// Tried to move a piece that belongs to the side not on move.
    #[error("piece on square {square} belongs to {owner:?} but {active:?} is to move")]
    NotYourTurn {
        square: Square,
        owner: Color,
        active: Color,
    },

    /// The board has no king for this side.
    #[error("no {0:?} king on the board")]
    KingNotFound(Color),

    /// A character outside the 12 canonical piece letters.
    #[error("invalid piece code '{0}'")]
    InvalidPieceCode(char),

    /// A character the layout importer does not understand.
    #[error("invalid layout token '{0}'")]
    InvalidLayoutToken(char),

    /// A square index outside `0..=63`.
    #[error("square index {0} is off the board")]
    SquareOutOfRange(Square),
}

/// Rejects square indices outside the board.
#[inline]
pub fn check_square(square: Square) -> Result<Square, ChessErrors> {
    if (square as usize) < crate::game_state::chess_types::BOARD_SQUARES {
        Ok(square)
    } else {
        Err(ChessErrors::SquareOutOfRange(square))
    }
}
