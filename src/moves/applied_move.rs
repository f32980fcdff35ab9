use crate::game_state::chess_types::{Square, Wing};
use crate::game_state::piece::Piece;

/// What a successful `apply_move` / `play` did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub from: Square,
    pub to: Square,
    /// The piece that moved.
    pub piece: Piece,
    /// Removed enemy piece, including a pawn taken en passant.
    pub captured: Option<Piece>,
    /// Set when the move was a king's two-file castling step.
    pub castled: Option<Wing>,
    pub en_passant: bool,
}

impl AppliedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}
