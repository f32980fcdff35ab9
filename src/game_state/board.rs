//! Square-indexed piece placement.

use crate::game_state::chess_types::{Color, PieceKind, Square, BOARD_SQUARES};
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

/// 64 optional pieces indexed by `x + y * 8`.
///
/// `Board` is a plain value: cloning it gives an independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; BOARD_SQUARES],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [None; BOARD_SQUARES],
        }
    }
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    /// Piece at a position; off-board positions read as empty.
    #[inline]
    pub fn at_position(&self, position: Position) -> Option<Piece> {
        position.square().and_then(|square| self.at(square))
    }

    #[inline]
    pub fn is_empty_at(&self, position: Position) -> bool {
        self.at_position(position).is_none()
    }

    /// Overwrites a square. Out-of-range squares are ignored.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Option<Piece>) {
        if let Some(slot) = self.squares.get_mut(square as usize) {
            *slot = piece;
        }
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares.get_mut(square as usize).and_then(Option::take)
    }

    /// Occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(square, piece)| piece.map(|p| (square as Square, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color() == color)
    }

    pub fn find(&self, kind: PieceKind, color: Color) -> Option<Square> {
        let wanted = Piece::new(kind, color);
        self.pieces()
            .find(|(_, piece)| *piece == wanted)
            .map(|(square, _)| square)
    }

    /// Piece codes in index order, for rendering.
    pub fn flat(&self) -> [Option<char>; BOARD_SQUARES] {
        self.squares.map(|piece| piece.map(Piece::code))
    }
}
