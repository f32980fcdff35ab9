//! Immutable piece values.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind};

/// A piece kind owned by one side. Pieces are replaced on the board, never
/// edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Builds a piece from one of the 12 canonical letters. Upper case is
    /// white, lower case is black.
    pub fn from_code(code: char) -> Result<Self, ChessErrors> {
        let color = if code.is_ascii_uppercase() {
            Color::White
        } else if code.is_ascii_lowercase() {
            Color::Black
        } else {
            return Err(ChessErrors::InvalidPieceCode(code));
        };

        let kind = PieceKind::from_letter(code.to_ascii_lowercase())
            .ok_or(ChessErrors::InvalidPieceCode(code))?;

        Ok(Self::new(kind, color))
    }

    /// The letter this piece was (or would be) built from.
    #[inline]
    pub fn code(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn opponent(self) -> Color {
        self.color.opposite()
    }

    #[inline]
    pub fn is(self, kind: PieceKind) -> bool {
        self.kind == kind
    }

    /// Unicode chess glyph.
    pub const fn glyph(self) -> char {
        match (self.color, self.kind) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}
