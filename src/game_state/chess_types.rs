//! Small value types shared by the board model and move generation.

/// Linear board index (`0..=63`), `x + y * 8`.
pub type Square = u8;

/// Number of squares on the board.
pub const BOARD_SQUARES: usize = 64;

/// The two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind (color is carried separately on [`crate::game_state::piece::Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Lower-case letter for this kind.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    #[inline]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// Which rook takes part in castling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wing {
    KingSide,
    QueenSide,
}

impl Wing {
    pub const ALL: [Wing; 2] = [Wing::KingSide, Wing::QueenSide];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Wing::KingSide => 0,
            Wing::QueenSide => 1,
        }
    }

    /// File direction the king travels when castling on this wing.
    #[inline]
    pub const fn direction(self) -> i32 {
        match self {
            Wing::KingSide => 1,
            Wing::QueenSide => -1,
        }
    }
}

/// Per-side, per-wing castling rights packed into a bitmask.
///
/// Bits can only be cleared after construction, so a right that has been
/// lost can never come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[inline]
    pub const fn none() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn all() -> Self {
        Self(0b1111)
    }

    #[inline]
    const fn bit(color: Color, wing: Wing) -> u8 {
        1 << (color.index() * 2 + wing.index())
    }

    /// Builds rights from a predicate; used once when a game is set up.
    pub fn from_fn(mut granted: impl FnMut(Color, Wing) -> bool) -> Self {
        let mut bits = 0;
        for color in Color::ALL {
            for wing in Wing::ALL {
                if granted(color, wing) {
                    bits |= Self::bit(color, wing);
                }
            }
        }
        Self(bits)
    }

    #[inline]
    pub const fn has(self, color: Color, wing: Wing) -> bool {
        self.0 & Self::bit(color, wing) != 0
    }

    #[inline]
    pub fn clear(&mut self, color: Color, wing: Wing) {
        self.0 &= !Self::bit(color, wing);
    }

    #[inline]
    pub fn clear_side(&mut self, color: Color) {
        self.clear(color, Wing::KingSide);
        self.clear(color, Wing::QueenSide);
    }
}
