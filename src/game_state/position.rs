//! Two-dimensional board coordinates.
//!
//! A `Position` may sit off the board after displacement arithmetic; callers
//! test [`Position::is_valid`] (or use [`Position::square`]) before indexing.
//! Row 0 is the first rank segment of a layout string.

use std::ops::{Add, Mul};

use crate::game_state::chess_types::Square;

/// Relative step `(dx, dy)`.
pub type Displacement = (i32, i32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn from_index(square: Square) -> Self {
        Self::new((square % 8) as i32, (square / 8) as i32)
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.x >= 0 && self.x < 8 && self.y >= 0 && self.y < 8
    }

    /// Linear index. Only meaningful when [`Position::is_valid`] holds.
    #[inline]
    pub const fn to_index(self) -> Square {
        (self.x + self.y * 8) as Square
    }

    /// Linear index if the position is on the board.
    #[inline]
    pub const fn square(self) -> Option<Square> {
        if self.is_valid() {
            Some(self.to_index())
        } else {
            None
        }
    }

    #[inline]
    pub const fn scale(self, k: i32) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// Equality against a possibly absent position; absent never matches.
    #[inline]
    pub fn matches(self, other: Option<Position>) -> bool {
        other.is_some_and(|p| p == self)
    }
}

impl Add<Displacement> for Position {
    type Output = Position;

    #[inline]
    fn add(self, (dx, dy): Displacement) -> Self::Output {
        Position::new(self.x + dx, self.y + dy)
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    #[inline]
    fn mul(self, k: i32) -> Self::Output {
        self.scale(k)
    }
}

#[cfg(test)]
mod tests {
    use super::Position;

    #[test]
    fn index_conversion_uses_row_major_layout() {
        let pos = Position::from_index(60);
        assert_eq!(pos, Position::new(4, 7));
        assert_eq!(pos.to_index(), 60);
        for square in 0..64u8 {
            assert_eq!(Position::from_index(square).square(), Some(square));
        }
    }

    #[test]
    fn displacement_can_leave_the_board() {
        let corner = Position::new(0, 0);
        assert!(!(corner + (-1, 0)).is_valid());
        assert!(!(corner + (0, 8)).is_valid());
        assert_eq!((corner + (-1, 0)).square(), None);
        assert_eq!(Position::new(7, 7) + (-2, -1), Position::new(5, 6));
    }

    #[test]
    fn scale_multiplies_both_axes() {
        assert_eq!(Position::new(1, -2).scale(3), Position::new(3, -6));
        assert_eq!(Position::new(2, 1) * 2, Position::new(4, 2));
    }

    #[test]
    fn matches_treats_absent_as_unequal() {
        let pos = Position::new(3, 5);
        assert!(pos.matches(Some(Position::new(3, 5))));
        assert!(!pos.matches(Some(Position::new(5, 3))));
        assert!(!pos.matches(None));
    }
}
