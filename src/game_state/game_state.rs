//! Engine state for one game in progress.
//!
//! `GameState` owns the board, the side to move, the castling-rights table
//! and the en-passant target. It is a plain value: `clone()` produces an
//! independent snapshot, which is how look-ahead check testing works.
//! Rule logic lives in `move_generation`; the methods here are the public
//! entry points a UI collaborator calls.

use crate::chess_errors::{check_square, ChessErrors};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{king_home, rook_home, STARTING_LAYOUT};
use crate::game_state::chess_types::*;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::controlled_squares::controlled_squares;
use crate::move_generation::legal_move_apply::{apply_move, play};
use crate::move_generation::legal_move_checks::{can_castle, find_king, safe, under_check};
use crate::move_generation::legal_move_generator::{legal_moves, legal_squares};
use crate::move_generation::pseudo_legal_squares::pseudo_legal_squares;
use crate::moves::applied_move::AppliedMove;
use crate::utils::layout_parser::parse_layout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) active_player: Color,
    pub(crate) en_passant_target: Option<Position>,
    pub(crate) castling_rights: CastlingRights,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Builds a game from a layout string with white to move.
    ///
    /// A castling right starts set only when the king and that wing's rook
    /// both stand on their home squares.
    pub fn new(layout: &str) -> Result<Self, ChessErrors> {
        let board = parse_layout(layout)?;
        Ok(Self::from_board(board))
    }

    #[inline]
    pub fn new_game() -> Self {
        Self::new(STARTING_LAYOUT).expect("starting layout should always parse")
    }

    pub fn from_board(board: Board) -> Self {
        let castling_rights = CastlingRights::from_fn(|color, wing| {
            board.at_position(king_home(color)) == Some(Piece::new(PieceKind::King, color))
                && board.at_position(rook_home(color, wing))
                    == Some(Piece::new(PieceKind::Rook, color))
        });

        Self {
            board,
            active_player: Color::White,
            en_passant_target: None,
            castling_rights,
        }
    }

    /// Same position with a different side to move.
    #[inline]
    pub fn with_active_player(mut self, color: Color) -> Self {
        self.active_player = color;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn active_player(&self) -> Color {
        self.active_player
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn at(&self, square: Square) -> Option<Piece> {
        self.board.at(square)
    }

    #[inline]
    pub fn flat(&self) -> [Option<char>; BOARD_SQUARES] {
        self.board.flat()
    }

    pub fn controlled_squares(&self, square: Square) -> Result<Vec<Square>, ChessErrors> {
        Ok(controlled_squares(&self.board, check_square(square)?))
    }

    pub fn pseudo_legal_squares(&self, square: Square) -> Result<Vec<Square>, ChessErrors> {
        pseudo_legal_squares(self, check_square(square)?)
    }

    /// Destinations the piece on `square` may legally move to this turn.
    /// Empty for an empty square or a piece of the side not on move.
    pub fn legal_squares(&self, square: Square) -> Result<Vec<Square>, ChessErrors> {
        legal_squares(self, square)
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_moves(&self) -> Result<Vec<(Square, Square)>, ChessErrors> {
        legal_moves(self)
    }

    /// Commits a move for the side to move. See [`play`].
    pub fn play(&mut self, from: Square, to: Square) -> Result<AppliedMove, ChessErrors> {
        play(self, from, to)
    }

    /// Relocates a piece without turn or legality checks. See [`apply_move`].
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<AppliedMove, ChessErrors> {
        apply_move(self, from, to)
    }

    pub fn find_king(&self, color: Color) -> Result<Square, ChessErrors> {
        find_king(&self.board, color)
    }

    pub fn under_check(&self, color: Color) -> Result<bool, ChessErrors> {
        under_check(&self.board, color)
    }

    /// True when no piece of `color`'s opponent controls `square`.
    pub fn safe(&self, square: Square, color: Color) -> Result<bool, ChessErrors> {
        Ok(safe(&self.board, check_square(square)?, color))
    }

    pub fn can_castle(&self, color: Color, wing: Wing) -> Result<bool, ChessErrors> {
        can_castle(self, color, wing)
    }
}
