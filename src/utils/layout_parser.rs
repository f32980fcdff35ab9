//! Board-layout importer.
//!
//! Reads the piece-placement field of a FEN-like string: '/' separates
//! ranks, digits 1-8 skip that many empty files, and the 12 canonical
//! letters place pieces. The first rank segment becomes row 0.
//!
//! Square counts and king counts are not validated. A piece whose cursor
//! lands off the board is dropped.

use tracing::warn;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;

pub fn parse_layout(layout: &str) -> Result<Board, ChessErrors> {
    let mut board = Board::empty();
    let mut file = 0i32;
    let mut rank = 0i32;

    for ch in layout.trim().chars() {
        if ch == '/' {
            file = 0;
            rank += 1;
            continue;
        }

        if let Some(run) = ch.to_digit(10) {
            if !(1..=8).contains(&run) {
                return Err(ChessErrors::InvalidLayoutToken(ch));
            }
            file += run as i32;
            continue;
        }

        let piece = Piece::from_code(ch).map_err(|_| ChessErrors::InvalidLayoutToken(ch))?;
        match Position::new(file, rank).square() {
            Some(square) => board.place(square, Some(piece)),
            None => warn!(file, rank, code = %ch, "layout piece lands off the board; dropped"),
        }
        file += 1;
    }

    Ok(board)
}
