//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests and log output.

use crate::game_state::board::Board;

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 is printed first and labelled rank 8.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..8u8 {
        let rank_label = char::from(b'8' - row);
        out.push(rank_label);
        out.push(' ');

        for file in 0..8u8 {
            match board.at(row * 8 + file) {
                Some(piece) => out.push(piece.glyph()),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
