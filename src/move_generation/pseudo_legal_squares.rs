//! Pseudo-legal destinations: piece movement rules without check safety.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_rules::{forward_dir, pawn_start_row};
use crate::game_state::chess_types::{PieceKind, Square, Wing};
use crate::game_state::game_state::GameState;
use crate::game_state::piece::Piece;
use crate::game_state::position::Position;
use crate::move_generation::controlled_squares::controlled_squares;
use crate::move_generation::legal_move_checks::can_castle;
use crate::moves::displacements::pawn_captures;

/// Squares the piece on `square` may move to by its own rules. Never
/// includes a square holding a friendly piece.
///
/// Fails only when castling has to be evaluated and the king is missing.
pub fn pseudo_legal_squares(game_state: &GameState, square: Square) -> Result<Vec<Square>, ChessErrors> {
    let board = &game_state.board;
    let Some(piece) = board.at(square) else {
        return Ok(Vec::new());
    };
    let from = Position::from_index(square);

    let mut out = match piece.kind() {
        PieceKind::Pawn => pawn_squares(game_state, piece, from),
        PieceKind::King => {
            let mut squares = controlled_squares(board, square);
            for wing in Wing::ALL {
                if can_castle(game_state, piece.color(), wing)? {
                    if let Some(to) = (from + (2 * wing.direction(), 0)).square() {
                        squares.push(to);
                    }
                }
            }
            squares
        }
        _ => controlled_squares(board, square),
    };

    out.retain(|to| board.at(*to).map_or(true, |other| other.color() != piece.color()));
    Ok(out)
}

fn pawn_squares(game_state: &GameState, pawn: Piece, from: Position) -> Vec<Square> {
    let board = &game_state.board;
    let color = pawn.color();
    let dy = forward_dir(color);
    let mut out = Vec::with_capacity(4);

    let one_step = from + (0, dy);
    if let Some(to) = one_step.square().filter(|sq| board.at(*sq).is_none()) {
        out.push(to);

        let two_step = one_step + (0, dy);
        if from.y == pawn_start_row(color) {
            if let Some(to) = two_step.square().filter(|sq| board.at(*sq).is_none()) {
                out.push(to);
            }
        }
    }

    for displacement in pawn_captures(color) {
        let target = from + displacement;
        let Some(to) = target.square() else {
            continue;
        };

        match board.at(to) {
            Some(other) if other.color() != color => out.push(to),
            Some(_) => {}
            None if target.matches(game_state.en_passant_target) => {
                // The double-stepped pawn sits one row past the target.
                let victim = board.at_position(target + (0, -dy));
                if victim == Some(Piece::new(PieceKind::Pawn, pawn.opponent())) {
                    out.push(to);
                }
            }
            None => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::game_state::position::Position;

    fn sorted(mut squares: Vec<u8>) -> Vec<u8> {
        squares.sort_unstable();
        squares
    }

    #[test]
    fn blocked_pawn_has_no_advance() {
        // White pawn e2 (52) blocked on e3 (44) by a black knight.
        let game = GameState::new("4k3/8/8/8/8/4n3/4P3/4K3").expect("layout should parse");
        assert!(game.pseudo_legal_squares(52).expect("valid square").is_empty());
    }

    #[test]
    fn double_step_needs_both_squares_empty() {
        let game = GameState::new("4k3/8/8/8/4n3/8/4P3/4K3").expect("layout should parse");
        assert_eq!(game.pseudo_legal_squares(52).expect("valid square"), vec![44]);
    }

    #[test]
    fn pawn_off_its_start_row_steps_once() {
        let game = GameState::new("4k3/8/8/8/8/4P3/8/4K3").expect("layout should parse");
        assert_eq!(game.pseudo_legal_squares(44).expect("valid square"), vec![36]);
    }

    #[test]
    fn pawn_captures_enemies_diagonally_only() {
        // White pawn d4 (35); black pawn e5 (28); white knight c5 (26).
        let game = GameState::new("4k3/8/8/2N1p3/3P4/8/8/4K3").expect("layout should parse");
        assert_eq!(sorted(game.pseudo_legal_squares(35).expect("valid square")), vec![27, 28]);
    }

    #[test]
    fn en_passant_target_is_a_capture_square() {
        // Black pawn d4 (35), white pawn e4 (36) that just double-stepped.
        let mut game = GameState::new("4k3/8/8/8/3pP3/8/8/4K3")
            .expect("layout should parse")
            .with_active_player(Color::Black);
        game.en_passant_target = Some(Position::new(4, 5));

        assert_eq!(sorted(game.pseudo_legal_squares(35).expect("valid square")), vec![43, 44]);
    }

    #[test]
    fn sliders_exclude_friendly_blockers() {
        // White bishop c1 (58); own pawn d2 (51); black pawn b2 (49).
        let game = GameState::new("4k3/8/8/8/8/8/1p1P4/2B1K3").expect("layout should parse");
        assert_eq!(game.pseudo_legal_squares(58).expect("valid square"), vec![49]);
    }
}
