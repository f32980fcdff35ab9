//! Legal move generation.
//!
//! Takes pseudo-legal destinations, applies each candidate on an independent
//! snapshot of the game, and drops those that leave the mover's king in
//! check. Castling destinations skip the snapshot filter: `can_castle`
//! already proved every square the king touches is safe.

use tracing::trace;

use crate::chess_errors::{check_square, ChessErrors};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::under_check;
use crate::move_generation::pseudo_legal_squares::pseudo_legal_squares;

/// Legal destinations for the piece on `square`, ascending.
///
/// Empty when the square is empty or holds a piece of the side not on move.
pub fn legal_squares(game_state: &GameState, square: Square) -> Result<Vec<Square>, ChessErrors> {
    check_square(square)?;

    let Some(piece) = game_state.board.at(square) else {
        return Ok(Vec::new());
    };
    if piece.color() != game_state.active_player {
        return Ok(Vec::new());
    }

    let mut legal = Vec::new();
    for to in pseudo_legal_squares(game_state, square)? {
        if is_castling_step(piece, square, to) {
            legal.push(to);
            continue;
        }

        let mut snapshot = game_state.clone();
        apply_move(&mut snapshot, square, to)?;
        if under_check(&snapshot.board, piece.color())? {
            trace!(from = square, to, "destination leaves own king in check");
            continue;
        }
        legal.push(to);
    }

    legal.sort_unstable();
    legal.dedup();
    Ok(legal)
}

/// Every legal `(from, to)` pair for the side to move, ordered by source.
pub fn legal_moves(game_state: &GameState) -> Result<Vec<(Square, Square)>, ChessErrors> {
    let mut moves = Vec::with_capacity(64);
    for (from, _) in game_state.board.pieces_of(game_state.active_player) {
        for to in legal_squares(game_state, from)? {
            moves.push((from, to));
        }
    }
    Ok(moves)
}

#[inline]
fn is_castling_step(piece: Piece, from: Square, to: Square) -> bool {
    piece.is(PieceKind::King) && (from % 8).abs_diff(to % 8) == 2
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{legal_moves, legal_squares};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, PieceKind, Wing};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_checks::under_check;

    #[test]
    fn startpos_queen_pawn_has_one_and_two_step_advances() {
        let game = GameState::new_game();
        assert_eq!(legal_squares(&game, 51), Ok(vec![35, 43]));
    }

    #[test]
    fn startpos_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(legal_moves(&game).expect("startpos has kings").len(), 20);
    }

    #[test]
    fn castling_layout_offers_both_castling_squares() {
        let game = GameState::new("r3k2r/8/8/8/8/8/8/R3K2R").expect("layout should parse");
        let squares = legal_squares(&game, 60).expect("white king exists");
        assert!(squares.contains(&58));
        assert!(squares.contains(&62));
        assert_eq!(squares, vec![51, 52, 53, 58, 59, 61, 62]);
    }

    #[test]
    fn empty_or_enemy_squares_yield_nothing() {
        let game = GameState::new_game();
        assert_eq!(legal_squares(&game, 35), Ok(vec![]));
        assert_eq!(legal_squares(&game, 11), Ok(vec![]));
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        // White rook e2 (52) pinned by black rook e8 against king e1.
        let game = GameState::new("4r2k/8/8/8/8/8/4R3/4K3").expect("layout should parse");
        assert_eq!(
            legal_squares(&game, 52),
            Ok(vec![4, 12, 20, 28, 36, 44])
        );
    }

    #[test]
    fn king_may_not_step_into_attack_or_capture_defended_piece() {
        // Black rook d8 covers the d-file; black pawn f2 is defended by g3.
        let game = GameState::new("3r3k/8/8/8/8/6p1/5p2/4K3").expect("layout should parse");
        assert_eq!(legal_squares(&game, 60), Ok(vec![52, 61]));
    }

    #[test]
    fn check_must_be_answered() {
        // Black rook e8 checks. The knight on b1 cannot reach the e-file.
        let game = GameState::new("4r2k/8/8/8/8/8/8/1N2K3").expect("layout should parse");
        assert_eq!(legal_squares(&game, 57), Ok(vec![]));
        assert_eq!(legal_squares(&game, 60), Ok(vec![51, 53, 59, 61]));
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        // White king a5, white pawn b5, black pawn c7, black rook h5.
        let mut game = GameState::new("4k3/2p5/8/KP5r/8/8/8/8")
            .expect("layout should parse")
            .with_active_player(Color::Black);
        game.play(10, 26).expect("c7-c5");
        assert_eq!(legal_squares(&game, 25), Ok(vec![17]));
    }

    #[test]
    fn missing_king_aborts_generation() {
        let game = GameState::new("8/8/8/8/8/8/4P3/8").expect("layout should parse");
        assert_eq!(legal_squares(&game, 52), Err(ChessErrors::KingNotFound(Color::White)));
    }

    #[test]
    fn random_playouts_respect_board_invariants() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _game in 0..12 {
            let mut game = GameState::new_game();
            let mut lost_rights = Vec::new();

            for _ply in 0..60 {
                let mover = game.active_player();
                let moves = legal_moves(&game).expect("kings stay on the board");
                let Some(&(from, to)) = moves.choose(&mut rng) else {
                    break;
                };

                for (square, _) in game.board().pieces_of(mover) {
                    let destinations = legal_squares(&game, square).expect("legal squares");
                    for dest in destinations {
                        if let Some(occupant) = game.at(dest) {
                            assert_ne!(occupant.color(), mover, "own piece on {dest}");
                        }
                        let is_king = game.at(square).is_some_and(|p| p.is(PieceKind::King));
                        if is_king && (square % 8).abs_diff(dest % 8) == 2 {
                            continue;
                        }
                        let mut snapshot = game.clone();
                        apply_move(&mut snapshot, square, dest).expect("piece on source");
                        assert_eq!(under_check(snapshot.board(), mover), Ok(false));
                    }
                }

                game.play(from, to).expect("legal move is playable");

                for color in Color::ALL {
                    for wing in Wing::ALL {
                        let has = game.castling_rights().has(color, wing);
                        if lost_rights.contains(&(color, wing)) {
                            assert!(!has, "{color:?} {wing:?} right came back");
                        } else if !has {
                            lost_rights.push((color, wing));
                        }
                    }
                }

                if let Some(target) = game.en_passant_target() {
                    let square = target.square().expect("target is on the board");
                    assert_eq!(game.at(square), None);
                }
            }
        }
    }
}
