//! Perft: exhaustive legal-move tree counting.
//!
//! Used to cross-check move generation against published node counts and as
//! the workload for the criterion bench.

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.checks += rhs.checks;
    }
}

/// Counts leaf nodes `depth` plies below `game_state`, with move-kind
/// tallies for the final ply.
pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to) in legal_moves(game_state)? {
        let mut next = game_state.clone();
        let applied = next.play(from, to)?;

        if depth > 1 {
            total.merge(perft(&next, depth - 1)?);
            continue;
        }

        total.nodes += 1;
        if applied.is_capture() {
            total.captures += 1;
        }
        if applied.en_passant {
            total.en_passant += 1;
        }
        if applied.castled.is_some() {
            total.castles += 1;
        }
        if next.under_check(next.active_player())? {
            total.checks += 1;
        }
    }

    Ok(total)
}
