//! Plays random legal moves from a layout and prints the final board.
//!
//! Usage: `random_game [LAYOUT]`
//! Environment: `RANDOM_GAME_SEED` (default 0), `RANDOM_GAME_PLIES`
//! (default 40), `RUST_LOG` (default `info`).

use std::env;
use std::process::ExitCode;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chessboard_rules::game_state::chess_rules::STARTING_LAYOUT;
use chessboard_rules::game_state::game_state::GameState;
use chessboard_rules::utils::render_board::render_board;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse::<T>().ok())
        .unwrap_or(default)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let layout = env::args().nth(1).unwrap_or_else(|| STARTING_LAYOUT.to_owned());
    let seed: u64 = env_or("RANDOM_GAME_SEED", 0);
    let plies: usize = env_or("RANDOM_GAME_PLIES", 40);

    let mut game = match GameState::new(&layout) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, layout = %layout, "could not import layout");
            return ExitCode::FAILURE;
        }
    };
    let mut rng = StdRng::seed_from_u64(seed);

    info!(seed, plies, layout = %layout, "starting random game");

    for ply in 0..plies {
        let moves = match game.legal_moves() {
            Ok(moves) => moves,
            Err(err) => {
                error!(%err, ply, "move generation failed");
                return ExitCode::FAILURE;
            }
        };
        let Some(&(from, to)) = moves.choose(&mut rng) else {
            info!(ply, side = ?game.active_player(), "no legal moves; stopping");
            break;
        };

        match game.play(from, to) {
            Ok(applied) => info!(
                ply,
                from,
                to,
                piece = %applied.piece.code(),
                captured = ?applied.captured.map(|p| p.code()),
                castled = ?applied.castled,
                "played"
            ),
            Err(err) => {
                error!(%err, from, to, "legal move was rejected");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("{}", render_board(game.board()));
    ExitCode::SUCCESS
}
