//! Crate root module declarations for the chessboard rules engine.
//!
//! The engine judges move legality on an 8x8 board, applies moves, and keeps
//! the bookkeeping (side to move, castling rights, en-passant target) that
//! later legality depends on. Rendering and input handling belong to callers;
//! they talk to [`game_state::game_state::GameState`].

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod piece;
    pub mod position;
}

pub mod moves {
    pub mod applied_move;
    pub mod displacements;
}

pub mod move_generation {
    pub mod controlled_squares;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
    pub mod pseudo_legal_squares;
}

pub mod utils {
    pub mod layout_parser;
    pub mod render_board;
}

pub use chess_errors::ChessErrors;
pub use game_state::game_state::GameState;
