//! Crate root module declarations for the Plum Rules chess engine.
//!
//! This file exposes the rules subsystems (game state, move tables, legal
//! move generation, status evaluation, and text utilities) so the binary,
//! tests, and benches can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod move_history;
    pub mod move_record;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_sliding;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod long_algebraic;
    pub mod notation;
    pub mod render_game_state;
    pub mod terminal_session;
}
