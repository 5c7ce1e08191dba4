//! Bishop, rook and queen generation over shared rays.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_ray_moves;
use crate::moves::move_descriptions::Move;
use crate::moves::sliding_moves::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn generate_bishop_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    push_ray_moves(game_state.board(), color, from, &DIAGONAL_DIRECTIONS, out);
}

pub fn generate_rook_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    push_ray_moves(game_state.board(), color, from, &ORTHOGONAL_DIRECTIONS, out);
}

pub fn generate_queen_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    push_ray_moves(game_state.board(), color, from, &ORTHOGONAL_DIRECTIONS, out);
    push_ray_moves(game_state.board(), color, from, &DIAGONAL_DIRECTIONS, out);
}
