use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::sliding_moves::ray;

/// Pushes a single step/jump onto `to` unless a friendly piece stands there.
#[inline]
pub fn push_step_move(board: &Board, color: Color, from: Square, to: Square, out: &mut Vec<Move>) {
    match board.get(to) {
        None => out.push(Move::new(from, to, MoveKind::Quiet)),
        Some(target) if target.color != color => out.push(Move::new(from, to, MoveKind::Capture)),
        Some(_) => {}
    }
}

/// Walks each direction until the first obstruction, including it when it is
/// an enemy piece.
pub fn push_ray_moves(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for direction in directions {
        for to in ray(from, *direction) {
            match board.get(to) {
                None => out.push(Move::new(from, to, MoveKind::Quiet)),
                Some(target) => {
                    if target.color != color {
                        out.push(Move::new(from, to, MoveKind::Capture));
                    }
                    break;
                }
            }
        }
    }
}
