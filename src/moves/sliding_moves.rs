//! Ray walking for rooks, bishops and queens.
//!
//! Both the attack detector and the move generator walk the same rays and
//! stop at the first occupied square, so the two can never disagree about
//! what a slider sees.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Squares from (but excluding) an origin in one direction, up to the edge.
#[derive(Debug, Clone)]
pub struct Ray {
    next: Option<Square>,
    d_rank: i8,
    d_file: i8,
}

impl Iterator for Ray {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        let current = self.next?;
        self.next = current.offset(self.d_rank, self.d_file);
        Some(current)
    }
}

#[inline]
pub fn ray(origin: Square, (d_rank, d_file): (i8, i8)) -> Ray {
    Ray {
        next: origin.offset(d_rank, d_file),
        d_rank,
        d_file,
    }
}

/// First piece met when walking from `origin` in `direction`.
#[inline]
pub fn first_piece_on_ray(
    board: &Board,
    origin: Square,
    direction: (i8, i8),
) -> Option<(Square, Piece)> {
    ray(origin, direction).find_map(|square| board.get(square).map(|piece| (square, piece)))
}
