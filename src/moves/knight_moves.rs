//! Knight jump offsets.

use crate::game_state::chess_types::Square;

/// `(d_rank, d_file)` pairs of the eight knight jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board squares a knight on `square` jumps to (and is attacked from).
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_rank, d_file)| square.offset(d_rank, d_file))
}
