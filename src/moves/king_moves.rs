//! King step offsets.

use crate::game_state::chess_types::Square;

/// `(d_rank, d_file)` pairs of the eight adjacent squares.
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
pub fn king_targets(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .into_iter()
        .filter_map(move |(d_rank, d_file)| square.offset(d_rank, d_file))
}
