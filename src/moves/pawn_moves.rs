//! Pawn capture geometry.
//!
//! Pawns capture one rank forward (relative to their color) and one file to
//! either side. The attack detector needs the reverse question, which squares a
//! pawn of a given color would have to stand on to hit a target.

use crate::game_state::chess_types::{Color, Square};

/// Diagonal squares a `color` pawn on `from` captures onto.
#[inline]
pub fn pawn_capture_targets(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let direction = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| from.offset(direction, d_file))
}

/// Squares from which a `color` pawn attacks `target`.
#[inline]
pub fn pawn_attacker_origins(color: Color, target: Square) -> impl Iterator<Item = Square> {
    let direction = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_file| target.offset(-direction, d_file))
}
