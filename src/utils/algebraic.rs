//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and [`Square`].
//! The first rank maps to grid rank `7`, the eighth rank to grid rank `0`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    square.to_string()
}
