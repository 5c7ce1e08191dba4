//! Errors used throughout the rules engine.
//!
//! `ChessErrors` is the single error type returned by the engine boundary and
//! the text utilities. Every variant is a local, recoverable condition: the
//! game state is left untouched whenever one is returned. Positions with no
//! legal moves are not errors; they surface as a [`GameStatus`].
//!
//! Undoing with an empty history is not an error either; `undo` reports it as
//! `Ok(false)`.

use thiserror::Error;

use crate::game_state::chess_types::{Color, Square};
use crate::move_generation::game_status::GameStatus;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// No piece stands on the queried origin square.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// The piece on the origin belongs to the side that is not to move.
    #[error("the piece on {square} is {piece_color}, but {side_to_move} is to move")]
    WrongTurn {
        square: Square,
        piece_color: Color,
        side_to_move: Color,
    },

    /// The requested move is not in the legality-filtered set.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// The game already ended; only a restart is accepted.
    #[error("the game is over ({0}); restart to play again")]
    NoActiveGame(GameStatus),

    /// Square or move text that could not be parsed.
    #[error("invalid algebraic string: {0:?}")]
    InvalidAlgebraicString(String),

    /// A hand-built position that breaks a board invariant.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}
