//! Game status evaluation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_rules::FIFTY_MOVE_HALFMOVE_LIMIT;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    #[default]
    Normal,
    InCheck,
    Checkmate,
    Stalemate,
    DrawFiftyMove,
}

impl GameStatus {
    /// Terminal statuses only accept a restart.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::Checkmate | GameStatus::Stalemate | GameStatus::DrawFiftyMove
        )
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameStatus::Normal => "normal",
            GameStatus::InCheck => "in check",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
            GameStatus::DrawFiftyMove => "draw by fifty-move rule",
        };
        f.write_str(text)
    }
}

/// Status of the position for the side to move.
///
/// Mobility is checked first, then the fifty-move clock, then check.
pub fn evaluate_status(game_state: &GameState) -> GameStatus {
    let in_check = game_state.in_check();

    if !has_any_legal_move(game_state) {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    if game_state.halfmove_clock() >= FIFTY_MOVE_HALFMOVE_LIMIT {
        return GameStatus::DrawFiftyMove;
    }

    if in_check {
        GameStatus::InCheck
    } else {
        GameStatus::Normal
    }
}

/// Human-readable status line. `side_to_move` is the side that would move
/// next, so after checkmate the winner is its opponent.
pub fn status_message(status: GameStatus, side_to_move: Color) -> String {
    match status {
        GameStatus::Normal => format!("{side_to_move} to move"),
        GameStatus::InCheck => format!("{side_to_move} is in check"),
        GameStatus::Checkmate => format!("Checkmate! {} wins", side_to_move.opposite()),
        GameStatus::Stalemate => "Stalemate! Draw".to_owned(),
        GameStatus::DrawFiftyMove => "Draw by 50-move rule".to_owned(),
    }
}
