//! Move values exchanged across the engine boundary.
//!
//! A [`Move`] names its origin and destination plus the special rule it
//! exercises. Promotions are expanded by the generator into one move per
//! promotion kind; a move with `promotion == None` onto the far rank is what
//! a caller sends when it still has to ask the player for a piece.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{CastlingWing, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Step or slide onto an empty square.
    Quiet,
    /// Capture of the piece standing on the destination.
    Capture,
    /// Pawn advancing two ranks from its starting rank.
    DoublePawnPush,
    /// Pawn capturing the pawn beside it by moving onto the skipped square.
    EnPassant,
    /// King moving two files; the rook is relocated by the executor.
    Castle(CastlingWing),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self {
            from,
            to,
            kind,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(self, promotion: PieceKind) -> Self {
        Self {
            promotion: Some(promotion),
            ..self
        }
    }

    #[inline]
    pub const fn without_promotion(self) -> Self {
        Self {
            promotion: None,
            ..self
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }

    #[inline]
    pub const fn castling_wing(&self) -> Option<CastlingWing> {
        match self.kind {
            MoveKind::Castle(wing) => Some(wing),
            _ => None,
        }
    }

    /// Same origin and destination, ignoring kind and promotion.
    #[inline]
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}
