//! Immutable log entry produced by every executed move.
//!
//! A record stores exactly the prior values the executor overwrote, so undo
//! never has to re-derive what changed.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;

/// Rook relocation performed alongside a castling king move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRecord {
    pub wing: CastlingWing,
    pub rook_from: Square,
    pub rook_to: Square,
    pub rook: Piece,
}

/// Single undo record for `apply_move` / `undo_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    /// Piece as it stood on the origin square (a pawn for promotions).
    pub moved_piece: Piece,
    /// Captured piece and the square it was taken from. For en passant the
    /// square differs from `mv.to`.
    pub captured: Option<(Square, Piece)>,

    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_target: Option<Square>,
    pub prev_halfmove_clock: u16,

    pub castling: Option<CastlingRecord>,
    pub promotion: Option<PieceKind>,
    pub notation: String,
}

impl MoveRecord {
    #[inline]
    pub fn mover(&self) -> Color {
        self.moved_piece.color
    }

    #[inline]
    pub fn captured_piece(&self) -> Option<Piece> {
        self.captured.map(|(_, piece)| piece)
    }
}
