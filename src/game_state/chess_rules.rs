//! Canonical chess-rule constants.
//!
//! Static rule literals used to set up the initial position and to decide
//! promotion and fifty-move outcomes.

use crate::game_state::chess_types::PieceKind;

/// Back-rank layout from the a-file to the h-file, shared by both colors.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// File both kings start on.
pub const KING_HOME_FILE: u8 = 4;

/// Promotion choices offered for every pawn reaching the far rank.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Half-move clock value at which the game is drawn.
pub const FIFTY_MOVE_HALFMOVE_LIMIT: u16 = 50;
