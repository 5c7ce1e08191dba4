//! Move-list notation for executed moves.
//!
//! Castling is written `O-O` / `O-O-O`. Every other move is
//! `<letter><from>[x]<to>[=<promotion>]`, pawns without a letter. The origin
//! square is always present, so this is not minimal SAN.

use crate::game_state::chess_types::{CastlingWing, PieceKind};
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn encode_move(
    moved_kind: PieceKind,
    mv: &Move,
    captured: bool,
    promotion: Option<PieceKind>,
) -> String {
    if let MoveKind::Castle(wing) = mv.kind {
        return match wing {
            CastlingWing::Kingside => "O-O".to_owned(),
            CastlingWing::Queenside => "O-O-O".to_owned(),
        };
    }

    let mut text = String::with_capacity(8);
    if let Some(letter) = moved_kind.letter() {
        text.push(letter);
    }
    text.push_str(&mv.from.to_string());
    if captured {
        text.push('x');
    }
    text.push_str(&mv.to.to_string());
    if let Some(letter) = promotion.and_then(PieceKind::letter) {
        text.push('=');
        text.push(letter);
    }
    text
}
