use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::utils::algebraic::algebraic_to_square;

/// `"e2e4"`, or `"e7e8q"` for a promotion.
pub fn move_to_long_algebraic(mv: &Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&mv.from.to_string());
    out.push_str(&mv.to.to_string());
    if let Some(ch) = mv.promotion.and_then(promotion_to_char) {
        out.push(ch);
    }
    out
}

/// Resolves text such as `"e2e4"` against the legal moves of `game_state`.
///
/// A promoting move written without its piece letter resolves to the move
/// with `promotion == None`, which `GameState::execute` reports as pending.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    game_state: &GameState,
) -> Result<Move, ChessErrors> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(
            char_to_promotion(ch)
                .ok_or_else(|| ChessErrors::InvalidAlgebraicString(long_algebraic.to_owned()))?,
        ),
        None => None,
    };

    let legal = game_state.legal_moves(from)?;
    let candidate = legal
        .iter()
        .find(|mv| mv.from == from && mv.to == to)
        .copied()
        .ok_or_else(|| ChessErrors::IllegalMove(text.to_owned()))?;

    match (candidate.promotion, promotion) {
        (Some(_), Some(kind)) => Ok(candidate.with_promotion(kind)),
        (Some(_), None) => Ok(candidate.without_promotion()),
        (None, Some(_)) => Err(ChessErrors::IllegalMove(format!("{text} is not a promotion"))),
        (None, None) => Ok(candidate),
    }
}

fn promotion_to_char(piece_kind: PieceKind) -> Option<char> {
    match piece_kind {
        PieceKind::Knight => Some('n'),
        PieceKind::Bishop => Some('b'),
        PieceKind::Rook => Some('r'),
        PieceKind::Queen => Some('q'),
        PieceKind::Pawn | PieceKind::King => None,
    }
}

fn char_to_promotion(ch: char) -> Option<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Some(PieceKind::Knight),
        'b' => Some(PieceKind::Bishop),
        'r' => Some(PieceKind::Rook),
        'q' => Some(PieceKind::Queen),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    #[test]
    fn resolves_the_generated_move_kind() {
        let game = GameState::new_game();
        let mv = long_algebraic_to_move("e2e4", &game).expect("legal move");
        assert_eq!(mv.kind, MoveKind::DoublePawnPush);
        assert_eq!(move_to_long_algebraic(&mv), "e2e4");

        assert!(matches!(
            long_algebraic_to_move("e2e5", &game),
            Err(ChessErrors::IllegalMove(_))
        ));
        assert!(matches!(
            long_algebraic_to_move("e2", &game),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
    }

    #[test]
    fn promotion_letter_is_optional() {
        let pieces = [
            (sq("h1"), Piece::new(Color::White, PieceKind::King)),
            (sq("a2"), Piece::new(Color::Black, PieceKind::King)),
            (sq("e7"), Piece::new(Color::White, PieceKind::Pawn)),
        ];
        let game = GameState::from_pieces(&pieces, Color::White, CastlingRights::NONE)
            .expect("valid position");

        let with_letter = long_algebraic_to_move("e7e8r", &game).expect("legal move");
        assert_eq!(with_letter.promotion, Some(PieceKind::Rook));
        assert_eq!(move_to_long_algebraic(&with_letter), "e7e8r");

        let without = long_algebraic_to_move("e7e8", &game).expect("legal move");
        assert_eq!(without.promotion, None);

        assert!(matches!(
            long_algebraic_to_move("e7e8k", &game),
            Err(ChessErrors::InvalidAlgebraicString(_))
        ));
    }
}
