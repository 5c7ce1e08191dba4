//! Terminal-oriented Unicode board renderer.
//!
//! White is drawn at the bottom, so grid rank `0` (the eighth rank) is the
//! first line printed.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in 0..8u8 {
        let label = char::from(b'8' - rank);
        out.push(label);
        out.push(' ');

        for file in 0..8u8 {
            match game_state.board().get(Square::new(rank, file)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(label);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::render_game_state;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn start_position_puts_black_on_top() {
        let rendered = render_game_state(&GameState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
        assert_eq!(lines[4], "5 · · · · · · · · 5");
        assert_eq!(lines[8], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
    }
}
