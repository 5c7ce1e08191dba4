//! Attack detection.
//!
//! `is_square_attacked` is a pure function of the board it is handed, so the
//! same routine answers questions about the live game and about the scratch
//! boards built by the legality filter.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attacker_origins;
use crate::moves::sliding_moves::{first_piece_on_ray, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let holds = |from: Square, kind: PieceKind| board.get(from) == Some(Piece::new(attacker_color, kind));

    if pawn_attacker_origins(attacker_color, square).any(|from| holds(from, PieceKind::Pawn)) {
        return true;
    }

    if knight_targets(square).any(|from| holds(from, PieceKind::Knight)) {
        return true;
    }

    if king_targets(square).any(|from| holds(from, PieceKind::King)) {
        return true;
    }

    if slider_hits(board, square, attacker_color, &ORTHOGONAL_DIRECTIONS, PieceKind::Rook) {
        return true;
    }

    slider_hits(board, square, attacker_color, &DIAGONAL_DIRECTIONS, PieceKind::Bishop)
}

/// Whether `color`'s king stands on an attacked square.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(
        game_state.board(),
        game_state.king_square(color),
        color.opposite(),
    )
}

fn slider_hits(
    board: &Board,
    square: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    line_kind: PieceKind,
) -> bool {
    directions.iter().any(|direction| {
        matches!(
            first_piece_on_ray(board, square, *direction),
            Some((_, piece)) if piece.color == attacker_color
                && (piece.kind == line_kind || piece.kind == PieceKind::Queen)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::is_square_attacked;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn board_with(pieces: &[(&str, Color, PieceKind)]) -> Board {
        let mut board = Board::empty();
        for (square, color, kind) in pieces {
            board.set(sq(square), Some(Piece::new(*color, *kind)));
        }
        board
    }

    #[test]
    fn pawns_attack_forward_diagonals_only() {
        let board = board_with(&[("e4", Color::White, PieceKind::Pawn)]);
        assert!(is_square_attacked(&board, sq("d5"), Color::White));
        assert!(is_square_attacked(&board, sq("f5"), Color::White));
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        assert!(!is_square_attacked(&board, sq("d3"), Color::White));

        let board = board_with(&[("e5", Color::Black, PieceKind::Pawn)]);
        assert!(is_square_attacked(&board, sq("d4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("d6"), Color::Black));
    }

    #[test]
    fn sliders_are_blocked_by_the_first_piece() {
        let board = board_with(&[
            ("a1", Color::Black, PieceKind::Rook),
            ("a4", Color::White, PieceKind::Knight),
            ("h8", Color::Black, PieceKind::Bishop),
        ]);
        assert!(is_square_attacked(&board, sq("a3"), Color::Black));
        assert!(is_square_attacked(&board, sq("a4"), Color::Black));
        assert!(!is_square_attacked(&board, sq("a5"), Color::Black));
        assert!(is_square_attacked(&board, sq("b2"), Color::Black));
        assert!(!is_square_attacked(&board, sq("h1"), Color::White));
    }

    #[test]
    fn rook_does_not_attack_diagonally_but_queen_does() {
        let board = board_with(&[("d4", Color::White, PieceKind::Rook)]);
        assert!(!is_square_attacked(&board, sq("e5"), Color::White));
        let board = board_with(&[("d4", Color::White, PieceKind::Queen)]);
        assert!(is_square_attacked(&board, sq("g7"), Color::White));
        assert!(is_square_attacked(&board, sq("d8"), Color::White));
    }

    #[test]
    fn knights_and_kings_use_fixed_offsets() {
        let board = board_with(&[
            ("g1", Color::White, PieceKind::Knight),
            ("e8", Color::Black, PieceKind::King),
        ]);
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(!is_square_attacked(&board, sq("g3"), Color::White));
        assert!(is_square_attacked(&board, sq("d7"), Color::Black));
        assert!(!is_square_attacked(&board, sq("e6"), Color::Black));
    }

    #[test]
    fn own_pieces_never_count_as_attackers() {
        let board = Board::standard();
        assert!(!is_square_attacked(&board, sq("e3"), Color::Black));
        assert!(is_square_attacked(&board, sq("e3"), Color::White));
        assert!(is_square_attacked(&board, sq("f6"), Color::Black));
    }
}
