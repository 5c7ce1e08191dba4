//! Full legal move generation pipeline.
//!
//! Dispatches to the per-kind pseudo-legal generators, then drops every move
//! that would leave the mover's own king attacked. The filter plays each
//! candidate on a scratch copy of the board, which is cheap because [`Board`]
//! is a small `Copy` array.
//!
//! [`Board`]: crate::game_state::board::Board

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_sliding::{
    generate_bishop_moves, generate_queen_moves, generate_rook_moves,
};
use crate::moves::move_descriptions::{Move, MoveKind};

/// Moves obeying `piece`'s movement rules from `from`, ignoring self-check.
///
/// Ordering is deterministic for a given state.
pub fn pseudo_moves(game_state: &GameState, from: Square, piece: Piece) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, color, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, from, color, &mut out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, color, &mut out),
        PieceKind::Rook => generate_rook_moves(game_state, from, color, &mut out),
        PieceKind::Queen => generate_queen_moves(game_state, from, color, &mut out),
        PieceKind::King => generate_king_moves(game_state, from, color, &mut out),
    }
    out
}

/// Pseudo-legal moves of `piece` minus those that leave its own king attacked.
pub fn legal_moves_for_piece(game_state: &GameState, from: Square, piece: Piece) -> Vec<Move> {
    let mut moves = pseudo_moves(game_state, from, piece);
    moves.retain(|mv| !leaves_king_attacked(game_state, piece, *mv));
    moves
}

/// Every legal move of the side to move, origin squares in row-major order.
pub fn all_legal_moves(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move();
    game_state
        .board()
        .pieces()
        .filter(|(_, piece)| piece.color == side)
        .flat_map(|(from, piece)| legal_moves_for_piece(game_state, from, piece))
        .collect()
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    let side = game_state.side_to_move();
    game_state
        .board()
        .pieces()
        .filter(|(_, piece)| piece.color == side)
        .any(|(from, piece)| {
            pseudo_moves(game_state, from, piece)
                .into_iter()
                .any(|mv| !leaves_king_attacked(game_state, piece, mv))
        })
}

/// Plays `mv` on a scratch board and asks whether the mover's king is hit.
///
/// Only the moving piece (and an en-passant victim) are relocated; the
/// castling rook and clocks cannot change the mover's king safety this ply.
pub fn leaves_king_attacked(game_state: &GameState, piece: Piece, mv: Move) -> bool {
    let mut scratch = *game_state.board();
    scratch.set(mv.from, None);
    if mv.kind == MoveKind::EnPassant {
        scratch.set(Square::new(mv.from.rank(), mv.to.file()), None);
    }
    scratch.set(mv.to, Some(piece));

    let king_square = if piece.kind == PieceKind::King {
        mv.to
    } else {
        game_state.king_square(piece.color)
    };

    is_square_attacked(&scratch, king_square, piece.color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::algebraic_to_square;

    fn sq(text: &str) -> Square {
        algebraic_to_square(text).expect("test square should parse")
    }

    fn position(pieces: &[(&str, Color, PieceKind)], side: Color) -> GameState {
        let placed: Vec<_> = pieces
            .iter()
            .map(|(square, color, kind)| (sq(square), Piece::new(*color, *kind)))
            .collect();
        GameState::from_pieces(&placed, side, CastlingRights::NONE)
            .expect("test position should be valid")
    }

    #[test]
    fn start_position_has_twenty_moves() {
        let game = GameState::new_game();
        assert_eq!(all_legal_moves(&game).len(), 20);
        assert!(has_any_legal_move(&game));
    }

    #[test]
    fn pinned_rook_may_only_slide_along_the_pin() {
        let game = position(
            &[
                ("e1", Color::White, PieceKind::King),
                ("e4", Color::White, PieceKind::Rook),
                ("e8", Color::Black, PieceKind::Queen),
                ("a8", Color::Black, PieceKind::King),
            ],
            Color::White,
        );
        let moves = legal_moves_for_piece(
            &game,
            sq("e4"),
            Piece::new(Color::White, PieceKind::Rook),
        );
        assert!(moves.iter().all(|mv| mv.to.file() == 4));
        assert!(moves.iter().any(|mv| mv.to == sq("e8")));
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn king_may_not_step_onto_an_attacked_square() {
        let game = position(
            &[
                ("e1", Color::White, PieceKind::King),
                ("d8", Color::Black, PieceKind::Rook),
                ("h8", Color::Black, PieceKind::King),
            ],
            Color::White,
        );
        let moves = legal_moves_for_piece(
            &game,
            sq("e1"),
            Piece::new(Color::White, PieceKind::King),
        );
        assert!(moves.iter().all(|mv| mv.to.file() != 3));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn king_cannot_hide_behind_itself_on_a_ray() {
        // The rook's ray continues through the king's old square.
        let game = position(
            &[
                ("e4", Color::White, PieceKind::King),
                ("a4", Color::Black, PieceKind::Rook),
                ("h8", Color::Black, PieceKind::King),
            ],
            Color::White,
        );
        assert!(game.in_check());
        let moves = legal_moves_for_piece(
            &game,
            sq("e4"),
            Piece::new(Color::White, PieceKind::King),
        );
        assert!(!moves.iter().any(|mv| mv.to == sq("f4")));
        assert!(!moves.iter().any(|mv| mv.to == sq("d4")));
        assert_eq!(moves.len(), 6);
    }

    #[test]
    fn en_passant_exposing_the_king_along_the_rank_is_rejected() {
        let mut game = position(
            &[
                ("a5", Color::White, PieceKind::King),
                ("e5", Color::White, PieceKind::Pawn),
                ("d7", Color::Black, PieceKind::Pawn),
                ("h5", Color::Black, PieceKind::Rook),
                ("h1", Color::Black, PieceKind::King),
            ],
            Color::Black,
        );
        let double_step = Move::new(sq("d7"), sq("d5"), MoveKind::DoublePawnPush);
        game.execute(double_step, None).expect("double step is legal");
        assert_eq!(game.en_passant_target(), Some(sq("d6")));

        // Taking d5 en passant empties both d5 and e5 and opens the rank.
        let moves = legal_moves_for_piece(
            &game,
            sq("e5"),
            Piece::new(Color::White, PieceKind::Pawn),
        );
        assert!(!moves.iter().any(|mv| mv.kind == MoveKind::EnPassant));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq("e6"));
    }
}
