use crate::game_state::chess_rules::PROMOTION_KINDS;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::moves::pawn_moves::pawn_capture_targets;

pub fn generate_pawn_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let board = game_state.board();
    let direction = color.pawn_direction();

    if let Some(one_step) = from.offset(direction, 0) {
        if board.is_empty(one_step) {
            push_pawn_move(Move::new(from, one_step, MoveKind::Quiet), color, out);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two_step) = one_step.offset(direction, 0) {
                    if board.is_empty(two_step) {
                        out.push(Move::new(from, two_step, MoveKind::DoublePawnPush));
                    }
                }
            }
        }
    }

    // captures and en-passant
    for to in pawn_capture_targets(color, from) {
        match board.get(to) {
            Some(target) if target.color != color => {
                push_pawn_move(Move::new(from, to, MoveKind::Capture), color, out);
            }
            None if game_state.en_passant_target() == Some(to) => {
                out.push(Move::new(from, to, MoveKind::EnPassant));
            }
            _ => {}
        }
    }
}

/// Expands a move onto the far rank into one move per promotion kind.
fn push_pawn_move(mv: Move, color: Color, out: &mut Vec<Move>) {
    if mv.to.rank() == color.promotion_rank() {
        for kind in PROMOTION_KINDS {
            out.push(mv.with_promotion(kind));
        }
    } else {
        out.push(mv);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveKind;
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
    fn start_rank_pawn_has_single_and_double_step() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_pawn_moves(&game, sq("e2"), Color::White, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].to, sq("e3"));
        assert_eq!(out[1].to, sq("e4"));
        assert_eq!(out[1].kind, MoveKind::DoublePawnPush);
    }

    #[test]
    fn blocked_single_step_also_blocks_double_step() {
        let game = position(
            &[
                ("e2", Color::White, PieceKind::Pawn),
                ("e3", Color::Black, PieceKind::Knight),
                ("a1", Color::White, PieceKind::King),
                ("a8", Color::Black, PieceKind::King),
            ],
            Color::White,
        );
        let mut out = Vec::new();
        generate_pawn_moves(&game, sq("e2"), Color::White, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn capture_onto_far_rank_expands_to_four_promotions() {
        let game = position(
            &[
                ("g7", Color::White, PieceKind::Pawn),
                ("h8", Color::Black, PieceKind::Rook),
                ("g8", Color::Black, PieceKind::Knight),
                ("a1", Color::White, PieceKind::King),
                ("a8", Color::Black, PieceKind::King),
            ],
            Color::White,
        );
        let mut out = Vec::new();
        generate_pawn_moves(&game, sq("g7"), Color::White, &mut out);
        assert_eq!(out.len(), 4);
        assert!(out.iter().all(|mv| mv.to == sq("h8") && mv.kind == MoveKind::Capture));
        assert!(out.iter().all(|mv| mv.promotion.is_some()));
    }

    #[test]
    fn black_pawns_advance_towards_rank_one() {
        let game = position(
            &[
                ("d7", Color::Black, PieceKind::Pawn),
                ("a1", Color::White, PieceKind::King),
                ("h8", Color::Black, PieceKind::King),
            ],
            Color::Black,
        );
        let mut out = Vec::new();
        generate_pawn_moves(&game, sq("d7"), Color::Black, &mut out);
        let targets: Vec<String> = out.iter().map(|mv| mv.to.to_string()).collect();
        assert_eq!(targets, vec!["d6", "d5"]);
    }
}
