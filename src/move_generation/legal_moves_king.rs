use crate::game_state::chess_rules::KING_HOME_FILE;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step_move;
use crate::moves::king_moves::king_targets;
use crate::moves::move_descriptions::{Move, MoveKind};

pub fn generate_king_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        push_step_move(game_state.board(), color, from, to, out);
    }

    generate_castling_moves(game_state, from, color, out);
}

/// Castling candidates. The destination square itself is left to the
/// legality filter; everything else (rights, rook, empty path, no check on
/// the origin or the transit square) is checked here.
fn generate_castling_moves(game_state: &GameState, from: Square, color: Color, out: &mut Vec<Move>) {
    let board = game_state.board();
    let enemy = color.opposite();
    let back_rank = color.back_rank();

    if from != Square::new(back_rank, KING_HOME_FILE) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(board, from, enemy) {
        return;
    }

    for wing in CastlingWing::BOTH {
        if !game_state.castling_rights().get(color, wing) {
            continue;
        }

        let rook_home = Square::new(back_rank, wing.rook_home_file());
        if board.get(rook_home) != Some(Piece::new(color, PieceKind::Rook)) {
            continue;
        }

        let path_clear = wing
            .between_files()
            .iter()
            .all(|file| board.is_empty(Square::new(back_rank, *file)));
        if !path_clear {
            continue;
        }

        let transit = Square::new(back_rank, wing.king_transit_file());
        if is_square_attacked(board, transit, enemy) {
            continue;
        }

        out.push(Move::new(
            from,
            Square::new(back_rank, wing.king_destination_file()),
            MoveKind::Castle(wing),
        ));
    }
}
