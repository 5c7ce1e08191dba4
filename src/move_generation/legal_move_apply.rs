//! Low-level make/unmake.
//!
//! `apply_move` performs the full state transition for one move and pushes a
//! [`MoveRecord`]; `undo_move` pops that record and inverts it field for field.
//! Neither evaluates game status nor refuses to run on a finished game, which
//! keeps them usable by perft and by property tests. The game-facing wrappers
//! live on [`GameState`].
//!
//! The move is assumed to be pseudo-legal. Only the facts needed for a
//! consistent mutation are checked, and every check happens before the first
//! write, so an `Err` leaves the state untouched.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::game_state::move_record::CastlingRecord;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::moves::move_descriptions::{Move, MoveKind};
use crate::utils::notation::encode_move;

pub fn apply_move(game_state: &mut GameState, mv: Move) -> Result<&MoveRecord, ChessErrors> {
    let moving_color = game_state.side_to_move;
    let enemy_color = moving_color.opposite();

    let moved_piece = game_state
        .board
        .get(mv.from)
        .ok_or(ChessErrors::EmptySquare(mv.from))?;
    if moved_piece.color != moving_color {
        return Err(ChessErrors::WrongTurn {
            square: mv.from,
            piece_color: moved_piece.color,
            side_to_move: moving_color,
        });
    }

    let kind = classify(game_state, moved_piece, mv)?;
    let resolved = Move { kind, ..mv };

    // Captured piece and where it stood.
    let captured = match kind {
        MoveKind::EnPassant => {
            let victim_square = Square::new(mv.from.rank(), mv.to.file());
            match game_state.board.get(victim_square) {
                Some(victim) if victim == Piece::new(enemy_color, PieceKind::Pawn) => {
                    Some((victim_square, victim))
                }
                _ => {
                    return Err(ChessErrors::IllegalMove(format!(
                        "no pawn to capture en passant on {victim_square}"
                    )))
                }
            }
        }
        _ => match game_state.board.get(mv.to) {
            None => None,
            Some(target) if target.color == moving_color => {
                return Err(ChessErrors::IllegalMove(format!(
                    "{} is occupied by a friendly piece",
                    mv.to
                )))
            }
            Some(target) if target.kind == PieceKind::King => {
                return Err(ChessErrors::IllegalMove("kings cannot be captured".to_owned()))
            }
            Some(target) => Some((mv.to, target)),
        },
    };

    let castling = match kind {
        MoveKind::Castle(wing) => {
            let rank = moving_color.back_rank();
            let rook_from = Square::new(rank, wing.rook_home_file());
            let rook = Piece::new(moving_color, PieceKind::Rook);
            if game_state.board.get(rook_from) != Some(rook) {
                return Err(ChessErrors::IllegalMove(format!(
                    "no rook on {rook_from} to castle with"
                )));
            }
            Some(CastlingRecord {
                wing,
                rook_from,
                rook_to: Square::new(rank, wing.rook_castled_file()),
                rook,
            })
        }
        _ => None,
    };

    let promotes =
        moved_piece.kind == PieceKind::Pawn && mv.to.rank() == moving_color.promotion_rank();
    let promotion = match (promotes, mv.promotion) {
        (true, Some(choice)) if choice.is_promotion_choice() => Some(choice),
        (true, Some(choice)) => {
            return Err(ChessErrors::IllegalMove(format!(
                "a pawn cannot promote to a {choice:?}"
            )))
        }
        (true, None) => {
            return Err(ChessErrors::IllegalMove(format!(
                "{}{} needs a promotion piece",
                mv.from, mv.to
            )))
        }
        (false, Some(_)) => {
            return Err(ChessErrors::IllegalMove(format!(
                "{}{} is not a promotion",
                mv.from, mv.to
            )))
        }
        (false, None) => None,
    };

    // Validation done; mutate.
    let prev_castling_rights = game_state.castling_rights;
    let prev_en_passant_target = game_state.en_passant_target;
    let prev_halfmove_clock = game_state.halfmove_clock;

    game_state.board.set(mv.from, None);
    if let Some((square, _)) = captured {
        game_state.board.set(square, None);
    }
    let placed = promotion.map_or(moved_piece, |kind| Piece::new(moving_color, kind));
    game_state.board.set(mv.to, Some(placed));

    if let Some(rook_move) = castling {
        move_rook(game_state, rook_move.rook_from, rook_move.rook_to);
    }

    if moved_piece.kind == PieceKind::King {
        game_state.king_squares[moving_color.index()] = mv.to;
    }

    update_castling_rights(game_state, moved_piece, mv.from, captured);

    game_state.en_passant_target = if kind == MoveKind::DoublePawnPush {
        Square::try_new((mv.from.rank() + mv.to.rank()) / 2, mv.from.file())
    } else {
        None
    };

    if moved_piece.kind == PieceKind::Pawn || captured.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if moving_color == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.side_to_move = enemy_color;
    game_state.in_check = is_king_in_check(game_state, enemy_color);

    let notation = encode_move(moved_piece.kind, &resolved, captured.is_some(), promotion);

    Ok(game_state.history.push(MoveRecord {
        mv: resolved,
        moved_piece,
        captured,
        prev_castling_rights,
        prev_en_passant_target,
        prev_halfmove_clock,
        castling,
        promotion,
        notation,
    }))
}

/// Pops the latest record and restores every field it changed.
///
/// Returns `None` when there is nothing to undo.
pub fn undo_move(game_state: &mut GameState) -> Option<MoveRecord> {
    let record = game_state.history.pop()?;
    let mover = record.mover();

    game_state.board.set(record.mv.to, None);
    game_state.board.set(record.mv.from, Some(record.moved_piece));
    if let Some((square, piece)) = record.captured {
        game_state.board.set(square, Some(piece));
    }
    if let Some(rook_move) = record.castling {
        move_rook(game_state, rook_move.rook_to, rook_move.rook_from);
    }

    if record.moved_piece.kind == PieceKind::King {
        game_state.king_squares[mover.index()] = record.mv.from;
    }

    game_state.castling_rights = record.prev_castling_rights;
    game_state.en_passant_target = record.prev_en_passant_target;
    game_state.halfmove_clock = record.prev_halfmove_clock;
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_sub(1);
    }

    game_state.side_to_move = mover;
    game_state.in_check = is_king_in_check(game_state, mover);

    Some(record)
}

/// Works out the special rule a move exercises from the board itself.
///
/// En passant is a pawn changing file onto the empty en passant target;
/// castling is a king moving two files along its rank.
fn classify(game_state: &GameState, moved_piece: Piece, mv: Move) -> Result<MoveKind, ChessErrors> {
    let file_delta = mv.to.file().abs_diff(mv.from.file());
    let rank_delta = mv.to.rank().abs_diff(mv.from.rank());
    let target_occupied = !game_state.board.is_empty(mv.to);

    let kind = match moved_piece.kind {
        PieceKind::Pawn
            if file_delta == 1
                && !target_occupied
                && game_state.en_passant_target == Some(mv.to) =>
        {
            MoveKind::EnPassant
        }
        PieceKind::Pawn if file_delta == 0 && rank_delta == 2 => MoveKind::DoublePawnPush,
        PieceKind::King if rank_delta == 0 && file_delta == 2 => {
            let wing = if mv.to.file() > mv.from.file() {
                CastlingWing::Kingside
            } else {
                CastlingWing::Queenside
            };
            if mv.from.rank() != moved_piece.color.back_rank()
                || mv.to.file() != wing.king_destination_file()
            {
                return Err(ChessErrors::IllegalMove(format!(
                    "{}{} is not a castling move",
                    mv.from, mv.to
                )));
            }
            MoveKind::Castle(wing)
        }
        _ if target_occupied => MoveKind::Capture,
        _ => MoveKind::Quiet,
    };
    Ok(kind)
}

fn move_rook(game_state: &mut GameState, from: Square, to: Square) {
    let rook = game_state.board.take(from);
    game_state.board.set(to, rook);
}

fn update_castling_rights(
    game_state: &mut GameState,
    moved_piece: Piece,
    from: Square,
    captured: Option<(Square, Piece)>,
) {
    let moving_color = moved_piece.color;

    match moved_piece.kind {
        PieceKind::King => game_state.castling_rights.revoke_all(moving_color),
        PieceKind::Rook => {
            if let Some(wing) = CastlingWing::from_rook_home(moving_color, from) {
                game_state.castling_rights.revoke(moving_color, wing);
            }
        }
        _ => {}
    }

    // Capturing a rook on its home square also removes its right.
    if let Some((square, piece)) = captured {
        if piece.kind == PieceKind::Rook {
            if let Some(wing) = CastlingWing::from_rook_home(piece.color, square) {
                game_state.castling_rights.revoke(piece.color, wing);
            }
        }
    }
}
