#![allow(dead_code)]

use plum_rules::game_state::chess_types::*;
use plum_rules::game_state::game_state::{ExecuteOutcome, ExecuteResult};
use plum_rules::moves::move_descriptions::Move;
use plum_rules::utils::algebraic::algebraic_to_square;
use plum_rules::utils::long_algebraic::long_algebraic_to_move;

pub fn sq(text: &str) -> Square {
    algebraic_to_square(text).expect("test square should parse")
}

/// `"Ke1"`, `"Rh1"`, `"Pe2"`; pawns must be written with `P`.
pub fn piece_at(color: Color, code: &str) -> (Square, Piece) {
    let kind = match &code[..1] {
        "K" => PieceKind::King,
        "Q" => PieceKind::Queen,
        "R" => PieceKind::Rook,
        "B" => PieceKind::Bishop,
        "N" => PieceKind::Knight,
        "P" => PieceKind::Pawn,
        other => panic!("unknown piece letter {other}"),
    };
    (sq(&code[1..]), Piece::new(color, kind))
}

pub fn position(
    white: &[&str],
    black: &[&str],
    side_to_move: Color,
    rights: CastlingRights,
) -> GameState {
    let pieces: Vec<_> = white
        .iter()
        .map(|code| piece_at(Color::White, code))
        .chain(black.iter().map(|code| piece_at(Color::Black, code)))
        .collect();
    GameState::from_pieces(&pieces, side_to_move, rights).expect("test position should be valid")
}

pub fn parse(game: &GameState, text: &str) -> Move {
    long_algebraic_to_move(text, game).unwrap_or_else(|err| panic!("{text}: {err}"))
}

/// Plays a move that must complete in one call.
pub fn play(game: &mut GameState, text: &str) -> ExecuteResult {
    let mv = parse(game, text);
    match game.execute(mv, None) {
        Ok(ExecuteOutcome::Completed(result)) => result,
        other => panic!("{text} did not complete: {other:?}"),
    }
}

pub fn play_all(game: &mut GameState, moves: &[&str]) {
    for text in moves {
        play(game, text);
    }
}

pub fn has_move(game: &GameState, from: &str, to: &str) -> bool {
    game.legal_moves(sq(from))
        .map(|moves| moves.iter().any(|mv| mv.to == sq(to)))
        .unwrap_or(false)
}

/// Kiwipete, the standard castling and en passant stress position.
pub fn kiwipete() -> GameState {
    position(
        &[
            "Ra1", "Ke1", "Rh1", "Pa2", "Pb2", "Pc2", "Bd2", "Be2", "Pf2", "Pg2", "Ph2", "Nc3",
            "Qf3", "Pe4", "Pd5", "Ne5",
        ],
        &[
            "Ra8", "Ke8", "Rh8", "Pa7", "Pc7", "Pd7", "Qe7", "Pf7", "Bg7", "Ba6", "Nb6", "Pe6",
            "Nf6", "Pg6", "Pb4", "Ph3",
        ],
        Color::White,
        CastlingRights::ALL,
    )
}

/// "Position 3" from the usual perft suite.
pub fn position_3() -> GameState {
    position(
        &["Ka5", "Rb4", "Pb5", "Pe2", "Pg2"],
        &["Kh4", "Rh5", "Pc7", "Pd6", "Pf4"],
        Color::White,
        CastlingRights::NONE,
    )
}
