//! Perft node counting over the low-level make/unmake pair.
//!
//! Works on a private clone of the caller's state, so the live game (and its
//! terminal gating) is never involved.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::{all_legal_moves, has_any_legal_move};
use crate::moves::move_descriptions::MoveKind;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
    pub checkmates: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> Result<PerftCounts, ChessErrors> {
    let mut scratch = game_state.clone();
    let mut total = PerftCounts::default();
    perft_recurse(&mut scratch, depth, &mut total)?;
    Ok(total)
}

/// Leaf counts per root move, keyed by long algebraic text, in generation
/// order.
pub fn perft_divide(
    game_state: &GameState,
    depth: u8,
) -> Result<Vec<(String, PerftCounts)>, ChessErrors> {
    let mut scratch = game_state.clone();
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }

    for mv in all_legal_moves(&scratch) {
        let mut local = PerftCounts::default();
        apply_move(&mut scratch, mv)?;
        if depth == 1 {
            count_leaf(&scratch, &mut local);
        } else {
            perft_recurse(&mut scratch, depth - 1, &mut local)?;
        }
        undo_move(&mut scratch);
        out.push((move_to_long_algebraic(&mv), local));
    }

    Ok(out)
}

fn perft_recurse(
    game_state: &mut GameState,
    depth: u8,
    counts: &mut PerftCounts,
) -> Result<(), ChessErrors> {
    if depth == 0 {
        counts.nodes += 1;
        return Ok(());
    }

    for mv in all_legal_moves(game_state) {
        apply_move(game_state, mv)?;
        if depth == 1 {
            count_leaf(game_state, counts);
        } else {
            let mut child = PerftCounts::default();
            perft_recurse(game_state, depth - 1, &mut child)?;
            counts.merge(child);
        }
        undo_move(game_state);
    }

    Ok(())
}

/// Tallies the position reached by the last applied move.
fn count_leaf(game_state: &GameState, counts: &mut PerftCounts) {
    counts.nodes += 1;

    let Some(record) = game_state.history().last() else {
        return;
    };
    if record.captured_piece().is_some() {
        counts.captures += 1;
    }
    if record.mv.kind == MoveKind::EnPassant {
        counts.en_passant += 1;
    }
    if record.mv.castling_wing().is_some() {
        counts.castles += 1;
    }
    if record.promotion.is_some() {
        counts.promotions += 1;
    }
    if game_state.in_check() {
        counts.checks += 1;
        if !has_any_legal_move(game_state) {
            counts.checkmates += 1;
        }
    }
}
