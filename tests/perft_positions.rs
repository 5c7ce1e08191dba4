mod common;

use common::*;
use plum_rules::game_state::chess_types::GameState;
use plum_rules::move_generation::perft::{perft, perft_divide, PerftCounts};

fn nodes(game: &GameState, depth: u8) -> u64 {
    perft(game, depth).expect("perft should run").nodes
}

#[test]
fn initial_position_node_counts() {
    let game = GameState::new_game();
    assert_eq!(nodes(&game, 1), 20);
    assert_eq!(nodes(&game, 2), 400);
    assert_eq!(nodes(&game, 3), 8902);
}

#[test]
fn position_3_node_counts() {
    let game = position_3();
    assert_eq!(nodes(&game, 1), 14);
    assert_eq!(nodes(&game, 2), 191);
    assert_eq!(
        perft(&game, 3).expect("perft should run"),
        PerftCounts {
            nodes: 2812,
            captures: 209,
            en_passant: 2,
            castles: 0,
            promotions: 0,
            checks: 267,
            checkmates: 0,
        }
    );
}

#[test]
fn kiwipete_exercises_castling_and_en_passant() {
    let game = kiwipete();
    assert_eq!(
        perft(&game, 1).expect("perft should run"),
        PerftCounts {
            nodes: 48,
            captures: 8,
            en_passant: 0,
            castles: 2,
            promotions: 0,
            checks: 0,
            checkmates: 0,
        }
    );
    assert_eq!(
        perft(&game, 2).expect("perft should run"),
        PerftCounts {
            nodes: 2039,
            captures: 351,
            en_passant: 1,
            castles: 91,
            promotions: 0,
            checks: 3,
            checkmates: 0,
        }
    );
}

#[test]
fn divide_matches_the_total() {
    let game = kiwipete();
    let divided = perft_divide(&game, 2).expect("perft should run");
    assert_eq!(divided.len(), 48);
    let total: u64 = divided.iter().map(|(_, counts)| counts.nodes).sum();
    assert_eq!(total, 2039);
    assert!(divided.iter().any(|(text, _)| text == "e1g1"));
    assert!(divided.iter().any(|(text, _)| text == "e1c1"));
}
