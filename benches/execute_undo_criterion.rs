use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use plum_rules::game_state::chess_types::GameState;
use plum_rules::game_state::game_state::ExecuteOutcome;
use plum_rules::utils::long_algebraic::long_algebraic_to_move;

/// Ruy Lopez opening into both castles; every move is quiet or a capture.
const LINE: &[&str] = &[
    "e2e4", "e7e5", "g1f3", "b8c6", "f1b5", "a7a6", "b5a4", "g8f6", "e1g1", "f8e7", "f1e1",
    "b7b5", "a4b3", "d7d6", "c2c3", "e8g8",
];

fn play_line(game: &mut GameState) {
    for text in LINE {
        let mv = long_algebraic_to_move(text, game).expect("line move should be legal");
        let outcome = game.execute(mv, None).expect("line move should execute");
        assert!(matches!(outcome, ExecuteOutcome::Completed(_)));
    }
}

fn bench_execute_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("execute_undo");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(50);
    group.throughput(Throughput::Elements(LINE.len() as u64));

    // Correctness guard before benchmarking.
    let mut game = GameState::new_game();
    play_line(&mut game);
    assert_eq!(game.history().len(), LINE.len());
    while game.undo().expect("undo should run") {}
    assert_eq!(game, GameState::new_game());

    group.bench_function("ruy_lopez_line", |b| {
        b.iter(|| {
            let mut game = GameState::new_game();
            play_line(&mut game);
            while game.undo().expect("undo should run") {}
            black_box(game.fullmove_number())
        });
    });

    group.finish();
}

criterion_group!(execute_undo_benches, bench_execute_undo);
criterion_main!(execute_undo_benches);
