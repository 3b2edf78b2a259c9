use common::games::tictactoe::{Board, Mark, best_move};
use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;

fn bench_first_move_empty_board() {
    let mut board = Board::new();
    best_move(&mut board, Mark::O, Mark::X);
}

fn bench_single_move_mid_game() {
    let mut board = Board::new();
    let moves = [
        (4, Mark::X),
        (0, Mark::O),
        (8, Mark::X),
        (2, Mark::O),
    ];
    for (slot, mark) in moves {
        board.place(slot, mark);
    }

    best_move(&mut board, Mark::X, Mark::O);
}

fn bench_full_self_play_game() {
    let mut board = Board::new();
    let mut mover = Mark::X;

    while board.has_empty_slot() && board.winning_mark().is_none() {
        let opponent = mover.opponent().unwrap();
        if let Some(slot) = best_move(&mut board, mover, opponent).slot {
            board.place(slot, mover);
            mover = opponent;
        } else {
            break;
        }
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("first_move_empty", |b| b.iter(bench_first_move_empty_board));

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.bench_function("full_self_play_game", |b| b.iter(bench_full_self_play_game));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
