//! Full-tree search benchmarks.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tictactoe_engine::{optimal_action, Action, Board, Player, Square};

const X: Square = Square::Taken(Player::X);
const O: Square = Square::Taken(Player::O);
const E: Square = Square::Empty;

fn bench_search(c: &mut Criterion) {
    c.bench_function("optimal_action/empty_board", |b| {
        let board = Board::new();
        b.iter(|| optimal_action(black_box(&board)))
    });

    c.bench_function("optimal_action/after_center_opening", |b| {
        let board = Board::new().apply(Action::new(1, 1)).unwrap();
        b.iter(|| optimal_action(black_box(&board)))
    });

    c.bench_function("optimal_action/midgame", |b| {
        let board = Board::from_squares([[X, O, X], [E, X, E], [O, E, O]]);
        b.iter(|| optimal_action(black_box(&board)))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
