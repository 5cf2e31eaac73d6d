use amazons_simulator::game::{full_moves, queen_moves};
use amazons_simulator::{evaluate, GameState, Side};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_movegen(c: &mut Criterion) {
    let state = GameState::new();

    c.bench_function("full_moves/opening", |b| {
        b.iter(|| full_moves(black_box(&state), Side::Red))
    });

    c.bench_function("queen_moves/opening", |b| {
        b.iter(|| queen_moves(black_box(&state), Side::Red))
    });
}

fn bench_evaluator(c: &mut Criterion) {
    let opening = GameState::new();

    let mut midgame = GameState::new();
    midgame.apply(Side::Red, amazons_simulator::MoveAction::new(60, 40, 41));
    midgame.apply(Side::Blue, amazons_simulator::MoveAction::new(39, 59, 58));

    c.bench_function("evaluate/opening", |b| {
        b.iter(|| evaluate(black_box(&opening), Side::Red))
    });

    c.bench_function("evaluate/midgame", |b| {
        b.iter(|| evaluate(black_box(&midgame), Side::Red))
    });
}

criterion_group!(benches, bench_movegen, bench_evaluator);
criterion_main!(benches);
