use criterion::{Criterion, black_box, criterion_group, criterion_main};
use life_board::{Board, apply_random};

fn bench_step(c: &mut Criterion) {
    c.bench_function("step_glider", |b| {
        let mut board = Board::new();
        board.init();
        b.iter(|| black_box(board.step()));
    });

    c.bench_function("step_random_third", |b| {
        let mut board = Board::new();
        apply_random(&mut board, 42);
        b.iter(|| black_box(board.step()));
    });
}

fn bench_count(c: &mut Criterion) {
    let mut board = Board::new();
    apply_random(&mut board, 42);
    c.bench_function("count", |b| {
        b.iter(|| black_box(board.count()));
    });
}

criterion_group!(benches, bench_step, bench_count);
criterion_main!(benches);
