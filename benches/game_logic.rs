use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{catalog, collides, Board, Game};
use gridfall::types::{PieceKind, Position};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);
    game.spawn();

    c.bench_function("game_tick", |b| {
        let mut now = 0u64;
        b.iter(|| {
            now += 16;
            game.tick(black_box(now));
            if game.active().is_none() && !game.is_over() {
                game.spawn();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20).unwrap();
            let color = catalog::color_tag(PieceKind::I);
            // Fill the bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(color));
                }
            }
            black_box(board.clear_completed_rows())
        })
    });
}

fn bench_collision_check(c: &mut Criterion) {
    let board = Board::new(10, 20).unwrap();
    let shape = catalog::shape(PieceKind::T);

    c.bench_function("collision_check", |b| {
        b.iter(|| collides(black_box(&board), black_box(&shape), Position::new(3, 10)))
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            game.spawn();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);
    game.spawn();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !game.try_move(1, 0) {
                game.try_move(-1, 0);
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut game = Game::with_seed(12345);
    game.spawn();

    c.bench_function("rotate_with_kicks", |b| {
        b.iter(|| {
            game.rotate();
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision_check,
    bench_spawn,
    bench_try_move,
    bench_rotate
);
criterion_main!(benches);
