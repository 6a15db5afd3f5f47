//! Benchmarks for move generation, evaluation and move selection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use kestrel_chess::board::{select_move, Color, Position, SearchConfig};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let mut startpos = Position::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| startpos.perft(black_box(depth)))
        });
    }

    let mut kiwipete = Position::from_fen(KIWIPETE);
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    for (name, fen) in [("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let mut pos = Position::from_fen(fen);
        group.bench_function(name, |b| b.iter(|| black_box(pos.legal_moves())));
    }

    group.finish();
}

fn bench_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluation");

    for (name, fen) in [("middlegame", MIDDLEGAME), ("kiwipete", KIWIPETE)] {
        let pos = Position::from_fen(fen);
        group.bench_function(name, |b| b.iter(|| black_box(pos.evaluate(Color::White))));
    }

    group.finish();
}

fn bench_select_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_move");
    group.sample_size(10);

    for depth in [2, 3] {
        let config = SearchConfig::default().with_depth(depth);
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &config, |b, config| {
            let mut pos = Position::from_fen(MIDDLEGAME);
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| select_move(&mut pos, config, &mut rng))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_perft,
    bench_movegen,
    bench_evaluation,
    bench_select_move
);
criterion_main!(benches);
