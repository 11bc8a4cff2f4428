//! Chess Engine Benchmarks
//!
//! Performance benchmarks for critical engine functions using Criterion.

use chess_engine::{
    Evaluator, MoveGenerator, Position, SearchConfig, SearchEngine, StandardEvaluator,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_move_generation_starting(c: &mut Criterion) {
    let generator = MoveGenerator::new();
    let position = Position::new();

    c.bench_function("legal_moves_starting_position", |b| {
        b.iter(|| black_box(generator.legal_moves(black_box(&position))))
    });
}

fn bench_move_generation_kiwipete(c: &mut Criterion) {
    let generator = MoveGenerator::new();
    let position = Position::from_fen(KIWIPETE).expect("valid FEN");

    c.bench_function("pseudo_legal_moves_kiwipete", |b| {
        b.iter(|| black_box(generator.generate(black_box(&position))))
    });
}

fn bench_perft(c: &mut Criterion) {
    let generator = MoveGenerator::new();
    let position = Position::new();

    c.bench_function("perft_3_starting_position", |b| {
        b.iter(|| black_box(generator.perft(&position, 3)))
    });
}

fn bench_evaluate_position(c: &mut Criterion) {
    let evaluator = StandardEvaluator::new();
    let position = Position::from_fen(KIWIPETE).expect("valid FEN");

    c.bench_function("evaluate_kiwipete", |b| {
        b.iter(|| black_box(evaluator.evaluate(black_box(&position))))
    });
}

fn bench_search_depth_4(c: &mut Criterion) {
    let position = Position::from_fen(KIWIPETE).expect("valid FEN");
    let config = SearchConfig {
        tt_size_mb: 4,
        ..SearchConfig::default()
    };

    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.bench_function("kiwipete_depth_4", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new(config.clone());
            black_box(engine.find_best_move(&position, 4, None))
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_move_generation_starting,
    bench_move_generation_kiwipete,
    bench_perft,
    bench_evaluate_position,
    bench_search_depth_4,
);
criterion_main!(benches);
