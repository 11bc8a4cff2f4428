//! End-to-end search behaviour
//!
//! Checks that the search finds forced mates, handles positions without legal moves, and
//! that pruning only ever skips work: with every speculative technique disabled, the score
//! matches a plain minimax over the same tree.

use chess_engine::constants::{DRAW_SCORE, MATE_SCORE, MATE_THRESHOLD};
use chess_engine::legality::is_insufficient_material;
use chess_engine::{
    Evaluator, MaterialEvaluator, MoveGenerator, Position, SearchConfig, SearchEngine,
};
use std::time::Duration;

fn config() -> SearchConfig {
    SearchConfig {
        tt_size_mb: 1,
        ..SearchConfig::default()
    }
}

fn position(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid FEN")
}

fn minimax(
    generator: &MoveGenerator,
    evaluator: &impl Evaluator,
    position: &mut Position,
    depth: u32,
    ply: i32,
) -> i32 {
    if ply > 0 && is_insufficient_material(position) {
        return DRAW_SCORE;
    }
    let moves = generator.legal_moves(position);
    if moves.is_empty() {
        let us = position.side_to_move();
        return if generator.is_in_check(position, us) {
            -(MATE_SCORE - ply)
        } else {
            DRAW_SCORE
        };
    }
    if depth == 0 {
        return evaluator.evaluate(position);
    }
    let mut best = i32::MIN;
    for mv in moves {
        let undo = position.apply(mv).expect("legal move applies");
        let score = -minimax(generator, evaluator, position, depth - 1, ply + 1);
        position.undo(mv, undo);
        best = best.max(score);
    }
    best
}

#[test]
fn test_finds_back_rank_mate() {
    //! Ra8 is the only mate; every pruning technique stays enabled.
    let mut engine = SearchEngine::new(config());
    let start = position("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1");
    let result = engine.search(&start, 4, None);

    let best = result.best_move.expect("White has moves");
    assert_eq!(best.to_string(), "a1a8");
    assert_eq!(result.score, MATE_SCORE - 1, "Mate in one is scored at ply 1");

    let mut after = start;
    after.apply(best).expect("legal");
    assert!(engine.generator().is_checkmate(&after));
}

#[test]
fn test_mate_beats_expiring_fifty_move_clock() {
    // Ra8 is quiet and lands on the hundredth half-move, yet it still mates.
    let start = position("6k1/5ppp/8/8/8/8/8/R5K1 w - - 99 80");
    for depth in 1..=3 {
        let mut engine = SearchEngine::new(config());
        let result = engine.search(&start, depth, None);
        assert_eq!(
            result.best_move.map(|mv| mv.to_string()).as_deref(),
            Some("a1a8"),
            "depth {depth}"
        );
        assert_eq!(result.score, MATE_SCORE - 1, "depth {depth}");
    }
}

#[test]
fn test_expired_fifty_move_clock_scores_a_draw() {
    // A rook up, but every reply to a quiet move ends the game on the fifty-move rule.
    let mut engine = SearchEngine::new(config());
    let start = position("8/8/4k3/8/8/8/8/R3K3 w - - 99 80");
    let result = engine.search(&start, 3, None);
    assert!(result.best_move.is_some());
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn test_finds_scholars_mate() {
    let mut engine = SearchEngine::new(config());
    let start = position("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4");
    let result = engine.search(&start, 3, None);
    assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("h5f7"));
    assert!(result.score >= MATE_THRESHOLD);
}

#[test]
fn test_checkmated_side_gets_no_move() {
    let mut engine = SearchEngine::new(config());
    let mated = position("R5k1/5ppp/8/8/8/8/8/6K1 b - - 1 1");
    let result = engine.search(&mated, 3, None);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, -MATE_SCORE);
    assert!(result.pv.is_empty());
}

#[test]
fn test_stalemate_returns_none() {
    let mut engine = SearchEngine::new(config());
    let stalemate = position("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let result = engine.search(&stalemate, 3, None);
    assert_eq!(result.best_move, None);
    assert_eq!(result.score, DRAW_SCORE);
}

#[test]
fn test_alpha_beta_matches_minimax() {
    let generator = MoveGenerator::new();
    let exhaustive = SearchConfig {
        quiescence: false,
        tt_size_mb: 1,
        ..SearchConfig::exhaustive()
    };

    for fen in [
        "4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1",
        "r3k3/8/8/8/8/8/8/4K2R w Kq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1",
    ] {
        let mut start = position(fen);
        for depth in 1..=4u8 {
            let mut engine = SearchEngine::with_evaluator(exhaustive.clone(), MaterialEvaluator);
            let result = engine.search(&start, depth, None);
            let expected = minimax(&generator, &MaterialEvaluator, &mut start, depth as u32, 0);
            assert_eq!(
                result.score, expected,
                "depth {depth} score differs from minimax for {fen}"
            );
        }
    }
}

#[test]
fn test_pruning_keeps_material_win() {
    //! The queen on d5 hangs to the pawn; every configuration should take it.
    let start = position("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    for config in [config(), SearchConfig::exhaustive()] {
        let mut engine = SearchEngine::with_evaluator(config, MaterialEvaluator);
        let best = engine.find_best_move(&start, 4, None).expect("move exists");
        assert_eq!(best.to_string(), "e4d5");
    }
}

#[test]
fn test_time_limited_search_returns_legal_move() {
    let mut engine = SearchEngine::new(config());
    let start = position("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let result = engine.search(&start, 64, Some(Duration::from_millis(100)));
    let best = result.best_move.expect("time limit still yields a move");
    assert!(engine.generator().legal_moves(&start).contains(&best));
    assert!(result.depth < 64);
}

#[test]
fn test_closure_evaluator() {
    //! Any `Fn(&Position) -> i32` plugs in as an evaluator.
    let mut engine = SearchEngine::with_evaluator(config(), |_: &Position| 0);
    let result = engine.search(&Position::new(), 2, None);
    assert_eq!(result.score, 0);
    assert!(result.best_move.is_some());
}

#[test]
fn test_engine_reuse_keeps_table_warm() {
    let mut engine = SearchEngine::new(config());
    let start = Position::new();
    engine.search(&start, 3, None);
    let occupied = engine.tt_stats().occupied;
    assert!(occupied > 0);

    let second = engine.search(&start, 3, None);
    assert!(second.stats.tt_probes > 0);
    assert!(engine.tt_stats().occupied >= occupied);

    engine.clear();
    assert_eq!(engine.tt_stats().occupied, 0);
}
