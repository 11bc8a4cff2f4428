//! Apply/undo round-trips over random playouts
//!
//! Every applied move must keep the incremental hash equal to a from-scratch hash and keep
//! the bitboards consistent; undoing the whole game must restore the start exactly. Along the
//! way, a position has no legal moves exactly when it is checkmate or stalemate.

use chess_engine::hash::position_hash;
use chess_engine::{MoveGenerator, Position};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STARTS: [&str; 3] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

#[test]
fn test_random_playouts_round_trip() {
    let generator = MoveGenerator::new();
    let mut rng = StdRng::seed_from_u64(7);

    for fen in STARTS {
        for _ in 0..10 {
            let start = Position::from_fen(fen).expect("valid FEN");
            let mut position = start;
            let mut history = Vec::new();

            for _ in 0..60 {
                let moves = generator.legal_moves(&position);
                let checkmate = generator.is_checkmate(&position);
                let stalemate = generator.is_stalemate(&position);
                assert_eq!(moves.is_empty(), checkmate || stalemate, "at {}", position.to_fen());
                assert!(!(checkmate && stalemate), "at {}", position.to_fen());
                if moves.is_empty() {
                    break;
                }
                let mv = moves[rng.random_range(0..moves.len())];
                let before = position;
                let undo = position.apply(mv).expect("legal move applies");

                assert_eq!(position.hash(), position_hash(&position), "hash drift after {mv}");
                assert!(position.is_consistent(), "bitboards out of sync after {mv}");
                assert_eq!(
                    Position::from_fen(&position.to_fen()).expect("own FEN parses"),
                    position,
                    "FEN round-trip after {mv}"
                );
                history.push((mv, undo, before));
            }

            while let Some((mv, undo, before)) = history.pop() {
                position.undo(mv, undo);
                assert_eq!(position, before, "undo of {mv} did not restore the position");
            }
            assert_eq!(position, start);
        }
    }
}

#[test]
fn test_null_move_round_trip() {
    let mut position = Position::from_fen(
        "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 2",
    )
    .expect("valid FEN");
    let start = position;
    let undo = position.make_null_move();
    assert_ne!(position.side_to_move(), start.side_to_move());
    assert_eq!(position.hash(), position_hash(&position));
    position.unmake_null_move(undo);
    assert_eq!(position, start);
}
