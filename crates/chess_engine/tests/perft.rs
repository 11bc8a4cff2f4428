//! Move generator validation against published perft counts
//!
//! Each position exercises a different corner of the rules: castling through attacked
//! squares, en passant with discovered checks, under-promotion and pinned pieces.

use chess_engine::{MoveGenerator, Position};

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
const ENDGAME: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
const PROMOTIONS: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
const TALKCHESS: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

fn assert_perft(fen: &str, expected: &[u64]) {
    let generator = MoveGenerator::new();
    let position = Position::from_fen(fen).expect("valid FEN");
    for (depth, &nodes) in expected.iter().enumerate() {
        let depth = depth as u32 + 1;
        assert_eq!(
            generator.perft(&position, depth),
            nodes,
            "perft({depth}) mismatch for {fen}"
        );
    }
}

#[test]
fn test_perft_starting_position() {
    let generator = MoveGenerator::new();
    let position = Position::new();
    assert_eq!(generator.perft(&position, 0), 1);
    assert_eq!(generator.perft(&position, 1), 20);
    assert_eq!(generator.perft(&position, 2), 400);
    assert_eq!(generator.perft(&position, 3), 8_902);
}

#[test]
fn test_perft_kiwipete() {
    assert_perft(KIWIPETE, &[48, 2_039]);
}

#[test]
fn test_perft_endgame_en_passant() {
    //! Rook and pawn ending where en passant can expose the king along the rank.
    assert_perft(ENDGAME, &[14, 191, 2_812]);
}

#[test]
fn test_perft_promotions_and_pins() {
    assert_perft(PROMOTIONS, &[6, 264, 9_467]);
}

#[test]
fn test_perft_talkchess() {
    assert_perft(TALKCHESS, &[44, 1_486]);
}

#[test]
fn test_perft_divide_sums_to_perft() {
    let generator = MoveGenerator::new();
    let position = Position::from_fen(KIWIPETE).expect("valid FEN");
    let divide = generator.perft_divide(&position, 2);
    assert_eq!(divide.len(), 48);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 2_039);
}
