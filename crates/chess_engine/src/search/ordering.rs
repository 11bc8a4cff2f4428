//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying the most promising
//! moves first. Scores fall into bands, highest first:
//!
//! 1. The transposition-table move
//! 2. Captures, by MVV-LVA (`victim * 10 - attacker`)
//! 3. Quiet promotions
//! 4. Killer moves for the current ply (first slot above second)
//! 5. History score
//!
//! Ties are broken by the destination's distance from the center, nearer first.

use crate::board::center_distance;
use crate::constants::*;
use crate::position::Position;
use crate::types::{Move, MoveKind, PieceKind};
use std::cmp::Reverse;

/// Kind of the piece a capture removes. Pawn for en passant.
pub(crate) fn captured_kind(position: &Position, mv: Move) -> PieceKind {
    match mv.kind {
        MoveKind::EnPassant => PieceKind::Pawn,
        _ => position.piece_at(mv.dst).map_or(PieceKind::Pawn, |p| p.kind),
    }
}

/// Killer and history tables. Owned by one search; cleared between unrelated searches.
pub struct MoveOrderer {
    killers: Vec<[Option<Move>; KILLER_SLOTS]>,
    history: Box<[[i32; 64]; 64]>,
}

impl Default for MoveOrderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveOrderer {
    pub fn new() -> Self {
        MoveOrderer {
            killers: vec![[None; KILLER_SLOTS]; MAX_PLY],
            history: Box::new([[0; 64]; 64]),
        }
    }

    pub fn clear(&mut self) {
        self.killers.iter_mut().for_each(|slots| *slots = [None; KILLER_SLOTS]);
        self.history.iter_mut().for_each(|row| *row = [0; 64]);
    }

    pub fn killers(&self, ply: usize) -> [Option<Move>; KILLER_SLOTS] {
        self.killers.get(ply).copied().unwrap_or([None; KILLER_SLOTS])
    }

    pub fn history(&self, mv: Move) -> i32 {
        self.history[mv.src as usize][mv.dst as usize]
    }

    pub fn score(&self, mv: Move, tt_move: Option<Move>, ply: usize, position: &Position) -> i32 {
        if tt_move == Some(mv) {
            return ORDER_TT_MOVE;
        }
        if mv.is_capture() {
            let victim = captured_kind(position, mv);
            let promotion = mv.promotion.map_or(0, |p| PIECE_VALUES[p.index()]);
            return ORDER_CAPTURE + PIECE_VALUES[victim.index()] * 10
                - PIECE_VALUES[mv.piece.index()]
                + promotion;
        }
        if let Some(promotion) = mv.promotion {
            return ORDER_PROMOTION + PIECE_VALUES[promotion.index()];
        }
        let [first, second] = self.killers(ply);
        if first == Some(mv) {
            return ORDER_KILLER_FIRST;
        }
        if second == Some(mv) {
            return ORDER_KILLER_SECOND;
        }
        self.history(mv)
    }

    /// Sorts `moves` best first. Stable, so equal keys keep generation order.
    pub fn order(&self, moves: &mut [Move], tt_move: Option<Move>, ply: usize, position: &Position) {
        moves.sort_by_cached_key(|&mv| {
            (
                Reverse(self.score(mv, tt_move, ply, position)),
                center_distance(mv.dst),
            )
        });
    }

    /// Records a beta cutoff. Captures are ignored.
    pub fn record_cutoff(&mut self, mv: Move, ply: usize, depth: i32) {
        if mv.is_capture() {
            return;
        }
        if let Some(slots) = self.killers.get_mut(ply) {
            if slots[0] != Some(mv) {
                slots[1] = slots[0];
                slots[0] = Some(mv);
            }
        }

        let depth = depth.max(1);
        let entry = &mut self.history[mv.src as usize][mv.dst as usize];
        *entry += depth * depth;
        if *entry > HISTORY_MAX {
            self.history
                .iter_mut()
                .flat_map(|row| row.iter_mut())
                .for_each(|value| *value /= 2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_gen::MoveGenerator;

    fn position(fen: &str) -> Position {
        Position::from_fen(fen).expect("valid FEN")
    }

    #[test]
    fn test_order_moves_prioritizes_captures() {
        let pos = position("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
        let generator = MoveGenerator::new();
        let mut moves = generator.legal_moves(&pos);
        MoveOrderer::new().order(&mut moves, None, 0, &pos);
        assert_eq!(moves[0].to_string(), "e4d5", "Capture should be ordered first");
    }

    #[test]
    fn test_order_moves_mvv_lva() {
        // Pawn takes queen beats queen takes pawn.
        let pos = position("4k3/8/8/3q4/3pP3/4Q3/8/4K3 w - - 0 1");
        let orderer = MoveOrderer::new();
        let pxq = Move::new(28, 35, PieceKind::Pawn, MoveKind::Capture);
        let qxp = Move::new(20, 27, PieceKind::Queen, MoveKind::Capture);
        assert!(orderer.score(pxq, None, 0, &pos) > orderer.score(qxp, None, 0, &pos));

        let mut moves = vec![qxp, pxq];
        orderer.order(&mut moves, None, 0, &pos);
        assert_eq!(moves[0], pxq);
    }

    #[test]
    fn test_tt_move_first_then_killers() {
        let pos = Position::new();
        let mut orderer = MoveOrderer::new();
        let killer = Move::new(6, 21, PieceKind::Knight, MoveKind::Quiet);
        let tt_move = Move::new(12, 28, PieceKind::Pawn, MoveKind::DoublePawnPush);
        orderer.record_cutoff(killer, 3, 4);

        let mut moves = MoveGenerator::new().legal_moves(&pos);
        orderer.order(&mut moves, Some(tt_move), 3, &pos);
        assert_eq!(moves[0], tt_move);
        assert_eq!(moves[1], killer);

        assert_eq!(
            orderer.score(killer, None, 2, &pos),
            16,
            "Killers are per ply; elsewhere only history counts"
        );
    }

    #[test]
    fn test_killer_slots_fifo() {
        let mut orderer = MoveOrderer::new();
        let a = Move::new(6, 21, PieceKind::Knight, MoveKind::Quiet);
        let b = Move::new(1, 18, PieceKind::Knight, MoveKind::Quiet);
        let c = Move::new(12, 20, PieceKind::Pawn, MoveKind::Quiet);
        orderer.record_cutoff(a, 0, 1);
        orderer.record_cutoff(b, 0, 1);
        orderer.record_cutoff(b, 0, 1);
        assert_eq!(orderer.killers(0), [Some(b), Some(a)], "Repeat does not evict");
        orderer.record_cutoff(c, 0, 1);
        assert_eq!(orderer.killers(0), [Some(c), Some(b)]);
    }

    #[test]
    fn test_history_halves_on_overflow() {
        let mut orderer = MoveOrderer::new();
        let mv = Move::new(6, 21, PieceKind::Knight, MoveKind::Quiet);
        let other = Move::new(1, 18, PieceKind::Knight, MoveKind::Quiet);
        orderer.record_cutoff(other, 0, 10);
        assert_eq!(orderer.history(other), 100);

        let mut expected = 0;
        while expected + 100 <= HISTORY_MAX {
            orderer.record_cutoff(mv, 1, 10);
            expected += 100;
        }
        assert_eq!(orderer.history(mv), HISTORY_MAX);
        orderer.record_cutoff(mv, 1, 10);
        assert_eq!(orderer.history(mv), (HISTORY_MAX + 100) / 2);
        assert_eq!(orderer.history(other), 50, "Whole table is halved");
    }

    #[test]
    fn test_captures_do_not_update_tables() {
        let mut orderer = MoveOrderer::new();
        let capture = Move::new(28, 35, PieceKind::Pawn, MoveKind::Capture);
        orderer.record_cutoff(capture, 0, 5);
        assert_eq!(orderer.killers(0), [None, None]);
        assert_eq!(orderer.history(capture), 0);
    }
}
