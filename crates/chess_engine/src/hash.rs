//! Zobrist hashing
//!
//! Every game-relevant feature of a position owns an independent random 64-bit key:
//! one per (piece, square), one per castling flag, one per en-passant file and one for
//! "white to move". A position's fingerprint is the XOR of the keys of the features it has.
//!
//! The keys are generated once per process from a fixed seed, so fingerprints are stable
//! across runs. [`Position`] maintains its fingerprint incrementally; [`position_hash`]
//! recomputes it from scratch and exists to verify the incremental value.

use crate::constants::ZOBRIST_SEED;
use crate::position::Position;
use crate::types::{CastlingRights, Color, Piece, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::OnceLock;

pub struct ZobristKeys {
    pub pieces: [[u64; 64]; 12],
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
    pub white_to_move: u64,
}

impl ZobristKeys {
    fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pieces = [[0u64; 64]; 12];
        for piece in pieces.iter_mut() {
            for key in piece.iter_mut() {
                *key = rng.random::<u64>();
            }
        }
        let mut castling = [0u64; 4];
        for key in castling.iter_mut() {
            *key = rng.random::<u64>();
        }
        let mut en_passant = [0u64; 8];
        for key in en_passant.iter_mut() {
            *key = rng.random::<u64>();
        }
        ZobristKeys {
            pieces,
            castling,
            en_passant,
            white_to_move: rng.random::<u64>(),
        }
    }

    #[inline]
    pub fn piece(&self, piece: Piece, square: Square) -> u64 {
        self.pieces[piece.index()][square as usize]
    }

    /// XOR of the keys of every flag held in `rights`.
    pub fn castling(&self, rights: CastlingRights) -> u64 {
        CastlingRights::FLAGS
            .iter()
            .zip(self.castling.iter())
            .filter(|(flag, _)| rights.has(**flag))
            .fold(0, |acc, (_, key)| acc ^ key)
    }

    #[inline]
    pub fn en_passant(&self, square: Option<Square>) -> u64 {
        match square {
            Some(sq) => self.en_passant[(sq % 8) as usize],
            None => 0,
        }
    }
}

static KEYS: OnceLock<ZobristKeys> = OnceLock::new();

/// Process-wide key set, generated on first use.
pub fn zobrist_keys() -> &'static ZobristKeys {
    KEYS.get_or_init(|| ZobristKeys::generate(ZOBRIST_SEED))
}

/// Fingerprint computed from the full position state.
pub fn position_hash(position: &Position) -> u64 {
    let keys = zobrist_keys();
    let mut hash = 0u64;

    for index in 0..12 {
        let piece = Piece::from_index(index);
        for square in position.pieces(piece) {
            hash ^= keys.piece(piece, square);
        }
    }

    hash ^= keys.castling(position.castling());
    hash ^= keys.en_passant(position.en_passant());
    if position.side_to_move() == Color::White {
        hash ^= keys.white_to_move;
    }
    hash
}
