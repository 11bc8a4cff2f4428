//! Board utilities and helper functions
//!
//! Provides fundamental square operations used throughout the engine:
//! - Square validation and indexing
//! - File/rank decomposition
//! - Algebraic square names (`e4`)

use crate::types::Square;

/// Convert file and rank to a square index (0-63)
#[inline]
pub fn square_to_pos(file: u8, rank: u8) -> Square {
    rank * 8 + file
}

/// Convert a square index to (file, rank)
#[inline]
pub fn pos_to_square(pos: Square) -> (u8, u8) {
    (pos % 8, pos / 8)
}

#[inline]
pub fn rank_of(pos: Square) -> u8 {
    pos / 8
}

/// Check if signed file/rank coordinates are on the board
#[inline]
pub fn is_valid_square(file: i32, rank: i32) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

/// Manhattan distance from the four center squares, 0 (d4/e4/d5/e5) to 6 (corners).
pub fn center_distance(pos: Square) -> u8 {
    let (file, rank) = pos_to_square(pos);
    let file_dist = if file < 4 { 3 - file } else { file - 4 };
    let rank_dist = if rank < 4 { 3 - rank } else { rank - 4 };
    file_dist + rank_dist
}

/// Algebraic name of a square, e.g. `e4`
pub fn square_name(pos: Square) -> String {
    let (file, rank) = pos_to_square(pos);
    format!("{}{}", (b'a' + file) as char, rank + 1)
}

/// Parse an algebraic square name
pub fn parse_square(name: &str) -> Option<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].checked_sub(b'a')?;
    let rank = bytes[1].checked_sub(b'1')?;
    if file < 8 && rank < 8 {
        Some(square_to_pos(file, rank))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_names() {
        assert_eq!(square_name(0), "a1");
        assert_eq!(square_name(28), "e4");
        assert_eq!(square_name(63), "h8");
        assert_eq!(parse_square("e4"), Some(28));
        assert_eq!(parse_square("i1"), None);
        assert_eq!(parse_square("a9"), None);
        assert_eq!(parse_square("e"), None);
    }

    #[test]
    fn test_center_distance() {
        assert_eq!(center_distance(27), 0, "d4 is a center square");
        assert_eq!(center_distance(36), 0, "e5 is a center square");
        assert_eq!(center_distance(0), 6, "a1 is a corner");
        assert_eq!(center_distance(63), 6, "h8 is a corner");
    }
}
