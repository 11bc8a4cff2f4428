//! Forsyth-Edwards Notation import and export
//!
//! Parses and writes the six standard FEN fields. The move counters are optional on input
//! and default to `0 1`.

use crate::board::{parse_square, square_name, square_to_pos};
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::Position;
use crate::types::{CastlingRights, Color, Piece, PieceKind};

impl Position {
    pub fn from_fen(fen: &str) -> ChessEngineResult<Position> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() < 4 || fields.len() > 6 {
            return Err(ChessEngineError::fen(format!(
                "expected 4 to 6 fields, found {}",
                fields.len()
            )));
        }

        let mut position = Position::empty();
        parse_placement(&mut position, fields[0])?;

        let side = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(ChessEngineError::fen(format!("bad side to move '{other}'"))),
        };
        position.set_side_to_move(side);

        let mut rights = CastlingRights::NONE;
        if fields[2] != "-" {
            for c in fields[2].chars() {
                let flag = match c {
                    'K' => CastlingRights::WHITE_KING_SIDE,
                    'Q' => CastlingRights::WHITE_QUEEN_SIDE,
                    'k' => CastlingRights::BLACK_KING_SIDE,
                    'q' => CastlingRights::BLACK_QUEEN_SIDE,
                    other => {
                        return Err(ChessEngineError::fen(format!("bad castling flag '{other}'")))
                    }
                };
                rights.insert(flag);
            }
        }
        position.set_castling(rights);

        if fields[3] != "-" {
            let square = parse_square(fields[3])
                .ok_or_else(|| ChessEngineError::fen(format!("bad en-passant square '{}'", fields[3])))?;
            let rank = square / 8;
            if rank != 2 && rank != 5 {
                return Err(ChessEngineError::fen("en-passant square must be on rank 3 or 6"));
            }
            position.set_en_passant(Some(square));
        }

        if let Some(field) = fields.get(4) {
            let clock = field
                .parse::<u16>()
                .map_err(|_| ChessEngineError::fen(format!("bad halfmove clock '{field}'")))?;
            position.set_halfmove_clock(clock);
        }
        if let Some(field) = fields.get(5) {
            let number = field
                .parse::<u16>()
                .map_err(|_| ChessEngineError::fen(format!("bad fullmove number '{field}'")))?;
            position.set_fullmove_number(number);
        }

        for color in Color::ALL {
            if position.pieces_of(color, PieceKind::King).count_ones() > 1 {
                return Err(ChessEngineError::fen(format!("more than one {color} king")));
            }
        }

        Ok(position)
    }

    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(90);
        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(square_to_pos(file, rank)) {
                    Some(piece) => {
                        if empty > 0 {
                            fen.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                fen.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                fen.push('/');
            }
        }

        fen.push(' ');
        fen.push(match self.side_to_move() {
            Color::White => 'w',
            Color::Black => 'b',
        });

        fen.push(' ');
        let rights = self.castling();
        if rights == CastlingRights::NONE {
            fen.push('-');
        } else {
            for (flag, c) in CastlingRights::FLAGS.iter().zip(['K', 'Q', 'k', 'q']) {
                if rights.has(*flag) {
                    fen.push(c);
                }
            }
        }

        fen.push(' ');
        match self.en_passant() {
            Some(square) => fen.push_str(&square_name(square)),
            None => fen.push('-'),
        }

        fen.push_str(&format!(" {} {}", self.halfmove_clock(), self.fullmove_number()));
        fen
    }
}

fn parse_placement(position: &mut Position, placement: &str) -> ChessEngineResult<()> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(ChessEngineError::fen(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    for (row, text) in ranks.iter().enumerate() {
        let rank = 7 - row as u8;
        let mut file = 0u8;
        for c in text.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(ChessEngineError::fen(format!("bad empty-square count '{c}'")));
                }
                file += skip as u8;
            } else {
                let piece = Piece::from_char(c)
                    .ok_or_else(|| ChessEngineError::fen(format!("unknown piece '{c}'")))?;
                if file >= 8 {
                    return Err(ChessEngineError::fen(format!("rank {} overflows", rank + 1)));
                }
                position.put_piece(piece, square_to_pos(file, rank));
                file += 1;
            }
            if file > 8 {
                return Err(ChessEngineError::fen(format!("rank {} overflows", rank + 1)));
            }
        }
        if file != 8 {
            return Err(ChessEngineError::fen(format!("rank {} has {file} files", rank + 1)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::START_FEN;

    #[test]
    fn test_start_fen_matches_new() {
        let parsed = Position::from_fen(START_FEN).expect("start FEN parses");
        assert_eq!(parsed, Position::new());
        assert_eq!(Position::new().to_fen(), START_FEN);
    }

    #[test]
    fn test_fen_round_trip() {
        let fens = [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        ];
        for fen in fens {
            let position = Position::from_fen(fen).expect("FEN parses");
            assert_eq!(position.to_fen(), fen);
            assert!(position.is_consistent(), "Hash must match for {fen}");
        }
    }

    #[test]
    fn test_counters_optional() {
        let position = Position::from_fen("8/8/8/8/8/8/8/K6k b - -").expect("short FEN parses");
        assert_eq!(position.halfmove_clock(), 0);
        assert_eq!(position.fullmove_number(), 1);
        assert_eq!(position.side_to_move(), Color::Black);
    }

    #[test]
    fn test_malformed_fen_rejected() {
        let bad = [
            "",
            "8/8/8/8/8/8/8 w - -",
            "9/8/8/8/8/8/8/8 w - -",
            "8/8/8/8/8/8/8/7X w - -",
            "8/8/8/8/8/8/8/8 x - -",
            "8/8/8/8/8/8/8/8 w Z -",
            "8/8/8/8/8/8/8/8 w - e4",
            "ppppppppp/8/8/8/8/8/8/8 w - -",
            "8/8/8/8/8/8/8/KK6 w - -",
        ];
        for fen in bad {
            assert!(
                matches!(Position::from_fen(fen), Err(ChessEngineError::InvalidFen { .. })),
                "Expected InvalidFen for {fen:?}"
            );
        }
    }
}
