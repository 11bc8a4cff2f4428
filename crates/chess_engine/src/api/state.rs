//! Game state queries and AI move generation

use crate::evaluation::Evaluator;
use crate::move_gen::MoveGenerator;
use crate::position::Position;
use crate::search::SearchEngine;
use crate::types::{GameState, Move};
use std::time::Duration;

/// Get AI's response to the current position, `None` if the game is over
pub fn reply<E: Evaluator>(
    engine: &mut SearchEngine<E>,
    position: &Position,
    max_depth: u8,
    time_limit: Option<Duration>,
) -> Option<Move> {
    if engine.generator().game_state(position).is_over() {
        return None;
    }
    engine.find_best_move(position, max_depth, time_limit)
}

/// Get current game state (playing, checkmate, stalemate or a rule draw)
pub fn get_game_state(generator: &MoveGenerator, position: &Position) -> GameState {
    generator.game_state(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchConfig;

    #[test]
    fn test_reply_none_when_game_over() {
        let mut engine = SearchEngine::new(SearchConfig {
            tt_size_mb: 1,
            ..SearchConfig::default()
        });
        let drawn = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("valid FEN");
        assert_eq!(
            get_game_state(engine.generator(), &drawn),
            GameState::InsufficientMaterial
        );
        assert_eq!(reply(&mut engine, &drawn, 3, None), None);

        let start = Position::new();
        assert_eq!(get_game_state(engine.generator(), &start), GameState::Playing);
        assert!(reply(&mut engine, &start, 2, None).is_some());
    }
}
