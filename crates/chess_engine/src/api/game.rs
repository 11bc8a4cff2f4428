//! Game lifecycle management

use crate::position::Position;

/// Create a new game with the standard starting position
pub fn new_game() -> Position {
    Position::new()
}

/// Reset the game to the starting position
pub fn reset_game(position: &mut Position) {
    *position = Position::new();
}
