//! Off-board squares stay empty.

use super::Invariant;
use crate::game::Game;

/// Invariant: squares of the storage grid outside the hexagon hold no piece.
pub struct OffBoardEmptyInvariant;

impl Invariant<Game> for OffBoardEmptyInvariant {
    fn holds(game: &Game) -> bool {
        game.board().off_board_occupied() == 0
    }

    fn description() -> &'static str {
        "Squares outside the hexagon are empty"
    }
}
