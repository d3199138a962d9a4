//! En passant window invariant: the window belongs to the last move only.

use super::Invariant;
use crate::game::Game;
use crate::types::PieceKind;

/// Invariant: an en passant file is open only if the last move was a
/// two-square pawn advance along that file.
pub struct EnPassantWindowInvariant;

impl Invariant<Game> for EnPassantWindowInvariant {
    fn holds(game: &Game) -> bool {
        let Some(file) = game.en_passant_file() else {
            return true;
        };
        let Some(last) = game.history().last() else {
            return false;
        };
        last.from.file() == file
            && last.to.file() == file
            && last.from.rank().abs_diff(last.to.rank()) == 2
            && game.piece_at(last.to).kind() == PieceKind::Pawn
    }

    fn description() -> &'static str {
        "En passant is open only right after a two-square pawn advance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::geometry::Cell;
    use crate::variant::Variant;

    fn cell(file: i32, rank: i32) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn test_window_follows_double_step() {
        let mut game = Game::new(Variant::TestEnPassant);
        game.execute(Move::new(cell(2, 1), cell(2, 3))).unwrap();
        assert_eq!(game.en_passant_file(), Some(2));
        assert!(EnPassantWindowInvariant::holds(&game));
    }

    #[test]
    fn test_window_without_history_violates() {
        let mut game = Game::new(Variant::Glinski);
        game.en_passant_file = Some(3);
        assert!(!EnPassantWindowInvariant::holds(&game));
    }
}
