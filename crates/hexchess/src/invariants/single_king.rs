//! Single king invariant: no player ever has two kings.

use super::Invariant;
use crate::game::Game;
use crate::types::{PieceKind, Player};

/// Invariant: each player has at most one king.
///
/// A missing king is allowed; it means that player has lost. Layouts
/// without players are decorative and exempt.
pub struct SingleKingInvariant;

impl Invariant<Game> for SingleKingInvariant {
    fn holds(game: &Game) -> bool {
        if game.max_players() == 0 {
            return true;
        }
        [Player::Player1, Player::Player2].into_iter().all(|player| {
            game.board()
                .pieces()
                .filter(|(_, p)| p.owner() == player && p.kind() == PieceKind::King)
                .count()
                <= 1
        })
    }

    fn description() -> &'static str {
        "Each player has at most one king"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameSetup;
    use crate::geometry::Cell;
    use crate::types::Piece;
    use crate::variant::Variant;

    #[test]
    fn test_missing_king_holds() {
        let game = Game::new(Variant::TestRook);
        assert!(SingleKingInvariant::holds(&game));
    }

    #[test]
    fn test_second_king_violates() {
        let game = GameSetup::new(Variant::TestQueenKing)
            .with_piece(Cell::new(5, 5).unwrap(), Piece::new(PieceKind::King, Player::Player1))
            .start();
        assert!(!SingleKingInvariant::holds(&game));
    }

    #[test]
    fn test_decoration_is_exempt() {
        assert!(SingleKingInvariant::holds(&Game::new(Variant::Decoration)));
    }
}
