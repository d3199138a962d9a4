//! Contract-based validation for move execution.
//!
//! Preconditions run before the executor touches any state; the
//! postcondition re-checks the board invariants after the move.

use crate::action::Move;
use crate::error::{HexChessError, HexChessResult};
use crate::game::Game;
use crate::invariants::{HexChessInvariants, InvariantSet};
use crate::types::Player;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions of a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> HexChessResult<()>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> HexChessResult<()>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails once the status is checkmate or draw.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &Game) -> HexChessResult<()> {
        if game.status().is_terminal() {
            Err(HexChessError::illegal_move(format!(
                "game is over ({})",
                game.status()
            )))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the origin holds a piece of the player to move.
pub struct PieceBelongsToMover;

impl PieceBelongsToMover {
    /// Fails for empty origins, enemy pieces and games without players.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &Game) -> HexChessResult<()> {
        let piece = game.piece_at(mv.from);
        if game.max_players() == 0 || game.current_player() == Player::None {
            return Err(HexChessError::illegal_move("nobody is on turn"));
        }
        if piece.is_empty() {
            return Err(HexChessError::illegal_move(format!("no piece on {}", mv.from)));
        }
        if piece.owner() != game.current_player() {
            return Err(HexChessError::illegal_move(format!(
                "piece on {} belongs to {}, {} is to move",
                mv.from,
                piece.owner(),
                game.current_player()
            )));
        }
        Ok(())
    }
}

/// Precondition: the destination is one the piece can reach.
pub struct DestinationIsLegal;

impl DestinationIsLegal {
    /// Fails when `mv.to` is not among the generated moves.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &Game) -> HexChessResult<()> {
        if game.legal_moves(mv.from).contains(&mv.to) {
            Ok(())
        } else {
            Err(HexChessError::illegal_move(format!(
                "{} cannot move to {}",
                mv.from, mv.to
            )))
        }
    }
}

/// Precondition: a promotion kind is given exactly when the move promotes.
pub struct PromotionMatches;

impl PromotionMatches {
    /// Fails for a missing, unexpected or unsupported promotion kind.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &Game) -> HexChessResult<()> {
        match (game.is_promotion(mv.from, mv.to), mv.promotion) {
            (true, None) => Err(HexChessError::illegal_move(format!(
                "move to {} must name a promotion",
                mv.to
            ))),
            (false, Some(_)) => Err(HexChessError::illegal_move(format!(
                "move to {} cannot promote",
                mv.to
            ))),
            (true, Some(kind)) if !kind.is_promotion_target() => Err(
                HexChessError::illegal_move(format!("cannot promote to {:?}", kind)),
            ),
            _ => Ok(()),
        }
    }
}

/// Composite precondition run by the executor.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in order.
    #[instrument(skip(game))]
    pub fn check(mv: &Move, game: &Game) -> HexChessResult<()> {
        GameNotOver::check(mv, game)?;
        PieceBelongsToMover::check(mv, game)?;
        DestinationIsLegal::check(mv, game)?;
        PromotionMatches::check(mv, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for [`Game::execute`].
///
/// Postconditions: exactly one move was appended to the history, the move
/// number never decreases, and every board invariant still holds.
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> HexChessResult<()> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> HexChessResult<()> {
        if after.history().len() != before.history().len() + 1 {
            return Err(HexChessError::illegal_move(
                "postcondition failed: history did not grow by one move",
            ));
        }
        if after.move_number() < before.move_number() {
            return Err(HexChessError::illegal_move(
                "postcondition failed: move number went backwards",
            ));
        }
        HexChessInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HexChessError::illegal_move(format!("postcondition failed: {}", descriptions))
        })
    }
}
