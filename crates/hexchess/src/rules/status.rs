//! Check, checkmate and draw detection.

use super::movegen::generate_moves;
use super::safety::is_king_capturable;
use crate::types::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// Status after a move, together with the player the turn rests with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusUpdate {
    /// New game status.
    pub status: GameStatus,
    /// Player to move, or the winner after checkmate.
    pub current_player: Player,
}

/// Returns true if any piece of `player` has at least one destination.
#[instrument(skip(board))]
pub fn has_any_move(board: &Board, player: Player, en_passant_file: Option<u8>) -> bool {
    board
        .pieces()
        .filter(|(_, piece)| piece.owner() == player)
        .any(|(cell, _)| !generate_moves(board, cell, en_passant_file, true).is_empty())
}

/// Evaluates the position after `mover` moved and the turn passed to `next`.
///
/// A mover whose own king is left capturable has lost on the spot. Otherwise
/// `next` is in check when its king is capturable, mated when it also has no
/// move, and drawn when it has no move but is not attacked. After checkmate
/// `current_player` names the winner.
#[instrument(skip(board))]
pub fn evaluate(
    board: &Board,
    mover: Player,
    next: Player,
    en_passant_file: Option<u8>,
) -> StatusUpdate {
    if is_king_capturable(board, mover) {
        debug!(?mover, "mover left its own king capturable");
        return StatusUpdate {
            status: GameStatus::Checkmate,
            current_player: next,
        };
    }

    let in_check = is_king_capturable(board, next);
    let can_move = has_any_move(board, next, en_passant_file);
    let (status, current_player) = match (in_check, can_move) {
        (true, true) => (GameStatus::Check, next),
        (true, false) => (GameStatus::Checkmate, mover),
        (false, false) => (GameStatus::Draw, next),
        (false, true) => (GameStatus::InProgress, next),
    };
    StatusUpdate {
        status,
        current_player,
    }
}
