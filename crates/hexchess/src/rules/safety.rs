//! King-safety validation by ray-casting.

use super::movegen::pawn_captures;
use crate::geometry::{Cell, Direction, KnightLeap};
use crate::types::{Board, PieceKind, Player};
use tracing::instrument;

/// Returns true if no opponent piece could capture a piece of `player`
/// standing on `cell` on the opponent's next move.
///
/// `player`'s own king never blocks a ray, so a king may be tested on a
/// square it is about to move to while still standing on its origin.
#[instrument(skip(board))]
pub fn is_safe(board: &Board, cell: Cell, player: Player) -> bool {
    for direction in Direction::ALL {
        for (distance, at) in cell.ray(direction).enumerate() {
            let piece = board.get(at);
            if piece.is_empty() {
                continue;
            }
            if !piece.is_enemy_of(player) {
                if piece.kind() == PieceKind::King {
                    continue;
                }
                break;
            }
            if threatens_along(piece.kind(), piece.owner(), direction, distance) {
                return false;
            }
            break;
        }
    }

    !KnightLeap::ALL.iter().any(|&leap| {
        cell.leap(leap).is_some_and(|at| {
            let piece = board.get(at);
            piece.kind() == PieceKind::Knight && piece.is_enemy_of(player)
        })
    })
}

/// Whether an enemy piece met `distance + 1` steps out along `direction`
/// attacks the origin of the ray.
fn threatens_along(kind: PieceKind, owner: Player, direction: Direction, distance: usize) -> bool {
    match kind {
        PieceKind::King => distance == 0,
        PieceKind::Pawn => distance == 0 && pawn_captures(owner).contains(&direction.opposite()),
        PieceKind::Rook => !direction.is_diagonal(),
        PieceKind::Bishop => direction.is_diagonal(),
        PieceKind::Queen => true,
        PieceKind::Knight | PieceKind::None => false,
    }
}

/// Returns true if `player`'s king could be taken next turn.
///
/// A missing king counts as already lost.
pub fn is_king_capturable(board: &Board, player: Player) -> bool {
    match board.king(player) {
        Some(cell) => !is_safe(board, cell, player),
        None => true,
    }
}
