//! Read-only serializable view of a game.

use crate::game::Game;
use crate::geometry::Cell;
use crate::types::{GameStatus, Piece, Player};
use crate::variant::Variant;
use serde::{Deserialize, Serialize};

/// A piece and the cell it stands on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedPiece {
    /// Notation label of the cell, e.g. `f5`.
    pub label: String,
    /// Cell in (file, rank) form.
    pub cell: Cell,
    /// The piece.
    pub piece: Piece,
}

/// State of a game at one point in time.
///
/// Not a persistence format; save texts are the only persisted form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Variant the game started from.
    pub variant: Variant,
    /// Player to move, or the winner after checkmate.
    pub current_player: Player,
    /// Current status.
    pub status: GameStatus,
    /// Current move number.
    pub move_number: u32,
    /// Notation of the last move.
    pub notation: String,
    /// Open en passant file, if any.
    pub en_passant_file: Option<u8>,
    /// Every occupied cell, file-major.
    pub pieces: Vec<PlacedPiece>,
}

impl From<&Game> for GameSnapshot {
    fn from(game: &Game) -> Self {
        Self {
            variant: game.variant(),
            current_player: game.current_player(),
            status: game.status(),
            move_number: game.move_number(),
            notation: game.notation().to_string(),
            en_passant_file: game.en_passant_file(),
            pieces: game
                .board()
                .pieces()
                .map(|(cell, piece)| PlacedPiece {
                    label: cell.to_string(),
                    cell,
                    piece,
                })
                .collect(),
        }
    }
}
