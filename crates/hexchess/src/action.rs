//! First-class move requests.

use crate::error::HexChessResult;
use crate::geometry::Cell;
use crate::types::PieceKind;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A request to move the piece on `from` to `to`.
///
/// Moves carry no player; the executor moves for whoever is on turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Origin cell.
    pub from: Cell,
    /// Destination cell.
    pub to: Cell,
    /// Kind a pawn becomes on its last rank.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// Creates a move without promotion.
    pub fn new(from: Cell, to: Cell) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    /// Creates a pawn move that promotes to `kind`.
    pub fn promoting(from: Cell, to: Cell, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
        }
    }

    /// Creates a move from raw coordinates, failing with `OutOfRange` if
    /// either end lies off the board.
    #[instrument]
    pub fn from_coords(
        from_file: i32,
        from_rank: i32,
        to_file: i32,
        to_rank: i32,
        promotion: Option<PieceKind>,
    ) -> HexChessResult<Self> {
        Ok(Self {
            from: Cell::new(from_file, from_rank)?,
            to: Cell::new(to_file, to_rank)?,
            promotion,
        })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.shorthand())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_from_coords_rejects_off_board() {
        let err = Move::from_coords(0, 0, 0, 6, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(Move::from_coords(0, 0, 0, 5, None).is_ok());
    }

    #[test]
    fn test_display() {
        let mv = Move::from_coords(5, 9, 5, 10, Some(PieceKind::Queen)).unwrap();
        assert_eq!(mv.to_string(), "f10-f11=Q");
    }

    #[test]
    fn test_deserialize_validates_cells() {
        let json = r#"{"from":{"file":5,"rank":4},"to":{"file":5,"rank":5},"promotion":null}"#;
        let mv: Move = serde_json::from_str(json).unwrap();
        assert_eq!(mv, Move::new(Cell::new(5, 4).unwrap(), Cell::new(5, 5).unwrap()));
        let json = r#"{"from":{"file":5,"rank":4},"to":{"file":0,"rank":10},"promotion":null}"#;
        assert!(serde_json::from_str::<Move>(json).is_err());
    }
}
