//! Named starting layouts.

use crate::geometry::{BOARD_SIZE, Cell};
use crate::types::{Board, Piece, PieceKind, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named initial board layout.
///
/// `Glinski` is the full two-player game. The `test*` layouts each show how
/// one kind of piece moves; `Decoration` is a non-playable backdrop.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
pub enum Variant {
    /// No pieces at all.
    #[strum(serialize = "Empty")]
    Empty,
    /// Standard Glinski hexagonal chess.
    #[strum(serialize = "Glinski")]
    Glinski,
    /// Player 1's pawns only.
    #[strum(serialize = "testPawn")]
    #[serde(rename = "testPawn")]
    TestPawn,
    /// Player 1's rooks only.
    #[strum(serialize = "testRook")]
    #[serde(rename = "testRook")]
    TestRook,
    /// Player 1's knights only.
    #[strum(serialize = "testKnight")]
    #[serde(rename = "testKnight")]
    TestKnight,
    /// Player 1's bishops only.
    #[strum(serialize = "testBishop")]
    #[serde(rename = "testBishop")]
    TestBishop,
    /// Player 1's queen and king.
    #[strum(serialize = "testQueenKing")]
    #[serde(rename = "testQueenKing")]
    TestQueenKing,
    /// Four pawns a side, set up to show en passant.
    #[strum(serialize = "testEnPassant")]
    #[serde(rename = "testEnPassant")]
    TestEnPassant,
    /// Every cell filled, nobody to move.
    #[strum(serialize = "Decoration")]
    Decoration,
}

/// How the status is evaluated after each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rules {
    /// Check, checkmate and draw are evaluated after every move.
    Standard,
    /// Status stays `InProgress`; used by demonstration layouts.
    Demonstration,
}

impl Variant {
    /// Number of players taking turns.
    pub fn max_players(self) -> u8 {
        match self {
            Variant::Glinski | Variant::TestEnPassant => 2,
            Variant::TestPawn
            | Variant::TestRook
            | Variant::TestKnight
            | Variant::TestBishop
            | Variant::TestQueenKing => 1,
            Variant::Empty | Variant::Decoration => 0,
        }
    }

    /// Default status rules for this layout.
    pub fn rules(self) -> Rules {
        match self {
            Variant::Glinski => Rules::Standard,
            _ => Rules::Demonstration,
        }
    }

    /// Returns true if a save text with this header can be loaded.
    pub fn is_loadable(self) -> bool {
        self == Variant::Glinski
    }

    /// Builds the starting board.
    #[instrument]
    pub fn layout(self) -> Board {
        let mut board = Board::new();
        let mut put = |file: i32, rank: i32, kind: PieceKind, owner: Player| {
            if let Ok(cell) = Cell::new(file, rank) {
                board.set(cell, Piece::new(kind, owner));
            }
        };
        let centre = i32::from(BOARD_SIZE) - 1;

        match self {
            Variant::Glinski => {
                for file in 1..=9 {
                    put(file, 4 - (file - centre).abs(), PieceKind::Pawn, Player::Player1);
                    put(file, 6, PieceKind::Pawn, Player::Player2);
                }
                for file in [2, 8] {
                    put(file, 0, PieceKind::Rook, Player::Player1);
                    put(file, 7, PieceKind::Rook, Player::Player2);
                }
                for file in [3, 7] {
                    put(file, 0, PieceKind::Knight, Player::Player1);
                    put(file, 8, PieceKind::Knight, Player::Player2);
                }
                for rank in 0..3 {
                    put(5, rank, PieceKind::Bishop, Player::Player1);
                    put(5, rank + 8, PieceKind::Bishop, Player::Player2);
                }
                put(4, 0, PieceKind::Queen, Player::Player1);
                put(4, 9, PieceKind::Queen, Player::Player2);
                put(6, 0, PieceKind::King, Player::Player1);
                put(6, 9, PieceKind::King, Player::Player2);
            }
            Variant::TestPawn => {
                for file in 1..=9 {
                    put(file, 4 - (file - centre).abs(), PieceKind::Pawn, Player::Player1);
                }
            }
            Variant::TestRook => {
                put(2, 0, PieceKind::Rook, Player::Player1);
                put(8, 0, PieceKind::Rook, Player::Player1);
            }
            Variant::TestKnight => {
                put(3, 0, PieceKind::Knight, Player::Player1);
                put(7, 0, PieceKind::Knight, Player::Player1);
            }
            Variant::TestBishop => {
                for rank in 0..3 {
                    put(5, rank, PieceKind::Bishop, Player::Player1);
                }
            }
            Variant::TestQueenKing => {
                put(4, 0, PieceKind::Queen, Player::Player1);
                put(6, 0, PieceKind::King, Player::Player1);
            }
            Variant::TestEnPassant => {
                put(1, 4, PieceKind::Pawn, Player::Player1);
                put(2, 1, PieceKind::Pawn, Player::Player1);
                put(7, 4, PieceKind::Pawn, Player::Player1);
                put(8, 1, PieceKind::Pawn, Player::Player1);
                put(2, 6, PieceKind::Pawn, Player::Player2);
                put(3, 3, PieceKind::Pawn, Player::Player2);
                put(6, 6, PieceKind::Pawn, Player::Player2);
                put(9, 2, PieceKind::Pawn, Player::Player2);
            }
            Variant::Decoration => {
                const CYCLE: [PieceKind; 6] = [
                    PieceKind::Pawn,
                    PieceKind::Rook,
                    PieceKind::Knight,
                    PieceKind::Bishop,
                    PieceKind::Queen,
                    PieceKind::King,
                ];
                let size = i32::from(BOARD_SIZE);
                for cell in Cell::all() {
                    let file = i32::from(cell.file());
                    let rank = i32::from(cell.rank());
                    let index = (rank - (file - centre).abs() + size).rem_euclid(6) as usize;
                    put(file, rank, CYCLE[index], Player::Player2);
                }
            }
            Variant::Empty => {}
        }

        board
    }
}
