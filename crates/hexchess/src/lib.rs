//! Hexchess - a rules engine for Glinski hexagonal chess
//!
//! The library owns the authoritative game state: board geometry, move
//! generation, king safety, move execution with en passant and promotion,
//! check/checkmate/draw detection, algebraic notation and the replayable
//! save text. It performs no I/O.
//!
//! # Architecture
//!
//! - **Geometry**: the 91-cell hexagon in an 11 x 11 grid, with table-driven
//!   steps in twelve directions and twelve knight leaps
//! - **Rules**: pure move generation, king safety and status evaluation
//! - **Game**: the state machine that validates and executes moves
//! - **Save**: notation decoding and replay of saved games
//!
//! # Example
//!
//! ```
//! use hexchess::{Cell, Game, GameStatus, Move, Variant};
//!
//! # fn example() -> hexchess::HexChessResult<()> {
//! let mut game = Game::new(Variant::Glinski);
//! let from: Cell = "f5".parse()?;
//! let to: Cell = "f6".parse()?;
//! assert_eq!(game.execute(Move::new(from, to))?, GameStatus::InProgress);
//! assert_eq!(game.save_text(), "Glinski\n1.f5f6 ");
//!
//! let reloaded = Game::from_save(game.save_text())?;
//! assert_eq!(reloaded, game);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod contracts;
mod error;
mod game;
mod geometry;
mod invariants;
mod notation;
mod rules;
mod save;
mod snapshot;
mod types;
mod variant;

// Crate-level exports - Errors
pub use error::{ErrorKind, HexChessError, HexChessResult};

// Crate-level exports - Geometry
pub use geometry::{
    ADJACENT_RANK_DELTAS, BOARD_MAX, BOARD_SIZE, CELL_COUNT, Cell, Direction, KNIGHT_RANK_DELTAS,
    KnightLeap,
};

// Crate-level exports - Domain types
pub use action::Move;
pub use types::{Board, GameStatus, Piece, PieceKind, Player};
pub use variant::{Rules, Variant};

// Crate-level exports - Rules
pub use rules::{StatusUpdate, evaluate, generate_moves, has_any_move, is_king_capturable, is_safe};

// Crate-level exports - Game state machine
pub use game::{Game, GameSetup};
pub use snapshot::{GameSnapshot, PlacedPiece};

// Crate-level exports - Notation and saves
pub use notation::{EN_PASSANT_SUFFIX, FILE_LETTERS, file_index, file_label, rank_index, rank_label};
pub use save::{DecodedMove, decode_move};

// Crate-level exports - Contracts and invariants
pub use contracts::{
    Contract, DestinationIsLegal, GameNotOver, LegalMove, MoveContract, PieceBelongsToMover,
    PromotionMatches,
};
pub use invariants::{
    EnPassantWindowInvariant, HexChessInvariants, Invariant, InvariantSet, InvariantViolation,
    OffBoardEmptyInvariant, SingleKingInvariant,
};
