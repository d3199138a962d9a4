//! Game rules for hexagonal chess.
//!
//! Pure functions over a [`Board`](crate::Board): move generation, king
//! safety and status evaluation. Nothing here mutates state; the executor in
//! [`Game`](crate::Game) composes them.

pub mod movegen;
pub mod safety;
pub mod status;

pub use movegen::generate_moves;
pub use safety::{is_king_capturable, is_safe};
pub use status::{StatusUpdate, evaluate, has_any_move};
