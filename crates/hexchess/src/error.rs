//! Error types for the hexchess rules engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Category of a rules engine failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A coordinate, step or label lies outside the hexagonal board.
    #[display("Out of range")]
    OutOfRange,
    /// A requested move is not legal in the current position.
    #[display("Illegal move")]
    IllegalMove,
    /// A save text could not be parsed or replayed.
    #[display("Invalid save")]
    InvalidSave,
}

/// Rules engine error with location tracking.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}: {} at {}:{}", kind, message, file, line)]
pub struct HexChessError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HexChessError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Creates an [`ErrorKind::OutOfRange`] error.
    #[track_caller]
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::OutOfRange, message)
    }

    /// Creates an [`ErrorKind::IllegalMove`] error.
    #[track_caller]
    pub fn illegal_move(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IllegalMove, message)
    }

    /// Creates an [`ErrorKind::InvalidSave`] error.
    #[track_caller]
    pub fn invalid_save(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidSave, message)
    }

    /// Returns the error category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Result type alias for rules engine operations.
pub type HexChessResult<T> = Result<T, HexChessError>;
