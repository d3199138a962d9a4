//! Cell labels and algebraic move notation.
//!
//! Files are lettered from an alphabet that skips `j`; ranks are 1-based.
//! A move renders as
//! `<shorthand><from>[x]<to>[e.p.][<promotion>][+]`.

use crate::error::{HexChessError, HexChessResult};
use crate::geometry::{BOARD_MAX, Cell};
use crate::types::PieceKind;
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// File letters in order. Only the first `BOARD_MAX` are in use.
pub const FILE_LETTERS: &str = "abcdefghiklmnopqrs";

/// Suffix marking an en passant capture.
pub const EN_PASSANT_SUFFIX: &str = "e.p.";

/// Letter for a file index.
#[instrument]
pub fn file_label(index: u8) -> HexChessResult<char> {
    if index >= BOARD_MAX {
        return Err(HexChessError::out_of_range(format!("file {} is off the board", index)));
    }
    FILE_LETTERS
        .chars()
        .nth(usize::from(index))
        .ok_or_else(|| HexChessError::out_of_range(format!("no letter for file {}", index)))
}

/// File index for a letter, ignoring case.
#[instrument]
pub fn file_index(letter: char) -> HexChessResult<u8> {
    let lower = letter.to_ascii_lowercase();
    FILE_LETTERS
        .chars()
        .take(usize::from(BOARD_MAX))
        .position(|c| c == lower)
        .map(|index| index as u8)
        .ok_or_else(|| HexChessError::out_of_range(format!("'{}' is not a file letter", letter)))
}

/// 1-based label for a rank index.
#[instrument]
pub fn rank_label(index: u8) -> HexChessResult<String> {
    if index >= BOARD_MAX {
        return Err(HexChessError::out_of_range(format!("rank {} is off the board", index)));
    }
    Ok((index + 1).to_string())
}

/// Rank index for a 1-based label.
#[instrument]
pub fn rank_index(label: &str) -> HexChessResult<u8> {
    let bad = || HexChessError::out_of_range(format!("'{}' is not a rank", label));
    if label.is_empty() || !label.chars().all(|c| c.is_ascii_digit()) {
        return Err(bad());
    }
    match label.parse::<u8>() {
        Ok(n) if (1..=BOARD_MAX).contains(&n) => Ok(n - 1),
        _ => Err(bad()),
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = FILE_LETTERS
            .chars()
            .nth(usize::from(self.file()))
            .unwrap_or('?');
        write!(f, "{}{}", letter, self.rank() + 1)
    }
}

impl FromStr for Cell {
    type Err = HexChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let letter = chars
            .next()
            .ok_or_else(|| HexChessError::out_of_range("empty cell label"))?;
        let file = file_index(letter)?;
        let rank = rank_index(chars.as_str())?;
        Cell::new(i32::from(file), i32::from(rank))
    }
}

/// The parts of one rendered move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MoveNotation {
    pub(crate) piece: PieceKind,
    pub(crate) from: Cell,
    pub(crate) to: Cell,
    pub(crate) capture: bool,
    pub(crate) en_passant: bool,
    pub(crate) promotion: Option<PieceKind>,
    pub(crate) check: bool,
}

impl fmt::Display for MoveNotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.piece.shorthand(), self.from)?;
        if self.capture || self.en_passant {
            write!(f, "x")?;
        }
        write!(f, "{}", self.to)?;
        if self.en_passant {
            write!(f, "{}", EN_PASSANT_SUFFIX)?;
        }
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.shorthand())?;
        }
        if self.check {
            write!(f, "+")?;
        }
        Ok(())
    }
}
