//! Save text decoding and replay.
//!
//! A save is the variant name on its first line followed by numbered move
//! lines such as `12.Qe1e9+ d7d6 `. Loading replays every move through
//! [`Game::execute`], so derived state like the en passant window is rebuilt
//! the same way it was produced.

use crate::action::Move;
use crate::error::{HexChessError, HexChessResult};
use crate::game::Game;
use crate::geometry::Cell;
use crate::notation::{EN_PASSANT_SUFFIX, file_index, rank_index};
use crate::types::PieceKind;
use crate::variant::Variant;
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// A move token decoded without reference to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedMove {
    /// Kind of the moving piece.
    pub piece: PieceKind,
    /// The move itself.
    pub mv: Move,
}

/// Decodes one notation token such as `Nc1d3`, `d4xc3e.p.` or `f10f11Q`.
///
/// # Errors
///
/// `InvalidSave` if the token does not follow the notation grammar.
#[instrument]
pub fn decode_move(token: &str) -> HexChessResult<DecodedMove> {
    let chars: Vec<char> = token.chars().collect();
    let invalid = |why: &str| HexChessError::invalid_save(format!("move '{}': {}", token, why));
    let mut pos = 0;

    let mut piece = PieceKind::Pawn;
    if let &[first, second, ..] = chars.as_slice()
        && second.is_ascii_alphabetic()
        && let Some(kind) = PieceKind::from_shorthand(first)
    {
        piece = kind;
        pos = 1;
    }

    let from = read_cell(&chars, &mut pos).map_err(|e| invalid(&e.message))?;
    if chars.get(pos) == Some(&'x') {
        pos += 1;
    }
    let to = read_cell(&chars, &mut pos).map_err(|e| invalid(&e.message))?;

    let rest: String = chars[pos..].iter().collect();
    if rest.starts_with(EN_PASSANT_SUFFIX) {
        pos += EN_PASSANT_SUFFIX.len();
    }

    let mut promotion = None;
    if let Some(&letter) = chars.get(pos)
        && letter != '+'
    {
        match PieceKind::from_shorthand(letter) {
            Some(kind) if kind.is_promotion_target() => promotion = Some(kind),
            _ => return Err(invalid("unknown promotion")),
        }
        pos += 1;
    }
    if chars.get(pos) == Some(&'+') {
        pos += 1;
    }
    if pos != chars.len() {
        return Err(invalid("trailing characters"));
    }

    Ok(DecodedMove {
        piece,
        mv: Move { from, to, promotion },
    })
}

/// Reads a file letter and a one- or two-digit rank, preferring two digits.
fn read_cell(chars: &[char], pos: &mut usize) -> HexChessResult<Cell> {
    let letter = chars
        .get(*pos)
        .copied()
        .ok_or_else(|| HexChessError::invalid_save("missing file letter"))?;
    let file = file_index(letter)?;
    *pos += 1;

    let two: Option<String> = chars.get(*pos..*pos + 2).map(|pair| pair.iter().collect());
    let rank = match two.as_deref().map(rank_index) {
        Some(Ok(rank)) => {
            *pos += 2;
            rank
        }
        _ => {
            let one: String = chars
                .get(*pos)
                .map(|c| c.to_string())
                .ok_or_else(|| HexChessError::invalid_save("missing rank"))?;
            *pos += 1;
            rank_index(&one)?
        }
    };

    Cell::new(i32::from(file), i32::from(rank))
}

/// Splits a move line `<number>.<move>[ <move>]` into its move tokens.
fn line_tokens(line: &str) -> HexChessResult<Vec<&str>> {
    let invalid = || HexChessError::invalid_save(format!("malformed move line '{}'", line));
    let (number, moves) = line.trim().split_once('.').ok_or_else(invalid)?;
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }
    let tokens: Vec<&str> = moves.split_whitespace().collect();
    if tokens.is_empty() || tokens.len() > 2 {
        return Err(invalid());
    }
    Ok(tokens)
}

impl Game {
    /// Rebuilds a game from its save text.
    ///
    /// # Errors
    ///
    /// `InvalidSave` if the header is not a loadable variant, a line or token
    /// is malformed, a token's piece does not match the board, or a move
    /// cannot be executed.
    #[instrument(skip(text), fields(len = text.len()))]
    pub fn from_save(text: &str) -> HexChessResult<Game> {
        let mut lines = text.split(['\n', '\r']).filter(|line| !line.trim().is_empty());
        let header = lines
            .next()
            .map(str::trim)
            .ok_or_else(|| HexChessError::invalid_save("save text is empty"))?;
        let variant = Variant::from_str(header)
            .map_err(|_| HexChessError::invalid_save(format!("unknown variant '{}'", header)))?;
        if !variant.is_loadable() {
            warn!(%variant, "Refusing to load demonstration layout");
            return Err(HexChessError::invalid_save(format!(
                "variant '{}' cannot be loaded",
                variant
            )));
        }

        let mut game = Game::new(variant);
        for line in lines {
            for token in line_tokens(line)? {
                game.replay(token)?;
            }
        }
        debug!(moves = game.history().len(), status = %game.status(), "Save loaded");
        Ok(game)
    }

    fn replay(&mut self, token: &str) -> HexChessResult<()> {
        let decoded = decode_move(token)?;
        let piece = self.piece_at(decoded.mv.from);
        if piece.kind() != decoded.piece || piece.owner() != self.current_player() {
            return Err(HexChessError::invalid_save(format!(
                "move '{}' does not match the piece on {}",
                token, decoded.mv.from
            )));
        }
        self.execute(decoded.mv)
            .map(|_| ())
            .map_err(|e| HexChessError::invalid_save(format!("move '{}': {}", token, e.message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn cell(file: i32, rank: i32) -> Cell {
        Cell::new(file, rank).unwrap()
    }

    #[test]
    fn test_decode_plain_pawn_move() {
        let decoded = decode_move("f5f6").unwrap();
        assert_eq!(decoded.piece, PieceKind::Pawn);
        assert_eq!(decoded.mv, Move::new(cell(5, 4), cell(5, 5)));
    }

    #[test]
    fn test_decode_piece_capture_and_check() {
        let decoded = decode_move("Qe1xe9+").unwrap();
        assert_eq!(decoded.piece, PieceKind::Queen);
        assert_eq!(decoded.mv, Move::new(cell(4, 0), cell(4, 8)));
    }

    #[test]
    fn test_decode_two_digit_ranks() {
        let decoded = decode_move("Bf10f11").unwrap();
        assert_eq!(decoded.mv, Move::new(cell(5, 9), cell(5, 10)));
        let decoded = decode_move("f10f11Q").unwrap();
        assert_eq!(decoded.mv.promotion, Some(PieceKind::Queen));
        let decoded = decode_move("Kf1f10").unwrap();
        assert_eq!(decoded.mv.to, cell(5, 9));
    }

    #[test]
    fn test_decode_en_passant() {
        let decoded = decode_move("d4xc3e.p.").unwrap();
        assert_eq!(decoded.mv, Move::new(cell(3, 3), cell(2, 2)));
    }

    #[test]
    fn test_decode_rejects_garbage() {
        for token in ["", "f", "f5", "j1j2", "f5f6Z", "f5f6K", "f5f6++", "a7a8"] {
            let err = decode_move(token).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidSave, "{token}");
        }
    }

    #[test]
    fn test_line_tokens() {
        assert_eq!(line_tokens("3.f5f6 e7e6 ").unwrap(), vec!["f5f6", "e7e6"]);
        assert_eq!(line_tokens("10.Qe1e9+").unwrap(), vec!["Qe1e9+"]);
        assert!(line_tokens("f5f6").is_err());
        assert!(line_tokens(".f5f6").is_err());
        assert!(line_tokens("1.").is_err());
        assert!(line_tokens("1.a b c").is_err());
    }
}
