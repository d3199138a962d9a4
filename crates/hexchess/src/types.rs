//! Core domain types for hexagonal chess.

use crate::geometry::{BOARD_MAX, BOARD_SIZE, Cell};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// No player; owner of empty cells.
    None,
    /// Player 1 (moves first, starts at the bottom).
    Player1,
    /// Player 2 (starts at the top).
    Player2,
}

impl Player {
    /// Returns the player who follows this one when `max_players` take turns.
    pub fn next(self, max_players: u8) -> Self {
        match self {
            Player::Player1 if max_players >= 2 => Player::Player2,
            _ => Player::Player1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::None => write!(f, "Nobody"),
            Player::Player1 => write!(f, "Player 1"),
            Player::Player2 => write!(f, "Player 2"),
        }
    }
}

/// Kind of chess piece. `None` marks an empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    /// No piece.
    None,
    /// Pawn.
    Pawn,
    /// Rook.
    Rook,
    /// Knight.
    Knight,
    /// Bishop.
    Bishop,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Notation letter; empty for pawns and empty cells.
    pub fn shorthand(self) -> &'static str {
        match self {
            PieceKind::None | PieceKind::Pawn => "",
            PieceKind::Rook => "R",
            PieceKind::Knight => "N",
            PieceKind::Bishop => "B",
            PieceKind::Queen => "Q",
            PieceKind::King => "K",
        }
    }

    /// Looks up a kind by its notation letter. Pawns have no letter.
    pub fn from_shorthand(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(PieceKind::Rook),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Returns true if a pawn may promote to this kind.
    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTIONS.contains(&self)
    }
}

/// A piece on the board; `Piece::EMPTY` fills every vacant cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PieceRepr")]
pub struct Piece {
    kind: PieceKind,
    owner: Player,
}

/// Unnormalized wire form of a [`Piece`].
#[derive(Deserialize)]
struct PieceRepr {
    kind: PieceKind,
    owner: Player,
}

impl From<PieceRepr> for Piece {
    fn from(repr: PieceRepr) -> Self {
        Piece::new(repr.kind, repr.owner)
    }
}

impl Piece {
    /// The empty cell.
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::None,
        owner: Player::None,
    };

    /// Creates a piece. Either half being `None` yields [`Piece::EMPTY`].
    pub fn new(kind: PieceKind, owner: Player) -> Self {
        if kind == PieceKind::None || owner == Player::None {
            Self::EMPTY
        } else {
            Self { kind, owner }
        }
    }

    /// Piece kind.
    pub fn kind(self) -> PieceKind {
        self.kind
    }

    /// Owning player.
    pub fn owner(self) -> Player {
        self.owner
    }

    /// Returns true for a vacant cell.
    pub fn is_empty(self) -> bool {
        self.kind == PieceKind::None
    }

    /// Returns true if this piece belongs to someone other than `player`.
    pub fn is_enemy_of(self, player: Player) -> bool {
        self.owner != Player::None && self.owner != player
    }

    /// Notation letter of the piece kind.
    pub fn shorthand(self) -> &'static str {
        self.kind.shorthand()
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Grid of pieces covering the full `BOARD_MAX x BOARD_MAX` square.
///
/// Cells outside the hexagon exist in storage but are never addressed,
/// because every accessor takes a [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Piece; BOARD_MAX as usize]; BOARD_MAX as usize],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[Piece::EMPTY; BOARD_MAX as usize]; BOARD_MAX as usize],
        }
    }

    /// Gets the piece on a cell.
    pub fn get(&self, cell: Cell) -> Piece {
        self.squares[usize::from(cell.file())][usize::from(cell.rank())]
    }

    /// Puts a piece on a cell, replacing whatever was there.
    pub fn set(&mut self, cell: Cell, piece: Piece) {
        self.squares[usize::from(cell.file())][usize::from(cell.rank())] = piece;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Iterates over occupied cells, file-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all()
            .map(|cell| (cell, self.get(cell)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    /// Finds the king of `player`, if it is still on the board.
    pub fn king(&self, player: Player) -> Option<Cell> {
        self.pieces()
            .find(|(_, piece)| piece.owner() == player && piece.kind() == PieceKind::King)
            .map(|(cell, _)| cell)
    }

    /// Counts squares outside the hexagon that hold a piece.
    pub(crate) fn off_board_occupied(&self) -> usize {
        let mut count = 0;
        for (file, column) in self.squares.iter().enumerate() {
            for (rank, piece) in column.iter().enumerate() {
                if !piece.is_empty() && !Cell::is_valid(file as i32, rank as i32) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The side to move can be captured next turn but has a move.
    Check,
    /// Game ended with a king capturable and no escape.
    Checkmate,
    /// The side to move has no legal move and is not in check.
    Draw,
}

impl GameStatus {
    /// Returns true if no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Draw)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Check => write!(f, "Check"),
            GameStatus::Checkmate => write!(f, "Checkmate"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Home rank of a player's pawns on `file`.
pub(crate) fn pawn_home_rank(player: Player, file: u8) -> Option<u8> {
    match player {
        Player::Player1 => (BOARD_SIZE - 2).checked_sub(Cell::centre_offset(file)),
        Player::Player2 => Some(BOARD_SIZE),
        Player::None => None,
    }
}

/// Rank a pawn of `player` promotes on for `file`.
pub(crate) fn promotion_rank(player: Player, file: u8) -> Option<u8> {
    match player {
        Player::Player1 => Some(Cell::top_rank(file)),
        Player::Player2 => Some(0),
        Player::None => None,
    }
}
