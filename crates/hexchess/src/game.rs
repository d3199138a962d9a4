//! Game setup and the move-execution state machine.

use crate::action::Move;
use crate::contracts::{Contract, MoveContract};
use crate::error::HexChessResult;
use crate::geometry::Cell;
use crate::notation::MoveNotation;
use crate::rules::{evaluate, generate_moves, has_any_move};
use crate::rules::movegen::{en_passant_victim, is_en_passant_capture, pawn_forward};
use crate::snapshot::GameSnapshot;
use crate::types::{Board, GameStatus, Piece, PieceKind, Player, pawn_home_rank, promotion_rank};
use crate::variant::{Rules, Variant};
use tracing::{debug, info, instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Setup
// ─────────────────────────────────────────────────────────────

/// Builder for the starting position of a game.
///
/// Starts from a variant layout; individual cells, the player count and the
/// status rules can be overridden before [`GameSetup::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSetup {
    variant: Variant,
    board: Board,
    max_players: u8,
    rules: Rules,
}

impl GameSetup {
    /// Creates a setup holding the layout of `variant`.
    #[instrument]
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            board: variant.layout(),
            max_players: variant.max_players(),
            rules: variant.rules(),
        }
    }

    /// Places `piece` on `cell`. `Piece::EMPTY` clears the cell.
    pub fn with_piece(mut self, cell: Cell, piece: Piece) -> Self {
        self.board.set(cell, piece);
        self
    }

    /// Overrides the number of players taking turns.
    pub fn with_players(mut self, max_players: u8) -> Self {
        self.max_players = max_players.min(2);
        self
    }

    /// Chooses how the status is evaluated.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Variant the layout started from.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Board as it will be when the game starts.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with Player 1 to move.
    #[instrument(skip(self), fields(variant = %self.variant))]
    pub fn start(self) -> Game {
        debug!(max_players = self.max_players, rules = ?self.rules, "Starting game");
        Game {
            board: self.board.clone(),
            current_player: Player::Player1,
            status: GameStatus::InProgress,
            en_passant_file: None,
            move_number: 0,
            notation: String::new(),
            save_text: self.variant.to_string(),
            history: Vec::new(),
            setup: self,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game
// ─────────────────────────────────────────────────────────────

/// A game in any state.
///
/// All fields change only through [`Game::execute`] and [`Game::undo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) setup: GameSetup,
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) status: GameStatus,
    pub(crate) en_passant_file: Option<u8>,
    pub(crate) move_number: u32,
    pub(crate) notation: String,
    pub(crate) save_text: String,
    pub(crate) history: Vec<Move>,
}

impl Game {
    /// Starts a game from the plain layout of `variant`.
    pub fn new(variant: Variant) -> Self {
        GameSetup::new(variant).start()
    }

    /// Executes a move for the current player and returns the new status.
    ///
    /// Nothing is mutated unless every precondition holds.
    ///
    /// # Errors
    ///
    /// `IllegalMove` if the game is over, the origin does not hold a piece of
    /// the player to move, the destination is not legal, or the promotion
    /// kind is missing, unexpected or not one of Q, R, B, N.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn execute(&mut self, mv: Move) -> HexChessResult<GameStatus> {
        if let Err(err) = MoveContract::pre(self, &mv) {
            warn!(error = %err, "Move rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.current_player;
        let piece = self.board.get(mv.from);

        if mover == Player::Player1 {
            self.move_number += 1;
            self.save_text.push_str(&format!("\n{}.", self.move_number));
        }

        let en_passant = piece.kind() == PieceKind::Pawn
            && mv.from.file() != mv.to.file()
            && is_en_passant_capture(&self.board, mover, mv.to, self.en_passant_file);
        let mut notation = MoveNotation {
            piece: piece.kind(),
            from: mv.from,
            to: mv.to,
            capture: !self.board.is_empty(mv.to),
            en_passant,
            promotion: mv.promotion,
            check: false,
        };

        if en_passant && let Some(victim) = en_passant_victim(mover, mv.to) {
            debug!(victim = %victim, "En passant capture");
            self.board.set(victim, Piece::EMPTY);
        }

        self.en_passant_file = is_double_step(piece, mv).then_some(mv.from.file());

        let placed = match mv.promotion {
            Some(kind) => Piece::new(kind, mover),
            None => piece,
        };
        self.board.set(mv.from, Piece::EMPTY);
        self.board.set(mv.to, placed);

        let next = mover.next(self.setup.max_players);
        if self.evaluates_status() {
            let update = evaluate(&self.board, mover, next, self.en_passant_file);
            self.status = update.status;
            self.current_player = update.current_player;
            notation.check = update.status == GameStatus::Check;
        } else {
            self.current_player = next;
        }

        self.notation = notation.to_string();
        self.save_text.push_str(&self.notation);
        self.save_text.push(' ');
        self.history.push(mv);

        if self.status.is_terminal() {
            info!(status = %self.status, winner = ?self.winner(), notation = %self.notation, "Game over");
        } else {
            debug!(status = %self.status, notation = %self.notation, "Move executed");
        }

        #[cfg(debug_assertions)]
        {
            let checked = MoveContract::post(&before, self);
            debug_assert!(checked.is_ok(), "{:?}", checked);
        }

        Ok(self.status)
    }

    /// Takes back the last move by replaying all earlier moves from the
    /// starting position. Returns the removed move, or `None` if no move has
    /// been made.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo(&mut self) -> HexChessResult<Option<Move>> {
        let Some((&last, earlier)) = self.history.split_last() else {
            return Ok(None);
        };
        let mut replayed = self.setup.clone().start();
        for &mv in earlier {
            replayed.execute(mv)?;
        }
        debug!(undone = %last, "Move taken back");
        *self = replayed;
        Ok(Some(last))
    }

    fn evaluates_status(&self) -> bool {
        self.setup.rules == Rules::Standard && self.setup.max_players >= 2
    }

    // ─────────────────────────────────────────────────────────────
    //  Queries
    // ─────────────────────────────────────────────────────────────

    /// Cells of the current player's pieces that have at least one move.
    #[instrument(skip(self))]
    pub fn movable_pieces(&self) -> Vec<Cell> {
        if !self.accepts_moves() {
            return Vec::new();
        }
        self.board
            .pieces()
            .filter(|(_, piece)| piece.owner() == self.current_player)
            .map(|(cell, _)| cell)
            .filter(|&cell| self.has_legal_move(cell))
            .collect()
    }

    /// Legal destinations of the piece on `cell`.
    ///
    /// Empty when the cell holds no piece of the player to move or the game
    /// is over.
    #[instrument(skip(self))]
    pub fn legal_moves(&self, cell: Cell) -> Vec<Cell> {
        if !self.accepts_moves() || self.board.get(cell).owner() != self.current_player {
            return Vec::new();
        }
        generate_moves(&self.board, cell, self.en_passant_file, false)
    }

    /// Returns true if the piece on `cell` can move.
    pub fn has_legal_move(&self, cell: Cell) -> bool {
        self.accepts_moves()
            && self.board.get(cell).owner() == self.current_player
            && !generate_moves(&self.board, cell, self.en_passant_file, true).is_empty()
    }

    /// Returns true if the current player has any move at all.
    pub fn can_move(&self) -> bool {
        self.accepts_moves() && has_any_move(&self.board, self.current_player, self.en_passant_file)
    }

    /// Returns true if moving the piece on `from` to `to` needs a promotion
    /// kind.
    pub fn is_promotion(&self, from: Cell, to: Cell) -> bool {
        let piece = self.board.get(from);
        piece.kind() == PieceKind::Pawn && promotion_rank(piece.owner(), to.file()) == Some(to.rank())
    }

    fn accepts_moves(&self) -> bool {
        self.setup.max_players > 0 && !self.status.is_terminal()
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Piece on `cell`.
    pub fn piece_at(&self, cell: Cell) -> Piece {
        self.board.get(cell)
    }

    /// Player to move, or the winner once checkmated.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of players taking turns.
    pub fn max_players(&self) -> u8 {
        self.setup.max_players
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// File on which an en passant capture is open for this move only.
    pub fn en_passant_file(&self) -> Option<u8> {
        self.en_passant_file
    }

    /// Number of the current move pair; 0 before Player 1's first move.
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Notation of the last executed move.
    pub fn notation(&self) -> &str {
        &self.notation
    }

    /// Save text: the variant name followed by every executed move.
    pub fn save_text(&self) -> &str {
        &self.save_text
    }

    /// Moves executed so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Variant the game started from.
    pub fn variant(&self) -> Variant {
        self.setup.variant
    }

    /// Status rules in force.
    pub fn rules(&self) -> Rules {
        self.setup.rules
    }

    /// The winner, once the game ended in checkmate.
    pub fn winner(&self) -> Option<Player> {
        (self.status == GameStatus::Checkmate).then_some(self.current_player)
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }
}

/// Returns true for a pawn's two-square advance from its home rank.
fn is_double_step(piece: Piece, mv: Move) -> bool {
    piece.kind() == PieceKind::Pawn
        && pawn_home_rank(piece.owner(), mv.from.file()) == Some(mv.from.rank())
        && pawn_forward(piece.owner()).and_then(|forward| mv.from.step_by(forward, 2)) == Some(mv.to)
}
