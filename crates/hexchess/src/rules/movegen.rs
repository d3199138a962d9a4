//! Per-piece move generation.

use super::safety::is_safe;
use crate::geometry::{Cell, Direction, KnightLeap};
use crate::types::{Board, PieceKind, Player, pawn_home_rank};
use tracing::instrument;

/// Direction a pawn of `player` advances in.
pub(crate) fn pawn_forward(player: Player) -> Option<Direction> {
    match player {
        Player::Player1 => Some(Direction::XII),
        Player::Player2 => Some(Direction::VI),
        Player::None => None,
    }
}

/// The two forward-diagonal directions a pawn of `player` captures along.
pub(crate) fn pawn_captures(player: Player) -> &'static [Direction] {
    match player {
        Player::Player1 => &[Direction::II, Direction::X],
        Player::Player2 => &[Direction::IV, Direction::VIII],
        Player::None => &[],
    }
}

/// Cell a pawn of `player` lands on when capturing en passant on `file`.
pub(crate) fn en_passant_target(player: Player, file: u8) -> Option<Cell> {
    let rank = match player {
        Player::Player1 => 5,
        Player::Player2 => 5 - i32::from(Cell::centre_offset(file)),
        Player::None => return None,
    };
    Cell::new(i32::from(file), rank).ok()
}

/// Returns true if a pawn of `player` moving onto `to` captures en passant
/// while the window is open on `en_passant_file`.
pub(crate) fn is_en_passant_capture(
    board: &Board,
    player: Player,
    to: Cell,
    en_passant_file: Option<u8>,
) -> bool {
    let Some(file) = en_passant_file else {
        return false;
    };
    if en_passant_target(player, file) != Some(to) || !board.is_empty(to) {
        return false;
    }
    en_passant_victim(player, to).is_some_and(|behind| {
        let piece = board.get(behind);
        piece.kind() == PieceKind::Pawn && piece.is_enemy_of(player)
    })
}

/// Square of the pawn removed by an en passant capture landing on `to`.
pub(crate) fn en_passant_victim(player: Player, to: Cell) -> Option<Cell> {
    pawn_forward(player).and_then(|forward| to.step(forward.opposite()))
}

/// Collects destinations, optionally stopping after the first.
struct Destinations {
    cells: Vec<Cell>,
    stop_at_first: bool,
}

impl Destinations {
    fn new(stop_at_first: bool) -> Self {
        Self {
            cells: Vec::new(),
            stop_at_first,
        }
    }

    /// Records a destination; returns true once no more are wanted.
    fn push(&mut self, cell: Cell) -> bool {
        self.cells.push(cell);
        self.is_done()
    }

    fn is_done(&self) -> bool {
        self.stop_at_first && !self.cells.is_empty()
    }
}

/// Enumerates the destinations of the piece on `from`.
///
/// A destination held by the mover's own piece is never produced. King
/// destinations are filtered through [`is_safe`]. With `stop_at_first` the
/// result holds at most one cell, the same one the full enumeration lists
/// first.
#[instrument(skip(board), fields(cell = %from))]
pub fn generate_moves(
    board: &Board,
    from: Cell,
    en_passant_file: Option<u8>,
    stop_at_first: bool,
) -> Vec<Cell> {
    let piece = board.get(from);
    let player = piece.owner();
    let mut out = Destinations::new(stop_at_first);

    match piece.kind() {
        PieceKind::None => {}
        PieceKind::Pawn => pawn_moves(board, from, player, en_passant_file, &mut out),
        PieceKind::Rook => slide(board, from, player, &Direction::ADJACENT, &mut out),
        PieceKind::Bishop => slide(board, from, player, &Direction::DIAGONAL, &mut out),
        PieceKind::Queen => slide(board, from, player, &Direction::ALL, &mut out),
        PieceKind::Knight => {
            for leap in KnightLeap::ALL {
                if let Some(to) = from.leap(leap)
                    && !is_own(board, to, player)
                    && out.push(to)
                {
                    break;
                }
            }
        }
        PieceKind::King => {
            for direction in Direction::ALL {
                if let Some(to) = from.step(direction)
                    && !is_own(board, to, player)
                    && is_safe(board, to, player)
                    && out.push(to)
                {
                    break;
                }
            }
        }
    }

    out.cells
}

fn is_own(board: &Board, cell: Cell, player: Player) -> bool {
    let piece = board.get(cell);
    !piece.is_empty() && piece.owner() == player
}

/// Ray-casts along each direction, including the first enemy piece met.
fn slide(
    board: &Board,
    from: Cell,
    player: Player,
    directions: &[Direction],
    out: &mut Destinations,
) {
    for &direction in directions {
        for to in from.ray(direction) {
            let target = board.get(to);
            if target.is_empty() {
                if out.push(to) {
                    return;
                }
                continue;
            }
            if target.owner() != player && out.push(to) {
                return;
            }
            break;
        }
    }
}

fn pawn_moves(
    board: &Board,
    from: Cell,
    player: Player,
    en_passant_file: Option<u8>,
    out: &mut Destinations,
) {
    let Some(forward) = pawn_forward(player) else {
        return;
    };

    if let Some(one) = from.step(forward)
        && board.is_empty(one)
    {
        if out.push(one) {
            return;
        }
        if pawn_home_rank(player, from.file()) == Some(from.rank())
            && let Some(two) = one.step(forward)
            && board.is_empty(two)
            && out.push(two)
        {
            return;
        }
    }

    for &direction in pawn_captures(player) {
        let Some(to) = from.step(direction) else {
            continue;
        };
        let target = board.get(to);
        let captures = !target.is_empty() && target.is_enemy_of(player);
        if (captures || is_en_passant_capture(board, player, to, en_passant_file))
            && out.push(to)
        {
            return;
        }
    }
}
