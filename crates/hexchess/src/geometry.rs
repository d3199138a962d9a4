//! Hexagonal board geometry.
//!
//! The hexagon is stored in a square `BOARD_MAX x BOARD_MAX` grid indexed by
//! (file, rank). Files left of the centre line have their ranks anchored at the
//! bottom-left edge, files right of it at the bottom-right edge, so rank numbers
//! form a chevron. A step in a fixed visual direction therefore changes the rank
//! by an amount that depends on which band of files the origin sits in.
//!
//! All of that piecewise behaviour lives in [`ADJACENT_RANK_DELTAS`] and
//! [`KNIGHT_RANK_DELTAS`]; nothing else in the crate does coordinate arithmetic.

use crate::error::{HexChessError, HexChessResult};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Length of one side of the hexagon.
pub const BOARD_SIZE: u8 = 6;

/// Extent of the addressable grid along each axis.
pub const BOARD_MAX: u8 = 2 * BOARD_SIZE - 1;

/// Number of cells inside the hexagon.
pub const CELL_COUNT: usize = 3 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize - 1) + 1;

/// Number of file bands the delta tables distinguish.
const BAND_COUNT: usize = 7;

/// A cell on the board, always inside the hex mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CellRepr")]
pub struct Cell {
    file: u8,
    rank: u8,
}

/// Unchecked wire form of a [`Cell`].
#[derive(Deserialize)]
struct CellRepr {
    file: i32,
    rank: i32,
}

impl TryFrom<CellRepr> for Cell {
    type Error = HexChessError;

    fn try_from(repr: CellRepr) -> Result<Self, Self::Error> {
        Cell::new(repr.file, repr.rank)
    }
}

impl Cell {
    /// Creates a cell, failing with `OutOfRange` when it lies off the hexagon.
    #[instrument]
    pub fn new(file: i32, rank: i32) -> HexChessResult<Self> {
        if Self::is_valid(file, rank) {
            Ok(Self {
                file: file as u8,
                rank: rank as u8,
            })
        } else {
            Err(HexChessError::out_of_range(format!(
                "cell ({}, {}) is not on the board",
                file, rank
            )))
        }
    }

    /// Returns true if (file, rank) lies inside the hex mask.
    pub fn is_valid(file: i32, rank: i32) -> bool {
        let size = i32::from(BOARD_SIZE);
        let max = i32::from(BOARD_MAX);
        if file < 0 || rank < 0 || file >= max || rank >= max {
            return false;
        }
        if file < size {
            rank < file + size
        } else {
            rank <= 3 * (size - 1) - file
        }
    }

    /// Zero-indexed file.
    pub fn file(self) -> u8 {
        self.file
    }

    /// Zero-indexed rank.
    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Highest valid rank on the given file.
    pub fn top_rank(file: u8) -> u8 {
        if file < BOARD_SIZE {
            file + BOARD_SIZE - 1
        } else {
            3 * (BOARD_SIZE - 1) - file
        }
    }

    /// Distance of a file from the centre file.
    pub(crate) fn centre_offset(file: u8) -> u8 {
        file.abs_diff(BOARD_SIZE - 1)
    }

    /// Every cell on the board, file-major.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_MAX).flat_map(|file| {
            (0..=Self::top_rank(file)).map(move |rank| Cell { file, rank })
        })
    }

    /// Moves one step in `direction`, or `None` at the edge of the board.
    pub fn step(self, direction: Direction) -> Option<Cell> {
        let band = file_band(self.file);
        let (file_delta, _) = direction.lattice_delta();
        let rank_delta = ADJACENT_RANK_DELTAS[direction.index()][band];
        self.offset(file_delta, rank_delta)
    }

    /// Moves `distance` steps in `direction`, or `None` if any step leaves the board.
    pub fn step_by(self, direction: Direction, distance: usize) -> Option<Cell> {
        (0..distance).try_fold(self, |cell, _| cell.step(direction))
    }

    /// Like [`Cell::step`], failing with `OutOfRange` at the edge of the board.
    #[instrument]
    pub fn try_step(self, direction: Direction) -> HexChessResult<Cell> {
        self.step(direction).ok_or_else(|| {
            HexChessError::out_of_range(format!("no cell {} of {}", direction, self))
        })
    }

    /// Makes a knight leap, or `None` if it lands off the board.
    pub fn leap(self, leap: KnightLeap) -> Option<Cell> {
        let band = file_band(self.file);
        let (file_delta, _) = leap.lattice_delta();
        let rank_delta = KNIGHT_RANK_DELTAS[leap.index()][band];
        self.offset(file_delta, rank_delta)
    }

    /// Walks outward from this cell, yielding each cell along `direction`.
    pub fn ray(self, direction: Direction) -> impl Iterator<Item = Cell> {
        std::iter::successors(self.step(direction), move |cell| cell.step(direction))
    }

    fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Cell> {
        let file = i32::from(self.file) + i32::from(file_delta);
        let rank = i32::from(self.rank) + i32::from(rank_delta);
        Cell::new_checked(file, rank)
    }

    fn new_checked(file: i32, rank: i32) -> Option<Cell> {
        Self::is_valid(file, rank).then_some(Cell {
            file: file as u8,
            rank: rank as u8,
        })
    }
}

/// Band of the origin file used to select a rank delta.
///
/// Bands: `<= BS-4`, `BS-3`, `BS-2`, `BS-1` (centre), `BS`, `BS+1`, `>= BS+2`.
fn file_band(file: u8) -> usize {
    let band = i32::from(file) - i32::from(BOARD_SIZE) + 4;
    band.clamp(0, BAND_COUNT as i32 - 1) as usize
}

/// One of the twelve clock directions.
///
/// Even hours are adjacent (edge-sharing) neighbours, odd hours are
/// diagonal (vertex-sharing) neighbours. XII points towards Player 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Direction {
    /// One o'clock (diagonal).
    I,
    /// Two o'clock (adjacent).
    II,
    /// Three o'clock (diagonal).
    III,
    /// Four o'clock (adjacent).
    IV,
    /// Five o'clock (diagonal).
    V,
    /// Six o'clock (adjacent).
    VI,
    /// Seven o'clock (diagonal).
    VII,
    /// Eight o'clock (adjacent).
    VIII,
    /// Nine o'clock (diagonal).
    IX,
    /// Ten o'clock (adjacent).
    X,
    /// Eleven o'clock (diagonal).
    XI,
    /// Twelve o'clock (adjacent).
    XII,
}

impl Direction {
    /// All twelve directions in clock order.
    pub const ALL: [Direction; 12] = [
        Direction::I,
        Direction::II,
        Direction::III,
        Direction::IV,
        Direction::V,
        Direction::VI,
        Direction::VII,
        Direction::VIII,
        Direction::IX,
        Direction::X,
        Direction::XI,
        Direction::XII,
    ];

    /// The six edge-sharing directions, used by rooks.
    pub const ADJACENT: [Direction; 6] = [
        Direction::II,
        Direction::IV,
        Direction::VI,
        Direction::VIII,
        Direction::X,
        Direction::XII,
    ];

    /// The six vertex-sharing directions, used by bishops.
    pub const DIAGONAL: [Direction; 6] = [
        Direction::I,
        Direction::III,
        Direction::V,
        Direction::VII,
        Direction::IX,
        Direction::XI,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the odd clock hours.
    pub fn is_diagonal(self) -> bool {
        self.index() % 2 == 0
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 6) % 12]
    }

    /// Displacement in (file, half-cell height) lattice units.
    ///
    /// Height is `2 * rank + |file - centre|`, which is uniform across the board.
    pub fn lattice_delta(self) -> (i8, i8) {
        match self {
            Direction::I => (1, 3),
            Direction::II => (1, 1),
            Direction::III => (2, 0),
            Direction::IV => (1, -1),
            Direction::V => (1, -3),
            Direction::VI => (0, -2),
            Direction::VII => (-1, -3),
            Direction::VIII => (-1, -1),
            Direction::IX => (-2, 0),
            Direction::X => (-1, 1),
            Direction::XI => (-1, 3),
            Direction::XII => (0, 2),
        }
    }
}

/// One of the twelve knight leaps, named by clock position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum KnightLeap {
    /// Leap towards one o'clock.
    I,
    /// Leap towards two o'clock.
    II,
    /// Leap towards three o'clock.
    III,
    /// Leap towards four o'clock.
    IV,
    /// Leap towards five o'clock.
    V,
    /// Leap towards six o'clock.
    VI,
    /// Leap towards seven o'clock.
    VII,
    /// Leap towards eight o'clock.
    VIII,
    /// Leap towards nine o'clock.
    IX,
    /// Leap towards ten o'clock.
    X,
    /// Leap towards eleven o'clock.
    XI,
    /// Leap towards twelve o'clock.
    XII,
}

impl KnightLeap {
    /// All twelve leaps in clock order.
    pub const ALL: [KnightLeap; 12] = [
        KnightLeap::I,
        KnightLeap::II,
        KnightLeap::III,
        KnightLeap::IV,
        KnightLeap::V,
        KnightLeap::VI,
        KnightLeap::VII,
        KnightLeap::VIII,
        KnightLeap::IX,
        KnightLeap::X,
        KnightLeap::XI,
        KnightLeap::XII,
    ];

    fn index(self) -> usize {
        self as usize
    }

    /// The leap pointing the other way.
    pub fn opposite(self) -> KnightLeap {
        Self::ALL[(self.index() + 6) % 12]
    }

    /// Displacement in (file, half-cell height) lattice units.
    pub fn lattice_delta(self) -> (i8, i8) {
        match self {
            KnightLeap::I => (1, 5),
            KnightLeap::II => (2, 4),
            KnightLeap::III => (3, 1),
            KnightLeap::IV => (3, -1),
            KnightLeap::V => (2, -4),
            KnightLeap::VI => (1, -5),
            KnightLeap::VII => (-1, -5),
            KnightLeap::VIII => (-2, -4),
            KnightLeap::IX => (-3, -1),
            KnightLeap::X => (-3, 1),
            KnightLeap::XI => (-2, 4),
            KnightLeap::XII => (-1, 5),
        }
    }
}

/// Rank delta of one step, indexed by [`Direction`] then file band.
pub const ADJACENT_RANK_DELTAS: [[i8; BAND_COUNT]; 12] = [
    [2, 2, 2, 1, 1, 1, 1],         // I
    [1, 1, 1, 0, 0, 0, 0],         // II
    [1, 1, 0, -1, -1, -1, -1],     // III
    [0, 0, 0, -1, -1, -1, -1],     // IV
    [-1, -1, -1, -2, -2, -2, -2],  // V
    [-1, -1, -1, -1, -1, -1, -1],  // VI
    [-2, -2, -2, -2, -1, -1, -1],  // VII
    [-1, -1, -1, -1, 0, 0, 0],     // VIII
    [-1, -1, -1, -1, 0, 1, 1],     // IX
    [0, 0, 0, 0, 1, 1, 1],         // X
    [1, 1, 1, 1, 2, 2, 2],         // XI
    [1, 1, 1, 1, 1, 1, 1],         // XII
];

/// Rank delta of one knight leap, indexed by [`KnightLeap`] then file band.
pub const KNIGHT_RANK_DELTAS: [[i8; BAND_COUNT]; 12] = [
    [3, 3, 3, 2, 2, 2, 2],         // I
    [3, 3, 2, 1, 1, 1, 1],         // II
    [2, 1, 0, -1, -1, -1, -1],     // III
    [1, 0, -1, -2, -2, -2, -2],    // IV
    [-1, -1, -2, -3, -3, -3, -3],  // V
    [-2, -2, -2, -3, -3, -3, -3],  // VI
    [-3, -3, -3, -3, -2, -2, -2],  // VII
    [-3, -3, -3, -3, -2, -1, -1],  // VIII
    [-2, -2, -2, -2, -1, 0, 1],    // IX
    [-1, -1, -1, -1, 0, 1, 2],     // X
    [1, 1, 1, 1, 2, 3, 3],         // XI
    [2, 2, 2, 2, 3, 3, 3],         // XII
];

#[cfg(test)]
mod tests {
    use super::*;

    fn height(cell: Cell) -> i32 {
        2 * i32::from(cell.rank()) + i32::from(Cell::centre_offset(cell.file()))
    }

    fn lattice_target(cell: Cell, (df, dh): (i8, i8)) -> Option<Cell> {
        let file = i32::from(cell.file()) + i32::from(df);
        if !(0..i32::from(BOARD_MAX)).contains(&file) {
            return None;
        }
        let h = height(cell) + i32::from(dh);
        let offset = (file - i32::from(BOARD_SIZE) + 1).abs();
        let twice_rank = h - offset;
        if twice_rank % 2 != 0 {
            return None;
        }
        Cell::new(file, twice_rank / 2).ok()
    }

    #[test]
    fn test_cell_count_is_91() {
        assert_eq!(CELL_COUNT, 91);
        assert_eq!(Cell::all().count(), 91);
    }

    #[test]
    fn test_validity_matches_triangular_mask() {
        let size = i32::from(BOARD_SIZE);
        let mut count = 0;
        for file in -2..i32::from(BOARD_MAX) + 2 {
            for rank in -2..i32::from(BOARD_MAX) + 2 {
                let in_square = (0..11).contains(&file) && (0..11).contains(&rank);
                let expected = in_square
                    && if file < size {
                        rank < file + size
                    } else {
                        rank <= 3 * (size - 1) - file
                    };
                assert_eq!(Cell::is_valid(file, rank), expected, "({file}, {rank})");
                assert_eq!(Cell::new(file, rank).is_ok(), expected);
                if expected {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 91);
    }

    #[test]
    fn test_top_rank_per_file() {
        let tops: Vec<u8> = (0..BOARD_MAX).map(Cell::top_rank).collect();
        assert_eq!(tops, vec![5, 6, 7, 8, 9, 10, 9, 8, 7, 6, 5]);
    }

    #[test]
    fn test_adjacent_table_matches_lattice() {
        for cell in Cell::all() {
            for direction in Direction::ALL {
                assert_eq!(
                    cell.step(direction),
                    lattice_target(cell, direction.lattice_delta()),
                    "{direction} from {cell:?}"
                );
            }
        }
    }

    #[test]
    fn test_knight_table_matches_lattice() {
        for cell in Cell::all() {
            for leap in KnightLeap::ALL {
                assert_eq!(
                    cell.leap(leap),
                    lattice_target(cell, leap.lattice_delta()),
                    "knight {leap} from {cell:?}"
                );
            }
        }
    }

    #[test]
    fn test_step_then_opposite_returns_home() {
        for cell in Cell::all() {
            for direction in Direction::ALL {
                if let Some(next) = cell.step(direction) {
                    assert_eq!(next.step(direction.opposite()), Some(cell));
                }
            }
            for leap in KnightLeap::ALL {
                if let Some(next) = cell.leap(leap) {
                    assert_eq!(next.leap(leap.opposite()), Some(cell));
                }
            }
        }
    }

    #[test]
    fn test_piecewise_steps_across_centre() {
        // II from the left half climbs a rank, from the centre it stays level.
        let left = Cell::new(4, 3).unwrap();
        assert_eq!(left.step(Direction::II), Some(Cell::new(5, 4).unwrap()));
        let centre = Cell::new(5, 4).unwrap();
        assert_eq!(centre.step(Direction::II), Some(Cell::new(6, 4).unwrap()));
        // III from file BS-2 lands on the same rank.
        assert_eq!(left.step(Direction::III), Some(Cell::new(6, 3).unwrap()));
        // IX from file BS lands on the same rank.
        let right = Cell::new(6, 3).unwrap();
        assert_eq!(right.step(Direction::IX), Some(Cell::new(4, 3).unwrap()));
    }

    #[test]
    fn test_corner_has_three_adjacent_neighbours() {
        let corner = Cell::new(0, 0).unwrap();
        let adjacent = Direction::ADJACENT
            .iter()
            .filter_map(|d| corner.step(*d))
            .count();
        assert_eq!(adjacent, 3);
        assert!(corner.try_step(Direction::VI).is_err());
    }

    #[test]
    fn test_diagonal_classification() {
        assert!(Direction::DIAGONAL.iter().all(|d| d.is_diagonal()));
        assert!(Direction::ADJACENT.iter().all(|d| !d.is_diagonal()));
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let bottom = Cell::new(5, 0).unwrap();
        assert_eq!(bottom.ray(Direction::XII).count(), 10);
        assert_eq!(bottom.step_by(Direction::XII, 10), Some(Cell::new(5, 10).unwrap()));
        assert_eq!(bottom.step_by(Direction::XII, 11), None);
    }

    #[test]
    fn test_deserialize_rejects_off_board_cells() {
        let cell: Cell = serde_json::from_str(r#"{"file":5,"rank":10}"#).unwrap();
        assert_eq!(cell, Cell::new(5, 10).unwrap());
        for json in [
            r#"{"file":0,"rank":10}"#,
            r#"{"file":20,"rank":20}"#,
            r#"{"file":-1,"rank":0}"#,
        ] {
            assert!(serde_json::from_str::<Cell>(json).is_err(), "{json}");
        }
    }
}
