//! Plain-text board and status rendering.
//!
//! Rows follow lattice height, so the cells of one printed row share a
//! horizontal line on the real hexagon. Player 2 sits at the top.

use hexchess::{BOARD_MAX, BOARD_SIZE, Board, Cell, Game, GameStatus, PieceKind, Player, file_label};
use tracing::instrument;

/// Highest lattice height on the board.
const MAX_HEIGHT: i32 = 2 * (BOARD_MAX as i32 - 1);

/// Character for one cell: upper case for Player 1, lower case for Player 2.
pub fn piece_char(board: &Board, cell: Cell) -> char {
    let piece = board.get(cell);
    let letter = match piece.kind() {
        PieceKind::None => return '.',
        PieceKind::Pawn => 'P',
        PieceKind::Rook => 'R',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
    };
    if piece.owner() == Player::Player2 {
        letter.to_ascii_lowercase()
    } else {
        letter
    }
}

/// Cell of `file` at lattice height `height`, if there is one.
fn cell_at_height(file: i32, height: i32) -> Option<Cell> {
    let offset = (file - i32::from(BOARD_SIZE) + 1).abs();
    let twice_rank = height - offset;
    if twice_rank < 0 || twice_rank % 2 != 0 {
        return None;
    }
    Cell::new(file, twice_rank / 2).ok()
}

/// Renders the board as text, one line per lattice height.
///
/// With labels, file letters frame the board and the rank of the centre
/// file is printed to the right of the rows where it has a cell.
#[instrument(skip(board))]
pub fn render_board(board: &Board, show_labels: bool) -> String {
    let files = 0..i32::from(BOARD_MAX);
    let centre = i32::from(BOARD_SIZE) - 1;
    let mut out = String::new();

    let letters: String = files
        .clone()
        .map(|file| {
            let letter = u8::try_from(file).ok().and_then(|f| file_label(f).ok());
            format!("{} ", letter.unwrap_or('?'))
        })
        .collect();
    if show_labels {
        out.push_str(letters.trim_end());
        out.push('\n');
    }

    for height in (0..=MAX_HEIGHT).rev() {
        let row: String = files
            .clone()
            .map(|file| match cell_at_height(file, height) {
                Some(cell) => format!("{} ", piece_char(board, cell)),
                None => "  ".to_string(),
            })
            .collect();
        out.push_str(row.trim_end());
        if show_labels && let Some(cell) = cell_at_height(centre, height) {
            let pad = (2 * BOARD_MAX as usize).saturating_sub(row.trim_end().len());
            out.push_str(&" ".repeat(pad));
            out.push_str(&(cell.rank() + 1).to_string());
        }
        out.push('\n');
    }

    if show_labels {
        out.push_str(letters.trim_end());
        out.push('\n');
    }
    out
}

/// One-line summary of whose turn it is and how the game stands.
#[instrument(skip(game))]
pub fn render_status(game: &Game) -> String {
    let turn = match game.status() {
        GameStatus::Checkmate => format!("{} wins", game.current_player()),
        GameStatus::Draw => "no winner".to_string(),
        _ if game.max_players() == 0 => "nobody to move".to_string(),
        _ => format!("{} to move", game.current_player()),
    };
    let mut line = format!("{}: {}, {}", game.variant(), game.status(), turn);
    if !game.notation().is_empty() {
        line.push_str(&format!(" (last: {})", game.notation()));
    }
    line
}
