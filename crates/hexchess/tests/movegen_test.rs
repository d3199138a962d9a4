//! Tests for move generation through the game API.

use hexchess::{Cell, Game, GameStatus, Move, PieceKind, Player, Variant};

fn cell(file: i32, rank: i32) -> Cell {
    Cell::new(file, rank).unwrap()
}

#[test]
fn test_opening_position() {
    let game = Game::new(Variant::Glinski);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.movable_pieces().len(), 18);

    let pawns: Vec<Cell> = game
        .board()
        .pieces()
        .filter(|(_, p)| p.owner() == Player::Player1 && p.kind() == PieceKind::Pawn)
        .map(|(c, _)| c)
        .collect();
    assert_eq!(pawns.len(), 9);
    for pawn in pawns {
        assert_eq!(game.legal_moves(pawn).len(), 2, "pawn on {pawn}");
    }
}

#[test]
fn test_only_current_player_pieces_move() {
    let game = Game::new(Variant::Glinski);
    assert!(game.legal_moves(cell(5, 6)).is_empty());
    assert!(!game.has_legal_move(cell(5, 6)));
    assert!(game.legal_moves(cell(5, 5)).is_empty());
}

#[test]
fn test_single_pawn_advances() {
    let mut game = Game::new(Variant::TestPawn);
    let start = cell(5, 4);
    assert_eq!(game.legal_moves(start), vec![cell(5, 5), cell(5, 6)]);

    game.execute(Move::new(start, cell(5, 5))).unwrap();
    assert_eq!(game.current_player(), Player::Player1);
    assert_eq!(game.legal_moves(cell(5, 5)), vec![cell(5, 6)]);
}

#[test]
fn test_single_rook_layout() {
    let game = Game::new(Variant::TestRook);
    assert_eq!(game.max_players(), 1);
    assert_eq!(game.movable_pieces(), vec![cell(2, 0), cell(8, 0)]);
    let moves = game.legal_moves(cell(2, 0));
    assert!(moves.contains(&cell(2, 7)));
    assert!(!moves.contains(&cell(8, 0)));
}

#[test]
fn test_knight_layout_leaps() {
    let game = Game::new(Variant::TestKnight);
    assert_eq!(
        game.legal_moves(cell(3, 0)),
        vec![cell(4, 3), cell(5, 3), cell(6, 1), cell(6, 0), cell(1, 1), cell(2, 2)]
    );
}

#[test]
fn test_empty_layouts_have_no_movable_pieces() {
    assert!(Game::new(Variant::Empty).movable_pieces().is_empty());
    assert!(Game::new(Variant::Decoration).movable_pieces().is_empty());
}
