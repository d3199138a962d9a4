//! Tests for the en passant window.

use hexchess::{Cell, Game, Move, PieceKind, Player, Variant};

fn cell(file: i32, rank: i32) -> Cell {
    Cell::new(file, rank).unwrap()
}

fn pawns_of(game: &Game, player: Player) -> Vec<Cell> {
    game.board()
        .pieces()
        .filter(|(_, p)| p.owner() == player && p.kind() == PieceKind::Pawn)
        .map(|(c, _)| c)
        .collect()
}

#[test]
fn test_double_step_offers_capture_to_adjacent_pawn_only() {
    let mut game = Game::new(Variant::TestEnPassant);
    game.execute(Move::new(cell(2, 1), cell(2, 3))).unwrap();
    assert_eq!(game.notation(), "c2c4");
    assert_eq!(game.en_passant_file(), Some(2));
    assert_eq!(game.current_player(), Player::Player2);

    for pawn in pawns_of(&game, Player::Player2) {
        let offers = game.legal_moves(pawn).contains(&cell(2, 2));
        assert_eq!(offers, pawn == cell(3, 3), "pawn on {pawn}");
    }
}

#[test]
fn test_capture_removes_passed_pawn() {
    let mut game = Game::new(Variant::TestEnPassant);
    game.execute(Move::new(cell(2, 1), cell(2, 3))).unwrap();
    game.execute(Move::new(cell(3, 3), cell(2, 2))).unwrap();

    assert_eq!(game.notation(), "d4xc3e.p.");
    assert!(game.notation().ends_with(hexchess::EN_PASSANT_SUFFIX));
    assert!(game.piece_at(cell(2, 3)).is_empty());
    assert_eq!(game.piece_at(cell(2, 2)).owner(), Player::Player2);
    assert_eq!(game.en_passant_file(), None);
    assert_eq!(game.save_text(), "testEnPassant\n1.c2c4 d4xc3e.p. ");
}

#[test]
fn test_window_closes_after_one_move() {
    let mut game = Game::new(Variant::TestEnPassant);
    game.execute(Move::new(cell(2, 1), cell(2, 3))).unwrap();
    game.execute(Move::new(cell(9, 2), cell(9, 1))).unwrap();
    assert_eq!(game.en_passant_file(), None);
    game.execute(Move::new(cell(7, 4), cell(7, 5))).unwrap();

    assert!(!game.legal_moves(cell(3, 3)).contains(&cell(2, 2)));
    assert!(game.execute(Move::new(cell(3, 3), cell(2, 2))).is_err());
}

#[test]
fn test_player_two_double_step_can_be_taken() {
    let mut game = Game::new(Variant::TestEnPassant);
    game.execute(Move::new(cell(1, 4), cell(1, 5))).unwrap();
    game.execute(Move::new(cell(6, 6), cell(6, 4))).unwrap();
    assert_eq!(game.en_passant_file(), Some(6));

    assert!(game.legal_moves(cell(7, 4)).contains(&cell(6, 5)));
    game.execute(Move::new(cell(7, 4), cell(6, 5))).unwrap();
    assert_eq!(game.notation(), "h5xg6e.p.");
    assert!(game.piece_at(cell(6, 4)).is_empty());
    assert_eq!(game.move_number(), 2);
}
