use super::*;

#[test]
fn opening_placement_offers_every_cell() {
    let board = Board::new();
    assert_eq!(board.legal_moves().len(), (WIDTH * HEIGHT) as usize);
    assert_eq!(board.active_player(), Player::One);
    assert_eq!(board.player_location(Player::One), None);
}

#[test]
fn second_placement_excludes_first_players_cell() {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 3));
    assert_eq!(board.active_player(), Player::Two);
    let moves = board.legal_moves();
    assert_eq!(moves.len(), (WIDTH * HEIGHT) as usize - 1);
    assert!(!moves.contains(&Move::new(3, 3)));
}

#[test]
fn placed_player_moves_like_a_knight() {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 3)); // player one
    board.apply_move(Move::new(0, 0)); // player two
    let moves = board.legal_moves_for(Player::One);
    assert_eq!(moves.len(), 8);
    assert!(moves.contains(&Move::new(1, 2)));
    assert!(moves.contains(&Move::new(5, 4)));

    // Corner placement only reaches two cells.
    let corner = board.legal_moves_for(Player::Two);
    assert_eq!(corner.len(), 2);
    assert!(corner.contains(&Move::new(1, 2)));
    assert!(corner.contains(&Move::new(2, 1)));
}

#[test]
fn visited_cells_stay_blocked() {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 3));
    board.apply_move(Move::new(0, 0));
    board.apply_move(Move::new(1, 2));
    // (3, 3) was vacated by player one but remains blocked.
    assert!(!board.is_open(Move::new(3, 3)));
    // Player two can no longer jump to (1, 2).
    let moves = board.legal_moves();
    assert_eq!(moves, vec![Move::new(2, 1)]);
}

#[test]
fn forecast_leaves_source_board_untouched() {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 3));
    board.apply_move(Move::new(0, 0));

    let before_moves = board.legal_moves();
    let next = board.forecast_move(Move::new(1, 2));

    assert_eq!(board.legal_moves(), before_moves);
    assert_eq!(board.active_player(), Player::One);
    assert_eq!(board.player_location(Player::One), Some(Move::new(3, 3)));

    assert_eq!(next.active_player(), Player::Two);
    assert_eq!(next.player_location(Player::One), Some(Move::new(1, 2)));
    assert_eq!(next.ply(), board.ply() + 1);
}

#[test]
fn open_cell_count_shrinks_by_one_per_ply() {
    let mut board = Board::new();
    let total = WIDTH as u32 * HEIGHT as u32;
    assert_eq!(board.open_cell_count(), total);
    board.apply_move(Move::new(3, 3));
    board.apply_move(Move::new(0, 0));
    board.apply_move(Move::new(1, 2));
    assert_eq!(board.open_cell_count(), total - 3);
}

#[test]
fn boxed_in_player_has_no_moves() {
    // Both knight exits of the (0, 0) corner are (1, 2) and (2, 1). Spend
    // them first, then send player two into the corner.
    let mut board = Board::new();
    board.apply_move(Move::new(1, 2)); // one places on a corner exit
    board.apply_move(Move::new(2, 1)); // two places on the other exit
    board.apply_move(Move::new(0, 4)); // one jumps away
    board.apply_move(Move::new(0, 0)); // two jumps into the corner
    board.apply_move(Move::new(2, 3)); // one moves; two is now to move
    assert_eq!(board.active_player(), Player::Two);
    assert!(board.legal_moves().is_empty());
}

#[test]
fn display_marks_players_and_blocked_cells() {
    let mut board = Board::new();
    board.apply_move(Move::new(0, 0));
    board.apply_move(Move::new(6, 6));
    board.apply_move(Move::new(1, 2));
    let text = board.to_string();
    assert!(text.contains('1'));
    assert!(text.contains('2'));
    assert!(text.contains('*'));
}
