use super::*;
use isolation_core::Board;

fn midgame_board() -> Board {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 3));
    board.apply_move(Move::new(0, 0));
    board.apply_move(Move::new(1, 2));
    board
}

#[test]
fn mobility_is_own_moves_minus_opponent_moves() {
    let board = midgame_board();
    for player in [Player::One, Player::Two] {
        let own = board.legal_moves_for(player).len() as f64;
        let opp = board.legal_moves_for(player.other()).len() as f64;
        assert_eq!(Mobility.score(&board, player), own - opp);
    }
}

#[test]
fn mobility_is_antisymmetric() {
    let board = midgame_board();
    assert_eq!(
        Mobility.score(&board, Player::One),
        -Mobility.score(&board, Player::Two)
    );
}

#[test]
fn stuck_side_counts_zero_moves() {
    // Player two boxed into the corner with both exits spent.
    let mut board = Board::new();
    board.apply_move(Move::new(1, 2));
    board.apply_move(Move::new(2, 1));
    board.apply_move(Move::new(0, 4));
    board.apply_move(Move::new(0, 0));
    board.apply_move(Move::new(2, 3));
    assert!(board.legal_moves_for(Player::Two).is_empty());

    let opponent_moves = board.legal_moves_for(Player::One).len() as f64;
    assert_eq!(Mobility.score(&board, Player::Two), -opponent_moves);
    assert_eq!(Mobility.score(&board, Player::One), opponent_moves);
}

#[test]
fn default_weighted_mobility_reduces_to_mobility() {
    let board = midgame_board();
    let weighted = WeightedMobility::default();
    for player in [Player::One, Player::Two] {
        assert_eq!(
            weighted.score(&board, player),
            Mobility.score(&board, player)
        );
    }
}

#[test]
fn weighted_mobility_applies_its_weights() {
    let board = midgame_board();
    let aggressive = WeightedMobility {
        bias: 1.0,
        own_weight: 1.0,
        opp_weight: -2.0,
    };
    let own = board.legal_moves_for(Player::One).len() as f64;
    let opp = board.legal_moves_for(Player::Two).len() as f64;
    assert_eq!(
        aggressive.score(&board, Player::One),
        1.0 + own - 2.0 * opp
    );
}

#[test]
fn center_distance_prefers_the_central_player() {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 3)); // one takes the center
    board.apply_move(Move::new(0, 0)); // two takes the corner
    assert!(CenterDistance.score(&board, Player::One) > 0.0);
    assert!(CenterDistance.score(&board, Player::Two) < 0.0);
}
