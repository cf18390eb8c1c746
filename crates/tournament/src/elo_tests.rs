use super::*;

#[test]
fn equal_ratings_expect_an_even_score() {
    let mut tracker = EloTracker::new();
    let expected = tracker.expected_score("agent1", "agent2");
    assert!((expected - 0.5).abs() < 0.001);
}

#[test]
fn winner_gains_and_loser_drops() {
    let mut tracker = EloTracker::new();
    let result = MatchResult {
        wins: 10,
        losses: 0,
    };
    tracker.update_ratings("agent1", "agent2", &result);

    assert!(tracker.get_rating("agent1") > DEFAULT_ELO);
    assert!(tracker.get_rating("agent2") < DEFAULT_ELO);
}

#[test]
fn match_score_is_the_win_share() {
    let mut result = MatchResult::new();
    assert_eq!(result.score(), 0.5);

    result.record(GameResult::Win);
    result.record(GameResult::Win);
    result.record(GameResult::Loss);
    result.record(GameResult::Win);
    assert_eq!(result.total_games(), 4);
    assert_eq!(result.score(), 0.75);
}

#[test]
fn flipping_a_result_swaps_the_sides() {
    assert_eq!(GameResult::Win.flipped(), GameResult::Loss);
    assert_eq!(GameResult::Loss.flipped(), GameResult::Win);
}
