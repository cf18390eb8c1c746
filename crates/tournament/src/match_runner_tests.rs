use super::*;
use isolation_core::AgentError;
use minimax_agent::{MinimaxAgent, SearchConfig};
use random_agent::RandomAgent;

#[test]
fn random_self_play_produces_a_result_per_game() {
    let mut agent1 = RandomAgent::new();
    let mut agent2 = RandomAgent::new();

    let config = MatchConfig {
        num_games: 4,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut agent1, &mut agent2).unwrap();

    // Isolation has no draws: every game has a winner.
    assert_eq!(result.total_games(), 4);
    assert_eq!(result.wins + result.losses, 4);
}

#[test]
fn search_agent_match_completes_under_time_pressure() {
    let mut searcher = MinimaxAgent::new(SearchConfig {
        method: "alphabeta".to_string(),
        ..Default::default()
    });
    let mut baseline = RandomAgent::new();

    let config = MatchConfig {
        num_games: 2,
        time_per_move_ms: 50,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let result = runner.run_match(&mut searcher, &mut baseline).unwrap();
    assert_eq!(result.total_games(), 2);
}

#[test]
fn misconfigured_agent_aborts_the_match() {
    let mut broken = MinimaxAgent::new(SearchConfig {
        method: "montecarlo".to_string(),
        ..Default::default()
    });
    let mut baseline = RandomAgent::new();

    let config = MatchConfig {
        num_games: 2,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let err = runner.run_match(&mut broken, &mut baseline).unwrap_err();
    assert_eq!(err, AgentError::InvalidMethod("montecarlo".to_string()));
}
