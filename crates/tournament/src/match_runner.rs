//! Match runner for playing timed games between agents

use isolation_core::{Agent, AgentError, Board, Clock, Player};
use rand::seq::SliceRandom;
use rand::thread_rng;
use std::time::Duration;

use crate::elo::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Wall-clock budget per move in milliseconds; going over forfeits
    pub time_per_move_ms: u64,
    /// Opening plies played uniformly at random before the agents take
    /// over, to diversify games between deterministic agents
    pub random_openings: u32,
    /// Whether to alternate who moves first each game
    pub alternate_first: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            time_per_move_ms: 150,
            random_openings: 2,
            alternate_first: true,
            verbose: true,
        }
    }
}

/// Runs matches between two agents
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two agents.
    ///
    /// Returns the result from agent1's perspective. The only `Err` is an
    /// agent configuration defect surfaced on its first move.
    pub fn run_match(
        &self,
        agent1: &mut dyn Agent,
        agent2: &mut dyn Agent,
    ) -> Result<MatchResult, AgentError> {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let agent1_first = !self.config.alternate_first || game_num % 2 == 0;

            let game_result = if agent1_first {
                self.play_game(agent1, agent2)?
            } else {
                self.play_game(agent2, agent1)?.flipped()
            };
            result.record(game_result);

            if self.config.verbose {
                let seat = if agent1_first { "first" } else { "second" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    seat,
                    result.wins,
                    result.losses
                );
            }
        }

        Ok(result)
    }

    /// Play a single game; the result is from the first mover's
    /// perspective. The first mover holds the Player::One seat for the
    /// whole game, random openings included.
    fn play_game(
        &self,
        first: &mut dyn Agent,
        second: &mut dyn Agent,
    ) -> Result<GameResult, AgentError> {
        let mut board = Board::new();
        first.new_game();
        second.new_game();

        let mut rng = thread_rng();
        for _ in 0..self.config.random_openings {
            let moves = board.legal_moves();
            match moves.choose(&mut rng) {
                Some(&mv) => board.apply_move(mv),
                None => break,
            }
        }

        loop {
            let legal = board.legal_moves();
            let mover = board.active_player();
            if legal.is_empty() {
                // The active player is isolated and loses.
                return Ok(loss_for(mover));
            }

            // Fresh clock per turn; the budget starts now.
            let clock = Clock::from_budget(Duration::from_millis(self.config.time_per_move_ms));
            let agent: &mut dyn Agent = if mover == Player::One {
                &mut *first
            } else {
                &mut *second
            };
            let mv = agent.get_move(&board, &legal, &clock)?;

            // Overrunning the clock, answering with the forfeit sentinel
            // while moves remain, or answering with an illegal move all
            // forfeit the game for the mover.
            if clock.remaining_ms() < 0.0 || !legal.contains(&mv) {
                return Ok(loss_for(mover));
            }
            board.apply_move(mv);
        }
    }
}

fn loss_for(player: Player) -> GameResult {
    match player {
        Player::One => GameResult::Loss,
        Player::Two => GameResult::Win,
    }
}

/// Quick utility to run a single match with default timing
pub fn quick_match(
    agent1: &mut dyn Agent,
    agent2: &mut dyn Agent,
    num_games: u32,
    time_per_move_ms: u64,
) -> Result<MatchResult, AgentError> {
    let config = MatchConfig {
        num_games,
        time_per_move_ms,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(agent1, agent2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
