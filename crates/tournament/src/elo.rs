//! Elo rating calculation and tracking
//!
//! Isolation has no draws: every finished game has an isolated (or
//! forfeiting) loser, so results are plain win/loss tallies.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default starting Elo for new agents
pub const DEFAULT_ELO: f64 = 1500.0;

/// K-factor for Elo updates (higher = more volatile)
pub const K_FACTOR: f64 = 32.0;

/// Result of a single game, from the first agent's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
}

impl GameResult {
    /// The same game seen from the other side.
    pub fn flipped(self) -> GameResult {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
        }
    }
}

/// Result of a match (multiple games), from the first agent's perspective.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: GameResult) {
        match game {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses
    }

    /// Score in [0, 1] from the first agent's perspective; 0.5 for an
    /// empty match.
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        self.wins as f64 / total
    }
}

/// Elo rating system for tracking agent strength across matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EloTracker {
    /// Ratings keyed by agent spec
    pub ratings: HashMap<String, f64>,
    /// Games played keyed by agent spec
    pub games_played: HashMap<String, u32>,
}

impl EloTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load tracker from a JSON file
    pub fn load(path: &str) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse JSON: {}", e))
    }

    /// Save tracker to a JSON file
    pub fn save(&self, path: &str) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write file: {}", e))
    }

    /// Get or initialize the rating for an agent
    pub fn get_rating(&mut self, agent: &str) -> f64 {
        *self.ratings.entry(agent.to_string()).or_insert(DEFAULT_ELO)
    }

    /// Expected score for agent1 against agent2
    pub fn expected_score(&mut self, agent1: &str, agent2: &str) -> f64 {
        let r1 = self.get_rating(agent1);
        let r2 = self.get_rating(agent2);
        1.0 / (1.0 + 10.0_f64.powf((r2 - r1) / 400.0))
    }

    /// Update both ratings after a match
    pub fn update_ratings(&mut self, agent1: &str, agent2: &str, result: &MatchResult) {
        let expected = self.expected_score(agent1, agent2);
        let actual = result.score();
        let games = result.total_games() as f64;
        let elo_change = K_FACTOR * games * (actual - expected);

        let r1 = self.get_rating(agent1);
        let r2 = self.get_rating(agent2);
        self.ratings.insert(agent1.to_string(), r1 + elo_change);
        self.ratings.insert(agent2.to_string(), r2 - elo_change);

        *self.games_played.entry(agent1.to_string()).or_insert(0) += result.total_games();
        *self.games_played.entry(agent2.to_string()).or_insert(0) += result.total_games();
    }

    /// Leaderboard sorted by rating, best first
    pub fn leaderboard(&self) -> Vec<(String, f64, u32)> {
        let mut entries: Vec<_> = self
            .ratings
            .iter()
            .map(|(name, &rating)| {
                let games = self.games_played.get(name).copied().unwrap_or(0);
                (name.clone(), rating, games)
            })
            .collect();
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }

    /// Print leaderboard to stdout
    pub fn print_leaderboard(&self) {
        println!("\n=== Agent Leaderboard ===");
        println!("{:<30} {:>8} {:>8}", "Agent", "Elo", "Games");
        println!("{}", "-".repeat(50));
        for (name, rating, games) in self.leaderboard() {
            println!("{:<30} {:>8.1} {:>8}", name, rating, games);
        }
        println!();
    }
}

#[cfg(test)]
#[path = "elo_tests.rs"]
mod elo_tests;
