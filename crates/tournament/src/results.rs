//! Tournament results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::elo::MatchResult;

/// Complete tournament results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentResults {
    /// Name/description of the tournament
    pub name: String,
    /// Participating agent specs
    pub participants: Vec<String>,
    /// All match results
    pub matches: Vec<MatchEntry>,
    /// Configuration used
    pub config: TournamentConfig,
}

/// A single match entry in the tournament
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchEntry {
    pub agent1: String,
    pub agent2: String,
    pub result: MatchResult,
}

/// Tournament configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TournamentConfig {
    pub games_per_match: u32,
    pub time_per_move_ms: u64,
    pub random_openings: u32,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games_per_match: 10,
            time_per_move_ms: 150,
            random_openings: 2,
        }
    }
}

impl TournamentResults {
    pub fn new(name: &str, participants: Vec<String>, config: TournamentConfig) -> Self {
        Self {
            name: name.to_string(),
            participants,
            matches: Vec::new(),
            config,
        }
    }

    /// Add a match result
    pub fn add_match(&mut self, agent1: &str, agent2: &str, result: MatchResult) {
        self.matches.push(MatchEntry {
            agent1: agent1.to_string(),
            agent2: agent2.to_string(),
            result,
        });
    }

    /// Save results to a JSON file
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize: {}", e))?;
        std::fs::write(path, json).map_err(|e| format!("Failed to write: {}", e))
    }

    /// Load results from a JSON file
    pub fn load(path: &Path) -> Result<Self, String> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| format!("Failed to read: {}", e))?;
        serde_json::from_str(&contents).map_err(|e| format!("Failed to parse: {}", e))
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("=== Tournament: {} ===\n\n", self.name));
        report.push_str(&format!("Participants: {}\n", self.participants.join(", ")));
        report.push_str(&format!(
            "Config: {} games/match, {} ms/move, {} random opening plies\n\n",
            self.config.games_per_match,
            self.config.time_per_move_ms,
            self.config.random_openings
        ));

        report.push_str("Results:\n");
        report.push_str(&format!(
            "{:<24} vs {:<24} {:>5}-{:<5}\n",
            "Agent 1", "Agent 2", "W", "L"
        ));
        report.push_str(&"-".repeat(64));
        report.push('\n');

        for entry in &self.matches {
            report.push_str(&format!(
                "{:<24} vs {:<24} {:>5}-{:<5}\n",
                entry.agent1, entry.agent2, entry.result.wins, entry.result.losses
            ));
        }

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}
