use serde::Deserialize;

/// Immutable per-agent search configuration.
///
/// Deserializable from TOML so tournament rosters can carry per-agent
/// settings, e.g.:
///
/// ```toml
/// search_depth = 4
/// iterative = false
/// method = "alphabeta"
/// timeout_ms = 15.0
/// ```
///
/// `method` stays a string rather than an enum because it arrives from
/// configuration files; an unrecognized name is reported as
/// `AgentError::InvalidMethod` when the agent is asked to move.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies to explore in fixed-depth mode.
    pub search_depth: u32,
    /// Iterative deepening: search depths 1, 2, 3, ... while time remains
    /// instead of a single fixed-depth pass.
    pub iterative: bool,
    /// Search method: "minimax" or "alphabeta".
    pub method: String,
    /// Abort threshold: search cancels once the clock reports fewer than
    /// this many milliseconds remaining. Must leave enough headroom for
    /// the unwound call to actually return.
    pub timeout_ms: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            iterative: true,
            method: "minimax".to_string(),
            timeout_ms: 10.0,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
