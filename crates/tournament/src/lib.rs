//! Tournament Runner for Isolation agents
//!
//! This crate provides infrastructure for:
//! - Running timed matches between agents
//! - Tracking Elo ratings across agent configurations
//! - Persisting and reporting results
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the alpha-beta agent and the random baseline
//! cargo run -p tournament -- match alphabeta random --games 20
//!
//! # Run a gauntlet (one agent vs the standard opponents)
//! cargo run -p tournament -- gauntlet minimax:d4 --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
