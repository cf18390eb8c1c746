//! Random Isolation Agent
//!
//! Picks uniformly at random from the legal moves. Useful for:
//! - Exercising the match harness
//! - Baseline comparisons (any searching agent should beat this)
//! - Stress testing board and move generation

use isolation_core::{Agent, AgentError, Board, Clock, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;

#[cfg(test)]
mod lib_tests;

/// An agent that plays random legal moves. No evaluation, no search, and
/// no use of its clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn new() -> Self {
        Self
    }
}

impl Agent for RandomAgent {
    fn get_move(
        &mut self,
        _board: &Board,
        legal_moves: &[Move],
        _clock: &Clock,
    ) -> Result<Move, AgentError> {
        Ok(legal_moves
            .choose(&mut thread_rng())
            .copied()
            .unwrap_or(Move::NONE))
    }

    fn name(&self) -> &str {
        "random"
    }
}
