pub mod board;
pub mod time_control;
pub mod types;

pub use board::{Board, HEIGHT, WIDTH};
pub use time_control::Clock;
pub use types::{Move, Player};

use thiserror::Error;

// =============================================================================
// Agent trait — implemented by all Isolation agents (search, random, etc.)
// =============================================================================

/// Configuration errors an agent can surface from `get_move`.
///
/// Deadline overruns are deliberately not represented here: running out of
/// time produces a best-effort move (or `Move::NONE`), never an error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    /// The configured search method name is neither "minimax" nor
    /// "alphabeta". A setup defect, fatal to the call.
    #[error("unknown search method '{0}' (expected \"minimax\" or \"alphabeta\")")]
    InvalidMethod(String),
}

/// Trait that all Isolation agents implement.
///
/// The driver calls `get_move` once per turn with the current board, the
/// active player's legal moves, and a clock reporting the milliseconds
/// left before the turn is forfeited.
pub trait Agent: Send {
    /// Choose a move before the clock runs out.
    ///
    /// Returns `Move::NONE` when no legal move exists (forfeit) or when
    /// time expired before any move was established. The only `Err` is a
    /// configuration defect; it must not be swallowed by the driver.
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        clock: &Clock,
    ) -> Result<Move, AgentError>;

    /// The agent's display name for reports and leaderboards.
    fn name(&self) -> &str;

    /// Reset internal state for a new game.
    fn new_game(&mut self) {}
}
