//! Minimax Isolation agent.
//!
//! Depth-limited minimax or alpha-beta search over the Isolation board,
//! with a pluggable evaluation strategy and a hard per-turn deadline. The
//! agent never outlives its clock: every recursive call checks the time
//! remaining and the search unwinds the instant it drops under the
//! configured threshold, falling back to the best move already found.

mod config;
mod eval;
mod search;

pub use config::SearchConfig;
pub use eval::{CenterDistance, Heuristic, Mobility, WeightedMobility};
pub use search::{alphabeta, minimax, ScoredMove, SearchContext, Timeout};

use isolation_core::{Agent, AgentError, Board, Clock, Move};

#[derive(Clone, Copy)]
enum Method {
    Minimax,
    AlphaBeta,
}

/// Game-playing agent choosing moves by adversarial tree search.
///
/// Runs either fixed-depth search at `config.search_depth` or iterative
/// deepening (depths 1, 2, 3, ... while time remains), per the
/// configuration. Holds no per-turn state between `get_move` calls beyond
/// statistics from the last call.
pub struct MinimaxAgent {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    name: String,
    /// Recursive calls made during the last `get_move`.
    nodes: u64,
    /// Deepest fully completed search depth of the last `get_move`.
    completed_depth: u32,
}

impl MinimaxAgent {
    /// Agent with the reference mobility heuristic.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_heuristic(config, Box::new(Mobility))
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        let mode = if config.iterative { "id" } else { "fixed" };
        let name = format!(
            "{} d{} {} ({})",
            config.method,
            config.search_depth,
            mode,
            heuristic.name()
        );
        Self {
            config,
            heuristic,
            name,
            nodes: 0,
            completed_depth: 0,
        }
    }

    /// Recursive calls made during the last `get_move`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Deepest fully completed depth of the last `get_move`; 0 when even
    /// the first pass was cut off.
    pub fn completed_depth(&self) -> u32 {
        self.completed_depth
    }

    fn search_root(
        board: &Board,
        depth: u32,
        method: Method,
        ctx: &mut SearchContext,
    ) -> Result<ScoredMove, Timeout> {
        match method {
            Method::Minimax => minimax(board, depth, true, ctx),
            Method::AlphaBeta => alphabeta(
                board,
                depth,
                f64::NEG_INFINITY,
                f64::INFINITY,
                true,
                ctx,
            ),
        }
    }
}

impl Agent for MinimaxAgent {
    /// Search for the best move and return it before the clock runs out.
    ///
    /// A deadline cancellation is absorbed here: the move from the most
    /// recently completed search (or `Move::NONE` if none completed) is
    /// returned instead of an error. The only `Err` is an unrecognized
    /// method name in the configuration.
    fn get_move(
        &mut self,
        board: &Board,
        legal_moves: &[Move],
        clock: &Clock,
    ) -> Result<Move, AgentError> {
        self.nodes = 0;
        self.completed_depth = 0;

        if legal_moves.is_empty() {
            return Ok(Move::NONE);
        }

        let method = match self.config.method.as_str() {
            "minimax" => Method::Minimax,
            "alphabeta" => Method::AlphaBeta,
            other => return Err(AgentError::InvalidMethod(other.to_string())),
        };

        let mut ctx = SearchContext::new(self.heuristic.as_ref(), clock, self.config.timeout_ms);
        let mut best = Move::NONE;

        if self.config.iterative {
            // A game cannot outlast the open cells, so the deepening loop
            // terminates even on an unlimited clock.
            let depth_cap = board.open_cell_count().max(1);
            for depth in 1..=depth_cap {
                match Self::search_root(board, depth, method, &mut ctx) {
                    Ok(found) => {
                        best = found.mv;
                        self.completed_depth = depth;
                    }
                    // A deeper, incomplete iteration never overwrites the
                    // result of the last completed one.
                    Err(Timeout) => break,
                }
            }
        } else {
            match Self::search_root(board, self.config.search_depth, method, &mut ctx) {
                Ok(found) => {
                    best = found.mv;
                    self.completed_depth = self.config.search_depth;
                }
                Err(Timeout) => {}
            }
        }

        self.nodes = ctx.nodes;
        Ok(best)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn new_game(&mut self) {
        self.nodes = 0;
        self.completed_depth = 0;
    }
}
