//! Static evaluation strategies.
//!
//! The search consults a single [`Heuristic`] for every positional value it
//! needs, so alternative scoring policies can be swapped in without
//! touching the search code.

use isolation_core::{Board, Move, Player};

/// A static evaluation strategy: how favorable is this position for
/// `player`? Higher is better; no normalized range is required.
///
/// Implementations must be pure, depending only on the board and the
/// queried player.
pub trait Heuristic: Send {
    fn score(&self, board: &Board, player: Player) -> f64;

    fn name(&self) -> &str;
}

/// Reference mobility heuristic: own legal moves minus the opponent's.
///
/// Both counts come from the board's legal-move enumeration, one query per
/// side. A side with no moves counts 0, so lost and won positions come out
/// strongly negative or positive with no terminal special-casing.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mobility;

impl Heuristic for Mobility {
    fn score(&self, board: &Board, player: Player) -> f64 {
        let own = board.legal_moves_for(player).len() as f64;
        let opp = board.legal_moves_for(player.other()).len() as f64;
        own - opp
    }

    fn name(&self) -> &str {
        "mobility"
    }
}

/// Mobility with tunable weights: `bias + own_weight * own + opp_weight * opp`.
/// The default weights reduce to plain [`Mobility`].
#[derive(Debug, Clone, Copy)]
pub struct WeightedMobility {
    pub bias: f64,
    pub own_weight: f64,
    pub opp_weight: f64,
}

impl Default for WeightedMobility {
    fn default() -> Self {
        Self {
            bias: 0.0,
            own_weight: 1.0,
            opp_weight: -1.0,
        }
    }
}

impl Heuristic for WeightedMobility {
    fn score(&self, board: &Board, player: Player) -> f64 {
        let own = board.legal_moves_for(player).len() as f64;
        let opp = board.legal_moves_for(player.other()).len() as f64;
        self.bias + self.own_weight * own + self.opp_weight * opp
    }

    fn name(&self) -> &str {
        "weighted-mobility"
    }
}

/// Distance-based alternative: rewards holding the center, where future
/// mobility is highest. Scores the opponent's squared center distance
/// minus one's own.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterDistance;

impl CenterDistance {
    fn center_dist_sq(location: Option<Move>) -> f64 {
        match location {
            Some(loc) => {
                let dr = f64::from(loc.row) - f64::from(isolation_core::HEIGHT - 1) / 2.0;
                let dc = f64::from(loc.col) - f64::from(isolation_core::WIDTH - 1) / 2.0;
                dr * dr + dc * dc
            }
            // Unplaced players can still go anywhere.
            None => 0.0,
        }
    }
}

impl Heuristic for CenterDistance {
    fn score(&self, board: &Board, player: Player) -> f64 {
        let own = Self::center_dist_sq(board.player_location(player));
        let opp = Self::center_dist_sq(board.player_location(player.other()));
        opp - own
    }

    fn name(&self) -> &str {
        "center-distance"
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
