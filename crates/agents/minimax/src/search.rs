//! Depth-limited minimax and alpha-beta search.
//!
//! Cancellation is a value, not an unwinding panic: every recursive call
//! first samples the clock and returns `Err(Timeout)` once the remaining
//! time falls under the configured threshold. The `?` operator propagates
//! the marker straight up the pending frames; the only recovery point is
//! the agent's `get_move`, which falls back to the best move it already
//! holds.

use isolation_core::{Board, Clock, Move};

use crate::eval::Heuristic;

/// Marker for a deadline cancellation. Carries no payload; the partial
/// results of interrupted frames are discarded wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeout;

/// A (score, move) pair as combined and propagated by the search layers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub score: f64,
    pub mv: Move,
}

/// Everything a recursive search call needs, threaded down explicitly so
/// no clock or heuristic ever lives in shared agent state.
pub struct SearchContext<'a> {
    pub heuristic: &'a dyn Heuristic,
    pub clock: &'a Clock,
    /// Remaining-time threshold (ms) below which search cancels.
    pub threshold_ms: f64,
    /// Recursive calls made, for stats and tests.
    pub nodes: u64,
}

impl<'a> SearchContext<'a> {
    pub fn new(heuristic: &'a dyn Heuristic, clock: &'a Clock, threshold_ms: f64) -> Self {
        Self {
            heuristic,
            clock,
            threshold_ms,
            nodes: 0,
        }
    }

    /// First action of every recursive call.
    fn check_clock(&mut self) -> Result<(), Timeout> {
        self.nodes += 1;
        if self.clock.remaining_ms() < self.threshold_ms {
            return Err(Timeout);
        }
        Ok(())
    }
}

/// Keeps the running best of a layer, replacing it only when `child`
/// strictly improves on it for the layer's direction. Equal scores keep
/// the earlier move in generation order.
///
/// Strictness is what keeps pruning honest: a score coming out of a
/// cut-off sibling is only a bound on that subtree's true value, and a
/// bound that merely ties the running best must never displace it.
fn prefer(maximizing: bool, best: ScoredMove, child: ScoredMove) -> ScoredMove {
    let replace = if maximizing {
        child.score > best.score
    } else {
        child.score < best.score
    };
    if replace {
        child
    } else {
        best
    }
}

/// Terminal branch: the active player has no legal moves and is stuck, so
/// the position is scored from that player's own perspective with the
/// forfeit sentinel as the move.
fn stuck_leaf(board: &Board, ctx: &SearchContext) -> ScoredMove {
    ScoredMove {
        score: ctx.heuristic.score(board, board.active_player()),
        mv: Move::NONE,
    }
}

/// Depth-limit leaf: scored from the perspective of the player who just
/// moved into this position (the inactive player), with that player's
/// location standing in for the move.
///
/// Note the asymmetry against `stuck_leaf`, which scores the *active*
/// player. The two perspectives differ on purpose: this matches the
/// established agent behavior, and the `leaf_rule_*` tests pin it down.
/// Unifying them would change which side depth cutoffs flatter.
fn depth_limit_leaf(board: &Board, ctx: &SearchContext) -> ScoredMove {
    let viewpoint = board.inactive_player();
    ScoredMove {
        score: ctx.heuristic.score(board, viewpoint),
        mv: board.player_location(viewpoint).unwrap_or(Move::NONE),
    }
}

/// Plain depth-limited minimax.
///
/// Each layer forecasts every legal move, recurses with the flag flipped,
/// and pairs the child's score with the move that leads to it; the pairs
/// are then combined by maximum or minimum under [`prefer`], so the
/// returned move is always one the active player can actually play and
/// ties go to the earliest move in generation order.
pub fn minimax(
    board: &Board,
    depth: u32,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> Result<ScoredMove, Timeout> {
    ctx.check_clock()?;

    let moves = board.legal_moves();
    let Some((&first, rest)) = moves.split_first() else {
        return Ok(stuck_leaf(board, ctx));
    };

    if depth == 0 {
        return Ok(depth_limit_leaf(board, ctx));
    }

    let mut best = ScoredMove {
        score: minimax(&board.forecast_move(first), depth - 1, !maximizing, ctx)?.score,
        mv: first,
    };
    for &mv in rest {
        let child = minimax(&board.forecast_move(mv), depth - 1, !maximizing, ctx)?;
        best = prefer(
            maximizing,
            best,
            ScoredMove {
                score: child.score,
                mv,
            },
        );
    }
    Ok(best)
}

/// Minimax with alpha-beta pruning.
///
/// Identical traversal and pair combination to [`minimax`]; additionally a
/// maximizing layer raises `alpha` to its running best and stops expanding
/// siblings once that best reaches `beta`, and a minimizing layer does the
/// mirror image. Start with `alpha = -inf`, `beta = +inf` at the root.
///
/// A cut-off subtree reports only a bound on its true score, and under a
/// full starting window such a bound can tie the running best but never
/// strictly beat it, so [`prefer`] ignores it. At equal depth the root
/// move and score therefore match plain minimax; only the node count
/// differs.
pub fn alphabeta(
    board: &Board,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
    maximizing: bool,
    ctx: &mut SearchContext,
) -> Result<ScoredMove, Timeout> {
    ctx.check_clock()?;

    let moves = board.legal_moves();
    let Some((&first, rest)) = moves.split_first() else {
        return Ok(stuck_leaf(board, ctx));
    };

    if depth == 0 {
        return Ok(depth_limit_leaf(board, ctx));
    }

    let mut best = ScoredMove {
        score: alphabeta(
            &board.forecast_move(first),
            depth - 1,
            alpha,
            beta,
            !maximizing,
            ctx,
        )?
        .score,
        mv: first,
    };
    for &mv in rest {
        if maximizing {
            alpha = alpha.max(best.score);
            if best.score >= beta {
                break;
            }
        } else {
            beta = beta.min(best.score);
            if best.score <= alpha {
                break;
            }
        }
        let child = alphabeta(
            &board.forecast_move(mv),
            depth - 1,
            alpha,
            beta,
            !maximizing,
            ctx,
        )?;
        best = prefer(
            maximizing,
            best,
            ScoredMove {
                score: child.score,
                mv,
            },
        );
    }
    Ok(best)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
