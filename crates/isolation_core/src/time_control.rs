//! Deadline tracking for agents.
//!
//! The driver hands each `get_move` call a [`Clock`]: a zero-argument
//! callback reporting the milliseconds remaining before the turn is
//! forfeited. Agents must return before it reaches zero. Search code
//! threads the clock down through every recursive call rather than
//! stashing it in shared state, so a clock can never leak across turns.

use std::time::{Duration, Instant};

/// Time remaining for the current turn, in milliseconds.
pub struct Clock {
    time_left: Box<dyn Fn() -> f64 + Send>,
}

impl Clock {
    /// Wrap an arbitrary time-remaining callback. Tests use this to script
    /// deadlines deterministically.
    pub fn new(time_left: impl Fn() -> f64 + Send + 'static) -> Self {
        Self {
            time_left: Box::new(time_left),
        }
    }

    /// Count down from a fixed budget starting now. This is what the match
    /// runner builds for every turn; the value goes negative once the
    /// budget is overrun.
    pub fn from_budget(budget: Duration) -> Self {
        let deadline = Instant::now() + budget;
        Self::new(move || {
            let now = Instant::now();
            if now >= deadline {
                -((now - deadline).as_secs_f64() * 1000.0)
            } else {
                (deadline - now).as_secs_f64() * 1000.0
            }
        })
    }

    /// A clock that never runs out, for depth-only search and tests.
    pub fn unlimited() -> Self {
        Self::new(|| f64::INFINITY)
    }

    /// Milliseconds remaining before the turn is forfeited.
    pub fn remaining_ms(&self) -> f64 {
        (self.time_left)()
    }
}

impl std::fmt::Debug for Clock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Clock")
            .field("remaining_ms", &self.remaining_ms())
            .finish()
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
