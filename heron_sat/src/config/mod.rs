//! Configuration of a solver.
//!
//! All knobs live in a single flat [Config] structure, read at construction and
//! (for the stop conditions) polled during a solve.
//! The defaults reproduce the standard tuning of activity-based clause
//! learning solvers and are deterministic: identical input under an identical
//! configuration yields an identical solve.

use std::time::Duration;

/// The configuration of a solver.
#[derive(Clone, Debug)]
pub struct Config {
    /// The clause activity decay factor, in (0, 1].
    pub clause_decay: f64,

    /// The variable activity decay factor, in (0, 1].
    pub variable_decay: f64,

    /// Whether a decision re-asserts the last value the chosen variable held.
    pub phase_saving: bool,

    /// Abandon the solve once this many conflicts have been seen.
    /// `None` disables the condition.
    pub max_conflicts: Option<u64>,

    /// Abandon the solve once this much time has passed.
    /// `None` disables the condition.
    ///
    /// The limit is polled at iteration boundaries --- there is no asynchronous
    /// interruption.
    pub time_limit: Option<Duration>,

    /// The conflict budget of the first restart interval.
    pub restart_base: u64,

    /// The growth of the conflict budget from one restart to the next.
    pub restart_increment: u64,

    /// The cumulative conflict count at which the first learnt-clause
    /// reduction happens.
    pub reduction_start: u64,

    /// The growth of the reduction threshold after each reduction.
    pub reduction_increment: u64,

    /// The growth of [reduction_increment](Config::reduction_increment)
    /// itself, for superlinear spacing of reductions.
    pub reduction_increment_growth: u64,

    /// How many search iterations pass between statistics lines.
    pub stats_interval: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            clause_decay: 0.999,
            variable_decay: 0.95,
            phase_saving: false,
            max_conflicts: None,
            time_limit: None,
            restart_base: 100,
            restart_increment: 1000,
            reduction_start: 20_000,
            reduction_increment: 20_000,
            reduction_increment_growth: 300,
            stats_interval: 10_000,
        }
    }
}
