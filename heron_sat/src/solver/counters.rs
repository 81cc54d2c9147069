//! Counts for various things which count.

use std::time::Instant;

use crate::generic::ema::ExponentialMovingAverage;

/// The decay of the average conflict level.
const CONFLICT_LEVEL_DECAY: f64 = 0.9999;

/// Statistics of a solve, together with the reduction schedule.
#[derive(Debug)]
pub struct Counters {
    /// A count of every conflict seen.
    pub conflicts: u64,

    /// A count of literals taken from the trail for propagation.
    pub propagations: u64,

    /// A count of calls to search --- the first call plus one per restart.
    pub restarts: u64,

    /// A count of iterations through the search loop.
    pub iterations: u64,

    /// A count of decisions made.
    pub decisions: u64,

    /// A count of clauses skipped during propagation because their guard
    /// literal was true.
    pub guard_hits: u64,

    /// A slow moving average of the decision level at which conflicts occur.
    pub avg_conflict_level: ExponentialMovingAverage,

    /// The cumulative literal block distance of recorded core learnt clauses.
    pub total_core_lbd: u64,

    /// The cumulative conflict count which triggers the next reduction.
    pub next_reduction: u64,

    /// The current growth of the reduction threshold.
    pub reduction_increment: u64,

    /// When the present solve began.
    pub start_time: Option<Instant>,
}

impl Counters {
    pub fn new(reduction_start: u64, reduction_increment: u64) -> Self {
        Counters {
            conflicts: 0,
            propagations: 0,
            restarts: 0,
            iterations: 0,
            decisions: 0,
            guard_hits: 0,
            avg_conflict_level: ExponentialMovingAverage::new(CONFLICT_LEVEL_DECAY),
            total_core_lbd: 0,
            next_reduction: reduction_start,
            reduction_increment,
            start_time: None,
        }
    }

    /// Seconds since the present solve began, zero before any solve.
    pub fn elapsed_seconds(&self) -> f64 {
        match self.start_time {
            Some(start) => start.elapsed().as_secs_f64(),
            None => 0.0,
        }
    }
}
