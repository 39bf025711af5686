use std::time::Duration;

use crate::config::ConflictCount;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every conflict seen during a solve.
    pub total_conflicts: usize,

    /// A count of conflicts seen since the last restart.
    ///
    /// As u32 rather than a usize for easier interaction with scheduling variables.
    pub fresh_conflicts: ConflictCount,

    /// A count of all decisions made.
    pub total_decisions: usize,

    /// A count of all literals propagated.
    pub total_propagations: usize,

    /// The total number of iterations through a solve.
    pub total_iterations: usize,

    /// The number of restarts through a solve.
    pub restarts: usize,

    /// The number of reductions of the clause database through a solve.
    pub reductions: usize,

    /// The time taken during a solve.
    pub time: Duration,

    /// The count of fresh conflicts at which the next restart is due.
    pub restart_limit: f64,

    /// The count of total conflicts at which the next reduction is due.
    pub reduction_limit: usize,

    /// The current element in the luby sequence.
    pub luby: crate::generic::luby::Luby,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_conflicts: 0,
            fresh_conflicts: 0,

            total_decisions: 0,
            total_propagations: 0,
            total_iterations: 0,

            restarts: 0,
            reductions: 0,
            time: Duration::from_secs(0),

            restart_limit: 0.0,
            reduction_limit: 0,

            luby: crate::generic::luby::Luby::default(),
        }
    }
}
