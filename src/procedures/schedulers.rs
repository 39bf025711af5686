/*!
Schedulers, used to interrupt a solve for some task.

Interrupts are checked only when there are no further consequences to apply, and so at a point where a decision would otherwise be made.

# Restarts

A restart backjumps to level zero, keeping every clause learnt and the saved phase of every atom.
The count of conflicts between restarts follows the [restart policy](crate::config::RestartPolicy):
- Geometric: the first restart is after [restart_first](crate::config::Config::restart_first) conflicts, and the interval grows by [restart_multiplier](crate::config::Config::restart_multiplier) after each restart.
- Luby: the interval is [luby_u](crate::config::Config::luby_u) times the next element of the [Luby sequence](crate::generic::luby).

# Termination

A solve is stopped once the [time limit](crate::config::Config::time_limit) or the [conflict limit](crate::config::Config::conflict_limit) is reached, or the [terminate callback](crate::context::GenericContext::set_callback_terminate) returns true.
A limit of zero is no limit.
*/

use crate::{
    config::RestartPolicy,
    context::GenericContext,
    misc::log::targets::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets the count of fresh conflicts for the first restart, by the restart policy.
    pub fn initialise_restart_limit(&mut self) {
        self.counters.restart_limit = match self.config.restart_policy.value {
            RestartPolicy::Geometric => self.config.restart_first.value as f64,
            RestartPolicy::Luby => self.next_luby_interval(),
        };
    }

    /// Notes a conflict in the conflict counters.
    ///
    /// The count of fresh conflicts saturates, as with restarts disabled it is never reset.
    pub fn note_conflict(&mut self) {
        self.counters.total_conflicts += 1;
        self.counters.fresh_conflicts = self.counters.fresh_conflicts.saturating_add(1);
    }

    /// Returns whether it is time for a restart.
    pub fn restart_interrupt(&self) -> bool {
        self.config.restart.value
            && self.counters.fresh_conflicts as f64 >= self.counters.restart_limit
    }

    /// Backjumps to level zero and schedules the next restart.
    pub fn restart(&mut self) {
        self.backjump(0);
        self.counters.fresh_conflicts = 0;
        self.counters.restarts += 1;

        self.counters.restart_limit = match self.config.restart_policy.value {
            RestartPolicy::Geometric => {
                self.counters.restart_limit * self.config.restart_multiplier.value
            }
            RestartPolicy::Luby => self.next_luby_interval(),
        };

        log::info!(target: targets::RESTART,
            "Restart {} after {} conflicts, next after {} fresh conflicts",
            self.counters.restarts,
            self.counters.total_conflicts,
            self.counters.restart_limit
        );
    }

    fn next_luby_interval(&mut self) -> f64 {
        let element = self.counters.luby.next().unwrap_or(1);
        self.config.luby_u.value as f64 * element as f64
    }

    /// Returns whether the solve should stop before a decision, due to some limit or the terminate callback.
    pub fn termination_due(&mut self) -> bool {
        let time_limit = self.config.time_limit.value;
        if !time_limit.is_zero() && self.counters.time >= time_limit {
            log::info!(target: targets::DECISION, "Time limit reached");
            return true;
        }

        let conflict_limit = self.config.conflict_limit.value;
        if conflict_limit != 0 && self.counters.total_conflicts >= conflict_limit as usize {
            log::info!(target: targets::DECISION, "Conflict limit reached");
            return true;
        }

        self.check_callback_terminate()
    }
}

#[cfg(test)]
mod scheduler_tests {
    use super::*;
    use crate::{
        config::{Config, ConflictCount},
        context::Context,
    };

    #[test]
    fn geometric_limits_grow() {
        let mut the_context = Context::from_config(Config::default());
        the_context.initialise_restart_limit();
        assert_eq!(the_context.counters.restart_limit, 100.0);

        the_context.counters.fresh_conflicts = 99;
        assert!(!the_context.restart_interrupt());
        the_context.counters.fresh_conflicts = 100;
        assert!(the_context.restart_interrupt());

        the_context.restart();
        assert_eq!(the_context.counters.fresh_conflicts, 0);
        assert_eq!(the_context.counters.restarts, 1);
        assert_eq!(the_context.counters.restart_limit, 150.0);
    }

    #[test]
    fn luby_limits_follow_the_sequence() {
        let mut config = Config::default();
        config.restart_policy.set(RestartPolicy::Luby).unwrap();
        let mut the_context = Context::from_config(config);

        the_context.initialise_restart_limit();
        let mut limits = vec![the_context.counters.restart_limit];
        for _ in 0..6 {
            the_context.restart();
            limits.push(the_context.counters.restart_limit);
        }

        assert_eq!(limits, vec![100.0, 100.0, 200.0, 100.0, 100.0, 200.0, 400.0]);
    }

    #[test]
    fn restarts_can_be_disabled() {
        let mut config = Config::default();
        config.restart.set(false).unwrap();
        let mut the_context = Context::from_config(config);
        the_context.initialise_restart_limit();

        the_context.counters.fresh_conflicts = 10_000;
        assert!(!the_context.restart_interrupt());
    }

    #[test]
    fn fresh_conflicts_saturate() {
        let mut config = Config::default();
        config.restart.set(false).unwrap();
        let mut the_context = Context::from_config(config);

        the_context.note_conflict();
        assert_eq!(the_context.counters.total_conflicts, 1);
        assert_eq!(the_context.counters.fresh_conflicts, 1);

        the_context.counters.fresh_conflicts = ConflictCount::MAX;
        the_context.note_conflict();
        assert_eq!(the_context.counters.fresh_conflicts, ConflictCount::MAX);
        assert_eq!(the_context.counters.total_conflicts, 2);
    }

    #[test]
    fn conflict_limit_stops() {
        let mut config = Config::default();
        config.conflict_limit.set(5).unwrap();
        let mut the_context = Context::from_config(config);

        assert!(!the_context.termination_due());
        the_context.counters.total_conflicts = 5;
        assert!(the_context.termination_due());
    }
}
