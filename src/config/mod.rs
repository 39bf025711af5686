/*!
Configuration of a context.

All configuration for a context is contained within a [Config] struct, given when the context is built.
The atom and clause databases clone the parts of the configuration relevant to them (see [dbs]).

Each option is a [ConfigOption], which pairs a value with bounds on the value.
Options may be revised directly, or through [set](ConfigOption::set) to have the bounds checked.

```rust
# use marten_sat::config::{Config, RestartPolicy};
let mut config = Config::default();
assert!(config.restart_policy.set(RestartPolicy::Luby).is_ok());
assert!(config.reduction_fraction.set(2.0).is_err());
```
*/

use dbs::{AtomDBConfig, ClauseDBConfig};

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;

mod restarts;
pub use restarts::RestartPolicy;

pub mod vsids;
use vsids::VSIDS;

use crate::generic::luby::LubyRepresentation;

/// Representation for the activity of atoms and clauses.
pub type Activity = f64;

/// Representation for the probability of choosing `true`.
pub type PolarityLean = f64;

/// Representation for the probability of making a random decision.
pub type RandomDecisionBias = f64;

/// Representation for counts of conflicts.
pub type ConflictCount = u32;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// A limit on the number of conflicts during a solve, with zero for no limit.
    pub conflict_limit: ConfigOption<ConflictCount>,

    /// The `u` value to multiply the luby sequence by when determining whether to perform a restart.
    pub luby_u: ConfigOption<LubyRepresentation>,

    /// Default to the last set value of an atom when choosing a value for the atom, otherwise use the polarity lean.
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to an atom when freely choosing a value, if phase saving is disabled.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of choosing an atom at random, rather than by activity, when making a decision.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// The count of conflicts before the first reduction of the clause database.
    pub reduction_first: ConfigOption<ConflictCount>,

    /// The growth of the interval between reductions, after each reduction.
    pub reduction_increment: ConfigOption<ConflictCount>,

    /// The fraction of (unlocked, long) addition clauses removed on each reduction.
    pub reduction_fraction: ConfigOption<f64>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// The count of conflicts before the first restart, given a geometric restart policy.
    pub restart_first: ConfigOption<ConflictCount>,

    /// The factor applied to the interval between restarts after each restart, given a geometric restart policy.
    pub restart_multiplier: ConfigOption<f64>,

    /// How restarts are scheduled.
    pub restart_policy: ConfigOption<RestartPolicy>,

    /// The time limit for a solve, with zero for no limit.
    pub time_limit: ConfigOption<std::time::Duration>,

    /// Which VSIDS variant to use during resolution based analysis.
    pub vsids_variant: ConfigOption<VSIDS>,
}

impl Default for Config {
    /// The default context is configured to provide quick, deterministic, results on a library of tests.
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            conflict_limit: ConfigOption {
                name: "conflict_limit",
                min: ConflictCount::MIN,
                max: ConflictCount::MAX,
                value: 0,
            },

            luby_u: ConfigOption {
                name: "luby",
                min: 1,
                max: LubyRepresentation::MAX,
                value: 100,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            reduction_first: ConfigOption {
                name: "reduction_first",
                min: 1,
                max: ConflictCount::MAX,
                value: 2000,
            },

            reduction_increment: ConfigOption {
                name: "reduction_increment",
                min: 0,
                max: ConflictCount::MAX,
                value: 300,
            },

            reduction_fraction: ConfigOption {
                name: "reduction_fraction",
                min: 0.0,
                max: 1.0,
                value: 0.5,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            restart_first: ConfigOption {
                name: "restart_first",
                min: 1,
                max: ConflictCount::MAX,
                value: 100,
            },

            restart_multiplier: ConfigOption {
                name: "restart_multiplier",
                min: 1.0,
                max: f64::MAX,
                value: 1.5,
            },

            restart_policy: ConfigOption {
                name: "restart_policy",
                min: RestartPolicy::MIN,
                max: RestartPolicy::MAX,
                value: RestartPolicy::Geometric,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                value: std::time::Duration::from_secs(0),
            },

            vsids_variant: ConfigOption {
                name: "vsids",
                min: VSIDS::MIN,
                max: VSIDS::MAX,
                value: VSIDS::MiniSAT,
            },
        }
    }
}
