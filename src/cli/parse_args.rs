use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use marten_sat::{
    config::{vsids::VSIDS, Config, PolarityLean, RandomDecisionBias, RestartPolicy},
    types::err::{self},
};

/// Determines whether a formula in DIMACS CNF form is satisfiable or unsatisfiable.
#[derive(Parser, Debug)]
#[command(name = "marten_cli", version, about)]
pub struct Args {
    /// The DIMACS CNF file to solve.
    pub path: PathBuf,

    /// Write a model, if one exists.
    #[arg(long, alias = "valuation")]
    pub model: bool,

    /// Stop the solve after some number of seconds.
    #[arg(long)]
    pub time_limit: Option<u64>,

    /// Stop the solve after some number of conflicts.
    #[arg(long)]
    pub conflict_limit: Option<u32>,

    /// How restarts are scheduled.
    #[arg(long, value_enum)]
    pub restart_policy: Option<CliRestartPolicy>,

    /// Prevent restarts.
    #[arg(long)]
    pub no_restarts: bool,

    /// Value decisions independently of any previous value.
    #[arg(long)]
    pub no_phase_saving: bool,

    /// The variant of VSIDS used to bump atom activity.
    #[arg(long, value_enum)]
    pub vsids: Option<CliVSIDS>,

    /// The probability of deciding on a random atom, rather than the most active atom.
    #[arg(long)]
    pub random_decision_bias: Option<RandomDecisionBias>,

    /// The probability of valuing an atom true, when no previous value is used.
    #[arg(long)]
    pub polarity_lean: Option<PolarityLean>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliRestartPolicy {
    Geometric,
    Luby,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliVSIDS {
    Chaff,
    Minisat,
}

impl Args {
    /// A configuration with each option given set, and the default otherwise.
    ///
    /// An error is returned if some value is out of bounds.
    pub fn config(&self) -> Result<Config, err::ConfigError> {
        let mut config = Config::default();

        if let Some(secs) = self.time_limit {
            config
                .time_limit
                .set(std::time::Duration::from_secs(secs))?;
        }

        if let Some(count) = self.conflict_limit {
            config.conflict_limit.set(count)?;
        }

        if let Some(policy) = self.restart_policy {
            config.restart_policy.set(match policy {
                CliRestartPolicy::Geometric => RestartPolicy::Geometric,
                CliRestartPolicy::Luby => RestartPolicy::Luby,
            })?;
        }

        if self.no_restarts {
            config.restart.set(false)?;
        }

        if self.no_phase_saving {
            config.phase_saving.set(false)?;
        }

        if let Some(variant) = self.vsids {
            config.vsids_variant.set(match variant {
                CliVSIDS::Chaff => VSIDS::Chaff,
                CliVSIDS::Minisat => VSIDS::MiniSAT,
            })?;
        }

        if let Some(bias) = self.random_decision_bias {
            config.random_decision_bias.set(bias)?;
        }

        if let Some(lean) = self.polarity_lean {
            config.polarity_lean.set(lean)?;
        }

        Ok(config)
    }
}
