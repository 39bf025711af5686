//! Determines the satisfiability of the formula in a context.
//!
//! # Overview
//!
//! A solve repeatedly applies the consequences of the formula on the current valuation, through [apply_consequences](crate::procedures::apply_consequences):
//!
//! - If there are no further consequences to apply, a decision is made, unless each atom has a value, in which case the formula is satisfiable.
//! - If a conflict is found without any decision, the formula is unsatisfiable.
//! - If a conflict is found after some decision, a clause is learnt, a backjump is made to the level at which the clause asserts some literal, and the literal is assigned.
//!
//! Roughly, the loop is as diagrammed:
//!
//! ```none
//!           +---------------+
//!   +-------| make_decision |
//!   |       +---------------+
//!   |               ⌃
//!   |               |
//!   |               | if there are no further consequences, and the valuation is partial
//!   |               |
//!   |               |              +-----> satisfiable, if the valuation is complete
//!   ⌄   +--------------------+     |
//! --+-->| apply_consequences |-----+
//!   ⌃   +--------------------+     |
//!   |               |              +-----> unsatisfiable, on a conflict without a decision
//!   |               |
//!   |               | if a clause is learnt
//!   |               |
//!   |               ⌄
//!   |           +----------+
//!   +-----------| backjump |
//!               +----------+
//! ```
//!
//! Before each decision, a solve may be interrupted:
//! - To stop, if a [limit or the terminate callback](crate::procedures::schedulers) says so.
//!   The context then reports [Unknown](crate::reports::Report::Unknown), with no decision made, and the solve may be resumed by a further call to solve.
//! - To [restart](crate::procedures::schedulers).
//! - To [reduce](crate::procedures::reduction) the clause database.
//!
//! After each conflict the activity of every atom and every clause is decayed.
//!
//! # Example
//!
//! ```rust
//! # use marten_sat::config::Config;
//! # use marten_sat::context::Context;
//! # use marten_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! the_context.ensure_atoms(2).unwrap();
//!
//! let not_p_or_q = the_context.clause_from_ints(&[-1, 2]).unwrap();
//! let p_or_not_q = the_context.clause_from_ints(&[1, -2]).unwrap();
//! assert!(the_context.add_clause(not_p_or_q).is_ok());
//! assert!(the_context.add_clause(p_or_not_q).is_ok());
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//!
//! let model = the_context.model().unwrap();
//! assert_eq!(model[0], model[1]);
//! ```
//!
//! # Literature
//!
//! The core solve procedure follows [Decision Procedures](https://doi.org/10.1007/978-3-662-50497-0)
//! and the [Handbook of satisfiability](https://www.iospress.com/catalog/books/handbook-of-satisfiability-2).

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    misc::log::targets::{self},
    procedures::{apply_consequences::ApplyConsequencesOk, decision::DecisionOk},
    reports::Report,
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula in the context.
    ///
    /// Returns [Unknown](Report::Unknown) if the solve was stopped before satisfiability was determined.
    pub fn solve(&mut self) -> Result<Report, err::ErrorKind> {
        match self.state {
            ContextState::Satisfiable | ContextState::Unsatisfiable => return Ok(self.report()),
            _ => {}
        }

        let total_time = std::time::Instant::now();

        self.state = ContextState::Solving;
        if self.counters.restart_limit == 0.0 {
            self.initialise_restart_limit();
        }
        if self.counters.reduction_limit == 0 {
            self.initialise_reduction_limit();
        }

        'solve_loop: loop {
            self.counters.total_iterations += 1;

            match self.apply_consequences()? {
                ApplyConsequencesOk::FundamentalConflict => break 'solve_loop,

                ApplyConsequencesOk::Exhausted => {
                    self.counters.time = total_time.elapsed();

                    if self.termination_due() {
                        self.backjump(0);
                        return Ok(Report::Unknown);
                    }

                    if self.restart_interrupt() {
                        self.restart();
                    }

                    if self.reduction_interrupt() {
                        self.reduce()?;
                    }

                    match self.make_decision() {
                        DecisionOk::Literal(decision) => {
                            self.decide(decision)?;
                            continue 'solve_loop;
                        }
                        DecisionOk::Exhausted => break 'solve_loop,
                    }
                }

                ApplyConsequencesOk::UnitClause { literal } => {
                    self.assign(literal, Some(ClauseKey::AdditionUnit(literal)))?;
                }

                ApplyConsequencesOk::AssertingClause { key, literal } => {
                    self.assign(literal, Some(key))?;
                }
            }

            self.note_conflict();

            self.atom_db.decay_activity();
            self.clause_db.decay_activity();
        }

        self.counters.time = total_time.elapsed();
        log::info!(target: targets::DECISION,
            "Solve finished after {} conflicts, {} decisions, {} propagations",
            self.counters.total_conflicts,
            self.counters.total_decisions,
            self.counters.total_propagations
        );

        Ok(self.report())
    }
}
