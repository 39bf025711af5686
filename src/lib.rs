//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form.
//!
//! marten_sat is a conflict-driven clause-learning (CDCL) solver.
//! A formula is added to a [context], a solve takes place within the context, and the context then reports whether the formula is satisfiable, unsatisfiable, or whether the solve was stopped before either could be determined.
//! If the formula is satisfiable, the context holds a complete valuation on which each clause of the formula is true.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built from a [configuration](crate::config).
//! Clauses may be added though the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, a solve is viewed in terms of a handful of databases:
//! - A formula is stored in a [clause database](crate::db::clause), each clause accessed through a [key](crate::db::ClauseKey).
//! - A valuation, together with the level, antecedent, saved phase, and activity of each atom, is stored in an [atom database](crate::db::atom).
//! - The order in which atoms were valued is stored on a [trail](crate::db::trail).
//! - Watch lists for each literal are stored in [watches](crate::db::watches).
//!
//! The algorithm for determining satisfiability is factored into a collection of [procedures], with the [solve](crate::procedures::solve) procedure as the entry point.
//!
//! # Examples
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use marten_sat::context::Context;
//! # use marten_sat::config::Config;
//! # use marten_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let dimacs = b"
//! p cnf 2 4
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ";
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
//! ```
//!
//! + Build a formula directly and inspect the model.
//!
//! ```rust
//! # use marten_sat::context::Context;
//! # use marten_sat::config::Config;
//! # use marten_sat::reports::Report;
//! let mut the_context = Context::from_config(Config::default());
//! the_context.ensure_atoms(3).unwrap();
//!
//! let formula = vec![vec![1, 2], vec![-1, 3], vec![-3]];
//! for clause in &formula {
//!     let clause = the_context.clause_from_ints(clause).unwrap();
//!     assert!(the_context.add_clause(clause).is_ok());
//! }
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! assert_eq!(the_context.model(), Some(vec![false, true, false]));
//! assert!(the_context.model_satisfies(&formula));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout the library, with targets listed in [misc::log].
//! No log implementation is provided by the library.
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/) (as with the cli, built with the `log` feature):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Logs of reductions can be found with `RUST_LOG=reduction=info …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod resolution_buffer;
pub mod structures;
pub mod types;
