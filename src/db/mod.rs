//! Databases for holding information relevant to a solve.
//!
//! - [The clause database](crate::db::clause)
//!   + A collection of clauses, each indexed by a [clause key](ClauseKey). \
//!     From an external perspective there are two important kinds of clause:
//!     * Original clauses \
//!       Original clauses are added to the context from some external source (e.g. directly or through some DIMACS file).
//!       The collection of original clauses is the CNF formula whose satisfiability may be determined.
//!     * Addition clauses \
//!       Clauses added to the context by some procedure (e.g. via resolution).
//!       Every addition clause is a consequence of the collection of original clauses.
//! - [The atom database](crate::db::atom)
//!   + Properties of atoms: the current valuation, levels, antecedents, saved phases, and activity.
//! - [The trail](crate::db::trail)
//!   + The order in which atoms were valued, split into levels.
//! - [Watches](crate::db::watches)
//!   + For each literal, the clauses watching the literal.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

/// The index of a decision level.
///
/// Level zero contains every assignment made without an open decision, and the level of each decision is the count of decisions made up to and including the decision.
pub type LevelIndex = u32;
