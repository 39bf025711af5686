//! Abstract elements of a solve and their representation.
//!
//! - [Atoms](atom), aka. variables.
//! - [Literals](literal), atoms paired with a polarity.
//! - [Clauses](clause), disjunctions of literals.
//! - [Valuations](valuation), (partial) functions from atoms to truth values.

pub mod atom;
pub mod clause;
pub mod literal;
pub mod valuation;
