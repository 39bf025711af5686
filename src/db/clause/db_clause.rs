/*!
A clause as stored in the clause database, together with associated metadata.

The watched literals of a stored clause of two or more literals are those at positions 0 and 1.
For a clause derived by resolution, position 0 holds the asserted literal and position 1 some literal of the assertion level.
*/

use crate::{
    config::Activity,
    db::ClauseKey,
    structures::{
        clause::{CClause, Clause},
        literal::CLiteral,
    },
};

/// A clause together with its key and activity.
pub struct DBClause {
    /// The key to the clause.
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// The activity of the clause, bumped on use during conflict analysis.
    pub(super) activity: Activity,
}

impl DBClause {
    /// A new stored clause, with zero activity.
    pub fn new(key: ClauseKey, clause: CClause) -> Self {
        DBClause {
            key,
            clause,
            activity: 0.0,
        }
    }

    /// The key to the clause.
    pub fn key(&self) -> &ClauseKey {
        &self.key
    }

    /// The clause.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// The activity of the clause.
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// The literal at `index`, if present.
    pub fn get(&self, index: usize) -> Option<CLiteral> {
        self.clause.get(index).copied()
    }

    /// Swaps the literals at indicies `a` and `b`.
    ///
    /// To be used with care, as the watched literals of the clause are those at indicies 0 and 1.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.clause.swap(a, b)
    }
}

impl std::ops::Deref for DBClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.clause.as_dimacs(false))
    }
}
