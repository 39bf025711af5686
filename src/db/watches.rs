/*!
A record of which clauses are watching each literal.

# Theory

A core part of a solve is [Boolean Constraint Propagation](crate::procedures::bcp) (BCP).
In short, BCP is the observation that some literal in a clause must be true due to all other literals in the clause being false.

BCP only applies to a clause when exactly one literal of the clause has no value and every other literal conflicts with the valuation.
So, it is enough to watch two literals of each clause, neither of which is false, so long as this is possible.
Only when a watched literal becomes false need the clause be examined.

The given implementation keeps the two watched literals of a clause at positions 0 and 1 of the [stored clause](crate::db::clause::db_clause::DBClause).
Watches are not revised on backjumps, as a watch which was valid before an assignment remains valid after the assignment is undone.

# Implementation

Each literal has two watch lists, distinguished by the length of the watching clause:

- Binary clauses.
  The watched literals of a binary clause never change, and so the *other* literal is recorded with the watch to avoid a trip to the clause itself.
- Long clauses (three or more literals), recorded by key alone.

Unit clauses never watch any literal.

Watches to clauses removed from the clause database are not removed eagerly, and are instead dropped when next encountered during BCP.
*/

use crate::{
    db::ClauseKey,
    structures::literal::{CLiteral, Literal},
};

/// A watch on a binary clause, together with the other literal of the clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryWatch {
    /// The other literal of the binary clause.
    pub literal: CLiteral,

    /// The key to the binary clause.
    pub key: ClauseKey,
}

/// A watch on a long clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongWatch {
    /// The key to the long clause.
    pub key: ClauseKey,
}

/// The watch lists of the literals of a single atom.
#[derive(Default)]
pub struct WatchDB {
    positive_binary: Vec<BinaryWatch>,
    positive_long: Vec<LongWatch>,
    negative_binary: Vec<BinaryWatch>,
    negative_long: Vec<LongWatch>,
}

/// Watch lists, indexed by atom.
#[derive(Default)]
pub struct Watches {
    dbs: Vec<WatchDB>,
}

impl Watches {
    /// Extends the watch lists to include lists for the literals of `atom`.
    pub fn ensure_atom(&mut self, atom: crate::structures::atom::Atom) {
        while self.dbs.len() <= atom as usize {
            self.dbs.push(WatchDB::default());
        }
    }

    /// Notes that the binary clause of `watch` watches `literal`.
    pub fn watch_binary(&mut self, literal: CLiteral, watch: BinaryWatch) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_binary.push(watch),
            false => db.negative_binary.push(watch),
        }
    }

    /// Notes that the long clause of `watch` watches `literal`.
    pub fn watch_long(&mut self, literal: CLiteral, watch: LongWatch) {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => db.positive_long.push(watch),
            false => db.negative_long.push(watch),
        }
    }

    /// The binary clauses watching `literal`.
    pub fn binary(&self, literal: CLiteral) -> &[BinaryWatch] {
        let db = &self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &db.positive_binary,
            false => &db.negative_binary,
        }
    }

    /// The long clauses watching `literal`.
    pub fn long(&self, literal: CLiteral) -> &[LongWatch] {
        let db = &self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => &db.positive_long,
            false => &db.negative_long,
        }
    }

    /// Takes the long watch list of `literal`, leaving an empty list until the list is [restored](Watches::restore_long).
    ///
    /// Watches added to the list of `literal` while the list is taken are kept on restoration.
    pub fn take_long(&mut self, literal: CLiteral) -> Vec<LongWatch> {
        let db = &mut self.dbs[literal.atom() as usize];
        match literal.polarity() {
            true => std::mem::take(&mut db.positive_long),
            false => std::mem::take(&mut db.negative_long),
        }
    }

    /// Restores a long watch list taken by [take_long](Watches::take_long).
    pub fn restore_long(&mut self, literal: CLiteral, mut list: Vec<LongWatch>) {
        let db = &mut self.dbs[literal.atom() as usize];
        let slot = match literal.polarity() {
            true => &mut db.positive_long,
            false => &mut db.negative_long,
        };
        list.append(slot);
        *slot = list;
    }
}
