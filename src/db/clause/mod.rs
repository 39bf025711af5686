/*!
A database of clause related things.

Clauses are stored by kind (unit, binary, or long) and source (original or addition), each accessed through a [ClauseKey].

- Original clauses are never removed.
- Addition clauses of three or more literals may be removed by a [reduction](ClauseDB::reduce_by), and the index of a removed clause may be reused.
  Keys to addition clauses carry a token to distinguish such reuse, and a stale key never resolves to a different clause.
- Addition clauses of one or two literals are kept for the duration of a solve.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

pub mod db_clause;
mod store;

use std::collections::HashMap;

use db_clause::DBClause;

use crate::{
    config::{dbs::ClauseDBConfig, Activity, Config},
    db::{atom::AtomDB, keys::ClauseKey},
    misc::log::targets::{self},
    structures::literal::Literal,
    types::err::{self},
};

/// A database of clause related things.
pub struct ClauseDB {
    /// Clause database specific configuration parameters.
    config: ClauseDBConfig,

    /// A count of addition clauses.
    // This can't be inferred from the addition vec, as indices may be reused.
    addition_count: usize,

    /// A stack of keys for addition clauses whose indices are empty.
    empty_keys: Vec<ClauseKey>,

    /// Original unit clauses.
    unit_original: HashMap<ClauseKey, DBClause>,

    /// Addition unit clauses.
    unit_addition: HashMap<ClauseKey, DBClause>,

    /// Original binary clauses.
    binary_original: Vec<DBClause>,

    /// Addition binary clauses.
    binary_addition: Vec<DBClause>,

    /// Original long clauses.
    original: Vec<DBClause>,

    /// Addition long clauses, with none at the index of a removed clause.
    addition: Vec<Option<DBClause>>,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        ClauseDB {
            config: config.clause_db.clone(),

            addition_count: 0,
            empty_keys: Vec::default(),

            unit_original: HashMap::default(),
            unit_addition: HashMap::default(),

            binary_original: Vec::default(),
            binary_addition: Vec::default(),

            original: Vec::default(),
            addition: Vec::default(),
        }
    }
}

impl ClauseDB {
    /// The stored clause with the given key, or an error if no clause is stored with the key.
    pub fn get(&self, key: &ClauseKey) -> Result<&DBClause, err::ClauseDBError> {
        let found = match key {
            ClauseKey::OriginalUnit(_) => self.unit_original.get(key),
            ClauseKey::AdditionUnit(_) => self.unit_addition.get(key),
            ClauseKey::OriginalBinary(index) => self.binary_original.get(*index as usize),
            ClauseKey::AdditionBinary(index) => self.binary_addition.get(*index as usize),
            ClauseKey::Original(index) => self.original.get(*index as usize),
            ClauseKey::Addition(index, _) => match self.addition.get(*index as usize) {
                Some(Some(clause)) if clause.key() == key => Some(clause),
                Some(Some(_)) => return Err(err::ClauseDBError::InvalidKeyToken),
                _ => None,
            },
        };
        found.ok_or(err::ClauseDBError::Missing)
    }

    /// The stored clause with the given key, mutably, or an error if no clause is stored with the key.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut DBClause, err::ClauseDBError> {
        let found = match key {
            ClauseKey::OriginalUnit(_) => self.unit_original.get_mut(key),
            ClauseKey::AdditionUnit(_) => self.unit_addition.get_mut(key),
            ClauseKey::OriginalBinary(index) => self.binary_original.get_mut(*index as usize),
            ClauseKey::AdditionBinary(index) => self.binary_addition.get_mut(*index as usize),
            ClauseKey::Original(index) => self.original.get_mut(*index as usize),
            ClauseKey::Addition(index, _) => match self.addition.get_mut(*index as usize) {
                Some(Some(clause)) if clause.key() == key => Some(clause),
                Some(Some(_)) => return Err(err::ClauseDBError::InvalidKeyToken),
                _ => None,
            },
        };
        found.ok_or(err::ClauseDBError::Missing)
    }

    /// An iterator over all original clauses.
    pub fn all_original_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.unit_original
            .values()
            .chain(self.binary_original.iter())
            .chain(self.original.iter())
    }

    /// An iterator over all addition clauses currently stored.
    pub fn all_addition_clauses(&self) -> impl Iterator<Item = &DBClause> {
        self.unit_addition
            .values()
            .chain(self.binary_addition.iter())
            .chain(self.addition.iter().flatten())
    }

    /// A count of all original clauses.
    pub fn original_count(&self) -> usize {
        self.unit_original.len() + self.binary_original.len() + self.original.len()
    }

    /// A count of all addition clauses currently stored.
    pub fn addition_count(&self) -> usize {
        self.unit_addition.len() + self.binary_addition.len() + self.addition_count
    }

    /// A count of addition clauses of three or more literals currently stored.
    pub fn long_addition_count(&self) -> usize {
        self.addition_count
    }

    /// A count of all clauses currently in the database.
    pub fn current_clause_count(&self) -> usize {
        self.original_count() + self.addition_count()
    }
}

impl ClauseDB {
    /// Bumps the activity of an addition clause of three or more literals.
    ///
    /// Has no effect on other clauses, as only those clauses are candidates for removal.
    pub fn bump_activity(&mut self, key: &ClauseKey) {
        let ClauseKey::Addition(index, _) = key else {
            return;
        };
        let bump = self.config.bump.value;

        let rescale = match self.addition.get_mut(*index as usize) {
            Some(Some(clause)) if clause.key() == key => {
                clause.activity += bump;
                clause.activity > self.config.bump.max
            }
            _ => false,
        };

        if rescale {
            self.rescore_activity();
        }
    }

    /// Increase the activity bump applied to clauses by a factor.
    pub fn decay_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
        if self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
    }

    /// Rescales the activity of all addition clauses and the activity bump.
    fn rescore_activity(&mut self) {
        let factor: Activity = 1.0 / self.config.bump.max;
        for clause in self.addition.iter_mut().flatten() {
            clause.activity *= factor;
        }
        self.config.bump.value *= factor;
        log::debug!(target: targets::REDUCTION, "Clause activity rescaled by {factor}");
    }

    /// Whether `clause` is the antecedent of the value of one of its watched literals.
    fn is_locked(clause: &DBClause, atom_db: &AtomDB) -> bool {
        clause
            .iter()
            .take(2)
            .any(|literal| atom_db.reason_of(literal.atom()) == Some(*clause.key()))
    }

    /// Removes (at most) `count` addition clauses of three or more literals, by ascending activity.
    ///
    /// Any clause which is the antecedent of the value of some atom is kept.
    /// Returns the count of clauses removed.
    pub fn reduce_by(&mut self, count: usize, atom_db: &AtomDB) -> Result<usize, err::ClauseDBError> {
        let mut candidates = self
            .addition
            .iter()
            .flatten()
            .filter(|clause| !ClauseDB::is_locked(clause, atom_db))
            .map(|clause| (clause.activity, clause.key().index()))
            .collect::<Vec<_>>();

        candidates.sort_unstable_by(|a, b| a.0.total_cmp(&b.0));

        let mut removed = 0;
        for (_, index) in candidates.into_iter().take(count) {
            self.remove_addition(index)?;
            removed += 1;
        }

        log::info!(target: targets::REDUCTION, "Removed {removed} clauses, {} remain", self.addition_count);
        Ok(removed)
    }

    /// Removes a fraction of the addition clauses of three or more literals which are not the antecedent of some value, by ascending activity.
    ///
    /// Returns the count of clauses removed.
    pub fn reduce_by_fraction(
        &mut self,
        fraction: f64,
        atom_db: &AtomDB,
    ) -> Result<usize, err::ClauseDBError> {
        let unlocked = self
            .addition
            .iter()
            .flatten()
            .filter(|clause| !ClauseDB::is_locked(clause, atom_db))
            .count();

        let count = (unlocked as f64 * fraction) as usize;
        self.reduce_by(count, atom_db)
    }

    /// Removes the addition clause at the given index.
    ///
    /// Watches on the clause are dropped lazily, during propagation.
    fn remove_addition(&mut self, index: usize) -> Result<(), err::ClauseDBError> {
        let Some(slot) = self.addition.get_mut(index) else {
            return Err(err::ClauseDBError::Missing);
        };

        match slot.take() {
            None => {
                log::error!(target: targets::CLAUSE_DB, "Remove called on a missing addition clause");
                Err(err::ClauseDBError::Missing)
            }
            Some(clause) => {
                log::trace!(target: targets::CLAUSE_DB, "Removed {clause}");
                self.empty_keys.push(*clause.key());
                self.addition_count -= 1;
                Ok(())
            }
        }
    }
}
