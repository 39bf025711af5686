use crate::{
    db::{
        clause::{db_clause::DBClause, ClauseDB},
        watches::{BinaryWatch, LongWatch, Watches},
        ClauseKey, FormulaIndex,
    },
    misc::log::targets::{self},
    structures::clause::{Clause, ClauseSource},
    types::err::{self},
};

impl ClauseDB {
    /// Stores a clause with an automatically generated key, and returns the key.
    ///
    /// The literals at positions 0 and 1 of a clause of two or more literals are watched.
    /// So, when storing a clause during a solve, positions 0 and 1 should hold literals which may be watched, e.g. an asserted literal and a literal of the assertion level.
    ///
    /// No check is made on the literals of the clause, see [add_clause](crate::context::GenericContext::add_clause) for checks on original clauses.
    pub fn store(
        &mut self,
        clause: impl Clause,
        source: ClauseSource,
        watches: &mut Watches,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        let clause = clause.canonical();

        match clause.len() {
            0 => Err(err::ClauseDBError::EmptyClause),

            1 => {
                let literal = clause[0];
                let key = match source {
                    ClauseSource::Original => ClauseKey::OriginalUnit(literal),
                    ClauseSource::Resolution => ClauseKey::AdditionUnit(literal),
                };
                let store = match source {
                    ClauseSource::Original => &mut self.unit_original,
                    ClauseSource::Resolution => &mut self.unit_addition,
                };
                store.insert(key, DBClause::new(key, clause));
                log::trace!(target: targets::CLAUSE_DB, "Stored {key}");
                Ok(key)
            }

            2 => {
                let (store, key) = match source {
                    ClauseSource::Original => {
                        let index = self.binary_original.len();
                        (&mut self.binary_original, ClauseKey::OriginalBinary(fresh_index(index)?))
                    }
                    ClauseSource::Resolution => {
                        let index = self.binary_addition.len();
                        (&mut self.binary_addition, ClauseKey::AdditionBinary(fresh_index(index)?))
                    }
                };

                watches.watch_binary(clause[0], BinaryWatch { literal: clause[1], key });
                watches.watch_binary(clause[1], BinaryWatch { literal: clause[0], key });

                let db_clause = DBClause::new(key, clause);
                log::trace!(target: targets::CLAUSE_DB, "Stored {db_clause}");
                store.push(db_clause);
                Ok(key)
            }

            _ => {
                let key = match source {
                    ClauseSource::Original => ClauseKey::Original(fresh_index(self.original.len())?),
                    ClauseSource::Resolution => match self.empty_keys.pop() {
                        Some(key) => key.retoken()?,
                        None => ClauseKey::Addition(fresh_index(self.addition.len())?, 0),
                    },
                };

                watches.watch_long(clause[0], LongWatch { key });
                watches.watch_long(clause[1], LongWatch { key });

                let db_clause = DBClause::new(key, clause);
                log::trace!(target: targets::CLAUSE_DB, "Stored {db_clause}");

                match key {
                    ClauseKey::Addition(index, _) => {
                        self.addition_count += 1;
                        let index = index as usize;
                        if index < self.addition.len() {
                            self.addition[index] = Some(db_clause);
                        } else {
                            self.addition.push(Some(db_clause));
                        }
                    }
                    _ => self.original.push(db_clause),
                }
                Ok(key)
            }
        }
    }
}

/// The next index of a store, if the index can be represented.
fn fresh_index(index: usize) -> Result<FormulaIndex, err::ClauseDBError> {
    FormulaIndex::try_from(index).map_err(|_| err::ClauseDBError::StorageExhausted)
}
