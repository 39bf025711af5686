/*!
A buffer for applying resolution to a conflict, through the current level, until a unique implication point is found.

Resolution starts from a clause which is unsatisfiable on the current valuation.
The trail is then walked backwards, and each marked literal of the current level is resolved away using its antecedent, until exactly one literal of the current level remains.
That literal is the first unique implication point (UIP), and its negation is asserted by the resolved clause once the trail is cut back to the second highest level of the clause.

Literals valued at level zero are dropped during resolution, as these are false without any decision.

The buffer keeps the atoms and clauses used, for the [VSIDS](crate::config::vsids) bump of atoms and the bump of clause activity.

```rust,ignore
let clause = self.resolution_buffer.resolve_through_current_level(&key, &self.clause_db, &self.atom_db, &self.trail)?;
```
*/

use crate::{
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, ClauseKey},
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::CClause,
        literal::Literal,
    },
    types::err::{self},
};

/// A buffer for use when applying resolution to a sequence of clauses.
#[derive(Default)]
pub struct ResolutionBuffer {
    /// Whether each atom has been seen during the current resolution, indexed by atom.
    seen: Vec<bool>,

    /// Every atom seen during the current resolution, in order.
    atoms_used: Vec<Atom>,

    /// Every clause used during the current resolution, in order.
    premises: Vec<ClauseKey>,

    /// Literals of the resolved clause below the current level.
    lower: CClause,
}

impl ResolutionBuffer {
    /// Clears the buffer, and ensures an atom count of `atom_count` is supported.
    pub fn refresh(&mut self, atom_count: usize) {
        for atom in self.atoms_used.drain(..) {
            self.seen[atom as usize] = false;
        }
        self.seen.resize(atom_count, false);
        self.premises.clear();
        self.lower.clear();
    }

    /// The atoms of every clause used during the most recent resolution, excluding atoms of level zero.
    pub fn atoms_used(&self) -> impl Iterator<Item = Atom> + '_ {
        self.atoms_used.iter().copied()
    }

    /// The keys of every clause used during the most recent resolution.
    pub fn premises(&self) -> &[ClauseKey] {
        &self.premises
    }

    /// Resolves from the clause of `conflict` to the first unique implication point of the current level.
    ///
    /// Returns the resolved clause, with the asserted literal at index 0.
    /// If the clause contains further literals, a literal of the second highest level of the clause is at index 1.
    pub fn resolve_through_current_level(
        &mut self,
        conflict: &ClauseKey,
        clause_db: &ClauseDB,
        atom_db: &AtomDB,
        trail: &Trail,
    ) -> Result<CClause, err::ResolutionBufferError> {
        self.refresh(atom_db.count());

        let level = trail.level();
        let mut key = *conflict;

        // The count of marked literals of the current level which are yet to be resolved.
        let mut open_literals: usize = 0;
        let mut index = trail.literals.len();

        let uip = 'resolution_loop: loop {
            let Ok(clause) = clause_db.get(&key) else {
                log::error!(target: targets::ANALYSIS, "Lost {key} during resolution");
                return Err(err::ResolutionBufferError::LostClause);
            };
            self.premises.push(key);

            for literal in clause.iter() {
                let atom = literal.atom();
                if self.seen[atom as usize] {
                    continue;
                }

                match atom_db.level_of(atom) {
                    None => return Err(err::ResolutionBufferError::UnvaluedLiteral),

                    Some(0) => {}

                    Some(literal_level) => {
                        self.seen[atom as usize] = true;
                        self.atoms_used.push(atom);

                        if literal_level == level {
                            open_literals += 1;
                        } else {
                            self.lower.push(*literal);
                        }
                    }
                }
            }

            let pivot = loop {
                if index == 0 {
                    return Err(err::ResolutionBufferError::ExhaustedTrail);
                }
                index -= 1;
                let candidate = trail.literals[index];
                if self.seen[candidate.atom() as usize] {
                    break candidate;
                }
            };

            open_literals = match open_literals.checked_sub(1) {
                Some(count) => count,
                None => return Err(err::ResolutionBufferError::ExhaustedTrail),
            };

            if open_literals == 0 {
                break 'resolution_loop pivot;
            }

            key = match atom_db.reason_of(pivot.atom()) {
                Some(reason) => reason,
                None => {
                    log::error!(target: targets::ANALYSIS, "{pivot} resolved without an antecedent");
                    return Err(err::ResolutionBufferError::MissingAntecedent);
                }
            };
        };

        let mut clause = CClause::with_capacity(self.lower.len() + 1);
        clause.push(uip.negate());
        clause.extend(self.lower.iter().copied());

        // Watch a literal of the assertion level.
        let mut second = 1;
        let mut second_level = 0;
        for (position, literal) in clause.iter().enumerate().skip(1) {
            let literal_level = atom_db.level_of(literal.atom()).unwrap_or(0);
            if literal_level > second_level {
                second = position;
                second_level = literal_level;
            }
        }
        if clause.len() > 2 {
            clause.swap(1, second);
        }

        Ok(clause)
    }
}
