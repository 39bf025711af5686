/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) [valuation](Valuation) and the previous value of each atom (its saved phase).
- An [IndexHeap] recording the activity of atoms, where any atom without a value is 'active' on the heap.
- A record of the level at which each atom was valued, and the antecedent (if any) of the value.

Atom 0 is [top](crate::structures::atom::TOP_ATOM), valued true on creation of the database and never unvalued.
*/

pub mod activity;

use crate::{
    config::{dbs::AtomDBConfig, Activity, Config},
    db::{ClauseKey, LevelIndex},
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        literal::{CLiteral, Literal},
        valuation::{CValuation, Valuation},
    },
    types::err::{self},
};

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) [valuation](Valuation).
    valuation: CValuation,

    /// The value of each atom when last valued, or some initial value.
    previous_valuation: Vec<bool>,

    /// An [IndexHeap] recording the activity of atoms.
    activity_heap: IndexHeap<Activity>,

    /// The level at which each valued atom was valued.
    levels: Vec<Option<LevelIndex>>,

    /// The antecedent of each valued atom, with none for decisions and unvalued atoms.
    reasons: Vec<Option<ClauseKey>>,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: AtomDBConfig,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &Config) -> Self {
        let mut db = AtomDB {
            valuation: vec![Some(true)],
            previous_valuation: vec![true],
            activity_heap: IndexHeap::default(),
            levels: vec![Some(0)],
            reasons: vec![None],
            config: config.atom_db.clone(),
        };
        // Top is never active on the heap.
        db.activity_heap.add(0, 0.0);
        db
    }

    /// A count of atoms in the [AtomDB], including top.
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation, as some structure which implements the valuation trait.
    pub fn valuation(&self) -> &impl Valuation {
        &self.valuation
    }

    /// The current valuation, as a canonical [CValuation].
    pub fn valuation_canonical(&self) -> &CValuation {
        &self.valuation
    }

    /// A fresh atom, with the given initial saved phase.
    ///
    /// On Ok the atom is part of the language of the context, and is active on the activity heap.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, err::AtomDBError> {
        let atom = match Atom::try_from(self.valuation.len()) {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::VALUATION, "Atoms exhausted");
                return Err(err::AtomDBError::AtomsExhausted);
            }
        };

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.levels.push(None);
        self.reasons.push(None);

        self.activity_heap.add(atom as usize, 0.0);
        self.activity_heap.activate(atom as usize);

        Ok(atom)
    }

    /// The value of `atom`, if the atom has a value.
    ///
    /// An atom outside of the database has no value.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation.get(atom as usize).copied().flatten()
    }

    /// The value of `atom` before the atom was most recently unvalued, or the initial value of the atom.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation[atom as usize]
    }

    /// The level at which `atom` was valued, if the atom has a value.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels.get(atom as usize).copied().flatten()
    }

    /// The antecedent of the value of `atom`, if the atom was valued by propagation.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reasons.get(atom as usize).copied().flatten()
    }

    /// Values the atom of `literal` to match the polarity of `literal`, noting the level and antecedent of the value.
    ///
    /// Returns true if the atom was valued, and false if the atom already had the value.
    /// An error is returned if the atom has the opposite value, or is not part of the database.
    pub fn set_value(
        &mut self,
        literal: CLiteral,
        level: LevelIndex,
        source: Option<ClauseKey>,
    ) -> Result<bool, err::AssignmentError> {
        let atom = literal.atom() as usize;
        match self.valuation.get(atom) {
            None => Err(err::AssignmentError::UnknownAtom),

            Some(None) => {
                self.valuation[atom] = Some(literal.polarity());
                self.levels[atom] = Some(level);
                self.reasons[atom] = source;
                Ok(true)
            }

            Some(Some(value)) if *value == literal.polarity() => Ok(false),

            Some(Some(_)) => {
                log::error!(target: targets::VALUATION, "Conflicting assignment of {literal}");
                Err(err::AssignmentError::ConflictingAssignment)
            }
        }
    }

    /// Clears the value of an atom, saving the value as the previous value of the atom, and activates the atom on the activity heap.
    pub fn drop_value(&mut self, atom: Atom) {
        let index = atom as usize;
        if let Some(value) = self.valuation[index].take() {
            self.previous_valuation[index] = value;
        }
        self.levels[index] = None;
        self.reasons[index] = None;
        self.activity_heap.activate(index);
        log::trace!(target: targets::VALUATION, "Cleared atom: {atom}");
    }
}
