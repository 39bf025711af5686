//! Assignments of values to atoms, recorded on the trail.

use crate::{
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Values the atom of `literal` to match the polarity of `literal` at the current level, with `source` as the antecedent.
    ///
    /// Assigning a literal which is already true has no effect, and assigning a literal which is false is an error.
    pub fn assign(
        &mut self,
        literal: CLiteral,
        source: Option<ClauseKey>,
    ) -> Result<(), err::AssignmentError> {
        let level = self.trail.level();
        if self.atom_db.set_value(literal, level, source)? {
            log::trace!(target: targets::VALUATION, "Assigned {literal} at level {level}");
            self.trail.store_assignment(literal);
        }
        Ok(())
    }

    /// Opens a fresh level and assigns `literal`, without an antecedent.
    ///
    /// An error is returned if the atom of `literal` already has a value.
    pub fn decide(&mut self, literal: CLiteral) -> Result<(), err::ErrorKind> {
        if self.atom_db.value_of(literal.atom()).is_some() {
            log::error!(target: targets::DECISION, "Decision on valued atom {}", literal.atom());
            return Err(err::ErrorKind::InvalidState);
        }

        self.trail.open_level();
        self.assign(literal, None)?;
        self.counters.total_decisions += 1;
        log::trace!(target: targets::DECISION, "Decision {literal} at level {}", self.trail.level());
        Ok(())
    }
}
