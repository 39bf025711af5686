use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause, ClauseSource},
        literal::{CLiteral, IntLiteral, Literal},
    },
    types::err::{self},
};

use super::ClauseOk;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom.
    ///
    /// The saved phase of the atom is drawn with the probability of the [polarity lean](crate::config::Config::polarity_lean).
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let previous_value = self.rng.random_bool(self.config.polarity_lean.value);
        let atom = self.atom_db.fresh_atom(previous_value)?;
        self.watches.ensure_atom(atom);
        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }
        Ok(atom)
    }

    /// Ensures the context has at least `count` atoms (excluding top), so atoms 1 to `count` may be used.
    pub fn ensure_atoms(&mut self, count: usize) -> Result<(), err::AtomDBError> {
        while self.atom_count() < count {
            self.fresh_atom()?;
        }
        Ok(())
    }

    /// A clause from DIMACS integers, checked against the atoms of the context.
    pub fn clause_from_ints(
        &self,
        literals: &[IntLiteral],
    ) -> Result<CClause, err::MalformedClauseError> {
        let mut clause = CClause::with_capacity(literals.len());
        for literal in literals {
            if *literal == 0 {
                return Err(err::MalformedClauseError::Zero);
            }
            if literal.atom() as usize > self.atom_count() {
                return Err(err::MalformedClauseError::UnknownAtom(literal.as_int()));
            }
            clause.push(literal.canonical());
        }
        Ok(clause)
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a clause to the context.
    ///
    /// - An error is returned if the clause contains a literal whose atom is not part of the context, or a literal and its negation.
    /// - Duplicate literals are removed.
    /// - If some literal of the clause is fixed true without a decision, the clause is not added.
    /// - Literals fixed false without a decision are removed, and if no literal remains the context is unsatisfiable.
    /// - A unit clause is fixed, without a decision, and queued for propagation.
    ///
    /// Clauses may only be added before a decision has been made.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, err::ErrorKind> {
        if self.trail.decision_is_made() {
            return Err(err::ErrorKind::from(err::ClauseDBError::DecisionMade));
        }

        let mut clause = clause.canonical();

        for literal in &clause {
            if literal.atom() == 0 || literal.atom() as usize > self.atom_count() {
                return Err(err::ErrorKind::from(
                    err::MalformedClauseError::UnknownAtom(literal.as_int()),
                ));
            }
        }

        clause.sort_unstable();
        clause.dedup();
        // Literals are ordered by atom, so a literal and its negation are adjacent.
        if clause.windows(2).any(|pair| pair[0].atom() == pair[1].atom()) {
            return Err(err::ErrorKind::from(err::MalformedClauseError::Tautology));
        }

        if self.state == ContextState::Configuration {
            self.state = ContextState::Input;
        }

        if clause
            .iter()
            .any(|literal| self.atom_db.value_of(literal.atom()) == Some(literal.polarity()))
        {
            log::trace!(target: targets::CLAUSE_DB, "Satisfied on addition: {}", clause.as_dimacs(true));
            return Ok(ClauseOk::Satisfied);
        }

        clause.retain(|literal| self.atom_db.value_of(literal.atom()).is_none());

        match clause.len() {
            0 => {
                log::info!(target: targets::CLAUSE_DB, "Unsatisfiable clause added");
                self.state = ContextState::Unsatisfiable;
                Ok(ClauseOk::Unsatisfiable)
            }

            1 => {
                let literal: CLiteral = clause[0];
                let key: ClauseKey =
                    self.clause_db
                        .store(literal, ClauseSource::Original, &mut self.watches)?;
                self.assign(literal, Some(key))?;
                Ok(ClauseOk::Added(key))
            }

            _ => {
                let key = self
                    .clause_db
                    .store(clause, ClauseSource::Original, &mut self.watches)?;
                Ok(ClauseOk::Added(key))
            }
        }
    }
}
