/*!
Methods for choosing the value of an atom.

# Overview

A decision is to value some atom *a* with value *v*, represented as the literal with atom *a* and polarity *v*.
For example, a decision to value *p* with value *false* is represented with the literal *-p*.

The atom is chosen in one of two ways:
- With probability [random_decision_bias](crate::config::Config::random_decision_bias), uniformly from the atoms without a value.
- Otherwise, as the most active atom without a value, by [VSIDS](crate::config::vsids) activity.

The [atom database](crate::db::atom) keeps atoms on a max activity heap.
An atom is returned to the heap whenever its value is cleared, though atoms with a value are only removed from the heap when popped, so some work may be needed to find an atom without a value.

```rust,ignore
while let Some(atom) = self.atom_db.heap_pop_most_active() {
    if self.atom_db.value_of(atom).is_none() {
        return Some(atom);
    }
}
```

# Phase saving

If phase saving is enabled, an atom which was previously valued *v* is again valued *v*.
Every atom has a 'previous' value, initialised via [Config::polarity_lean](crate::config::Config::polarity_lean) when the atom is added.

Without phase saving, the value is drawn via [Config::polarity_lean](crate::config::Config::polarity_lean) on each decision.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::{Atom, TOP_ATOM},
        literal::{CLiteral, Literal},
        valuation::Valuation,
    },
};

/// Possible 'Ok' results from choosing a truth value to assign an atom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecisionOk {
    /// Some truth value was chosen for some atom.
    Literal(CLiteral),

    /// All atoms had already been assigned truth values, so no decision could be made.
    Exhausted,
}

/// Methods related to making decisions.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Chooses a decision literal, though does not assign the literal.
    ///
    /// If every atom has a value, the state of the context is set to satisfiable.
    ///
    /// ```rust,ignore
    /// match self.make_decision() {
    ///     DecisionOk::Literal(decision) => self.decide(decision)?,
    ///     DecisionOk::Exhausted => break,
    /// }
    /// ```
    pub fn make_decision(&mut self) -> DecisionOk {
        // Takes ownership of rng to satisfy the borrow checker.
        let mut rng = std::mem::take(&mut self.rng);
        let chosen_atom = self.atom_without_value(&mut rng);
        self.rng = rng;

        match chosen_atom {
            Some(chosen_atom) => {
                let value = match self.config.phase_saving.value {
                    true => self.atom_db.previous_value_of(chosen_atom),
                    false => self.rng.random_bool(self.config.polarity_lean.value),
                };

                let decision_literal = CLiteral::new(chosen_atom, value);
                log::trace!(target: targets::DECISION, "Chose {decision_literal}");

                DecisionOk::Literal(decision_literal)
            }

            None => {
                self.state = ContextState::Satisfiable;
                DecisionOk::Exhausted
            }
        }
    }

    /// Returns an atom which has no value on the current valuation, either by random choice or by most activity.
    pub fn atom_without_value(&mut self, rng: &mut impl Rng) -> Option<Atom> {
        match rng.random_bool(self.config.random_decision_bias.value) {
            true => self
                .atom_db
                .valuation()
                .unvalued_atoms()
                .filter(|atom| *atom != TOP_ATOM)
                .choose(rng),

            false => {
                while let Some(atom) = self.atom_db.heap_pop_most_active() {
                    if self.atom_db.value_of(atom).is_none() {
                        return Some(atom);
                    }
                }
                self.atom_db
                    .valuation()
                    .unvalued_atoms()
                    .find(|atom| *atom != TOP_ATOM)
            }
        }
    }
}

#[cfg(test)]
mod decision_tests {
    use super::*;
    use crate::{config::Config, context::Context};

    #[test]
    fn decisions_exhaust_to_satisfiable() {
        let mut the_context = Context::from_config(Config::default());
        the_context.ensure_atoms(3).unwrap();

        for _ in 0..3 {
            match the_context.make_decision() {
                DecisionOk::Literal(literal) => the_context.decide(literal).unwrap(),
                DecisionOk::Exhausted => panic!("exhausted early"),
            }
        }

        assert_eq!(the_context.current_level(), 3);
        assert_eq!(the_context.make_decision(), DecisionOk::Exhausted);
        assert_eq!(the_context.state, ContextState::Satisfiable);
    }

    #[test]
    fn random_decisions_pick_unvalued_atoms() {
        let mut config = Config::default();
        config.random_decision_bias.set(1.0).unwrap();
        let mut the_context = Context::from_config(config);
        the_context.ensure_atoms(4).unwrap();

        let mut chosen = Vec::default();
        while let DecisionOk::Literal(literal) = the_context.make_decision() {
            assert!(!chosen.contains(&literal.atom()));
            chosen.push(literal.atom());
            the_context.decide(literal).unwrap();
        }

        chosen.sort_unstable();
        assert_eq!(chosen, vec![1, 2, 3, 4]);
    }

    #[test]
    fn saved_phase_is_reused() {
        let mut the_context = Context::from_config(Config::default());
        the_context.ensure_atoms(1).unwrap();

        the_context.decide(CLiteral::new(1, true)).unwrap();
        the_context.backjump(0);

        assert_eq!(the_context.make_decision(), DecisionOk::Literal(CLiteral::new(1, true)));
    }
}
