/*!
Analysis of an unsatisfiable clause.

Takes a key to a clause which is unsatisfiable on the current valuation, derives an asserting clause by resolution, stores the derived clause, and backjumps to the level at which the clause asserts some literal.

For details on resolution, see the [resolution buffer](crate::resolution_buffer).

For the method, see: [conflict_analysis](GenericContext::conflict_analysis).

# Invariants

The derived clause is:
- Unsatisfiable on the valuation at the time of the conflict.
- Asserting after the backjump: every literal other than the asserted literal is false, and the asserted literal has no value.

It is the responsibility of the caller to assign the asserted literal, with the derived clause as the antecedent.

# Activity

Following the configured [VSIDS](crate::config::vsids) variant, the activity of either every atom used during resolution, or every atom of the derived clause, is bumped.
The activity of each addition clause used during resolution is bumped.

# Example

```rust,ignore
match self.conflict_analysis(&key)? {
    AnalysisResult::UnitClause { literal } => {
        self.assign(literal, Some(ClauseKey::AdditionUnit(literal)))?;
    }

    AnalysisResult::AssertingClause { key, literal } => {
        self.assign(literal, Some(key))?;
    }
}
```
*/

use crate::{
    config::vsids::VSIDS,
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    structures::{
        clause::{Clause, ClauseSource},
        literal::CLiteral,
    },
    types::err::{self},
};

/// Possible 'Ok' results from conflict analysis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisResult {
    /// The result of analysis is a unit clause, and the context is at level zero.
    UnitClause {
        /// The literal of the clause.
        literal: CLiteral,
    },

    /// The result of analysis is a (non-unit) asserting clause, and the context is at the assertion level of the clause.
    AssertingClause {
        /// The key of the asserting clause.
        key: ClauseKey,

        /// The literal asserted by the clause.
        literal: CLiteral,
    },
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For details on conflict analysis see the [analysis](crate::procedures::analysis) procedure.
    pub fn conflict_analysis(&mut self, key: &ClauseKey) -> Result<AnalysisResult, err::ErrorKind> {
        log::info!(target: targets::ANALYSIS, "Analysis of {key} at level {}", self.trail.level());

        if !self.trail.decision_is_made() {
            return Err(err::ErrorKind::from(err::AnalysisError::NoDecision));
        }

        let clause = self.resolution_buffer.resolve_through_current_level(
            key,
            &self.clause_db,
            &self.atom_db,
            &self.trail,
        )?;

        match self.config.vsids_variant.value {
            VSIDS::MiniSAT => self.atom_db.bump_relative(self.resolution_buffer.atoms_used()),
            VSIDS::Chaff => self.atom_db.bump_relative(clause.atoms()),
        }

        for premise in self.resolution_buffer.premises() {
            self.clause_db.bump_activity(premise);
        }

        log::info!(target: targets::ANALYSIS, "Addition clause: {}", clause.as_dimacs(true));

        let Some(&literal) = clause.first() else {
            return Err(err::ErrorKind::from(err::AnalysisError::EmptyResolution));
        };

        match clause.len() {
            1 => {
                self.backjump(0);
                self.clause_db
                    .store(literal, ClauseSource::Resolution, &mut self.watches)?;
                Ok(AnalysisResult::UnitClause { literal })
            }

            _ => {
                let level = self.non_chronological_backjump_level(&clause)?;
                self.backjump(level);

                if clause.asserts(self.atom_db.valuation()) != Some(literal) {
                    log::error!(target: targets::ANALYSIS, "{} is not asserting", clause.as_dimacs(true));
                    return Err(err::ErrorKind::from(err::AnalysisError::NoAssertion));
                }

                let key = self
                    .clause_db
                    .store(clause, ClauseSource::Resolution, &mut self.watches)?;
                self.clause_db.bump_activity(&key);
                Ok(AnalysisResult::AssertingClause { key, literal })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::Config, context::Context, structures::literal::Literal, types::err::BCPError,
    };

    use super::*;

    #[test]
    fn learns_negated_decision() {
        let mut the_context = Context::from_config(Config::default());
        the_context.ensure_atoms(2).unwrap();
        for clause in [[-1, 2], [-1, -2]] {
            let clause = the_context.clause_from_ints(&clause).unwrap();
            the_context.add_clause(clause).unwrap();
        }

        the_context.decide(CLiteral::new(1, true)).unwrap();
        let Err(BCPError::Conflict(key)) = the_context.propagate() else {
            panic!("expected a conflict");
        };

        let result = the_context.conflict_analysis(&key).unwrap();
        assert_eq!(
            result,
            AnalysisResult::UnitClause {
                literal: CLiteral::new(1, false)
            }
        );
        assert_eq!(the_context.current_level(), 0);
    }

    #[test]
    fn learnt_clause_outlasts_older_additions() {
        let mut the_context = Context::from_config(Config::default());
        the_context.ensure_atoms(6).unwrap();
        for clause in [[-1, -2, -3, 4], [-1, -2, -3, -4]] {
            let clause = the_context.clause_from_ints(&clause).unwrap();
            the_context.add_clause(clause).unwrap();
        }

        for clause in [[4, 5, 6], [-4, 5, 6], [4, -5, 6]] {
            let clause = clause
                .iter()
                .map(|int: &i32| CLiteral::new(int.unsigned_abs(), int.is_positive()))
                .collect::<Vec<_>>();
            the_context
                .clause_db
                .store(clause, ClauseSource::Resolution, &mut the_context.watches)
                .unwrap();
        }

        for atom in [1, 2] {
            the_context.decide(CLiteral::new(atom, true)).unwrap();
            assert!(the_context.propagate().is_ok());
        }
        the_context.decide(CLiteral::new(3, true)).unwrap();
        let Err(BCPError::Conflict(key)) = the_context.propagate() else {
            panic!("expected a conflict");
        };

        let AnalysisResult::AssertingClause { key, literal } =
            the_context.conflict_analysis(&key).unwrap()
        else {
            panic!("expected an asserting clause");
        };
        assert_eq!(literal, CLiteral::new(3, false));
        assert!(the_context.clause_db.get(&key).unwrap().activity() > 0.0);

        let removed = the_context
            .clause_db
            .reduce_by_fraction(0.5, &the_context.atom_db)
            .unwrap();
        assert_eq!(removed, 2);
        assert!(the_context.clause_db.get(&key).is_ok());
    }
}
