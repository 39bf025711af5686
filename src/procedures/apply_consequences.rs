/*!
Applies queued consequences.

For an overview of [apply_consequences](GenericContext::apply_consequences) within a solve, see the documentation of the [solve procedure](crate::procedures::solve).

apply_consequences propagates queued literals until either the queue is exhausted or a conflict is found.
On a conflict:

- If no decision has been made, the formula is unsatisfiable, and this is returned as a [FundamentalConflict](ApplyConsequencesOk::FundamentalConflict).
- Otherwise, conflict analysis derives and stores an asserting clause and backjumps to the level at which the clause asserts some literal.
  The clause is returned, as either a [unit clause](ApplyConsequencesOk::UnitClause) or [the key to the clause](ApplyConsequencesOk::AssertingClause), together with the asserted literal.

No change is represented by a return of [Exhausted](ApplyConsequencesOk::Exhausted), and it is up to a caller to note whether the valuation is complete.

The following invariant is upheld:
<div class="warning">
apply_consequences returns Exhausted only if there are no further consequences to apply.
</div>
*/

use crate::{
    context::{ContextState, GenericContext},
    db::ClauseKey,
    misc::log::targets::{self},
    procedures::analysis::AnalysisResult,
    structures::literal::CLiteral,
    types::err::{self},
};

/// Ok results of [apply_consequences](GenericContext::apply_consequences).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyConsequencesOk {
    /// A conflict was found without any decision, and so the formula is unsatisfiable.
    FundamentalConflict,

    /// A unit clause was derived from some conflict.
    UnitClause {
        /// The literal of the clause.
        literal: CLiteral,
    },

    /// A non-unit asserting clause was derived from some conflict.
    AssertingClause {
        /// The key to the clause.
        key: ClauseKey,

        /// The literal asserted by the clause.
        literal: CLiteral,
    },

    /// There were no (further) consequences to apply.
    Exhausted,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Applies queued consequences.
    /// See [procedures::apply_consequences](crate::procedures::apply_consequences) for details.
    pub fn apply_consequences(&mut self) -> Result<ApplyConsequencesOk, err::ErrorKind> {
        match self.propagate() {
            Ok(()) => Ok(ApplyConsequencesOk::Exhausted),

            Err(err::BCPError::Conflict(key)) => {
                if !self.trail.decision_is_made() {
                    log::info!(target: targets::PROPAGATION, "Conflict without a decision: {key}");
                    self.state = ContextState::Unsatisfiable;
                    return Ok(ApplyConsequencesOk::FundamentalConflict);
                }

                match self.conflict_analysis(&key)? {
                    AnalysisResult::UnitClause { literal } => {
                        Ok(ApplyConsequencesOk::UnitClause { literal })
                    }

                    AnalysisResult::AssertingClause { key, literal } => {
                        Ok(ApplyConsequencesOk::AssertingClause { key, literal })
                    }
                }
            }

            Err(non_conflict_bcp_error) => Err(err::ErrorKind::from(non_conflict_bcp_error)),
        }
    }
}
