use crate::{
    config::Config,
    db::{atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches, LevelIndex},
    reports::Report,
    resolution_buffer::ResolutionBuffer,
    structures::{literal::IntLiteral, valuation::Valuation},
};

use super::{callbacks::CallbackTerminate, ContextState, Counters};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used in calls to [make_decision](GenericContext::make_decision) to take the source of rng while the context is mutably borrowed.
///
/// # Example
///
/// ```rust
/// # use marten_sat::context::GenericContext;
/// # use marten_sat::generic::random::MinimalPCG32;
/// # use marten_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// Watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// A buffer for resolution.
    pub resolution_buffer: ResolutionBuffer,

    /// Terminates procedures, if true.
    pub(super) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(self.state)
    }

    /// The current level, i.e. the count of open decisions.
    pub fn current_level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// A count of atoms in the context, excluding top.
    pub fn atom_count(&self) -> usize {
        self.atom_db.count() - 1
    }

    /// The model found by a satisfiable solve, indexed by atom - 1, and otherwise None.
    pub fn model(&self) -> Option<Vec<bool>> {
        match self.state {
            ContextState::Satisfiable => Some(
                self.atom_db
                    .valuation()
                    .values()
                    .map(|value| value.unwrap_or(false))
                    .collect(),
            ),
            _ => None,
        }
    }

    /// The current valuation, as a string of DIMACS literals, with a terminating `0`.
    ///
    /// Atoms without a value are omitted.
    pub fn valuation_string(&self) -> String {
        let mut the_string = String::default();
        for (atom, value) in self.atom_db.valuation().atom_valued_pairs() {
            match value {
                true => the_string.push_str(&format!("{atom} ")),
                false => the_string.push_str(&format!("-{atom} ")),
            }
        }
        the_string.push('0');
        the_string
    }

    /// Whether the model of a satisfiable solve satisfies every given clause, each given as DIMACS integers.
    ///
    /// False, if the context is not satisfiable.
    pub fn model_satisfies<C: AsRef<[IntLiteral]>>(&self, clauses: &[C]) -> bool {
        match self.state {
            ContextState::Satisfiable => self.atom_db.valuation().satisfies_all(clauses),
            _ => false,
        }
    }
}
