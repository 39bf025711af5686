/*!
Scheduled reduction of the clause database.

The first reduction takes place after [reduction_first](crate::config::Config::reduction_first) conflicts.
After the *k*-th reduction, the next reduction takes place after a further `reduction_first + k * reduction_increment` conflicts.

Each reduction removes a [fraction](crate::config::Config::reduction_fraction) of the addition clauses of three or more literals, lowest activity first.
A clause which is the antecedent of some value on the current valuation is never removed, and neither is any original clause or addition clause of one or two literals.
*/

use crate::{context::GenericContext, types::err};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets the count of conflicts for the first reduction.
    pub fn initialise_reduction_limit(&mut self) {
        self.counters.reduction_limit = self.config.reduction_first.value as usize;
    }

    /// Returns whether it is time for a reduction of the clause database.
    pub fn reduction_interrupt(&self) -> bool {
        self.counters.total_conflicts >= self.counters.reduction_limit
    }

    /// Reduces the clause database and schedules the next reduction.
    pub fn reduce(&mut self) -> Result<(), err::ErrorKind> {
        self.clause_db
            .reduce_by_fraction(self.config.reduction_fraction.value, &self.atom_db)?;

        self.counters.reductions += 1;
        self.counters.reduction_limit += self.config.reduction_first.value as usize
            + self.counters.reductions * self.config.reduction_increment.value as usize;

        Ok(())
    }
}
