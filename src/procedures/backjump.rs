/*!
Backjumping, to some lower level.

A backjump to level *l* removes every assignment of a level above *l* from the trail and clears the value of each atom assigned, in reverse order of assignment.
The value cleared is saved as the previous value of the atom (for phase saving), and the atom is returned to the activity heap.

Every assignment at or below level *l* remains, together with its antecedent.

The *non-chronological* backjump level of a clause is the second highest level of the literals of the clause (or zero, for a clause of one literal).
*/

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{clause::Clause, literal::Literal},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// Has no effect if the current level is at or below the target.
    pub fn backjump(&mut self, target: LevelIndex) {
        if target < self.trail.level() {
            log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());
        }

        for literal in self.trail.clear_assignments_above(target).into_iter().rev() {
            self.atom_db.drop_value(literal.atom());
        }
    }

    /// The non-chronological backjump level of a clause, all of whose literals have a value.
    pub fn non_chronological_backjump_level(
        &self,
        clause: &impl Clause,
    ) -> Result<LevelIndex, err::ErrorKind> {
        let mut top_two: (LevelIndex, LevelIndex) = (0, 0);

        for literal in clause.literals() {
            let Some(level) = self.atom_db.level_of(literal.atom()) else {
                log::error!(target: targets::BACKJUMP, "{literal} has no value");
                return Err(err::ErrorKind::Backjump);
            };

            if level > top_two.1 {
                top_two = (top_two.1, level);
            } else if level > top_two.0 {
                top_two.0 = level;
            }
        }

        Ok(top_two.0)
    }
}
