/*!
Boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview
Propagates an atom being assigned some value, given as a literal.

This is done by examining clauses watching the negation of the literal, which is now false, and for each clause either updating the watches of the clause, assigning the literal asserted by the clause, or identifying that the clause conflicts with the current valuation.

The queue of literals to propagate is the suffix of the [trail](crate::db::trail) from `q_head`, and [propagate](GenericContext::propagate) applies BCP to each queued literal in turn.

# Heuristics

Propagation happens in two steps, distinguished by clause length:
- First, with respect to binary clauses.
- Second, with respect to long clauses.

Binary clauses never update their watches and the other literal is stored with the watch, so binary propagation does not require access to the clause database.

# Long clauses

For a long clause watching the now false literal:
- The false literal is moved to position 1, if not already there.
- If the literal at position 0 is true, the clause is satisfied and the watch is kept.
- Otherwise, a literal at position 2 or above which is not false is swapped to position 1 and watched, and the watch on the false literal is dropped.
- If no such literal exists, the literal at position 0 is asserted by the clause if it has no value, and otherwise the clause conflicts with the valuation.

Watches to clauses which have been removed from the clause database are dropped as they are found.

# Example

```rust,ignore
match self.propagate() {
    Err(err::BCPError::Conflict(key)) => {
        if self.trail.decision_is_made() {
            let analysis_result = self.conflict_analysis(&key)?;
            ...
        }
    }
    ...
    Ok(()) => {
        match self.make_decision() {
            ...
        }
    }
}
```
*/

use crate::{
    context::GenericContext,
    db::watches::LongWatch,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    ///
    /// # Soundness
    /// Requires the watched literals of each clause of two or more literals to be at positions 0 and 1.
    pub fn bcp(&mut self, literal: CLiteral) -> Result<(), err::BCPError> {
        let false_literal = literal.negate();

        // Binary clause block.
        for index in 0..self.watches.binary(false_literal).len() {
            let watch = self.watches.binary(false_literal)[index];
            let check = watch.literal;

            match self.atom_db.value_of(check.atom()) {
                None => self
                    .assign(check, Some(watch.key))
                    .map_err(err::BCPError::Assignment)?,

                Some(value) if value != check.polarity() => {
                    log::trace!(target: targets::PROPAGATION, "Consequence of {} and {literal} is contradiction.", watch.key);
                    return Err(err::BCPError::Conflict(watch.key));
                }

                Some(_) => {}
            }
        }

        // Long clause block.
        // The list is taken to allow the context to be mutated while the list is traversed.
        let mut long_list = self.watches.take_long(false_literal);
        let mut result = Ok(());
        let mut index = 0;

        'long_loop: while index < long_list.len() {
            let key = long_list[index].key;

            let Ok(db_clause) = self.clause_db.get_mut(&key) else {
                long_list.swap_remove(index);
                continue 'long_loop;
            };

            if db_clause[0] == false_literal {
                db_clause.swap(0, 1);
            }
            if db_clause[1] != false_literal {
                log::error!(target: targets::PROPAGATION, "{key} does not watch {false_literal}");
                result = Err(err::BCPError::CorruptWatch);
                break 'long_loop;
            }

            let first = db_clause[0];
            let first_value = self.atom_db.value_of(first.atom());
            if first_value == Some(first.polarity()) {
                index += 1;
                continue 'long_loop;
            }

            let replacement = db_clause
                .iter()
                .enumerate()
                .skip(2)
                .find(|(_, candidate)| {
                    self.atom_db.value_of(candidate.atom()) != Some(!candidate.polarity())
                })
                .map(|(position, _)| position);

            if let Some(position) = replacement {
                db_clause.swap(1, position);
                let watched = db_clause[1];
                self.watches.watch_long(watched, LongWatch { key });
                long_list.swap_remove(index);
                continue 'long_loop;
            }

            match first_value {
                None => {
                    if let Err(e) = self.assign(first, Some(key)) {
                        result = Err(err::BCPError::Assignment(e));
                        break 'long_loop;
                    }
                }

                Some(_) => {
                    log::trace!(target: targets::PROPAGATION, "{key} conflicts with the valuation.");
                    result = Err(err::BCPError::Conflict(key));
                    break 'long_loop;
                }
            }

            index += 1;
        }

        self.watches.restore_long(false_literal, long_list);
        result
    }

    /// Applies BCP to each queued literal until the queue is exhausted or a conflict is found.
    ///
    /// On a conflict, the literal whose propagation led to the conflict remains at the head of the queue.
    pub fn propagate(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.next_to_propagate() {
            self.bcp(literal)?;
            self.trail.q_head += 1;
            self.counters.total_propagations += 1;
        }
        Ok(())
    }
}
