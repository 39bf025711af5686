/*!
The trail, of assignments made during a solve.

The trail is a stack of literals, in the order the atom of each literal was valued.
The stack is split into levels by a record of the index at which each level (above level zero) begins.

The trail also serves as the queue of literals for [BCP](crate::procedures::bcp): every literal at or after `q_head` is yet to be propagated.

```rust
# use marten_sat::db::trail::Trail;
# use marten_sat::structures::literal::{CLiteral, Literal};
let mut trail = Trail::default();
trail.store_assignment(CLiteral::new(1, true));

trail.open_level();
trail.store_assignment(CLiteral::new(2, false));
trail.store_assignment(CLiteral::new(3, true));
assert_eq!(trail.level(), 1);
assert_eq!(trail.top_level_assignments().len(), 2);

let cleared = trail.clear_assignments_above(0);
assert_eq!(cleared.len(), 2);
assert_eq!(trail.level(), 0);
assert_eq!(trail.literals, vec![CLiteral::new(1, true)]);
```
*/

use crate::structures::literal::CLiteral;

use super::LevelIndex;

/// The trail.
#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order.
    pub literals: Vec<CLiteral>,

    /// The index of the first assignment of each level above zero.
    pub level_indicies: Vec<usize>,

    /// The index of the first assignment which has not been propagated.
    pub q_head: usize,
}

impl Trail {
    /// Stores an assignment as part of the top level.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a fresh level, to which the next assignment will belong.
    pub fn open_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Returns true if some decision is active, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// The assignments made at the (current) top level, in order of assignment.
    pub fn top_level_assignments(&self) -> &[CLiteral] {
        match self.level_indicies.last() {
            Some(&level_start) => &self.literals[level_start..],
            None => &self.literals,
        }
    }

    /// The next literal to propagate, if any.
    pub fn next_to_propagate(&self) -> Option<CLiteral> {
        self.literals.get(self.q_head).copied()
    }

    /// Removes levels above the given level index, if they exist, and returns the removed assignments in order of assignment.
    ///
    /// The propagation queue is cut back to the remaining assignments, each of which has been propagated.
    ///
    /// # Soundness
    /// Does not clear the *valuation* of any atom.
    pub fn clear_assignments_above(&mut self, level: LevelIndex) -> Vec<CLiteral> {
        // The assignments of level i + 1 begin at level_indicies[i].
        match self.level_indicies.get(level as usize) {
            Some(&level_start) => {
                self.level_indicies.truncate(level as usize);
                let cleared = self.literals.split_off(level_start);
                self.q_head = std::cmp::min(self.q_head, self.literals.len());
                cleared
            }
            None => Vec::default(),
        }
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn clear_above_top_is_noop() {
        let mut trail = Trail::default();
        trail.open_level();
        trail.store_assignment(CLiteral::new(4, true));
        assert!(trail.clear_assignments_above(1).is_empty());
        assert_eq!(trail.level(), 1);
    }

    #[test]
    fn clear_multiple_levels() {
        let mut trail = Trail::default();
        trail.store_assignment(CLiteral::new(1, true));
        for atom in 2..6 {
            trail.open_level();
            trail.store_assignment(CLiteral::new(atom, true));
            trail.store_assignment(CLiteral::new(atom + 10, false));
        }
        trail.q_head = trail.literals.len();
        assert_eq!(trail.level(), 4);

        let cleared = trail.clear_assignments_above(2);
        assert_eq!(
            cleared,
            vec![
                CLiteral::new(4, true),
                CLiteral::new(14, false),
                CLiteral::new(5, true),
                CLiteral::new(15, false)
            ]
        );
        assert_eq!(trail.level(), 2);
        assert_eq!(trail.q_head, 5);
        assert!(trail.next_to_propagate().is_none());
    }
}
