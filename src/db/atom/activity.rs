use crate::{
    config::Activity,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// Methods for inspecting and mutating the activity of atoms.
///
/// The role of these methods is tied to the use of [VSIDS](crate::config::vsids).
impl AtomDB {
    /// Bumps the activities of each atom in the given iterator.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every atom is rescaled first.
    pub fn bump_relative<A: Iterator<Item = Atom>>(&mut self, atoms: A) {
        for atom in atoms {
            if self.activity_of(atom) + self.config.bump.value > self.config.bump.max {
                self.rescore_activity()
            }
            self.bump_activity(atom);
        }
    }

    /// Pops the most active atom from the activity heap.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// The activity of an atom, regardless of whether it is on the activity heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }

    /// Bumps the activity of an atom and updates its position on the activity heap, if the atom is on the activity heap.
    pub fn bump_activity(&mut self, atom: Atom) {
        self.activity_heap.revalue(
            atom as usize,
            self.activity_of(atom) + self.config.bump.value,
        );
        self.activity_heap.heapify_if_active(atom as usize);
    }

    /// Increase the activity bump applied to atoms by a factor.
    ///
    /// Equivalent to decaying the activity of every atom.
    pub fn decay_activity(&mut self) {
        let factor = 1.0 / (1.0 - self.config.decay.value);
        self.config.bump.value *= factor;
        if self.config.bump.value > self.config.bump.max {
            self.rescore_activity();
        }
    }

    /// Rescales the activity of all atoms and the activity bump.
    pub fn rescore_activity(&mut self) {
        let mut max_activity = self.config.bump.value;
        for atom in 0..self.count() as Atom {
            max_activity = Activity::max(max_activity, self.activity_of(atom));
        }

        let factor = 1.0 / max_activity;
        log::debug!(target: targets::VALUATION, "Activity rescaled by {factor}");
        self.activity_heap.apply_to_all(|activity| activity * factor);
        self.config.bump.value *= factor;
        self.activity_heap.reheap();
    }
}
