/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

So, the atoms of a context are [0..*m*) for some *m*, and atoms may be used directly as the indicies of a structure, e.g. `valuation[a]`.

The atom `0` is fixed internally with a value of true at level zero.
It never appears in a clause, and is excluded from any model.
Atoms `1..=N` then correspond exactly to the variables of a DIMACS formula with `N` variables.

In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom fixed internally with a value of true.
pub const TOP_ATOM: Atom = 0;

/// The maximum instance of an atom.
///
/// Bounded by the representation of an integer literal.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
