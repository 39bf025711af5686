/*!
A (partial) function from atoms to truth values.

If all atoms are assigned a value the valuation is 'full', otherwise the valuation is 'partial'.

The canonical representation of a valuation is a vector of optional booleans, where:
- The zero index (first) element is true, interpreted as some arbitrary tautology (see [TOP_ATOM](crate::structures::atom::TOP_ATOM)).
- Each non-zero index of the vector is interpreted as an atom, though most interaction is through the valuation trait.

The trait is implemented for anything which can be dereferenced to a slice of optional booleans.

```rust
# use marten_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), None, Some(true), None];

assert_eq!(valuation.value_of(1), Some(None));
assert_eq!(valuation.value_of(2), Some(Some(true)));
assert_eq!(valuation.value_of(4), None);
assert_eq!(valuation.unvalued_atoms().count(), 2);
```

# Verification

A valuation may be used to check a formula given as integer clauses, independently of the clause database.
This is the check made on any model returned from a satisfiable solve.

```rust
# use marten_sat::structures::valuation::Valuation;
let valuation = vec![Some(true), Some(false), Some(true)];

assert!(valuation.satisfies(&[-1, 2]));
assert!(!valuation.satisfies(&[1, -2]));
assert!(valuation.satisfies_all(&[vec![-1], vec![2]]));
```
*/

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

/// The canonical representation of a valuation.
pub type CValuation = Vec<Option<bool>>;

/// A valuation is something which stores some value of a atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of a atom under the valuation, or otherwise nothing (if the atom is not part of the valuation).
    fn value_of(&self, atom: Atom) -> Option<Option<bool>>;

    /// An iterator over the values of a atoms in the valuation, in strict, contiguous, atom order, excluding top.
    fn values(&self) -> impl Iterator<Item = Option<bool>>;

    /// An iterator through all (Atom, Value) pairs for such that the atom has some value (excluding top).
    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)>;

    /// An iterator through atoms which have some value (excluding top).
    fn valued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// An iterator through atoms which do not have some value.
    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom>;

    /// A count of all the atoms in the valuation (including top).
    fn atom_count(&self) -> usize;

    /// Whether some literal of the integer clause is true on the valuation.
    ///
    /// Any literal whose atom is not part of the valuation, or has no value, is not true.
    fn satisfies(&self, clause: &[IntLiteral]) -> bool {
        clause
            .iter()
            .any(|literal| self.value_of(literal.atom()) == Some(Some(literal.polarity())))
    }

    /// Whether every integer clause is true on the valuation.
    fn satisfies_all<C: AsRef<[IntLiteral]>>(&self, clauses: &[C]) -> bool {
        clauses.iter().all(|clause| self.satisfies(clause.as_ref()))
    }
}

impl<T: std::ops::Deref<Target = [Option<bool>]>> Valuation for T {
    fn value_of(&self, atom: Atom) -> Option<Option<bool>> {
        self.get(atom as usize).copied()
    }

    fn values(&self) -> impl Iterator<Item = Option<bool>> {
        self.iter().skip(1).copied()
    }

    fn atom_valued_pairs(&self) -> impl Iterator<Item = (Atom, bool)> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|v| (atom as Atom, v)))
    }

    fn valued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .skip(1)
            .filter_map(|(atom, value)| value.map(|_| atom as Atom))
    }

    fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter()
            .enumerate()
            .filter_map(|(atom, value)| match value {
                None => Some(atom as Atom),
                Some(_) => None,
            })
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}

#[cfg(test)]
mod valuation_tests {
    use super::*;

    #[test]
    fn partial_clause_is_not_satisfied() {
        let valuation: CValuation = vec![Some(true), None, Some(false)];
        assert!(!valuation.satisfies(&[1, 2]));
        assert!(valuation.satisfies(&[1, -2]));
    }

    #[test]
    fn unknown_atoms_are_not_true() {
        let valuation: CValuation = vec![Some(true), Some(true)];
        assert!(!valuation.satisfies(&[7]));
        assert!(!valuation.satisfies(&[]));
    }

    #[test]
    fn pairs_skip_top() {
        let valuation: CValuation = vec![Some(true), Some(false), None, Some(true)];
        assert_eq!(
            valuation.atom_valued_pairs().collect::<Vec<_>>(),
            vec![(1, false), (3, true)]
        );
        assert_eq!(valuation.valued_atoms().collect::<Vec<_>>(), vec![1, 3]);
    }
}
