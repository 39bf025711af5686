//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use marten_sat::structures::literal::{CLiteral, Literal};
//! # use marten_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false),
//!                   CLiteral::new(15, true),
//!                   CLiteral::new(4,  false)];
//!
//! assert_eq!(clause.size(), 5);
//!
//! let mut some_valuation = vec![Some(true); 42];
//!
//! some_valuation[23] = Some(false);
//! some_valuation[15] = Some(false);
//! assert!(clause.asserts(&some_valuation).is_none());
//!
//! some_valuation[41] = None;
//! assert_eq!(clause.asserts(&some_valuation), Some(CLiteral::new(41, false)));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause --- where the 'unit' is the literal).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
    valuation::Valuation,
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The literal asserted by the clause on a given valuation, if one such literal exists. \
    /// In detail, returns:
    /// - Some(*l*), if *l* has no value on the given valuation and for every other literal *l'* in the clause the polarity of *l'* conflicts with the value of the atom of *l'*.
    /// - None, otherwise.
    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral>;

    /// An iterator over all literals in the clause, order is not guaranteed.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, order is not guaranteed.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether the clause is unsatisfiable on the given valuation.
    ///
    /// That is, whether every literal in the clause conflicts with the valuation.
    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool;

    /// Whether some literal in the clause is true on the given valuation.
    fn satisfied_on(&self, valuation: &impl Valuation) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

/// The source of a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseSource {
    /// A clause read from a formula.
    Original,

    /// A clause derived via resolution during conflict analysis.
    Resolution,
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::default();
        for literal in self {
            the_string.push_str(format!("{literal} ").as_str());
        }
        if zero {
            the_string += "0";
        } else {
            the_string.pop();
        }
        the_string
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        let mut the_literal = None;
        for literal in self {
            match valuation.value_of(literal.atom()) {
                Some(None) => {
                    if the_literal.is_some() {
                        return None;
                    }
                    the_literal = Some(*literal);
                }
                Some(Some(value)) if value != literal.polarity() => {}
                Some(Some(_)) | None => return None,
            }
        }
        the_literal
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().all(|literal| {
            valuation.value_of(literal.atom()) == Some(Some(!literal.polarity()))
        })
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        self.iter().any(|literal| {
            valuation.value_of(literal.atom()) == Some(Some(literal.polarity()))
        })
    }
}

impl Clause for CLiteral {
    fn as_dimacs(&self, zero: bool) -> String {
        match zero {
            true => format!("{self} 0"),
            false => format!("{self}"),
        }
    }

    fn asserts(&self, valuation: &impl Valuation) -> Option<CLiteral> {
        match valuation.value_of(self.atom()) {
            Some(None) => Some(*self),
            _ => None,
        }
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }

    fn unsatisfiable_on(&self, valuation: &impl Valuation) -> bool {
        valuation.value_of(self.atom()) == Some(Some(!self.polarity()))
    }

    fn satisfied_on(&self, valuation: &impl Valuation) -> bool {
        valuation.value_of(self.atom()) == Some(Some(self.polarity()))
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    #[test]
    fn dimacs_string() {
        let clause = vec![CLiteral::new(1, true), CLiteral::new(2, false)];
        assert_eq!(clause.as_dimacs(true), "1 -2 0");
        assert_eq!(clause.as_dimacs(false), "1 -2");
        assert_eq!(CLiteral::new(3, false).as_dimacs(true), "-3 0");
    }

    #[test]
    fn unsatisfiable_on() {
        let clause = vec![CLiteral::new(1, true), CLiteral::new(2, false)];
        let valuation = vec![Some(true), Some(false), Some(true)];
        assert!(clause.unsatisfiable_on(&valuation));
        assert!(!clause.satisfied_on(&valuation));

        let valuation = vec![Some(true), Some(false), None];
        assert!(!clause.unsatisfiable_on(&valuation));
        assert_eq!(clause.asserts(&valuation), Some(CLiteral::new(2, false)));
    }
}
