use crate::structures::atom::Atom;

use super::{CLiteral, Literal};

/// The representation of a literal as an integer, with sign indicating polarity, as in DIMACS.
///
/// Zero is not a literal, and passing zero to methods which expect a literal is unsound.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn canonical(&self) -> CLiteral {
        CLiteral::new(self.atom(), self.polarity())
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

impl From<CLiteral> for IntLiteral {
    fn from(value: CLiteral) -> Self {
        IntLiteral::new(value.atom(), value.polarity())
    }
}

impl From<&CLiteral> for IntLiteral {
    fn from(value: &CLiteral) -> Self {
        IntLiteral::new(value.atom(), value.polarity())
    }
}

#[cfg(test)]
mod int_literal_tests {
    use super::*;

    #[test]
    fn canonical_agrees() {
        let int: IntLiteral = -17;
        let canonical = int.canonical();
        assert_eq!(canonical.atom(), 17);
        assert!(!canonical.polarity());
        assert_eq!(IntLiteral::from(canonical), int);
    }
}
