use crate::{
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
    types::err::{self},
};

/// The index to a clause stored in a vector of the clause database.
pub type FormulaIndex = u32;

/// The token of a formula index, used to distinguish reuse of the same [FormulaIndex].
pub type FormulaToken = u16;

/// A key to access a clause stored in the clause database.
///
/// Within the clause database clauses are stored by kind in some indexed structure, and keys contain the index of the clause.
/// Addition clauses may be removed, and so the key to an addition clause also contains a token to distinguish reuse of the same index.
///
/// The only exception to this is unit clauses, whose keys contain the (unit) clause.
///
/// ```rust
/// # use marten_sat::db::ClauseKey;
/// let key = ClauseKey::Addition(7, 0);
/// assert_eq!(key.retoken(), Ok(ClauseKey::Addition(7, 1)));
/// assert!(ClauseKey::Original(7).retoken().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClauseKey {
    /// An original unit clause.
    OriginalUnit(CLiteral),

    /// A unit clause derived during a solve.
    AdditionUnit(CLiteral),

    /// An original clause of two literals.
    OriginalBinary(FormulaIndex),

    /// A clause of two literals derived during a solve.
    AdditionBinary(FormulaIndex),

    /// An original clause of three or more literals.
    Original(FormulaIndex),

    /// A clause of three or more literals derived during a solve.
    Addition(FormulaIndex, FormulaToken),
}

impl ClauseKey {
    /// The index of the key, or the atom of the literal for a unit key.
    pub fn index(&self) -> usize {
        match self {
            Self::OriginalUnit(literal) | Self::AdditionUnit(literal) => literal.atom() as usize,
            Self::OriginalBinary(index) | Self::AdditionBinary(index) | Self::Original(index) => {
                *index as usize
            }
            Self::Addition(index, _) => *index as usize,
        }
    }

    /// Whether the key is to an original clause.
    pub fn is_original(&self) -> bool {
        matches!(
            self,
            Self::OriginalUnit(_) | Self::OriginalBinary(_) | Self::Original(_)
        )
    }

    /// Retokens an addition key, to distinguish a new use of the index of the key.
    ///
    /// Returns an error if used on any other key, or if the token limit has been reached.
    pub fn retoken(&self) -> Result<Self, err::ClauseDBError> {
        match self {
            Self::Addition(index, token) => match token.checked_add(1) {
                Some(token) => Ok(ClauseKey::Addition(*index, token)),
                None => Err(err::ClauseDBError::StorageExhausted),
            },

            _ => {
                log::error!(target: targets::CLAUSE_DB, "Retoken of a key without a token: {self}");
                Err(err::ClauseDBError::InvalidKeyToken)
            }
        }
    }
}

impl std::fmt::Display for ClauseKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OriginalUnit(literal) => write!(f, "OriginalUnit({literal})"),
            Self::AdditionUnit(literal) => write!(f, "AdditionUnit({literal})"),
            Self::OriginalBinary(index) => write!(f, "OriginalBinary({index})"),
            Self::AdditionBinary(index) => write!(f, "AdditionBinary({index})"),
            Self::Original(index) => write!(f, "Original({index})"),
            Self::Addition(index, token) => write!(f, "Addition({index}, {token})"),
        }
    }
}
