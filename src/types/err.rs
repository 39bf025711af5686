//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some of these are internally expected --- e.g. BCP errors are used to control the flow of a solve.
//! - Some are external --- e.g. a [malformed clause](MalformedClauseError) is returned when a clause is added which mentions an atom outside of the context.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::db::ClauseKey;

/// The umbrella error, wrapping each specific error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    Assignment(AssignmentError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    ClauseDB(ClauseDBError),
    Config(ConfigError),
    MalformedClause(MalformedClauseError),
    Parse(ParseError),
    ResolutionBuffer(ResolutionBufferError),

    /// A backjump level was requested for a clause containing some literal without a value.
    Backjump,

    /// Some method was called in a state which does not support the method.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// Somehow resolution resolved to an empty clause.
    EmptyResolution,

    /// Resolution failed to terminate with an asserting clause.
    NoAssertion,

    /// Conflict analysis was requested without any decision having been made.
    NoDecision,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Noted errors when assigning a value to an atom.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignmentError {
    /// The atom of the literal already has the opposite value.
    ///
    /// Unexpected, as propagation identifies a conflict before any such assignment is attempted.
    ConflictingAssignment,

    /// The atom is not part of the context.
    UnknownAtom,
}

impl From<AssignmentError> for ErrorKind {
    fn from(e: AssignmentError) -> Self {
        ErrorKind::Assignment(e)
    }
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(ClauseKey),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,

    /// An assignment conflicted with the current valuation.
    /// This is unexpected.
    Assignment(AssignmentError),
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A clause is missing, e.g. as it was removed during a reduction.
    Missing,

    /// An invalid key token.
    InvalidKeyToken,

    /// Some attempt was made to store an empty clause.
    EmptyClause,

    /// All possible keys have been used for some clause type (original/binary/addition etc).
    StorageExhausted,

    /// A clause was added after some decision has been made.
    DecisionMade,

    /// A clause of some size was given where a different size was required.
    WrongSize,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors when configuring a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The named option was given a value outside of its bounds.
    OutOfBounds(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors from a clause which cannot be added to a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MalformedClauseError {
    /// The clause contains a literal whose atom is not part of the context (the integer form of the literal is given).
    UnknownAtom(isize),

    /// The clause contains some literal and its negation.
    Tautology,

    /// The clause was not terminated by a `0`.
    Unterminated,

    /// The clause contains `0`, which is not the integer form of any literal.
    Zero,
}

impl From<MalformedClauseError> for ErrorKind {
    fn from(e: MalformedClauseError) -> Self {
        ErrorKind::MalformedClause(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// The problem specification of some DIMACS input is not in the header of the input.
    MisplacedProblem(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors during resolution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolutionBufferError {
    /// A clause used during resolution could not be found.
    LostClause,

    /// Some literal at the conflict level was not valued by propagation (and so has no antecedent).
    MissingAntecedent,

    /// The trail was exhausted before a unique implication point was found.
    ExhaustedTrail,

    /// Some literal of a clause used during resolution has no value.
    UnvaluedLiteral,
}

impl From<ResolutionBufferError> for ErrorKind {
    fn from(e: ResolutionBufferError) -> Self {
        ErrorKind::ResolutionBuffer(e)
    }
}
