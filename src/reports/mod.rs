/*!
Reports for the context.

The display of a report matches the status line of the [SAT competition output format](https://satcompetition.github.io/2024/output.html), less the leading `s`.
*/

use crate::context::ContextState;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable.
    Satisfiable,

    /// The formula of the context is unsatisfiable.
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl From<ContextState> for Report {
    fn from(value: ContextState) -> Self {
        match value {
            ContextState::Configuration | ContextState::Input | ContextState::Solving => {
                Self::Unknown
            }
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[cfg(test)]
mod report_tests {
    use super::*;

    #[test]
    fn status_lines() {
        assert_eq!(Report::Satisfiable.to_string(), "SATISFIABLE");
        assert_eq!(Report::from(ContextState::Unsatisfiable).to_string(), "UNSATISFIABLE");
        assert_eq!(Report::from(ContextState::Solving), Report::Unknown);
    }
}
