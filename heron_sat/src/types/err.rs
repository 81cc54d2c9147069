/*!
Error types used in the library.

Errors are reserved for the edges of the library: malformed input and misuse
of the building API.
Conflicts during search are control flow, not errors, and violations of
internal invariants --- unreachable under a correct implementation --- are treated
as fatal rather than reported.
*/

/// A union of the varied error kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// An error related to parsing.
    Parse(ParseError),

    /// An error when building a formula.
    Build(BuildError),
}

/// Errors during parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended, or a clause appeared, before any `p cnf` line.
    MissingHeader,

    /// A `p` line naming a problem type other than `cnf`.
    UnsupportedProblemType,

    /// A `p cnf` line without two readable counts.
    ProblemSpecification,

    /// A token which should have been an integer, at the noted line.
    Token(usize),

    /// The input could not be read past the noted line.
    Line(usize),
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

/// Errors when building a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// A clause was added away from the root decision level.
    NonRootAddition,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Parse(ParseError::MissingHeader) => {
                write!(f, "no problem line before the formula")
            }
            ErrorKind::Parse(ParseError::UnsupportedProblemType) => {
                write!(f, "only cnf problems are supported")
            }
            ErrorKind::Parse(ParseError::ProblemSpecification) => {
                write!(f, "unreadable problem line")
            }
            ErrorKind::Parse(ParseError::Token(line)) => {
                write!(f, "unreadable token on line {line}")
            }
            ErrorKind::Parse(ParseError::Line(line)) => {
                write!(f, "the input failed after line {line}")
            }
            ErrorKind::Build(BuildError::NonRootAddition) => {
                write!(f, "clauses can only be added at the root level")
            }
        }
    }
}
