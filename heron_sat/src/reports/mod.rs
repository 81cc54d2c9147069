//! Reports on the status of a solve.

/// The status of a formula, as established by a solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    /// A model of the formula was found.
    Satisfiable,

    /// The formula has no model.
    Unsatisfiable,

    /// The solve ended --- by conflict budget or time --- without establishing
    /// either.
    Unknown,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SAT"),
            Self::Unsatisfiable => write!(f, "UNSAT"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
