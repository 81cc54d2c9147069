//! A lifted boolean.

/// A boolean lifted with an unknown value.
///
/// ```rust
/// # use heron_sat::structures::lbool::LBool;
/// assert_eq!(LBool::True.negate(), LBool::False);
/// assert_eq!(LBool::Unknown.negate(), LBool::Unknown);
/// assert_eq!(LBool::from_bool(true), LBool::True);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LBool {
    /// The atom holds.
    True,

    /// The atom does not hold.
    False,

    /// Nothing is known about the atom.
    #[default]
    Unknown,
}

impl LBool {
    /// The negation of the lifted boolean, with `Unknown` a fixed point.
    pub fn negate(self) -> Self {
        match self {
            Self::True => Self::False,
            Self::False => Self::True,
            Self::Unknown => Self::Unknown,
        }
    }

    /// Lifts a boolean.
    pub fn from_bool(value: bool) -> Self {
        match value {
            true => Self::True,
            false => Self::False,
        }
    }
}

impl std::fmt::Display for LBool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => write!(f, "true"),
            Self::False => write!(f, "false"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
