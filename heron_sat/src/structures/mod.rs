//! Abstract elements of a solve and their representations.
//!
//! - A [Variable] is a dense index, fixed when the variable is added to a solver.
//! - A [literal](literal::Literal) pairs a variable with a polarity.
//! - An [LBool](lbool::LBool) is a boolean lifted with an unknown value, used both for
//!   the valuation of literals and for remembered phases.

pub mod lbool;
pub mod literal;

/// An identifier for a boolean variable.
///
/// Variables are created in declaration order and are never destroyed, so the
/// identifiers of a solver with *n* variables are exactly `0..n`.
pub type Variable = u32;
