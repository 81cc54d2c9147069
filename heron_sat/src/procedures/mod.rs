//! The solve algorithm, factored into a collection of procedures.
//!
//! - [bcp] --- boolean constraint propagation over the watch lists.
//! - [analysis] --- derivation of an asserting clause from a conflict.
//! - [backjump] --- return to a lower decision level.
//! - [decision] --- choice of an unassigned variable to value.
//! - [reduction] --- root-level simplification and learnt-clause reduction.
//! - [solve] --- the search loop tying the above together.
//!
//! Each procedure is implemented as methods on [Solver](crate::solver::Solver)
//! in the corresponding file.

pub mod analysis;
pub mod backjump;
pub mod bcp;
pub mod decision;
pub mod reduction;
pub mod solve;
