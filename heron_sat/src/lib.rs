//! A library for determining the satisfiability of boolean formulas written in
//! conjunctive normal form.
//!
//! heron_sat implements conflict-driven clause learning: unit propagation over
//! two watched literals per clause, first-UIP conflict analysis with literal
//! block distance scoring, activity-ordered decisions with optional phase
//! saving, restarts under a growing conflict budget, and reduction of the
//! learnt clause database.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a
//! [solver](crate::solver::Solver).
//!
//! Internally, and at a high level, a solve is viewed in terms of the
//! manipulation of a handful of [databases](crate::db): the formula lives in a
//! clause database, the valuation in a variable database, and the consequences
//! of the valuation accumulate on a trail.
//! The algorithm itself is factored into a collection of
//! [procedures](crate::procedures).
//!
//! Useful starting points:
//! - The [solve procedure](crate::procedures::solve), for the dynamics of a
//!   solve.
//! - The [database module](crate::db), for the data considered during a solve.
//! - The [configuration](crate::config), for what may be adjusted.
//!
//! Formulas are added through [DIMACS input](crate::builder::dimacs) or
//! programmatically, clause by clause.
//!
//! # Example
//!
//! Find every model of a formula by blocking each model as it is found.
//!
//! ```rust
//! # use heron_sat::config::Config;
//! # use heron_sat::reports::Report;
//! # use heron_sat::solver::Solver;
//! # use heron_sat::structures::literal::Literal;
//! let mut solver = Solver::new(Config::default());
//! for _ in 0..3 {
//!     solver.add_variable();
//! }
//!
//! let mut count = 0;
//! while solver.solve() == Report::Satisfiable {
//!     count += 1;
//!
//!     // Block the model just found.
//!     let model = solver.models.last().unwrap();
//!     let blocking = model
//!         .iter()
//!         .enumerate()
//!         .map(|(v, &value)| Literal::new(v as u32, !value))
//!         .collect();
//!
//!     if solver.add_clause(blocking).is_err() {
//!         break;
//!     }
//! }
//!
//! assert_eq!(count, 8);
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, under the targets listed in
//! [misc::log].
//! As no log implementation is provided, logging costs nothing unless
//! requested.

pub mod builder;
pub mod config;
pub mod db;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod solver;
pub mod structures;
pub mod types;
