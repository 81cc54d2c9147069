//! The solver --- to which formulas are added and within which solves take place.
//!
//! A [Solver] owns the [databases](crate::db) a solve manipulates, the
//! [configuration](crate::config), and [counters](Counters) over the solve.
//! The databases are separate fields so that the
//! [procedures](crate::procedures) may borrow them independently --- notably,
//! propagation reads the valuation while rewriting watch lists and clauses.
//!
//! # Example
//!
//! ```rust
//! # use heron_sat::config::Config;
//! # use heron_sat::reports::Report;
//! # use heron_sat::solver::Solver;
//! # use heron_sat::structures::literal::Literal;
//! let mut solver = Solver::new(Config::default());
//!
//! let p = Literal::positive(solver.add_variable());
//! let q = Literal::positive(solver.add_variable());
//!
//! assert!(solver.add_clause(vec![p, q]).is_ok());
//! assert!(solver.add_clause(vec![-p]).is_ok());
//!
//! assert_eq!(solver.solve(), Report::Satisfiable);
//! let model = solver.models.last().unwrap();
//! assert!(!model[0]); // p is false
//! assert!(model[1]); // q is true
//! ```

mod counters;
pub use counters::Counters;

use crate::{
    config::Config,
    db::{
        clause::ClauseDB, trail::Trail, var_order::VarOrder, variable::VariableDB,
        watches::WatchDB, ClauseKey,
    },
    generic::reset_set::ResetSet,
    misc::log::targets,
    reports::Report,
    structures::{lbool::LBool, literal::Literal, Variable},
};

/// A conflict-driven clause-learning solver.
pub struct Solver {
    /// The configuration of the solver.
    pub config: Config,

    /// Counters over the solve.
    pub counters: Counters,

    /// The valuation with assignment bookkeeping.
    pub variable_db: VariableDB,

    /// The watch lists.
    pub watch_db: WatchDB,

    /// The clause arena and partitions.
    pub clause_db: ClauseDB,

    /// The chronological record of assignments.
    pub trail: Trail,

    /// Activity-ordered decision candidates.
    pub var_order: VarOrder,

    /// Every model saved by a satisfiable solve, in order of discovery.
    ///
    /// Enumeration is driven externally: add a clause blocking the latest
    /// model and solve again.
    pub models: Vec<Vec<bool>>,

    /// Latched once a conflict is derived at the root: every later solve
    /// reports unsatisfiable without work.
    pub(crate) unsat: bool,

    /// The status returned by the latest solve.
    pub(crate) status: Report,

    /// Variables seen during the current conflict analysis.
    pub(crate) seen_variables: ResetSet,

    /// Decision levels seen during an LBD computation.
    pub(crate) seen_levels: ResetSet,

    /// The literals of the clause under construction by conflict analysis.
    pub(crate) learnt_buffer: Vec<Literal>,

    /// Capacity recycled between watch-list sweeps of propagation.
    pub(crate) watcher_scratch: Vec<crate::db::watches::Watcher>,
}

impl Solver {
    /// A solver with no variables or clauses.
    pub fn new(config: Config) -> Self {
        let counters = Counters::new(config.reduction_start, config.reduction_increment);
        Solver {
            counters,
            variable_db: VariableDB::default(),
            watch_db: WatchDB::default(),
            clause_db: ClauseDB::new(config.clause_decay),
            trail: Trail::default(),
            var_order: VarOrder::new(config.variable_decay, config.phase_saving),
            models: Vec::default(),
            unsat: false,
            status: Report::Unknown,
            seen_variables: ResetSet::new(),
            // One slot more than the variable count, as levels range over
            // `0..=variables`.
            seen_levels: {
                let mut levels = ResetSet::new();
                levels.expand();
                levels
            },
            learnt_buffer: Vec::default(),
            watcher_scratch: Vec::default(),
            config,
        }
    }

    /// A count of variables added to the solver.
    pub fn variable_count(&self) -> usize {
        self.variable_db.variable_count()
    }

    /// A count of variables with a value on the current valuation.
    pub fn assignment_count(&self) -> usize {
        self.trail.assignment_count()
    }

    /// The value of a variable on the current valuation.
    pub fn value_of(&self, variable: Variable) -> LBool {
        self.variable_db.value_of_variable(variable)
    }

    /// True if a conflict has been derived at the root.
    pub fn is_unsat(&self) -> bool {
        self.unsat
    }

    /// The status of the formula, from the perspective of the latest solve.
    pub fn report(&self) -> Report {
        match self.unsat {
            true => Report::Unsatisfiable,
            false => self.status,
        }
    }

    /// Notes a conflict at the root.
    pub(crate) fn mark_unsat(&mut self) {
        if !self.unsat {
            log::info!(target: targets::SOLVE, "Unsatisfiability established");
            self.unsat = true;
        }
    }

    /// Makes `literal` true, recording the level and the forcing clause, and
    /// queues the assignment for propagation.
    ///
    /// Returns false if the literal is already false --- a conflicting
    /// assignment --- and true otherwise, with an already-true literal a no-op.
    pub fn enqueue(&mut self, literal: Literal, reason: Option<ClauseKey>) -> bool {
        match self.variable_db.value_of(literal) {
            LBool::False => false,
            LBool::True => true,
            LBool::Unknown => {
                let level = self.trail.level();
                // Root assignments are final and never examined by analysis,
                // so the reason is not kept. See the variable database notes.
                let reason = if level == 0 { None } else { reason };
                self.variable_db.assign(literal, level, reason);
                self.trail.push(literal);
                true
            }
        }
    }
}
