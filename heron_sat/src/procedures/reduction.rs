/*!
Maintenance of the clause database during search.

# Root simplification

At the root every assignment is permanent, so clauses satisfied by the root
valuation can be deleted and literals false at the root can be dropped from
the rest.
Simplification first settles the valuation by propagating; a conflict at this
point is fundamental and latches the solver unsatisfiable.

# Learnt-clause reduction

The learnt collection grows with every conflict, and most learnt clauses are
never useful again.
Once the cumulative conflict count crosses a threshold, the worse half of the
collection is deleted (see [reduce](crate::db::clause::ClauseDB::reduce) for
the order and the clauses exempted) and the threshold moves out by an
increment which itself grows, spacing reductions further apart as search runs
on.
*/

use crate::{misc::log::targets, solver::Solver};

impl Solver {
    /// Simplifies the clause database against the root-level valuation,
    /// removing satisfied clauses.
    ///
    /// Returns false if a conflict surfaced, in which case the solver is
    /// unsatisfiable.
    ///
    /// # Panics
    /// Calling off the root level is a programmer error, and fatal.
    pub fn simplify(&mut self) -> bool {
        if self.trail.level() != 0 {
            panic!("! Simplify called away from the root level");
        }

        if self.unsat || self.propagate().is_some() {
            self.mark_unsat();
            return false;
        }

        self.clause_db.simplify(&self.variable_db, &mut self.watch_db);
        true
    }

    /// True if enough conflicts have accumulated for a reduction.
    pub(crate) fn reduction_due(&self) -> bool {
        self.counters.conflicts >= self.counters.next_reduction
    }

    /// Reduces the learnt collection and reschedules.
    pub(crate) fn reduce_clause_db(&mut self) {
        log::info!(
            target: targets::REDUCTION,
            "Reduction at {} conflicts with {} learnt clauses",
            self.counters.conflicts,
            self.clause_db.learnt_count(),
        );

        self.counters.next_reduction += self.counters.reduction_increment;
        self.counters.reduction_increment += self.config.reduction_increment_growth;

        self.clause_db.reduce(&self.variable_db, &mut self.watch_db);
    }
}
