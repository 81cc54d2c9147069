/*!
Choosing the value of a variable.

A decision takes the most active unassigned variable from the
[variable ordering](crate::db::var_order) and assumes a value for it: a fresh
decision level is opened on the trail and the literal is asserted with no
forcing clause.

Which polarity is assumed is the business of the ordering --- the saved phase of
the variable, when phase saving is enabled, and positive otherwise.

Decisions are only requested when the valuation is partial and no consequence
is pending, so the assumption itself cannot conflict.
*/

use crate::{misc::log::targets, solver::Solver, structures::literal::Literal};

impl Solver {
    /// Opens a fresh decision level and asserts `literal`.
    ///
    /// Returns false if the literal is already false on the valuation.
    pub fn assume(&mut self, literal: Literal) -> bool {
        self.trail.begin_level();
        self.enqueue(literal, None)
    }

    /// Decides a value for the most active unassigned variable.
    pub(crate) fn make_decision(&mut self) {
        let decision = self.var_order.next_decision(&self.variable_db);
        self.counters.decisions += 1;
        log::trace!(
            target: targets::SOLVE,
            "Decision {decision} at level {}",
            self.trail.level() + 1,
        );
        self.assume(decision);
    }
}
