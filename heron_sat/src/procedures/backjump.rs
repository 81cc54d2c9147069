/*!
Recovery from a conflict: a jump back to a lower decision level.

Each level above the target is removed from the trail in turn, and each of its
assignments is undone: the variable returns to the pool of decision candidates
(remembering its value, when phase saving is enabled) and its valuation,
level, and reason are cleared.

Afterwards the propagation cursor is brought to the (shortened) top of the
trail, so propagation resumes with whatever is asserted next.
*/

use crate::{db::LevelIndex, misc::log::targets, solver::Solver};

impl Solver {
    /// Backtracks to the given decision level, undoing every assignment made
    /// above it.
    ///
    /// Passing the current (or a higher) level is safe --- nothing happens.
    pub fn backtrack_to(&mut self, target: LevelIndex) {
        log::trace!(
            target: targets::BACKJUMP,
            "Backjump from level {} to {target}",
            self.trail.level(),
        );

        while self.trail.level() > target {
            for literal in self.trail.forget_top_level() {
                let variable = literal.variable();
                let value = self.variable_db.value_of_variable(variable);
                self.var_order.reinsert(variable, value);
                self.variable_db.unassign(literal);
            }
        }

        self.trail.propagated = self.trail.assignment_count();
    }
}
