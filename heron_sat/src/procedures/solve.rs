/*!
Determining the satisfiability of the formula in a solver.

# Overview

[solve](crate::solver::Solver::solve) runs [search](crate::solver::Solver::search)
under a growing conflict budget.
Search exhausts a budget and restarts: every decision is forgotten, while the
learnt clauses, activities, and saved phases carry over, steering the next
descent.
Budgets grow arithmetically, so restarts thin out as search runs on.

Within a budget, search loops:

```none
        +----------------------------+
  +-----| propagate                  |<---------------+
  |     +----------------------------+                |
  |        |               |                          |
  |     conflict        no conflict                   |
  |        |               |                          |
  |        ⌄               ⌄                          |
  |  analyze, backjump,   reduce / simplify when due  |
  |  record, decay        model when complete         |
  |        |              restart when over budget    |
  |        |               |                          |
  |        |               ⌄                          |
  |        |              decide ---------------------+
  |        +------- unsatisfiable, if at the root
  ⌄
```

A conflict at the root is fundamental --- no decision can be unmade --- and
latches the solver unsatisfiable.
A complete valuation is a model; it is saved and the solve reports
satisfiable with the trail returned to the root, ready for further clauses
(such as one blocking the model just found).

# Stop conditions

A bound on conflicts and a time limit may be configured.
Both are polled at iteration boundaries, in which case the solve reports
unknown with the trail at the root.
*/

use std::time::Instant;

use crate::{misc::log::targets, reports::Report, solver::Solver, structures::lbool::LBool};

impl Solver {
    /// Determines the satisfiability of the formula in the solver.
    ///
    /// May be called repeatedly, with clauses added between calls.
    pub fn solve(&mut self) -> Report {
        self.counters.start_time = Some(Instant::now());

        let mut conflict_budget = self.config.restart_base;
        let mut status = Report::Unknown;

        log::info!(
            target: targets::SOLVE,
            "Solve over {} variables and {} clauses",
            self.variable_count(),
            self.clause_db.original_count(),
        );

        while status == Report::Unknown && !self.should_stop() {
            status = self.search(conflict_budget);
            conflict_budget += self.config.restart_increment;
        }

        self.backtrack_to(0);
        self.log_statistics();
        self.status = status;
        status
    }

    /// Searches under a budget of `conflict_budget` further conflicts.
    ///
    /// Returns unknown when the budget is exhausted (a restart) or a stop
    /// condition fired.
    pub fn search(&mut self, conflict_budget: u64) -> Report {
        if self.unsat {
            return Report::Unsatisfiable;
        }

        self.counters.restarts += 1;
        let conflict_limit = self.counters.conflicts + conflict_budget;

        loop {
            if self.should_stop() {
                self.backtrack_to(0);
                return Report::Unknown;
            }

            if self.counters.iterations % self.config.stats_interval == 0 {
                self.log_statistics();
            }
            self.counters.iterations += 1;

            if let Some(conflict) = self.propagate() {
                self.counters.conflicts += 1;

                if self.trail.level() == 0 {
                    self.mark_unsat();
                    return Report::Unsatisfiable;
                }

                let analysis = self.analyze(conflict);
                self.backtrack_to(analysis.backjump_level);

                // The buffer is handed back for the next analysis.
                let learnt = std::mem::take(&mut self.learnt_buffer);
                self.record(&learnt, analysis.lbd);
                self.learnt_buffer = learnt;

                self.clause_db.decay_activity();
                self.var_order.decay();

                continue;
            }

            // No conflict.

            if self.reduction_due() {
                self.reduce_clause_db();
            }

            if self.trail.level() == 0 && !self.simplify() {
                return Report::Unsatisfiable;
            }

            if self.assignment_count() == self.variable_count() {
                self.save_model();
                self.backtrack_to(0);
                return Report::Satisfiable;
            }

            if self.counters.conflicts > conflict_limit {
                log::info!(
                    target: targets::SOLVE,
                    "Restart {} at {} conflicts",
                    self.counters.restarts,
                    self.counters.conflicts,
                );
                self.backtrack_to(0);
                return Report::Unknown;
            }

            self.make_decision();
        }
    }

    /// True if a configured stop condition has fired.
    fn should_stop(&self) -> bool {
        if let Some(limit) = self.config.max_conflicts {
            if self.counters.conflicts >= limit {
                return true;
            }
        }

        if let Some(limit) = self.config.time_limit {
            if let Some(start) = self.counters.start_time {
                if start.elapsed() >= limit {
                    return true;
                }
            }
        }

        false
    }

    /// Saves the complete valuation as a model.
    ///
    /// # Panics
    /// A model is only saved from a complete valuation; an unknown value is
    /// unreachable and treated as fatal.
    fn save_model(&mut self) {
        let mut model = Vec::with_capacity(self.variable_count());
        for variable in 0..self.variable_count() {
            match self.variable_db.value_of_variable(variable as u32) {
                LBool::True => model.push(true),
                LBool::False => model.push(false),
                LBool::Unknown => panic!("! Model requested from a partial valuation"),
            }
        }

        log::info!(target: targets::SOLVE, "Model found");
        self.models.push(model);
    }

    /// A statistics line, in the shape of the solver's `c` output.
    fn log_statistics(&self) {
        log::info!(
            target: targets::SOLVE,
            "c {:>10.3}s {:>12} iterations {:>12} conflicts {:>8} restarts {:>10} learnts",
            self.counters.elapsed_seconds(),
            self.counters.iterations,
            self.counters.conflicts,
            self.counters.restarts,
            self.clause_db.learnt_count(),
        );
    }
}
