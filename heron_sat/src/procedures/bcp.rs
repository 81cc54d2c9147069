/*!
Boolean constraint propagation.

# Overview

Assignments queued on the trail are examined in first-assignment order.
For an assignment making some literal *l* true, every clause watching *l* has
just had a watched literal become false, and is updated through
[update_watch](crate::db::clause::db_clause::DBClause::update_watch): the
clause either finds a replacement watch, is witnessed satisfied, asserts its
remaining watched literal (which is enqueued, extending the trail), or
conflicts with the valuation, ending propagation.

# The guard fast path

Each watch carries a guard literal from its clause.
When the guard is true the clause is satisfied and is skipped without being
loaded.
The skip re-appends the watch behind any watches moved by clause updates, so
the guard changes the order clauses are examined in --- and with it which
conflict is found and which clause is learnt --- but not correctness.

# Borrows

A watch list is *detached* (swapped with an empty scratch buffer, capacity
recycled across sweeps) before its clauses are examined, because an examined
clause re-registers itself --- possibly on the very list being swept.
The detached list is owned by the sweep, so clause updates are free to push to
any live list.
The clause, valuation, and watch databases are separate fields of the solver,
and each examination borrows the clause mutably, the valuation immutably, and
the watch lists mutably --- disjoint borrows, checked by field.

Ordering is deterministic: trail order is assignment order, and watch lists
are swept in attachment order, modulo the re-appending of guarded watches.
*/

use crate::{
    db::{clause::db_clause::WatchOutcome, ClauseKey},
    misc::log::targets,
    solver::Solver,
    structures::lbool::LBool,
};

impl Solver {
    /// Propagates every assignment queued on the trail.
    ///
    /// Returns the key of a conflicting clause, or `None` once the trail is
    /// drained.
    pub fn propagate(&mut self) -> Option<ClauseKey> {
        while let Some(literal) = self.trail.next_unpropagated() {
            self.counters.propagations += 1;

            // Detach the watch list of the literal; examined clauses
            // re-register themselves as they are updated.
            let mut pending = std::mem::replace(
                self.watch_db.watchers_mut(literal),
                std::mem::take(&mut self.watcher_scratch),
            );

            let mut index = 0;
            let mut conflict = None;

            while index < pending.len() {
                let watcher = pending[index];

                if self.variable_db.value_of(watcher.guard) == LBool::True {
                    self.counters.guard_hits += 1;
                    self.watch_db.watchers_mut(literal).push(watcher);
                    index += 1;
                    continue;
                }

                let clause = self.clause_db.get_mut(watcher.key);
                match clause.update_watch(watcher.key, literal, &self.variable_db, &mut self.watch_db)
                {
                    WatchOutcome::Satisfied | WatchOutcome::Rewatched => {}

                    WatchOutcome::Asserts(forced) => {
                        // The forced literal has no value, so the enqueue
                        // cannot fail.
                        let enqueued = self.enqueue(forced, Some(watcher.key));
                        debug_assert!(enqueued);
                    }

                    WatchOutcome::Conflict => {
                        log::trace!(
                            target: targets::PROPAGATION,
                            "Conflict with {} while propagating {literal}",
                            watcher.key,
                        );
                        // Restore the watches not yet examined; the
                        // conflicting clause re-registered itself.
                        self.watch_db
                            .watchers_mut(literal)
                            .extend_from_slice(&pending[index + 1..]);
                        conflict = Some(watcher.key);
                        break;
                    }
                }

                index += 1;
            }

            pending.clear();
            self.watcher_scratch = pending;

            if conflict.is_some() {
                return conflict;
            }
        }

        None
    }
}
