/*!
Methods for building a formula within a solver.

Variables are added one at a time, growing every per-variable and per-literal
structure in step.

Clauses pass through `new_clause`, which normalises original clauses against
the root-level valuation before storage:

- Duplicate literals are dropped.
- A clause containing a literal and its negation is a tautology, and is not
  stored.
- A clause with a literal already true at the root is satisfied, and is not
  stored.
- Literals already false at the root are dropped.

What remains decides the fate of the clause: an empty clause witnesses
unsatisfiability, a unit clause is asserted directly, and anything longer is
stored and watched.
Learnt clauses skip normalisation --- analysis produces them normalised --- and
instead choose their second watch by assignment level, so that a backjump
leaves the watch unassigned.
*/

pub mod dimacs;
pub mod models;

use std::collections::HashSet;

use crate::{
    db::{clause::db_clause::DBClause, watches::Watcher, ClauseKey},
    misc::log::targets,
    solver::Solver,
    structures::{lbool::LBool, literal::Literal, Variable},
    types::err::{BuildError, ErrorKind},
};

/// A learnt clause with an LBD at or below this bound counts toward the core
/// statistic.
const CORE_LBD_BOUND: u32 = 5;

/// Ok results of adding a clause to a solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was stored.
    Added,

    /// The clause was a unit: its literal was asserted at the root.
    Unit,

    /// The clause was satisfied or tautological, and left no constraint.
    Skipped,
}

impl Solver {
    /// Adds a fresh variable and returns its identifier.
    pub fn add_variable(&mut self) -> Variable {
        let variable = self.variable_db.add_variable();
        self.watch_db.add_variable();
        self.var_order.add_variable(0.0, LBool::Unknown);
        self.seen_variables.expand();
        self.seen_levels.expand();
        variable
    }

    /// Adds a clause over the given literals to the formula.
    ///
    /// Clauses may only be added at the root decision level; [solve](crate::procedures::solve)
    /// always returns there.
    /// An empty clause (after normalisation) latches the solver unsatisfiable.
    pub fn add_clause(&mut self, literals: Vec<Literal>) -> Result<ClauseOk, ErrorKind> {
        if self.trail.level() != 0 {
            return Err(ErrorKind::from(BuildError::NonRootAddition));
        }

        let (key, ok) = self.new_clause(literals, false);
        if !ok {
            self.mark_unsat();
        }

        match key {
            Some(key) => {
                self.clause_db.register_original(key);
                Ok(ClauseOk::Added)
            }
            None if ok => Ok(ClauseOk::Unit),
            None => Ok(ClauseOk::Skipped),
        }
    }

    /// Normalises (originals only) and stores a clause.
    ///
    /// Returns the key of the stored clause, if a clause was stored, and
    /// whether the formula remains consistent: false means an empty clause or
    /// a unit conflicting with the root valuation.
    pub(crate) fn new_clause(
        &mut self,
        mut literals: Vec<Literal>,
        learnt: bool,
    ) -> (Option<ClauseKey>, bool) {
        if !learnt {
            let mut seen: HashSet<Literal> = HashSet::with_capacity(literals.len());

            let mut index = literals.len();
            while index > 0 {
                index -= 1;
                let literal = literals[index];

                if seen.contains(&literal.negate()) {
                    log::trace!(target: targets::CLAUSE_DB, "Tautology skipped");
                    return (None, true);
                }
                if seen.contains(&literal) {
                    literals.swap_remove(index);
                    continue;
                }
                seen.insert(literal);

                match self.variable_db.value_of(literal) {
                    LBool::True => return (None, true),
                    LBool::False => {
                        // Sound only at the root, where the literal stays false.
                        literals.swap_remove(index);
                    }
                    LBool::Unknown => {}
                }
            }
        }

        match literals.len() {
            0 => (None, false),

            1 => {
                let asserted = self.enqueue(literals[0], None);
                (None, asserted)
            }

            _ => {
                if learnt {
                    // Watch the literal assigned at the highest level: after
                    // the backjump the other watch is the one unassigned.
                    let mut watch = 1;
                    let mut watch_level = 0;
                    for (position, literal) in literals.iter().enumerate().skip(1) {
                        let level = self
                            .variable_db
                            .level_of(literal.variable())
                            .unwrap_or(0);
                        if level > watch_level {
                            watch_level = level;
                            watch = position;
                        }
                    }
                    literals.swap(1, watch);
                }

                let key = self.clause_db.insert(DBClause::new(literals, learnt));
                let clause = self.clause_db.get(key);
                let (first, second) = (clause.first(), clause.second());
                self.watch_db.watch(first.negate(), Watcher { key, guard: second });
                self.watch_db.watch(second.negate(), Watcher { key, guard: first });

                (Some(key), true)
            }
        }
    }

    /// Stores a clause produced by conflict analysis and asserts its first
    /// literal.
    ///
    /// To be called after backjumping to the clause's assertion level, with
    /// the asserting literal at position 0.
    pub(crate) fn record(&mut self, literals: &[Literal], lbd: u32) {
        let (key, _) = self.new_clause(literals.to_vec(), true);

        if let Some(key) = key {
            self.enqueue(literals[0], Some(key));
            self.clause_db.bump_activity(key);
            for literal in literals {
                self.var_order.bump(literal.variable());
            }
            self.clause_db.register_learnt(key);
            self.clause_db.get_mut(key).set_lbd(lbd);

            if lbd <= CORE_LBD_BOUND {
                self.counters.total_core_lbd += lbd as u64;
            }

            log::trace!(target: targets::CLAUSE_DB, "Learnt {key} with lbd {lbd}");
        }
        // A unit learnt clause was asserted at the root by new_clause.
    }
}
