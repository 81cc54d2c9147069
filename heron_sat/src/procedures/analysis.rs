/*!
Analysis of a conflict: resolution to the first unique implication point.

# Overview

A conflicting clause is false on the current valuation, and every falsifying
assignment is either a decision or was forced by some clause.
Analysis walks the trail backwards from the conflict, replacing assignments
made at the current decision level by the clauses which forced them, until a
single assignment at the current level remains --- the first unique implication
point.
The negations of that assignment and of every contributing assignment from
lower levels form the learnt clause, which asserts the negation of the
implication point once the solver backjumps.

Concretely, each clause examined contributes the variables of its literals:

- A variable assigned at the current level is an implication point, pending
  resolution through its own reason.
- A variable assigned at a lower level contributes its falsified literal to
  the learnt clause, and raises the backjump level to its assignment level.

A variable contributes once; a timestamped set tracks those seen.
The walk selects the next trail assignment whose variable has been seen, and
stops once a single pending implication point remains.

# Literal block distance

The literal block distance of a clause is the count of distinct decision
levels among its literals, the root not counted.
Learnt clauses are scored by LBD when recorded, and the LBD of a learnt clause
used as a reason is recomputed as analysis passes through it: a clause whose
LBD improves below thirty is protected through the next database reduction
(its assignments are tightly grouped, and it is likely to be useful again).

# Activity

A learnt clause supplying an explanation has its activity bumped, tying clause
activity to use in analysis.
Variable activity is bumped as the learnt clause is recorded, not here.
*/

use crate::{
    db::{variable::VariableDB, ClauseKey, LevelIndex},
    generic::reset_set::ResetSet,
    misc::log::targets,
    solver::Solver,
    structures::literal::Literal,
};

/// A recomputed LBD below this bound protects its clause through the next
/// reduction.
const PROTECT_LBD_BOUND: u32 = 30;

/// A learnt clause with an LBD at or below this bound keeps its score.
const SETTLED_LBD_BOUND: u32 = 2;

/// The product of a conflict analysis.
///
/// The learnt clause itself is left in the solver's learnt buffer, with the
/// asserting literal first.
#[derive(Debug, Clone, Copy)]
pub struct Analysis {
    /// The level to backjump to --- the highest level among the learnt clause's
    /// non-asserting literals, zero for a unit.
    pub backjump_level: LevelIndex,

    /// The literal block distance of the learnt clause.
    pub lbd: u32,
}

impl Solver {
    /// Analyzes the conflict of `conflicting`, leaving the learnt clause in
    /// the learnt buffer.
    ///
    /// Only called with a decision on the trail: a conflict without decisions
    /// is handled as fundamental by the search loop.
    pub(crate) fn analyze(&mut self, conflicting: ClauseKey) -> Analysis {
        let current_level = self.trail.level();
        log::trace!(
            target: targets::ANALYSIS,
            "Analysis of {conflicting} at level {current_level}",
        );

        self.seen_variables.clear();
        self.learnt_buffer.clear();
        // Position 0 is reserved for the asserting literal.
        self.learnt_buffer.push(Literal::positive(0));

        let mut implication_points: usize = 0;
        let mut backjump_level: LevelIndex = 0;
        let mut position = self.trail.assignments.len();
        let mut clause_key = conflicting;
        // The conflicting clause is explained by all its literals; a reason
        // clause by all but the literal it forced.
        let mut skip = 0;
        let asserting_literal;

        loop {
            if self.clause_db.get(clause_key).is_learnt() {
                self.clause_db.bump_activity(clause_key);
            }

            let clause = self.clause_db.get(clause_key);
            for &literal in &clause.literals()[skip..] {
                let variable = literal.variable();
                if self.seen_variables.contains(variable as usize) {
                    continue;
                }
                self.seen_variables.add(variable as usize);

                let level = self.variable_db.level_of(variable).unwrap_or(0);
                if level == current_level {
                    implication_points += 1;
                } else {
                    self.learnt_buffer.push(literal);
                    backjump_level = backjump_level.max(level);
                }
            }

            // Refresh the LBD of a learnt reason on the way through.
            if clause.is_learnt() && clause.lbd() > SETTLED_LBD_BOUND {
                let fresh = literal_block_distance(
                    clause.literals(),
                    &self.variable_db,
                    &mut self.seen_levels,
                );
                let clause = self.clause_db.get_mut(clause_key);
                if fresh < PROTECT_LBD_BOUND && fresh < clause.lbd() {
                    clause.protect();
                }
                clause.set_lbd(fresh);
            }

            // Walk the trail back to the next contributing assignment.
            let next = loop {
                position -= 1;
                let literal = self.trail.assignments[position];
                if self.seen_variables.contains(literal.variable() as usize) {
                    break literal;
                }
            };

            implication_points -= 1;
            if implication_points == 0 {
                asserting_literal = next;
                break;
            }

            clause_key = match self.variable_db.reason_of(next.variable()) {
                Some(key) => key,
                None => panic!("! A contributing assignment without a reason during analysis"),
            };
            skip = 1;
        }

        self.learnt_buffer[0] = asserting_literal.negate();

        let lbd = literal_block_distance(
            &self.learnt_buffer,
            &self.variable_db,
            &mut self.seen_levels,
        );

        self.counters
            .avg_conflict_level
            .update(current_level as f64);

        log::trace!(
            target: targets::ANALYSIS,
            "Learnt clause of length {} asserting {} to level {backjump_level}",
            self.learnt_buffer.len(),
            self.learnt_buffer[0],
        );

        Analysis {
            backjump_level,
            lbd,
        }
    }
}

/// The count of distinct decision levels among the given literals, the root
/// not counted.
pub(crate) fn literal_block_distance(
    literals: &[Literal],
    variables: &VariableDB,
    seen_levels: &mut ResetSet,
) -> u32 {
    seen_levels.clear();
    // Literals fixed at the root do not open a block.
    seen_levels.add(0);

    let mut count = 0;
    for literal in literals {
        let level = variables.level_of(literal.variable()).unwrap_or(0) as usize;
        if !seen_levels.contains(level) {
            seen_levels.add(level);
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lbd_counts_distinct_levels_without_the_root() {
        let mut variables = VariableDB::default();
        let mut seen_levels = ResetSet::new();
        for _ in 0..5 {
            variables.add_variable();
            seen_levels.expand();
        }
        seen_levels.expand();

        let literals: Vec<Literal> = (0..4).map(Literal::positive).collect();
        variables.assign(literals[0], 0, None);
        variables.assign(literals[1], 2, None);
        variables.assign(literals[2], 2, None);
        variables.assign(literals[3], 3, None);

        let lbd = literal_block_distance(&literals, &variables, &mut seen_levels);
        assert_eq!(lbd, 2);
    }
}
