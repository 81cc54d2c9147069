//! The variable database: a valuation with assignment bookkeeping.
//!
//! The valuation is stored per *literal* rather than per variable: the value of
//! a literal and of its negation are read without branching on polarity, at the
//! cost of storing each assignment twice.
//! The two entries are kept dual, `value(l) == value(¬l).negate()`.
//!
//! Alongside the valuation the database records, per variable, the decision
//! level of the current assignment and the clause which forced it (none for
//! decisions and for literals fixed at the root --- root assignments are never
//! examined by conflict analysis, and leaving the reason clear keeps every
//! recorded reason pointing at a live clause once the root simplifies clauses
//! away).

use crate::{
    db::{ClauseKey, LevelIndex},
    structures::{lbool::LBool, literal::Literal, Variable},
};

/// Valuation, assignment levels, and assignment reasons.
#[derive(Debug, Default)]
pub struct VariableDB {
    /// The value of each literal, indexed by literal.
    values: Vec<LBool>,

    /// The decision level of each variable's assignment, while assigned.
    levels: Vec<Option<LevelIndex>>,

    /// The clause which forced each variable's assignment, while assigned
    /// above the root and not a decision.
    reasons: Vec<Option<ClauseKey>>,
}

impl VariableDB {
    /// Adds a fresh, unassigned variable and returns its identifier.
    pub fn add_variable(&mut self) -> Variable {
        let variable = self.variable_count() as Variable;
        self.values.push(LBool::Unknown);
        self.values.push(LBool::Unknown);
        self.levels.push(None);
        self.reasons.push(None);
        variable
    }

    /// A count of variables in the database.
    pub fn variable_count(&self) -> usize {
        self.levels.len()
    }

    /// The value of a literal on the current valuation.
    pub fn value_of(&self, literal: Literal) -> LBool {
        self.values[literal.index()]
    }

    /// The value of a variable on the current valuation.
    pub fn value_of_variable(&self, variable: Variable) -> LBool {
        self.values[Literal::positive(variable).index()]
    }

    /// The decision level at which a variable was assigned, if assigned.
    pub fn level_of(&self, variable: Variable) -> Option<LevelIndex> {
        self.levels[variable as usize]
    }

    /// The clause which forced a variable's assignment, if any.
    pub fn reason_of(&self, variable: Variable) -> Option<ClauseKey> {
        self.reasons[variable as usize]
    }

    /// Makes `literal` true on the valuation at the given level, with the
    /// given forcing clause.
    pub fn assign(&mut self, literal: Literal, level: LevelIndex, reason: Option<ClauseKey>) {
        self.values[literal.index()] = LBool::True;
        self.values[literal.negate().index()] = LBool::False;
        self.levels[literal.variable() as usize] = Some(level);
        self.reasons[literal.variable() as usize] = reason;
    }

    /// Clears the assignment of `literal`'s variable.
    pub fn unassign(&mut self, literal: Literal) {
        self.values[literal.index()] = LBool::Unknown;
        self.values[literal.negate().index()] = LBool::Unknown;
        self.levels[literal.variable() as usize] = None;
        self.reasons[literal.variable() as usize] = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_duality() {
        let mut db = VariableDB::default();
        let v = db.add_variable();
        let positive = Literal::positive(v);

        assert_eq!(db.value_of(positive), LBool::Unknown);

        db.assign(positive.negate(), 3, None);
        assert_eq!(db.value_of(positive), LBool::False);
        assert_eq!(db.value_of(positive.negate()), LBool::True);
        assert_eq!(db.level_of(v), Some(3));

        db.unassign(positive);
        assert_eq!(db.value_of(positive), LBool::Unknown);
        assert_eq!(db.value_of(positive.negate()), LBool::Unknown);
        assert_eq!(db.level_of(v), None);
    }
}
