/*!
A stored clause.

An active clause holds at least two literals, with the literals at positions 0
and 1 *watched*: the clause is registered against the negation of each, and is
only examined when a watched literal becomes false.

Positions are maintained so that while the clause is used for propagation:

- Position 1 holds the literal which just became false.
- Position 0 holds the literal which may be forced, if every other literal is
  false.

A clause remembers where the last replacement watch was found, and resumes the
search for the next replacement from that position, circularly.
The cached position is always in `[2, len)`, and is reset whenever
simplification shrinks the clause below it.

Learnt clauses additionally carry an activity and a literal block distance, and
may be *protected* from the next round of database reduction.
*/

use crate::{
    db::{
        variable::VariableDB,
        watches::{WatchDB, Watcher},
        ClauseKey,
    },
    structures::{lbool::LBool, literal::Literal},
};

/// The clause was learnt during search.
const LEARNT: u8 = 0b001;

/// The clause has been deleted, and its slot may be reissued.
const DELETED: u8 = 0b010;

/// The clause survives the next round of database reduction.
const PROTECTED: u8 = 0b100;

/// The result of updating the watches of a clause after a watched literal
/// became false.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatchOutcome {
    /// The clause is satisfied by its first watched literal.
    /// The watch was re-registered with the satisfying literal as guard.
    Satisfied,

    /// A replacement watch was found and registered.
    Rewatched,

    /// Every literal but the first is false: the clause asserts its first
    /// literal, which has no value.
    Asserts(Literal),

    /// Every literal is false.
    Conflict,
}

/// A clause in the database.
#[derive(Debug)]
pub struct DBClause {
    /// The literals of the clause, empty once deleted.
    literals: Vec<Literal>,

    /// The activity of the clause, maintained for learnt clauses.
    activity: f64,

    /// The literal block distance of the clause, maintained for learnt clauses.
    lbd: u32,

    /// Where to resume the search for a replacement watch, in `[2, len)`.
    scan_from: usize,

    /// Learnt / deleted / protected bits.
    status: u8,
}

impl DBClause {
    /// A clause over the given literals. The caller registers watches.
    pub fn new(literals: Vec<Literal>, learnt: bool) -> Self {
        DBClause {
            literals,
            activity: 0.0,
            lbd: 0,
            scan_from: 2,
            status: if learnt { LEARNT } else { 0 },
        }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The first watched literal --- the literal a propagating clause asserts.
    pub fn first(&self) -> Literal {
        self.literals[0]
    }

    /// The second watched literal.
    pub fn second(&self) -> Literal {
        self.literals[1]
    }

    pub fn is_learnt(&self) -> bool {
        self.status & LEARNT != 0
    }

    pub fn is_deleted(&self) -> bool {
        self.status & DELETED != 0
    }

    pub fn is_protected(&self) -> bool {
        self.status & PROTECTED != 0
    }

    pub fn protect(&mut self) {
        self.status |= PROTECTED;
    }

    pub fn unprotect(&mut self) {
        self.status &= !PROTECTED;
    }

    pub fn activity(&self) -> f64 {
        self.activity
    }

    pub fn scale_activity(&mut self, factor: f64) {
        self.activity *= factor;
    }

    pub fn bump_activity(&mut self, increment: f64) {
        self.activity += increment;
    }

    pub fn lbd(&self) -> u32 {
        self.lbd
    }

    pub fn set_lbd(&mut self, lbd: u32) {
        self.lbd = lbd;
    }

    /// Marks the clause deleted and releases its literal storage.
    ///
    /// The caller removes the clause from the watch lists first.
    pub fn delete(&mut self) {
        self.status |= DELETED;
        self.literals = Vec::default();
    }

    /// Updates the watches of the clause after `trigger` became true, that is,
    /// after the watched literal `¬trigger` became false.
    ///
    /// The clause re-registers itself on the appropriate watch list in every
    /// case, so the caller's detached copy of `trigger`'s old list can be
    /// dropped without further bookkeeping.
    pub fn update_watch(
        &mut self,
        key: ClauseKey,
        trigger: Literal,
        variables: &VariableDB,
        watches: &mut WatchDB,
    ) -> WatchOutcome {
        let falsified = trigger.negate();

        // Keep the falsified literal at position 1.
        if self.literals[0] == falsified {
            self.literals.swap(0, 1);
        }

        // Satisfied already: watch as before, with the witness as guard.
        if variables.value_of(self.literals[0]) == LBool::True {
            let guard = self.literals[0];
            watches.watch(trigger, Watcher { key, guard });
            return WatchOutcome::Satisfied;
        }

        // The cached position may have been invalidated by simplification.
        if self.scan_from >= self.literals.len() {
            self.scan_from = 2;
        }

        // Search for a replacement watch, resuming circularly from the
        // position of the previous replacement.
        let length = self.literals.len();
        for position in (self.scan_from..length).chain(2..self.scan_from) {
            let candidate = self.literals[position];
            if variables.value_of(candidate) != LBool::False {
                self.scan_from = position;
                self.literals[1] = candidate;
                self.literals[position] = falsified;
                let guard = self.literals[0];
                watches.watch(candidate.negate(), Watcher { key, guard });
                return WatchOutcome::Rewatched;
            }
        }

        // Every literal from position 1 on is false: the clause asserts its
        // first literal, or conflicts with the valuation.
        let guard = self.literals[0];
        watches.watch(trigger, Watcher { key, guard });
        match variables.value_of(self.literals[0]) {
            LBool::False => WatchOutcome::Conflict,
            _ => WatchOutcome::Asserts(self.literals[0]),
        }
    }

    /// Simplifies the clause against a root-level valuation by dropping false
    /// literals.
    /// Returns true if the clause is satisfied, in which case the caller
    /// deletes it.
    ///
    /// Only sound at decision level zero, where dropped literals can never be
    /// unassigned again.
    pub fn simplify(&mut self, variables: &VariableDB) -> bool {
        let mut kept = 0;
        for position in 0..self.literals.len() {
            let literal = self.literals[position];
            match variables.value_of(literal) {
                LBool::True => return true,
                LBool::False => {}
                LBool::Unknown => {
                    self.literals[kept] = literal;
                    kept += 1;
                }
            }
        }
        self.literals.truncate(kept);
        false
    }

    /// The clause in DIMACS form, zero-terminated.
    pub fn as_dimacs(&self) -> String {
        let mut text = String::default();
        for literal in &self.literals {
            text.push_str(&format!("{literal} "));
        }
        text.push('0');
        text
    }
}

impl std::fmt::Display for DBClause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.as_dimacs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(count: usize) -> (VariableDB, WatchDB) {
        let mut variables = VariableDB::default();
        let mut watches = WatchDB::default();
        for _ in 0..count {
            variables.add_variable();
            watches.add_variable();
        }
        (variables, watches)
    }

    #[test]
    fn update_watch_moves_to_open_literal() {
        let (mut variables, mut watches) = setup(3);
        let key = ClauseKey(0);
        let literals: Vec<Literal> = (0..3).map(Literal::positive).collect();
        let mut clause = DBClause::new(literals.clone(), false);

        // Falsify the second watched literal: 1 becomes false.
        variables.assign(literals[1].negate(), 1, None);
        let outcome = clause.update_watch(key, literals[1].negate(), &variables, &mut watches);

        assert_eq!(outcome, WatchOutcome::Rewatched);
        assert_eq!(clause.second(), literals[2]);
        assert_eq!(watches.watchers_of(literals[2].negate()).len(), 1);
    }

    #[test]
    fn update_watch_asserts_when_otherwise_false() {
        let (mut variables, mut watches) = setup(3);
        let key = ClauseKey(0);
        let literals: Vec<Literal> = (0..3).map(Literal::positive).collect();
        let mut clause = DBClause::new(literals.clone(), false);

        variables.assign(literals[2].negate(), 1, None);
        variables.assign(literals[1].negate(), 1, None);
        let outcome = clause.update_watch(key, literals[1].negate(), &variables, &mut watches);

        assert_eq!(outcome, WatchOutcome::Asserts(literals[0]));
    }

    #[test]
    fn update_watch_reports_conflict() {
        let (mut variables, mut watches) = setup(2);
        let key = ClauseKey(0);
        let literals: Vec<Literal> = (0..2).map(Literal::positive).collect();
        let mut clause = DBClause::new(literals.clone(), false);

        variables.assign(literals[0].negate(), 1, None);
        variables.assign(literals[1].negate(), 1, None);
        let outcome = clause.update_watch(key, literals[1].negate(), &variables, &mut watches);

        assert_eq!(outcome, WatchOutcome::Conflict);
    }

    #[test]
    fn simplify_drops_false_and_notes_satisfied() {
        let (mut variables, _) = setup(3);
        let literals: Vec<Literal> = (0..3).map(Literal::positive).collect();

        let mut clause = DBClause::new(literals.clone(), false);
        variables.assign(literals[1].negate(), 0, None);
        assert!(!clause.simplify(&variables));
        assert_eq!(clause.literals(), &[literals[0], literals[2]]);

        variables.assign(literals[2], 0, None);
        assert!(clause.simplify(&variables));
    }
}
