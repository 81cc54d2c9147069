//! The watch database: which clauses are woken by an assignment.
//!
//! Each clause watches its first two literals, and is registered in the watch
//! list of the *negation* of each watched literal.
//! So, when a literal becomes true, the clauses in its watch list are exactly
//! those in which a watched literal has just become false, and only those
//! clauses need examination.
//!
//! A watch carries a *guard*: one of the clause's other literals, recorded at
//! the time the watch was made.
//! If the guard is true the clause is satisfied and propagation can skip the
//! clause without loading it.
//! The guard is an optimisation only --- dropping it must not change correctness,
//! though it does change the order in which clauses are examined and hence
//! which conflicts are found.

use crate::{db::ClauseKey, structures::literal::Literal};

/// A clause registered against a literal, with a guard literal from the clause.
///
/// The guard is always a literal of the clause distinct from the watched one.
#[derive(Clone, Copy, Debug)]
pub struct Watcher {
    /// The key of the watching clause.
    pub key: ClauseKey,

    /// A literal of the clause which, when true, witnesses the clause is
    /// satisfied.
    pub guard: Literal,
}

/// Watch lists, one per literal.
#[derive(Debug, Default)]
pub struct WatchDB {
    lists: Vec<Vec<Watcher>>,
}

impl WatchDB {
    /// Adds the pair of (empty) watch lists for a fresh variable.
    pub fn add_variable(&mut self) {
        self.lists.push(Vec::default());
        self.lists.push(Vec::default());
    }

    /// Registers `watcher` to be woken when `trigger` becomes true.
    pub fn watch(&mut self, trigger: Literal, watcher: Watcher) {
        self.lists[trigger.index()].push(watcher);
    }

    /// Removes every watch of clause `key` from the list of `trigger`.
    pub fn unwatch(&mut self, trigger: Literal, key: ClauseKey) {
        self.lists[trigger.index()].retain(|watcher| watcher.key != key);
    }

    /// The watch list of `trigger`.
    pub fn watchers_of(&self, trigger: Literal) -> &[Watcher] {
        &self.lists[trigger.index()]
    }

    /// Mutable access to the watch list of `trigger`.
    pub fn watchers_mut(&mut self, trigger: Literal) -> &mut Vec<Watcher> {
        &mut self.lists[trigger.index()]
    }
}
