/*!
The clause database.

Clauses are owned by an arena and addressed by stable [ClauseKey]s --- watch
lists and assignment reasons hold keys, never the clauses themselves.
Deleting a clause unregisters its watches, marks a tombstone, and releases the
literal storage; the slot is reissued to a later clause.
Reasons never dangle: a clause serving as the reason for an assignment above
the root is *locked* and reduction will not delete it, while root assignments
carry no reason at all.

Two disjoint collections partition the database: *original* clauses, added
before search, and *learnt* clauses, derived by conflict analysis.
Original clauses are removed only when the root-level valuation satisfies them.
Learnt clauses are also subject to [reduction](ClauseDB::reduce), which deletes
the less valuable half of the learnt collection by length, literal block
distance, and activity.

Clause activity mirrors variable activity: an additive bump for clauses used in
conflict analysis, decay through growth of the increment, and a lazy rescale of
every activity whenever one passes `1e100`.
*/

pub mod db_clause;

use db_clause::DBClause;

use crate::{
    db::{variable::VariableDB, watches::WatchDB, ClauseKey},
    misc::log::targets,
    structures::literal::Literal,
};

/// The threshold above which clause activities are rescaled.
const RESCALE_LIMIT: f64 = 1e100;

/// The factor by which clause activities are rescaled.
const RESCALE_FACTOR: f64 = 1e-100;

/// The share of the learnt collection protected from a reduction, best first.
const PROTECTED_SHARE: usize = 10;

/// A learnt clause with an LBD at or below this bound is never deleted.
const KEEP_LBD_BOUND: u32 = 2;

/// The clause arena together with the original/learnt partition.
#[derive(Debug)]
pub struct ClauseDB {
    /// Clause slots, addressed by key.
    slots: Vec<DBClause>,

    /// Keys of deleted clauses whose slots may be reissued.
    free_keys: Vec<ClauseKey>,

    /// Keys of the original clauses.
    originals: Vec<ClauseKey>,

    /// Keys of the learnt clauses.
    learnts: Vec<ClauseKey>,

    /// The current additive activity bump.
    activity_increment: f64,

    /// The activity decay factor, in (0, 1].
    activity_decay: f64,
}

impl ClauseDB {
    pub fn new(activity_decay: f64) -> Self {
        ClauseDB {
            slots: Vec::default(),
            free_keys: Vec::default(),
            originals: Vec::default(),
            learnts: Vec::default(),
            activity_increment: 1.0,
            activity_decay,
        }
    }

    /// Stores a clause, returning its key.
    /// Watch registration is up to the caller, as is membership of the
    /// original/learnt partition.
    pub fn insert(&mut self, clause: DBClause) -> ClauseKey {
        match self.free_keys.pop() {
            Some(key) => {
                self.slots[key.index()] = clause;
                key
            }
            None => {
                let key = ClauseKey(self.slots.len() as u32);
                self.slots.push(clause);
                key
            }
        }
    }

    pub fn get(&self, key: ClauseKey) -> &DBClause {
        &self.slots[key.index()]
    }

    pub fn get_mut(&mut self, key: ClauseKey) -> &mut DBClause {
        &mut self.slots[key.index()]
    }

    /// Adds `key` to the original collection.
    pub fn register_original(&mut self, key: ClauseKey) {
        self.originals.push(key);
    }

    /// Adds `key` to the learnt collection.
    pub fn register_learnt(&mut self, key: ClauseKey) {
        self.learnts.push(key);
    }

    pub fn original_count(&self) -> usize {
        self.originals.len()
    }

    pub fn learnt_count(&self) -> usize {
        self.learnts.len()
    }

    /// The keys and clauses of the original collection.
    pub fn originals(&self) -> impl Iterator<Item = (ClauseKey, &DBClause)> {
        self.originals.iter().map(|&key| (key, self.get(key)))
    }

    /// The keys and clauses of the learnt collection.
    pub fn learnts(&self) -> impl Iterator<Item = (ClauseKey, &DBClause)> {
        self.learnts.iter().map(|&key| (key, self.get(key)))
    }

    /// Bumps the activity of the clause at `key`, rescaling every learnt
    /// activity on overflow.
    pub fn bump_activity(&mut self, key: ClauseKey) {
        let increment = self.activity_increment;
        let clause = self.get_mut(key);
        clause.bump_activity(increment);

        if clause.activity() > RESCALE_LIMIT {
            self.activity_increment *= RESCALE_FACTOR;
            for index in 0..self.learnts.len() {
                let key = self.learnts[index];
                self.slots[key.index()].scale_activity(RESCALE_FACTOR);
            }
        }
    }

    /// Decays every clause activity by growing the bump increment.
    pub fn decay_activity(&mut self) {
        self.activity_increment /= self.activity_decay;
        if self.activity_increment > RESCALE_LIMIT {
            self.activity_increment *= RESCALE_FACTOR;
            for index in 0..self.learnts.len() {
                let key = self.learnts[index];
                self.slots[key.index()].scale_activity(RESCALE_FACTOR);
            }
        }
    }

    /// Deletes the clause at `key`: unregisters both watches, marks the
    /// tombstone, and queues the slot for reuse.
    ///
    /// The caller removes the key from the original/learnt collections.
    pub fn delete(&mut self, key: ClauseKey, watches: &mut WatchDB) {
        let clause = &self.slots[key.index()];
        let (first, second) = (clause.first(), clause.second());
        self.delete_watched(key, first, second, watches);
    }

    /// As [delete](ClauseDB::delete), with the watched literals supplied by
    /// the caller --- for when simplification has already moved literals out of
    /// the watched positions.
    fn delete_watched(
        &mut self,
        key: ClauseKey,
        first: Literal,
        second: Literal,
        watches: &mut WatchDB,
    ) {
        watches.unwatch(first.negate(), key);
        watches.unwatch(second.negate(), key);
        self.slots[key.index()].delete();
        self.free_keys.push(key);
        log::trace!(target: targets::CLAUSE_DB, "Deleted {key}");
    }

    /// Simplifies both collections against a root-level valuation, deleting
    /// satisfied clauses and dropping false literals from the rest.
    ///
    /// Only sound at decision level zero.
    pub fn simplify(&mut self, variables: &VariableDB, watches: &mut WatchDB) {
        let learnts = std::mem::take(&mut self.learnts);
        self.learnts = self.simplify_collection(learnts, variables, watches);

        let originals = std::mem::take(&mut self.originals);
        self.originals = self.simplify_collection(originals, variables, watches);
    }

    fn simplify_collection(
        &mut self,
        keys: Vec<ClauseKey>,
        variables: &VariableDB,
        watches: &mut WatchDB,
    ) -> Vec<ClauseKey> {
        let mut kept = Vec::with_capacity(keys.len());

        for key in keys {
            let clause = &mut self.slots[key.index()];
            let (first, second) = (clause.first(), clause.second());

            if clause.simplify(variables) {
                // Satisfied for good. Simplification may have shuffled the
                // literals, so unwatch through the recorded pair.
                self.delete_watched(key, first, second, watches);
                continue;
            }

            // Dropping literals may have moved fresh literals into the watched
            // positions; keep the watch lists in step.
            let clause = &self.slots[key.index()];
            if clause.first() != first || clause.second() != second {
                let (new_first, new_second) = (clause.first(), clause.second());
                watches.unwatch(first.negate(), key);
                watches.unwatch(second.negate(), key);
                watches.watch(
                    new_first.negate(),
                    crate::db::watches::Watcher {
                        key,
                        guard: new_second,
                    },
                );
                watches.watch(
                    new_second.negate(),
                    crate::db::watches::Watcher {
                        key,
                        guard: new_first,
                    },
                );
            }
            kept.push(key);
        }

        kept
    }

    /// Reduces the learnt collection: sorts worst first, protects the best
    /// tenth, and deletes half, subject to the constraints below.
    ///
    /// A clause is never deleted when it is:
    /// - *locked* --- the reason for its first literal's current assignment,
    /// - binary,
    /// - of LBD at most [KEEP_LBD_BOUND], or
    /// - protected, in which case the protection is spent and the deletion
    ///   budget grows by one.
    ///
    /// Worst first: long clauses before binary, higher LBD first, lower
    /// activity first.
    pub fn reduce(&mut self, variables: &VariableDB, watches: &mut WatchDB) {
        let mut order = std::mem::take(&mut self.learnts);

        order.sort_by(|&a, &b| {
            let (x, y) = (&self.slots[a.index()], &self.slots[b.index()]);
            (y.len() > 2)
                .cmp(&(x.len() > 2))
                .then(y.lbd().cmp(&x.lbd()))
                .then(
                    x.activity()
                        .partial_cmp(&y.activity())
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
        });

        let protected = order.len() / PROTECTED_SHARE;
        for &key in &order[order.len() - protected..] {
            self.slots[key.index()].protect();
        }

        let mut budget = order.len() / 2;
        let before = order.len();
        let mut kept = Vec::with_capacity(order.len());

        for key in order {
            let clause = &self.slots[key.index()];
            let locked = variables.reason_of(clause.first().variable()) == Some(key);

            if budget == 0
                || locked
                || clause.len() <= 2
                || clause.lbd() <= KEEP_LBD_BOUND
                || clause.is_protected()
            {
                if clause.is_protected() {
                    self.slots[key.index()].unprotect();
                    budget += 1;
                }
                kept.push(key);
            } else {
                self.delete(key, watches);
                budget -= 1;
            }
        }

        log::info!(
            target: targets::REDUCTION,
            "Learnt clauses reduced from {before} to {}",
            kept.len()
        );
        self.learnts = kept;
    }
}
