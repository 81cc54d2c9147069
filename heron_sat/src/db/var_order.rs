//! The variable ordering: activity-ranked decision candidates with saved phases.
//!
//! # Activity
//!
//! Every variable carries an activity score, bumped additively each time the
//! variable appears in a learnt clause and decayed between conflicts.
//! Decay is applied lazily: rather than scaling every score down, the bump
//! increment is scaled *up*, and whenever a score (or the increment) passes
//! `1e100` all scores and the increment are rescaled by `1e-100`.
//! Rescaling by a positive factor preserves relative order, so the heap is
//! undisturbed.
//!
//! Scores live on an [IndexHeap], so the most active unassigned variable is a
//! pop away when a decision is required.
//! Variables with equal scores are popped in declaration order.
//!
//! # Phase saving
//!
//! When enabled, the value a variable held when it was unassigned is recorded,
//! and the next decision on that variable re-asserts the recorded value.
//! A variable whose phase was never recorded is decided positive.

use crate::{
    db::variable::VariableDB,
    generic::index_heap::IndexHeap,
    misc::log::targets,
    structures::{lbool::LBool, literal::Literal, Variable},
};

/// The threshold above which activities are rescaled.
const RESCALE_LIMIT: f64 = 1e100;

/// The factor by which activities are rescaled.
const RESCALE_FACTOR: f64 = 1e-100;

/// Activity-ordered decision candidates.
#[derive(Debug)]
pub struct VarOrder {
    /// Activity scores, heaped.
    heap: IndexHeap,

    /// The last value of each variable, if phase saving has recorded one.
    phases: Vec<LBool>,

    /// The current additive activity bump.
    score_increment: f64,

    /// The activity decay factor, in (0, 1].
    score_decay: f64,

    /// Whether to record phases on unassignment.
    phase_saving: bool,
}

impl VarOrder {
    pub fn new(score_decay: f64, phase_saving: bool) -> Self {
        VarOrder {
            heap: IndexHeap::default(),
            phases: Vec::default(),
            score_increment: 1.0,
            score_decay,
            phase_saving,
        }
    }

    /// Adds a fresh variable with the given initial score and phase, as a
    /// decision candidate.
    pub fn add_variable(&mut self, initial_score: f64, initial_phase: LBool) {
        let variable = self.phases.len();
        self.phases.push(initial_phase);
        self.heap.expand(initial_score);
        self.heap.activate(variable);
    }

    /// Enables or disables phase saving.
    pub fn set_phase_saving(&mut self, phase_saving: bool) {
        self.phase_saving = phase_saving;
    }

    /// Returns `variable` to the pool of decision candidates.
    ///
    /// To be called when a variable is unassigned during backtracking, with
    /// `value` the value the variable was assigned.
    pub fn reinsert(&mut self, variable: Variable, value: LBool) {
        if self.phase_saving {
            self.phases[variable as usize] = value;
        }
        self.heap.activate(variable as usize);
    }

    /// Bumps the activity of `variable`, rescaling all activities on overflow.
    pub fn bump(&mut self, variable: Variable) {
        let bumped = self.heap.score(variable as usize) + self.score_increment;
        self.heap.revalue(variable as usize, bumped);

        if bumped > RESCALE_LIMIT {
            self.rescale();
        }
    }

    /// Decays every activity by growing the bump increment.
    pub fn decay(&mut self) {
        self.score_increment /= self.score_decay;
        if self.score_increment > RESCALE_LIMIT {
            self.rescale();
        }
    }

    /// The next decision: the most active unassigned variable, in its saved
    /// phase.
    ///
    /// # Panics
    /// A decision is only requested when some variable lacks a value, so an
    /// exhausted heap is unreachable and treated as fatal.
    pub fn next_decision(&mut self, variables: &VariableDB) -> Literal {
        loop {
            let Some(candidate) = self.heap.pop_max() else {
                panic!("! Decision requested with every variable assigned");
            };
            let variable = candidate as Variable;

            if variables.value_of_variable(variable) != LBool::Unknown {
                continue;
            }

            log::trace!(target: targets::SOLVE, "Decision candidate {variable}");
            return match self.phases[candidate] {
                LBool::True => Literal::positive(variable),
                LBool::False => Literal::negative(variable),
                LBool::Unknown => Literal::positive(variable),
            };
        }
    }

    fn rescale(&mut self) {
        self.score_increment *= RESCALE_FACTOR;
        self.heap.scale_scores(RESCALE_FACTOR);
    }
}
