/*!
A max-heap on a fixed range of indices, with scores revisable in place.

The heap is backed by a score vector indexed by element, together with a
companion vector which tracks the current location of each element on the heap.
The backing vectors stay fixed as elements move on and off the heap, so the
structure acts as a store of scores for elements which may (or may not) be
queued at a given moment.

Ties between equal scores are broken toward the lower element index, so elements
of equal score leave the heap in declaration order.

[IndexHeap] is used to order variables by activity: the variable ordering pops
the most active variable without a value when a decision is required, and
reactivates variables as they are unassigned on backtracking.

```rust
# use heron_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.expand(0.0); // element 0
heap.expand(0.0); // element 1
heap.expand(0.0); // element 2

heap.activate(2);
heap.activate(0);
heap.activate(1);

heap.revalue(1, 10.0);

assert_eq!(heap.pop_max(), Some(1));
assert_eq!(heap.pop_max(), Some(0)); // 0 and 2 tie, lower index first
assert_eq!(heap.pop_max(), Some(2));
assert_eq!(heap.pop_max(), None);
```
*/

/// A binary max-heap over element indices keyed by revisable scores.
#[derive(Debug, Default)]
pub struct IndexHeap {
    /// The score of each element, active on the heap or not.
    scores: Vec<f64>,

    /// Where each element sits on the heap, if anywhere.
    positions: Vec<Option<usize>>,

    /// The heap of element indices.
    heap: Vec<usize>,
}

impl IndexHeap {
    /// Extends the index range by one element with the given score.
    ///
    /// The fresh element is not active on the heap.
    pub fn expand(&mut self, score: f64) {
        self.scores.push(score);
        self.positions.push(None);
    }

    /// A count of elements indexed by the structure.
    pub fn count(&self) -> usize {
        self.scores.len()
    }

    /// True if `element` is active on the heap.
    pub fn contains(&self, element: usize) -> bool {
        self.positions[element].is_some()
    }

    /// The score of `element`.
    pub fn score(&self, element: usize) -> f64 {
        self.scores[element]
    }

    /// Places `element` on the heap, if absent.
    /// Returns true if the element was placed, false otherwise.
    pub fn activate(&mut self, element: usize) -> bool {
        match self.positions[element] {
            Some(_) => false,
            None => {
                let position = self.heap.len();
                self.heap.push(element);
                self.positions[element] = Some(position);
                self.sift_up(position);
                true
            }
        }
    }

    /// Sets the score of `element`, restoring heap order if the element is active.
    pub fn revalue(&mut self, element: usize, score: f64) {
        self.scores[element] = score;
        if let Some(position) = self.positions[element] {
            let position = self.sift_up(position);
            self.sift_down(position);
        }
    }

    /// Scales every score by `factor`.
    ///
    /// A positive factor preserves the relative order of scores, so the heap is
    /// left untouched.
    pub fn scale_scores(&mut self, factor: f64) {
        for score in self.scores.iter_mut() {
            *score *= factor;
        }
    }

    /// Pops the active element with the highest score, ties toward the lower index.
    pub fn pop_max(&mut self) -> Option<usize> {
        if self.heap.is_empty() {
            return None;
        }

        let element = self.heap[0];
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        self.positions[self.heap[0]] = Some(0);
        self.heap.pop();
        self.positions[element] = None;

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Some(element)
    }

    /// True if element `a` outranks element `b`: a higher score, or an equal
    /// score and a lower index.
    fn outranks(&self, a: usize, b: usize) -> bool {
        let (score_a, score_b) = (self.scores[a], self.scores[b]);
        score_a > score_b || (score_a == score_b && a < b)
    }

    /// Moves the element at `position` up until its parent outranks it.
    /// Returns the final position.
    fn sift_up(&mut self, mut position: usize) -> usize {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.outranks(self.heap[position], self.heap[parent]) {
                self.swap_positions(position, parent);
                position = parent;
            } else {
                break;
            }
        }
        position
    }

    /// Moves the element at `position` down below any outranking child.
    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            if left >= self.heap.len() {
                break;
            }

            let mut strongest = position;
            if self.outranks(self.heap[left], self.heap[strongest]) {
                strongest = left;
            }
            let right = left + 1;
            if right < self.heap.len() && self.outranks(self.heap[right], self.heap[strongest]) {
                strongest = right;
            }

            if strongest == position {
                break;
            }
            self.swap_positions(position, strongest);
            position = strongest;
        }
    }

    fn swap_positions(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.positions[self.heap[a]] = Some(a);
        self.positions[self.heap[b]] = Some(b);
    }
}
