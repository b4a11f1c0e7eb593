//! Open list: array-backed binary min-heap ordered by `f`.
//!
//! # Operations
//!
//! - `insert`: append, then sift up while strictly smaller than the parent.
//! - `pop` (extract-min): take the root, move the last entry into the root
//!   slot, then sift down by swapping with the smaller child.
//!
//! Both are `O(log n)`; `peek`, `len` and `is_empty` are `O(1)`.
//!
//! Entries compare by [`Prioritized::priority`] only. Among equal
//! priorities the pop order is whatever the heap shape yields and carries no
//! meaning. Duplicate states are allowed; the planner discards stale ones
//! when it pops them.

/// Anything that can sit in a [`BinaryFrontier`].
pub trait Prioritized {
    /// Lower pops first.
    fn priority(&self) -> u64;
}

impl Prioritized for u64 {
    fn priority(&self) -> u64 {
        *self
    }
}

/// Binary min-heap over `T`.
#[derive(Debug, Clone)]
pub struct BinaryFrontier<T> {
    heap: Vec<T>,
    high_water: usize,
}

impl<T: Prioritized> BinaryFrontier<T> {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty frontier with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
            high_water: 0,
        }
    }

    /// Add an entry.
    pub fn insert(&mut self, item: T) {
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return an entry with minimum priority.
    #[must_use]
    pub fn pop(&mut self) -> Option<T> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// An entry with minimum priority, without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Current number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].priority() >= self.heap[parent].priority() {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.heap[left].priority() < self.heap[smallest].priority() {
                smallest = left;
            }
            if right < len && self.heap[right].priority() < self.heap[smallest].priority() {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.heap.swap(index, smallest);
            index = smallest;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].priority() <= self.heap[i].priority())
    }
}

impl<T: Prioritized> Default for BinaryFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}
