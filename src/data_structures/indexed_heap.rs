use std::fmt::Debug;

/// Position marker for vertices that have been extracted (settled)
const ABSENT: usize = usize::MAX;

/// An array-backed binary min-heap over vertex ids with decrease-key support.
///
/// Entries are `(vertex, key)` pairs ordered by `(key, vertex)`, so among equal
/// keys the lowest vertex id is extracted first. A parallel position index maps
/// each vertex to its slot in the heap array (or a sentinel once extracted) and
/// is updated on every swap, which gives O(1) `contains` and O(log V) `decrease_key`.
///
/// Heap layout is 0-indexed: the children of slot `i` are `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<W>
where
    W: Copy + Ord + Debug,
{
    /// Heap array of (vertex, key) pairs
    entries: Vec<(usize, W)>,

    /// Vertex -> slot in `entries`, or `ABSENT`
    positions: Vec<usize>,
}

impl<W> IndexedMinHeap<W>
where
    W: Copy + Ord + Debug,
{
    /// Builds a heap holding every vertex `0..keys.len()` with its initial key.
    ///
    /// Runs in O(V) using bottom-up heapification.
    pub fn build(keys: &[W]) -> Self {
        let mut heap = IndexedMinHeap {
            entries: keys.iter().copied().enumerate().collect(),
            positions: (0..keys.len()).collect(),
        };

        for slot in (0..heap.entries.len() / 2).rev() {
            heap.sift_down(slot);
        }

        heap
    }

    /// Returns the number of vertices still in the heap
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no vertices remain
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if `vertex` has not been extracted yet
    pub fn contains(&self, vertex: usize) -> bool {
        self.positions
            .get(vertex)
            .map_or(false, |&slot| slot != ABSENT)
    }

    /// Returns the current key of a vertex that is still in the heap
    pub fn key_of(&self, vertex: usize) -> Option<W> {
        if self.contains(vertex) {
            Some(self.entries[self.positions[vertex]].1)
        } else {
            None
        }
    }

    /// Returns the minimum entry without removing it
    pub fn peek(&self) -> Option<(usize, W)> {
        self.entries.first().copied()
    }

    /// Removes and returns the entry with the smallest key.
    ///
    /// Returns `None` once the heap is empty; that is the normal end of a run.
    pub fn extract_min(&mut self) -> Option<(usize, W)> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.swap(0, last);
        let root = self.entries.pop()?;
        self.positions[root.0] = ABSENT;

        if !self.entries.is_empty() {
            self.sift_down(0);
        }

        Some(root)
    }

    /// Lowers the key of `vertex` to `new_key` and restores heap order.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in the heap or `new_key` is not strictly
    /// smaller than its current key. Callers check [`contains`](Self::contains)
    /// and compare keys first; reaching either case is a bug.
    pub fn decrease_key(&mut self, vertex: usize, new_key: W) {
        assert!(
            self.contains(vertex),
            "invariant violation: decrease_key on vertex {} which is not in the heap",
            vertex
        );
        let slot = self.positions[vertex];
        assert!(
            new_key < self.entries[slot].1,
            "invariant violation: decrease_key on vertex {} from {:?} to non-smaller {:?}",
            vertex,
            self.entries[slot].1,
            new_key
        );

        self.entries[slot].1 = new_key;
        self.sift_up(slot);
    }

    /// Verifies the heap-order property and that the position index matches the array.
    pub fn check_invariants(&self) -> bool {
        let ordered = (1..self.entries.len()).all(|i| !self.less(i, (i - 1) / 2));

        let indexed = self
            .entries
            .iter()
            .enumerate()
            .all(|(slot, &(vertex, _))| self.positions.get(vertex) == Some(&slot));

        let present = self.positions.iter().filter(|&&slot| slot != ABSENT).count();

        ordered && indexed && present == self.entries.len()
    }

    /// Returns true if the entry at slot `a` orders strictly before the one at `b`
    fn less(&self, a: usize, b: usize) -> bool {
        let (va, ka) = self.entries[a];
        let (vb, kb) = self.entries[b];
        (ka, va) < (kb, vb)
    }

    /// Swaps two slots, keeping the position index in step
    fn swap(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
        self.positions[self.entries[a].0] = a;
        self.positions[self.entries[b].0] = b;
    }

    fn sift_up(&mut self, mut slot: usize) {
        while slot > 0 {
            let parent = (slot - 1) / 2;
            if !self.less(slot, parent) {
                break;
            }
            self.swap(slot, parent);
            slot = parent;
        }
    }

    fn sift_down(&mut self, mut slot: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * slot + 1;
            let right = 2 * slot + 2;
            let mut smallest = slot;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == slot {
                break;
            }

            self.swap(slot, smallest);
            slot = smallest;
        }
    }
}
