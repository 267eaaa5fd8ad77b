//! Array-backed binary min-heap used for bounded top-N selection.

/// Min-heap over a comparable key plus an opaque payload.
///
/// The structure itself is unbounded; the caller enforces any capacity by
/// checking `len` before inserting. The minimum key is always at the root,
/// so the admission test for a bounded selection is O(1).
pub struct MinHeap<K, V> {
    items: Vec<(K, V)>,
}

impl<K: Ord, V> MinHeap<K, V> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element with the smallest key, without removing it.
    pub fn peek(&self) -> Option<(&K, &V)> {
        self.items.first().map(|(k, v)| (k, v))
    }

    pub fn insert(&mut self, key: K, value: V) {
        self.items.push((key, value));
        self.bubble_up(self.items.len() - 1);
    }

    /// Removes and returns the element with the smallest key.
    pub fn extract_min(&mut self) -> Option<(K, V)> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop();
        if !self.items.is_empty() {
            self.bubble_down(0);
        }
        min
    }

    /// The backing array, in heap order (not sorted).
    pub fn into_vec(self) -> Vec<(K, V)> {
        self.items
    }

    fn bubble_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[parent].0 <= self.items[i].0 {
                break;
            }
            self.items.swap(i, parent);
            i = parent;
        }
    }

    fn bubble_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;

            if left < len && self.items[left].0 < self.items[smallest].0 {
                smallest = left;
            }
            if right < len && self.items[right].0 < self.items[smallest].0 {
                smallest = right;
            }
            if smallest == i {
                break;
            }

            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
