/*!
A max heap on some subset of elements with fixed indicies.

In other words, a heap backed by a vector of values with a companion vector which tracks the current location of each value index on the heap, if any.

The backing vector stays constant, and so the structure also acts as a store of values which may be moved on and off the heap.
For example, [IndexHeap] is used as a store of atom activity, where an atom is 'active' on the heap only while the atom may be chosen as a decision.

```rust
# use marten_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));

assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// Values, indexed by value index.
    values: Vec<V>,

    /// The position of each value index on the heap, if the value index is active.
    position: Vec<Option<usize>>,

    /// The heap, of value indicies, with active indicies stored below `limit`.
    heap: Vec<usize>,

    /// The count of active value indicies.
    limit: usize,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position: Vec::default(),
            heap: Vec::default(),
            limit: 0,
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Index `value` with `value_index`.
    /// Returns true if `value_index` was a fresh index, false otherwise.
    ///
    /// The structure grows to the size required for `value_index` to be an index, and any intermediate index is given the default value.
    /// To place `value_index` on the heap [activate](IndexHeap::activate) should be called after this method.
    pub fn add(&mut self, value_index: usize, value: V) -> bool {
        if value_index < self.values.len() {
            self.revalue(value_index, value);
            return false;
        }

        while self.values.len() < value_index {
            self.values.push(V::default());
            self.position.push(None);
            self.heap.push(usize::MAX);
        }
        self.values.push(value);
        self.position.push(None);
        self.heap.push(usize::MAX);
        true
    }

    /// Whether `value_index` is on the heap.
    pub fn is_active(&self, value_index: usize) -> bool {
        matches!(self.position.get(value_index), Some(Some(_)))
    }

    /// Place `value_index` on the heap, if not already present.
    /// Returns true if `value_index` was placed on the heap, false otherwise.
    pub fn activate(&mut self, value_index: usize) -> bool {
        match self.position[value_index] {
            Some(heap_index) => {
                self.sift_up(heap_index);
                false
            }
            None => {
                let heap_index = self.limit;
                self.heap[heap_index] = value_index;
                self.position[value_index] = Some(heap_index);
                self.limit += 1;
                self.sift_up(heap_index);
                true
            }
        }
    }

    /// Remove `value_index` from the heap, if present.
    /// Returns true if `value_index` was removed, false otherwise.
    pub fn remove(&mut self, value_index: usize) -> bool {
        let Some(heap_index) = self.position[value_index] else {
            return false;
        };

        self.limit -= 1;
        let last = self.heap[self.limit];
        self.heap.swap(heap_index, self.limit);
        self.position[value_index] = None;

        if heap_index < self.limit {
            self.position[last] = Some(heap_index);
            self.sift_down(heap_index);
            self.sift_up(heap_index);
        }
        true
    }

    /// Restore the heap property around `value_index`, if active, after a change to its value.
    pub fn heapify_if_active(&mut self, value_index: usize) {
        if let Some(heap_index) = self.position[value_index] {
            self.sift_up(heap_index);
            self.sift_down(heap_index);
        }
    }

    /// Peek at the maximum (value) index of the heap.
    pub fn peek_max(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => Some(self.heap[0]),
        }
    }

    /// Peek at the maximum value of the heap.
    pub fn peek_max_value(&self) -> Option<&V> {
        self.peek_max().map(|value_index| self.value_at(value_index))
    }

    /// Pop the maximum (value) index off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// Restore the heap property of the heap, e.g. after values were revised en masse.
    pub fn reheap(&mut self) {
        for heap_index in (0..self.limit / 2).rev() {
            self.sift_down(heap_index)
        }
    }

    /// The value indexed by `value_index`.
    pub fn value_at(&self, value_index: usize) -> &V {
        &self.values[value_index]
    }

    /// Set the value of `value_index` to `value`.
    ///
    /// The heap property may be broken if `value_index` is active, see [heapify_if_active](IndexHeap::heapify_if_active).
    pub fn revalue(&mut self, value_index: usize, value: V) {
        self.values[value_index] = value
    }

    /// Apply `f` to all (indexed) values.
    ///
    /// The heap property is preserved by any monotone `f`, otherwise see [reheap](IndexHeap::reheap).
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of values active on the heap.
    pub fn active_count(&self) -> usize {
        self.limit
    }

    /// True if no value is active on the heap, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn value_on_heap(&self, heap_index: usize) -> &V {
        &self.values[self.heap[heap_index]]
    }

    fn swap_on_heap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// Swaps the heap index with the larger of its children until neither child is larger.
    fn sift_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            if left >= self.limit {
                break;
            }
            let right = left + 1;

            let mut largest = heap_index;
            if self.value_on_heap(left) > self.value_on_heap(largest) {
                largest = left;
            }
            if right < self.limit && self.value_on_heap(right) > self.value_on_heap(largest) {
                largest = right;
            }

            if largest == heap_index {
                break;
            }
            self.swap_on_heap(heap_index, largest);
            heap_index = largest;
        }
    }

    /// Swaps the heap index with its parent while the parent is smaller.
    fn sift_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if self.value_on_heap(heap_index) > self.value_on_heap(parent) {
                self.swap_on_heap(heap_index, parent);
                heap_index = parent;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_simple() {
        let mut test_heap = IndexHeap::default();
        for (index, value) in [(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)] {
            test_heap.add(index, value);
            test_heap.activate(index);
        }

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(6));
        assert!(test_heap.is_empty());
    }

    #[test]
    fn heap_update() {
        let mut test_heap = IndexHeap::default();
        for (index, value) in [(6, 10), (4, 30), (1, 60), (0, 70)] {
            test_heap.add(index, value);
            test_heap.activate(index);
        }

        test_heap.apply_to_all(|_| 0);
        for index in [0, 1, 4, 6] {
            test_heap.revalue(index, index as i32);
        }
        test_heap.reheap();

        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_bump() {
        let mut test_heap = IndexHeap::default();
        for index in 0..5 {
            test_heap.add(index, 1.0);
            test_heap.activate(index);
        }

        test_heap.revalue(3, 9.0);
        test_heap.heapify_if_active(3);
        assert_eq!(test_heap.peek_max(), Some(3));
        assert_eq!(test_heap.peek_max_value(), Some(&9.0));
    }

    #[test]
    fn heap_sparse() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(600, 10);
        test_heap.add(0, 70);
        test_heap.activate(600);
        test_heap.activate(0);

        assert_eq!(test_heap.count(), 601);
        assert_eq!(test_heap.values[5], i32::default());
        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(600));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = IndexHeap::default();
        for index in [6, 5, 4, 1, 0] {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        assert!(test_heap.remove(4));
        assert!(!test_heap.is_active(4));
        assert!(!test_heap.remove(4));
        assert!(test_heap.remove(6));
        assert!(!test_heap.add(4, 10));
        assert!(!test_heap.add(4, 3));
        test_heap.activate(4);
        assert!(test_heap.is_active(4));
        assert!(!test_heap.activate(4));

        assert_eq!(test_heap.active_count(), 4);
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert!(!test_heap.is_active(0));
    }
}
