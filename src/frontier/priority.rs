//! Min-priority queue with decrease-only updates.
//!
//! Implemented as a binary heap with lazy deletion: every push/update appends a heap entry and
//! records the item's best priority in a side table. Heap entries whose priority no longer matches
//! the side table are stale and skipped on pop. Equal priorities pop in insertion order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
struct Entry<T> {
    priority: f64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed: `BinaryHeap` is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    /// Live items and their current (lowest) priority plus the sequence of the matching entry.
    best: FxHashMap<T, (f64, u64)>,
    next_seq: u64,
}

impl<T: Clone + Eq + Hash> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            best: FxHashMap::default(),
            next_seq: 0,
        }
    }

    /// Insert `item`, or lower its priority if already queued.
    ///
    /// A second push with a higher priority is a no-op: an item is never queued twice.
    pub fn push(&mut self, item: T, priority: f64) {
        self.update(item, priority);
    }

    /// Re-prioritise `item` to the lower of its current and `priority`, inserting it if absent.
    ///
    /// Returns `true` if the queue changed.
    pub fn update(&mut self, item: T, priority: f64) -> bool {
        if let Some(&(current, _)) = self.best.get(&item) {
            if current <= priority {
                return false;
            }
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.best.insert(item.clone(), (priority, seq));
        self.heap.push(Entry {
            priority,
            seq,
            item,
        });
        true
    }

    /// Remove and return the item with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.pop_with_priority().map(|(item, _)| item)
    }

    pub fn pop_with_priority(&mut self) -> Option<(T, f64)> {
        while let Some(entry) = self.heap.pop() {
            let live = matches!(self.best.get(&entry.item), Some(&(_, seq)) if seq == entry.seq);
            if live {
                self.best.remove(&entry.item);
                return Some((entry.item, entry.priority));
            }
        }
        None
    }

    /// Current priority of a queued item.
    pub fn priority_of(&self, item: &T) -> Option<f64> {
        self.best.get(item).map(|&(p, _)| p)
    }

    #[inline]
    pub fn contains(&self, item: &T) -> bool {
        self.best.contains_key(item)
    }

    /// Number of live items (stale heap entries are not counted).
    #[inline]
    pub fn len(&self) -> usize {
        self.best.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}

impl<T: Clone + Eq + Hash> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
