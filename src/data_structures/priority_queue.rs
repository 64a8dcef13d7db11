use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier for shortest path searches, backed by a binary heap.
///
/// Entries are never deduplicated: the same vertex may be queued several times
/// with different priorities, and callers discard stale entries on dequeue.
/// Equal priorities come out in insertion order.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Entries keyed by (priority, insertion sequence)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,

    /// Sequence number handed to the next enqueued entry
    next_seq: u64,
}

impl<V, P> Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Creates an empty frontier with space for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    /// Returns true if no entries are waiting
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of outstanding entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Queues a vertex at the given priority in O(log n)
    pub fn enqueue(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((priority, self.next_seq, vertex)));
        self.next_seq += 1;
    }

    /// Removes the entry with the smallest priority in O(log n)
    pub fn dequeue_min(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, _, vertex))| (vertex, priority))
    }

    /// Returns the entry `dequeue_min` would remove, without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, _, vertex))| (*vertex, *priority))
    }

    /// Clears the frontier
    pub fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
