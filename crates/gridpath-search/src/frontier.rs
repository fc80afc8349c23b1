//! Frontier containers: FIFO for breadth-first, LIFO for depth-first and a
//! minimum-cost heap for Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::traits::NodeId;

/// Discovered-but-not-yet-expanded nodes, ordered per strategy.
pub trait Frontier {
    /// Insert `id`. Unordered frontiers ignore `priority`.
    fn push(&mut self, id: NodeId, priority: f32);

    /// Remove and return the next node to expand.
    fn pop(&mut self) -> Option<NodeId>;

    /// Number of pending nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Queue frontier: nodes pop in insertion order.
#[derive(Debug, Default, Clone)]
pub struct FifoFrontier {
    queue: VecDeque<NodeId>,
}

impl FifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for FifoFrontier {
    #[inline]
    fn push(&mut self, id: NodeId, _priority: f32) {
        self.queue.push_back(id);
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Stack frontier: nodes pop in reverse insertion order.
#[derive(Debug, Default, Clone)]
pub struct LifoFrontier {
    stack: Vec<NodeId>,
}

impl LifoFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for LifoFrontier {
    #[inline]
    fn push(&mut self, id: NodeId, _priority: f32) {
        self.stack.push(id);
    }

    #[inline]
    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Heap entry ordered by `priority`, then by insertion sequence.
#[derive(Clone, Copy, Debug)]
struct Entry {
    id: NodeId,
    priority: f32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first,
        // and the earliest push among equals.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Binary-heap frontier that always pops the lowest-priority node.
///
/// Ties are broken by insertion order, so repeated searches over the same
/// graph expand nodes in the same sequence.
#[derive(Debug, Default, Clone)]
pub struct MinCostFrontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl MinCostFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for MinCostFrontier {
    fn push(&mut self, id: NodeId, priority: f32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { id, priority, seq });
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|e| e.id)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}
