//! Frontier disciplines shared by the path-tracking strategies.
//!
//! All three frontiers accept duplicate payloads. Visited filtering happens
//! after `pop`, never on `push`.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};

/// An ordered container of discovered-but-unexpanded payloads.
pub trait Frontier<P> {
    /// What a caller supplies alongside each payload to order it. The
    /// insertion-ordered frontiers use `()`.
    type Key;

    fn push(&mut self, payload: P, key: Self::Key);

    fn pop(&mut self) -> Option<P>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out.
#[derive(Debug)]
pub struct Fifo<P> {
    queue: VecDeque<P>,
}

impl<P> Fifo<P> {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }
}

impl<P> Default for Fifo<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Frontier<P> for Fifo<P> {
    type Key = ();

    fn push(&mut self, payload: P, _key: ()) {
        self.queue.push_back(payload);
    }

    fn pop(&mut self) -> Option<P> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Last in, first out.
#[derive(Debug)]
pub struct Lifo<P> {
    stack: Vec<P>,
}

impl<P> Lifo<P> {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }
}

impl<P> Default for Lifo<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Frontier<P> for Lifo<P> {
    type Key = ();

    fn push(&mut self, payload: P, _key: ()) {
        self.stack.push(payload);
    }

    fn pop(&mut self) -> Option<P> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// Numeric ordering for a [`MinPriority`] entry. Lower pops first, comparing
/// `primary` and then `secondary`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Priority {
    pub primary: f64,
    pub secondary: f64,
}

impl Priority {
    pub fn new(primary: f64) -> Self {
        Self {
            primary,
            secondary: 0.0,
        }
    }

    pub fn with_secondary(primary: f64, secondary: f64) -> Self {
        Self { primary, secondary }
    }
}

/// Ordering key: priority, then insertion sequence.
///
/// The payload never takes part in comparisons.
#[derive(Debug, Clone, Copy)]
struct PriorityKey {
    priority: Priority,
    sequence: u64,
}

impl PartialEq for PriorityKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for PriorityKey {}

impl PartialOrd for PriorityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriorityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .primary
            .total_cmp(&other.priority.primary)
            .then(self.priority.secondary.total_cmp(&other.priority.secondary))
            .then(self.sequence.cmp(&other.sequence))
    }
}

#[derive(Debug)]
struct PriorityEntry<P> {
    key: Reverse<PriorityKey>,
    payload: P,
}

impl<P> PartialEq for PriorityEntry<P> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<P> Eq for PriorityEntry<P> {}

impl<P> PartialOrd for PriorityEntry<P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P> Ord for PriorityEntry<P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Lowest priority first; fully equal priorities pop in insertion order.
///
/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
#[derive(Debug)]
pub struct MinPriority<P> {
    heap: BinaryHeap<PriorityEntry<P>>,
    next_sequence: u64,
}

impl<P> MinPriority<P> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }
}

impl<P> Default for MinPriority<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Frontier<P> for MinPriority<P> {
    type Key = Priority;

    fn push(&mut self, payload: P, priority: Priority) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(PriorityEntry {
            key: Reverse(PriorityKey { priority, sequence }),
            payload,
        });
    }

    fn pop(&mut self) -> Option<P> {
        self.heap.pop().map(|entry| entry.payload)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
