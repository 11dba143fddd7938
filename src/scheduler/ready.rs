// src/scheduler/ready.rs

//! Ready set for the execution-order algorithm.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::registry::{Priority, TaskId};

/// A ready-set entry.
///
/// Ordered by priority, then by the sequence number at which the task became
/// ready (earlier wins), so `BinaryHeap` pops equal priorities FIFO.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ReadyEntry {
    priority: Priority,
    seq: Reverse<u64>,
    id: TaskId,
}

impl Ord for ReadyEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for ReadyEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Max-priority queue of tasks whose dependencies have all been placed.
#[derive(Debug, Default)]
pub struct ReadyQueue {
    heap: BinaryHeap<ReadyEntry>,
    next_seq: u64,
}

impl ReadyQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a task as ready. Later pushes lose ties against earlier ones.
    pub fn push(&mut self, id: TaskId, priority: Priority) {
        let seq = Reverse(self.next_seq);
        self.next_seq += 1;
        self.heap.push(ReadyEntry { priority, seq, id });
    }

    /// Take the highest-priority ready task.
    pub fn pop(&mut self) -> Option<TaskId> {
        self.heap.pop().map(|entry| entry.id)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
