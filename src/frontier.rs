use crate::arena::{NodeArena, NodeHandle};

// 4-ary heaps trade slightly deeper sift-ups for shallower trees and
// fewer cache misses than binary heaps on this workload
const BRANCHING: usize = 4;

/// The A* open set: a d-ary min-heap of arena handles ordered by each
/// node's f-score, looked up through the arena at comparison time
pub struct Frontier {
    heap: Vec<NodeHandle>,
}

impl Frontier {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds a handle and sifts it up until its parent scores no worse
    pub fn push(&mut self, handle: NodeHandle, arena: &NodeArena) {
        self.heap.push(handle);

        let mut pos = self.heap.len() - 1;
        while pos > 0 {
            let parent = (pos - 1) / BRANCHING;
            if arena[self.heap[pos]].f < arena[self.heap[parent]].f {
                self.heap.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    /// Removes and returns a handle with the minimal f-score, or `None`
    /// if the frontier is empty
    pub fn pop(&mut self, arena: &NodeArena) -> Option<NodeHandle> {
        if self.heap.is_empty() {
            return None;
        }

        let top = self.heap.swap_remove(0);
        if self.heap.is_empty() {
            return Some(top);
        }

        // sift the displaced last element down
        let mut pos = 0;
        loop {
            let first_child = BRANCHING * pos + 1;
            if first_child >= self.heap.len() {
                break;
            }

            // find the smallest child at this level
            let mut smallest = first_child;
            for child in first_child + 1..(first_child + BRANCHING).min(self.heap.len()) {
                if arena[self.heap[child]].f < arena[self.heap[smallest]].f {
                    smallest = child;
                }
            }

            if arena[self.heap[smallest]].f < arena[self.heap[pos]].f {
                self.heap.swap(pos, smallest);
                pos = smallest;
            } else {
                break;
            }
        }

        Some(top)
    }
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new()
    }
}
