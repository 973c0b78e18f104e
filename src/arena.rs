use crate::board::{Action, Board};

use std::ops::Index;

// nodes per block; blocks are never reallocated once created, so indices
// into earlier blocks survive arena growth
const BLOCK_SIZE: usize = 4096;

/// A stable index to a node owned by a [`NodeArena`]
///
/// Handles stay valid for the lifetime of their arena. Nodes reference
/// their parent by handle rather than by address, so arena growth can
/// never leave a dangling parent link.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct NodeHandle(u32);

/// A single expanded search state
pub struct Node {
    pub board: Board,
    pub parent: Option<NodeHandle>,
    pub action: Action,
    /// Cost of the path from the root to this node
    pub g: u32,
    /// `g` plus the heuristic estimate to the goal, the A* priority
    pub f: u32,
}

/// A create-only pool owning every node expanded during one search
///
/// Storage grows by appending fixed-size blocks. No node is freed
/// individually; the whole arena is dropped in one step when the search
/// finishes.
pub struct NodeArena {
    blocks: Vec<Vec<Node>>,
    len: usize,
}

impl NodeArena {
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            len: 0,
        }
    }

    /// Stores a new node and returns its handle
    pub fn alloc(
        &mut self,
        board: Board,
        parent: Option<NodeHandle>,
        action: Action,
        g: u32,
        f: u32,
    ) -> NodeHandle {
        if self.len % BLOCK_SIZE == 0 {
            self.blocks.push(Vec::with_capacity(BLOCK_SIZE));
        }
        let block = self
            .blocks
            .last_mut()
            .expect("arena always holds a block after the capacity check");
        block.push(Node {
            board,
            parent,
            action,
            g,
            f,
        });

        let handle = NodeHandle(self.len as u32);
        self.len += 1;
        handle
    }

    pub fn get(&self, handle: NodeHandle) -> &Node {
        let index = handle.0 as usize;
        &self.blocks[index / BLOCK_SIZE][index % BLOCK_SIZE]
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for NodeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeHandle> for NodeArena {
    type Output = Node;

    fn index(&self, handle: NodeHandle) -> &Self::Output {
        self.get(handle)
    }
}
