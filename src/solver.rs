//! An A* agent that finds shortest solutions to N-puzzle boards

use crate::arena::{NodeArena, NodeHandle};
use crate::board::{Action, Board};
use crate::frontier::Frontier;
use crate::visited_table::VisitedTable;

/// One step along a solution: the board after `action` was applied to
/// the previous step's board (`Start` for the initial board)
#[derive(Copy, Clone, Debug)]
pub struct Step {
    pub board: Board,
    pub action: Action,
}

/// A solved search: the full path from the initial board to the goal,
/// start state included, and the work it took to find
pub struct Solution {
    pub steps: Vec<Step>,
    pub nodes_expanded: usize,
}

impl Solution {
    /// The number of moves in the solution, excluding the start state
    pub fn move_count(&self) -> usize {
        self.steps.len() - 1
    }
}

/// The terminal state of a search
pub enum Outcome {
    Solved(Solution),
    /// The frontier emptied (the board is unsolvable) or the node limit
    /// was reached before the goal was found
    Exhausted { nodes_expanded: usize },
}

/// An agent to optimally solve N-puzzle positions
///
/// # Notes
/// This agent runs a textbook A* over the board graph with the Manhattan
/// distance heuristic. Duplicate states may enter the frontier before
/// their first closure; a duplicate popped later finds all of its
/// neighbours closed and contributes nothing, so `node_count` can exceed
/// the number of distinct states examined.
///
/// Each solve owns its own arena, frontier and visited table; solving
/// many boards concurrently needs no shared state.
pub struct Solver {
    board: Board,

    /// The number of nodes expanded by the last search (for diagnostics only)
    pub node_count: usize,
    node_limit: Option<usize>,
}

impl Solver {
    /// Creates a new `Solver` for a board
    pub fn new(board: Board) -> Self {
        Self {
            board,
            node_count: 0,
            node_limit: None,
        }
    }

    /// Caps the number of node expansions; a capped search that finds no
    /// solution in time reports `Exhausted`
    pub fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Runs the search to completion and returns the outcome
    ///
    /// Solutions are optimal in move count. Which of several equally
    /// short solutions is returned follows from the fixed expansion
    /// order and heap tie-breaking.
    pub fn solve(&mut self) -> Outcome {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut visited = VisitedTable::new();
        self.node_count = 0;

        let goal_key = Board::goal(self.board.side()).fingerprint();

        let root = arena.alloc(
            self.board,
            None,
            Action::Start,
            0,
            self.board.heuristic(),
        );
        frontier.push(root, &arena);

        while let Some(current) = frontier.pop(&arena) {
            self.node_count += 1;

            // close the popped state; duplicates still queued are caught
            // by the visited check below when their turn comes
            let current_key = arena[current].board.fingerprint();
            visited.insert(current_key);

            if current_key == goal_key {
                return Outcome::Solved(Solution {
                    steps: self.reconstruct_path(&arena, current),
                    nodes_expanded: self.node_count,
                });
            }

            if let Some(limit) = self.node_limit {
                if self.node_count >= limit {
                    break;
                }
            }

            for &action in Action::EXPANSION_ORDER.iter() {
                let neighbor = match arena[current].board.apply(action) {
                    Some(board) => board,
                    // the blank is on an edge, no neighbour this way
                    None => continue,
                };

                if !visited.contains(neighbor.fingerprint()) {
                    let g = arena[current].g + 1;
                    let f = g + neighbor.heuristic();
                    let handle = arena.alloc(neighbor, Some(current), action, g, f);
                    frontier.push(handle, &arena);
                }
            }
        }

        Outcome::Exhausted {
            nodes_expanded: self.node_count,
        }
    }

    // walk parent handles back to the root, then flip to read root-to-goal
    fn reconstruct_path(&self, arena: &NodeArena, goal: NodeHandle) -> Vec<Step> {
        let mut steps = Vec::new();

        let mut current = Some(goal);
        while let Some(handle) = current {
            let node = &arena[handle];
            steps.push(Step {
                board: node.board,
                action: node.action,
            });
            current = node.parent;
        }

        steps.reverse();
        steps
    }
}
