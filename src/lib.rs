//! An optimal solver for the sliding-tile N-puzzle (8-puzzle and 15-puzzle)
//!
//! This solver runs an A* search with the Manhattan distance heuristic
//! to find a shortest move sequence from a scrambled board to the
//! canonical goal arrangement.
//!
//! # Basic Usage
//!
//! ```
//! use npuzzle_ai::{board::Board, solver::{Outcome, Solver}};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_tiles(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8])?;
//! let mut solver = Solver::new(board);
//!
//! match solver.solve() {
//!     Outcome::Solved(solution) => assert_eq!(solution.steps.len(), 2),
//!     Outcome::Exhausted { .. } => unreachable!("board is solvable"),
//! }
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod visited_table;

pub mod frontier;

pub mod arena;

pub mod solver;

pub mod batch;

mod test;

pub use crate::arena::{Node, NodeArena, NodeHandle};
pub use crate::batch::{parse_boards, solve_all, RunReport};
pub use crate::board::{Action, Board};
pub use crate::frontier::Frontier;
pub use crate::solver::{Outcome, Solution, Solver, Step};
pub use crate::visited_table::VisitedTable;

/// The largest supported board side length
pub const MAX_SIDE: usize = 4;

/// The largest supported tile count, including the blank
pub const MAX_TILES: usize = MAX_SIDE * MAX_SIDE;

// ensure a packed board fingerprint fits in a u64 at 4 bits per tile
const_assert!(MAX_TILES * 4 <= 64);
