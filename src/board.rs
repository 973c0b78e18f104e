use anyhow::{anyhow, Result};

use std::fmt;

use crate::{MAX_SIDE, MAX_TILES};

/// The move that produced a board from its parent, named for the
/// direction the blank travelled. `Start` marks the root of a search.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Action {
    Start,
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// The fixed order neighbours are generated in, pinned so that the
    /// solution returned among equally short candidates is reproducible
    pub const EXPANSION_ORDER: [Action; 4] =
        [Action::Right, Action::Down, Action::Left, Action::Up];

    /// The (row, column) offset the blank moves by, or `None` for `Start`
    pub fn offset(self) -> Option<(i32, i32)> {
        match self {
            Action::Start => None,
            Action::Up => Some((-1, 0)),
            Action::Down => Some((1, 0)),
            Action::Left => Some((0, -1)),
            Action::Right => Some((0, 1)),
        }
    }

    /// The action that undoes this one
    pub fn inverse(self) -> Action {
        match self {
            Action::Start => Action::Start,
            Action::Up => Action::Down,
            Action::Down => Action::Up,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Start => "Start",
            Action::Up => "Up",
            Action::Down => "Down",
            Action::Left => "Left",
            Action::Right => "Right",
        };
        write!(f, "{}", name)
    }
}

/// An N-puzzle board: a permutation of the tile labels `0..side²` laid out
/// row-major on a `side × side` grid, with 0 standing for the blank
///
/// Boards are immutable values; applying a move yields a new board. The
/// backing array is sized for the largest supported puzzle and the unused
/// tail stays zeroed, ignored by every operation.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Board {
    tiles: [u8; MAX_TILES],
    side: u8,
}

impl Board {
    /// Creates a board from a tile sequence, validating that it is a
    /// permutation of `0..side²` on a supported side length
    pub fn from_tiles(side: usize, tiles: &[u8]) -> Result<Self> {
        if side < 3 || side > MAX_SIDE {
            return Err(anyhow!(
                "unsupported side length {}, must be between 3 and {}",
                side,
                MAX_SIDE
            ));
        }
        if tiles.len() != side * side {
            return Err(anyhow!(
                "expected {} tiles for a {}x{} puzzle, got {}",
                side * side,
                side,
                side,
                tiles.len()
            ));
        }

        let mut seen = [false; MAX_TILES];
        for &tile in tiles {
            if tile as usize >= side * side {
                return Err(anyhow!("tile {} out of range for side {}", tile, side));
            }
            if seen[tile as usize] {
                return Err(anyhow!("duplicate tile {}", tile));
            }
            seen[tile as usize] = true;
        }

        let mut board = Self {
            tiles: [0; MAX_TILES],
            side: side as u8,
        };
        board.tiles[..tiles.len()].copy_from_slice(tiles);
        Ok(board)
    }

    /// The canonical solved arrangement `[0, 1, .., side²-1]` with the
    /// blank in the top-left corner
    pub fn goal(side: usize) -> Self {
        let mut tiles = [0; MAX_TILES];
        for (i, tile) in tiles.iter_mut().enumerate().take(side * side) {
            *tile = i as u8;
        }
        Self {
            tiles,
            side: side as u8,
        }
    }

    pub fn side(&self) -> usize {
        self.side as usize
    }

    pub fn tile_count(&self) -> usize {
        self.side() * self.side()
    }

    /// The tiles in row-major order, excluding the unused tail
    pub fn tiles(&self) -> &[u8] {
        &self.tiles[..self.tile_count()]
    }

    /// The index of the blank tile
    ///
    /// # Panics
    /// Panics if the board holds no blank, which construction rules out
    pub fn blank_index(&self) -> usize {
        match self.tiles().iter().position(|&tile| tile == 0) {
            Some(index) => index,
            None => panic!("board doesn't contain a blank tile"),
        }
    }

    /// Slides the blank one cell in the direction of `action`, returning
    /// the resulting board, or `None` if the destination falls outside
    /// the grid (a missing neighbour, not an error)
    pub fn apply(&self, action: Action) -> Option<Self> {
        let (row_offset, col_offset) = action.offset()?;
        let side = self.side as i32;

        let blank = self.blank_index();
        let row = blank as i32 / side + row_offset;
        let col = blank as i32 % side + col_offset;
        if row < 0 || row >= side || col < 0 || col >= side {
            return None;
        }

        let mut next = *self;
        next.tiles.swap(blank, (row * side + col) as usize);
        Some(next)
    }

    /// Sum of Manhattan distances from each non-blank tile to its goal
    /// cell. Admissible and consistent, as A* optimality requires; the
    /// blank is excluded since counting it can overestimate.
    pub fn heuristic(&self) -> u32 {
        let side = self.side as i32;
        let mut h = 0;
        for (i, &tile) in self.tiles().iter().enumerate() {
            if tile != 0 {
                let tile = tile as i32;
                let i = i as i32;
                let distance = (tile / side - i / side).abs() + (tile % side - i % side).abs();
                h += distance as u32;
            }
        }
        h
    }

    /// Packs the board into a 64-bit key, 4 bits per tile
    ///
    /// The encoding is bijective for boards up to 16 tiles, so matching
    /// keys mean matching boards and no equality check is needed. A valid
    /// board always has a non-zero tile somewhere, so 0 never occurs and
    /// stays free as the hash table's empty-slot sentinel.
    pub fn fingerprint(&self) -> u64 {
        let mut key = 0;
        for (i, &tile) in self.tiles().iter().enumerate() {
            key |= (tile as u64) << (4 * i);
        }
        key
    }

    /// Whether the goal is reachable from this board, by permutation parity
    pub fn is_solvable(&self) -> bool {
        let tiles = self.tiles();
        let mut inversions = 0;
        for (i, &tile) in tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            inversions += tiles[i + 1..]
                .iter()
                .filter(|&&later| later != 0 && later < tile)
                .count();
        }

        if self.side % 2 == 1 {
            // odd side: the blank's row doesn't affect parity
            inversions % 2 == 0
        } else {
            (inversions + self.blank_index() / self.side()) % 2 == 0
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &tile) in self.tiles().iter().enumerate() {
            if tile != 0 {
                write!(f, "{:2} ", tile)?;
            } else {
                write!(f, "   ")?;
            }
            if (i + 1) % self.side() == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
