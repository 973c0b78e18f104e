#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};
    use std::fs::File;
    use std::io::{BufRead, BufReader};
    use std::time::{Duration, Instant};

    use crate::arena::NodeArena;
    use crate::frontier::Frontier;
    use crate::{Action, Board, Outcome, Solver, VisitedTable};

    #[test]
    pub fn heuristic_zero_only_on_goal() -> Result<()> {
        assert_eq!(Board::goal(3).heuristic(), 0);
        assert_eq!(Board::goal(4).heuristic(), 0);

        let one_move = Board::from_tiles(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8])?;
        assert_eq!(one_move.heuristic(), 1);

        let scrambled = Board::from_tiles(3, &[4, 5, 2, 1, 8, 7, 3, 6, 0])?;
        assert_eq!(scrambled.heuristic(), 12);
        Ok(())
    }

    #[test]
    pub fn moves_are_invertible() -> Result<()> {
        let board = Board::from_tiles(3, &[1, 4, 2, 3, 0, 5, 6, 7, 8])?;

        // centre blank, every direction applies and undoes
        for &action in Action::EXPANSION_ORDER.iter() {
            let moved = board
                .apply(action)
                .ok_or(anyhow!("centre blank should move {}", action))?;
            assert_eq!(moved.apply(action.inverse()), Some(board));
        }

        // corner blank has exactly two neighbours
        let corner = Board::goal(3);
        assert!(corner.apply(Action::Up).is_none());
        assert!(corner.apply(Action::Left).is_none());
        assert!(corner.apply(Action::Down).is_some());
        assert!(corner.apply(Action::Right).is_some());
        Ok(())
    }

    #[test]
    pub fn fingerprints_pack_tiles() -> Result<()> {
        // tile i sits in bit lane 4*i
        assert_eq!(Board::goal(3).fingerprint(), 0x8_7654_3210);
        assert_eq!(Board::goal(4).fingerprint(), 0xFEDC_BA98_7654_3210);

        let board = Board::from_tiles(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8])?;
        assert_ne!(board.fingerprint(), Board::goal(3).fingerprint());
        assert_eq!(board.fingerprint(), board.fingerprint());
        assert_ne!(board.fingerprint(), 0);
        Ok(())
    }

    #[test]
    pub fn board_validation() {
        // wrong length
        assert!(Board::from_tiles(3, &[1, 0, 2]).is_err());
        // not a permutation
        assert!(Board::from_tiles(3, &[1, 1, 2, 3, 4, 5, 6, 7, 8]).is_err());
        // tile out of range
        assert!(Board::from_tiles(3, &[1, 9, 2, 3, 4, 5, 6, 7, 8]).is_err());
        // unsupported side
        assert!(Board::from_tiles(2, &[0, 1, 2, 3]).is_err());
        assert!(Board::from_tiles(5, &(0..25).collect::<Vec<u8>>()).is_err());
    }

    #[test]
    pub fn solvability_parity() -> Result<()> {
        assert!(Board::goal(3).is_solvable());
        assert!(Board::goal(4).is_solvable());

        // swapping two adjacent non-blank tiles flips parity
        let swapped = Board::from_tiles(3, &[0, 2, 1, 3, 4, 5, 6, 7, 8])?;
        assert!(!swapped.is_solvable());

        let swapped =
            Board::from_tiles(4, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14])?;
        assert!(!swapped.is_solvable());
        Ok(())
    }

    #[test]
    pub fn visited_table_membership() {
        let mut table = VisitedTable::new();
        let initial_capacity = table.capacity();

        // no false positives before any insert
        for key in 1..100u64 {
            assert!(!table.contains(key * 3));
        }

        // found immediately after insert, growth keeps every key
        for key in 1..100u64 {
            table.insert(key * 3);
            assert!(table.contains(key * 3));
        }
        for key in 1..100u64 {
            assert!(table.contains(key * 3));
            assert!(!table.contains(key * 3 + 1));
        }

        assert_eq!(table.len(), 99);
        assert!(table.capacity() > initial_capacity);
    }

    #[test]
    pub fn frontier_pops_in_score_order() {
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();

        let board = Board::goal(3);
        for &f in [13, 5, 20, 1, 9, 2, 17, 5, 0, 11, 3, 8].iter() {
            let handle = arena.alloc(board, None, Action::Start, 0, f);
            frontier.push(handle, &arena);
        }

        // interleave a pop with more pushes
        let first = frontier.pop(&arena).expect("frontier is non-empty");
        assert_eq!(arena[first].f, 0);
        for &f in [4, 1, 15].iter() {
            let handle = arena.alloc(board, None, Action::Start, 0, f);
            frontier.push(handle, &arena);
        }

        let mut last = 0;
        while let Some(handle) = frontier.pop(&arena) {
            assert!(arena[handle].f >= last);
            last = arena[handle].f;
        }
        assert!(frontier.is_empty());
    }

    #[test]
    pub fn solve_goal_board() {
        let mut solver = Solver::new(Board::goal(3));
        match solver.solve() {
            Outcome::Solved(solution) => {
                assert_eq!(solution.steps.len(), 1);
                assert_eq!(solution.steps[0].action, Action::Start);
                assert_eq!(solution.nodes_expanded, 1);
            }
            Outcome::Exhausted { .. } => panic!("goal board must solve"),
        }
    }

    #[test]
    pub fn solve_one_move_board() -> Result<()> {
        let board = Board::from_tiles(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8])?;
        let mut solver = Solver::new(board);

        match solver.solve() {
            Outcome::Solved(solution) => {
                assert_eq!(solution.steps.len(), 2);
                assert_eq!(solution.steps[0].action, Action::Start);
                assert_eq!(solution.steps[1].action, Action::Left);
                assert_eq!(solution.steps[1].board, Board::goal(3));
            }
            Outcome::Exhausted { .. } => panic!("one-move board must solve"),
        }
        Ok(())
    }

    #[test]
    pub fn known_optimal_lengths() -> Result<()> {
        let file = BufReader::new(File::open("test_data/puzzles_3x3.txt")?);

        let mut times = vec![];
        let mut nodes = vec![];

        for line in file.lines() {
            let tokens = line?
                .split_whitespace()
                .map(|token| token.parse::<u8>())
                .collect::<Result<Vec<u8>, _>>()?;
            let (tiles, expected) = match tokens.split_last() {
                Some((&expected, tiles)) if tiles.len() == 9 => (tiles, expected as usize),
                _ => return Err(anyhow!("invalid fixture line")),
            };

            let board = Board::from_tiles(3, tiles)?;
            assert!(board.is_solvable());
            assert!(board.heuristic() as usize <= expected);

            let mut solver = Solver::new(board);
            let start_time = Instant::now();
            let solution = match solver.solve() {
                Outcome::Solved(solution) => solution,
                Outcome::Exhausted { .. } => return Err(anyhow!("fixture board must solve")),
            };
            let finish_time = Instant::now();

            assert_eq!(solution.move_count(), expected);
            assert!(solution.nodes_expanded >= solution.steps.len());

            // replaying the actions from the start board reproduces the path
            assert_eq!(solution.steps[0].action, Action::Start);
            assert_eq!(solution.steps[0].board, board);
            for pair in solution.steps.windows(2) {
                assert_eq!(pair[0].board.apply(pair[1].action), Some(pair[1].board));
            }
            assert_eq!(
                solution.steps.last().map(|step| step.board),
                Some(Board::goal(3))
            );

            times.push(finish_time - start_time);
            nodes.push(solution.nodes_expanded);
        }

        println!(
            "Fixtures:\nMean time: {:.6}ms, Mean no. of nodes: {}",
            (times.iter().sum::<Duration>() / times.len() as u32).as_secs_f64() * 1000.0,
            nodes.iter().sum::<usize>() as f64 / nodes.len() as f64,
        );
        Ok(())
    }

    #[test]
    pub fn unsolvable_board_exhausts() -> Result<()> {
        let board = Board::from_tiles(3, &[0, 2, 1, 3, 4, 5, 6, 7, 8])?;
        assert!(!board.is_solvable());

        // the 8-puzzle's reachable component is small enough to exhaust
        let mut solver = Solver::new(board);
        match solver.solve() {
            Outcome::Exhausted { nodes_expanded } => {
                // half of all 9! permutations are reachable
                assert!(nodes_expanded >= 181_440);
            }
            Outcome::Solved(_) => panic!("unsolvable board must exhaust the frontier"),
        }
        Ok(())
    }

    #[test]
    pub fn node_limit_stops_search() -> Result<()> {
        let board = Board::from_tiles(3, &[4, 5, 2, 1, 8, 7, 3, 6, 0])?;
        let mut solver = Solver::new(board).with_node_limit(3);

        match solver.solve() {
            Outcome::Exhausted { nodes_expanded } => assert_eq!(nodes_expanded, 3),
            Outcome::Solved(_) => panic!("a 12-move board can't solve in 3 expansions"),
        }
        Ok(())
    }

    #[test]
    pub fn solve_fifteen_puzzle() -> Result<()> {
        let board =
            Board::from_tiles(4, &[1, 5, 2, 3, 4, 6, 0, 7, 8, 9, 10, 11, 12, 13, 14, 15])?;
        let mut solver = Solver::new(board);

        match solver.solve() {
            Outcome::Solved(solution) => {
                assert_eq!(solution.move_count(), 3);
                assert_eq!(
                    solution.steps.last().map(|step| step.board),
                    Some(Board::goal(4))
                );
            }
            Outcome::Exhausted { .. } => panic!("shallow 4x4 board must solve"),
        }
        Ok(())
    }

    #[test]
    pub fn parse_puzzle_batches() -> Result<()> {
        let input = "\
1 0 2
3 4 5
6 7 8

1 5 2 3
4 6 0 7
8 9 10 11
12 13 14 15
";
        let boards = crate::parse_boards(input.as_bytes())?;
        assert_eq!(boards.len(), 2);
        assert_eq!(boards[0].side(), 3);
        assert_eq!(boards[1].side(), 4);
        assert_eq!(boards[0], Board::from_tiles(3, &[1, 0, 2, 3, 4, 5, 6, 7, 8])?);

        // tile counts that fit no supported side are rejected
        assert!(crate::parse_boards("1 2 3 4 5 6 7 8 9 0 10".as_bytes()).is_err());
        // as are non-numeric tokens
        assert!(crate::parse_boards("1 0 2 3 4 5 6 7 x".as_bytes()).is_err());
        Ok(())
    }
}
