//! Reads batches of puzzles from text input and solves them in parallel
//!
//! Input is whitespace-separated tile values, one or more lines per
//! puzzle, with a blank line between puzzles. The side length is
//! inferred from the tile count (9 tiles for 3x3, 16 for 4x4).

use anyhow::{anyhow, Context, Result};
use indicatif::*;
use rayon::prelude::*;

use std::io::BufRead;
use std::time::{Duration, Instant};

use crate::board::Board;
use crate::solver::{Outcome, Solver};

/// The outcome of one batched solve, with its wall-clock time
pub struct RunReport {
    pub outcome: Outcome,
    pub duration: Duration,
}

fn board_from_tokens(tokens: &[u8]) -> Result<Board> {
    let side = match tokens.len() {
        9 => 3,
        16 => 4,
        n => return Err(anyhow!("a puzzle must have 9 or 16 tiles, got {}", n)),
    };
    Board::from_tiles(side, tokens)
}

/// Parses every puzzle in the input
pub fn parse_boards<R: BufRead>(reader: R) -> Result<Vec<Board>> {
    let mut boards = Vec::new();
    let mut tokens: Vec<u8> = Vec::new();

    for line in reader.lines() {
        let line = line.context("failed to read a line of puzzle input")?;

        if line.trim().is_empty() {
            // blank line ends the current puzzle
            if !tokens.is_empty() {
                boards.push(board_from_tokens(&tokens)?);
                tokens.clear();
            }
        } else {
            for token in line.split_whitespace() {
                let tile = token
                    .parse::<u8>()
                    .with_context(|| format!("could not parse '{}' as a tile", token))?;
                tokens.push(tile);
            }
        }
    }
    // a trailing blank line is optional
    if !tokens.is_empty() {
        boards.push(board_from_tokens(&tokens)?);
    }

    Ok(boards)
}

/// Solves independent puzzles across the rayon thread pool, reporting
/// progress on stderr
///
/// Reports come back in input order. Each solve owns its own search
/// state, so no locking happens between them.
pub fn solve_all(boards: &[Board]) -> Vec<RunReport> {
    let progress = ProgressBar::new(boards.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("Solving puzzles: {bar:40.cyan/blue} {pos}/{len} ~{eta} remaining")
            .progress_chars("█▓▒░  "),
    );

    let reports: Vec<RunReport> = boards
        .par_iter()
        .map(|&board| {
            let start_time = Instant::now();
            let outcome = Solver::new(board).solve();
            let duration = start_time.elapsed();

            progress.inc(1);
            RunReport { outcome, duration }
        })
        .collect();

    progress.finish();
    reports
}
