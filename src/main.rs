use anyhow::{anyhow, Context, Result};

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::time::Duration;

use npuzzle_ai::*;

mod render;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let path = args
        .get(1)
        .ok_or_else(|| anyhow!("usage: npuzzle_cli <input file>"))?;

    let file = File::open(path).with_context(|| format!("failed to open input file {}", path))?;
    let boards = parse_boards(BufReader::new(file))?;
    if boards.is_empty() {
        return Err(anyhow!("no puzzles found in {}", path));
    }

    println!("Running for {} puzzle input(s)...", boards.len());
    let reports = solve_all(&boards);

    for (i, report) in reports.iter().enumerate() {
        println!("\nSolution for puzzle {}", i + 1);
        match &report.outcome {
            Outcome::Solved(solution) => {
                render::draw_solution(solution)?;
                println!("Expanded {} nodes", solution.nodes_expanded);
            }
            Outcome::Exhausted { nodes_expanded } => {
                println!(
                    "No solution exists, proven after expanding {} nodes",
                    nodes_expanded
                );
            }
        }
    }

    let mut total = Duration::new(0, 0);
    for (i, report) in reports.iter().enumerate() {
        println!(
            "Puzzle {} took {:.3} ms",
            i + 1,
            report.duration.as_secs_f64() * 1000.0
        );
        total += report.duration;
    }
    println!("Took {:.3} ms in total", total.as_secs_f64() * 1000.0);

    Ok(())
}
