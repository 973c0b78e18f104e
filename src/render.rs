use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use npuzzle_ai::{Board, Solution};

/// Draws a board as a coloured grid, the blank as a dark cell
pub fn draw_board(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    for (i, &tile) in board.tiles().iter().enumerate() {
        let cell = if tile != 0 {
            style(format!("{:>3} ", tile))
                .attribute(Attribute::Bold)
                .on(Color::DarkBlue)
                .with(Color::White)
        } else {
            style("    ".to_string())
                .on(Color::DarkBlue)
                .with(Color::DarkBlue)
        };
        stdout.queue(PrintStyledContent(cell))?;

        if (i + 1) % board.side() == 0 {
            stdout.queue(PrintStyledContent(style("\n".to_string())))?;
        }
    }
    stdout.flush()?;
    Ok(())
}

/// Prints every step of a solution, the move name above each board
pub fn draw_solution(solution: &Solution) -> Result<()> {
    for step in solution.steps.iter() {
        println!("{}", step.action);
        draw_board(&step.board)?;
    }
    println!("Solved in {} steps", solution.move_count());
    Ok(())
}
