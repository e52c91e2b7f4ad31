use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{Cell, GameEngine, GameStatus, PlayerId};

fn piece_color(cell: &Cell) -> Color {
    match cell {
        Cell::Occupied(PlayerId::Player1) => Color::Red,
        Cell::Occupied(PlayerId::Player2) => Color::Yellow,
        Cell::Empty => Color::DarkBlue,
    }
}

/// Draw the board, top row first, under a row of 1-indexed column numbers
pub fn draw_board(engine: &GameEngine) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=engine.columns())
        .map(|column| format!("{:<2}", column % 10))
        .collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in engine.grid().iter_rows() {
        for cell in row {
            stdout.queue(PrintStyledContent(
                style("O ")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(piece_color(cell)),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}

/// The line shown under the board
pub fn banner(status: GameStatus) -> String {
    match status {
        GameStatus::InProgress(player) => format!("{}'s turn", player),
        GameStatus::Won(player) => format!("{} wins!", player),
        GameStatus::Draw => "Draw!".to_string(),
    }
}

pub fn draw_banner(status: GameStatus) -> Result<()> {
    let mut stdout = stdout();
    let text = banner(status);
    let styled = match status {
        GameStatus::Won(player) => style(text + "\n")
            .attribute(Attribute::Bold)
            .with(piece_color(&Cell::Occupied(player))),
        _ => style(text + "\n"),
    };
    stdout.queue(PrintStyledContent(styled))?;
    stdout.flush()?;
    Ok(())
}
