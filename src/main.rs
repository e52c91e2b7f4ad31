use anyhow::Result;
use clap::Parser;
use log::warn;

use std::io::{stdin, stdout, Write};

use connect4_engine::*;

mod display;
use display::*;

/// Two-player Connect 4 in the terminal
#[derive(Debug, Parser)]
#[command(name = "connect4", version)]
struct Args {
    /// Number of rows on the board (at least 4)
    #[arg(long, default_value_t = DEFAULT_ROWS, value_name = "N")]
    rows: usize,

    /// Number of columns on the board (at least 4)
    #[arg(long, default_value_t = DEFAULT_COLUMNS, value_name = "N")]
    columns: usize,
}

enum Command {
    Play(usize),
    Restart,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "r" | "restart" => Some(Command::Restart),
        "q" | "quit" => Some(Command::Quit),
        other => other.parse::<usize>().ok().map(Command::Play),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut engine = GameEngine::new(args.rows, args.columns)?;
    let stdin = stdin();

    println!("Welcome to Connect 4\n");

    // game loop
    loop {
        draw_board(&engine)?;
        draw_banner(engine.status())?;

        if engine.status().is_terminal() {
            print!("r to restart, q to quit > ");
        } else {
            print!("Move input (1-{}), r to restart, q to quit > ", engine.columns());
        }
        stdout().flush()?;

        let mut input_str = String::new();
        if stdin.read_line(&mut input_str)? == 0 {
            // end of input
            break;
        }

        match parse_command(&input_str) {
            Some(Command::Quit) => break,
            Some(Command::Restart) => engine.reset(),
            // columns are 1-indexed for players, 0 can never be valid
            Some(Command::Play(0)) => println!("Invalid move, columns start at 1"),
            Some(Command::Play(column)) => {
                match engine.apply_move(column - 1) {
                    Ok(_) => {}
                    Err(MoveError::InvalidColumn { columns, .. }) => println!(
                        "Invalid move, column {} out of range. Columns must be between 1 and {}",
                        column, columns
                    ),
                    Err(MoveError::ColumnFull(_)) => {
                        println!("Invalid move, column {} full", column)
                    }
                    Err(err) => {
                        warn!("move rejected: {}", err);
                        println!("{}", err);
                    }
                }
            }
            None => println!("Unknown input: {}", input_str.trim()),
        }
    }
    Ok(())
}
