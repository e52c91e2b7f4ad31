//! A rules engine for the board game 'Connect 4'
//!
//! The engine owns the grid, the player to move and the game status. Pieces
//! fall to the lowest empty cell of the chosen column, and the first player to
//! line up four pieces horizontally, vertically or diagonally wins.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{GameEngine, GameStatus, PlayerId};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut engine = GameEngine::default();
//! for column in [0, 6, 0, 6, 0, 6].iter() {
//!     engine.apply_move(*column)?;
//! }
//! let placement = engine.apply_move(0)?;
//!
//! assert_eq!((placement.row, placement.column), (2, 0));
//! assert_eq!(placement.status, GameStatus::Won(PlayerId::Player1));
//!# Ok(())
//!# }
//! ```

use static_assertions::*;

pub mod board;

pub mod engine;

pub mod error;

mod test;

pub use board::{Cell, Grid, PlayerId};
pub use engine::{GameEngine, GameStatus, MoveResult, Placement};
pub use error::{ConfigError, EngineError, MoveError};

/// The default number of rows on a new board
pub const DEFAULT_ROWS: usize = 6;

/// The default number of columns on a new board
pub const DEFAULT_COLUMNS: usize = 7;

/// The number of aligned pieces needed to win
pub const WIN_LENGTH: usize = 4;

// a board smaller than the win length in either direction can never be won
const_assert!(DEFAULT_ROWS >= WIN_LENGTH);
const_assert!(DEFAULT_COLUMNS >= WIN_LENGTH);
