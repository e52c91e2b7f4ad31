use log::{debug, info};

use crate::board::{Grid, PlayerId};
use crate::error::{ConfigError, EngineError, MoveError};
use crate::{DEFAULT_COLUMNS, DEFAULT_ROWS};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    InProgress(PlayerId),
    Won(PlayerId),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Where a piece landed and the status it left the game in
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub status: GameStatus,
}

pub type MoveResult = Result<Placement, MoveError>;

/// Widest board a single-digit move string can address
const MAX_NOTATION_COLUMNS: usize = 9;

/// A single game of Connect 4.
///
/// Mutation goes through [`apply_move`](GameEngine::apply_move) and
/// [`reset`](GameEngine::reset); everything else is a read-only view.
#[derive(Clone, Debug)]
pub struct GameEngine {
    grid: Grid,
    current_player: PlayerId,
    status: GameStatus,
}

impl GameEngine {
    /// Create an empty board with Player 1 to move.
    ///
    /// Both dimensions must be at least the win length, otherwise no game on
    /// the board could ever be won.
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        Ok(Self::with_grid(Grid::new(rows, columns)?))
    }

    /// Replay a string of 1-indexed column digits, e.g. `"4453"`.
    ///
    /// One digit per move, so boards wider than 9 columns are refused.
    pub fn from_moves<S: AsRef<str>>(
        rows: usize,
        columns: usize,
        moves: S,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(rows, columns)?;
        if columns > MAX_NOTATION_COLUMNS {
            return Err(EngineError::NotationTooWide(columns));
        }

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => {
                    engine.apply_move(column - 1)?;
                }
                _ => return Err(EngineError::Parse(column_char)),
            }
        }
        Ok(engine)
    }

    fn with_grid(grid: Grid) -> Self {
        Self {
            grid,
            current_player: PlayerId::Player1,
            status: GameStatus::InProgress(PlayerId::Player1),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn moves_played(&self) -> usize {
        self.grid.occupied()
    }

    /// Whether `column` can take another piece. Says nothing about whether
    /// the game is still running.
    pub fn is_valid_move(&self, column: usize) -> Result<bool, MoveError> {
        self.check_column(column)?;
        Ok(self.grid.playable(column))
    }

    /// Columns that would accept a move right now
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        (0..self.columns())
            .filter(|&column| self.grid.playable(column))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// On error the engine is left exactly as it was.
    pub fn apply_move(&mut self, column: usize) -> MoveResult {
        if self.status.is_terminal() {
            return Err(MoveError::GameOver);
        }
        self.check_column(column)?;

        let player = self.current_player;
        let mut grid = self.grid.clone();
        let row = grid
            .drop_piece(column, player)
            .ok_or(MoveError::ColumnFull(column))?;

        let status = if grid.is_winning_cell(row, column) {
            GameStatus::Won(player)
        } else if grid.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress(player.other())
        };

        debug!("{} played column {}, landed in row {}", player, column, row);
        match status {
            GameStatus::Won(winner) => info!("{} wins after {} moves", winner, grid.occupied()),
            GameStatus::Draw => info!("game drawn, board is full"),
            GameStatus::InProgress(next) => self.current_player = next,
        }

        self.grid = grid;
        self.status = status;

        Ok(Placement {
            row,
            column,
            status,
        })
    }

    /// Clear the board and hand the first move back to Player 1
    pub fn reset(&mut self) {
        debug!("resetting {}x{} board", self.rows(), self.columns());
        *self = Self::with_grid(Grid::empty(self.rows(), self.columns()));
    }

    fn check_column(&self, column: usize) -> Result<(), MoveError> {
        if column < self.columns() {
            Ok(())
        } else {
            Err(MoveError::InvalidColumn {
                column,
                columns: self.columns(),
            })
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::with_grid(Grid::empty(DEFAULT_ROWS, DEFAULT_COLUMNS))
    }
}
