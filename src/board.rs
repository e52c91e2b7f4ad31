use std::fmt;

use crate::error::ConfigError;
use crate::WIN_LENGTH;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }

    /// The 1-based player number shown to users
    pub fn number(self) -> u8 {
        match self {
            PlayerId::Player1 => 1,
            PlayerId::Player2 => 2,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<PlayerId> {
        match self {
            Cell::Occupied(player) => Some(*player),
            Cell::Empty => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

/// The four lines a win can lie on, as (row step, column step)
const AXES: [(isize, isize); 4] = [
    // horizontal
    (0, 1),
    // vertical
    (1, 0),
    // diagonal, top-left to bottom-right
    (1, 1),
    // diagonal, top-right to bottom-left
    (1, -1),
];

/// A fixed-size grid of cells.
///
/// Cells are stored row by row, with row 0 at the top of the board and
/// row `rows - 1` at the bottom.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    rows: usize,
    columns: usize,
}

impl Grid {
    /// Create an empty grid. Both dimensions must be at least the win length.
    pub fn new(rows: usize, columns: usize) -> Result<Self, ConfigError> {
        if rows < WIN_LENGTH || columns < WIN_LENGTH {
            return Err(ConfigError::TooSmall {
                rows,
                columns,
                minimum: WIN_LENGTH,
            });
        }
        Ok(Self::empty(rows, columns))
    }

    // callers guarantee dimensions that already passed `new`
    pub(crate) fn empty(rows: usize, columns: usize) -> Self {
        Self {
            cells: vec![Cell::Empty; rows * columns],
            rows,
            columns,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a position, or `None` if it lies off the board
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.rows && column < self.columns {
            Some(self.cells[row * self.columns + column])
        } else {
            None
        }
    }

    /// Iterate over the board one row at a time, top row first
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    /// A column can take another piece while its top cell is empty
    pub fn playable(&self, column: usize) -> bool {
        column < self.columns && self.cells[column].is_empty()
    }

    /// The board is full once every top cell is taken
    pub fn is_full(&self) -> bool {
        self.cells[..self.columns].iter().all(|cell| !cell.is_empty())
    }

    /// Number of pieces on the board
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Drop a piece into a column and return the row it lands in.
    ///
    /// Returns `None` without touching the grid if the column is off the
    /// board or already full.
    pub fn drop_piece(&mut self, column: usize, player: PlayerId) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        // scan upwards from the bottom row for the first free cell
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.cells[row * self.columns + column].is_empty())?;
        self.cells[row * self.columns + column] = Cell::Occupied(player);
        Some(row)
    }

    /// Length of the run through `(row, column)` along one axis, counting
    /// the cell itself. Zero if the cell is empty or off the board.
    pub fn run_length(&self, row: usize, column: usize, (d_row, d_col): (isize, isize)) -> usize {
        let player = match self.get(row, column) {
            Some(Cell::Occupied(player)) => player,
            _ => return 0,
        };

        let mut run = 1;
        for &sign in [-1isize, 1].iter() {
            let mut r = row as isize + sign * d_row;
            let mut c = column as isize + sign * d_col;
            while r >= 0
                && c >= 0
                && self.get(r as usize, c as usize) == Some(Cell::Occupied(player))
            {
                run += 1;
                r += sign * d_row;
                c += sign * d_col;
            }
        }
        run
    }

    /// Check whether the piece at `(row, column)` completes a line of four
    pub fn is_winning_cell(&self, row: usize, column: usize) -> bool {
        AXES.iter()
            .any(|&axis| self.run_length(row, column, axis) >= WIN_LENGTH)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(PlayerId::Player1) => '1',
                    Cell::Occupied(PlayerId::Player2) => '2',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
