/// Reasons a move is refused. A refused move never changes the game.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} out of range, the board has {columns} columns")]
    InvalidColumn { column: usize, columns: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("the game is over, reset to play again")]
    GameOver,
}

/// Errors that can occur when setting up a board.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("a {rows}x{columns} board is too small, rows and columns must be at least {minimum}")]
    TooSmall {
        rows: usize,
        columns: usize,
        minimum: usize,
    },
}

/// Errors that can occur when replaying a move string.
#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum EngineError {
    #[error("could not parse '{0}' as a valid move")]
    Parse(char),

    #[error("move strings only address columns 1 to 9, the board has {0} columns")]
    NotationTooWide(usize),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Move(#[from] MoveError),
}
