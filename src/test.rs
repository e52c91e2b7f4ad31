#[cfg(test)]
pub mod test {
    use anyhow::Result;

    use crate::{Cell, GameEngine, GameStatus, MoveError, PlayerId};

    // fills a 6x7 board without any line of four, player 2 finishing in the third column
    const DRAW_GAME: &str = "256426457127755361771411454217542236336633";

    fn column_cells(engine: &GameEngine, column: usize) -> Vec<Cell> {
        (0..engine.rows())
            .filter_map(|row| engine.grid().get(row, column))
            .collect()
    }

    #[test]
    pub fn gravity() -> Result<()> {
        let mut engine = GameEngine::default();
        for k in 1..=engine.rows() {
            engine.apply_move(2)?;
            let cells = column_cells(&engine, 2);
            let (empty, filled) = cells.split_at(engine.rows() - k);
            assert!(empty.iter().all(Cell::is_empty));
            assert!(filled.iter().all(|cell| !cell.is_empty()));
        }
        Ok(())
    }

    #[test]
    pub fn turn_alternation() -> Result<()> {
        let mut engine = GameEngine::default();
        let mut expected = PlayerId::Player1;
        for &column in [3, 3, 4, 2, 5, 1].iter() {
            assert_eq!(engine.current_player(), expected);
            let placement = engine.apply_move(column)?;
            expected = expected.other();
            assert_eq!(placement.status, GameStatus::InProgress(expected));
        }
        assert_eq!(engine.current_player(), PlayerId::Player1);
        Ok(())
    }

    #[test]
    pub fn vertical_win() -> Result<()> {
        // player 1 stacks column 0, player 2 answers in column 6
        let mut engine = GameEngine::default();
        for _ in 0..3 {
            engine.apply_move(0)?;
            engine.apply_move(6)?;
        }
        let placement = engine.apply_move(0)?;

        assert_eq!(placement.row, 2);
        assert_eq!(placement.status, GameStatus::Won(PlayerId::Player1));
        assert_eq!(engine.status(), GameStatus::Won(PlayerId::Player1));
        Ok(())
    }

    #[test]
    pub fn diagonal_win() -> Result<()> {
        // player 1 ends on (5,0), (4,1), (3,2), (2,3)
        let mut engine = GameEngine::default();
        for &column in [0, 1, 1, 2, 2, 3, 2, 3, 3, 6].iter() {
            let placement = engine.apply_move(column)?;
            assert!(!placement.status.is_terminal());
        }
        let placement = engine.apply_move(3)?;

        assert_eq!((placement.row, placement.column), (2, 3));
        assert_eq!(placement.status, GameStatus::Won(PlayerId::Player1));
        for &(row, column) in [(5, 0), (4, 1), (3, 2), (2, 3)].iter() {
            assert_eq!(
                engine.grid().get(row, column),
                Some(Cell::Occupied(PlayerId::Player1))
            );
        }
        Ok(())
    }

    #[test]
    pub fn full_board_draw() -> Result<()> {
        let mut engine = GameEngine::from_moves(6, 7, &DRAW_GAME[..41])?;
        assert_eq!(engine.status(), GameStatus::InProgress(PlayerId::Player2));

        let placement = engine.apply_move(2)?;
        assert_eq!((placement.row, placement.column), (0, 2));
        assert_eq!(placement.status, GameStatus::Draw);
        assert_eq!(engine.status(), GameStatus::Draw);
        assert_eq!(engine.winner(), None);
        assert_eq!(engine.moves_played(), 42);
        assert!(engine.grid().is_full());
        Ok(())
    }

    #[test]
    pub fn full_column_is_rejected() -> Result<()> {
        let mut engine = GameEngine::from_moves(6, 7, "444444")?;
        let grid = engine.grid().clone();
        let status = engine.status();

        assert_eq!(engine.is_valid_move(3), Ok(false));
        assert_eq!(engine.apply_move(3), Err(MoveError::ColumnFull(3)));
        assert_eq!(engine.grid(), &grid);
        assert_eq!(engine.status(), status);
        Ok(())
    }

    #[test]
    pub fn no_moves_after_the_game_ends() -> Result<()> {
        let mut won = GameEngine::from_moves(6, 7, "1717171")?;
        let grid = won.grid().clone();
        assert_eq!(won.apply_move(2), Err(MoveError::GameOver));
        assert_eq!(won.apply_move(9), Err(MoveError::GameOver));
        assert_eq!(won.grid(), &grid);
        assert_eq!(won.status(), GameStatus::Won(PlayerId::Player1));

        let mut drawn = GameEngine::from_moves(6, 7, DRAW_GAME)?;
        let grid = drawn.grid().clone();
        assert_eq!(drawn.apply_move(0), Err(MoveError::GameOver));
        assert_eq!(drawn.grid(), &grid);
        assert_eq!(drawn.status(), GameStatus::Draw);
        Ok(())
    }

    #[test]
    pub fn reset_restores_initial_state() -> Result<()> {
        let fresh = GameEngine::new(5, 8)?;
        for moves in ["", "1", "1212", "1717171", "88888"].iter() {
            let mut engine = GameEngine::from_moves(5, 8, moves)?;
            engine.reset();
            assert_eq!(engine.grid(), fresh.grid());
            assert_eq!(engine.current_player(), PlayerId::Player1);
            assert_eq!(engine.status(), GameStatus::InProgress(PlayerId::Player1));
            engine.reset();
            assert_eq!(engine.grid(), fresh.grid());
            assert_eq!((engine.rows(), engine.columns()), (5, 8));
        }
        Ok(())
    }

    #[test]
    pub fn player_two_can_win() -> Result<()> {
        // player 2 completes the bottom row from column 2 to 5
        let engine = GameEngine::from_moves(6, 7, "13142526")?;
        assert_eq!(engine.status(), GameStatus::Won(PlayerId::Player2));
        assert_eq!(engine.current_player(), PlayerId::Player2);
        Ok(())
    }
}
