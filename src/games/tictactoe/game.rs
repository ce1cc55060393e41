//! Tic-tac-toe rules.
//!
//! The board is nine cells in row-major order:
//!
//! ```text
//!  0 | 1 | 2
//!  3 | 4 | 5
//!  6 | 7 | 8
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{MoveError, Side};
use crate::rules::RulesEngine;
use crate::search::{MoveList, SearchPosition};

/// Number of cells.
pub const CELLS: usize = 9;

/// Cell contents, row-major.
pub type Grid = [Option<Letter>; CELLS];

/// The two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Letter {
    X,
    O,
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Side for Letter {
    const BOTH: [Self; 2] = [Letter::X, Letter::O];

    fn opponent(self) -> Self {
        match self {
            Letter::X => Letter::O,
            Letter::O => Letter::X,
        }
    }

    fn symbol(self) -> char {
        match self {
            Letter::X => 'X',
            Letter::O => 'O',
        }
    }
}

/// Tic-tac-toe game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToe {
    board: Grid,
    winner: Option<Letter>,
}

/// What `SearchPosition::apply` changed.
#[derive(Clone, Copy, Debug)]
pub struct TicTacToeUndo {
    cell: usize,
    winner: Option<Letter>,
}

impl TicTacToe {
    /// Empty board, no winner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Indices of empty cells, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.empty_cells().collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty_cells().count()
    }

    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.board.iter().all(Option::is_some)
    }

    /// Board as wire symbols (`'X'`, `'O'`, `' '`).
    #[must_use]
    pub fn symbols(&self) -> [char; CELLS] {
        self.board.map(|cell| cell.map_or(' ', Letter::symbol))
    }

    fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    fn place(&mut self, cell: usize, letter: Letter) {
        self.board[cell] = Some(letter);
        if self.completes_line(cell, letter) {
            self.winner = Some(letter);
        }
    }

    /// Does `cell` finish a row, column or diagonal of `letter`?
    ///
    /// Only even cells lie on a diagonal, so odd cells skip that check.
    fn completes_line(&self, cell: usize, letter: Letter) -> bool {
        let owns = |i: usize| self.board[i] == Some(letter);

        let row = cell / 3 * 3;
        if (row..row + 3).all(owns) {
            return true;
        }

        let col = cell % 3;
        if (0..3).map(|i| col + i * 3).all(owns) {
            return true;
        }

        if cell % 2 == 0 {
            if [0, 4, 8].into_iter().all(owns) {
                return true;
            }
            if [2, 4, 6].into_iter().all(owns) {
                return true;
            }
        }

        false
    }
}

impl RulesEngine for TicTacToe {
    type Side = Letter;
    type Move = usize;
    type Grid = Grid;

    const NAME: &'static str = "tictactoe";

    fn new_game() -> Self {
        Self::new()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn board(&self) -> &Grid {
        &self.board
    }

    fn try_move(&mut self, cell: usize, letter: Letter) -> Result<(), MoveError> {
        if cell >= CELLS {
            return Err(MoveError::OutOfBounds);
        }
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        if self.board[cell].is_some() {
            return Err(MoveError::Occupied);
        }
        self.place(cell, letter);
        Ok(())
    }

    fn legal_moves(&self, _side: Letter) -> Vec<usize> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.available_moves()
    }

    fn winner(&self) -> Option<Letter> {
        self.winner
    }

    fn game_over(&self) -> bool {
        self.winner.is_some() || self.is_board_full()
    }
}

impl SearchPosition for TicTacToe {
    type Side = Letter;
    type Move = usize;
    type Undo = TicTacToeUndo;

    fn candidate_moves(&self, _side: Letter) -> MoveList<usize> {
        if self.winner.is_some() {
            return MoveList::new();
        }
        self.empty_cells().collect()
    }

    fn apply(&mut self, cell: usize, letter: Letter) -> TicTacToeUndo {
        let undo = TicTacToeUndo {
            cell,
            winner: self.winner,
        };
        self.place(cell, letter);
        undo
    }

    fn revert(&mut self, undo: TicTacToeUndo) {
        self.board[undo.cell] = None;
        self.winner = undo.winner;
    }

    fn is_terminal(&self) -> bool {
        self.game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut TicTacToe, moves: &[(usize, Letter)]) {
        for &(cell, letter) in moves {
            assert!(game.make_move(cell, letter), "move {cell} for {letter} rejected");
        }
    }

    #[test]
    fn test_new_game() {
        let game = TicTacToe::new_game();
        assert_eq!(game.available_moves(), (0..9).collect::<Vec<_>>());
        assert_eq!(game.winner(), None);
        assert!(!game.game_over());
        assert_eq!(game.symbols(), [' '; 9]);
    }

    #[test]
    fn test_row_win() {
        let mut game = TicTacToe::new();
        play(
            &mut game,
            &[(3, Letter::X), (0, Letter::O), (4, Letter::X), (1, Letter::O), (5, Letter::X)],
        );
        assert_eq!(game.winner(), Some(Letter::X));
        assert!(game.game_over());
    }

    #[test]
    fn test_column_win_from_odd_cell() {
        let mut game = TicTacToe::new();
        play(
            &mut game,
            &[(1, Letter::O), (0, Letter::X), (4, Letter::O), (2, Letter::X), (7, Letter::O)],
        );
        assert_eq!(game.winner(), Some(Letter::O));
    }

    #[test]
    fn test_both_diagonals() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, Letter::X), (4, Letter::X), (8, Letter::X)]);
        assert_eq!(game.winner(), Some(Letter::X));

        let mut game = TicTacToe::new();
        play(&mut game, &[(2, Letter::O), (6, Letter::O), (4, Letter::O)]);
        assert_eq!(game.winner(), Some(Letter::O));
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = TicTacToe::new();
        assert!(game.make_move(4, Letter::X));
        let before = game.clone();

        assert_eq!(game.try_move(4, Letter::O), Err(MoveError::Occupied));
        assert!(!game.make_move(4, Letter::X));
        assert_eq!(game, before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = TicTacToe::new();
        assert_eq!(game.try_move(9, Letter::X), Err(MoveError::OutOfBounds));
        assert_eq!(game, TicTacToe::new());
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, Letter::X), (1, Letter::X), (2, Letter::X)]);
        let before = game.clone();

        assert_eq!(game.try_move(4, Letter::O), Err(MoveError::GameOver));
        assert_eq!(game, before);
        assert!(game.legal_moves(Letter::O).is_empty());
    }

    #[test]
    fn test_draw() {
        let mut game = TicTacToe::new();
        // X O X / X O O / O X X
        play(
            &mut game,
            &[
                (0, Letter::X),
                (1, Letter::O),
                (2, Letter::X),
                (4, Letter::O),
                (3, Letter::X),
                (5, Letter::O),
                (7, Letter::X),
                (6, Letter::O),
                (8, Letter::X),
            ],
        );
        assert_eq!(game.winner(), None);
        assert!(game.is_board_full());
        assert!(game.game_over());
        assert_eq!(game.result(), Some(crate::rules::GameResult::Draw));
    }

    #[test]
    fn test_reset() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, Letter::X), (4, Letter::X), (8, Letter::X)]);
        game.reset();
        assert_eq!(game, TicTacToe::new());
    }

    #[test]
    fn test_apply_and_revert() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, Letter::X), (1, Letter::X)]);
        let before = game.clone();

        let undo = game.apply(2, Letter::X);
        assert_eq!(game.winner(), Some(Letter::X));
        game.revert(undo);

        assert_eq!(game, before);
    }

    #[test]
    fn test_symbols() {
        let mut game = TicTacToe::new();
        play(&mut game, &[(0, Letter::X), (8, Letter::O)]);
        let symbols = game.symbols();
        assert_eq!(symbols[0], 'X');
        assert_eq!(symbols[8], 'O');
        assert_eq!(symbols[4], ' ');
    }
}
