//! Connect-four rules.
//!
//! # Board Layout
//!
//! Row 0 is the top of the board; discs fall toward row 5:
//! ```text
//! Row 0: [ ][ ][ ][ ][ ][ ][ ]  <- Top (a column is playable while this cell is empty)
//! ...
//! Row 5: [ ][ ][ ][ ][ ][ ][ ]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{MoveError, Side};
use crate::rules::RulesEngine;
use crate::search::{MoveList, SearchPosition};

/// Board dimensions
pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Discs in a line needed to win.
pub const CONNECT: usize = 4;

/// Cell contents, `grid[row][col]` with row 0 on top.
pub type Grid = [[Option<Disc>; COLS]; ROWS];

/// The two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    Red,
    Yellow,
}

impl fmt::Display for Disc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Side for Disc {
    const BOTH: [Self; 2] = [Disc::Red, Disc::Yellow];

    fn opponent(self) -> Self {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    fn symbol(self) -> char {
        match self {
            Disc::Red => 'R',
            Disc::Yellow => 'Y',
        }
    }
}

/// Connect-four game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectFour {
    board: Grid,
    winner: Option<Disc>,
}

/// What `SearchPosition::apply` changed.
#[derive(Clone, Copy, Debug)]
pub struct ConnectFourUndo {
    row: usize,
    col: usize,
    winner: Option<Disc>,
}

impl ConnectFour {
    /// Empty board, no winner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A column accepts a disc while its top cell is empty.
    #[must_use]
    pub fn is_valid_move(&self, col: usize) -> bool {
        col < COLS && self.board[0][col].is_none()
    }

    /// Lowest empty row in `col`, `None` when the column is full.
    #[must_use]
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.board[row][col].is_none())
    }

    /// Playable columns, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.open_columns().collect()
    }

    /// True when every top cell is occupied.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        self.board[0].iter().all(Option::is_some)
    }

    /// Discs of `disc` in the center column.
    #[must_use]
    pub fn center_count(&self, disc: Disc) -> usize {
        let center = COLS / 2;
        self.board
            .iter()
            .filter(|row| row[center] == Some(disc))
            .count()
    }

    /// Board as wire symbols (`'R'`, `'Y'`, `' '`), row 0 on top.
    #[must_use]
    pub fn symbols(&self) -> [[char; COLS]; ROWS] {
        self.board
            .map(|row| row.map(|cell| cell.map_or(' ', Disc::symbol)))
    }

    fn open_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(|&col| self.is_valid_move(col))
    }

    /// Place a disc at (row, col) and record a win.
    fn drop_disc(&mut self, row: usize, col: usize, disc: Disc) {
        self.board[row][col] = Some(disc);
        if self.completes_line(row, col, disc) {
            self.winner = Some(disc);
        }
    }

    /// Count contiguous `disc` cells through (row, col) along each axis.
    fn completes_line(&self, row: usize, col: usize, disc: Disc) -> bool {
        const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        AXES.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, disc) + self.run_length(row, col, -dr, -dc, disc)
                >= CONNECT
        })
    }

    /// Same-colored cells strictly beyond (row, col) in one direction.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, disc: Disc) -> usize {
        let mut count = 0;
        let (mut r, mut c) = (row as isize + dr, col as isize + dc);
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.board[r as usize][c as usize] == Some(disc)
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl RulesEngine for ConnectFour {
    type Side = Disc;
    type Move = usize;
    type Grid = Grid;

    const NAME: &'static str = "connectfour";

    fn new_game() -> Self {
        Self::new()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn board(&self) -> &Grid {
        &self.board
    }

    fn try_move(&mut self, col: usize, disc: Disc) -> Result<(), MoveError> {
        if col >= COLS {
            return Err(MoveError::OutOfBounds);
        }
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let row = self.next_open_row(col).ok_or(MoveError::ColumnFull(col))?;
        self.drop_disc(row, col, disc);
        Ok(())
    }

    fn legal_moves(&self, _side: Disc) -> Vec<usize> {
        if self.winner.is_some() {
            return Vec::new();
        }
        self.available_moves()
    }

    fn winner(&self) -> Option<Disc> {
        self.winner
    }

    fn game_over(&self) -> bool {
        self.winner.is_some() || self.is_board_full()
    }
}

impl SearchPosition for ConnectFour {
    type Side = Disc;
    type Move = usize;
    type Undo = ConnectFourUndo;

    fn candidate_moves(&self, _side: Disc) -> MoveList<usize> {
        if self.winner.is_some() {
            return MoveList::new();
        }
        self.open_columns().collect()
    }

    fn apply(&mut self, col: usize, disc: Disc) -> ConnectFourUndo {
        let row = self
            .next_open_row(col)
            .expect("candidate column has an open row");
        let undo = ConnectFourUndo {
            row,
            col,
            winner: self.winner,
        };
        self.drop_disc(row, col, disc);
        undo
    }

    fn revert(&mut self, undo: ConnectFourUndo) {
        self.board[undo.row][undo.col] = None;
        self.winner = undo.winner;
    }

    fn is_terminal(&self) -> bool {
        self.game_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drops(game: &mut ConnectFour, moves: &[(usize, Disc)]) {
        for &(col, disc) in moves {
            assert!(game.make_move(col, disc), "drop in {col} for {disc} rejected");
        }
    }

    #[test]
    fn test_new_game() {
        let game = ConnectFour::new_game();
        assert_eq!(game.available_moves(), (0..COLS).collect::<Vec<_>>());
        assert!(!game.game_over());
        assert_eq!(game.next_open_row(3), Some(ROWS - 1));
    }

    #[test]
    fn test_gravity() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(2, Disc::Red), (2, Disc::Yellow)]);

        assert_eq!(game.board()[5][2], Some(Disc::Red));
        assert_eq!(game.board()[4][2], Some(Disc::Yellow));
        assert_eq!(game.board()[3][2], None);
        assert_eq!(game.next_open_row(2), Some(3));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut game = ConnectFour::new();
        for i in 0..ROWS {
            let disc = if i % 2 == 0 { Disc::Red } else { Disc::Yellow };
            assert!(game.make_move(0, disc));
        }
        let before = game.clone();

        assert!(!game.is_valid_move(0));
        assert_eq!(game.try_move(0, Disc::Red), Err(MoveError::ColumnFull(0)));
        assert_eq!(game, before);
        assert!(!game.available_moves().contains(&0));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = ConnectFour::new();
        assert_eq!(game.try_move(COLS, Disc::Red), Err(MoveError::OutOfBounds));
        assert_eq!(game.next_open_row(COLS), None);
        assert_eq!(game, ConnectFour::new());
    }

    #[test]
    fn test_horizontal_win() {
        let mut game = ConnectFour::new();
        drops(
            &mut game,
            &[
                (0, Disc::Red),
                (0, Disc::Yellow),
                (1, Disc::Red),
                (1, Disc::Yellow),
                (2, Disc::Red),
                (2, Disc::Yellow),
            ],
        );
        assert_eq!(game.winner(), None);
        // Fill the gap last: the run is counted both ways from the new disc.
        drops(&mut game, &[(4, Disc::Red), (5, Disc::Red), (3, Disc::Red)]);
        assert_eq!(game.winner(), Some(Disc::Red));
    }

    #[test]
    fn test_vertical_win() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(6, Disc::Yellow); 4]);
        assert_eq!(game.winner(), Some(Disc::Yellow));
        assert!(game.game_over());
    }

    #[test]
    fn test_diagonal_wins() {
        // Rising to the right: bottom-left (5,0) to (2,3).
        let mut game = ConnectFour::new();
        drops(
            &mut game,
            &[
                (0, Disc::Red),
                (1, Disc::Yellow),
                (1, Disc::Red),
                (2, Disc::Yellow),
                (2, Disc::Yellow),
                (2, Disc::Red),
                (3, Disc::Yellow),
                (3, Disc::Yellow),
                (3, Disc::Yellow),
                (3, Disc::Red),
            ],
        );
        assert_eq!(game.winner(), Some(Disc::Red));

        // Falling to the right: (2,3) down to (5,6).
        let mut game = ConnectFour::new();
        drops(
            &mut game,
            &[
                (6, Disc::Red),
                (5, Disc::Yellow),
                (5, Disc::Red),
                (4, Disc::Yellow),
                (4, Disc::Yellow),
                (4, Disc::Red),
                (3, Disc::Yellow),
                (3, Disc::Yellow),
                (3, Disc::Yellow),
                (3, Disc::Red),
            ],
        );
        assert_eq!(game.winner(), Some(Disc::Red));
    }

    #[test]
    fn test_three_is_not_a_win() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(0, Disc::Red), (1, Disc::Red), (2, Disc::Red)]);
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_full_board_is_a_draw() {
        // Alternating pairs never line up four.
        let rows = ["RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR"];
        let mut game = ConnectFour::new();
        for col in 0..COLS {
            for row in (0..ROWS).rev() {
                let symbol = rows[row].as_bytes()[col] as char;
                let disc = Disc::from_symbol(symbol).unwrap();
                assert!(game.make_move(col, disc));
            }
        }
        assert_eq!(game.winner(), None);
        assert!(game.is_board_full());
        assert!(game.game_over());
        assert!(game.available_moves().is_empty());
        assert_eq!(game.symbols()[0].iter().collect::<String>(), rows[0]);
    }

    #[test]
    fn test_moves_after_win_rejected() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(0, Disc::Red); 4]);
        let before = game.clone();
        assert_eq!(game.try_move(1, Disc::Yellow), Err(MoveError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_center_count() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(3, Disc::Red), (3, Disc::Yellow), (3, Disc::Red), (2, Disc::Red)]);
        assert_eq!(game.center_count(Disc::Red), 2);
        assert_eq!(game.center_count(Disc::Yellow), 1);
    }

    #[test]
    fn test_apply_and_revert() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(3, Disc::Red), (3, Disc::Red), (3, Disc::Red)]);
        let before = game.clone();

        let undo = game.apply(3, Disc::Red);
        assert_eq!(game.winner(), Some(Disc::Red));
        game.revert(undo);

        assert_eq!(game, before);
    }

    #[test]
    fn test_reset() {
        let mut game = ConnectFour::new();
        drops(&mut game, &[(0, Disc::Red); 4]);
        game.reset();
        assert_eq!(game, ConnectFour::new());
    }
}
