//! Chess-variant rules.
//!
//! Standard pieces and starting layout, pseudo-legal moves only. There is no
//! castling, en passant, promotion or check detection: the game ends when a
//! king is captured.
//!
//! `grid[row][col]`, Black's back rank on row 0, White's on row 7. White
//! moves first and its pawns advance toward row 0.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{MoveError, Side};
use crate::rules::RulesEngine;
use crate::search::{MoveList, Score, SearchPosition};

/// Board edge length.
pub const SIZE: usize = 8;

/// Cell contents, `grid[row][col]`.
pub type Grid = [[Option<Piece>; SIZE]; SIZE];

/// The two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Side for Color {
    const BOTH: [Self; 2] = [Color::White, Color::Black];

    fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl Color {
    /// Row delta of a pawn step.
    fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    fn pawn_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    const BACK_RANK: [PieceKind; SIZE] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Material value. The king outweighs everything else combined.
    #[must_use]
    pub const fn value(self) -> Score {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight | PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }

    /// Uppercase letter (`'P'`, `'N'`, `'B'`, `'R'`, `'Q'`, `'K'`).
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Some(match letter {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return None,
        })
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[must_use]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Wire symbol: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn symbol(self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Parse a wire symbol.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let kind = PieceKind::from_letter(symbol.to_ascii_uppercase())?;
        let color = if symbol.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }
}

/// A board coordinate. Not necessarily on the board until checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: usize,
    pub col: usize,
}

impl Square {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn on_board(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    /// The square `(dr, dc)` away, if it is on the board.
    fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let square = Self::new(row, col);
        square.on_board().then_some(square)
    }
}

/// From-square and to-square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    /// Build from the wire quadruple.
    #[must_use]
    pub const fn new(from_row: usize, from_col: usize, to_row: usize, to_col: usize) -> Self {
        Self {
            from: Square::new(from_row, from_col),
            to: Square::new(to_row, to_col),
        }
    }
}

const ROOK_RAYS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
const BISHOP_RAYS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const QUEEN_RAYS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];
const KNIGHT_JUMPS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Chess-variant game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chess {
    board: Grid,
    turn: Color,
    winner: Option<Color>,
}

/// What `SearchPosition::apply` changed.
#[derive(Clone, Copy, Debug)]
pub struct ChessUndo {
    mv: Move,
    moved: Piece,
    captured: Option<Piece>,
    turn: Color,
    winner: Option<Color>,
}

impl Default for Chess {
    fn default() -> Self {
        Self::new()
    }
}

impl Chess {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board: Grid = [[None; SIZE]; SIZE];
        for color in Color::BOTH {
            for (col, kind) in PieceKind::BACK_RANK.into_iter().enumerate() {
                board[color.back_row()][col] = Some(Piece::new(kind, color));
            }
            board[color.pawn_row()] = [Some(Piece::new(PieceKind::Pawn, color)); SIZE];
        }
        Self {
            board,
            turn: Color::White,
            winner: None,
        }
    }

    /// Build a position from eight rows of wire symbols, row 0 first.
    /// `'.'` or `' '` marks an empty square. `None` on a malformed row.
    #[must_use]
    pub fn from_symbols(rows: [&str; SIZE], turn: Color) -> Option<Self> {
        let mut board: Grid = [[None; SIZE]; SIZE];
        for (row, text) in rows.iter().enumerate() {
            if text.chars().count() != SIZE {
                return None;
            }
            for (col, symbol) in text.chars().enumerate() {
                board[row][col] = match symbol {
                    '.' | ' ' => None,
                    other => Some(Piece::from_symbol(other)?),
                };
            }
        }
        Some(Self {
            board,
            turn,
            winner: None,
        })
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Piece on `square`, `None` when empty or off the board.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !square.on_board() {
            return None;
        }
        self.board[square.row][square.col]
    }

    /// Pseudo-legal destinations of the piece on `square`. Empty for an
    /// empty or off-board square. Ignores whose turn it is.
    pub fn get_valid_moves(&self, square: Square) -> Vec<Square> {
        let mut targets = Vec::new();
        if let Some(piece) = self.piece_at(square) {
            self.push_targets(square, piece, &mut targets);
        }
        targets
    }

    /// Every pseudo-legal move for `color`, scanning row by row.
    pub fn all_moves(&self, color: Color) -> Vec<Move> {
        self.moves_for(color).collect()
    }

    /// Board as wire symbols, row 0 first.
    #[must_use]
    pub fn symbols(&self) -> [[char; SIZE]; SIZE] {
        self.board
            .map(|row| row.map(|cell| cell.map_or(' ', Piece::symbol)))
    }

    /// Sum of piece values, own pieces positive.
    #[must_use]
    pub fn material(&self, perspective: Color) -> Score {
        self.board
            .iter()
            .flatten()
            .flatten()
            .map(|piece| {
                let value = piece.kind.value();
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }

    fn moves_for(&self, color: Color) -> impl Iterator<Item = Move> + '_ {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Square::new(row, col)))
            .filter_map(move |from| {
                let piece = self.piece_at(from).filter(|p| p.color == color)?;
                Some((from, piece))
            })
            .flat_map(move |(from, piece)| {
                let mut targets = Vec::new();
                self.push_targets(from, piece, &mut targets);
                targets.into_iter().map(move |to| Move { from, to })
            })
    }

    fn push_targets(&self, from: Square, piece: Piece, out: &mut Vec<Square>) {
        match piece.kind {
            PieceKind::Pawn => self.pawn_targets(from, piece.color, out),
            PieceKind::Knight => self.step_targets(from, piece.color, &KNIGHT_JUMPS, out),
            PieceKind::King => self.step_targets(from, piece.color, &QUEEN_RAYS, out),
            PieceKind::Bishop => self.ray_targets(from, piece.color, &BISHOP_RAYS, out),
            PieceKind::Rook => self.ray_targets(from, piece.color, &ROOK_RAYS, out),
            PieceKind::Queen => self.ray_targets(from, piece.color, &QUEEN_RAYS, out),
        }
    }

    fn pawn_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let forward = color.forward();

        if let Some(one) = from.offset(forward, 0).filter(|&s| self.piece_at(s).is_none()) {
            out.push(one);
            if from.row == color.pawn_row() {
                if let Some(two) = one.offset(forward, 0).filter(|&s| self.piece_at(s).is_none()) {
                    out.push(two);
                }
            }
        }

        for dc in [-1, 1] {
            if let Some(target) = from.offset(forward, dc) {
                if self.piece_at(target).is_some_and(|p| p.color != color) {
                    out.push(target);
                }
            }
        }
    }

    fn step_targets(&self, from: Square, color: Color, steps: &[(isize, isize)], out: &mut Vec<Square>) {
        for &(dr, dc) in steps {
            if let Some(target) = from.offset(dr, dc) {
                if self.piece_at(target).map_or(true, |p| p.color != color) {
                    out.push(target);
                }
            }
        }
    }

    fn ray_targets(&self, from: Square, color: Color, rays: &[(isize, isize)], out: &mut Vec<Square>) {
        for &(dr, dc) in rays {
            let mut cursor = from;
            while let Some(target) = cursor.offset(dr, dc) {
                match self.piece_at(target) {
                    None => out.push(target),
                    Some(blocker) => {
                        if blocker.color != color {
                            out.push(target);
                        }
                        break;
                    }
                }
                cursor = target;
            }
        }
    }

    /// Move the piece, flip the turn and record a king capture.
    fn relocate(&mut self, mv: Move, moved: Piece) -> Option<Piece> {
        let captured = self.board[mv.to.row][mv.to.col].replace(moved);
        self.board[mv.from.row][mv.from.col] = None;
        if captured.is_some_and(|p| p.kind == PieceKind::King) {
            self.winner = Some(moved.color);
        }
        self.turn = moved.color.opponent();
        captured
    }
}

impl RulesEngine for Chess {
    type Side = Color;
    type Move = Move;
    type Grid = Grid;

    const NAME: &'static str = "chess";

    fn new_game() -> Self {
        Self::new()
    }

    fn reset(&mut self) {
        *self = Self::new();
    }

    fn board(&self) -> &Grid {
        &self.board
    }

    fn try_move(&mut self, mv: Move, color: Color) -> Result<(), MoveError> {
        if !mv.from.on_board() || !mv.to.on_board() {
            return Err(MoveError::OutOfBounds);
        }
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }
        let piece = self.piece_at(mv.from).ok_or(MoveError::EmptySquare)?;
        if color != self.turn || piece.color != self.turn {
            return Err(MoveError::WrongTurn);
        }
        if !self.get_valid_moves(mv.from).contains(&mv.to) {
            return Err(MoveError::IllegalDestination);
        }
        self.relocate(mv, piece);
        Ok(())
    }

    fn legal_moves(&self, color: Color) -> Vec<Move> {
        if self.winner.is_some() || color != self.turn {
            return Vec::new();
        }
        self.all_moves(color)
    }

    fn winner(&self) -> Option<Color> {
        self.winner
    }

    fn game_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl SearchPosition for Chess {
    type Side = Color;
    type Move = Move;
    type Undo = ChessUndo;

    fn candidate_moves(&self, color: Color) -> MoveList<Move> {
        if self.winner.is_some() {
            return MoveList::new();
        }
        self.moves_for(color).collect()
    }

    fn apply(&mut self, mv: Move, _color: Color) -> ChessUndo {
        let moved = self
            .piece_at(mv.from)
            .expect("candidate move starts on a piece");
        let (turn, winner) = (self.turn, self.winner);
        let captured = self.relocate(mv, moved);
        ChessUndo {
            mv,
            moved,
            captured,
            turn,
            winner,
        }
    }

    fn revert(&mut self, undo: ChessUndo) {
        let ChessUndo {
            mv,
            moved,
            captured,
            turn,
            winner,
        } = undo;
        self.board[mv.from.row][mv.from.col] = Some(moved);
        self.board[mv.to.row][mv.to.col] = captured;
        self.turn = turn;
        self.winner = winner;
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }
}
