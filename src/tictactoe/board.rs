//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{encoding::StateKey, lines::LineAnalyzer};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    O,
    X,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::O => 'O',
            Cell::X => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'O' | 'o' | '0' => Some(Cell::O),
            'X' | 'x' => Some(Cell::X),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::O => Some(Mark::O),
            Cell::X => Some(Mark::X),
            Cell::Empty => None,
        }
    }
}

/// The symbol a player places on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    O,
    X,
}

impl Mark {
    /// Get the opposing mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::O => Mark::X,
            Mark::X => Mark::O,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::O => Cell::O,
            Mark::X => Cell::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::O => "O",
            Mark::X => "X",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mark {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "O" | "o" => Ok(Mark::O),
            "X" | "x" => Ok(Mark::X),
            other => Err(crate::Error::InvalidMark {
                mark: other.to_string(),
            }),
        }
    }
}

/// A (row, col) coordinate on the 3x3 board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Coordinate of a row-major index (0-8)
    pub const fn from_index(index: usize) -> Self {
        Coord {
            row: index / 3,
            col: index % 3,
        }
    }

    /// Row-major index (0-8)
    pub const fn index(self) -> usize {
        self.row * 3 + self.col
    }

    pub const fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// All nine coordinates in row-major scan order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..9).map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 tic-tac-toe board
///
/// Cells are stored in row-major order. A placed mark is never removed;
/// hypothetical placements go through [`Board::with_mark`], which returns a
/// copy and leaves the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Build a board directly from its nine row-major cells
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// Whitespace is ignored, so `"OO. ... ..."` and `"OO......."` are the
    /// same board. Empty cells are written as `.`, `-` or `_`.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 9 cells or contains
    /// a character that is not a cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get the cell at a coordinate
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Check if a coordinate is empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Place a mark on an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the coordinate is off the
    /// board or already occupied.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), crate::Error> {
        if !coord.in_bounds() || !self.is_empty(coord) {
            return Err(crate::Error::InvalidMove {
                row: coord.row,
                col: coord.col,
            });
        }
        self.cells[coord.index()] = mark.to_cell();
        Ok(())
    }

    /// Copy of this board with `mark` placed at `coord`.
    ///
    /// The caller is responsible for `coord` being empty; an occupied cell
    /// is overwritten in the copy only.
    #[must_use = "with_mark returns a new board; the original is unchanged"]
    pub fn with_mark(&self, coord: Coord, mark: Mark) -> Board {
        let mut next = *self;
        next.cells[coord.index()] = mark.to_cell();
        next
    }

    /// Empty coordinates in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::all().filter(|&c| self.is_empty(c)).collect()
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Winning mark, if any line is complete
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winner(&self.cells)
    }

    /// State key used to index the state-value table
    pub fn key(&self) -> StateKey {
        StateKey::encode(self)
    }

    /// Multi-line rendering with cell separators, as shown during play.
    pub fn render(&self) -> String {
        let row = |r: usize| {
            (0..3)
                .map(|c| match self.get(Coord::new(r, c)) {
                    Cell::Empty => ' ',
                    cell => cell.to_char(),
                })
                .map(|ch| format!(" {ch} "))
                .collect::<Vec<_>>()
                .join("|")
        };
        format!("{}\n-----------\n{}\n-----------\n{}", row(0), row(1), row(2))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
