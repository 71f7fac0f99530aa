use std::fmt;
use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A placed symbol.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Always opens the game.
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Character used by the board notation.
    pub fn symbol(&self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '.',
        }
    }

    fn from_symbol(ch: char) -> Option<Cell> {
        match ch {
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// The 3x3 grid, row-major:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
///
/// `Board` is a plain value. Moves produce a new board through
/// [`apply_move`](crate::apply_move); nothing mutates a board in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// An all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding exactly `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Copy of this board with `index` overwritten. Caller checks bounds.
    pub(crate) fn with_cell(mut self, index: usize, cell: Cell) -> Self {
        self.cells[index] = cell;
        self
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for cell in chunk {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum ParseBoardError {
    #[display("expected 9 cells, found {found}")]
    InvalidLength { found: usize },
    #[display("invalid cell character {ch:?} at cell {position}")]
    InvalidChar { ch: char, position: usize },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cell characters, ignoring whitespace and `|` separators.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut found = 0;
        for ch in s.chars().filter(|c| !c.is_ascii_whitespace() && *c != '|') {
            let cell =
                Cell::from_symbol(ch).ok_or(ParseBoardError::InvalidChar { ch, position: found })?;
            if found < CELL_COUNT {
                cells[found] = cell;
            }
            found += 1;
        }
        if found != CELL_COUNT {
            return Err(ParseBoardError::InvalidLength { found });
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Cell::Empty), 9);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn get_out_of_range() {
        assert_eq!(Board::new().get(9), None);
        assert_eq!(Board::new().get(8), Some(Cell::Empty));
    }

    #[test]
    fn with_cell_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_cell(4, Cell::X);
        assert_eq!(board.get(4), Some(Cell::Empty));
        assert_eq!(next.get(4), Some(Cell::X));
    }

    #[test]
    fn parse_accepts_separators_and_case() {
        let board: Board = "x|o|.\n_ X -\nO o x".parse().unwrap();
        assert_eq!(
            board.cells(),
            &[
                Cell::X,
                Cell::O,
                Cell::Empty,
                Cell::Empty,
                Cell::X,
                Cell::Empty,
                Cell::O,
                Cell::O,
                Cell::X,
            ]
        );
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(ParseBoardError::InvalidLength { found: 2 })
        );
        assert_eq!(
            "XOXOXOXOXO".parse::<Board>(),
            Err(ParseBoardError::InvalidLength { found: 10 })
        );
    }

    #[test]
    fn parse_rejects_unknown_char() {
        assert_eq!(
            "XO.Z.....".parse::<Board>(),
            Err(ParseBoardError::InvalidChar { ch: 'Z', position: 3 })
        );
    }

    #[test]
    fn display_renders_rows() {
        let board: Board = "XO. ... ..O".parse().unwrap();
        assert_eq!(board.to_string(), "XO.\n...\n..O");
    }

    #[test]
    fn cell_mark_conversion() {
        assert_eq!(Cell::from(Mark::X).mark(), Some(Mark::X));
        assert_eq!(Cell::from(Mark::O).mark(), Some(Mark::O));
        assert_eq!(Cell::Empty.mark(), None);
        assert_eq!(Mark::X.opponent(), Mark::O);
    }

    #[test]
    fn serializes_as_cell_array() {
        let board: Board = "X........".parse().unwrap();
        let json = serde_json::to_value(board).unwrap();
        assert_eq!(json["cells"][0], "X");
        assert_eq!(json["cells"][8], "Empty");
    }
}
