use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::scenario::SearchError;

/// Side length of the board.
pub const SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Mark {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(SearchError::invalid(format!("unknown mark {other:?}"))),
        }
    }
}

/// A board cell, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn in_bounds(self) -> bool {
        self.row < SIZE && self.col < SIZE
    }

    #[inline]
    fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE * SIZE).map(|i| Cell::new(i / SIZE, i % SIZE))
    }
}

const fn c(row: usize, col: usize) -> Cell {
    Cell::new(row, col)
}

/// Rows, columns, then both diagonals.
const LINES: [[Cell; 3]; 8] = [
    [c(0, 0), c(0, 1), c(0, 2)],
    [c(1, 0), c(1, 1), c(1, 2)],
    [c(2, 0), c(2, 1), c(2, 2)],
    [c(0, 0), c(1, 0), c(2, 0)],
    [c(0, 1), c(1, 1), c(2, 1)],
    [c(0, 2), c(1, 2), c(2, 2)],
    [c(0, 0), c(1, 1), c(2, 2)],
    [c(0, 2), c(1, 1), c(2, 0)],
];

/// A 3x3 Tic-Tac-Toe grid.
///
/// Text form: nine symbols `X`, `O` and `-` (or `.`) in row-major order; whitespace, `/` and
/// `|` are ignored, so `"XX-/OO-/---"` and a three-line block both parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grid {
    cells: [Option<Mark>; SIZE * SIZE],
}

impl Grid {
    pub const EMPTY: Grid = Grid {
        cells: [None; SIZE * SIZE],
    };

    #[inline]
    pub fn get(&self, cell: Cell) -> Option<Mark> {
        self.cells[cell.index()]
    }

    #[inline]
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(|&cell| self.is_empty_at(cell))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&m| m == Some(mark)).count()
    }

    /// Put `mark` on an empty cell.
    ///
    /// Search code only places on cells it has just seen empty; anything else is a bug.
    #[inline]
    pub fn place(&mut self, cell: Cell, mark: Mark) {
        let slot = &mut self.cells[cell.index()];
        assert!(slot.is_none(), "cell {cell:?} is already taken");
        *slot = Some(mark);
    }

    #[inline]
    pub fn clear(&mut self, cell: Cell) {
        self.cells[cell.index()] = None;
    }

    /// Checked placement for moves coming from outside the search.
    pub fn try_place(&mut self, cell: Cell, mark: Mark) -> Result<(), SearchError> {
        if !cell.in_bounds() {
            return Err(SearchError::IllegalMove {
                row: cell.row,
                col: cell.col,
                reason: "cell is off the board".to_string(),
            });
        }
        if let Some(owner) = self.get(cell) {
            return Err(SearchError::IllegalMove {
                row: cell.row,
                col: cell.col,
                reason: format!("cell is already taken by {owner}"),
            });
        }
        self.place(cell, mark);
        Ok(())
    }

    /// Place `mark`, run `f`, then clear the cell again whatever `f` returned.
    #[inline]
    pub fn with_trial<T>(&mut self, cell: Cell, mark: Mark, f: impl FnOnce(&mut Grid) -> T) -> T {
        self.place(cell, mark);
        let out = f(self);
        self.clear(cell);
        out
    }

    /// Whether `mark` holds a full row, column or diagonal.
    pub fn is_winner(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&cell| self.get(cell) == Some(mark)))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O].into_iter().find(|&m| self.is_winner(m))
    }

    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Compact one-line form, e.g. `XX-/OO-/---`.
    pub fn to_compact(&self) -> String {
        let mut out = String::with_capacity(11);
        for row in 0..SIZE {
            if row > 0 {
                out.push('/');
            }
            for col in 0..SIZE {
                out.push(symbol(self.get(Cell::new(row, col))));
            }
        }
        out
    }
}

fn symbol(m: Option<Mark>) -> char {
    m.map_or('-', Mark::symbol)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..SIZE {
            let line: Vec<String> = (0..SIZE)
                .map(|col| symbol(self.get(Cell::new(row, col))).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Grid {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '/' && *ch != '|')
            .collect();
        if symbols.len() != SIZE * SIZE {
            return Err(SearchError::invalid(format!(
                "grid {s:?} has {} cells, expected {}",
                symbols.len(),
                SIZE * SIZE
            )));
        }

        let mut grid = Grid::EMPTY;
        for (i, ch) in symbols.into_iter().enumerate() {
            grid.cells[i] = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '-' | '.' | '_' => None,
                other => {
                    return Err(SearchError::invalid(format!(
                        "unknown cell symbol {other:?} in grid {s:?}"
                    )))
                }
            };
        }
        Ok(grid)
    }
}

impl TryFrom<String> for Grid {
    type Error = SearchError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Grid> for String {
    fn from(g: Grid) -> Self {
        g.to_compact()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_cover_rows_columns_and_diagonals() {
        for text in ["XXX/---/---", "O--/O--/O--", "X--/-X-/--X", "--O/-O-/O--"] {
            let grid: Grid = text.parse().unwrap();
            assert!(grid.winner().is_some(), "{text} should be won");
        }
        let grid: Grid = "XX-/OO-/---".parse().unwrap();
        assert_eq!(grid.winner(), None);
    }

    #[test]
    fn parse_and_compact_agree() {
        let grid: Grid = "-OX\nXOO\n---".parse().unwrap();
        assert_eq!(grid.to_compact(), "-OX/XOO/---");
        assert_eq!(grid.count(Mark::O), 3);
        assert!("XO".parse::<Grid>().is_err());
        assert!("XX?/---/---".parse::<Grid>().is_err());
    }
}
