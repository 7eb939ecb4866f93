use super::moves::Moves;
use super::player::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CELLS: usize = ROWS * COLS;

/// Line directions checked through the last move, as `(dx, dy)`:
/// horizontal, diagonal, vertical, anti-diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (1, 1), (0, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'x',
            Cell::O => 'o',
        }
    }
}

/// A 6×7 grid with gravity. Row 0 is the top, row 5 is the bottom.
///
/// Not `Copy`: hypothetical continuations go through an explicit `clone()`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    ply: usize,
    last_move: Option<(usize, usize)>,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            ply: 0,
            last_move: None,
        }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of pieces placed so far.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// `(row, col)` of the most recent piece, `None` on an empty board.
    pub fn last_move(&self) -> Option<(usize, usize)> {
        self.last_move
    }

    pub fn side_to_move(&self) -> Player {
        Player::at_ply(self.ply)
    }

    /// The side that placed the most recent piece.
    pub fn last_mover(&self) -> Option<Player> {
        self.ply.checked_sub(1).map(Player::at_ply)
    }

    pub fn empty_cells(&self) -> usize {
        CELLS - self.ply
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Drop the side-to-move's piece into `col`, returning the row where it
    /// landed. On error the board is unchanged.
    pub fn apply_move(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;

        self.cells[row][col] = self.side_to_move().to_cell();
        self.ply += 1;
        self.last_move = Some((row, col));
        Ok(row)
    }

    /// Columns whose top cell is still empty.
    pub fn legal_moves(&self) -> Moves {
        let mut moves = Moves::default();
        for col in (0..COLS).filter(|&col| !self.is_column_full(col)) {
            moves.insert(col);
        }
        moves
    }

    /// True once all 42 cells are occupied. A full board can still be a win,
    /// so check [`Board::just_won`] first.
    pub fn is_full(&self) -> bool {
        self.ply >= CELLS
    }

    /// Whether the most recent move completed four in a row.
    pub fn just_won(&self) -> bool {
        let (Some((row, col)), Some(mover)) = (self.last_move, self.last_mover()) else {
            return false;
        };
        let cell = mover.to_cell();

        DIRECTIONS
            .iter()
            .any(|&(dx, dy)| self.run_through(row, col, dx, dy, cell) >= 4)
    }

    /// Length of the run of `cell` along `(dx, dy)` through `(row, col)`.
    /// The backward walk starts one step before the origin, the forward walk
    /// at the origin, so the origin is counted once.
    fn run_through(&self, row: usize, col: usize, dx: isize, dy: isize, cell: Cell) -> usize {
        let mut count = 0;

        // Walk backward
        let mut x = col as isize - dx;
        let mut y = row as isize - dy;
        while self.cell_at(y, x) == Some(cell) {
            count += 1;
            x -= dx;
            y -= dy;
        }

        // Walk forward
        let mut x = col as isize;
        let mut y = row as isize;
        while self.cell_at(y, x) == Some(cell) {
            count += 1;
            x += dx;
            y += dy;
        }

        count
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
