//! Core Connect Four game logic: the board with gravity and last-move
//! tracking, player sides, the legal-move bitmask, and terminal outcomes.

mod board;
mod moves;
mod player;
mod state;

pub use board::{Board, Cell, CELLS, COLS, ROWS};
pub use moves::{Moves, MovesIter};
pub use player::Player;
pub use state::GameOutcome;

#[cfg(test)]
pub(crate) mod testing {
    use super::Board;

    /// A 42-move game that fills the board without four in a row.
    pub const DRAWN_GAME: [usize; 42] = [
        0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, 4, 5, 4, 5, 4,
        5, 5, 4, 5, 4, 5, 4, 6, 6, 6, 6, 6, 6,
    ];

    /// Play a column sequence from the empty board.
    pub fn play(cols: &[usize]) -> Board {
        let mut board = Board::new();
        for &col in cols {
            board.apply_move(col).unwrap();
        }
        board
    }
}
