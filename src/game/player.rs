use super::board::Cell;

/// The two sides. `X` moves on even plies, so it always opens the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The side that places the piece at the given ply (0-based).
    pub fn at_ply(ply: usize) -> Player {
        if ply & 1 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    /// The character drawn on the board and typed at the side prompt.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }

    /// Parse `x` or `o`, ignoring case and surrounding whitespace.
    pub fn from_symbol(s: &str) -> Option<Player> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Some(Player::X),
            "o" => Some(Player::O),
            _ => None,
        }
    }
}
