use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl Board {
    /// Terminal outcome of the position, if any. Wins take precedence over a
    /// full board.
    pub fn outcome(&self) -> Option<GameOutcome> {
        if self.just_won() {
            self.last_mover().map(GameOutcome::Winner)
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{play, DRAWN_GAME};

    #[test]
    fn test_initial_state() {
        let board = Board::new();
        assert_eq!(board.outcome(), None);
        assert!(!board.is_terminal());
        assert_eq!(board.legal_moves().len(), 7);
    }

    #[test]
    fn test_win_detection() {
        // X wins with a horizontal line on the bottom row
        let board = play(&[0, 0, 1, 1, 2, 2, 3]);
        assert!(board.is_terminal());
        assert_eq!(board.outcome(), Some(GameOutcome::Winner(Player::X)));
    }

    #[test]
    fn test_second_player_win() {
        // O stacks column 6 while X scatters
        let board = play(&[0, 6, 1, 6, 3, 6, 0, 6]);
        assert_eq!(board.outcome(), Some(GameOutcome::Winner(Player::O)));
    }

    #[test]
    fn test_draw() {
        let board = play(&DRAWN_GAME);
        assert_eq!(board.outcome(), Some(GameOutcome::Draw));
    }
}
