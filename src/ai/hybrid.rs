use log::debug;

use crate::game::Board;

use super::agent::Agent;
use super::monte_carlo::MonteCarloAgent;
use super::negamax::NegamaxAgent;

/// Plays Monte Carlo until at most `max_empty` cells remain, then switches to
/// the exhaustive search.
pub struct HybridAgent {
    monte_carlo: MonteCarloAgent,
    negamax: NegamaxAgent,
    max_empty: usize,
}

impl HybridAgent {
    pub fn new(monte_carlo: MonteCarloAgent, negamax: NegamaxAgent, max_empty: usize) -> Self {
        HybridAgent {
            monte_carlo,
            negamax,
            max_empty,
        }
    }

    fn uses_negamax(&self, board: &Board) -> bool {
        board.empty_cells() <= self.max_empty
    }
}

impl Agent for HybridAgent {
    fn select_action(&mut self, board: &Board) -> Option<usize> {
        if self.uses_negamax(board) {
            debug!("hybrid: {} empty cells, solving", board.empty_cells());
            self.negamax.select_action(board)
        } else {
            self.monte_carlo.select_action(board)
        }
    }

    fn name(&self) -> &str {
        "Hybrid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::testing::{play, DRAWN_GAME};

    fn agent(max_empty: usize) -> HybridAgent {
        HybridAgent::new(MonteCarloAgent::with_seed(20, 4), NegamaxAgent::new(), max_empty)
    }

    #[test]
    fn switches_on_empty_cell_count() {
        let agent = agent(12);
        assert!(!agent.uses_negamax(&Board::new()));
        assert!(agent.uses_negamax(&play(&DRAWN_GAME[..30])));
        assert!(!agent.uses_negamax(&play(&DRAWN_GAME[..29])));
    }

    #[test]
    fn late_game_answer_is_the_solved_one() {
        // Only column 6 is left and it draws
        let board = play(&DRAWN_GAME[..41]);
        let mut agent = agent(12);
        assert_eq!(agent.select_action(&board), Some(6));
    }

    #[test]
    fn early_game_uses_rollouts() {
        let mut agent = agent(0);
        let board = Board::new();
        let col = agent.select_action(&board).unwrap();
        assert!(board.legal_moves().contains(col));
    }
}
