use crate::game::{Board, COLS};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// Drive `board` to a terminal state with uniformly random column picks.
///
/// Picks are drawn from every column, not just the legal ones; a pick that
/// lands on a full column is rejected by the board and simply drawn again.
/// The board is mutated in place, so pass a clone to keep the original.
pub fn play_out<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) {
    while !board.just_won() && !board.is_full() {
        let _ = board.apply_move(rng.random_range(0..COLS));
    }
}

/// Uniformly random legal column, `None` when the board is full.
pub fn random_legal_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let moves = board.legal_moves();
    if moves.is_empty() {
        return None;
    }
    moves.nth(rng.random_range(0..moves.len()))
}

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Option<usize> {
        random_legal_move(board, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
