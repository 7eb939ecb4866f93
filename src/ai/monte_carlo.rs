use log::debug;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, COLS};

use super::agent::Agent;
use super::random::play_out;

/// Rollouts per candidate column used when nothing else is configured.
pub const DEFAULT_SIMULATIONS: u32 = 50;

/// Decisive rollout results for one candidate column, counted from the side
/// that plays the candidate. Drawn rollouts are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnTally {
    pub wins: u32,
    pub losses: u32,
}

impl ColumnTally {
    /// Wins per loss. With no losses the raw win count stands in for the
    /// unbounded ratio.
    pub fn score(&self) -> f64 {
        if self.losses > 0 {
            f64::from(self.wins) / f64::from(self.losses)
        } else {
            f64::from(self.wins)
        }
    }
}

/// Run `simulations` random rollouts after each legal column. Entry `i` is
/// `None` when column `i` is not playable.
pub fn evaluate<R: Rng + ?Sized>(
    board: &Board,
    simulations: u32,
    rng: &mut R,
) -> [Option<ColumnTally>; COLS] {
    let mut tallies = [None; COLS];

    for col in board.legal_moves() {
        let mut tally = ColumnTally::default();

        for _ in 0..simulations {
            let mut rollout = board.clone();
            if rollout.apply_move(col).is_err() {
                break;
            }
            play_out(&mut rollout, rng);

            if rollout.just_won() {
                // Same ply parity as the root means the opponent moved last.
                if (board.ply() & 1) == (rollout.ply() & 1) {
                    tally.losses += 1;
                } else {
                    tally.wins += 1;
                }
            }
        }

        tallies[col] = Some(tally);
    }

    tallies
}

/// Column with the strictly highest rollout score, or `None` when no column
/// scores above zero (full board, or every rollout lost or drew).
pub fn best_move<R: Rng + ?Sized>(board: &Board, simulations: u32, rng: &mut R) -> Option<usize> {
    let mut best_score = 0.0;
    let mut best_col = None;

    for (col, tally) in evaluate(board, simulations, rng).into_iter().enumerate() {
        let Some(tally) = tally else { continue };
        let score = tally.score();
        debug!(
            "column {col}: {} wins, {} losses, score {score:.3}",
            tally.wins, tally.losses
        );

        if score > best_score {
            best_score = score;
            best_col = Some(col);
        }
    }

    best_col
}

/// Agent that ranks columns by Monte Carlo rollouts.
pub struct MonteCarloAgent {
    simulations: u32,
    rng: StdRng,
}

impl MonteCarloAgent {
    pub fn new(simulations: u32) -> Self {
        MonteCarloAgent {
            simulations,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(simulations: u32, seed: u64) -> Self {
        MonteCarloAgent {
            simulations,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn simulations(&self) -> u32 {
        self.simulations
    }
}

impl Default for MonteCarloAgent {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATIONS)
    }
}

impl Agent for MonteCarloAgent {
    fn select_action(&mut self, board: &Board) -> Option<usize> {
        best_move(board, self.simulations, &mut self.rng)
    }

    fn name(&self) -> &str {
        "Monte Carlo"
    }
}
