use crate::game::Board;

use super::hybrid::HybridAgent;
use super::monte_carlo::{MonteCarloAgent, DEFAULT_SIMULATIONS};
use super::negamax::NegamaxAgent;

/// Universal interface for the machine players.
pub trait Agent {
    /// Select a column for the side to move. `None` means the agent found no
    /// column worth playing; the caller picks a fallback.
    fn select_action(&mut self, board: &Board) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Which search the machine uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    MonteCarlo,
    Negamax,
    /// Monte Carlo early, exhaustive negamax once few cells remain.
    Hybrid,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monte_carlo" | "monte-carlo" | "mc" => Ok(Strategy::MonteCarlo),
            "negamax" => Ok(Strategy::Negamax),
            "hybrid" => Ok(Strategy::Hybrid),
            other => Err(format!(
                "unknown strategy '{other}' (expected 'monte_carlo', 'negamax', or 'hybrid')"
            )),
        }
    }
}

/// Machine player settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AiConfig {
    pub strategy: Strategy,
    /// Rollouts per candidate column.
    pub simulations: u32,
    /// Seed for the rollout RNG; entropy from the OS when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Hybrid switches to negamax at or below this many empty cells.
    pub negamax_max_empty: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            strategy: Strategy::MonteCarlo,
            simulations: DEFAULT_SIMULATIONS,
            seed: None,
            negamax_max_empty: 12,
        }
    }
}

impl AiConfig {
    pub fn build_agent(&self) -> Box<dyn Agent> {
        let monte_carlo = || match self.seed {
            Some(seed) => MonteCarloAgent::with_seed(self.simulations, seed),
            None => MonteCarloAgent::new(self.simulations),
        };

        match self.strategy {
            Strategy::MonteCarlo => Box::new(monte_carlo()),
            Strategy::Negamax => Box::new(NegamaxAgent::new()),
            Strategy::Hybrid => Box::new(HybridAgent::new(
                monte_carlo(),
                NegamaxAgent::new(),
                self.negamax_max_empty,
            )),
        }
    }
}
