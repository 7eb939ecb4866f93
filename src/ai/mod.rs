//! Machine players: random playouts, the Monte Carlo rollout evaluator, the
//! exhaustive negamax search, and the [`Agent`] trait that puts them behind
//! one interface.

mod agent;
mod hybrid;
pub mod monte_carlo;
pub mod negamax;
mod random;

pub use agent::{Agent, AiConfig, Strategy};
pub use hybrid::HybridAgent;
pub use monte_carlo::{ColumnTally, MonteCarloAgent};
pub use negamax::{Negamax, NegamaxAgent, SearchResult};
pub use random::{play_out, random_legal_move, RandomAgent};
