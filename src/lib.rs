//! # Connect Four AI
//!
//! Connect Four against the machine. The board model enforces gravity and
//! detects wins through the last move; the machine picks columns with either
//! Monte Carlo rollouts or an exhaustive negamax search with alpha-beta
//! pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board, player sides, legal-move bitmask, win detection
//! - [`ai`] — Agent trait, random playouts, Monte Carlo evaluator, negamax
//! - [`ui`] — Text rendering and the console turn loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
