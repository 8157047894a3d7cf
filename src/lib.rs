//! A two-player chess engine with a one-ply greedy computer opponent.
//!
//! - [`game_repr`] holds the board, move generation, legality and terminal
//!   detection
//! - [`agent`] holds the players, including the [`agent::ai::Evaluator`]
//! - [`orchestrator`] runs the turn loop between two players

pub mod agent;
pub mod config;
pub mod error;
pub mod game_repr;
pub mod orchestrator;

pub use error::{ChessError, Result};
