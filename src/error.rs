//! Error type shared by the text-facing parts of the crate.
//!
//! The engine core itself never fails: an empty undo is a logged no-op and an
//! illegal candidate is simply not a member of the legal set. Errors only come
//! from user or command-line text (square names, move text, player kinds) and
//! from setting up the evaluator's worker pool.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChessError {
    /// A square name that is not a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid square notation: {0:?}")]
    InvalidSquare(String),

    /// Move text that is not two square names, e.g. `e2e4`.
    #[error("invalid move text: {0:?}")]
    InvalidMoveText(String),

    #[error("unknown player kind: {0:?} (expected human, greedy or random)")]
    UnknownPlayer(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: {value:?}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown argument: {0:?}")]
    UnknownArgument(String),

    #[error("failed to build evaluator thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type Result<T> = std::result::Result<T, ChessError>;
