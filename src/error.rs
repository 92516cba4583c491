//! Error types shared across the engine

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by board operations, move validation and game orchestration.
///
/// Every variant is recoverable: a failed operation never leaves the board or
/// the game in a partially updated state, so the caller may simply retry with
/// a corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A coordinate lies outside the board.
    #[error("position out of range: ({row}, {col})")]
    InvalidPosition { row: i32, col: i32 },

    /// A structural impossibility: moving from an empty square, building a
    /// board with a bad size, removing a piece that is not there.
    #[error("invalid board state: {0}")]
    InvalidBoardState(String),

    /// A specific move failed validation. The reason aggregates every failing
    /// validator, not just the first one.
    #[error("invalid move: {reason}")]
    InvalidMove { reason: String },

    /// A mutation was attempted after the game ended.
    #[error("game is over")]
    GameOver,

    /// A named rule was broken by one of the stricter validators.
    #[error("rule violation: {rule}")]
    RuleViolation { rule: String },
}
