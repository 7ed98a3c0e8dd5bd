//! Error types for the table.

use thiserror::Error;

/// A stake the table refuses to accept.
///
/// Recoverable: the round stays in `AwaitingStake`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidStakeError {
    #[error("stake '{0}' is not a whole number")]
    NotANumber(String),
    #[error("stake must be positive, got {0}")]
    NonPositive(i64),
    #[error("stake {stake} exceeds available credit {credit}")]
    ExceedsCredit { stake: u64, credit: u64 },
    #[error("stake {stake} is above the table limit of {limit}")]
    AboveTableLimit { stake: u64, limit: u64 },
}

/// Shoe failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShoeError {
    #[error("shoe exhausted: all {0} cards have been dealt")]
    Exhausted(usize),
    #[error("card order is not a permutation of the deck")]
    NotAPermutation,
}

/// Failures of round-level operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    #[error("no stake has been confirmed for this round")]
    StakeNotConfirmed,
    #[error("no credit left to play with")]
    InsufficientCredit,
    #[error(transparent)]
    Stake(#[from] InvalidStakeError),
    #[error(transparent)]
    Shoe(#[from] ShoeError),
}
