//! In-round odds advisor.
//!
//! After every deal the round controller asks the [`ProbabilityEstimator`]
//! for three numbers over the undealt part of the shoe:
//!
//! - `dealer_wins`: the dealer finishes above the player's current total
//! - `player_safe`: the player's next card lands on 17..=21
//! - `player_bust`: the player's next card goes over 21
//!
//! [`Advice`] maps the last two onto a fixed recommendation.

mod advice;
mod estimator;

pub use advice::Advice;
pub use estimator::{Odds, ProbabilityEstimator, SAFE_FLOOR};
