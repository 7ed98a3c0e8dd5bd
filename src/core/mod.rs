//! Core table types: card identities, RNG, configuration, errors.
//!
//! Everything here is shared by the shoe, the hands, the odds advisor and the
//! round controller.

pub mod card;
pub mod config;
pub mod error;
pub mod rng;

pub use card::{value_of, CardId, Suit, ACE_POINTS, DECK_SIZE};
pub use config::{AdviceThresholds, TableConfig, MAX_MULTIPLIER, MAX_PAYOUT, MAX_STAKE};
pub use error::{InvalidStakeError, RoundError, ShoeError};
pub use rng::{GameRng, GameRngState};
