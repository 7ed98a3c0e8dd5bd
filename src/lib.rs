//! # blackjack-table
//!
//! Rules engine for a single-player blackjack table with an in-round odds
//! advisor.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: No rendering, timers or widgets. Every
//!    operation returns a plain [`RoundSnapshot`] and queues [`RoundEvent`]s
//!    that a front end polls.
//!
//! 2. **Ports at the Seams**: The round controller deals through
//!    [`CardSource`] and bets through [`Bankroll`], so hosts and tests can
//!    swap either side.
//!
//! 3. **Explicit State**: All round-scoped data lives in one [`RoundState`];
//!    two controllers never share anything.
//!
//! ## House Rules
//!
//! - One 52-card deck, reshuffled at the start of every round
//! - Aces always count 11; there is no soft total
//! - Dealer draws to 17
//! - Win and opening 21 both pay 2× the stake, a push returns the stake
//!
//! ## Modules
//!
//! - `core`: Card identities and values, RNG, configuration, errors
//! - `shoe`: The dealing shoe and the `CardSource` port
//! - `hand`: Player and dealer hands
//! - `odds`: Probability estimator and advisor
//! - `ledger`: Credit, bet and winnings
//! - `round`: The round state machine, snapshots and events

pub mod core;
pub mod hand;
pub mod ledger;
pub mod odds;
pub mod round;
pub mod shoe;

// Re-export commonly used types
pub use crate::core::{
    value_of, AdviceThresholds, CardId, GameRng, GameRngState, InvalidStakeError, RoundError, ShoeError, Suit,
    TableConfig, DECK_SIZE, MAX_STAKE,
};

pub use crate::hand::{Hand, HandCard};

pub use crate::ledger::{Bankroll, BettingLedger};

pub use crate::odds::{Advice, Odds, ProbabilityEstimator};

pub use crate::round::{
    DealerStep, Outcome, Party, Phase, RoundController, RoundEvent, RoundSnapshot, RoundState, RoundSummary,
};

pub use crate::shoe::{CardSource, Shoe};
