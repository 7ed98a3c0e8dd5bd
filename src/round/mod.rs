//! Round state machine and the values it hands to the presentation layer.
//!
//! ## Flow
//!
//! 1. `confirm_stake` / `confirm_stake_input` while `AwaitingStake`
//! 2. `start_round` takes the stake and deals two cards each
//! 3. `hit` / `stand` during `PlayerTurn`
//! 4. `advance_dealer` (or `run_dealer`) during `DealerTurn`
//! 5. `start_new_round`, `continue_with_existing_credit` or `leave_table`
//!    once `Settled`
//!
//! ## Dealer Pacing
//!
//! The dealer's draws are a step function rather than a timed loop. Each
//! call to `advance_dealer` draws at most one card, so a host can wait
//! between calls for as long as its animation needs. `run_dealer` is the
//! same loop with the wait supplied as a closure.
//!
//! ```
//! use std::time::Duration;
//! use blackjack_table::core::TableConfig;
//! use blackjack_table::round::{Phase, RoundController};
//!
//! let config = TableConfig::default()
//!     .with_seed(3)
//!     .with_dealer_draw_delay(Duration::ZERO);
//! let mut table = RoundController::new(config);
//!
//! table.confirm_stake_input("25").unwrap();
//! if table.start_round().unwrap().phase == Phase::PlayerTurn {
//!     table.stand();
//!     while !table.advance_dealer().unwrap().done {}
//! }
//! assert_eq!(table.phase(), Phase::Settled);
//! assert_eq!(table.history().len(), 1);
//! ```

mod controller;
mod event;
mod phase;
mod snapshot;
mod state;

pub use controller::RoundController;
pub use event::{Party, RoundEvent};
pub use phase::{Outcome, Phase};
pub use snapshot::{DealerStep, RoundSnapshot, RoundSummary};
pub use state::RoundState;
