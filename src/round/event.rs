//! Events emitted by the round controller.
//!
//! The controller never calls into the presentation layer. It queues
//! `RoundEvent` values instead, and the host drains them with
//! [`RoundController::drain_events`](super::RoundController::drain_events)
//! after each call. Events arrive in the order the controller produced them.

use serde::{Deserialize, Serialize};

use super::{Outcome, Phase};
use crate::core::CardId;
use crate::odds::{Advice, Odds};

/// Which side of the table a card went to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Player,
    Dealer,
}

impl std::fmt::Display for Party {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Party::Player => f.write_str("player"),
            Party::Dealer => f.write_str("dealer"),
        }
    }
}

/// Something observable that happened at the table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A stake passed validation and is waiting for the deal.
    StakeConfirmed { stake: u64 },

    /// A stake was refused; the round is still awaiting one.
    StakeRejected { reason: String },

    /// Stake taken from credit, shoe shuffled.
    RoundStarted { round: u32, stake: u64 },

    /// A card left the shoe.
    CardDealt { party: Party, card: CardId, hidden: bool },

    /// The dealer's face-down card was turned over.
    HoleCardRevealed { card: CardId },

    /// Fresh odds after a deal.
    OddsUpdated { odds: Odds, advice: Advice },

    PhaseChanged { from: Phase, to: Phase },

    /// Round over, ledger updated.
    RoundSettled { outcome: Outcome, payout: u64, net: i64 },

    /// The player walked away from the table.
    LeftTable { credit: u64 },
}
