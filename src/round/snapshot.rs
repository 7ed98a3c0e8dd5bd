//! Read-only views of the table handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::{Outcome, Phase};
use crate::core::CardId;
use crate::hand::Hand;
use crate::odds::{Advice, Odds};

/// Everything a table view needs to draw itself after a call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: Phase,

    /// 1-based count of rounds started this session, 0 before the first.
    pub round: u32,

    pub player: Hand,
    pub dealer: Hand,

    /// False while the dealer's first card is face down.
    pub dealer_revealed: bool,

    pub credit: u64,
    pub current_bet: u64,
    pub total_winnings: i64,

    /// Stake confirmed for the next deal, if any.
    pub pending_stake: Option<u64>,

    /// Outcome of the round, once settled.
    pub outcome: Option<Outcome>,

    /// Odds after the most recent deal.
    pub odds: Odds,
    pub advice: Advice,
}

impl RoundSnapshot {
    /// Player's point total.
    #[must_use]
    pub fn player_points(&self) -> u32 {
        self.player.points()
    }

    /// Dealer's point total as the table shows it.
    ///
    /// Counts only face-up cards until the hole card is revealed.
    #[must_use]
    pub fn dealer_shown_points(&self) -> u32 {
        self.dealer.visible_points()
    }

    /// Terminal message of the round, if settled.
    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        self.outcome.map(Outcome::message)
    }

    /// Advisory text for the current odds.
    #[must_use]
    pub fn advice_text(&self) -> &'static str {
        self.advice.text()
    }
}

/// Result of one dealer step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DealerStep {
    /// True once the round has settled; stop ticking.
    pub done: bool,
    /// Card drawn this step, `None` if the dealer was already standing.
    pub drawn: Option<CardId>,
    pub snapshot: RoundSnapshot,
}

/// One line of session history, written at settlement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub stake: u64,
    pub player_points: u32,
    pub dealer_points: u32,
    pub outcome: Outcome,
    pub payout: u64,
}
