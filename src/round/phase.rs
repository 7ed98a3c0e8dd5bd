//! Round phases and outcomes.

use serde::{Deserialize, Serialize};

use crate::core::TableConfig;
use crate::hand::BUST_LIMIT;

/// Where the round stands.
///
/// ```text
/// AwaitingStake ──start──▶ PlayerTurn ──stand / 21──▶ DealerTurn ──17+──▶ Settled
///       ▲                      │                                           │
///       │                      └──────── bust / opening 21 ───────────────▶│
///       └──────────────────────────── new round / leave ───────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    AwaitingStake,
    PlayerTurn,
    DealerTurn,
    Settled,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::AwaitingStake => "awaiting stake",
            Phase::PlayerTurn => "player turn",
            Phase::DealerTurn => "dealer turn",
            Phase::Settled => "settled",
        };
        f.write_str(name)
    }
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Opening two cards total 21.
    Blackjack,
    /// Dealer bust or player total higher.
    Win,
    /// Dealer total higher.
    Loss,
    /// Player went over 21.
    Bust,
    /// Equal totals.
    Push,
    /// The shoe ran out mid-round; stake returned.
    Void,
}

impl Outcome {
    /// Compare final totals once the dealer has finished drawing.
    #[must_use]
    pub fn compare(player_total: u32, dealer_total: u32) -> Self {
        if dealer_total > BUST_LIMIT || player_total > dealer_total {
            Outcome::Win
        } else if player_total < dealer_total {
            Outcome::Loss
        } else {
            Outcome::Push
        }
    }

    /// Amount paid back into credit for `stake`.
    ///
    /// Saturates rather than wrapping; a validated table never gets near it.
    #[must_use]
    pub fn payout(self, stake: u64, config: &TableConfig) -> u64 {
        match self {
            Outcome::Blackjack => stake.saturating_mul(config.blackjack_multiplier),
            Outcome::Win => stake.saturating_mul(config.win_multiplier),
            Outcome::Push => stake.saturating_mul(config.push_multiplier),
            Outcome::Void => stake,
            Outcome::Loss | Outcome::Bust => 0,
        }
    }

    /// Terminal message for the table.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Outcome::Blackjack => "Blackjack! You win.",
            Outcome::Win => "You win!",
            Outcome::Loss => "You lose, the dealer wins.",
            Outcome::Bust => "You lose. You went over 21.",
            Outcome::Push => "Push.",
            Outcome::Void => "Round void: the shoe ran out.",
        }
    }

    /// Check if the player came out ahead.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Outcome::Blackjack | Outcome::Win)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
