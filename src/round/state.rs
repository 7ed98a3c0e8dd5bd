//! Round-scoped mutable data.

use serde::{Deserialize, Serialize};

use super::{Outcome, Phase};
use crate::hand::Hand;
use crate::odds::Odds;

/// Everything that changes during a round, in one place.
///
/// The controller owns exactly one of these. Hands are cleared, not
/// replaced, between rounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub phase: Phase,

    /// Rounds started this session.
    pub round: u32,

    pub player: Hand,
    pub dealer: Hand,

    /// Confirmed stake waiting for the deal.
    pub pending_stake: Option<u64>,

    /// Stake of the most recently started round, for the continue path.
    pub last_stake: Option<u64>,

    pub outcome: Option<Outcome>,
    pub odds: Odds,
}

impl RoundState {
    /// State of a table nobody has bet at yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::AwaitingStake,
            round: 0,
            player: Hand::new(),
            dealer: Hand::new(),
            pending_stake: None,
            last_stake: None,
            outcome: None,
            odds: Odds::zero(),
        }
    }

    /// Drop the cards and per-round results, keep the session counters.
    pub fn clear_table(&mut self) {
        self.player.clear();
        self.dealer.clear();
        self.outcome = None;
        self.odds = Odds::zero();
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new()
    }
}
