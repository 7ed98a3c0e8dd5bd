//! Forward simulation over the undealt cards.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::hand::BUST_LIMIT;

/// Lowest total the player is happy to stop on.
pub const SAFE_FLOOR: u32 = 17;

/// Three probabilities describing the position after the latest deal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    /// Share of dealer continuations that finish above the player's total.
    pub dealer_wins: f64,
    /// Share of next cards that leave the player on 17..=21.
    pub player_safe: f64,
    /// Share of next cards that bust the player.
    pub player_bust: f64,
}

impl Odds {
    /// All three probabilities zero.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            dealer_wins: 0.0,
            player_safe: 0.0,
            player_bust: 0.0,
        }
    }
}

/// Estimates odds from the current totals and the undealt cards.
///
/// The estimator is read-only: it walks a slice of the shoe and never draws.
///
/// ## Dealer Branches
///
/// Every undealt card is tried as the dealer's next card. From there the
/// dealer keeps taking the cards that follow it in shoe order until the
/// standing total is reached or the shoe runs out. The branches reuse the
/// fixed order of the shoe instead of resampling, so the result is a
/// frequency over these walks rather than a true posterior.
///
/// ```
/// use blackjack_table::core::CardId;
/// use blackjack_table::odds::ProbabilityEstimator;
///
/// let estimator = ProbabilityEstimator::new(17);
/// let remaining = [CardId::new(9), CardId::new(4)]; // ten, five
///
/// let odds = estimator.estimate(12, 7, &remaining);
/// assert_eq!(odds.player_bust, 0.5);
/// assert_eq!(odds.player_safe, 0.5);
/// // 7 + 10 stands on 17 and beats 12; 7 + 5 runs out of cards on 12
/// assert_eq!(odds.dealer_wins, 0.5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbabilityEstimator {
    dealer_stands_on: u32,
}

impl Default for ProbabilityEstimator {
    fn default() -> Self {
        Self::new(17)
    }
}

impl ProbabilityEstimator {
    /// Create an estimator for a dealer standing on `dealer_stands_on`.
    #[must_use]
    pub const fn new(dealer_stands_on: u32) -> Self {
        Self { dealer_stands_on }
    }

    /// Estimate the odds for the next card.
    ///
    /// Returns [`Odds::zero`] when `remaining` is empty.
    #[must_use]
    pub fn estimate(&self, player_total: u32, dealer_visible_total: u32, remaining: &[CardId]) -> Odds {
        if remaining.is_empty() {
            return Odds::zero();
        }

        let values: Vec<u32> = remaining.iter().map(|c| u32::from(c.value())).collect();

        let mut dealer_wins = 0usize;
        let mut safe = 0usize;
        let mut bust = 0usize;

        for (i, &value) in values.iter().enumerate() {
            if self.dealer_branch(dealer_visible_total + value, &values[i + 1..]) > player_total {
                dealer_wins += 1;
            }

            let next = player_total + value;
            if (SAFE_FLOOR..=BUST_LIMIT).contains(&next) {
                safe += 1;
            } else if next > BUST_LIMIT {
                bust += 1;
            }
        }

        let r = values.len() as f64;
        let odds = Odds {
            dealer_wins: dealer_wins as f64 / r,
            player_safe: safe as f64 / r,
            player_bust: bust as f64 / r,
        };
        log::debug!(
            "odds over {} cards (player {}, dealer showing {}): {:?}",
            values.len(),
            player_total,
            dealer_visible_total,
            odds
        );
        odds
    }

    /// Final dealer total when drawing `rest` in order from `start`.
    fn dealer_branch(&self, start: u32, rest: &[u32]) -> u32 {
        let mut total = start;
        for &value in rest {
            if total >= self.dealer_stands_on {
                break;
            }
            total += value;
        }
        total
    }
}
