//! Table configuration.
//!
//! - `TableConfig`: bankroll, dealer rule, payouts, pacing, seed
//! - `AdviceThresholds`: bands used to turn odds into a recommendation
//!
//! Both are plain serde structs with `with_*` builders so a host can load
//! them from whatever format it already uses.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Largest stake the table accepts on one round.
pub const MAX_STAKE: u64 = 1_000_000_000;

/// Largest payout multiplier a table may be configured with.
pub const MAX_MULTIPLIER: u64 = 100;

/// Largest payout a single round can produce.
pub const MAX_PAYOUT: u64 = MAX_STAKE * MAX_MULTIPLIER;

/// Thresholds for the odds advisor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdviceThresholds {
    /// Safe-draw probability above which drawing is recommended.
    pub favor_drawing_above: f64,

    /// Bust probability above which standing is recommended.
    /// Checked only when drawing is not already recommended.
    pub favor_standing_above: f64,
}

impl Default for AdviceThresholds {
    fn default() -> Self {
        Self {
            favor_drawing_above: 0.7,
            favor_standing_above: 0.6,
        }
    }
}

/// Configuration for one blackjack table session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Credit the player sits down with.
    pub starting_credit: u64,

    /// Dealer draws while below this total.
    pub dealer_stands_on: u8,

    /// Payout multiple of the stake on a regular win.
    pub win_multiplier: u64,

    /// Payout multiple of the stake on an opening 21.
    pub blackjack_multiplier: u64,

    /// Payout multiple of the stake on a push.
    pub push_multiplier: u64,

    /// Pause between successive dealer draws.
    /// Only consulted by the dealer driver; the step function ignores it.
    pub dealer_draw_delay: Duration,

    /// Shuffle seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Advisor bands.
    pub advice: AdviceThresholds,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            starting_credit: 1000,
            dealer_stands_on: 17,
            win_multiplier: 2,
            blackjack_multiplier: 2,
            push_multiplier: 1,
            dealer_draw_delay: Duration::from_secs(1),
            seed: None,
            advice: AdviceThresholds::default(),
        }
    }
}

impl TableConfig {
    /// Set the starting credit.
    #[must_use]
    pub fn with_starting_credit(mut self, credit: u64) -> Self {
        self.starting_credit = credit;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pause between dealer draws.
    #[must_use]
    pub fn with_dealer_draw_delay(mut self, delay: Duration) -> Self {
        self.dealer_draw_delay = delay;
        self
    }

    /// Set the dealer's standing total.
    #[must_use]
    pub fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }

    /// Set the advisor bands.
    #[must_use]
    pub fn with_advice(mut self, advice: AdviceThresholds) -> Self {
        self.advice = advice;
        self
    }

    /// Check internal consistency.
    ///
    /// Panics on a configuration no table could run with.
    pub fn validate(&self) {
        assert!(self.dealer_stands_on > 0, "Dealer must stand on a positive total");
        assert!(
            self.win_multiplier <= MAX_MULTIPLIER && self.blackjack_multiplier <= MAX_MULTIPLIER,
            "Payout multipliers are capped at {}",
            MAX_MULTIPLIER
        );
        assert!(
            self.push_multiplier <= self.win_multiplier,
            "A push cannot pay more than a win"
        );
        assert!(
            (0.0..=1.0).contains(&self.advice.favor_drawing_above)
                && (0.0..=1.0).contains(&self.advice.favor_standing_above),
            "Advice thresholds must be probabilities"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.starting_credit, 1000);
        assert_eq!(config.dealer_stands_on, 17);
        assert_eq!(config.win_multiplier, 2);
        assert_eq!(config.blackjack_multiplier, 2);
        assert_eq!(config.push_multiplier, 1);
        assert_eq!(config.seed, None);
        config.validate();
    }

    #[test]
    fn test_builder_pattern() {
        let config = TableConfig::default()
            .with_starting_credit(250)
            .with_seed(7)
            .with_dealer_draw_delay(Duration::ZERO);

        assert_eq!(config.starting_credit, 250);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.dealer_draw_delay, Duration::ZERO);
    }

    #[test]
    fn test_serialization() {
        let config = TableConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: TableConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    #[should_panic(expected = "Payout multipliers are capped at 100")]
    fn test_validate_rejects_runaway_multiplier() {
        let mut config = TableConfig::default();
        config.blackjack_multiplier = u64::MAX;
        config.validate();
    }

    #[test]
    fn test_largest_payout_fits_winnings() {
        assert!(i64::try_from(MAX_PAYOUT).is_ok());
    }

    #[test]
    #[should_panic(expected = "A push cannot pay more than a win")]
    fn test_validate_rejects_generous_push() {
        let mut config = TableConfig::default();
        config.push_multiplier = 3;
        config.validate();
    }
}
