//! The player's bankroll.
//!
//! The ledger is touched twice per round: the stake leaves `credit` when the
//! round starts and the payout comes back at settlement. `total_winnings`
//! accumulates the net result (payout minus stake) of every settled round.
//!
//! ```
//! use blackjack_table::ledger::{Bankroll, BettingLedger};
//!
//! let mut ledger = BettingLedger::new(1000);
//! ledger.place_bet(100).unwrap();
//! assert_eq!(ledger.credit(), 900);
//! assert_eq!(ledger.current_bet(), 100);
//!
//! ledger.settle(200);
//! assert_eq!(ledger.credit(), 1100);
//! assert_eq!(ledger.current_bet(), 0);
//! assert_eq!(ledger.total_winnings(), 100);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{InvalidStakeError, MAX_PAYOUT, MAX_STAKE};

/// Contract for the bankroll the round controller bets against.
pub trait Bankroll {
    /// Credit available for the next stake.
    fn credit(&self) -> u64;

    /// Stake riding on the current round, 0 between rounds.
    fn current_bet(&self) -> u64;

    /// Net result of every settled round.
    fn total_winnings(&self) -> i64;

    /// Move `stake` from credit onto the table.
    fn place_bet(&mut self, stake: u64) -> Result<(), InvalidStakeError>;

    /// Pay `payout` back into credit and clear the bet.
    ///
    /// Returns the net result of the round. `payout` is at most
    /// [`MAX_PAYOUT`].
    fn settle(&mut self, payout: u64) -> i64;
}

/// Check a requested stake against the available credit and the table limit.
pub fn validate_stake(amount: i64, credit: u64) -> Result<u64, InvalidStakeError> {
    if amount <= 0 {
        return Err(InvalidStakeError::NonPositive(amount));
    }
    check_stake(amount.unsigned_abs(), credit)
}

fn check_stake(stake: u64, credit: u64) -> Result<u64, InvalidStakeError> {
    if stake == 0 {
        return Err(InvalidStakeError::NonPositive(0));
    }
    if stake > credit {
        return Err(InvalidStakeError::ExceedsCredit { stake, credit });
    }
    if stake > MAX_STAKE {
        return Err(InvalidStakeError::AboveTableLimit {
            stake,
            limit: MAX_STAKE,
        });
    }
    Ok(stake)
}

/// Parse a stake typed by the player and check it against the credit.
pub fn parse_stake(input: &str, credit: u64) -> Result<u64, InvalidStakeError> {
    let trimmed = input.trim();
    let amount: i64 = trimmed
        .parse()
        .map_err(|_| InvalidStakeError::NotANumber(trimmed.to_string()))?;
    validate_stake(amount, credit)
}

/// Credit, bet and winnings for one session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingLedger {
    credit: u64,
    current_bet: u64,
    total_winnings: i64,
}

impl BettingLedger {
    /// Create a ledger holding `credit`.
    #[must_use]
    pub fn new(credit: u64) -> Self {
        Self {
            credit,
            current_bet: 0,
            total_winnings: 0,
        }
    }
}

impl Bankroll for BettingLedger {
    fn credit(&self) -> u64 {
        self.credit
    }

    fn current_bet(&self) -> u64 {
        self.current_bet
    }

    fn total_winnings(&self) -> i64 {
        self.total_winnings
    }

    fn place_bet(&mut self, stake: u64) -> Result<(), InvalidStakeError> {
        assert_eq!(self.current_bet, 0, "A bet is already on the table");

        let stake = check_stake(stake, self.credit)?;

        self.credit -= stake;
        self.current_bet = stake;
        Ok(())
    }

    fn settle(&mut self, payout: u64) -> i64 {
        assert!(payout <= MAX_PAYOUT, "Payout {} is above the table limit", payout);

        // Both sides are bounded by the table limits, well inside i64
        let net = i128::from(payout) - i128::from(self.current_bet);
        let net = i64::try_from(net).unwrap_or_default();

        self.credit = self.credit.saturating_add(payout);
        self.total_winnings = self.total_winnings.saturating_add(net);
        self.current_bet = 0;
        net
    }
}
