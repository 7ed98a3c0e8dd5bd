//! The round state machine.

use std::time::Duration;

use im::Vector;

use super::{DealerStep, Outcome, Party, Phase, RoundEvent, RoundSnapshot, RoundState, RoundSummary};
use crate::core::{CardId, GameRng, GameRngState, InvalidStakeError, RoundError, ShoeError, TableConfig};
use crate::hand::BUST_LIMIT;
use crate::ledger::{parse_stake, validate_stake, Bankroll, BettingLedger};
use crate::odds::{Advice, ProbabilityEstimator};
use crate::shoe::{CardSource, Shoe};

/// Runs rounds of blackjack against one bankroll.
///
/// The controller owns the shoe, both hands and the ledger. Every mutation
/// goes through one of its operations, each of which returns a
/// [`RoundSnapshot`] and queues [`RoundEvent`]s.
///
/// ## Usage
///
/// ```
/// use blackjack_table::core::TableConfig;
/// use blackjack_table::round::{Phase, RoundController};
///
/// let mut table = RoundController::new(TableConfig::default().with_seed(42));
///
/// table.confirm_stake(100).unwrap();
/// let snapshot = table.start_round().unwrap();
/// assert_eq!(snapshot.current_bet + snapshot.credit, 1000);
///
/// if snapshot.phase == Phase::PlayerTurn {
///     table.stand();
///     let done = table.run_dealer(|_| {}, |_| {}).unwrap();
///     assert_eq!(done.phase, Phase::Settled);
/// }
/// ```
///
/// ## Phase Contract
///
/// Each operation is only legal in the phase(s) it documents. Calling one
/// out of phase is a bug in the caller and panics.
pub struct RoundController<S: CardSource = Shoe, L: Bankroll = BettingLedger> {
    config: TableConfig,
    rng: GameRng,
    shoe: S,
    ledger: L,
    estimator: ProbabilityEstimator,
    state: RoundState,
    events: Vec<RoundEvent>,
    history: Vector<RoundSummary>,
}

impl RoundController<Shoe, BettingLedger> {
    /// Open a table with a fresh shoe and `config.starting_credit`.
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let ledger = BettingLedger::new(config.starting_credit);
        Self::with_parts(config, Shoe::new(), ledger)
    }
}

impl<S: CardSource, L: Bankroll> RoundController<S, L> {
    /// Open a table over a caller-supplied card source and bankroll.
    pub fn with_parts(config: TableConfig, shoe: S, ledger: L) -> Self {
        config.validate();

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let estimator = ProbabilityEstimator::new(u32::from(config.dealer_stands_on));

        Self {
            config,
            rng,
            shoe,
            ledger,
            estimator,
            state: RoundState::new(),
            events: Vec::new(),
            history: Vector::new(),
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    #[must_use]
    pub fn shoe(&self) -> &S {
        &self.shoe
    }

    #[must_use]
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Settled rounds, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<RoundSummary> {
        &self.history
    }

    /// Shuffle RNG position, for replaying a session.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Take every event queued since the last drain.
    ///
    /// The queue only spans one round: events still queued when the table
    /// moves on to the next round are discarded, so drain after settlement.
    pub fn drain_events(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current view of the table.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let odds = self.state.odds;
        RoundSnapshot {
            phase: self.state.phase,
            round: self.state.round,
            player: self.state.player.clone(),
            dealer: self.state.dealer.clone(),
            dealer_revealed: self.state.dealer.is_fully_revealed(),
            credit: self.ledger.credit(),
            current_bet: self.ledger.current_bet(),
            total_winnings: self.ledger.total_winnings(),
            pending_stake: self.state.pending_stake,
            outcome: self.state.outcome,
            odds,
            advice: Advice::classify(&odds, &self.config.advice),
        }
    }

    // === Stake ===

    /// Confirm the stake for the next deal.
    ///
    /// Legal in `AwaitingStake`. A rejected stake leaves no stake pending.
    pub fn confirm_stake(&mut self, amount: i64) -> Result<(), InvalidStakeError> {
        self.expect_phase(Phase::AwaitingStake, "confirm_stake");
        let result = validate_stake(amount, self.ledger.credit());
        self.record_stake(result)
    }

    /// Confirm a stake typed by the player.
    ///
    /// Same as [`confirm_stake`](Self::confirm_stake), but non-numeric input
    /// is reported as [`InvalidStakeError::NotANumber`].
    pub fn confirm_stake_input(&mut self, input: &str) -> Result<(), InvalidStakeError> {
        self.expect_phase(Phase::AwaitingStake, "confirm_stake_input");
        let result = parse_stake(input, self.ledger.credit());
        self.record_stake(result)
    }

    fn record_stake(&mut self, result: Result<u64, InvalidStakeError>) -> Result<(), InvalidStakeError> {
        match result {
            Ok(stake) => {
                log::debug!("stake {} confirmed", stake);
                self.state.pending_stake = Some(stake);
                self.events.push(RoundEvent::StakeConfirmed { stake });
                Ok(())
            }
            Err(err) => {
                log::warn!("stake rejected: {}", err);
                self.state.pending_stake = None;
                self.events.push(RoundEvent::StakeRejected {
                    reason: err.to_string(),
                });
                Err(err)
            }
        }
    }

    // === Round flow ===

    /// Take the confirmed stake, shuffle and deal the opening cards.
    ///
    /// Legal in `AwaitingStake`. Deals player, dealer (face down), player,
    /// dealer. An opening 21 settles at once as a blackjack; an opening 22
    /// (two aces) settles at once as a bust.
    pub fn start_round(&mut self) -> Result<RoundSnapshot, RoundError> {
        self.expect_phase(Phase::AwaitingStake, "start_round");

        if self.ledger.credit() == 0 {
            return Err(RoundError::InsufficientCredit);
        }
        let stake = self.state.pending_stake.ok_or(RoundError::StakeNotConfirmed)?;
        self.ledger.place_bet(stake)?;

        self.state.pending_stake = None;
        self.state.last_stake = Some(stake);
        self.state.round += 1;
        self.state.clear_table();

        self.shoe.reset();
        self.shoe.shuffle(&mut self.rng);

        log::info!(
            "round {} started: stake {}, credit {}",
            self.state.round,
            stake,
            self.ledger.credit()
        );
        self.events.push(RoundEvent::RoundStarted {
            round: self.state.round,
            stake,
        });

        if let Err(err) = self.deal_opening() {
            return Err(self.void_round(err));
        }

        if self.state.player.points() == BUST_LIMIT {
            self.settle(Outcome::Blackjack);
        } else if self.state.player.is_bust() {
            self.settle(Outcome::Bust);
        } else {
            self.set_phase(Phase::PlayerTurn);
        }

        Ok(self.snapshot())
    }

    fn deal_opening(&mut self) -> Result<(), ShoeError> {
        for i in 0..2 {
            self.deal(Party::Player, false)?;
            self.deal(Party::Dealer, i == 0)?;
        }
        Ok(())
    }

    /// Deal the player one card.
    ///
    /// Legal in `PlayerTurn`. Over 21 settles as a bust; exactly 21 hands
    /// over to the dealer.
    pub fn hit(&mut self) -> Result<RoundSnapshot, RoundError> {
        self.expect_phase(Phase::PlayerTurn, "hit");

        if let Err(err) = self.deal(Party::Player, false) {
            return Err(self.void_round(err));
        }

        let points = self.state.player.points();
        if points > BUST_LIMIT {
            self.settle(Outcome::Bust);
        } else if points == BUST_LIMIT {
            self.enter_dealer_turn();
        }

        Ok(self.snapshot())
    }

    /// End the player's turn.
    ///
    /// Legal in `PlayerTurn`. Reveals the hole card; drive the dealer with
    /// [`advance_dealer`](Self::advance_dealer) or
    /// [`run_dealer`](Self::run_dealer).
    pub fn stand(&mut self) -> RoundSnapshot {
        self.expect_phase(Phase::PlayerTurn, "stand");
        self.enter_dealer_turn();
        self.snapshot()
    }

    /// Play one dealer step.
    ///
    /// Legal in `DealerTurn`. Below the standing total the dealer draws one
    /// card; once at or above it the round settles and `done` is set.
    pub fn advance_dealer(&mut self) -> Result<DealerStep, RoundError> {
        self.expect_phase(Phase::DealerTurn, "advance_dealer");

        let stands_on = u32::from(self.config.dealer_stands_on);
        let mut drawn = None;

        if self.state.dealer.points() < stands_on {
            match self.deal(Party::Dealer, false) {
                Ok(card) => drawn = Some(card),
                Err(err) => return Err(self.void_round(err)),
            }
        }

        if self.state.dealer.points() >= stands_on {
            let outcome = Outcome::compare(self.state.player.points(), self.state.dealer.points());
            self.settle(outcome);
        }

        Ok(DealerStep {
            done: self.state.phase == Phase::Settled,
            drawn,
            snapshot: self.snapshot(),
        })
    }

    /// Drive the dealer to settlement.
    ///
    /// `observer` sees the snapshot after every step; `pause` is called with
    /// `config.dealer_draw_delay` between steps. Nothing else can touch the
    /// table until this returns.
    pub fn run_dealer<P, O>(&mut self, mut pause: P, mut observer: O) -> Result<RoundSnapshot, RoundError>
    where
        P: FnMut(Duration),
        O: FnMut(&RoundSnapshot),
    {
        loop {
            let step = self.advance_dealer()?;
            observer(&step.snapshot);
            if step.done {
                return Ok(step.snapshot);
            }
            pause(self.config.dealer_draw_delay);
        }
    }

    // === Between rounds ===

    /// Clear the table and wait for a new stake.
    ///
    /// Legal in `Settled`. Undrained events of the finished round are dropped.
    pub fn start_new_round(&mut self) -> RoundSnapshot {
        self.expect_phase(Phase::Settled, "start_new_round");
        self.discard_stale_events();
        self.state.clear_table();
        self.state.pending_stake = None;
        self.set_phase(Phase::AwaitingStake);
        self.snapshot()
    }

    /// Deal the next round straight away with the previous stake.
    ///
    /// Legal in `Settled`. The stake is capped at the remaining credit. With
    /// no credit left the table goes back to `AwaitingStake` and reports
    /// [`RoundError::InsufficientCredit`].
    pub fn continue_with_existing_credit(&mut self) -> Result<RoundSnapshot, RoundError> {
        self.expect_phase(Phase::Settled, "continue_with_existing_credit");
        self.start_new_round();

        let credit = self.ledger.credit();
        if credit == 0 {
            log::info!("credit exhausted, back to awaiting stake");
            return Err(RoundError::InsufficientCredit);
        }

        let stake = self.state.last_stake.unwrap_or(credit).min(credit);
        self.state.pending_stake = Some(stake);
        self.events.push(RoundEvent::StakeConfirmed { stake });

        self.start_round()
    }

    /// Walk away from the table.
    ///
    /// Legal in `AwaitingStake` or `Settled`. Credit and winnings are kept.
    pub fn leave_table(&mut self) -> RoundSnapshot {
        assert!(
            matches!(self.state.phase, Phase::AwaitingStake | Phase::Settled),
            "leave_table() called during {}",
            self.state.phase
        );

        self.discard_stale_events();
        self.state.clear_table();
        self.state.pending_stake = None;
        self.state.last_stake = None;
        self.set_phase(Phase::AwaitingStake);

        let credit = self.ledger.credit();
        log::info!("player left the table with credit {}", credit);
        self.events.push(RoundEvent::LeftTable { credit });

        self.snapshot()
    }

    // === Internals ===

    fn expect_phase(&self, expected: Phase, operation: &str) {
        assert!(
            self.state.phase == expected,
            "{}() called during {}, expected {}",
            operation,
            self.state.phase,
            expected
        );
    }

    fn discard_stale_events(&mut self) {
        if !self.events.is_empty() {
            log::debug!("dropping {} undrained events", self.events.len());
            self.events.clear();
        }
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.state.phase;
        if from != to {
            log::debug!("phase {} -> {}", from, to);
            self.state.phase = to;
            self.events.push(RoundEvent::PhaseChanged { from, to });
        }
    }

    fn deal(&mut self, party: Party, hidden: bool) -> Result<CardId, ShoeError> {
        let card = self.shoe.draw()?;

        match party {
            Party::Player => self.state.player.push(card, hidden),
            Party::Dealer => self.state.dealer.push(card, hidden),
        }
        log::debug!("dealt {} to {}{}", card, party, if hidden { " (face down)" } else { "" });
        self.events.push(RoundEvent::CardDealt { party, card, hidden });

        self.refresh_odds();
        Ok(card)
    }

    fn refresh_odds(&mut self) {
        let odds = self.estimator.estimate(
            self.state.player.points(),
            self.state.dealer.visible_points(),
            self.shoe.remaining(),
        );
        let advice = Advice::classify(&odds, &self.config.advice);

        self.state.odds = odds;
        self.events.push(RoundEvent::OddsUpdated { odds, advice });
    }

    fn reveal_hole_card(&mut self) {
        if let Some(index) = self.state.dealer.hidden_index() {
            self.state.dealer.reveal(index);
            let card = self.state.dealer.cards()[index].card;
            self.events.push(RoundEvent::HoleCardRevealed { card });
        }
    }

    fn enter_dealer_turn(&mut self) {
        self.reveal_hole_card();
        self.set_phase(Phase::DealerTurn);
        self.refresh_odds();
    }

    fn void_round(&mut self, err: ShoeError) -> RoundError {
        log::error!("round {} voided: {}", self.state.round, err);
        self.settle(Outcome::Void);
        RoundError::Shoe(err)
    }

    fn settle(&mut self, outcome: Outcome) {
        self.reveal_hole_card();

        let stake = self.ledger.current_bet();
        let payout = outcome.payout(stake, &self.config);
        let net = self.ledger.settle(payout);

        self.state.outcome = Some(outcome);
        self.history.push_back(RoundSummary {
            round: self.state.round,
            stake,
            player_points: self.state.player.points(),
            dealer_points: self.state.dealer.points(),
            outcome,
            payout,
        });

        log::info!(
            "round {} settled: {:?} (player {}, dealer {}), payout {}, credit {}",
            self.state.round,
            outcome,
            self.state.player.points(),
            self.state.dealer.points(),
            payout,
            self.ledger.credit()
        );

        self.set_phase(Phase::Settled);
        self.events.push(RoundEvent::RoundSettled { outcome, payout, net });
    }
}
