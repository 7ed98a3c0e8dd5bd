//! Probability estimator and advisor integration tests.

use blackjack_table::core::{AdviceThresholds, CardId, GameRng};
use blackjack_table::odds::{Advice, Odds, ProbabilityEstimator};
use blackjack_table::shoe::{CardSource, Shoe};
use proptest::prelude::*;

fn cards(ids: &[u8]) -> Vec<CardId> {
    ids.iter().map(|&id| CardId::new(id)).collect()
}

proptest! {
    /// All three probabilities stay within [0, 1] for any position.
    #[test]
    fn prop_odds_are_probabilities(
        seed in any::<u64>(),
        dealt in 0usize..=52,
        player in 2u32..=30,
        dealer in 0u32..=26,
    ) {
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut GameRng::new(seed));
        for _ in 0..dealt {
            shoe.draw().unwrap();
        }

        let odds = ProbabilityEstimator::default().estimate(player, dealer, shoe.remaining());
        for p in [odds.dealer_wins, odds.player_safe, odds.player_bust] {
            prop_assert!((0.0..=1.0).contains(&p));
        }
        prop_assert!(odds.player_safe + odds.player_bust <= 1.0 + f64::EPSILON);

        if dealt == 52 {
            prop_assert_eq!(odds, Odds::zero());
        }
    }

    /// Estimating never touches the shoe.
    #[test]
    fn prop_estimate_is_read_only(seed in any::<u64>(), dealt in 0usize..52) {
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut GameRng::new(seed));
        for _ in 0..dealt {
            shoe.draw().unwrap();
        }
        let before = shoe.clone();

        let _ = ProbabilityEstimator::default().estimate(14, 9, shoe.remaining());

        prop_assert_eq!(shoe, before);
    }
}

/// A player on 21 busts on any card.
#[test]
fn test_player_on_twenty_one_always_busts() {
    let remaining: Vec<_> = CardId::all().collect();
    let odds = ProbabilityEstimator::default().estimate(21, 10, &remaining);
    assert_eq!(odds.player_bust, 1.0);
    assert_eq!(odds.player_safe, 0.0);
}

/// A player on 11 is safe exactly on a six through ten-valued card.
#[test]
fn test_player_on_eleven() {
    let remaining: Vec<_> = CardId::all().collect();
    let odds = ProbabilityEstimator::default().estimate(11, 10, &remaining);
    // sixes, sevens, eights, nines: 16 cards; tens and faces: 16 cards
    assert_eq!(odds.player_safe, 32.0 / 52.0);
    // only aces (11 + 11 = 22) bust
    assert_eq!(odds.player_bust, 4.0 / 52.0);
}

/// Dealer branches read the shoe in order, not resampled.
#[test]
fn test_dealer_branches_depend_on_order() {
    let estimator = ProbabilityEstimator::default();

    // Dealer shows 10; two then seven: 10+2+7 = 19, 10+7 = 17
    let forward = estimator.estimate(18, 10, &cards(&[1, 6]));
    // Seven then two: 10+7 = 17, 10+2 = 12 with nothing after it
    let reversed = estimator.estimate(18, 10, &cards(&[6, 1]));

    assert_eq!(forward.dealer_wins, 0.5);
    assert_eq!(reversed.dealer_wins, 0.0);
}

/// Advice follows the estimator through the default bands.
#[test]
fn test_advice_from_estimates() {
    let estimator = ProbabilityEstimator::default();
    let thresholds = AdviceThresholds::default();
    let full: Vec<_> = CardId::all().collect();

    // From 20 every card busts, aces included
    let on_twenty = estimator.estimate(20, 10, &full);
    assert_eq!(Advice::classify(&on_twenty, &thresholds), Advice::FavorStanding);

    // Eight tens and nothing else from 9 land on 19
    let tens = cards(&[9, 10, 11, 12, 22, 23, 24, 25]);
    let on_nine = estimator.estimate(9, 10, &tens);
    assert_eq!(Advice::classify(&on_nine, &thresholds), Advice::FavorDrawing);

    let on_twelve = estimator.estimate(12, 10, &full);
    assert_eq!(Advice::classify(&on_twelve, &thresholds), Advice::Marginal);
}
