//! The shoe: one 52-card deck dealt from a cursor.
//!
//! The shoe always holds a permutation of every [`CardId`]. Dealing never
//! removes cards; it advances a cursor, so the undealt tail is available to
//! the odds advisor as a plain slice.
//!
//! ## Card Sources
//!
//! The round controller deals through the [`CardSource`] trait rather than
//! the concrete [`Shoe`]. A host can plug in any source that honours the
//! same contract (a replayed shoe, a rigged training deck).
//!
//! ```
//! use blackjack_table::core::{GameRng, DECK_SIZE};
//! use blackjack_table::shoe::{CardSource, Shoe};
//!
//! let mut shoe = Shoe::new();
//! shoe.shuffle(&mut GameRng::new(7));
//!
//! let first = shoe.draw().unwrap();
//! assert_eq!(shoe.cursor(), 1);
//! assert_eq!(shoe.remaining().len(), DECK_SIZE - 1);
//! assert!(!shoe.remaining().contains(&first));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{CardId, GameRng, ShoeError, DECK_SIZE};

/// Contract for anything the round controller can deal from.
///
/// ## Implementation Notes
///
/// - `draw` must fail with [`ShoeError::Exhausted`] once every card is dealt
/// - `remaining` must not advance the cursor
/// - `shuffle` and `reset` put the cursor back to 0
pub trait CardSource {
    /// Restore canonical order and rewind the cursor.
    fn reset(&mut self);

    /// Reorder the cards and rewind the cursor.
    fn shuffle(&mut self, rng: &mut GameRng);

    /// Deal the card under the cursor.
    fn draw(&mut self) -> Result<CardId, ShoeError>;

    /// Undealt cards, in dealing order.
    fn remaining(&self) -> &[CardId];

    /// Number of cards already dealt.
    fn cursor(&self) -> usize;
}

/// A single 52-card deck with a dealing cursor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shoe {
    cards: Vec<CardId>,
    cursor: usize,
}

impl Shoe {
    /// Create a shoe in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: CardId::all().collect(),
            cursor: 0,
        }
    }

    /// Create a shoe with a fixed dealing order.
    ///
    /// Fails unless `order` holds each of the 52 identities exactly once.
    pub fn from_order(order: Vec<CardId>) -> Result<Self, ShoeError> {
        if order.len() != DECK_SIZE {
            return Err(ShoeError::NotAPermutation);
        }

        let mut seen = FxHashSet::default();
        if !order
            .iter()
            .all(|card| usize::from(card.raw()) < DECK_SIZE && seen.insert(*card))
        {
            return Err(ShoeError::NotAPermutation);
        }

        Ok(Self {
            cards: order,
            cursor: 0,
        })
    }

    /// The full dealing order, dealt and undealt.
    #[must_use]
    pub fn order(&self) -> &[CardId] {
        &self.cards
    }

    /// Cards already dealt, in dealing order.
    #[must_use]
    pub fn dealt(&self) -> &[CardId] {
        &self.cards[..self.cursor]
    }

    /// Check if every card has been dealt.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.cards.len()
    }
}

impl Default for Shoe {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for Shoe {
    fn reset(&mut self) {
        self.cards.clear();
        self.cards.extend(CardId::all());
        self.cursor = 0;
    }

    fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
        self.cursor = 0;
    }

    fn draw(&mut self) -> Result<CardId, ShoeError> {
        let card = *self
            .cards
            .get(self.cursor)
            .ok_or(ShoeError::Exhausted(self.cards.len()))?;
        self.cursor += 1;
        Ok(card)
    }

    fn remaining(&self) -> &[CardId] {
        &self.cards[self.cursor..]
    }

    fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(cards: &[CardId]) -> Vec<CardId> {
        let mut cards = cards.to_vec();
        cards.sort_unstable();
        cards
    }

    #[test]
    fn test_new_is_canonical() {
        let shoe = Shoe::new();
        let canonical: Vec<_> = CardId::all().collect();
        assert_eq!(shoe.order(), canonical.as_slice());
        assert_eq!(shoe.cursor(), 0);
    }

    #[test]
    fn test_shuffle_rewinds_and_permutes() {
        let mut shoe = Shoe::new();
        shoe.draw().unwrap();
        shoe.draw().unwrap();

        shoe.shuffle(&mut GameRng::new(3));

        assert_eq!(shoe.cursor(), 0);
        assert_eq!(sorted(shoe.order()), CardId::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_reset_restores_canonical_order() {
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut GameRng::new(11));
        shoe.draw().unwrap();

        shoe.reset();

        assert_eq!(shoe, Shoe::new());
    }

    #[test]
    fn test_draw_follows_order() {
        let mut shoe = Shoe::new();
        shoe.shuffle(&mut GameRng::new(5));
        let expected = shoe.order()[..3].to_vec();

        let drawn: Vec<_> = (0..3).map(|_| shoe.draw().unwrap()).collect();

        assert_eq!(drawn, expected);
        assert_eq!(shoe.dealt(), expected.as_slice());
    }

    #[test]
    fn test_draw_past_end_fails() {
        let mut shoe = Shoe::new();
        for _ in 0..DECK_SIZE {
            shoe.draw().unwrap();
        }
        assert!(shoe.is_exhausted());
        assert_eq!(shoe.draw(), Err(ShoeError::Exhausted(DECK_SIZE)));
        assert_eq!(shoe.cursor(), DECK_SIZE);
    }

    #[test]
    fn test_remaining_does_not_advance() {
        let mut shoe = Shoe::new();
        shoe.draw().unwrap();
        let before = shoe.remaining().to_vec();
        let again = shoe.remaining().to_vec();
        assert_eq!(before, again);
        assert_eq!(shoe.cursor(), 1);
        assert_eq!(before.len(), DECK_SIZE - 1);
    }

    #[test]
    fn test_from_order_rejects_duplicates() {
        let mut order: Vec<_> = CardId::all().collect();
        order[1] = order[0];
        assert_eq!(Shoe::from_order(order), Err(ShoeError::NotAPermutation));
    }

    #[test]
    fn test_from_order_rejects_short_deck() {
        let order: Vec<_> = CardId::all().take(51).collect();
        assert_eq!(Shoe::from_order(order), Err(ShoeError::NotAPermutation));
    }

    #[test]
    fn test_from_order_rejects_unknown_identity() {
        let mut order: Vec<_> = CardId::all().take(51).collect();
        order.push(CardId(99));
        assert_eq!(Shoe::from_order(order), Err(ShoeError::NotAPermutation));
    }

    #[test]
    fn test_from_order_keeps_order() {
        let mut order: Vec<_> = CardId::all().collect();
        order.reverse();
        let mut shoe = Shoe::from_order(order).unwrap();
        assert_eq!(shoe.draw().unwrap(), CardId::new(51));
    }
}
