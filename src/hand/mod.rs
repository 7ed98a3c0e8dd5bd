//! Player and dealer hands.
//!
//! A hand is the ordered list of cards dealt to one party plus a running
//! point total. The total always counts every card, face down or not; the
//! per-card `hidden` flag exists only for whoever draws the table.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::CardId;

/// Total above which a hand is bust.
pub const BUST_LIMIT: u32 = 21;

/// One card held in a hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandCard {
    pub card: CardId,
    /// Face down. Display only.
    pub hidden: bool,
}

/// Cards dealt to one party and their point total.
///
/// ```
/// use blackjack_table::core::CardId;
/// use blackjack_table::hand::Hand;
///
/// let mut dealer = Hand::new();
/// dealer.push(CardId::new(9), true); // ten of spades, face down
/// dealer.push(CardId::new(6), false); // seven of spades
///
/// assert_eq!(dealer.points(), 17);
/// assert_eq!(dealer.visible_points(), 7);
/// assert!(!dealer.is_fully_revealed());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    /// SmallVec sized for the longest realistic hand without spilling.
    cards: SmallVec<[HandCard; 8]>,
    points: u32,
}

impl Hand {
    /// Create an empty hand.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card, face down if `hidden`.
    pub fn push(&mut self, card: CardId, hidden: bool) {
        self.cards.push(HandCard { card, hidden });
        self.points = self.cards.iter().map(|c| u32::from(c.card.value())).sum();
    }

    /// Point total of every card, hidden ones included.
    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Point total of the face-up cards only.
    #[must_use]
    pub fn visible_points(&self) -> u32 {
        self.cards
            .iter()
            .filter(|c| !c.hidden)
            .map(|c| u32::from(c.card.value()))
            .sum()
    }

    /// Turn the card at `index` face up.
    ///
    /// Returns `true` if the card was face down.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.cards.get_mut(index) {
            Some(slot) if slot.hidden => {
                slot.hidden = false;
                true
            }
            _ => false,
        }
    }

    /// Check if no card is face down.
    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.cards.iter().all(|c| !c.hidden)
    }

    /// Index of the first face-down card, if any.
    #[must_use]
    pub fn hidden_index(&self) -> Option<usize> {
        self.cards.iter().position(|c| c.hidden)
    }

    /// Cards in the order they were dealt.
    #[must_use]
    pub fn cards(&self) -> &[HandCard] {
        &self.cards
    }

    /// Number of cards held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the hand holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Check if the total is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.points > BUST_LIMIT
    }

    /// Check for a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.points == BUST_LIMIT
    }

    /// Discard every card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.points = 0;
    }
}
