//! Card identities and the blackjack value table.
//!
//! A card is identified by an integer in `0..52`. Identities are laid out in
//! four blocks of 13 (spades, hearts, diamonds, clubs), each block running
//! ace, two, ..., ten, jack, queen, king.
//!
//! ## Value Table
//!
//! | Rank            | Points |
//! |-----------------|--------|
//! | Ace             | 11     |
//! | Two - Nine      | face   |
//! | Ten, J, Q, K    | 10     |
//!
//! Aces are never re-valued to 1. A hand holding two aces totals 22.

use serde::{Deserialize, Serialize};

/// Number of distinct cards in the shoe.
pub const DECK_SIZE: usize = 52;

/// Cards per suit.
const RANKS_PER_SUIT: u8 = 13;

/// Points of an ace.
pub const ACE_POINTS: u8 = 11;

/// Identity of one physical card, `0..52`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a card identity.
    ///
    /// Panics if `id` is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn new(id: u8) -> Self {
        assert!((id as usize) < DECK_SIZE, "Card identity must be in 0..52");
        Self(id)
    }

    /// Get the raw identity.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Iterate over all 52 identities in canonical order.
    ///
    /// ```
    /// use blackjack_table::core::CardId;
    ///
    /// let all: Vec<_> = CardId::all().collect();
    /// assert_eq!(all.len(), 52);
    /// assert_eq!(all[0], CardId::new(0));
    /// assert_eq!(all[51], CardId::new(51));
    /// ```
    pub fn all() -> impl Iterator<Item = CardId> {
        (0..DECK_SIZE as u8).map(CardId)
    }

    /// Rank from 1 (ace) to 13 (king).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 % RANKS_PER_SUIT + 1
    }

    /// Suit of this card.
    #[must_use]
    pub const fn suit(self) -> Suit {
        match self.0 / RANKS_PER_SUIT {
            0 => Suit::Spades,
            1 => Suit::Hearts,
            2 => Suit::Diamonds,
            _ => Suit::Clubs,
        }
    }

    /// Blackjack points of this card. See [`value_of`].
    #[must_use]
    pub const fn value(self) -> u8 {
        value_of(self)
    }

    /// Check if this card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank() == 1
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rank = match self.rank() {
            1 => "A".to_string(),
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            n => n.to_string(),
        };
        write!(f, "{}{}", rank, self.suit().symbol())
    }
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

/// Blackjack points for a card identity.
///
/// Total over every identity, never varies at runtime.
#[must_use]
pub const fn value_of(card: CardId) -> u8 {
    match card.rank() {
        1 => ACE_POINTS,
        r if r > 10 => 10,
        r => r,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aces_are_eleven() {
        for id in [0, 13, 26, 39] {
            assert_eq!(value_of(CardId::new(id)), 11);
            assert!(CardId::new(id).is_ace());
        }
    }

    #[test]
    fn test_pip_cards_keep_face_value() {
        for suit in 0..4u8 {
            for rank in 2..=9u8 {
                let card = CardId::new(suit * 13 + rank - 1);
                assert_eq!(value_of(card), rank);
            }
        }
    }

    #[test]
    fn test_ten_and_faces_are_ten() {
        for suit in 0..4u8 {
            for offset in 9..13u8 {
                assert_eq!(value_of(CardId::new(suit * 13 + offset)), 10);
            }
        }
    }

    #[test]
    fn test_value_is_stable() {
        for card in CardId::all() {
            assert_eq!(value_of(card), value_of(card));
            assert_eq!(card.value(), value_of(card));
        }
    }

    #[test]
    fn test_suit_blocks() {
        assert_eq!(CardId::new(0).suit(), Suit::Spades);
        assert_eq!(CardId::new(12).suit(), Suit::Spades);
        assert_eq!(CardId::new(13).suit(), Suit::Hearts);
        assert_eq!(CardId::new(26).suit(), Suit::Diamonds);
        assert_eq!(CardId::new(51).suit(), Suit::Clubs);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId::new(0)), "A♠");
        assert_eq!(format!("{}", CardId::new(22)), "10♥");
        assert_eq!(format!("{}", CardId::new(38)), "K♦");
        assert_eq!(format!("{}", CardId::new(49)), "J♣");
    }

    #[test]
    #[should_panic(expected = "Card identity must be in 0..52")]
    fn test_out_of_range_identity() {
        let _ = CardId::new(52);
    }
}
