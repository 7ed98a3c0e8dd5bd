//! Shared helpers for integration tests.

#![allow(dead_code)]

use blackjack_table::core::{CardId, GameRng, ShoeError};
use blackjack_table::shoe::CardSource;

/// Install a test logger once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Card source that deals a fixed order and ignores shuffles.
#[derive(Clone, Debug)]
pub struct StackedShoe {
    cards: Vec<CardId>,
    cursor: usize,
}

impl StackedShoe {
    /// Deal exactly `cards`, then run out.
    pub fn exact(cards: &[u8]) -> Self {
        Self {
            cards: cards.iter().map(|&id| CardId::new(id)).collect(),
            cursor: 0,
        }
    }

    /// Deal `front` first, then the rest of the deck in canonical order.
    pub fn with_front(front: &[u8]) -> Self {
        let mut cards: Vec<CardId> = front.iter().map(|&id| CardId::new(id)).collect();
        cards.extend(CardId::all().filter(|c| !front.contains(&c.raw())));
        Self { cards, cursor: 0 }
    }
}

impl CardSource for StackedShoe {
    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn shuffle(&mut self, _rng: &mut GameRng) {
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

// Card identities by name. Blocks of 13 per suit, ace first.
pub const ACE_S: u8 = 0;
pub const TWO_S: u8 = 1;
pub const THREE_S: u8 = 2;
pub const FIVE_S: u8 = 4;
pub const SIX_S: u8 = 5;
pub const EIGHT_S: u8 = 7;
pub const NINE_S: u8 = 8;
pub const TEN_S: u8 = 9;
pub const QUEEN_S: u8 = 11;
pub const KING_S: u8 = 12;
pub const ACE_H: u8 = 13;
pub const SIX_H: u8 = 18;
pub const EIGHT_H: u8 = 20;
pub const KING_H: u8 = 25;
