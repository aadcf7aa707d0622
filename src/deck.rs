//! The single 52-card deck a game is played with.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DrawError;

/// An ordered deck of cards.
///
/// Cards are only ever removed from the top; a deck is never replenished or
/// reshuffled once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in reverse draw order; the top of the deck is the last element.
    cards: Vec<Card>,
}

impl Deck {
    /// Builds the canonical, unshuffled 52-card deck.
    ///
    /// Cards are drawn suit by suit (Hearts, Diamonds, Spades, Clubs), each
    /// suit from Ace up to King.
    #[must_use]
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self::from_draw_order(cards)
    }

    /// Builds the canonical deck and applies a uniform random permutation.
    #[must_use]
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        // Fisher-Yates, swapping from the last index down.
        deck.cards.shuffle(rng);
        deck
    }

    /// Builds a deck that deals `cards` front to back.
    pub(crate) fn from_draw_order(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DrawError::EmptyDeck`] if no cards remain. The deck is left
    /// unchanged.
    pub fn draw(&mut self) -> Result<Card, DrawError> {
        self.cards.pop().ok_or(DrawError::EmptyDeck)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.iter().rev().copied().collect()
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
