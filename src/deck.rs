//! The 52-card deck.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::{DeckError, EmptyDeckError};

/// An ordered deck of unique cards, drawn from the front.
///
/// Cards are never added after construction. Drawn cards stay in the
/// backing buffer behind `position` and are no longer visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
}

impl Deck {
    /// Creates a full deck in suit-major order, ranks ascending within each
    /// suit.
    ///
    /// ```
    /// use blackjack_round::{Card, Deck, Rank, Suit, DECK_SIZE};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Spades, Rank::Ace));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        Self { cards, position: 0 }
    }

    /// Creates a stacked deck that draws `cards` in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::DuplicateCard`] if any card appears twice.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        for (index, card) in cards.iter().enumerate() {
            if cards[..index].contains(card) {
                return Err(DeckError::DuplicateCard(*card));
            }
        }

        Ok(Self { cards, position: 0 })
    }

    /// Shuffles the remaining cards in place.
    ///
    /// The permutation is uniform given a uniform `rng`; no cards are added
    /// or removed.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.position..].shuffle(rng);
        debug!(remaining = self.len(), "deck shuffled");
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        let card = *self.cards.get(self.position).ok_or(EmptyDeckError)?;
        self.position += 1;
        trace!(card = %card.short(), remaining = self.len(), "card drawn");
        Ok(card)
    }

    /// Returns the remaining cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards[self.position..]
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len() - self.position
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
