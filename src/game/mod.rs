//! Round controller and state management.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::deck::Deck;
use crate::hand::{DealerHand, Hand};
use crate::options::RoundOptions;

mod actions;
mod dealer;
mod play;
pub mod state;

pub use dealer::dealer_should_hit;
pub use state::RoundState;

/// A single blackjack round between one player and the dealer.
///
/// The round owns the deck and both hands. It moves through
/// [`RoundState::Dealing`], [`RoundState::PlayerTurn`],
/// [`RoundState::DealerTurn`] and finally [`RoundState::Resolved`]. Drive it
/// step by step with [`deal`](Self::deal), [`hit`](Self::hit),
/// [`stand`](Self::stand), [`dealer_play`](Self::dealer_play) and
/// [`resolve`](Self::resolve), or all at once with [`play`](Self::play).
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards left to draw.
    deck: Deck,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand.
    dealer: DealerHand,
}

impl Round {
    /// Creates a round with a fresh deck shuffled from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::{Round, RoundOptions, RoundState, DECK_SIZE};
    ///
    /// let round = Round::new(RoundOptions::default(), 42);
    /// assert_eq!(round.state(), RoundState::Dealing);
    /// assert_eq!(round.cards_remaining(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new(options: RoundOptions, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::with_rng(options, &mut rng)
    }

    /// Creates a round with a fresh deck shuffled by `rng`.
    #[must_use]
    pub fn with_rng<R: Rng + ?Sized>(options: RoundOptions, rng: &mut R) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        Self::with_deck(options, deck)
    }

    /// Creates a round that draws from `deck` as-is.
    #[must_use]
    pub const fn with_deck(options: RoundOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            state: RoundState::Dealing,
            player: Hand::new(),
            dealer: DealerHand::new(),
        }
    }

    fn set_state(&mut self, next: RoundState) {
        debug!(from = ?self.state, to = ?next, "round state changed");
        self.state = next;
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the round options.
    #[must_use]
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &DealerHand {
        &self.dealer
    }

    /// Returns the remaining deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
