use alloc::vec::Vec;

use tracing::{debug, trace};

use crate::card::Card;
use crate::error::{DealerError, ResolveError};
use crate::result::RoundResult;

use super::{Round, RoundState};

/// Value at which the dealer stops drawing.
const DEALER_STANDS_ON: u8 = 17;

/// Returns whether the dealer draws another card.
///
/// The dealer draws below 17, and on a soft 17 only when
/// `stand_on_soft_17` is disabled. The player's hand is never consulted.
///
/// ```
/// use blackjack_round::dealer_should_hit;
///
/// assert!(dealer_should_hit(16, false, true));
/// assert!(!dealer_should_hit(17, true, true));
/// assert!(dealer_should_hit(17, true, false));
/// ```
#[must_use]
pub const fn dealer_should_hit(value: u8, is_soft: bool, stand_on_soft_17: bool) -> bool {
    value < DEALER_STANDS_ON || (value == DEALER_STANDS_ON && is_soft && !stand_on_soft_17)
}

impl Round {
    /// Dealer plays their hand according to the rules.
    ///
    /// The dealer reveals their hole card and draws until reaching 17 or
    /// higher, even when the player has already busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        self.dealer.reveal_hole();

        let mut drawn_cards = Vec::new();
        loop {
            let value = self.dealer.value();
            let is_soft = self.dealer.is_soft();
            if !dealer_should_hit(value, is_soft, self.options.stand_on_soft_17) {
                trace!(value, is_soft, "dealer stands");
                break;
            }

            let card = self.deck.draw()?;
            trace!(card = %card.short(), "dealer hits");
            self.dealer.add_card(card);
            drawn_cards.push(card);
        }

        debug!(
            value = self.dealer.value(),
            drawn = drawn_cards.len(),
            "dealer finished"
        );
        self.set_state(RoundState::Resolved);

        Ok(drawn_cards)
    }

    /// Reads the outcome from the final hand values.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not resolved yet.
    pub fn resolve(&self) -> Result<RoundResult, ResolveError> {
        if self.state != RoundState::Resolved {
            return Err(ResolveError::InvalidState);
        }

        Ok(RoundResult::from_values(
            self.player.value(),
            self.dealer.value(),
        ))
    }
}
