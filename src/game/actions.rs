use tracing::debug;

use crate::card::Card;
use crate::error::{ActionError, DealError};
use crate::options::DealOrder;

use super::{Round, RoundState};

/// Cards needed for the opening deal.
const OPENING_CARDS: usize = 4;

#[derive(Clone, Copy)]
enum Seat {
    Player,
    Dealer,
}

impl DealOrder {
    const fn seats(self) -> [Seat; OPENING_CARDS] {
        match self {
            Self::PlayerFirst => [Seat::Player, Seat::Player, Seat::Dealer, Seat::Dealer],
            Self::Alternating => [Seat::Player, Seat::Dealer, Seat::Player, Seat::Dealer],
        }
    }
}

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Deals two cards to the player and two to the dealer.
    ///
    /// The first card the dealer receives is the hole card.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealing state or fewer than
    /// four cards remain.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < OPENING_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        for seat in self.options.deal_order.seats() {
            let card = self.deck.draw()?;
            match seat {
                Seat::Player => self.player.add_card(card),
                Seat::Dealer => self.dealer.add_card(card),
            }
        }

        debug!(
            player_value = self.player.value(),
            dealer_visible = self.dealer.visible_value(),
            "opening hands dealt"
        );
        self.set_state(RoundState::PlayerTurn);

        Ok(())
    }

    /// Player action: Hit (draw a card).
    ///
    /// A bust ends the player's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state or the deck
    /// is empty.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deck.draw()?;
        self.player.add_card(card);

        if self.player.is_bust() {
            debug!(value = self.player.value(), "player busted");
            self.set_state(RoundState::DealerTurn);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in player turn state.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        debug!(value = self.player.value(), "player stands");
        self.set_state(RoundState::DealerTurn);

        Ok(())
    }
}
