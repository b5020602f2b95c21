//! Round events for display and transcripts.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::result::RoundResult;

/// Something that happened during [`Round::play`](crate::Round::play).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// Opening hands are on the table.
    Dealt {
        /// The player's cards.
        player: Vec<Card>,
        /// The player's hand value.
        player_value: u8,
        /// The dealer's cards that are face up.
        dealer_visible: Vec<Card>,
    },
    /// A command was rejected; the player is asked again.
    InvalidAction {
        /// The rejected input.
        input: String,
    },
    /// The player drew a card.
    PlayerHit {
        /// The card drawn.
        card: Card,
        /// All the player's cards after the draw.
        hand: Vec<Card>,
        /// The player's hand value after the draw.
        value: u8,
    },
    /// The player went over 21.
    PlayerBust {
        /// The player's final hand value.
        value: u8,
    },
    /// The player stood.
    PlayerStand {
        /// The player's final hand value.
        value: u8,
    },
    /// The dealer turned over the hole card.
    DealerReveal {
        /// The dealer's opening cards.
        cards: Vec<Card>,
        /// The dealer's opening hand value.
        value: u8,
    },
    /// The dealer drew a card.
    DealerHit {
        /// The card drawn.
        card: Card,
        /// The dealer's hand value after the draw.
        value: u8,
    },
    /// The dealer went over 21.
    DealerBust {
        /// The dealer's final hand value.
        value: u8,
    },
    /// The dealer stopped drawing.
    DealerStand {
        /// The dealer's final hand value.
        value: u8,
    },
    /// The outcome is decided.
    Resolved(RoundResult),
}

/// Receives [`RoundEvent`]s as a round is played.
pub trait RoundObserver {
    /// Called once per event, in order.
    fn on_event(&mut self, event: &RoundEvent);
}

/// Discards all events.
impl RoundObserver for () {
    fn on_event(&mut self, _event: &RoundEvent) {}
}

/// Records every event of a round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<RoundEvent>,
}

impl EventLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Returns the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Returns how many times the player was asked again after bad input.
    #[must_use]
    pub fn rejected_inputs(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, RoundEvent::InvalidAction { .. }))
            .count()
    }
}

impl RoundObserver for EventLog {
    fn on_event(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}
