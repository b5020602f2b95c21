//! Error types for deck and round operations.

use alloc::string::String;

use thiserror::Error;

use crate::card::Card;

/// Drawing from a deck with no cards left.
///
/// A full deck covers any realistic round, so this signals a logic defect
/// and the round is aborted rather than recovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the deck is empty")]
pub struct EmptyDeckError;

/// Errors that can occur when building a deck from explicit cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The same card appears more than once.
    #[error("duplicate card: {0}")]
    DuplicateCard(Card),
}

/// An unrecognized player command.
///
/// Handled inside the player loop by prompting again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid action {0:?}, expected h or s")]
pub struct InvalidActionInput(pub String);

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur while the dealer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round state for dealer play.
    #[error("invalid round state for dealer play")]
    InvalidState,
    /// No cards left in the deck.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when resolving the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Invalid round state for resolution.
    #[error("invalid round state for resolution")]
    InvalidState,
}

/// Fatal errors that abort a round driven by [`Round::play`](crate::Round::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// Dealer play failed.
    #[error("dealer play failed: {0}")]
    Dealer(#[from] DealerError),
    /// Resolution failed.
    #[error("resolution failed: {0}")]
    Resolve(#[from] ResolveError),
    /// The action source ran out of input before the player finished.
    #[error("player input closed")]
    InputClosed,
}
