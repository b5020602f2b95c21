//! A single-round blackjack engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals one player and the dealer
//! from a 52-card [`Deck`], runs the player's hit/stand loop, plays the
//! dealer's fixed strategy, and decides the [`Outcome`].
//!
//! # Example
//!
//! ```
//! use blackjack_round::{Round, RoundOptions, ScriptedActions};
//!
//! let mut round = Round::new(RoundOptions::default(), 42);
//! let result = round.play(&mut ScriptedActions::new(["s"]), &mut ()).unwrap();
//! println!("{}", result.outcome);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod observer;
pub mod options;
pub mod result;

// Re-export main types
pub use action::{Action, ActionSource, ScriptedActions};
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, DealError, DealerError, DeckError, EmptyDeckError, InvalidActionInput,
    ResolveError, RoundError,
};
pub use game::{Round, RoundState, dealer_should_hit};
pub use hand::{BLACKJACK, DealerHand, Hand};
pub use observer::{EventLog, RoundEvent, RoundObserver};
pub use options::{DealOrder, RoundOptions};
pub use result::{Outcome, RoundResult};
