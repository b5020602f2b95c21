//! Round result types.

use core::fmt;

use crate::hand::BLACKJACK;

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has higher value).
    PlayerWins,
    /// Dealer wins (player busts or dealer has higher value).
    DealerWins,
    /// Push (tie, neither busted).
    Push,
}

impl Outcome {
    /// Decides the outcome from the final hand values.
    ///
    /// A busted player loses even when the dealer also busts.
    ///
    /// ```
    /// use blackjack_round::Outcome;
    ///
    /// assert_eq!(Outcome::decide(20, 18), Outcome::PlayerWins);
    /// assert_eq!(Outcome::decide(23, 24), Outcome::DealerWins);
    /// assert_eq!(Outcome::decide(19, 19), Outcome::Push);
    /// ```
    #[must_use]
    pub const fn decide(player_value: u8, dealer_value: u8) -> Self {
        let player_bust = player_value > BLACKJACK;
        let dealer_bust = dealer_value > BLACKJACK;

        if player_bust || (!dealer_bust && dealer_value > player_value) {
            Self::DealerWins
        } else if dealer_bust || player_value > dealer_value {
            Self::PlayerWins
        } else {
            Self::Push
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::PlayerWins => "Player wins!",
            Self::DealerWins => "Dealer wins!",
            Self::Push => "Push!",
        };
        f.write_str(text)
    }
}

/// Result of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player busted.
    pub player_bust: bool,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Builds a result from the final hand values.
    #[must_use]
    pub const fn from_values(player_value: u8, dealer_value: u8) -> Self {
        Self {
            outcome: Outcome::decide(player_value, dealer_value),
            player_value,
            dealer_value,
            player_bust: player_value > BLACKJACK,
            dealer_bust: dealer_value > BLACKJACK,
        }
    }
}
