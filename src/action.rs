//! Player actions and where they come from.

use alloc::collections::VecDeque;
use alloc::string::{String, ToString};
use core::str::FromStr;

use crate::error::InvalidActionInput;

/// A player decision during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Draw one more card.
    Hit,
    /// End the turn.
    Stand,
}

impl FromStr for Action {
    type Err = InvalidActionInput;

    /// Parses `h`/`hit` or `s`/`stand`, ignoring case and surrounding
    /// whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let token = input.trim();
        if token.eq_ignore_ascii_case("h") || token.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if token.eq_ignore_ascii_case("s") || token.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(InvalidActionInput(token.to_string()))
        }
    }
}

/// Supplies raw player commands to [`Round::play`](crate::Round::play).
///
/// Implementations may block, for example on a terminal. Returning `None`
/// means no more input will arrive.
pub trait ActionSource {
    /// Returns the next command token.
    fn next_command(&mut self) -> Option<String>;
}

/// A fixed list of commands, consumed in order.
///
/// ```
/// use blackjack_round::{ActionSource, ScriptedActions};
///
/// let mut source = ScriptedActions::new(["h", "s"]);
/// assert_eq!(source.next_command().as_deref(), Some("h"));
/// assert_eq!(source.remaining(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedActions {
    commands: VecDeque<String>,
}

impl ScriptedActions {
    /// Creates a source that yields `commands` in order.
    #[must_use]
    pub fn new<I, S>(commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of commands not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl ActionSource for ScriptedActions {
    fn next_command(&mut self) -> Option<String> {
        self.commands.pop_front()
    }
}
