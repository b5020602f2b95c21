use tracing::debug;

use crate::action::{Action, ActionSource};
use crate::error::RoundError;
use crate::hand::Hand;
use crate::observer::{RoundEvent, RoundObserver};
use crate::result::RoundResult;

use super::{Round, RoundState};

impl Round {
    /// Plays the whole round.
    ///
    /// Commands are read from `source` until the player stands or busts.
    /// Unrecognized commands are reported as [`RoundEvent::InvalidAction`]
    /// and read again without touching the round. Every step is reported to
    /// `observer`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::{EventLog, Round, RoundOptions, ScriptedActions};
    ///
    /// let mut round = Round::new(RoundOptions::default(), 7);
    /// let mut log = EventLog::new();
    /// let result = round
    ///     .play(&mut ScriptedActions::new(["s"]), &mut log)
    ///     .unwrap();
    /// assert_eq!(round.player_hand().len(), 2);
    /// assert_eq!(result.dealer_value, round.dealer_hand().value());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the deck runs out, the source stops yielding
    /// commands before the player is done, or the round was already started.
    pub fn play<S, O>(
        &mut self,
        source: &mut S,
        observer: &mut O,
    ) -> Result<RoundResult, RoundError>
    where
        S: ActionSource + ?Sized,
        O: RoundObserver + ?Sized,
    {
        self.deal()?;
        observer.on_event(&RoundEvent::Dealt {
            player: self.player.cards().to_vec(),
            player_value: self.player.value(),
            dealer_visible: self.dealer.visible_cards().to_vec(),
        });

        self.play_player_turn(source, observer)?;
        self.play_dealer_turn(observer)?;

        let result = self.resolve()?;
        debug!(outcome = ?result.outcome, "round resolved");
        observer.on_event(&RoundEvent::Resolved(result));

        Ok(result)
    }

    fn play_player_turn<S, O>(
        &mut self,
        source: &mut S,
        observer: &mut O,
    ) -> Result<(), RoundError>
    where
        S: ActionSource + ?Sized,
        O: RoundObserver + ?Sized,
    {
        while self.state == RoundState::PlayerTurn {
            let input = source.next_command().ok_or(RoundError::InputClosed)?;

            match input.parse::<Action>() {
                Ok(Action::Hit) => {
                    let card = self.hit()?;
                    observer.on_event(&RoundEvent::PlayerHit {
                        card,
                        hand: self.player.cards().to_vec(),
                        value: self.player.value(),
                    });
                    if self.player.is_bust() {
                        observer.on_event(&RoundEvent::PlayerBust {
                            value: self.player.value(),
                        });
                    }
                }
                Ok(Action::Stand) => {
                    self.stand()?;
                    observer.on_event(&RoundEvent::PlayerStand {
                        value: self.player.value(),
                    });
                }
                Err(err) => {
                    debug!(%err, "rejected player input");
                    observer.on_event(&RoundEvent::InvalidAction { input: err.0 });
                }
            }
        }

        Ok(())
    }

    fn play_dealer_turn<O>(&mut self, observer: &mut O) -> Result<(), RoundError>
    where
        O: RoundObserver + ?Sized,
    {
        let drawn = self.dealer_play()?;

        let cards = self.dealer.cards();
        let opening = &cards[..cards.len() - drawn.len()];
        let mut running = Hand::new();
        for card in opening {
            running.add_card(*card);
        }
        observer.on_event(&RoundEvent::DealerReveal {
            cards: opening.to_vec(),
            value: running.value(),
        });

        for card in drawn {
            running.add_card(card);
            observer.on_event(&RoundEvent::DealerHit {
                card,
                value: running.value(),
            });
        }

        let value = self.dealer.value();
        if self.dealer.is_bust() {
            observer.on_event(&RoundEvent::DealerBust { value });
        } else {
            observer.on_event(&RoundEvent::DealerStand { value });
        }

        Ok(())
    }
}
