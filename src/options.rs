//! Round configuration options.

/// Order in which the four opening cards are dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DealOrder {
    /// Player, player, dealer, dealer.
    #[default]
    PlayerFirst,
    /// Player, dealer, player, dealer.
    Alternating,
}

/// Configuration options for a blackjack round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_round::{DealOrder, RoundOptions};
///
/// let options = RoundOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_deal_order(DealOrder::Alternating);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOptions {
    /// Whether dealer stands on soft 17.
    pub stand_on_soft_17: bool,
    /// Opening deal order.
    pub deal_order: DealOrder,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            stand_on_soft_17: true,
            deal_order: DealOrder::PlayerFirst,
        }
    }
}

impl RoundOptions {
    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the opening deal order.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::{DealOrder, RoundOptions};
    ///
    /// let options = RoundOptions::default().with_deal_order(DealOrder::Alternating);
    /// assert_eq!(options.deal_order, DealOrder::Alternating);
    /// ```
    #[must_use]
    pub const fn with_deal_order(mut self, order: DealOrder) -> Self {
        self.deal_order = order;
        self
    }
}
