//! The decision boundary with the presentation layer.
//!
//! The core never reads input: whenever a turn needs a choice, it makes
//! a blocking call into the acting player's `DecisionProvider` and uses
//! the returned value. A human-facing implementation forwards to dialogs;
//! the automated one answers immediately. Either way the turn driver
//! sees a plain synchronous call - no polling, no flags.

use crate::board::SpaceId;
use crate::core::{Money, PlayerId};

/// How a jailed player spends the start of their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JailAction {
    /// Pay the fine and move normally.
    PayFine,
    /// Spend a get-out-of-jail-free card and move normally.
    UseCard,
    /// Roll; a double walks free, anything else stays put.
    RollForDoubles,
}

/// Which income-tax computation the payer elects.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaxPayment {
    /// The flat amount.
    Flat,
    /// The percentage-of-cash amount.
    Percentage,
}

/// One player's source of choices.
///
/// Every method blocks until it has an answer and must not touch game
/// state - the driver passes in the figures a decision needs.
pub trait DecisionProvider {
    /// Buy the landed-on title at list price, or send it to auction?
    fn decide_purchase(
        &mut self,
        player: PlayerId,
        space: SpaceId,
        price: Money,
        balance: Money,
    ) -> bool;

    /// Name a bid above `highest_bid`, or 0 to pass.
    fn decide_bid(
        &mut self,
        player: PlayerId,
        space: SpaceId,
        price: Money,
        highest_bid: Money,
        balance: Money,
    ) -> Money;

    /// Choose how to open a turn in jail.
    fn decide_jail_action(&mut self, player: PlayerId, balance: Money, jail_cards: u8)
        -> JailAction;

    /// Elect the flat or the percentage income tax.
    fn choose_tax_payment(
        &mut self,
        player: PlayerId,
        flat: Money,
        percent_amount: Money,
    ) -> TaxPayment;

    /// Build one more house (or the hotel) on an improvable street?
    ///
    /// Advisory follow-up at the end of the player's own turn; default
    /// is to never build.
    fn wants_improvement(
        &mut self,
        _player: PlayerId,
        _space: SpaceId,
        _cost: Money,
        _balance: Money,
    ) -> bool {
        false
    }
}
