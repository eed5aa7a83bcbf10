//! The automated player.
//!
//! Threshold heuristics, deliberately simple: keep a cash reserve, buy
//! anything affordable above it, bid up to list price, build on
//! monopolies, prefer rolling out of jail while cash is tight. All
//! decisions are pure functions of the figures passed in, so automated
//! sessions replay deterministically.

use crate::board::SpaceId;
use crate::core::{Money, PlayerId};
use crate::session::decision::{DecisionProvider, JailAction, TaxPayment};

/// Cash the automated player tries not to dip below.
const DEFAULT_RESERVE: Money = 150;

/// Raise step the automated player uses at auction.
const BID_STEP: Money = 10;

/// Balance above which paying the jail fine beats waiting on dice.
const JAIL_FINE_COMFORT: Money = 500;

/// Heuristic decision provider for computer-controlled seats.
#[derive(Clone, Copy, Debug)]
pub struct AutoPolicy {
    /// Cash floor kept after any voluntary spend.
    pub reserve: Money,
}

impl Default for AutoPolicy {
    fn default() -> Self {
        Self {
            reserve: DEFAULT_RESERVE,
        }
    }
}

impl AutoPolicy {
    /// A policy with a custom cash floor.
    #[must_use]
    pub fn with_reserve(reserve: Money) -> Self {
        Self { reserve }
    }

    fn spendable(&self, balance: Money) -> Money {
        (balance - self.reserve).max(0)
    }
}

impl DecisionProvider for AutoPolicy {
    fn decide_purchase(
        &mut self,
        _player: PlayerId,
        _space: SpaceId,
        price: Money,
        balance: Money,
    ) -> bool {
        price <= self.spendable(balance)
    }

    fn decide_bid(
        &mut self,
        _player: PlayerId,
        _space: SpaceId,
        price: Money,
        highest_bid: Money,
        balance: Money,
    ) -> Money {
        // Worth at most list price, and never below the reserve.
        let ceiling = price.min(self.spendable(balance));
        let raise = highest_bid + BID_STEP;
        if raise <= ceiling {
            raise
        } else {
            0
        }
    }

    fn decide_jail_action(
        &mut self,
        _player: PlayerId,
        balance: Money,
        jail_cards: u8,
    ) -> JailAction {
        if jail_cards > 0 {
            JailAction::UseCard
        } else if balance >= JAIL_FINE_COMFORT {
            JailAction::PayFine
        } else {
            JailAction::RollForDoubles
        }
    }

    fn choose_tax_payment(
        &mut self,
        _player: PlayerId,
        flat: Money,
        percent_amount: Money,
    ) -> TaxPayment {
        if percent_amount < flat {
            TaxPayment::Percentage
        } else {
            TaxPayment::Flat
        }
    }

    fn wants_improvement(
        &mut self,
        _player: PlayerId,
        _space: SpaceId,
        cost: Money,
        balance: Money,
    ) -> bool {
        cost <= self.spendable(balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> PlayerId {
        PlayerId::new(0)
    }

    fn s() -> SpaceId {
        SpaceId::new(1)
    }

    #[test]
    fn test_buys_above_reserve_only() {
        let mut policy = AutoPolicy::default();

        assert!(policy.decide_purchase(p(), s(), 60, 1_500));
        assert!(!policy.decide_purchase(p(), s(), 60, 200));
    }

    #[test]
    fn test_bids_step_up_to_list_price() {
        let mut policy = AutoPolicy::default();

        assert_eq!(policy.decide_bid(p(), s(), 60, 0, 1_500), 10);
        assert_eq!(policy.decide_bid(p(), s(), 60, 40, 1_500), 50);
        // A raise past list price is a pass.
        assert_eq!(policy.decide_bid(p(), s(), 60, 55, 1_500), 0);
        // Broke players pass.
        assert_eq!(policy.decide_bid(p(), s(), 60, 0, 100), 0);
    }

    #[test]
    fn test_jail_preferences() {
        let mut policy = AutoPolicy::default();

        assert_eq!(policy.decide_jail_action(p(), 100, 1), JailAction::UseCard);
        assert_eq!(
            policy.decide_jail_action(p(), 1_000, 0),
            JailAction::PayFine
        );
        assert_eq!(
            policy.decide_jail_action(p(), 100, 0),
            JailAction::RollForDoubles
        );
    }

    #[test]
    fn test_tax_picks_minimum() {
        let mut policy = AutoPolicy::default();

        assert_eq!(
            policy.choose_tax_payment(p(), 200, 120),
            TaxPayment::Percentage
        );
        assert_eq!(policy.choose_tax_payment(p(), 200, 250), TaxPayment::Flat);
        assert_eq!(policy.choose_tax_payment(p(), 200, 200), TaxPayment::Flat);
    }

    #[test]
    fn test_builds_while_cash_lasts() {
        let mut policy = AutoPolicy::with_reserve(100);

        assert!(policy.wants_improvement(p(), s(), 50, 200));
        assert!(!policy.wants_improvement(p(), s(), 150, 200));
    }
}
