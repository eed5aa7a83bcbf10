//! Auction behavior: termination, settlement, and the atomic award.

use std::collections::VecDeque;

use proptest::prelude::*;

use landlord::auction::{Auction, AuctionOutcome};
use landlord::board::{Board, SpaceId};
use landlord::core::{DiceRoll, Money, PlayerId};
use landlord::economy::{HoldingsIndex, Ledger};
use landlord::session::{DecisionProvider, GameSession, JailAction, TaxPayment};

const BALTIC: SpaceId = SpaceId::new(3);

/// Replays queued answers; sensible defaults once a queue runs dry
/// (decline, pass, roll for doubles, flat tax).
struct Scripted {
    purchases: VecDeque<bool>,
    bids: VecDeque<Money>,
}

impl Scripted {
    fn new(purchases: &[bool], bids: &[Money]) -> Self {
        Self {
            purchases: purchases.iter().copied().collect(),
            bids: bids.iter().copied().collect(),
        }
    }
}

impl DecisionProvider for Scripted {
    fn decide_purchase(&mut self, _: PlayerId, _: SpaceId, _: Money, _: Money) -> bool {
        self.purchases.pop_front().unwrap_or(false)
    }

    fn decide_bid(&mut self, _: PlayerId, _: SpaceId, _: Money, _: Money, _: Money) -> Money {
        self.bids.pop_front().unwrap_or(0)
    }

    fn decide_jail_action(&mut self, _: PlayerId, _: Money, _: u8) -> JailAction {
        JailAction::RollForDoubles
    }

    fn choose_tax_payment(&mut self, _: PlayerId, _: Money, _: Money) -> TaxPayment {
        TaxPayment::Flat
    }
}

fn setup(players: usize) -> (Ledger, HoldingsIndex) {
    let board = Board::standard();
    let mut ledger = Ledger::new(1_500);
    for player in PlayerId::all(players) {
        ledger.register(player).unwrap();
    }
    (ledger, HoldingsIndex::new(&board))
}

/// A declined purchase goes to auction; the only bidder wins at their
/// bid and the deed and money move together.
#[test]
fn test_declined_purchase_is_auctioned_and_won() {
    // Both seats decline to buy and bid 25 when asked. Whoever moves
    // first declines Baltic, then wins its auction as the first raiser.
    let mut session = GameSession::builder()
        .players(2)
        .provider(PlayerId::new(0), Box::new(Scripted::new(&[false], &[25])))
        .provider(PlayerId::new(1), Box::new(Scripted::new(&[false], &[25])))
        .build(42);

    let first = session.turn().active();
    session.take_turn_with_roll(DiceRoll::new(1, 2));

    assert_eq!(session.board().space(BALTIC).owner(), Some(first));
    assert!(session.holdings().holdings_of(first).contains(&BALTIC));
    assert!(!session.holdings().is_available(BALTIC));
    assert_eq!(session.ledger().balance(first).unwrap(), 1_475);
    session.holdings().assert_consistent(session.board());
}

/// When every bidder passes, the title stays with the bank and nobody
/// is charged.
#[test]
fn test_all_pass_leaves_title_with_bank() {
    let mut session = GameSession::builder()
        .players(3)
        .provider(PlayerId::new(0), Box::new(Scripted::new(&[false], &[])))
        .provider(PlayerId::new(1), Box::new(Scripted::new(&[false], &[])))
        .provider(PlayerId::new(2), Box::new(Scripted::new(&[false], &[])))
        .build(42);

    session.take_turn_with_roll(DiceRoll::new(1, 2));

    assert!(session.holdings().is_available(BALTIC));
    assert_eq!(session.board().space(BALTIC).owner(), None);
    for player in PlayerId::all(3) {
        assert_eq!(session.ledger().balance(player).unwrap(), 1_500);
    }
}

/// Direct protocol check: bidding, outbidding, passing, settling.
#[test]
fn test_three_way_bidding_settles_once() {
    let (ledger, holdings) = setup(3);
    let roster: Vec<PlayerId> = PlayerId::all(3).collect();
    let mut auction = Auction::start(BALTIC, &roster, &holdings).unwrap();
    let (a, b, c) = (roster[0], roster[1], roster[2]);

    auction.bid(a, 20, &ledger).unwrap();
    auction.bid(b, 40, &ledger).unwrap();
    auction.bid(c, 60, &ledger).unwrap();
    auction.pass(a).unwrap();
    auction.bid(b, 80, &ledger).unwrap();
    auction.pass(c).unwrap();

    assert_eq!(
        auction.settle().unwrap(),
        AuctionOutcome::Won {
            player: b,
            price: 80
        }
    );
    // A closed auction refuses everything.
    assert!(auction.bid(b, 90, &ledger).is_err());
    assert!(auction.settle().is_err());
}

proptest! {
    /// Whatever the bidders decide, round-driven auctions terminate and
    /// settle as a single winner or unsold.
    #[test]
    fn prop_auction_always_terminates(
        decisions in prop::collection::vec(0i64..200, 0..64),
        bidders in 1usize..5,
    ) {
        let (ledger, holdings) = setup(bidders);
        let roster: Vec<PlayerId> = PlayerId::all(bidders).collect();
        let mut auction = Auction::start(BALTIC, &roster, &holdings).unwrap();

        let mut queue: VecDeque<i64> = decisions.into_iter().collect();
        let mut rounds = 0usize;
        while auction.active_count() > 1 {
            rounds += 1;
            prop_assert!(rounds < 10_000, "auction failed to terminate");

            for &bidder in &roster {
                if auction.active_count() <= 1 {
                    break;
                }
                if !auction.is_active(bidder) || auction.highest_bidder() == Some(bidder) {
                    continue;
                }
                let amount = queue.pop_front().unwrap_or(0);
                if amount <= 0 || auction.bid(bidder, amount, &ledger).is_err() {
                    auction.pass(bidder).unwrap();
                }
            }
        }

        let outcome = auction.settle().unwrap();
        if let AuctionOutcome::Won { price, .. } = outcome {
            prop_assert!(price > 0);
        }
    }
}
