//! Sequential-bidding auction.
//!
//! An auction is created when a purchase is declined or unaffordable. It
//! runs in rounds over the still-active bidders: each either raises the
//! highest bid by at least the minimum increment or passes and stays out
//! for the rest of the auction. The driver keeps calling rounds until at
//! most one bidder is active, then settles. A settled auction is closed
//! for good; the next auction is a fresh value.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::board::SpaceId;
use crate::core::{GameError, Money, PlayerId, Result};
use crate::economy::{HoldingsIndex, Ledger};

/// Smallest allowed raise over the standing bid.
pub const MIN_INCREMENT: Money = 1;

/// Life cycle of an auction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionPhase {
    Running,
    Closed,
}

/// One seat at the auction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct Bidder {
    player: PlayerId,
    active: bool,
    last_bid: Money,
}

/// How a settled auction ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuctionOutcome {
    /// A single bidder survived with a positive bid.
    Won { player: PlayerId, price: Money },
    /// Nobody bid, or everybody passed: the title stays with the bank.
    Unsold,
}

/// State of one auction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Auction {
    space: SpaceId,
    bidders: SmallVec<[Bidder; 4]>,
    highest_bid: Money,
    highest_bidder: Option<PlayerId>,
    min_increment: Money,
    phase: AuctionPhase,
}

impl Auction {
    /// Open an auction for an available title.
    ///
    /// Returns `None` - the no-op failure the caller reports as "no
    /// winner" - when the roster is empty or the bank does not hold the
    /// title.
    #[must_use]
    pub fn start(space: SpaceId, players: &[PlayerId], holdings: &HoldingsIndex) -> Option<Self> {
        if players.is_empty() || !holdings.is_available(space) {
            return None;
        }
        debug!(%space, bidders = players.len(), "auction opened");
        Some(Self {
            space,
            bidders: players
                .iter()
                .map(|&player| Bidder {
                    player,
                    active: true,
                    last_bid: 0,
                })
                .collect(),
            highest_bid: 0,
            highest_bidder: None,
            min_increment: MIN_INCREMENT,
            phase: AuctionPhase::Running,
        })
    }

    /// The title under the hammer.
    #[must_use]
    pub fn space(&self) -> SpaceId {
        self.space
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> AuctionPhase {
        self.phase
    }

    /// The standing high bid (0 until someone bids).
    #[must_use]
    pub fn highest_bid(&self) -> Money {
        self.highest_bid
    }

    /// Who holds the standing high bid.
    #[must_use]
    pub fn highest_bidder(&self) -> Option<PlayerId> {
        self.highest_bidder
    }

    /// Bidders still in the running.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.bidders.iter().filter(|b| b.active).count()
    }

    /// Whether a player is still in the running.
    #[must_use]
    pub fn is_active(&self, player: PlayerId) -> bool {
        self.bidders
            .iter()
            .any(|b| b.player == player && b.active)
    }

    /// The roster, in seating order, regardless of activity.
    pub fn roster(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.bidders.iter().map(|b| b.player)
    }

    /// Whether the bidding phase is exhausted and `settle` may be called.
    #[must_use]
    pub fn is_decided(&self) -> bool {
        self.phase == AuctionPhase::Closed || self.active_count() <= 1
    }

    fn bidder_mut(&mut self, player: PlayerId) -> Result<&mut Bidder> {
        self.bidders
            .iter_mut()
            .find(|b| b.player == player)
            .ok_or(GameError::PlayerNotFound(player))
    }

    /// Raise the standing bid.
    ///
    /// Rejected - with no state change - when the auction is closed, the
    /// player passed earlier, the amount is not a legal raise, or the
    /// amount exceeds the player's balance.
    pub fn bid(&mut self, player: PlayerId, amount: Money, ledger: &Ledger) -> Result<()> {
        if self.phase == AuctionPhase::Closed {
            return Err(GameError::InvalidTransaction("auction is closed"));
        }
        if amount < 0 {
            return Err(GameError::InvalidAmount(amount));
        }
        let floor = self.highest_bid + self.min_increment;
        if amount < floor {
            return Err(GameError::InvalidTransaction("bid below the minimum raise"));
        }
        let balance = ledger.balance(player)?;
        if amount > balance {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                available: balance,
            });
        }
        let bidder = self.bidder_mut(player)?;
        if !bidder.active {
            return Err(GameError::InvalidTransaction("bidder has already passed"));
        }
        bidder.last_bid = amount;
        self.highest_bid = amount;
        self.highest_bidder = Some(player);
        debug!(space = %self.space, %player, amount, "bid");
        Ok(())
    }

    /// Drop out for the rest of the auction.
    pub fn pass(&mut self, player: PlayerId) -> Result<()> {
        if self.phase == AuctionPhase::Closed {
            return Err(GameError::InvalidTransaction("auction is closed"));
        }
        let bidder = self.bidder_mut(player)?;
        bidder.active = false;
        debug!(space = %self.space, %player, "pass");
        Ok(())
    }

    /// Close the auction and name the outcome.
    ///
    /// The sole surviving bidder wins at their own last bid; a last bid
    /// of zero (they never raised) means the title stays with the bank,
    /// as does an auction everybody passed out of.
    pub fn settle(&mut self) -> Result<AuctionOutcome> {
        if self.phase == AuctionPhase::Closed {
            return Err(GameError::InvalidTransaction("auction is closed"));
        }
        if self.active_count() > 1 {
            return Err(GameError::InvalidTransaction("bidding is still open"));
        }
        self.phase = AuctionPhase::Closed;

        let survivor = self.bidders.iter().find(|b| b.active);
        let outcome = match survivor {
            Some(bidder) if bidder.last_bid > 0 => AuctionOutcome::Won {
                player: bidder.player,
                price: bidder.last_bid,
            },
            _ => AuctionOutcome::Unsold,
        };
        debug!(space = %self.space, ?outcome, "auction settled");
        Ok(outcome)
    }
}
