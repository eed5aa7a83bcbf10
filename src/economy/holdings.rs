//! Title deed tracking: who holds which space.
//!
//! Every purchasable space lives in exactly one place - the bank's
//! available pool or exactly one player's holdings - and each space
//! carries a back-pointer to its owner on the board. `HoldingsIndex` is
//! the owning component for moving a deed, and it moves money and deed
//! in the same call so no observer can see a half-applied sale.
//!
//! Deed sets are persistent (`im`), so cloning a session for lookahead
//! or replay shares structure instead of copying.

use im::HashSet as ImHashSet;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::board::{Board, SpaceId};
use crate::core::{GameError, Money, PlayerId, Result};
use crate::economy::Ledger;

/// Deed locations for one session.
#[derive(Clone, Debug, Default)]
pub struct HoldingsIndex {
    /// Spaces the bank still offers for sale.
    available: ImHashSet<SpaceId>,
    /// Deeds by player. A missing entry means "owns nothing".
    owned: FxHashMap<PlayerId, ImHashSet<SpaceId>>,
}

impl HoldingsIndex {
    /// Create an index with every purchasable space in the bank's pool.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        Self {
            available: board.purchasable_spaces().into_iter().collect(),
            owned: FxHashMap::default(),
        }
    }

    /// Whether the bank still holds a space's deed.
    #[must_use]
    pub fn is_available(&self, space: SpaceId) -> bool {
        self.available.contains(&space)
    }

    /// Number of deeds the bank still holds.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.available.len()
    }

    /// The deeds a player holds. Empty - not an error - for a player who
    /// owns nothing.
    #[must_use]
    pub fn holdings_of(&self, player: PlayerId) -> ImHashSet<SpaceId> {
        self.owned.get(&player).cloned().unwrap_or_default()
    }

    /// Sell an available deed to a player at its list price.
    pub fn sell(
        &mut self,
        board: &mut Board,
        ledger: &mut Ledger,
        space: SpaceId,
        buyer: PlayerId,
    ) -> Result<()> {
        let price = board
            .space(space)
            .price()
            .ok_or(GameError::InvalidTransaction("space cannot be owned"))?;
        self.sell_at(board, ledger, space, buyer, price)
    }

    /// Sell an available deed to a player at an agreed price (auctions).
    ///
    /// Four effects apply together or not at all: the price leaves the
    /// buyer's balance, the space leaves the pool, the space's owner is
    /// set, and the deed joins the buyer's holdings. Validation runs
    /// before the only fallible mutation (the withdrawal), so a failed
    /// sale changes nothing.
    pub fn sell_at(
        &mut self,
        board: &mut Board,
        ledger: &mut Ledger,
        space: SpaceId,
        buyer: PlayerId,
        price: Money,
    ) -> Result<()> {
        if !ledger.contains(buyer) {
            return Err(GameError::PlayerNotFound(buyer));
        }
        if !board.space(space).is_purchasable() {
            return Err(GameError::InvalidTransaction("space cannot be owned"));
        }
        if !self.available.contains(&space) {
            return Err(GameError::InvalidTransaction(
                "title is not held by the bank",
            ));
        }

        ledger.withdraw(buyer, price)?;
        self.available.remove(&space);
        board.space_mut(space).set_owner(Some(buyer));
        self.owned.entry(buyer).or_default().insert(space);

        debug!(%space, %buyer, price, "title sold");
        self.debug_audit(board);
        Ok(())
    }

    /// Return a player's deed to the bank's pool.
    ///
    /// No money moves; mortgage settlement and building repossession are
    /// the caller's business before the title changes hands.
    pub fn release_title(
        &mut self,
        board: &mut Board,
        player: PlayerId,
        space: SpaceId,
    ) -> Result<()> {
        let holdings = self
            .owned
            .get_mut(&player)
            .filter(|set| !set.is_empty())
            .ok_or(GameError::PlayerNotFound(player))?;
        if holdings.remove(&space).is_none() {
            return Err(GameError::InvalidTransaction(
                "deed is not held by this player",
            ));
        }
        board.space_mut(space).set_owner(None);
        self.available.insert(space);

        debug!(%space, %player, "title released");
        self.debug_audit(board);
        Ok(())
    }

    /// Verify the exactly-one-location invariant, panicking on violation.
    ///
    /// A deed in two holdings, or owned and pooled at once, is a core
    /// defect: fail loudly rather than repair.
    pub fn assert_consistent(&self, board: &Board) {
        for space in board.purchasable_spaces() {
            let pooled = self.available.contains(&space);
            let holders: Vec<PlayerId> = self
                .owned
                .iter()
                .filter(|(_, set)| set.contains(&space))
                .map(|(&player, _)| player)
                .collect();

            assert!(
                holders.len() <= 1,
                "{space} held by multiple players: {holders:?}"
            );
            assert!(
                pooled != (holders.len() == 1),
                "{space} pooled={pooled} but holders={holders:?}"
            );
            assert_eq!(
                board.space(space).owner(),
                holders.first().copied(),
                "{space} owner back-pointer out of sync"
            );
        }
    }

    #[cfg(debug_assertions)]
    fn debug_audit(&self, board: &Board) {
        self.assert_consistent(board);
    }

    #[cfg(not(debug_assertions))]
    fn debug_audit(&self, _board: &Board) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameError;

    const MEDITERRANEAN: SpaceId = SpaceId::new(1);
    const GO: SpaceId = SpaceId::new(0);

    fn setup(players: usize) -> (Board, Ledger, HoldingsIndex) {
        let board = Board::standard();
        let mut ledger = Ledger::new(1_500);
        for player in PlayerId::all(players) {
            ledger.register(player).unwrap();
        }
        let holdings = HoldingsIndex::new(&board);
        (board, ledger, holdings)
    }

    #[test]
    fn test_pool_starts_with_all_titles() {
        let (board, _, holdings) = setup(2);
        assert_eq!(holdings.available_count(), 28);
        assert!(holdings.is_available(MEDITERRANEAN));
        assert!(!holdings.is_available(GO));
    }

    #[test]
    fn test_sell_applies_all_four_effects() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let a = PlayerId::new(0);

        holdings.sell(&mut board, &mut ledger, MEDITERRANEAN, a).unwrap();

        assert_eq!(ledger.balance(a).unwrap(), 1_440);
        assert!(!holdings.is_available(MEDITERRANEAN));
        assert_eq!(board.space(MEDITERRANEAN).owner(), Some(a));
        assert!(holdings.holdings_of(a).contains(&MEDITERRANEAN));
        holdings.assert_consistent(&board);
    }

    #[test]
    fn test_sell_to_unregistered_buyer() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let ghost = PlayerId::new(9);

        let err = holdings
            .sell(&mut board, &mut ledger, MEDITERRANEAN, ghost)
            .unwrap_err();
        assert_eq!(err, GameError::PlayerNotFound(ghost));
        assert!(holdings.is_available(MEDITERRANEAN));
    }

    #[test]
    fn test_sell_owned_title_rejected() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));

        holdings.sell(&mut board, &mut ledger, MEDITERRANEAN, a).unwrap();
        let err = holdings
            .sell(&mut board, &mut ledger, MEDITERRANEAN, b)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidTransaction(_)));
        assert_eq!(board.space(MEDITERRANEAN).owner(), Some(a));
        assert_eq!(ledger.balance(b).unwrap(), 1_500);
    }

    #[test]
    fn test_failed_sale_leaves_no_trace() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let a = PlayerId::new(0);
        let boardwalk = SpaceId::new(39);

        ledger.withdraw(a, 1_200).unwrap();
        let err = holdings
            .sell(&mut board, &mut ledger, boardwalk, a)
            .unwrap_err();
        assert!(matches!(err, GameError::InsufficientFunds { .. }));

        assert_eq!(ledger.balance(a).unwrap(), 300);
        assert!(holdings.is_available(boardwalk));
        assert_eq!(board.space(boardwalk).owner(), None);
        assert!(holdings.holdings_of(a).is_empty());
    }

    #[test]
    fn test_sell_unownable_space_rejected() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let err = holdings
            .sell(&mut board, &mut ledger, GO, PlayerId::new(0))
            .unwrap_err();
        assert_eq!(err, GameError::InvalidTransaction("space cannot be owned"));
    }

    #[test]
    fn test_release_title_round_trip() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let a = PlayerId::new(0);

        holdings.sell(&mut board, &mut ledger, MEDITERRANEAN, a).unwrap();
        holdings.release_title(&mut board, a, MEDITERRANEAN).unwrap();

        assert!(holdings.is_available(MEDITERRANEAN));
        assert_eq!(board.space(MEDITERRANEAN).owner(), None);
        assert!(holdings.holdings_of(a).is_empty());
        // Money does not move on release.
        assert_eq!(ledger.balance(a).unwrap(), 1_440);
    }

    #[test]
    fn test_release_without_holdings() {
        let (mut board, _, mut holdings) = setup(2);
        let a = PlayerId::new(0);

        let err = holdings
            .release_title(&mut board, a, MEDITERRANEAN)
            .unwrap_err();
        assert_eq!(err, GameError::PlayerNotFound(a));
    }

    #[test]
    fn test_release_somebody_elses_deed() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));

        holdings.sell(&mut board, &mut ledger, MEDITERRANEAN, a).unwrap();
        holdings
            .sell(&mut board, &mut ledger, SpaceId::new(3), b)
            .unwrap();

        let err = holdings
            .release_title(&mut board, b, MEDITERRANEAN)
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidTransaction(_)));
        assert_eq!(board.space(MEDITERRANEAN).owner(), Some(a));
    }

    #[test]
    fn test_sell_at_auction_price() {
        let (mut board, mut ledger, mut holdings) = setup(2);
        let a = PlayerId::new(0);

        holdings
            .sell_at(&mut board, &mut ledger, MEDITERRANEAN, a, 35)
            .unwrap();
        assert_eq!(ledger.balance(a).unwrap(), 1_465);
        assert_eq!(board.space(MEDITERRANEAN).owner(), Some(a));
    }

    #[test]
    #[should_panic(expected = "held by multiple players")]
    fn test_audit_catches_double_ownership() {
        let (board, _, mut holdings) = setup(2);
        let (a, b) = (PlayerId::new(0), PlayerId::new(1));

        // Corrupt the index directly: one deed in two holdings.
        holdings.available.remove(&MEDITERRANEAN);
        holdings.owned.entry(a).or_default().insert(MEDITERRANEAN);
        holdings.owned.entry(b).or_default().insert(MEDITERRANEAN);

        holdings.assert_consistent(&board);
    }
}
