//! The bank: player balances and the building pools.
//!
//! The ledger is the sole authority for money movement. Every mutation
//! validates before it touches a balance, so a rejected operation leaves
//! no partial effect, and a stored balance is never negative.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::core::{GameError, Money, PlayerId, Result};

/// Houses the bank stocks.
pub const HOUSE_POOL: u8 = 32;

/// Hotels the bank stocks.
pub const HOTEL_POOL: u8 = 12;

/// The bank's building inventory.
///
/// Improvement purchases draw from these pools and sales return to them;
/// both directions fail - they never silently saturate - when a pool is
/// drained or full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildingStock {
    houses: u8,
    hotels: u8,
}

impl Default for BuildingStock {
    fn default() -> Self {
        Self {
            houses: HOUSE_POOL,
            hotels: HOTEL_POOL,
        }
    }
}

impl BuildingStock {
    /// A full inventory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Houses currently available.
    #[must_use]
    pub fn houses(&self) -> u8 {
        self.houses
    }

    /// Hotels currently available.
    #[must_use]
    pub fn hotels(&self) -> u8 {
        self.hotels
    }

    /// Take one house from the pool.
    pub fn take_house(&mut self) -> Result<()> {
        if self.houses == 0 {
            return Err(GameError::InvalidTransaction("the bank has no houses left"));
        }
        self.houses -= 1;
        Ok(())
    }

    /// Return one house to the pool.
    pub fn return_house(&mut self) -> Result<()> {
        self.return_houses(1)
    }

    /// Return several houses to the pool.
    pub fn return_houses(&mut self, count: u8) -> Result<()> {
        if self.houses + count > HOUSE_POOL {
            return Err(GameError::InvalidTransaction("house pool is already full"));
        }
        self.houses += count;
        Ok(())
    }

    /// Take one hotel from the pool.
    pub fn take_hotel(&mut self) -> Result<()> {
        if self.hotels == 0 {
            return Err(GameError::InvalidTransaction("the bank has no hotels left"));
        }
        self.hotels -= 1;
        Ok(())
    }

    /// Return one hotel to the pool.
    pub fn return_hotel(&mut self) -> Result<()> {
        if self.hotels >= HOTEL_POOL {
            return Err(GameError::InvalidTransaction("hotel pool is already full"));
        }
        self.hotels += 1;
        Ok(())
    }

    /// Swap 4 houses for a hotel: the street's houses come back to the
    /// pool and one hotel leaves it.
    pub fn hotel_upgrade(&mut self) -> Result<()> {
        if self.hotels == 0 {
            return Err(GameError::InvalidTransaction("the bank has no hotels left"));
        }
        if self.houses + 4 > HOUSE_POOL {
            return Err(GameError::InvalidTransaction("house pool is already full"));
        }
        self.hotels -= 1;
        self.houses += 4;
        Ok(())
    }

    /// Reverse of [`BuildingStock::hotel_upgrade`]: requires 4 houses in
    /// the pool to put back on the street.
    pub fn hotel_downgrade(&mut self) -> Result<()> {
        if self.houses < 4 {
            return Err(GameError::InvalidTransaction(
                "the bank cannot supply 4 houses for a hotel sale",
            ));
        }
        if self.hotels >= HOTEL_POOL {
            return Err(GameError::InvalidTransaction("hotel pool is already full"));
        }
        self.houses -= 4;
        self.hotels += 1;
        Ok(())
    }
}

/// The bank ledger: one balance per registered player.
#[derive(Clone, Debug)]
pub struct Ledger {
    starting_balance: Money,
    balances: FxHashMap<PlayerId, Money>,
    stock: BuildingStock,
}

impl Ledger {
    /// Create an empty ledger seeding new registrations at
    /// `starting_balance`.
    #[must_use]
    pub fn new(starting_balance: Money) -> Self {
        Self {
            starting_balance,
            balances: FxHashMap::default(),
            stock: BuildingStock::new(),
        }
    }

    /// Open a balance for a player at the starting amount.
    pub fn register(&mut self, player: PlayerId) -> Result<()> {
        if self.balances.contains_key(&player) {
            return Err(GameError::DuplicatePlayer(player));
        }
        self.balances.insert(player, self.starting_balance);
        debug!(%player, balance = self.starting_balance, "registered");
        Ok(())
    }

    /// Close a player's balance (bankruptcy).
    pub fn deregister(&mut self, player: PlayerId) -> Result<()> {
        self.balances
            .remove(&player)
            .map(|_| ())
            .ok_or(GameError::PlayerNotFound(player))
    }

    /// Whether a player has a balance.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.balances.contains_key(&player)
    }

    /// A player's current balance.
    pub fn balance(&self, player: PlayerId) -> Result<Money> {
        self.balances
            .get(&player)
            .copied()
            .ok_or(GameError::PlayerNotFound(player))
    }

    /// Credit a player. No upper bound.
    pub fn deposit(&mut self, player: PlayerId, amount: Money) -> Result<()> {
        if amount < 0 {
            return Err(GameError::InvalidAmount(amount));
        }
        let balance = self
            .balances
            .get_mut(&player)
            .ok_or(GameError::PlayerNotFound(player))?;
        *balance += amount;
        debug!(%player, amount, balance = *balance, "deposit");
        Ok(())
    }

    /// Debit a player. Fails without effect if the amount exceeds the
    /// balance.
    pub fn withdraw(&mut self, player: PlayerId, amount: Money) -> Result<()> {
        if amount < 0 {
            return Err(GameError::InvalidAmount(amount));
        }
        let balance = self
            .balances
            .get_mut(&player)
            .ok_or(GameError::PlayerNotFound(player))?;
        if amount > *balance {
            return Err(GameError::InsufficientFunds {
                needed: amount,
                available: *balance,
            });
        }
        *balance -= amount;
        debug!(%player, amount, balance = *balance, "withdraw");
        Ok(())
    }

    /// Move money between two players, atomically: if the withdrawal
    /// fails, the deposit never happens.
    pub fn transfer(&mut self, from: PlayerId, to: PlayerId, amount: Money) -> Result<()> {
        if !self.balances.contains_key(&to) {
            return Err(GameError::PlayerNotFound(to));
        }
        self.withdraw(from, amount)?;
        if let Some(balance) = self.balances.get_mut(&to) {
            *balance += amount;
            debug!(%from, %to, amount, "transfer");
        }
        Ok(())
    }

    /// Iterate over registered players.
    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.balances.keys().copied()
    }

    /// The building inventory.
    #[must_use]
    pub fn stock(&self) -> &BuildingStock {
        &self.stock
    }

    /// Mutable building inventory.
    pub fn stock_mut(&mut self) -> &mut BuildingStock {
        &mut self.stock
    }
}
