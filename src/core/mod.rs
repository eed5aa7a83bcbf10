//! Core types: players, money, errors, randomness.
//!
//! These are the building blocks every other module leans on; nothing in
//! here knows about the board, the ledger, or the turn loop.

pub mod error;
pub mod player;
pub mod rng;

pub use error::{GameError, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceRoll, GameRng};

/// Monetary amount in game currency.
///
/// Signed so that arithmetic on differences is unsurprising; the ledger
/// rejects negative amounts at its boundary, so a stored balance is never
/// negative.
pub type Money = i64;
