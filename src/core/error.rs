//! Recoverable rule violations.
//!
//! Every business-rule failure in the engine is one of a closed set of
//! kinds, signaled to the immediate caller as a `Result`. None of them is
//! process-fatal: the turn driver decides the user-visible consequence
//! (a message, a forced auction, liquidation). The only unrecoverable
//! condition is a broken ownership invariant, which panics in the holdings
//! audit instead of being silently repaired.

use thiserror::Error;

use super::player::PlayerId;
use super::Money;

/// A recoverable rule violation.
///
/// Rejected operations leave no partial effect: every variant is produced
/// by validation that runs before any mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Registering a player that already has a ledger entry.
    #[error("{0} is already registered")]
    DuplicatePlayer(PlayerId),

    /// An operation referenced a player the ledger does not know.
    #[error("{0} is not registered")]
    PlayerNotFound(PlayerId),

    /// A negative monetary argument.
    #[error("invalid amount: {0}")]
    InvalidAmount(Money),

    /// A withdrawal, purchase, or bid exceeding the available balance.
    #[error("insufficient funds: needed {needed}, available {available}")]
    InsufficientFunds { needed: Money, available: Money },

    /// A structural violation: the operation is not legal in the current
    /// ownership, improvement, or auction state.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(&'static str),
}

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GameError::PlayerNotFound(PlayerId::new(2));
        assert_eq!(format!("{}", err), "Player 2 is not registered");

        let err = GameError::InsufficientFunds {
            needed: 100,
            available: 60,
        };
        assert_eq!(
            format!("{}", err),
            "insufficient funds: needed 100, available 60"
        );

        let err = GameError::InvalidAmount(-5);
        assert_eq!(format!("{}", err), "invalid amount: -5");
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            GameError::DuplicatePlayer(PlayerId::new(0)),
            GameError::DuplicatePlayer(PlayerId::new(0))
        );
        assert_ne!(
            GameError::PlayerNotFound(PlayerId::new(0)),
            GameError::PlayerNotFound(PlayerId::new(1))
        );
    }
}
