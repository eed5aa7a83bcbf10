//! The game session: turn driver, decision boundary, notifications.
//!
//! ## Key Types
//!
//! - `GameSession` / `SessionBuilder`: owned, injected components and
//!   the turn loop
//! - `DecisionProvider`: blocking choice boundary (purchase, bid, jail,
//!   tax)
//! - `AutoPolicy`: the automated player
//! - `GameObserver`: advisory, read-only notifications

pub mod decision;
pub mod driver;
pub mod observer;
pub mod policy;

pub use decision::{DecisionProvider, JailAction, TaxPayment};
pub use driver::{
    GameSession, PlayerStatus, SessionBuilder, DEFAULT_GO_SALARY, DEFAULT_JAIL_FINE,
    DEFAULT_STARTING_BALANCE,
};
pub use observer::{EventLog, GameObserver};
pub use policy::AutoPolicy;
