//! Money and ownership: the bank ledger and the deed index.
//!
//! The ledger is the only component that moves money; the holdings index
//! is the only component that moves deeds, and it moves both together
//! when a title is sold.

pub mod holdings;
pub mod ledger;

pub use holdings::HoldingsIndex;
pub use ledger::{BuildingStock, Ledger, HOTEL_POOL, HOUSE_POOL};
