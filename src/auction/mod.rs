//! Auction protocol for declined or unaffordable purchases.
//!
//! ## Key Types
//!
//! - `Auction`: the Running -> Closed bidding state machine
//! - `AuctionOutcome`: a winner at a positive price, or unsold
//! - `MIN_INCREMENT`: smallest legal raise

pub mod state;

pub use state::{Auction, AuctionOutcome, AuctionPhase, MIN_INCREMENT};
