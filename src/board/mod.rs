//! The board: spaces, color groups, rent, improvements.
//!
//! ## Key Types
//!
//! - `SpaceId`: index into the fixed 40-space track
//! - `SpaceKind`: closed taxonomy (street, railroad, utility, tax, draw,
//!   corner)
//! - `ColorGroup`: monopoly membership and building costs
//! - `Board`: the track plus every rule query that needs to see more
//!   than one space (monopoly, even-build/even-sell, rent)

pub mod board;
pub mod group;
pub mod layout;
pub mod property;
pub mod space;

pub use board::Board;
pub use group::{ColorGroup, GroupColor, GroupId};
pub use layout::{
    BOARD_SPACES, FREE_PARKING, GO, GO_TO_JAIL, INCOME_TAX_FLAT, INCOME_TAX_PERCENT, JAIL,
    LUXURY_TAX,
};
pub use property::{DeedState, PropertyState, HOTEL_LEVEL, MAX_HOUSES};
pub use space::{CornerKind, DeckKind, Space, SpaceId, SpaceKind, TaxKind};
