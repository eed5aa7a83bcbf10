//! # landlord
//!
//! A four-player property-trading board game engine. The crate is the
//! economic/turn state machine only: bank ledger, title deeds,
//! improvement rules, rent, auctions, and turn sequencing. Rendering and
//! input collection live behind two traits at the boundary
//! (`DecisionProvider` in, `GameObserver` out).
//!
//! ## Design Principles
//!
//! 1. **No globals**: the board, bank, decks, and rotation are owned
//!    fields of one `GameSession`, so parallel test sessions never
//!    interfere.
//!
//! 2. **Closed enums over type inspection**: space kinds, cards, jail
//!    actions, and errors are all matched exhaustively.
//!
//! 3. **Check-then-mutate**: every money or ownership operation
//!    validates first and signals refusals as `Result` or `false`; a
//!    failed operation leaves no partial effect.
//!
//! 4. **Deterministic replay**: one seeded RNG drives dice, the turn
//!    order, and the deck shuffles.
//!
//! ## Modules
//!
//! - `core`: player IDs, money, errors, RNG
//! - `board`: spaces, color groups, rent and improvement rules
//! - `economy`: the bank ledger, building pools, and deed index
//! - `auction`: the bidding state machine
//! - `cards`: chance and community-chest decks
//! - `turn`: rotation and the consecutive-doubles rule
//! - `session`: the turn driver and its boundary traits

pub mod auction;
pub mod board;
pub mod cards;
pub mod core;
pub mod economy;
pub mod session;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{DiceRoll, GameError, GameRng, Money, PlayerId, PlayerMap, Result};

pub use crate::board::{
    Board, ColorGroup, CornerKind, DeckKind, GroupColor, GroupId, PropertyState, Space, SpaceId,
    SpaceKind, TaxKind,
};

pub use crate::economy::{BuildingStock, HoldingsIndex, Ledger};

pub use crate::auction::{Auction, AuctionOutcome, AuctionPhase};

pub use crate::cards::{Card, Deck};

pub use crate::turn::{RollVerdict, TurnState};

pub use crate::session::{
    AutoPolicy, DecisionProvider, EventLog, GameObserver, GameSession, JailAction, PlayerStatus,
    SessionBuilder, TaxPayment,
};
