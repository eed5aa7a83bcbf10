//! Chance and community-chest decks.

pub mod deck;

pub use deck::{chance_cards, community_chest_cards, Card, Deck};
