//! Draw decks and card effects.
//!
//! Both decks are shuffled once at session start and then cycle: a drawn
//! card goes back underneath. The exception is the get-out-of-jail-free
//! card, which stays with the player who drew it and only rejoins the
//! deck when it is spent.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::board::SpaceId;
use crate::core::{GameRng, Money};

/// A card's effect, applied by the turn driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    /// The bank pays the player.
    Collect(Money),
    /// The player pays the bank.
    Pay(Money),
    /// Every opponent pays the player.
    CollectFromEach(Money),
    /// The player pays every opponent.
    PayEach(Money),
    /// Move forward to a named space, collecting salary past Go.
    AdvanceTo(SpaceId),
    GoToJail,
    GetOutOfJailFree,
    /// Per-building assessment over the player's streets.
    Repairs { per_house: Money, per_hotel: Money },
}

/// A shuffled-once cyclic draw pile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: VecDeque<Card>,
    /// Whether this deck's jail card is out with a player.
    jail_card_out: bool,
}

impl Deck {
    /// Shuffle a card list into a draw pile.
    #[must_use]
    pub fn new(mut cards: Vec<Card>, rng: &mut GameRng) -> Self {
        rng.shuffle(&mut cards);
        Self {
            cards: cards.into(),
            jail_card_out: false,
        }
    }

    /// Cards currently in the pile.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is empty (only possible for a custom deck).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Draw the top card. Everything except the jail card cycles to the
    /// bottom immediately.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.pop_front()?;
        match card {
            Card::GetOutOfJailFree => self.jail_card_out = true,
            _ => self.cards.push_back(card),
        }
        Some(card)
    }

    /// Whether this deck is waiting for its jail card back.
    #[must_use]
    pub fn awaits_jail_card(&self) -> bool {
        self.jail_card_out
    }

    /// Put a spent jail card under the pile.
    pub fn return_jail_card(&mut self) {
        if self.jail_card_out {
            self.cards.push_back(Card::GetOutOfJailFree);
            self.jail_card_out = false;
        }
    }
}

/// The chance pile.
#[must_use]
pub fn chance_cards() -> Vec<Card> {
    vec![
        Card::AdvanceTo(crate::board::GO),
        // Illinois Avenue.
        Card::AdvanceTo(SpaceId::new(24)),
        // St. Charles Place.
        Card::AdvanceTo(SpaceId::new(11)),
        // Boardwalk.
        Card::AdvanceTo(SpaceId::new(39)),
        Card::Collect(50),
        Card::GetOutOfJailFree,
        Card::GoToJail,
        Card::Repairs {
            per_house: 25,
            per_hotel: 100,
        },
        Card::Pay(15),
        Card::PayEach(50),
        Card::Collect(150),
    ]
}

/// The community-chest pile.
#[must_use]
pub fn community_chest_cards() -> Vec<Card> {
    vec![
        Card::AdvanceTo(crate::board::GO),
        Card::Collect(200),
        Card::Pay(50),
        Card::Collect(50),
        Card::GetOutOfJailFree,
        Card::GoToJail,
        Card::CollectFromEach(50),
        Card::Collect(100),
        Card::Collect(20),
        Card::Repairs {
            per_house: 40,
            per_hotel: 115,
        },
        Card::Collect(25),
    ]
}
