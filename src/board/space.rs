//! Space identification and the closed space taxonomy.
//!
//! Every cell on the 40-space track is one `Space`: a name plus a
//! `SpaceKind`. The kind is a closed enum dispatched by pattern matching -
//! there is no runtime type inspection anywhere in the engine.

use serde::{Deserialize, Serialize};

use crate::board::group::GroupId;
use crate::board::property::{DeedState, PropertyState};

/// Index of a space on the fixed track.
///
/// The standard board has 40 spaces, so the raw value is 0-39.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpaceId(pub u8);

impl SpaceId {
    /// Create a space ID from a raw track index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw track index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Space {}", self.0)
    }
}

/// Which tax a tax space levies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxKind {
    /// Flat amount or a percentage of cash, payer's choice.
    Income,
    /// Flat amount only.
    Luxury,
}

/// Which deck a draw space pulls from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckKind {
    Chance,
    CommunityChest,
}

/// The four corner spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerKind {
    Go,
    /// Jail and "just visiting" share the cell.
    Jail,
    FreeParking,
    GoToJail,
}

/// Closed taxonomy of board spaces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    /// A buildable street belonging to a color group.
    Street(PropertyState),
    /// One of the four railroads.
    Railroad(DeedState),
    /// One of the two utilities.
    Utility(DeedState),
    Tax(TaxKind),
    Draw(DeckKind),
    Corner(CornerKind),
}

/// One cell on the track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Space {
    pub name: &'static str,
    pub kind: SpaceKind,
}

impl Space {
    pub(crate) fn new(name: &'static str, kind: SpaceKind) -> Self {
        Self { name, kind }
    }

    /// The list price, if this space can be owned.
    #[must_use]
    pub fn price(&self) -> Option<crate::core::Money> {
        match &self.kind {
            SpaceKind::Street(p) => Some(p.price),
            SpaceKind::Railroad(d) | SpaceKind::Utility(d) => Some(d.price),
            _ => None,
        }
    }

    /// The current owner, if this space can be owned and has one.
    #[must_use]
    pub fn owner(&self) -> Option<crate::core::PlayerId> {
        match &self.kind {
            SpaceKind::Street(p) => p.owner,
            SpaceKind::Railroad(d) | SpaceKind::Utility(d) => d.owner,
            _ => None,
        }
    }

    pub(crate) fn set_owner(&mut self, owner: Option<crate::core::PlayerId>) {
        match &mut self.kind {
            SpaceKind::Street(p) => p.owner = owner,
            SpaceKind::Railroad(d) | SpaceKind::Utility(d) => d.owner = owner,
            _ => {}
        }
    }

    pub(crate) fn set_mortgaged(&mut self, mortgaged: bool) {
        match &mut self.kind {
            SpaceKind::Street(p) => p.mortgaged = mortgaged,
            SpaceKind::Railroad(d) | SpaceKind::Utility(d) => d.mortgaged = mortgaged,
            _ => {}
        }
    }

    /// Whether the title is mortgaged. False for unownable spaces.
    #[must_use]
    pub fn is_mortgaged(&self) -> bool {
        match &self.kind {
            SpaceKind::Street(p) => p.mortgaged,
            SpaceKind::Railroad(d) | SpaceKind::Utility(d) => d.mortgaged,
            _ => false,
        }
    }

    /// Whether this space can hold a title deed at all.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        matches!(
            self.kind,
            SpaceKind::Street(_) | SpaceKind::Railroad(_) | SpaceKind::Utility(_)
        )
    }

    /// The street state, if this space is a street.
    #[must_use]
    pub fn as_street(&self) -> Option<&PropertyState> {
        match &self.kind {
            SpaceKind::Street(p) => Some(p),
            _ => None,
        }
    }

    pub(crate) fn as_street_mut(&mut self) -> Option<&mut PropertyState> {
        match &mut self.kind {
            SpaceKind::Street(p) => Some(p),
            _ => None,
        }
    }

    /// The color group, if this space is a street.
    #[must_use]
    pub fn group(&self) -> Option<GroupId> {
        self.as_street().map(|p| p.group)
    }
}
