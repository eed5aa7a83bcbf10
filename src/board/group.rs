//! Color groups: monopoly detection and building costs.
//!
//! A group's membership is populated once at board construction and is
//! immutable afterwards. The target member count and house cost are fixed
//! properties of the color.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::space::SpaceId;
use crate::core::Money;

/// Index of a color group on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupId(pub u8);

impl GroupId {
    /// Create a group ID from a raw index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The eight street colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupColor {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
}

impl GroupColor {
    /// How many streets the group holds when complete.
    #[must_use]
    pub const fn target_count(self) -> usize {
        match self {
            GroupColor::Brown | GroupColor::DarkBlue => 2,
            _ => 3,
        }
    }

    /// Cost of one house (and of the hotel upgrade) on this color.
    #[must_use]
    pub const fn house_cost(self) -> Money {
        match self {
            GroupColor::Brown | GroupColor::LightBlue => 50,
            GroupColor::Pink | GroupColor::Orange => 100,
            GroupColor::Red | GroupColor::Yellow => 150,
            GroupColor::Green | GroupColor::DarkBlue => 200,
        }
    }
}

/// A color group and its member streets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorGroup {
    color: GroupColor,
    members: SmallVec<[SpaceId; 3]>,
}

impl ColorGroup {
    /// Create an empty group for a color.
    #[must_use]
    pub fn new(color: GroupColor) -> Self {
        Self {
            color,
            members: SmallVec::new(),
        }
    }

    /// The group's color.
    #[must_use]
    pub fn color(&self) -> GroupColor {
        self.color
    }

    /// Cost of one house on this group.
    #[must_use]
    pub fn house_cost(&self) -> Money {
        self.color.house_cost()
    }

    /// The member streets, in track order.
    #[must_use]
    pub fn members(&self) -> &[SpaceId] {
        &self.members
    }

    /// Whether the group has all of its streets.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.members.len() == self.color.target_count()
    }

    /// Add a member at board-construction time.
    ///
    /// Panics if the group would exceed its target count; a board that
    /// overfills a group is a construction defect.
    pub(crate) fn push_member(&mut self, space: SpaceId) {
        assert!(
            self.members.len() < self.color.target_count(),
            "group {:?} already has {} members",
            self.color,
            self.members.len()
        );
        self.members.push(space);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_counts() {
        assert_eq!(GroupColor::Brown.target_count(), 2);
        assert_eq!(GroupColor::DarkBlue.target_count(), 2);
        assert_eq!(GroupColor::Orange.target_count(), 3);
        assert_eq!(GroupColor::Green.target_count(), 3);
    }

    #[test]
    fn test_house_costs() {
        assert_eq!(GroupColor::Brown.house_cost(), 50);
        assert_eq!(GroupColor::Orange.house_cost(), 100);
        assert_eq!(GroupColor::Yellow.house_cost(), 150);
        assert_eq!(GroupColor::DarkBlue.house_cost(), 200);
    }

    #[test]
    fn test_membership_fills_to_target() {
        let mut group = ColorGroup::new(GroupColor::Brown);
        assert!(!group.is_full());

        group.push_member(SpaceId::new(1));
        group.push_member(SpaceId::new(3));
        assert!(group.is_full());
        assert_eq!(group.members(), &[SpaceId::new(1), SpaceId::new(3)]);
    }

    #[test]
    #[should_panic(expected = "already has")]
    fn test_overfull_group_panics() {
        let mut group = ColorGroup::new(GroupColor::DarkBlue);
        group.push_member(SpaceId::new(37));
        group.push_member(SpaceId::new(39));
        group.push_member(SpaceId::new(0));
    }
}
