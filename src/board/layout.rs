//! The standard 40-space track.
//!
//! Fixed data only: names, prices, rent tables, group assignments, and
//! the well-known positions. Rule logic lives in `board::Board`.

use crate::board::group::{ColorGroup, GroupColor, GroupId};
use crate::board::property::{DeedState, PropertyState};
use crate::board::space::{CornerKind, DeckKind, Space, SpaceId, SpaceKind, TaxKind};
use crate::core::Money;

/// Number of spaces on the track.
pub const BOARD_SPACES: usize = 40;

/// The Go corner.
pub const GO: SpaceId = SpaceId::new(0);

/// The jail / just-visiting corner.
pub const JAIL: SpaceId = SpaceId::new(10);

/// The free-parking corner.
pub const FREE_PARKING: SpaceId = SpaceId::new(20);

/// The go-to-jail corner.
pub const GO_TO_JAIL: SpaceId = SpaceId::new(30);

/// Flat income-tax amount.
pub const INCOME_TAX_FLAT: Money = 200;

/// Income-tax percentage alternative, applied to cash.
pub const INCOME_TAX_PERCENT: Money = 10;

/// Flat luxury-tax amount.
pub const LUXURY_TAX: Money = 75;

/// Railroad base rent; doubles with each additional railroad owned.
pub const RAILROAD_BASE_RENT: Money = 25;

fn street(name: &'static str, group: GroupId, price: Money, rents: [Money; 6]) -> Space {
    Space::new(name, SpaceKind::Street(PropertyState::new(group, price, rents)))
}

fn railroad(name: &'static str) -> Space {
    Space::new(name, SpaceKind::Railroad(DeedState::new(200)))
}

fn utility(name: &'static str) -> Space {
    Space::new(name, SpaceKind::Utility(DeedState::new(150)))
}

/// Build the classic track: 22 streets in 8 color groups, 4 railroads,
/// 2 utilities, 2 taxes, 6 draw spaces, 4 corners.
pub(crate) fn standard_track() -> (Vec<Space>, Vec<ColorGroup>) {
    use GroupColor::*;

    let colors = [
        Brown, LightBlue, Pink, Orange, Red, Yellow, Green, DarkBlue,
    ];
    let mut groups: Vec<ColorGroup> = colors.iter().map(|&c| ColorGroup::new(c)).collect();
    let g = |i: u8| GroupId::new(i);

    let spaces = vec![
        Space::new("Go", SpaceKind::Corner(CornerKind::Go)),
        street("Mediterranean Avenue", g(0), 60, [2, 10, 30, 90, 160, 250]),
        Space::new("Community Chest", SpaceKind::Draw(DeckKind::CommunityChest)),
        street("Baltic Avenue", g(0), 60, [4, 20, 60, 180, 320, 450]),
        Space::new("Income Tax", SpaceKind::Tax(TaxKind::Income)),
        railroad("Reading Railroad"),
        street("Oriental Avenue", g(1), 100, [6, 30, 90, 270, 400, 550]),
        Space::new("Chance", SpaceKind::Draw(DeckKind::Chance)),
        street("Vermont Avenue", g(1), 100, [6, 30, 90, 270, 400, 550]),
        street("Connecticut Avenue", g(1), 120, [8, 40, 100, 300, 450, 600]),
        Space::new("Jail", SpaceKind::Corner(CornerKind::Jail)),
        street("St. Charles Place", g(2), 140, [10, 50, 150, 450, 625, 750]),
        utility("Electric Company"),
        street("States Avenue", g(2), 140, [10, 50, 150, 450, 625, 750]),
        street("Virginia Avenue", g(2), 160, [12, 60, 180, 500, 700, 900]),
        railroad("Pennsylvania Railroad"),
        street("St. James Place", g(3), 180, [14, 70, 200, 550, 750, 950]),
        Space::new("Community Chest", SpaceKind::Draw(DeckKind::CommunityChest)),
        street("Tennessee Avenue", g(3), 180, [14, 70, 200, 550, 750, 950]),
        street("New York Avenue", g(3), 200, [16, 80, 220, 600, 800, 1000]),
        Space::new("Free Parking", SpaceKind::Corner(CornerKind::FreeParking)),
        street("Kentucky Avenue", g(4), 220, [18, 90, 250, 700, 875, 1050]),
        Space::new("Chance", SpaceKind::Draw(DeckKind::Chance)),
        street("Indiana Avenue", g(4), 220, [18, 90, 250, 700, 875, 1050]),
        street("Illinois Avenue", g(4), 240, [20, 100, 300, 750, 925, 1100]),
        railroad("B. & O. Railroad"),
        street("Atlantic Avenue", g(5), 260, [22, 110, 330, 800, 975, 1150]),
        street("Ventnor Avenue", g(5), 260, [22, 110, 330, 800, 975, 1150]),
        utility("Water Works"),
        street("Marvin Gardens", g(5), 280, [24, 120, 360, 850, 1025, 1200]),
        Space::new("Go To Jail", SpaceKind::Corner(CornerKind::GoToJail)),
        street("Pacific Avenue", g(6), 300, [26, 130, 390, 900, 1100, 1275]),
        street("North Carolina Avenue", g(6), 300, [26, 130, 390, 900, 1100, 1275]),
        Space::new("Community Chest", SpaceKind::Draw(DeckKind::CommunityChest)),
        street("Pennsylvania Avenue", g(6), 320, [28, 150, 450, 1000, 1200, 1400]),
        railroad("Short Line"),
        Space::new("Chance", SpaceKind::Draw(DeckKind::Chance)),
        street("Park Place", g(7), 350, [35, 175, 500, 1100, 1300, 1500]),
        Space::new("Luxury Tax", SpaceKind::Tax(TaxKind::Luxury)),
        street("Boardwalk", g(7), 400, [50, 200, 600, 1400, 1700, 2000]),
    ];

    for (index, space) in spaces.iter().enumerate() {
        if let Some(street) = space.as_street() {
            groups[street.group.index()].push_member(SpaceId::new(index as u8));
        }
    }

    (spaces, groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_shape() {
        let (spaces, groups) = standard_track();
        assert_eq!(spaces.len(), BOARD_SPACES);
        assert_eq!(groups.len(), 8);

        let streets = spaces.iter().filter(|s| s.as_street().is_some()).count();
        let railroads = spaces
            .iter()
            .filter(|s| matches!(s.kind, SpaceKind::Railroad(_)))
            .count();
        let utilities = spaces
            .iter()
            .filter(|s| matches!(s.kind, SpaceKind::Utility(_)))
            .count();

        assert_eq!(streets, 22);
        assert_eq!(railroads, 4);
        assert_eq!(utilities, 2);
    }

    #[test]
    fn test_every_group_is_full() {
        let (_, groups) = standard_track();
        for group in &groups {
            assert!(group.is_full(), "{:?} not full", group.color());
        }
    }

    #[test]
    fn test_known_positions() {
        let (spaces, _) = standard_track();
        assert_eq!(spaces[GO.index()].name, "Go");
        assert_eq!(spaces[JAIL.index()].name, "Jail");
        assert_eq!(spaces[FREE_PARKING.index()].name, "Free Parking");
        assert_eq!(spaces[GO_TO_JAIL.index()].name, "Go To Jail");
        assert_eq!(spaces[39].name, "Boardwalk");
        assert_eq!(spaces[39].price(), Some(400));
    }
}
