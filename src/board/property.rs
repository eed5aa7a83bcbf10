//! Per-space title state.
//!
//! `PropertyState` is the buildable-street variant: rent table, mortgage
//! flag, house count, hotel flag. `DeedState` is the slimmer railroad and
//! utility variant - ownable and mortgageable but never improved. The
//! rent and improvement *rules* live on `Board`, which can see a street's
//! whole color group; the state here only answers questions a single
//! space can answer about itself.

use serde::{Deserialize, Serialize};

use crate::board::group::GroupId;
use crate::core::Money;

/// Houses a street can carry before the hotel upgrade.
pub const MAX_HOUSES: u8 = 4;

/// Improvement level a hotel counts as in even-build comparisons.
pub const HOTEL_LEVEL: u8 = 5;

/// State of a buildable street.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyState {
    /// The color group this street belongs to.
    pub group: GroupId,
    /// List price.
    pub price: Money,
    /// Rent by improvement level: `[base, 1 house, .., 4 houses, hotel]`.
    rents: [Money; 6],
    /// Current deed holder.
    pub owner: Option<crate::core::PlayerId>,
    pub mortgaged: bool,
    /// Houses currently built, 0-4. Reset to 0 while `hotel` is set.
    pub houses: u8,
    pub hotel: bool,
}

impl PropertyState {
    /// Create an unowned, unimproved street.
    #[must_use]
    pub fn new(group: GroupId, price: Money, rents: [Money; 6]) -> Self {
        Self {
            group,
            price,
            rents,
            owner: None,
            mortgaged: false,
            houses: 0,
            hotel: false,
        }
    }

    /// Rent with no improvements and no monopoly.
    #[must_use]
    pub fn base_rent(&self) -> Money {
        self.rents[0]
    }

    /// Rent at a given improvement level (0 = base, 5 = hotel).
    #[must_use]
    pub fn rent_at(&self, level: u8) -> Money {
        self.rents[level.min(HOTEL_LEVEL) as usize]
    }

    /// Current improvement level: house count, or 5 with a hotel.
    #[must_use]
    pub fn level(&self) -> u8 {
        if self.hotel {
            HOTEL_LEVEL
        } else {
            self.houses
        }
    }

    /// Whether any houses or a hotel stand on the street.
    #[must_use]
    pub fn has_improvements(&self) -> bool {
        self.houses > 0 || self.hotel
    }

    /// Amount the bank pays out when the title is mortgaged.
    #[must_use]
    pub fn mortgage_value(&self) -> Money {
        self.price / 2
    }

    /// Cost to lift the mortgage: 110% of the mortgage value.
    #[must_use]
    pub fn unmortgage_cost(&self) -> Money {
        self.mortgage_value() * 11 / 10
    }
}

/// State of a railroad or utility title.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeedState {
    /// List price.
    pub price: Money,
    /// Current deed holder.
    pub owner: Option<crate::core::PlayerId>,
    pub mortgaged: bool,
}

impl DeedState {
    /// Create an unowned deed.
    #[must_use]
    pub fn new(price: Money) -> Self {
        Self {
            price,
            owner: None,
            mortgaged: false,
        }
    }

    /// Amount the bank pays out when the title is mortgaged.
    #[must_use]
    pub fn mortgage_value(&self) -> Money {
        self.price / 2
    }

    /// Cost to lift the mortgage: 110% of the mortgage value.
    #[must_use]
    pub fn unmortgage_cost(&self) -> Money {
        self.mortgage_value() * 11 / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PropertyState {
        PropertyState::new(GroupId::new(0), 60, [2, 10, 30, 90, 160, 250])
    }

    #[test]
    fn test_rent_table_lookup() {
        let p = sample();
        assert_eq!(p.base_rent(), 2);
        assert_eq!(p.rent_at(1), 10);
        assert_eq!(p.rent_at(4), 160);
        assert_eq!(p.rent_at(HOTEL_LEVEL), 250);
    }

    #[test]
    fn test_level_counts_hotel_as_five() {
        let mut p = sample();
        assert_eq!(p.level(), 0);

        p.houses = 3;
        assert_eq!(p.level(), 3);

        p.houses = 0;
        p.hotel = true;
        assert_eq!(p.level(), HOTEL_LEVEL);
        assert!(p.has_improvements());
    }

    #[test]
    fn test_mortgage_values() {
        let p = sample();
        assert_eq!(p.mortgage_value(), 30);
        assert_eq!(p.unmortgage_cost(), 33);

        let d = DeedState::new(200);
        assert_eq!(d.mortgage_value(), 100);
        assert_eq!(d.unmortgage_cost(), 110);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = sample();
        let json = serde_json::to_string(&p).unwrap();
        let back: PropertyState = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
