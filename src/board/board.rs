//! The track and its rule queries.
//!
//! `Board` owns the spaces and color groups and answers every question
//! that needs to see more than one space at a time: monopoly status, the
//! even-build and even-sell constraints, rent, and the improvement and
//! mortgage operations. Money side effects go through the [`Ledger`]
//! passed into each mutating operation.
//!
//! The improvement and mortgage operations follow a boolean contract:
//! `false` means "not legal or not affordable, nothing changed". The
//! driver turns those refusals into user-visible consequences.

use tracing::debug;

use crate::board::group::{ColorGroup, GroupId};
use crate::board::layout::{self, BOARD_SPACES, RAILROAD_BASE_RENT};
use crate::board::property::{HOTEL_LEVEL, MAX_HOUSES};
use crate::board::space::{Space, SpaceId, SpaceKind};
use crate::core::{Money, PlayerId};
use crate::economy::Ledger;

/// A view of one title's money-relevant state, kind-independent.
struct TitleView {
    owner: Option<PlayerId>,
    mortgaged: bool,
    mortgage_value: Money,
    unmortgage_cost: Money,
    improved: bool,
}

/// The fixed track plus the live per-space state.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    groups: Vec<ColorGroup>,
}

impl Board {
    /// Build the classic 40-space track.
    #[must_use]
    pub fn standard() -> Self {
        let (spaces, groups) = layout::standard_track();
        Self { spaces, groups }
    }

    /// Number of spaces on the track.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    /// Whether the track is empty (never true for a built board).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// Look up a space.
    #[must_use]
    pub fn space(&self, id: SpaceId) -> &Space {
        &self.spaces[id.index()]
    }

    pub(crate) fn space_mut(&mut self, id: SpaceId) -> &mut Space {
        &mut self.spaces[id.index()]
    }

    /// Iterate over all space IDs in track order.
    pub fn space_ids(&self) -> impl Iterator<Item = SpaceId> {
        (0..BOARD_SPACES as u8).map(SpaceId::new)
    }

    /// Look up a color group.
    #[must_use]
    pub fn group(&self, id: GroupId) -> &ColorGroup {
        &self.groups[id.index()]
    }

    /// All spaces that can hold a title deed.
    #[must_use]
    pub fn purchasable_spaces(&self) -> Vec<SpaceId> {
        self.space_ids()
            .filter(|&id| self.space(id).is_purchasable())
            .collect()
    }

    /// Where a token lands moving `steps` forward, and whether it passed
    /// (or landed on) Go.
    #[must_use]
    pub fn destination(&self, from: SpaceId, steps: u8) -> (SpaceId, bool) {
        let raw = from.index() + steps as usize;
        (SpaceId::new((raw % BOARD_SPACES) as u8), raw >= BOARD_SPACES)
    }

    /// Whether a forward move from `from` to `dest` passes (or lands on)
    /// Go. Used by cards that name their destination.
    #[must_use]
    pub fn passes_go(&self, from: SpaceId, dest: SpaceId) -> bool {
        dest.index() <= from.index()
    }

    // === Ownership scans ===

    /// Railroads a player holds (mortgaged ones still count toward rent).
    #[must_use]
    pub fn railroads_owned(&self, player: PlayerId) -> usize {
        self.spaces
            .iter()
            .filter(|s| matches!(s.kind, SpaceKind::Railroad(_)) && s.owner() == Some(player))
            .count()
    }

    /// Utilities a player holds.
    #[must_use]
    pub fn utilities_owned(&self, player: PlayerId) -> usize {
        self.spaces
            .iter()
            .filter(|s| matches!(s.kind, SpaceKind::Utility(_)) && s.owner() == Some(player))
            .count()
    }

    /// Total houses standing on a player's streets.
    #[must_use]
    pub fn houses_of(&self, player: PlayerId) -> u32 {
        self.spaces
            .iter()
            .filter_map(Space::as_street)
            .filter(|p| p.owner == Some(player))
            .map(|p| u32::from(p.houses))
            .sum()
    }

    /// Total hotels standing on a player's streets.
    #[must_use]
    pub fn hotels_of(&self, player: PlayerId) -> u32 {
        self.spaces
            .iter()
            .filter_map(Space::as_street)
            .filter(|p| p.owner == Some(player) && p.hotel)
            .count() as u32
    }

    // === Group rule queries ===

    /// Whether a player owns every street of a full group.
    #[must_use]
    pub fn monopoly(&self, group: GroupId, player: PlayerId) -> bool {
        let group = self.group(group);
        group.is_full()
            && group
                .members()
                .iter()
                .all(|&m| self.space(m).owner() == Some(player))
    }

    fn group_min_level(&self, group: GroupId) -> u8 {
        self.group(group)
            .members()
            .iter()
            .filter_map(|&m| self.space(m).as_street().map(|p| p.level()))
            .min()
            .unwrap_or(0)
    }

    fn group_max_level(&self, group: GroupId) -> u8 {
        self.group(group)
            .members()
            .iter()
            .filter_map(|&m| self.space(m).as_street().map(|p| p.level()))
            .max()
            .unwrap_or(0)
    }

    /// Whether one more house may be built on a street: monopoly held,
    /// not mortgaged, below 4 houses, no hotel, and even-build satisfied
    /// (the street is at the group's minimum level).
    #[must_use]
    pub fn can_improve(&self, space: SpaceId) -> bool {
        let Some(street) = self.space(space).as_street() else {
            return false;
        };
        let Some(owner) = street.owner else {
            return false;
        };
        if street.mortgaged || street.hotel || street.houses >= MAX_HOUSES {
            return false;
        }
        self.monopoly(street.group, owner) && street.level() <= self.group_min_level(street.group)
    }

    /// Whether the hotel upgrade is open: monopoly held and every street
    /// in the group carrying exactly 4 houses (so none has a hotel yet).
    #[must_use]
    pub fn can_add_hotel(&self, space: SpaceId) -> bool {
        let Some(street) = self.space(space).as_street() else {
            return false;
        };
        let Some(owner) = street.owner else {
            return false;
        };
        self.monopoly(street.group, owner)
            && self
                .group(street.group)
                .members()
                .iter()
                .all(|&m| self.space(m).as_street().is_some_and(|p| p.level() == MAX_HOUSES))
    }

    /// Whether one level may be sold off a street: mirror of even-build,
    /// the street must be at the group's maximum level.
    #[must_use]
    pub fn can_remove_improvement(&self, space: SpaceId) -> bool {
        let Some(street) = self.space(space).as_street() else {
            return false;
        };
        street.level() > 0 && street.level() >= self.group_max_level(street.group)
    }

    // === Rent ===

    /// Rent owed by a visitor landing on a space with dice sum `roll`.
    ///
    /// Zero for unowned or mortgaged titles and for unownable spaces.
    /// An unimproved street under a monopoly collects double its base
    /// rent; a railroad collects 25 doubled per additional railroad
    /// owned; a utility collects 4x the roll, or 10x with both owned.
    #[must_use]
    pub fn rent_due(&self, space: SpaceId, roll: u8) -> Money {
        match &self.space(space).kind {
            SpaceKind::Street(p) => {
                let Some(owner) = p.owner else { return 0 };
                if p.mortgaged {
                    return 0;
                }
                if p.hotel {
                    return p.rent_at(HOTEL_LEVEL);
                }
                if p.houses > 0 {
                    return p.rent_at(p.houses);
                }
                if self.monopoly(p.group, owner) {
                    p.base_rent() * 2
                } else {
                    p.base_rent()
                }
            }
            SpaceKind::Railroad(d) => {
                let Some(owner) = d.owner else { return 0 };
                if d.mortgaged {
                    return 0;
                }
                let owned = self.railroads_owned(owner).clamp(1, 4) as u32;
                RAILROAD_BASE_RENT << (owned - 1)
            }
            SpaceKind::Utility(d) => {
                let Some(owner) = d.owner else { return 0 };
                if d.mortgaged {
                    return 0;
                }
                let multiplier = if self.utilities_owned(owner) >= 2 { 10 } else { 4 };
                multiplier * Money::from(roll)
            }
            _ => 0,
        }
    }

    // === Improvements ===

    fn street_owner_and_cost(&self, space: SpaceId) -> Option<(PlayerId, Money)> {
        let street = self.space(space).as_street()?;
        let owner = street.owner?;
        Some((owner, self.group(street.group).house_cost()))
    }

    /// Buy one house on a street. Returns false - with no partial
    /// mutation - when the build is not legal, the owner cannot afford
    /// it, or the bank's house pool is empty.
    pub fn buy_improvement(&mut self, space: SpaceId, ledger: &mut Ledger) -> bool {
        if !self.can_improve(space) {
            return false;
        }
        let Some((owner, cost)) = self.street_owner_and_cost(space) else {
            return false;
        };
        if ledger.withdraw(owner, cost).is_err() {
            return false;
        }
        if ledger.stock_mut().take_house().is_err() {
            let _ = ledger.deposit(owner, cost);
            return false;
        }
        if let Some(street) = self.space_mut(space).as_street_mut() {
            street.houses += 1;
        }
        debug!(%space, %owner, cost, "house built");
        true
    }

    /// Upgrade a fully built street to a hotel: the 4 houses go back to
    /// the pool, one hotel leaves it.
    pub fn buy_hotel(&mut self, space: SpaceId, ledger: &mut Ledger) -> bool {
        if !self.can_add_hotel(space) {
            return false;
        }
        let Some((owner, cost)) = self.street_owner_and_cost(space) else {
            return false;
        };
        if ledger.withdraw(owner, cost).is_err() {
            return false;
        }
        if ledger.stock_mut().hotel_upgrade().is_err() {
            let _ = ledger.deposit(owner, cost);
            return false;
        }
        if let Some(street) = self.space_mut(space).as_street_mut() {
            street.houses = 0;
            street.hotel = true;
        }
        debug!(%space, %owner, cost, "hotel built");
        true
    }

    /// Sell one house back to the bank for half the house cost, subject
    /// to even-sell.
    pub fn sell_improvement(&mut self, space: SpaceId, ledger: &mut Ledger) -> bool {
        if !self.can_remove_improvement(space) {
            return false;
        }
        let has_houses = self
            .space(space)
            .as_street()
            .is_some_and(|p| p.houses > 0 && !p.hotel);
        if !has_houses {
            return false;
        }
        let Some((owner, cost)) = self.street_owner_and_cost(space) else {
            return false;
        };
        if ledger.stock_mut().return_house().is_err() {
            return false;
        }
        if ledger.deposit(owner, cost / 2).is_err() {
            let _ = ledger.stock_mut().take_house();
            return false;
        }
        if let Some(street) = self.space_mut(space).as_street_mut() {
            street.houses -= 1;
        }
        debug!(%space, %owner, credit = cost / 2, "house sold");
        true
    }

    /// Sell a hotel back to the bank for half the house cost. Requires 4
    /// houses in the pool to put back on the street.
    pub fn sell_hotel(&mut self, space: SpaceId, ledger: &mut Ledger) -> bool {
        let has_hotel = self.space(space).as_street().is_some_and(|p| p.hotel);
        if !has_hotel || !self.can_remove_improvement(space) {
            return false;
        }
        let Some((owner, cost)) = self.street_owner_and_cost(space) else {
            return false;
        };
        if ledger.stock_mut().hotel_downgrade().is_err() {
            return false;
        }
        if ledger.deposit(owner, cost / 2).is_err() {
            let _ = ledger.stock_mut().hotel_upgrade();
            return false;
        }
        if let Some(street) = self.space_mut(space).as_street_mut() {
            street.hotel = false;
            street.houses = MAX_HOUSES;
        }
        debug!(%space, %owner, credit = cost / 2, "hotel sold");
        true
    }

    // === Mortgage ===

    fn title_view(&self, space: SpaceId) -> Option<TitleView> {
        match &self.space(space).kind {
            SpaceKind::Street(p) => Some(TitleView {
                owner: p.owner,
                mortgaged: p.mortgaged,
                mortgage_value: p.mortgage_value(),
                unmortgage_cost: p.unmortgage_cost(),
                improved: p.has_improvements(),
            }),
            SpaceKind::Railroad(d) | SpaceKind::Utility(d) => Some(TitleView {
                owner: d.owner,
                mortgaged: d.mortgaged,
                mortgage_value: d.mortgage_value(),
                unmortgage_cost: d.unmortgage_cost(),
                improved: false,
            }),
            _ => None,
        }
    }

    /// Mortgage a title: the bank pays the owner half the list price.
    /// Requires an owner and no standing improvements.
    pub fn mortgage(&mut self, space: SpaceId, ledger: &mut Ledger) -> bool {
        let Some(view) = self.title_view(space) else {
            return false;
        };
        let Some(owner) = view.owner else {
            return false;
        };
        if view.mortgaged || view.improved {
            return false;
        }
        if ledger.deposit(owner, view.mortgage_value).is_err() {
            return false;
        }
        self.space_mut(space).set_mortgaged(true);
        debug!(%space, %owner, value = view.mortgage_value, "mortgaged");
        true
    }

    /// Lift a mortgage for 110% of the mortgage value. Returns false and
    /// leaves the title mortgaged when the owner cannot pay.
    pub fn unmortgage(&mut self, space: SpaceId, ledger: &mut Ledger) -> bool {
        let Some(view) = self.title_view(space) else {
            return false;
        };
        let Some(owner) = view.owner else {
            return false;
        };
        if !view.mortgaged {
            return false;
        }
        if ledger.withdraw(owner, view.unmortgage_cost).is_err() {
            return false;
        }
        self.space_mut(space).set_mortgaged(false);
        debug!(%space, %owner, cost = view.unmortgage_cost, "unmortgaged");
        true
    }

    /// Return a title to bank-clean condition when it is repossessed:
    /// standing improvements go back to the pools, the mortgage is
    /// cleared. Ownership is handled by the holdings index.
    pub(crate) fn repossess(&mut self, space: SpaceId, ledger: &mut Ledger) {
        let (houses, hotel) = match self.space(space).as_street() {
            Some(p) => (p.houses, p.hotel),
            None => (0, false),
        };
        if houses > 0 {
            ledger
                .stock_mut()
                .return_houses(houses)
                .expect("house pool overflow on repossession");
        }
        if hotel {
            ledger
                .stock_mut()
                .return_hotel()
                .expect("hotel pool overflow on repossession");
        }
        if let Some(street) = self.space_mut(space).as_street_mut() {
            street.houses = 0;
            street.hotel = false;
            street.mortgaged = false;
        } else {
            self.space_mut(space).set_mortgaged(false);
        }
    }
}
