//! Turn rotation and the consecutive-doubles rule.
//!
//! The order is shuffled once when the session starts and never changes;
//! bankrupt players are removed from the rotation but the relative order
//! of everyone else is stable. The doubles counter lives here and is
//! mutated only through `record_roll` and `advance` - nothing else may
//! reset it as a side effect.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{DiceRoll, GameRng, PlayerId};

/// What a recorded roll means for the rest of the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RollVerdict {
    /// Non-double: move, resolve, then the turn passes on.
    Proceed,
    /// Double: move, resolve, and the same player rolls again.
    Again,
    /// Third consecutive double: straight to jail, no movement, and the
    /// turn passes on despite the double.
    Speeding,
}

/// The rotation and doubles counter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    order: Vec<PlayerId>,
    current: usize,
    doubles: u8,
}

impl TurnState {
    /// Shuffle a rotation over `player_count` players.
    #[must_use]
    pub fn new(player_count: usize, rng: &mut GameRng) -> Self {
        let mut order: Vec<PlayerId> = PlayerId::all(player_count).collect();
        rng.shuffle(&mut order);
        debug!(?order, "turn order drawn");
        Self {
            order,
            current: 0,
            doubles: 0,
        }
    }

    /// The rotation, in play order.
    #[must_use]
    pub fn order(&self) -> &[PlayerId] {
        &self.order
    }

    /// Whose turn it is.
    ///
    /// Panics if every player has been retired; a session with no
    /// remaining players has no active turn to ask about.
    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.order[self.current]
    }

    /// Consecutive doubles rolled in the held turn so far.
    #[must_use]
    pub fn doubles(&self) -> u8 {
        self.doubles
    }

    /// Players still in the rotation.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.order.len()
    }

    /// Record a roll for the active player and classify it.
    pub fn record_roll(&mut self, roll: DiceRoll) -> RollVerdict {
        if roll.is_double() {
            self.doubles += 1;
            if self.doubles >= 3 {
                self.doubles = 0;
                return RollVerdict::Speeding;
            }
            return RollVerdict::Again;
        }
        self.doubles = 0;
        RollVerdict::Proceed
    }

    /// Hand the turn to the next player in the rotation.
    pub fn advance(&mut self) -> PlayerId {
        if !self.order.is_empty() {
            self.current = (self.current + 1) % self.order.len();
        }
        self.doubles = 0;
        self.active()
    }

    /// Drop a bankrupt player from the rotation.
    ///
    /// If it was their turn, the turn falls to the next player without a
    /// separate `advance` call.
    pub fn retire(&mut self, player: PlayerId) {
        let Some(position) = self.order.iter().position(|&p| p == player) else {
            return;
        };
        self.order.remove(position);
        if position < self.current {
            self.current -= 1;
        }
        if !self.order.is_empty() {
            self.current %= self.order.len();
        } else {
            self.current = 0;
        }
        self.doubles = 0;
        debug!(%player, remaining = self.order.len(), "retired from rotation");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_order(players: &[u8]) -> TurnState {
        TurnState {
            order: players.iter().map(|&p| PlayerId::new(p)).collect(),
            current: 0,
            doubles: 0,
        }
    }

    #[test]
    fn test_order_is_a_permutation() {
        let mut rng = GameRng::new(42);
        let turn = TurnState::new(4, &mut rng);

        let mut seats: Vec<u8> = turn.order().iter().map(|p| p.0).collect();
        seats.sort_unstable();
        assert_eq!(seats, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_order_is_seeded() {
        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);
        assert_eq!(
            TurnState::new(4, &mut rng1).order(),
            TurnState::new(4, &mut rng2).order()
        );
    }

    #[test]
    fn test_advance_wraps_and_resets_doubles() {
        let mut turn = fixed_order(&[2, 0, 1]);
        assert_eq!(turn.active(), PlayerId::new(2));

        turn.record_roll(DiceRoll::new(3, 3));
        assert_eq!(turn.doubles(), 1);

        assert_eq!(turn.advance(), PlayerId::new(0));
        assert_eq!(turn.doubles(), 0);

        turn.advance();
        assert_eq!(turn.advance(), PlayerId::new(2));
    }

    #[test]
    fn test_non_double_resets_counter() {
        let mut turn = fixed_order(&[0, 1]);

        assert_eq!(turn.record_roll(DiceRoll::new(2, 2)), RollVerdict::Again);
        assert_eq!(turn.record_roll(DiceRoll::new(4, 4)), RollVerdict::Again);
        assert_eq!(turn.record_roll(DiceRoll::new(1, 2)), RollVerdict::Proceed);
        assert_eq!(turn.doubles(), 0);
    }

    #[test]
    fn test_third_double_is_speeding() {
        let mut turn = fixed_order(&[0, 1]);

        assert_eq!(turn.record_roll(DiceRoll::new(2, 2)), RollVerdict::Again);
        assert_eq!(turn.record_roll(DiceRoll::new(5, 5)), RollVerdict::Again);
        assert_eq!(turn.record_roll(DiceRoll::new(1, 1)), RollVerdict::Speeding);
        assert_eq!(turn.doubles(), 0);
    }

    #[test]
    fn test_retire_active_player_moves_turn_on() {
        let mut turn = fixed_order(&[0, 1, 2]);

        turn.retire(PlayerId::new(0));
        assert_eq!(turn.active(), PlayerId::new(1));
        assert_eq!(turn.remaining(), 2);
    }

    #[test]
    fn test_retire_earlier_player_keeps_active() {
        let mut turn = fixed_order(&[0, 1, 2]);
        turn.advance();
        assert_eq!(turn.active(), PlayerId::new(1));

        turn.retire(PlayerId::new(0));
        assert_eq!(turn.active(), PlayerId::new(1));
    }

    #[test]
    fn test_retire_last_in_order_wraps() {
        let mut turn = fixed_order(&[0, 1, 2]);
        turn.advance();
        turn.advance();
        assert_eq!(turn.active(), PlayerId::new(2));

        turn.retire(PlayerId::new(2));
        assert_eq!(turn.active(), PlayerId::new(0));
    }

    #[test]
    fn test_retire_unknown_player_is_noop() {
        let mut turn = fixed_order(&[0, 1]);
        turn.retire(PlayerId::new(7));
        assert_eq!(turn.remaining(), 2);
    }
}
