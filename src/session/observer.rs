//! Advisory notifications to the presentation layer.
//!
//! Observers are told what happened, never asked anything. Every method
//! has a no-op default, returns nothing, and must not reach back into
//! the session: correctness never depends on an observer running.

use crate::board::SpaceId;
use crate::core::{Money, PlayerId};

/// Read-only session event sink.
pub trait GameObserver {
    /// A balance changed (deposit, withdrawal, either side of a
    /// transfer).
    fn balance_changed(&mut self, _player: PlayerId, _balance: Money) {}

    /// A title changed hands; `None` means it returned to the bank.
    fn ownership_changed(&mut self, _space: SpaceId, _owner: Option<PlayerId>) {}

    /// A token moved.
    fn position_changed(&mut self, _player: PlayerId, _space: SpaceId) {}

    /// Free-text narration (jail, auctions, bankruptcies).
    fn message(&mut self, _text: &str) {}
}

/// An observer that records everything it hears. Handy in tests and as
/// a session transcript.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub balances: Vec<(PlayerId, Money)>,
    pub ownership: Vec<(SpaceId, Option<PlayerId>)>,
    pub positions: Vec<(PlayerId, SpaceId)>,
    pub messages: Vec<String>,
}

impl GameObserver for EventLog {
    fn balance_changed(&mut self, player: PlayerId, balance: Money) {
        self.balances.push((player, balance));
    }

    fn ownership_changed(&mut self, space: SpaceId, owner: Option<PlayerId>) {
        self.ownership.push((space, owner));
    }

    fn position_changed(&mut self, player: PlayerId, space: SpaceId) {
        self.positions.push((player, space));
    }

    fn message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records() {
        let mut log = EventLog::default();

        log.balance_changed(PlayerId::new(0), 1_440);
        log.ownership_changed(SpaceId::new(1), Some(PlayerId::new(0)));
        log.position_changed(PlayerId::new(0), SpaceId::new(1));
        log.message("sold");

        assert_eq!(log.balances, vec![(PlayerId::new(0), 1_440)]);
        assert_eq!(log.ownership.len(), 1);
        assert_eq!(log.positions.len(), 1);
        assert_eq!(log.messages, vec!["sold".to_string()]);
    }
}
