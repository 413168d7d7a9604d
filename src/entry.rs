//! Shorthand marks resolved against the game in progress.

use crate::core::GameSession;
use crate::types::{RollSlot, PIN_COUNT};

/// Pins a `/` stands for, or None when no spare is possible.
///
/// A spare needs a ball already thrown at the current rack. On a fresh rack
/// (first ball, or the tenth frame re-racked after a strike) there is nothing
/// to pick up.
pub fn spare_pins(session: &GameSession) -> Option<u8> {
    match session.next_slot()? {
        RollSlot::First => None,
        _ => match session.pins_standing() {
            PIN_COUNT => None,
            standing => Some(standing),
        },
    }
}
