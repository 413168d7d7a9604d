//! Core types module - shared constants and small enums
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the scoring engine, the persistence adapter, and the terminal
//! front end alike.
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_COUNT` | 10 | Frames in a game |
//! | `LAST_FRAME` | 9 | Zero-based index of the tenth frame |
//! | `PIN_COUNT` | 10 | Pins racked at the start of a frame |
//! | `MAX_ROLLS` | 21 | Most rolls a single game can contain |
//! | `PERFECT_SCORE` | 300 | Twelve strikes in a row |
//!
//! # Examples
//!
//! ```
//! use bowling_tracker_types::{RollSlot, FRAME_COUNT, PIN_COUNT};
//!
//! let slot = RollSlot::Second;
//! assert_eq!(slot.next(), Some(RollSlot::Third));
//! assert_eq!(slot.to_string(), "second");
//!
//! assert_eq!(FRAME_COUNT, 10);
//! assert_eq!(PIN_COUNT, 10);
//! ```

/// Number of frames in a game
pub const FRAME_COUNT: usize = 10;

/// Zero-based index of the tenth frame (the only frame with a third roll)
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Pins standing at the start of every frame
pub const PIN_COUNT: u8 = 10;

/// Upper bound on rolls in one game: nine open frames plus three in the tenth
pub const MAX_ROLLS: usize = 2 * LAST_FRAME + 3;

/// Score of a perfect game
pub const PERFECT_SCORE: u16 = 300;

/// A single roll value: pins knocked down, or `None` when not yet entered.
pub type Roll = Option<u8>;

/// One of the three roll slots of a frame
///
/// Frames 1-9 only ever use `First` and `Second`; `Third` exists for the
/// tenth frame's bonus ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RollSlot {
    First,
    Second,
    Third,
}

impl RollSlot {
    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            RollSlot::First => "first",
            RollSlot::Second => "second",
            RollSlot::Third => "third",
        }
    }

    /// Zero-based position of the slot within a frame
    pub fn index(&self) -> usize {
        match self {
            RollSlot::First => 0,
            RollSlot::Second => 1,
            RollSlot::Third => 2,
        }
    }

    /// The slot that follows this one, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            RollSlot::First => Some(RollSlot::Second),
            RollSlot::Second => Some(RollSlot::Third),
            RollSlot::Third => None,
        }
    }
}

impl std::fmt::Display for RollSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
