//! Frame store - the ten frames of the game in progress
//!
//! Each frame keeps up to three roll slots. Frames 1-9 only ever fill the first
//! two; the tenth frame (index 9) may also fill the third after a strike or
//! spare. Strike and spare flags are derived from the rolls on every read, so
//! they can never disagree with what was entered.
//!
//! Writes go through [`FrameStore::set`], which is crate-private and performs no
//! validation: the input gate in [`crate::game_state`] is its only caller.

use crate::types::{Roll, RollSlot, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

/// One scoring frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Frame {
    /// Zero-based position, fixed at creation
    index: u8,
    rolls: [Roll; 3],
}

impl Frame {
    /// Create an empty frame at the given zero-based position
    pub fn new(index: usize) -> Self {
        debug_assert!(index < FRAME_COUNT);
        Self {
            index: index as u8,
            rolls: [None; 3],
        }
    }

    /// Zero-based position in the game
    pub fn index(&self) -> usize {
        self.index as usize
    }

    /// One-based frame number, as printed on a score sheet
    pub fn number(&self) -> u8 {
        self.index + 1
    }

    /// Whether this is the tenth frame
    pub fn is_last(&self) -> bool {
        self.index() == LAST_FRAME
    }

    pub fn roll(&self, slot: RollSlot) -> Roll {
        self.rolls[slot.index()]
    }

    pub fn first(&self) -> Roll {
        self.rolls[0]
    }

    pub fn second(&self) -> Roll {
        self.rolls[1]
    }

    pub fn third(&self) -> Roll {
        self.rolls[2]
    }

    /// All ten pins on the first ball
    pub fn is_strike(&self) -> bool {
        self.first() == Some(PIN_COUNT)
    }

    /// All ten pins over the first two balls, without a strike
    pub fn is_spare(&self) -> bool {
        match (self.first(), self.second()) {
            (Some(first), Some(second)) => first < PIN_COUNT && first + second == PIN_COUNT,
            _ => false,
        }
    }

    /// Whether the tenth frame has earned its third ball
    pub fn earns_bonus_roll(&self) -> bool {
        self.is_last() && (self.is_strike() || self.is_spare())
    }

    /// Number of slots this frame uses once finished
    fn slots_needed(&self) -> usize {
        if self.is_last() {
            if self.earns_bonus_roll() {
                3
            } else {
                2
            }
        } else if self.is_strike() {
            1
        } else {
            2
        }
    }

    /// Whether every roll this frame needs has been entered
    pub fn is_resolved(&self) -> bool {
        self.rolls[..self.slots_needed()].iter().all(Option::is_some)
    }

    /// The entered rolls in the order they were bowled.
    ///
    /// Stops at the first empty slot and never yields more than the frame uses.
    pub fn entered_rolls(&self) -> impl Iterator<Item = u8> + '_ {
        let slots = if self.is_last() { 3 } else { self.slots_needed() };
        self.rolls[..slots].iter().map_while(|roll| *roll)
    }

    /// Sum of all entered pins, with empty slots counting as zero
    pub fn pin_total(&self) -> u16 {
        self.entered_rolls().map(u16::from).sum()
    }

    pub(crate) fn set(&mut self, slot: RollSlot, value: u8) {
        self.rolls[slot.index()] = Some(value);
    }
}

/// The ordered sequence of ten frames
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FrameStore {
    frames: [Frame; FRAME_COUNT],
}

impl FrameStore {
    /// Create a store with ten empty frames
    pub fn new() -> Self {
        Self {
            frames: std::array::from_fn(Frame::new),
        }
    }

    /// Get frame at zero-based index
    /// Returns None if out of range
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame; FRAME_COUNT] {
        &self.frames
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }

    /// Write a roll into a slot.
    /// Returns false if the frame index is out of range.
    pub(crate) fn set(&mut self, index: usize, slot: RollSlot, value: u8) -> bool {
        match self.frames.get_mut(index) {
            Some(frame) => {
                frame.set(slot, value);
                true
            }
            None => false,
        }
    }

    /// Clear every roll
    pub fn reset(&mut self) {
        self.frames = std::array::from_fn(Frame::new);
    }
}

impl Default for FrameStore {
    fn default() -> Self {
        Self::new()
    }
}
