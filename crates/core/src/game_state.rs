//! Game state module - the roll-entry state machine
//!
//! A [`GameSession`] owns the frame store and the active-frame cursor. Every
//! roll passes through [`GameSession::submit_roll`], which checks the target
//! frame and slot, parses the raw value, enforces pin counts, and only then
//! writes the store and moves the cursor. A rejected roll changes nothing.
//!
//! The cursor always points at the lowest frame that still needs rolls. It
//! advances after a strike or second ball in frames 1-9 and stays on the tenth
//! frame until the game is complete.

use crate::error::{EngineError, InvalidRoll};
use crate::frame::{Frame, FrameStore};
use crate::scoring;
use crate::snapshot::GameRecord;
use crate::types::{RollSlot, FRAME_COUNT, LAST_FRAME, PIN_COUNT};

/// Parse a raw roll value into a pin count.
///
/// Surrounding whitespace is ignored; anything that is not a whole number in
/// 0..=10 is rejected.
pub fn parse_roll(raw: &str) -> Result<u8, InvalidRoll> {
    let trimmed = raw.trim();
    let value: i64 = trimmed.parse().map_err(|_| InvalidRoll::NotANumber {
        raw: trimmed.to_string(),
    })?;
    if !(0..=i64::from(PIN_COUNT)).contains(&value) {
        return Err(InvalidRoll::OutOfRange { value });
    }
    Ok(value as u8)
}

/// A single game being entered by one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    frames: FrameStore,
    active_frame: usize,
}

impl GameSession {
    /// Start a fresh game on frame 0
    pub fn new() -> Self {
        Self {
            frames: FrameStore::new(),
            active_frame: 0,
        }
    }

    pub fn frames(&self) -> &FrameStore {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Zero-based index of the frame accepting rolls
    pub fn active_frame(&self) -> usize {
        self.active_frame
    }

    /// Whether the tenth frame has every roll it needs
    pub fn is_complete(&self) -> bool {
        self.frames
            .get(LAST_FRAME)
            .map(Frame::is_resolved)
            .unwrap_or(false)
    }

    /// The slot the active frame expects next, or None once the game is complete
    pub fn next_slot(&self) -> Option<RollSlot> {
        if self.is_complete() {
            return None;
        }
        let frame = self.frames.get(self.active_frame)?;
        match (frame.first(), frame.second()) {
            (None, _) => Some(RollSlot::First),
            (Some(_), None) => Some(RollSlot::Second),
            (Some(_), Some(_)) => Some(RollSlot::Third),
        }
    }

    /// Largest value the next roll may take.
    ///
    /// Returns 0 once the game is complete.
    pub fn pins_standing(&self) -> u8 {
        let Some(slot) = self.next_slot() else {
            return 0;
        };
        let Some(frame) = self.frames.get(self.active_frame) else {
            return 0;
        };
        let first = frame.first().unwrap_or(0);
        let second = frame.second().unwrap_or(0);

        match slot {
            RollSlot::First => PIN_COUNT,
            // The tenth frame re-racks after a strike.
            RollSlot::Second if frame.is_strike() => PIN_COUNT,
            RollSlot::Second => PIN_COUNT - first,
            RollSlot::Third if frame.is_spare() => PIN_COUNT,
            RollSlot::Third if second == PIN_COUNT => PIN_COUNT,
            RollSlot::Third => PIN_COUNT - second,
        }
    }

    /// Check a target without parsing a value; returns the pins standing.
    fn check_target(&self, frame_index: usize, slot: RollSlot) -> Result<u8, InvalidRoll> {
        if frame_index >= FRAME_COUNT {
            return Err(InvalidRoll::FrameOutOfRange { frame_index });
        }
        if frame_index != self.active_frame {
            return Err(InvalidRoll::WrongFrame {
                expected: self.active_frame,
                got: frame_index,
            });
        }

        let frame = &self.frames.frames()[frame_index];
        let bonus_refused = slot == RollSlot::Third
            && frame.is_last()
            && frame.second().is_some()
            && !frame.earns_bonus_roll();
        if bonus_refused {
            return Err(InvalidRoll::BonusNotEarned);
        }

        if self.is_complete() {
            return Err(InvalidRoll::GameComplete);
        }

        let expected = self.next_slot();
        if expected != Some(slot) {
            return Err(InvalidRoll::SlotOutOfOrder {
                expected,
                got: slot,
            });
        }

        Ok(self.pins_standing())
    }

    /// Whether a roll could be entered into this frame and slot right now.
    ///
    /// Front ends use this to enable or disable their input fields.
    pub fn can_enter(&self, frame_index: usize, slot: RollSlot) -> bool {
        self.check_target(frame_index, slot).is_ok()
    }

    /// Validate and record a roll.
    ///
    /// On success the frame store holds the new roll and the cursor has moved
    /// past any frame this roll finished. On failure nothing changes.
    pub fn submit_roll(
        &mut self,
        frame_index: usize,
        slot: RollSlot,
        raw_value: &str,
    ) -> Result<(), InvalidRoll> {
        let result = self.try_submit(frame_index, slot, raw_value);
        match &result {
            Ok(()) => tracing::debug!(
                frame = frame_index,
                %slot,
                raw = raw_value,
                active_frame = self.active_frame,
                complete = self.is_complete(),
                "roll accepted"
            ),
            Err(reason) => tracing::debug!(
                frame = frame_index,
                %slot,
                raw = raw_value,
                %reason,
                "roll rejected"
            ),
        }
        result
    }

    fn try_submit(
        &mut self,
        frame_index: usize,
        slot: RollSlot,
        raw_value: &str,
    ) -> Result<(), InvalidRoll> {
        let standing = self.check_target(frame_index, slot)?;
        let value = parse_roll(raw_value)?;
        if value > standing {
            return Err(InvalidRoll::PinOverflow { standing, value });
        }

        self.frames.set(frame_index, slot, value);

        let resolved = self
            .frames
            .get(frame_index)
            .map(Frame::is_resolved)
            .unwrap_or(false);
        if resolved && frame_index < LAST_FRAME {
            self.active_frame = frame_index + 1;
        }
        Ok(())
    }

    /// Record a roll into whatever slot the active frame expects next
    pub fn submit_next(&mut self, raw_value: &str) -> Result<(), InvalidRoll> {
        let slot = self.next_slot().ok_or(InvalidRoll::GameComplete)?;
        self.submit_roll(self.active_frame, slot, raw_value)
    }

    /// Score of one frame; provisional while its bonus balls are missing
    pub fn frame_score(&self, frame_index: usize) -> u16 {
        scoring::frame_score(&self.frames, frame_index)
    }

    /// Cumulative score through a frame
    pub fn running_total(&self, frame_index: usize) -> u16 {
        scoring::running_total(&self.frames, frame_index)
    }

    /// Whether a frame's score may still change
    pub fn is_provisional(&self, frame_index: usize) -> bool {
        scoring::is_provisional(&self.frames, frame_index)
    }

    /// Cumulative score through the tenth frame
    pub fn total_score(&self) -> u16 {
        self.running_total(LAST_FRAME)
    }

    /// Assemble the immutable record of a finished game
    pub fn to_game_record(
        &self,
        user_id: impl Into<String>,
        game_number: u32,
    ) -> Result<GameRecord, EngineError> {
        if !self.is_complete() {
            return Err(EngineError::IncompleteGame {
                active_frame: self.active_frame,
            });
        }
        Ok(GameRecord::from_session(self, user_id.into(), game_number))
    }

    /// Throw away every roll and start over on frame 0
    pub fn reset(&mut self) {
        self.frames.reset();
        self.active_frame = 0;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
