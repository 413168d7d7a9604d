//! Rejection reasons for roll entry and record assembly.

use thiserror::Error;

use crate::types::RollSlot;

/// Why the input gate refused a roll.
///
/// Every variant is recoverable: a rejected roll leaves the session exactly as
/// it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRoll {
    #[error("game is already complete")]
    GameComplete,

    #[error("frame index {frame_index} is out of range (0-9)")]
    FrameOutOfRange { frame_index: usize },

    #[error("frame {got} is not the active frame (expected {expected})")]
    WrongFrame { expected: usize, got: usize },

    #[error("{raw:?} is not a whole number of pins")]
    NotANumber { raw: String },

    #[error("{value} is outside the 0-10 pin range")]
    OutOfRange { value: i64 },

    #[error("the {got} roll is not the next roll of this frame")]
    SlotOutOfOrder {
        expected: Option<RollSlot>,
        got: RollSlot,
    },

    #[error("only {standing} pins are standing, cannot knock down {value}")]
    PinOverflow { standing: u8, value: u8 },

    #[error("third roll requires a strike or spare in the tenth frame")]
    BonusNotEarned,
}

/// Errors raised by the scoring engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error(transparent)]
    InvalidRoll(#[from] InvalidRoll),

    #[error("game is not complete: frame {active_frame} still needs rolls")]
    IncompleteGame { active_frame: usize },
}
