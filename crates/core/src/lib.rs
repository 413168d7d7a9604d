//! Core scoring engine - pure, deterministic, and testable
//!
//! This crate contains the ten-pin scoring rules and the roll-entry state
//! machine. It has **no dependencies** on storage, terminals, or async
//! runtimes, which keeps it:
//!
//! - **Deterministic**: the same rolls always produce the same scores
//! - **Testable**: every rule is reachable from a plain `GameSession`
//! - **Allocation-free** when scoring: lookahead uses a fixed-size roll buffer
//!
//! # Module Structure
//!
//! - [`frame`]: the Frame Store, ten frames with up to three rolls each
//! - [`scoring`]: the Rule Evaluator, strike/spare detection and lookahead scoring
//! - [`game_state`]: the Input Gate, roll validation and the active-frame cursor
//! - [`snapshot`]: immutable game records assembled for persistence
//! - [`error`]: rejection reasons surfaced to callers
//!
//! # Game Rules
//!
//! - **Strike**: all ten pins on the first ball; scores 10 plus the next two balls
//! - **Spare**: all ten pins over two balls; scores 10 plus the next ball
//! - **Tenth frame**: a strike or spare earns a third ball, scored at face value
//! - **Provisional scores**: bonus balls that have not been rolled yet count as 0
//!
//! # Example
//!
//! ```
//! use bowling_tracker_core::GameSession;
//! use bowling_tracker_types::RollSlot;
//!
//! let mut game = GameSession::new();
//! game.submit_roll(0, RollSlot::First, "10").unwrap();
//! game.submit_roll(1, RollSlot::First, "7").unwrap();
//! game.submit_roll(1, RollSlot::Second, "3").unwrap();
//!
//! assert_eq!(game.frame_score(0), 20);
//! assert_eq!(game.running_total(1), 30);
//! assert_eq!(game.active_frame(), 2);
//! ```

pub mod error;
pub mod frame;
pub mod game_state;
pub mod scoring;
pub mod snapshot;

pub use bowling_tracker_types as types;

// Re-export commonly used types for convenience
pub use error::{EngineError, InvalidRoll};
pub use frame::{Frame, FrameStore};
pub use game_state::{parse_roll, GameSession};
pub use scoring::{frame_score, is_provisional, roll_stream_after, running_total, RollStream};
pub use snapshot::{FrameRecord, GameRecord};
