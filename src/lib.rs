//! Bowling Tracker (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so binaries, tests, and
//! benches can write `bowling_tracker::{core,adapter,input,stats,types}`. The
//! plain-text score sheet and the spare shorthand live here because only the
//! terminal front end uses them.

pub mod entry;
pub mod sheet;

pub use bowling_tracker_adapter as adapter;
pub use bowling_tracker_core as core;
pub use bowling_tracker_input as input;
pub use bowling_tracker_stats as stats;
pub use bowling_tracker_types as types;
