//! Terminal input module.
//!
//! Maps lines typed at a prompt into [`EntryCommand`]s. Roll values are passed
//! through as raw text so the scoring engine stays the only place that decides
//! whether a roll is legal.

pub mod map;

pub use map::{parse_line, EntryCommand, HELP_TEXT};
