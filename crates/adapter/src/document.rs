//! Stored game documents.
//!
//! A stored game is the engine's [`GameRecord`] plus the id and timestamp the
//! store stamps on it. On disk and on the wire it is one flat JSON object:
//!
//! ```text
//! {"id":"…","date":1700000000000,"userId":"u1","frames":[…],"totalScore":187,"gameNumber":4}
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::GameRecord;
use crate::stats::ScoredGame;

/// Identifier the store hands back for a saved game
pub type StoredId = Uuid;

/// Milliseconds since the unix epoch (0 if the clock is before 1970)
pub fn now_unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredGame {
    pub id: StoredId,
    /// Save time in unix milliseconds
    #[serde(rename = "date")]
    pub date_ms: u64,
    #[serde(flatten)]
    pub record: GameRecord,
}

impl StoredGame {
    /// Stamp a record with a fresh id and the current time
    pub fn stamp(record: GameRecord) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_ms: now_unix_ms(),
            record,
        }
    }

    /// Most recent first; ties go to the higher game number.
    pub(crate) fn sort_newest_first(games: &mut [StoredGame]) {
        games.sort_by(|a, b| {
            b.date_ms
                .cmp(&a.date_ms)
                .then(b.record.game_number.cmp(&a.record.game_number))
        });
    }
}

impl ScoredGame for StoredGame {
    fn total_score(&self) -> u16 {
        self.record.total_score
    }

    fn played_at_ms(&self) -> u64 {
        self.date_ms
    }
}
