//! Immutable records of finished games.
//!
//! Field names serialize in camelCase to match the stored score documents
//! (`frameNumber`, `firstRoll`, `isStrike`, `totalScore`, ...). Rolls that were
//! never bowled are recorded as 0, and frames 1-9 always carry a third roll of 0.

use serde::{Deserialize, Serialize};

use crate::game_state::GameSession;
use crate::types::{FRAME_COUNT, LAST_FRAME};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRecord {
    /// One-based frame number
    pub frame_number: u8,
    pub first_roll: u8,
    pub second_roll: u8,
    pub third_roll: u8,
    pub is_strike: bool,
    pub is_spare: bool,
    pub frame_score: u16,
}

/// A finished game, frozen at submission time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub user_id: String,
    pub frames: Vec<FrameRecord>,
    pub total_score: u16,
    pub game_number: u32,
}

impl GameRecord {
    /// Snapshot every frame of a session.
    ///
    /// Callers go through [`GameSession::to_game_record`], which refuses
    /// incomplete games.
    pub(crate) fn from_session(session: &GameSession, user_id: String, game_number: u32) -> Self {
        let frames = session
            .frames()
            .iter()
            .map(|frame| FrameRecord {
                frame_number: frame.number(),
                first_roll: frame.first().unwrap_or(0),
                second_roll: frame.second().unwrap_or(0),
                third_roll: if frame.is_last() {
                    frame.third().unwrap_or(0)
                } else {
                    0
                },
                is_strike: frame.is_strike(),
                is_spare: frame.is_spare(),
                frame_score: session.frame_score(frame.index()),
            })
            .collect();

        Self {
            user_id,
            frames,
            total_score: session.running_total(LAST_FRAME),
            game_number,
        }
    }

    /// Whether the record has ten frames and a total matching its frame scores.
    pub fn is_consistent(&self) -> bool {
        self.frames.len() == FRAME_COUNT
            && self
                .frames
                .iter()
                .enumerate()
                .all(|(i, f)| f.frame_number as usize == i + 1)
            && self.frames.iter().map(|f| f.frame_score).sum::<u16>() == self.total_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(rolls: &[&str]) -> GameSession {
        let mut session = GameSession::new();
        for raw in rolls {
            session.submit_next(raw).unwrap();
        }
        assert!(session.is_complete());
        session
    }

    #[test]
    fn test_record_snapshots_frames() {
        let mut rolls = vec!["10", "7", "3"];
        rolls.extend(["0"; 14]);
        rolls.extend(["4", "3"]);
        let session = finished(&rolls);

        let record = session.to_game_record("user-1", 3).unwrap();
        assert_eq!(record.user_id, "user-1");
        assert_eq!(record.game_number, 3);
        assert_eq!(record.frames.len(), FRAME_COUNT);
        assert_eq!(record.total_score, 20 + 10 + 7);
        assert!(record.is_consistent());

        let first = record.frames[0];
        assert_eq!(first.frame_number, 1);
        assert!(first.is_strike);
        assert_eq!(first.second_roll, 0);
        assert_eq!(first.frame_score, 20);

        let second = record.frames[1];
        assert!(second.is_spare);
        assert_eq!(second.frame_score, 10);

        let last = record.frames[LAST_FRAME];
        assert_eq!(last.frame_number, 10);
        assert_eq!(last.third_roll, 0);
        assert_eq!(last.frame_score, 7);
    }

    #[test]
    fn test_record_json_uses_camel_case() {
        let session = finished(&["10"; 12]);
        let record = session.to_game_record("u", 1).unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["userId"], "u");
        assert_eq!(json["totalScore"], 300);
        assert_eq!(json["gameNumber"], 1);
        assert_eq!(json["frames"][9]["thirdRoll"], 10);
        assert_eq!(json["frames"][0]["isStrike"], true);
        assert_eq!(json["frames"][0]["frameScore"], 30);

        let back: GameRecord = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_tampered_total_is_inconsistent() {
        let session = finished(&["0"; 20]);
        let mut record = session.to_game_record("u", 1).unwrap();
        assert!(record.is_consistent());

        record.total_score = 12;
        assert!(!record.is_consistent());

        record.total_score = 0;
        record.frames.pop();
        assert!(!record.is_consistent());
    }
}
