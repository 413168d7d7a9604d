//! Scoring module - ten-pin frame scores and running totals
//!
//! Bonus balls are looked up in a flattened roll stream rather than frame by
//! frame: the rolls of every frame after the one being scored, in the order
//! they were bowled. A strike takes the next two entries, a spare the next
//! one. This keeps the double-strike case right without special-casing the
//! tenth frame: strikes in frames 8 and 9 followed by a 3 in the tenth give
//! frame 8 `10 + 10 + 3`, and a strike in frame 9 followed by `10, 7` in the
//! tenth gives `10 + 10 + 7`.
//!
//! The stream stops at the first roll that has not been entered, so a frame
//! waiting on bonus balls scores as if the missing balls were gutters. That
//! provisional value becomes final once the balls are rolled.

use arrayvec::ArrayVec;

use crate::frame::FrameStore;
use crate::types::{LAST_FRAME, MAX_ROLLS};

/// Fixed-capacity buffer holding a flattened run of rolls
pub type RollStream = ArrayVec<u8, MAX_ROLLS>;

/// Rolls bowled after frame `index`, in order, up to the first missing roll.
pub fn roll_stream_after(frames: &FrameStore, index: usize) -> RollStream {
    let mut stream = RollStream::new();
    for frame in frames.iter().skip(index + 1) {
        for roll in frame.entered_rolls() {
            // A legal game never exceeds MAX_ROLLS, so this cannot drop rolls.
            let _ = stream.try_push(roll);
        }
        if !frame.is_resolved() {
            break;
        }
    }
    stream
}

/// Number of bonus balls a frame collects from later frames
fn bonus_balls(frames: &FrameStore, index: usize) -> usize {
    match frames.get(index) {
        Some(frame) if index < LAST_FRAME && frame.is_strike() => 2,
        Some(frame) if index < LAST_FRAME && frame.is_spare() => 1,
        _ => 0,
    }
}

/// Score of a single frame, including any strike or spare bonus.
///
/// Returns 0 for an index past the tenth frame.
pub fn frame_score(frames: &FrameStore, index: usize) -> u16 {
    let Some(frame) = frames.get(index) else {
        return 0;
    };

    let base = frame.pin_total();
    let bonus = match bonus_balls(frames, index) {
        0 => 0,
        n => roll_stream_after(frames, index)
            .iter()
            .take(n)
            .map(|&roll| u16::from(roll))
            .sum(),
    };

    base + bonus
}

/// Cumulative score through frame `index` (clamped to the tenth frame).
pub fn running_total(frames: &FrameStore, index: usize) -> u16 {
    (0..=index.min(LAST_FRAME))
        .map(|i| frame_score(frames, i))
        .sum()
}

/// Whether a frame's score may still change as more rolls are entered.
pub fn is_provisional(frames: &FrameStore, index: usize) -> bool {
    let Some(frame) = frames.get(index) else {
        return false;
    };
    if !frame.is_resolved() {
        return true;
    }
    match bonus_balls(frames, index) {
        0 => false,
        n => roll_stream_after(frames, index).len() < n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RollSlot, FRAME_COUNT};

    /// Fill frames straight from a roll list, bypassing the input gate.
    fn store_from_rolls(rolls: &[u8]) -> FrameStore {
        let mut store = FrameStore::new();
        let mut frame = 0;
        let mut slot = Some(RollSlot::First);
        for &roll in rolls {
            let current = slot.expect("roll list runs past the tenth frame");
            store.set(frame, current, roll);
            let resolved = store.get(frame).map(|f| f.is_resolved()).unwrap_or(true);
            if resolved && frame < LAST_FRAME {
                frame += 1;
                slot = Some(RollSlot::First);
            } else {
                slot = current.next();
            }
        }
        store
    }

    #[test]
    fn test_open_frames_score_face_value() {
        let store = store_from_rolls(&[3, 4, 2, 5]);
        assert_eq!(frame_score(&store, 0), 7);
        assert_eq!(frame_score(&store, 1), 7);
        assert_eq!(running_total(&store, 1), 14);
        assert_eq!(running_total(&store, LAST_FRAME), 14);
    }

    #[test]
    fn test_spare_takes_next_ball() {
        let store = store_from_rolls(&[6, 4, 5, 2]);
        assert_eq!(frame_score(&store, 0), 15);
        assert_eq!(running_total(&store, 1), 22);
    }

    #[test]
    fn test_strike_takes_next_two_balls() {
        let store = store_from_rolls(&[10, 3, 4]);
        assert_eq!(frame_score(&store, 0), 17);
        assert_eq!(running_total(&store, 1), 24);
    }

    #[test]
    fn test_double_strike_reads_across_frames() {
        let store = store_from_rolls(&[10, 10, 4, 2]);
        assert_eq!(frame_score(&store, 0), 24);
        assert_eq!(frame_score(&store, 1), 16);
        assert_eq!(frame_score(&store, 2), 6);
    }

    #[test]
    fn test_strikes_in_eight_and_nine_into_tenth() {
        let mut rolls = vec![0; 14];
        rolls.extend_from_slice(&[10, 10, 3]);
        let store = store_from_rolls(&rolls);

        assert_eq!(frame_score(&store, 7), 23);
        assert_eq!(frame_score(&store, 8), 13);
        assert_eq!(frame_score(&store, LAST_FRAME), 3);
    }

    #[test]
    fn test_strike_in_nine_uses_tenth_second_ball() {
        let mut rolls = vec![0; 16];
        rolls.extend_from_slice(&[10, 10, 7, 2]);
        let store = store_from_rolls(&rolls);

        assert_eq!(frame_score(&store, 8), 27);
        assert_eq!(frame_score(&store, LAST_FRAME), 19);
    }

    #[test]
    fn test_perfect_game() {
        let store = store_from_rolls(&[10; 12]);
        for i in 0..FRAME_COUNT {
            assert_eq!(frame_score(&store, i), 30, "frame {}", i);
        }
        assert_eq!(running_total(&store, LAST_FRAME), 300);
    }

    #[test]
    fn test_provisional_scores_fill_in() {
        let store = store_from_rolls(&[10]);
        assert_eq!(frame_score(&store, 0), 10);
        assert!(is_provisional(&store, 0));

        let store = store_from_rolls(&[10, 10]);
        assert_eq!(frame_score(&store, 0), 20);
        assert!(is_provisional(&store, 0));

        let store = store_from_rolls(&[10, 10, 6]);
        assert_eq!(frame_score(&store, 0), 26);
        assert!(!is_provisional(&store, 0));
        assert!(is_provisional(&store, 1));
    }

    #[test]
    fn test_roll_stream_stops_at_gap() {
        let store = store_from_rolls(&[10, 7]);
        assert_eq!(roll_stream_after(&store, 0).as_slice(), &[7]);
        assert!(roll_stream_after(&store, 1).is_empty());
    }

    #[test]
    fn test_out_of_range_index() {
        let store = store_from_rolls(&[10; 12]);
        assert_eq!(frame_score(&store, FRAME_COUNT), 0);
        assert_eq!(running_total(&store, 99), 300);
        assert!(!is_provisional(&store, FRAME_COUNT));
    }
}
