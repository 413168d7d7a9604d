//! Plain-text score sheet.
//!
//! Renders a session the way a bowling alley monitor does: one box per frame
//! with conventional marks (`X` strike, `/` spare, `-` gutter) and the running
//! total under every frame that has been started. The active frame is flagged
//! with `>` in the header.
//!
//! ```text
//!   1  |  2  |  3  | ...
//!  X   | 7 / | 9 - | ...
//!   20 |  39 |  48 | ...
//! ```

use std::fmt::Write;

use crate::core::{Frame, GameSession};
use crate::stats::HistoryPoint;
use crate::types::{PERFECT_SCORE, PIN_COUNT};

fn pin_mark(value: u8) -> char {
    match value {
        0 => '-',
        v if v >= PIN_COUNT => 'X',
        v => char::from_digit(u32::from(v), 10).unwrap_or('?'),
    }
}

/// Mark for a ball that may pick up the pins left by `before`.
fn follow_up_mark(before: u8, value: u8) -> char {
    if before < PIN_COUNT && before + value == PIN_COUNT {
        '/'
    } else {
        pin_mark(value)
    }
}

/// Marks for the three roll boxes of a frame
pub fn frame_marks(frame: &Frame) -> [char; 3] {
    let mut marks = [' '; 3];
    let Some(first) = frame.first() else {
        return marks;
    };
    marks[0] = pin_mark(first);

    if let Some(second) = frame.second() {
        marks[1] = if frame.is_last() && first == PIN_COUNT {
            pin_mark(second)
        } else {
            follow_up_mark(first, second)
        };

        if let Some(third) = frame.third() {
            marks[2] = if frame.is_spare() || second == PIN_COUNT {
                pin_mark(third)
            } else {
                follow_up_mark(second, third)
            };
        }
    }
    marks
}

/// Render the session as a three-line sheet.
pub fn render(session: &GameSession) -> String {
    let mut header = String::new();
    let mut rolls = String::new();
    let mut totals = String::new();

    for frame in session.frames().iter() {
        let i = frame.index();
        let marks = frame_marks(frame);
        let cursor = if i == session.active_frame() && !session.is_complete() {
            '>'
        } else {
            ' '
        };
        let started = frame.first().is_some();

        if frame.is_last() {
            let _ = write!(header, "{}{:^6}|", cursor, frame.number());
            let _ = write!(rolls, " {} {} {} |", marks[0], marks[1], marks[2]);
            if started {
                let _ = write!(totals, "{:>6} |", session.running_total(i));
            } else {
                let _ = write!(totals, "{:>6} |", "");
            }
        } else {
            let _ = write!(header, "{}{:^4}|", cursor, frame.number());
            if frame.is_strike() {
                let _ = write!(rolls, " {}   |", marks[0]);
            } else {
                let _ = write!(rolls, " {} {} |", marks[0], marks[1]);
            }
            if started {
                let _ = write!(totals, "{:>4} |", session.running_total(i));
            } else {
                let _ = write!(totals, "{:>4} |", "");
            }
        }
    }

    format!("{}\n{}\n{}", header, rolls, totals)
}

/// One line per game, oldest first, with a bar scaled to a perfect game.
pub fn render_trend(points: &[HistoryPoint]) -> String {
    const BAR_WIDTH: u16 = 30;
    let mut out = String::new();
    for (i, point) in points.iter().enumerate() {
        let filled = point.total_score.min(PERFECT_SCORE) * BAR_WIDTH / PERFECT_SCORE;
        let _ = writeln!(
            out,
            "game {:>3}  {:>3}  {}",
            i + 1,
            point.total_score,
            "#".repeat(usize::from(filled))
        );
    }
    out
}
