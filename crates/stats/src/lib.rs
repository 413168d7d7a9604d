//! Score statistics across a player's stored games.
//!
//! Backs the dashboard view: average, best, and worst totals plus a
//! chronological series for charting. Works over anything implementing
//! [`ScoredGame`], so it stays independent of how games are stored.

/// A finished game as seen by the statistics
pub trait ScoredGame {
    fn total_score(&self) -> u16;

    /// When the game was recorded, in unix milliseconds
    fn played_at_ms(&self) -> u64;
}

/// Summary of a set of games
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreStats {
    /// Mean total, rounded half up
    pub average: u16,
    pub highest: u16,
    pub lowest: u16,
    pub total_games: usize,
}

impl ScoreStats {
    /// Summarize games; all fields are zero when there are none.
    pub fn from_games<G: ScoredGame>(games: &[G]) -> Self {
        let Some(first) = games.first() else {
            return Self::default();
        };

        let mut sum: u64 = 0;
        let mut highest = first.total_score();
        let mut lowest = first.total_score();
        for game in games {
            let total = game.total_score();
            sum += u64::from(total);
            highest = highest.max(total);
            lowest = lowest.min(total);
        }

        let n = games.len() as u64;
        let average = (2 * sum + n) / (2 * n);

        Self {
            average: average as u16,
            highest,
            lowest,
            total_games: games.len(),
        }
    }
}

/// One point of the score-over-time chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryPoint {
    pub played_at_ms: u64,
    pub total_score: u16,
}

/// Totals ordered oldest first
pub fn score_history<G: ScoredGame>(games: &[G]) -> Vec<HistoryPoint> {
    let mut points: Vec<HistoryPoint> = games
        .iter()
        .map(|g| HistoryPoint {
            played_at_ms: g.played_at_ms(),
            total_score: g.total_score(),
        })
        .collect();
    points.sort_by_key(|p| p.played_at_ms);
    points
}
