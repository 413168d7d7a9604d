//! Submission and history over a store and an identity provider.

use crate::core::GameSession;
use crate::document::{StoredGame, StoredId};
use crate::error::SubmitError;
use crate::identity::{IdentityProvider, UserId};
use crate::stats::{score_history, HistoryPoint, ScoreStats};
use crate::store::ScoreStore;

pub struct ScoreService<S, I> {
    store: S,
    identity: I,
}

impl<S: ScoreStore, I: IdentityProvider> ScoreService<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        Self { store, identity }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn user(&self) -> Result<UserId, SubmitError> {
        self.identity
            .current_user()
            .ok_or(SubmitError::Unauthenticated)
    }

    /// Save a finished game for the current user.
    ///
    /// The game number is one more than the number of games the user already
    /// has. An incomplete session is refused before the store is touched.
    pub async fn submit(&self, session: &GameSession) -> Result<StoredId, SubmitError> {
        let user = self.user()?;
        let mut record = session.to_game_record(user.clone(), 0)?;

        let played = self.store.list_by_user(&user).await?.len();
        record.game_number = played as u32 + 1;

        let id = self.store.save(record).await?;
        Ok(id)
    }

    /// The current user's games, most recent first
    pub async fn history(&self) -> Result<Vec<StoredGame>, SubmitError> {
        let user = self.user()?;
        Ok(self.store.list_by_user(&user).await?)
    }

    pub async fn stats(&self) -> Result<ScoreStats, SubmitError> {
        let games = self.history().await?;
        Ok(ScoreStats::from_games(&games))
    }

    /// The current user's totals, oldest first, for charting
    pub async fn trend(&self) -> Result<Vec<HistoryPoint>, SubmitError> {
        let mut games = self.history().await?;
        // Oldest first going in keeps same-millisecond games in play order.
        games.reverse();
        Ok(score_history(&games))
    }

    pub async fn get(&self, id: StoredId) -> Result<Option<StoredGame>, SubmitError> {
        Ok(self.store.get(id).await?)
    }
}
