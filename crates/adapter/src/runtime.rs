//! Adapter runtime integration.
//!
//! Bridges the synchronous entry loop with the async score store. The
//! [`Recorder`] owns a current-thread tokio runtime and blocks on each call;
//! `submit` takes `&mut self`, so a recorder never has two submissions in
//! flight.

use tokio::runtime::{Builder, Runtime};

use crate::config::StoreConfig;
use crate::core::GameSession;
use crate::document::{StoredGame, StoredId};
use crate::error::{StoreError, SubmitError};
use crate::identity::{IdentityProvider, StaticIdentity};
use crate::service::ScoreService;
use crate::stats::{HistoryPoint, ScoreStats};
use crate::store::{ConfiguredStore, ScoreStore};

/// Blocking front for a [`ScoreService`]
pub struct Recorder<S, I> {
    rt: Runtime,
    service: ScoreService<S, I>,
}

impl Recorder<ConfiguredStore, StaticIdentity> {
    /// Build the store and identity from environment variables.
    pub fn start_from_env() -> Result<Self, StoreError> {
        Self::from_config(&StoreConfig::from_env())
    }

    pub fn from_config(config: &StoreConfig) -> Result<Self, StoreError> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        let store = rt.block_on(ConfiguredStore::open(config))?;
        let identity = StaticIdentity::new(config.user_id.clone());
        Ok(Self {
            rt,
            service: ScoreService::new(store, identity),
        })
    }
}

impl<S: ScoreStore, I: IdentityProvider> Recorder<S, I> {
    pub fn new(store: S, identity: I) -> Result<Self, StoreError> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        Ok(Self {
            rt,
            service: ScoreService::new(store, identity),
        })
    }

    /// Save a finished game and start the session over.
    ///
    /// On failure the session keeps its rolls so the caller can try again.
    pub fn submit(&mut self, session: &mut GameSession) -> Result<StoredId, SubmitError> {
        let id = self.rt.block_on(self.service.submit(session))?;
        session.reset();
        Ok(id)
    }

    pub fn history(&self) -> Result<Vec<StoredGame>, SubmitError> {
        self.rt.block_on(self.service.history())
    }

    pub fn stats(&self) -> Result<ScoreStats, SubmitError> {
        self.rt.block_on(self.service.stats())
    }

    pub fn trend(&self) -> Result<Vec<HistoryPoint>, SubmitError> {
        self.rt.block_on(self.service.trend())
    }

    pub fn get(&self, id: StoredId) -> Result<Option<StoredGame>, SubmitError> {
        self.rt.block_on(self.service.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn submit_resets_session_on_success() {
        let mut recorder =
            Recorder::new(MemoryStore::new(), StaticIdentity::logged_in("u1")).unwrap();
        let mut session = GameSession::new();
        while !session.is_complete() {
            session.submit_next("5").unwrap();
        }
        assert_eq!(session.total_score(), 150);

        let id = recorder.submit(&mut session).unwrap();
        assert_eq!(session, GameSession::new());

        let saved = recorder.get(id).unwrap().unwrap();
        assert_eq!(saved.record.total_score, 150);
        assert_eq!(recorder.history().unwrap().len(), 1);
        assert_eq!(recorder.stats().unwrap().average, 150);
    }

    #[test]
    fn trend_runs_oldest_first() {
        let mut recorder =
            Recorder::new(MemoryStore::new(), StaticIdentity::logged_in("u1")).unwrap();
        for pins in ["1", "10", "4"] {
            let mut session = GameSession::new();
            while !session.is_complete() {
                session.submit_next(pins).unwrap();
            }
            recorder.submit(&mut session).unwrap();
        }

        let trend = recorder.trend().unwrap();
        assert_eq!(trend.len(), 3);
        assert!(trend.windows(2).all(|w| w[0].played_at_ms <= w[1].played_at_ms));
        let totals: Vec<u16> = trend.iter().map(|p| p.total_score).collect();
        assert_eq!(totals, vec![20, 300, 80]);
    }

    #[test]
    fn failed_submit_keeps_rolls() {
        let mut recorder = Recorder::new(MemoryStore::new(), StaticIdentity::logged_out()).unwrap();
        let mut session = GameSession::new();
        while !session.is_complete() {
            session.submit_next("10").unwrap();
        }
        let before = session.clone();

        assert!(matches!(
            recorder.submit(&mut session),
            Err(SubmitError::Unauthenticated)
        ));
        assert_eq!(session, before);
    }

    #[test]
    fn from_config_defaults_to_memory() {
        let recorder = Recorder::from_config(&StoreConfig::default()).unwrap();
        assert!(matches!(recorder.service.store(), ConfiguredStore::Memory(_)));
        assert!(matches!(
            recorder.history(),
            Err(SubmitError::Unauthenticated)
        ));
    }
}
