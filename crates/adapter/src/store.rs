//! Score stores.
//!
//! [`ScoreStore`] is the persistence boundary: save a finished game, list a
//! user's games newest first, fetch one by id. Two backends:
//!
//! - [`MemoryStore`]: a vector behind a tokio `RwLock`, gone when the process exits
//! - [`JsonFileStore`]: one pretty-printed JSON document per game in a directory.
//!   Saves write `<id>.json.tmp` and rename it into place, so a crash never
//!   leaves a half-written `<id>.json`. Files that fail to parse are skipped
//!   with a warning rather than failing the whole listing.

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use crate::config::StoreConfig;
use crate::core::GameRecord;
use crate::document::{StoredGame, StoredId};
use crate::error::StoreError;
use crate::types::FRAME_COUNT;

/// Persistence collaborator for finished games
pub trait ScoreStore: Send + Sync {
    /// Validate and persist a record, returning its new id
    fn save(&self, record: GameRecord) -> impl Future<Output = Result<StoredId, StoreError>> + Send;

    /// Every game saved for a user, most recent first
    fn list_by_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<StoredGame>, StoreError>> + Send;

    fn get(&self, id: StoredId) -> impl Future<Output = Result<Option<StoredGame>, StoreError>> + Send;
}

/// Reject records no engine session could have produced.
pub fn validate_record(record: &GameRecord) -> Result<(), StoreError> {
    if record.user_id.trim().is_empty() {
        return Err(StoreError::Invalid("user id is required".to_string()));
    }
    if record.frames.len() != FRAME_COUNT {
        return Err(StoreError::Invalid(format!(
            "expected {} frames, got {}",
            FRAME_COUNT,
            record.frames.len()
        )));
    }
    if record.game_number == 0 {
        return Err(StoreError::Invalid(
            "game number must be at least 1".to_string(),
        ));
    }
    if !record.is_consistent() {
        return Err(StoreError::Invalid(format!(
            "total score {} does not match the frame scores",
            record.total_score
        )));
    }
    Ok(())
}

/// Write `bytes` to `<path>.tmp`, then rename it over `path`.
///
/// The tmp file is removed again if either step fails.
async fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let tmp = path.with_extension("json.tmp");
    let written = match tokio::fs::write(&tmp, bytes).await {
        Ok(()) => tokio::fs::rename(&tmp, path).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
            if cleanup.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %tmp.display(), "could not remove tmp file: {cleanup}");
            }
        }
        return Err(e.into());
    }
    Ok(())
}

/// In-process store
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: RwLock<Vec<StoredGame>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    async fn save(&self, record: GameRecord) -> Result<StoredId, StoreError> {
        validate_record(&record)?;
        let game = StoredGame::stamp(record);
        let id = game.id;
        tracing::info!(
            %id,
            user = %game.record.user_id,
            total = game.record.total_score,
            "game saved"
        );
        self.games.write().await.push(game);
        Ok(id)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<StoredGame>, StoreError> {
        let mut games: Vec<StoredGame> = self
            .games
            .read()
            .await
            .iter()
            .rev()
            .filter(|g| g.record.user_id == user_id)
            .cloned()
            .collect();
        StoredGame::sort_newest_first(&mut games);
        Ok(games)
    }

    async fn get(&self, id: StoredId) -> Result<Option<StoredGame>, StoreError> {
        Ok(self.games.read().await.iter().find(|g| g.id == id).cloned())
    }
}

/// Directory of JSON game documents
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open (or create) the store directory.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    fn path_for(&self, id: StoredId) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    async fn read_game(path: &Path) -> Option<StoredGame> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping unreadable game file: {e}");
                return None;
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(game) => Some(game),
            Err(e) => {
                tracing::warn!(path = %path.display(), "skipping malformed game file: {e}");
                None
            }
        }
    }

    async fn read_all(&self) -> Result<Vec<StoredGame>, StoreError> {
        let mut games = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            if let Some(game) = Self::read_game(&path).await {
                games.push(game);
            }
        }
        Ok(games)
    }
}

impl ScoreStore for JsonFileStore {
    async fn save(&self, record: GameRecord) -> Result<StoredId, StoreError> {
        validate_record(&record)?;
        let game = StoredGame::stamp(record);
        let json = serde_json::to_vec_pretty(&game)?;

        let path = self.path_for(game.id);
        write_atomic(&path, &json).await?;

        tracing::info!(
            id = %game.id,
            user = %game.record.user_id,
            total = game.record.total_score,
            path = %path.display(),
            "game saved"
        );
        Ok(game.id)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<StoredGame>, StoreError> {
        let mut games: Vec<StoredGame> = self
            .read_all()
            .await?
            .into_iter()
            .filter(|g| g.record.user_id == user_id)
            .collect();
        StoredGame::sort_newest_first(&mut games);
        Ok(games)
    }

    async fn get(&self, id: StoredId) -> Result<Option<StoredGame>, StoreError> {
        let path = self.path_for(id);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

/// The store picked by [`StoreConfig`]
#[derive(Debug)]
pub enum ConfiguredStore {
    Memory(MemoryStore),
    Files(JsonFileStore),
}

impl ConfiguredStore {
    pub async fn open(config: &StoreConfig) -> Result<Self, StoreError> {
        match &config.store_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "using JSON file store");
                Ok(Self::Files(JsonFileStore::open(dir.clone()).await?))
            }
            None => {
                tracing::info!("using in-memory store; games are lost on exit");
                Ok(Self::Memory(MemoryStore::new()))
            }
        }
    }
}

impl ScoreStore for ConfiguredStore {
    async fn save(&self, record: GameRecord) -> Result<StoredId, StoreError> {
        match self {
            Self::Memory(store) => store.save(record).await,
            Self::Files(store) => store.save(record).await,
        }
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<StoredGame>, StoreError> {
        match self {
            Self::Memory(store) => store.list_by_user(user_id).await,
            Self::Files(store) => store.list_by_user(user_id).await,
        }
    }

    async fn get(&self, id: StoredId) -> Result<Option<StoredGame>, StoreError> {
        match self {
            Self::Memory(store) => store.get(id).await,
            Self::Files(store) => store.get(id).await,
        }
    }
}
