//! Adapter module - persistence and identity collaborators
//!
//! The scoring engine never talks to storage itself. This crate takes a
//! finished [`GameSession`](bowling_tracker_core::GameSession), attaches the
//! current user's id and the next game number, and hands the record to a
//! [`ScoreStore`]. It also reads stored games back for the history and
//! statistics views.
//!
//! # Pieces
//!
//! - [`document`]: the stored game document (`id`, `date`, and the game record)
//! - [`store`]: the async [`ScoreStore`] trait with in-memory and JSON-file backends
//! - [`identity`]: who is logged in
//! - [`service`]: submission and history over a store and an identity provider
//! - [`runtime`]: a blocking front for synchronous callers, owning a tokio runtime
//! - [`config`]: environment-driven store selection
//!
//! # Environment Variables
//!
//! - `BOWLING_STORE_DIR`: directory for the JSON file store (default: in-memory store)
//! - `BOWLING_STORE_DISABLED`: set to "1" or "true" to force the in-memory store
//! - `BOWLING_USER`: user id reported by the static identity provider (default: logged out)
//!
//! # Failure handling
//!
//! Each submission is a single attempt. Store failures come back to the caller
//! unchanged as [`StoreError`]; nothing is retried here.

pub mod config;
pub mod document;
pub mod error;
pub mod identity;
pub mod runtime;
pub mod service;
pub mod store;

pub use bowling_tracker_core as core;
pub use bowling_tracker_stats as stats;
pub use bowling_tracker_types as types;

pub use config::StoreConfig;
pub use document::{now_unix_ms, StoredGame, StoredId};
pub use error::{StoreError, SubmitError};
pub use identity::{IdentityProvider, StaticIdentity, UserId};
pub use runtime::Recorder;
pub use service::ScoreService;
pub use store::{ConfiguredStore, JsonFileStore, MemoryStore, ScoreStore};
