//! Store configuration from the environment.

use std::path::PathBuf;

/// Where games are stored and who is submitting them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// JSON file store directory; `None` selects the in-memory store
    pub store_dir: Option<PathBuf>,
    /// User id for the static identity provider; `None` means logged out
    pub user_id: Option<String>,
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, or a map in tests)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let disabled = non_empty("BOWLING_STORE_DISABLED")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let mut store_dir = non_empty("BOWLING_STORE_DIR").map(PathBuf::from);
        if disabled && store_dir.is_some() {
            tracing::warn!("BOWLING_STORE_DISABLED is set; ignoring BOWLING_STORE_DIR");
            store_dir = None;
        }

        Self {
            store_dir,
            user_id: non_empty("BOWLING_USER"),
        }
    }
}
