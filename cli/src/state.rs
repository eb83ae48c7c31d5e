//! Application state: where data lives and how the session is opened

use anyhow::Context;
use loyalty_persistence::{Database, SessionCipher, SessionStore};
use std::path::PathBuf;

const DB_FILE_NAME: &str = "loyalty.db";

pub struct AppState {
    pub data_dir: PathBuf,
    pub api_url: String,
    pub store: SessionStore,
}

impl AppState {
    /// Open the session database under `data_dir`, keyed to this machine
    pub async fn open(data_dir: PathBuf, api_url: String) -> anyhow::Result<Self> {
        let key = loyalty_persistence::derive_machine_key()
            .context("Failed to derive machine encryption key")?;
        let cipher = SessionCipher::new(&key)?;

        let db_path = data_dir.join(DB_FILE_NAME);
        let db = Database::connect(&db_path)
            .await
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;

        Ok(Self {
            data_dir,
            api_url,
            store: SessionStore::new(db, cipher),
        })
    }
}

/// Platform data directory, or the working directory as a last resort
pub fn default_data_dir() -> PathBuf {
    dirs_next::data_local_dir()
        .map(|p| p.join("LoyaltyProfile"))
        .unwrap_or_else(|| PathBuf::from("."))
}
