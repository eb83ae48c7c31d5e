//! Display settings stored as JSON in the `settings` table

use loyalty_core::{Error, Result, WarningWindow};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

const DISPLAY_SETTINGS_KEY: &str = "display_settings";

/// User-adjustable presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    #[serde(default)]
    pub warning_window: WarningWindow,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "₹".to_string()
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            warning_window: WarningWindow::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

/// Load display settings, falling back to defaults when none were saved
pub async fn get_display_settings(pool: &SqlitePool) -> Result<DisplaySettings> {
    let json = sqlx::query_scalar::<sqlx::Sqlite, String>("SELECT value FROM settings WHERE key = ?")
        .bind(DISPLAY_SETTINGS_KEY)
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    match json {
        Some(j) => Ok(serde_json::from_str(&j)?),
        None => Ok(DisplaySettings::default()),
    }
}

pub async fn set_display_settings(pool: &SqlitePool, settings: &DisplaySettings) -> Result<()> {
    let json = serde_json::to_string(settings)?;

    sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
        .bind(DISPLAY_SETTINGS_KEY)
        .bind(&json)
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}
