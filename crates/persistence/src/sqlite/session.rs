//! Persisted session row (the encrypted bearer token)

use crate::encryption::SealedToken;
use chrono::{DateTime, Utc};
use loyalty_core::{Error, Result};
use sqlx::SqlitePool;

/// Metadata about the stored session, without the token itself
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionInfo {
    pub created_at: Option<DateTime<Utc>>,
    pub last_used: Option<DateTime<Utc>>,
}

/// Store the sealed token, replacing whatever session was there
pub async fn save_session_token(pool: &SqlitePool, sealed: &SealedToken) -> Result<()> {
    sqlx::query(
        r#"
        INSERT OR REPLACE INTO session (id, token_encrypted, iv, created_at, last_used)
        VALUES (1, ?, ?, CURRENT_TIMESTAMP, NULL)
        "#,
    )
    .bind(&sealed.ciphertext)
    .bind(&sealed.nonce[..])
    .execute(pool)
    .await
    .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

/// Load the sealed token, if a session exists
pub async fn get_session_token(pool: &SqlitePool) -> Result<Option<SealedToken>> {
    let row: Option<(Vec<u8>, Vec<u8>)> =
        sqlx::query_as("SELECT token_encrypted, iv FROM session WHERE id = 1")
            .fetch_optional(pool)
            .await
            .map_err(|e| Error::DatabaseError(e.to_string()))?;

    match row {
        Some((ciphertext, nonce_vec)) => {
            let nonce: [u8; 12] = nonce_vec
                .as_slice()
                .try_into()
                .map_err(|_| Error::DatabaseError("Invalid nonce length".to_string()))?;
            Ok(Some(SealedToken { ciphertext, nonce }))
        }
        None => Ok(None),
    }
}

pub async fn get_session_info(pool: &SqlitePool) -> Result<Option<SessionInfo>> {
    sqlx::query_as::<_, SessionInfo>("SELECT created_at, last_used FROM session WHERE id = 1")
        .fetch_optional(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))
}

/// Record that the stored token was just used for a request
pub async fn touch_session(pool: &SqlitePool) -> Result<()> {
    sqlx::query("UPDATE session SET last_used = CURRENT_TIMESTAMP WHERE id = 1")
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(())
}

/// Delete all session state. Returns whether a session existed.
pub async fn clear_session(pool: &SqlitePool) -> Result<bool> {
    let result = sqlx::query("DELETE FROM session")
        .execute(pool)
        .await
        .map_err(|e| Error::DatabaseError(e.to_string()))?;

    Ok(result.rows_affected() > 0)
}
