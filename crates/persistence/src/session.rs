//! Local session store: the one place the bearer token lives between runs

use crate::encryption::SessionCipher;
use crate::sqlite::{self, DisplaySettings};
use crate::Database;
use loyalty_core::{Error, Result, Route, SessionContext};
use tracing::{debug, info};

/// Owns the database and the cipher used to seal the token
pub struct SessionStore {
    db: Database,
    cipher: SessionCipher,
}

impl SessionStore {
    pub fn new(db: Database, cipher: SessionCipher) -> Self {
        Self { db, cipher }
    }

    /// Seal and persist `token`, replacing any existing session
    pub async fn login(&self, token: &str) -> Result<()> {
        let token = token.trim();
        if token.is_empty() {
            return Err(Error::InvalidData("Token must not be empty".to_string()));
        }

        let sealed = self.cipher.seal(token)?;
        sqlite::save_session_token(self.db.pool(), &sealed).await?;
        info!("Session stored");
        Ok(())
    }

    /// Build the context the HTTP client needs.
    ///
    /// With no stored session the context is anonymous and requests go out
    /// without an Authorization header.
    pub async fn context(&self) -> Result<SessionContext> {
        match sqlite::get_session_token(self.db.pool()).await? {
            Some(sealed) => {
                let token = self.cipher.open(&sealed)?;
                sqlite::touch_session(self.db.pool()).await?;
                debug!("Loaded stored session token");
                Ok(SessionContext::new(token))
            }
            None => {
                debug!("No stored session; requests will be unauthenticated");
                Ok(SessionContext::anonymous())
            }
        }
    }

    pub async fn is_logged_in(&self) -> Result<bool> {
        Ok(sqlite::get_session_info(self.db.pool()).await?.is_some())
    }

    /// Forget everything about the current session and return the landing route
    pub async fn logout(&self) -> Result<Route> {
        let existed = sqlite::clear_session(self.db.pool()).await?;
        if existed {
            info!("Session cleared");
        } else {
            debug!("Logout requested with no stored session");
        }
        Ok(Route::LANDING)
    }

    pub async fn display_settings(&self) -> Result<DisplaySettings> {
        sqlite::get_display_settings(self.db.pool()).await
    }

    pub async fn save_display_settings(&self, settings: &DisplaySettings) -> Result<()> {
        sqlite::set_display_settings(self.db.pool(), settings).await
    }
}
