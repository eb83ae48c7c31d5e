//! Shared type definitions and newtypes

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of days ahead that counts as "expiring soon"
pub const DEFAULT_WARNING_DAYS: f64 = 30.0;

/// Length of the expiry warning window, in (possibly fractional) days
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct WarningWindow(f64);

impl WarningWindow {
    /// Build a window of `days`; negative or non-finite lengths are rejected
    pub fn new(days: f64) -> Result<Self> {
        if !days.is_finite() || days < 0.0 {
            return Err(Error::InvalidData(format!(
                "Warning window must be a non-negative number of days, got {}",
                days
            )));
        }
        Ok(WarningWindow(days))
    }

    pub fn days(&self) -> f64 {
        self.0
    }
}

impl Default for WarningWindow {
    fn default() -> Self {
        WarningWindow(DEFAULT_WARNING_DAYS)
    }
}

impl TryFrom<f64> for WarningWindow {
    type Error = Error;

    fn try_from(days: f64) -> Result<Self> {
        WarningWindow::new(days)
    }
}

impl From<WarningWindow> for f64 {
    fn from(window: WarningWindow) -> Self {
        window.0
    }
}

impl std::fmt::Display for WarningWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Credentials the transport attaches to outgoing requests.
///
/// Passed explicitly to the HTTP client instead of being looked up globally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    token: Option<String>,
}

impl SessionContext {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: if token.is_empty() { None } else { Some(token) },
        }
    }

    /// A context with no token; requests go out without an Authorization header
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Named navigation targets of the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Dashboard,
}

impl Route {
    /// Where the user lands after the session is cleared
    pub const LANDING: Route = Route::Dashboard;

    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
        }
    }
}
