//! Loyalty backend HTTP client with bearer-token authentication

use loyalty_core::{
    CustomerProfile, Error, Result, SessionContext, TransactionHistoryResponse,
};
use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION},
    Client, Response,
};
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const USER_AGENT_VALUE: &str = concat!("loyalty-profile/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the loyalty backend.
///
/// Every request carries `Authorization: Bearer <token>` when the injected
/// session has a token, and no Authorization header otherwise.
pub struct LoyaltyClient {
    http: Client,
    base_url: String,
    session: SessionContext,
}

impl LoyaltyClient {
    pub fn new(base_url: &str, session: SessionContext) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT_VALUE)
            .build()
            .map_err(|e| Error::NetworkError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = self.session.token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|_| {
                Error::AuthenticationError("Token contains invalid header characters".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }

    /// Check if response indicates authentication failure
    fn check_auth_error(response: &Response) -> Option<Error> {
        match response.status().as_u16() {
            401 => Some(Error::SessionExpired),
            403 => Some(Error::AuthenticationError("Access forbidden".to_string())),
            _ => None,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("Fetching {} from: {}", what, url);

        let response = self
            .http
            .get(&url)
            .headers(self.default_headers()?)
            .send()
            .await
            .map_err(|e| {
                error!("{} request failed: {}", what, e);
                Error::NetworkError(e.to_string())
            })?;

        debug!("{} response status: {}", what, response.status());

        if let Some(err) = Self::check_auth_error(&response) {
            return Err(err);
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("{} request failed with status {}: {}", what, status, body);
            return Err(Error::ApiError(format!(
                "{} request failed with status {}",
                what, status
            )));
        }

        response.json().await.map_err(|e| {
            error!("Failed to parse {} response: {}", what, e);
            Error::InvalidData(e.to_string())
        })
    }

    /// `GET /customer/me`
    #[instrument(skip(self))]
    pub async fn get_customer_profile(&self) -> Result<CustomerProfile> {
        let profile: CustomerProfile = self.get_json("/customer/me", "Profile").await?;
        debug!(
            "Profile fetched: {} with {} point grants",
            profile.email,
            profile.ledger().len()
        );
        Ok(profile)
    }

    /// `GET /transactions/history`
    #[instrument(skip(self))]
    pub async fn get_transaction_history(&self) -> Result<TransactionHistoryResponse> {
        let history: TransactionHistoryResponse =
            self.get_json("/transactions/history", "Transactions").await?;
        debug!("Fetched {} transactions", history.transactions().len());
        Ok(history)
    }
}
