//! Customer-facing read operations

use crate::LoyaltyClient;
use async_trait::async_trait;
use loyalty_core::{CustomerProfile, Result, TransactionHistoryResponse};

/// The two reads the profile view depends on
#[async_trait]
pub trait LoyaltyApi: Send + Sync {
    /// Current customer's profile, including the points ledger
    async fn fetch_profile(&self) -> Result<CustomerProfile>;

    async fn fetch_transactions(&self) -> Result<TransactionHistoryResponse>;
}

#[async_trait]
impl LoyaltyApi for LoyaltyClient {
    async fn fetch_profile(&self) -> Result<CustomerProfile> {
        self.get_customer_profile().await
    }

    async fn fetch_transactions(&self) -> Result<TransactionHistoryResponse> {
        self.get_transaction_history().await
    }
}
