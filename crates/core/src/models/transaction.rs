//! Spend transactions returned by `GET /transactions/history`

use serde::{Deserialize, Serialize};

/// A single spend event. Fields other than `amount` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Missing or `null` amounts count as zero
    #[serde(default)]
    pub amount: Option<f64>,
}

impl Transaction {
    pub fn new(amount: f64) -> Self {
        Self {
            amount: Some(amount),
        }
    }

    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}

/// Response envelope of the transaction history endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionHistoryResponse {
    #[serde(default)]
    pub transactions: Option<Vec<Transaction>>,
}

impl TransactionHistoryResponse {
    pub fn transactions(&self) -> &[Transaction] {
        self.transactions.as_deref().unwrap_or_default()
    }
}
