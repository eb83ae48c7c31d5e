//! Lifetime spend across the transaction history

use loyalty_core::Transaction;

/// Sum of every transaction amount; a missing amount counts as zero
pub fn lifetime_spend(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(Transaction::amount_or_zero).sum()
}
