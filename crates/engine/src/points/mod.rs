//! Active and soon-to-expire point balances
//!
//! Both balances are pure reductions over the ledger. `now` is always passed
//! in, never read from the clock, so results are reproducible.

use chrono::{DateTime, Utc};
use loyalty_core::{PointGrant, WarningWindow};

/// Points that are neither redeemed nor expired at `now`.
///
/// A grant whose `expires_at` equals `now` has already lapsed.
pub fn active_balance(ledger: &[PointGrant], now: DateTime<Utc>) -> f64 {
    ledger
        .iter()
        .filter(|grant| grant.is_active_at(now))
        .map(|grant| grant.points)
        .sum()
}

/// The part of the active balance that lapses within `window`.
///
/// Remaining lifetime is measured in fractional days with no rounding, and a
/// grant expiring exactly `window` days from `now` is included.
pub fn expiring_balance(ledger: &[PointGrant], now: DateTime<Utc>, window: WarningWindow) -> f64 {
    ledger
        .iter()
        .filter(|grant| grant.is_active_at(now) && grant.days_remaining(now) <= window.days())
        .map(|grant| grant.points)
        .sum()
}

/// Both point balances for one ledger snapshot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointsSummary {
    pub active: f64,
    pub expiring: f64,
}

impl PointsSummary {
    pub fn compute(ledger: &[PointGrant], now: DateTime<Utc>, window: WarningWindow) -> Self {
        Self {
            active: active_balance(ledger, now),
            expiring: expiring_balance(ledger, now, window),
        }
    }
}
