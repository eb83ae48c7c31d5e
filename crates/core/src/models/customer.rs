//! Customer profile returned by `GET /customer/me`

use crate::models::{PointGrant, PointsLedger};
use serde::{Deserialize, Serialize};

/// Shown when the backend has not assigned the customer a tier
pub const NO_TIER_PLACEHOLDER: &str = "No tier assigned";

/// Profile of the logged-in customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub tier: Option<String>,
    /// Absent or `null` both mean "no grants"
    #[serde(default)]
    pub points_history: Option<PointsLedger>,
}

impl CustomerProfile {
    /// Tier label for display, falling back to the placeholder
    pub fn display_tier(&self) -> &str {
        match self.tier.as_deref() {
            Some(tier) if !tier.is_empty() => tier,
            _ => NO_TIER_PLACEHOLDER,
        }
    }

    /// The points ledger, empty when the backend omitted it
    pub fn ledger(&self) -> &[PointGrant] {
        self.points_history
            .as_ref()
            .map(PointsLedger::grants)
            .unwrap_or_default()
    }
}
