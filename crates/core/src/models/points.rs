//! Loyalty point grants and the ledger that holds them

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One award of loyalty points, as returned inside `pointsHistory`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointGrant {
    pub points: f64,
    /// Instant after which the grant can no longer be redeemed
    pub expires_at: DateTime<Utc>,
    #[serde(default)]
    pub redeemed: bool,
}

impl PointGrant {
    /// Whether the grant still counts toward the balance at `now`.
    ///
    /// A grant expiring exactly at `now` is no longer active.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        !self.redeemed && self.expires_at > now
    }

    /// Remaining lifetime in fractional days (negative once expired).
    ///
    /// Keeps the full nanosecond precision of the timestamps; spans too large
    /// for nanoseconds fall back to milliseconds.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> f64 {
        const MILLIS_PER_DAY: f64 = 1000.0 * 60.0 * 60.0 * 24.0;
        const NANOS_PER_DAY: f64 = MILLIS_PER_DAY * 1_000_000.0;

        let remaining = self.expires_at - now;
        match remaining.num_nanoseconds() {
            Some(nanos) => nanos as f64 / NANOS_PER_DAY,
            None => remaining.num_milliseconds() as f64 / MILLIS_PER_DAY,
        }
    }
}

/// A customer's full points history. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointsLedger(pub Vec<PointGrant>);

impl PointsLedger {
    pub fn grants(&self) -> &[PointGrant] {
        &self.0
    }
}

impl From<Vec<PointGrant>> for PointsLedger {
    fn from(grants: Vec<PointGrant>) -> Self {
        PointsLedger(grants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_grant_decodes_camel_case() {
        let json = r#"{"points": 120, "expiresAt": "2026-03-01T00:00:00Z", "redeemed": true}"#;
        let grant: PointGrant = serde_json::from_str(json).unwrap();
        assert_eq!(grant.points, 120.0);
        assert!(grant.redeemed);
        assert_eq!(grant.expires_at, Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_redeemed_defaults_to_false() {
        let json = r#"{"points": 5, "expiresAt": "2026-03-01T00:00:00.000Z"}"#;
        let grant: PointGrant = serde_json::from_str(json).unwrap();
        assert!(!grant.redeemed);
    }

    #[test]
    fn test_days_remaining_is_fractional() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let grant = PointGrant {
            points: 1.0,
            expires_at: now + Duration::hours(36),
            redeemed: false,
        };
        assert_eq!(grant.days_remaining(now), 1.5);
    }

    #[test]
    fn test_days_remaining_keeps_sub_millisecond_precision() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let grant = PointGrant {
            points: 1.0,
            expires_at: now + Duration::days(30) + Duration::microseconds(900),
            redeemed: false,
        };
        assert!(grant.days_remaining(now) > 30.0);
    }

    #[test]
    fn test_days_remaining_far_future_does_not_overflow() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let grant = PointGrant {
            points: 1.0,
            expires_at: Utc.with_ymd_and_hms(2500, 1, 1, 0, 0, 0).unwrap(),
            redeemed: false,
        };
        assert!(grant.days_remaining(now) > 365.0 * 400.0);
    }

    #[test]
    fn test_expiry_at_now_is_inactive() {
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let grant = PointGrant {
            points: 10.0,
            expires_at: now,
            redeemed: false,
        };
        assert!(!grant.is_active_at(now));
        assert!(grant.is_active_at(now - Duration::milliseconds(1)));
    }
}
