//! Loads the customer's data and turns it into view state

use crate::points::PointsSummary;
use crate::spend::lifetime_spend;
use chrono::{DateTime, Utc};
use loyalty_core::{CustomerProfile, TransactionHistoryResponse, WarningWindow};
use loyalty_networking::LoyaltyApi;
use tokio::sync::watch;
use tracing::{error, info, instrument};

/// The only error the customer ever sees, whatever went wrong underneath
pub const PROFILE_UNAVAILABLE: &str = "Failed to load profile data.";

/// Presentation knobs for the profile view
#[derive(Debug, Clone, PartialEq)]
pub struct ViewOptions {
    pub warning_window: WarningWindow,
    pub currency_symbol: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            warning_window: WarningWindow::default(),
            currency_symbol: "₹".to_string(),
        }
    }
}

/// Everything shown once both fetches succeeded
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileView {
    pub name: String,
    pub email: String,
    pub tier: String,
    pub points_balance: f64,
    pub expiring_points: f64,
    pub warning_window: WarningWindow,
    pub lifetime_spend: f64,
    pub currency_symbol: String,
}

impl ProfileView {
    pub fn build(
        profile: &CustomerProfile,
        history: &TransactionHistoryResponse,
        now: DateTime<Utc>,
        options: &ViewOptions,
    ) -> Self {
        let points = PointsSummary::compute(profile.ledger(), now, options.warning_window);

        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            tier: profile.display_tier().to_string(),
            points_balance: points.active,
            expiring_points: points.expiring,
            warning_window: options.warning_window,
            lifetime_spend: lifetime_spend(history.transactions()),
            currency_symbol: options.currency_symbol.clone(),
        }
    }
}

/// Load state of the profile view. The variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProfileViewState {
    /// Nothing loaded yet
    #[default]
    Empty,
    Loading,
    Failed(String),
    Loaded(ProfileView),
}

impl ProfileViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ProfileViewState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ProfileViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&ProfileView> {
        match self {
            ProfileViewState::Loaded(view) => Some(view),
            _ => None,
        }
    }
}

/// Fetches profile and transactions and publishes the resulting state.
///
/// Observers can `subscribe` to see every transition, including `Loading`.
pub struct ProfileViewController<A> {
    api: A,
    options: ViewOptions,
    state: watch::Sender<ProfileViewState>,
}

impl<A: LoyaltyApi> ProfileViewController<A> {
    pub fn new(api: A, options: ViewOptions) -> Self {
        let (state, _) = watch::channel(ProfileViewState::Empty);
        Self {
            api,
            options,
            state,
        }
    }

    pub fn state(&self) -> ProfileViewState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ProfileViewState> {
        self.state.subscribe()
    }

    /// Run one load: both fetches concurrently, then derive the view.
    ///
    /// Failure of either fetch yields `Failed` and nothing is derived. Errors
    /// never escape this call; there is no retry.
    #[instrument(skip(self))]
    pub async fn load(&self, now: DateTime<Utc>) -> ProfileViewState {
        self.state.send_replace(ProfileViewState::Loading);

        let next = match tokio::try_join!(self.api.fetch_profile(), self.api.fetch_transactions()) {
            Ok((profile, history)) => {
                let view = ProfileView::build(&profile, &history, now, &self.options);
                info!(
                    "Profile loaded: {} points active, {} expiring within {} days",
                    view.points_balance, view.expiring_points, view.warning_window
                );
                ProfileViewState::Loaded(view)
            }
            Err(e) => {
                error!("Error fetching profile or transactions: {}", e);
                ProfileViewState::Failed(PROFILE_UNAVAILABLE.to_string())
            }
        };

        self.state.send_replace(next.clone());
        next
    }

    /// Like `load`, but hands every state to `report` as it is entered.
    ///
    /// Unlike a `subscribe` receiver, which only keeps the latest value,
    /// `report` always sees `Loading` before the final state.
    pub async fn load_reporting<F>(&self, now: DateTime<Utc>, mut report: F) -> ProfileViewState
    where
        F: FnMut(&ProfileViewState),
    {
        report(&ProfileViewState::Loading);
        let next = self.load(now).await;
        report(&next);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use loyalty_core::{Error, PointGrant, Result, Transaction};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    fn sample_profile() -> CustomerProfile {
        CustomerProfile {
            name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            tier: None,
            points_history: Some(
                vec![
                    PointGrant {
                        points: 100.0,
                        expires_at: now() + Duration::days(10),
                        redeemed: false,
                    },
                    PointGrant {
                        points: 50.0,
                        expires_at: now() + Duration::days(40),
                        redeemed: false,
                    },
                    PointGrant {
                        points: 20.0,
                        expires_at: now() - Duration::days(1),
                        redeemed: false,
                    },
                ]
                .into(),
            ),
        }
    }

    fn sample_history() -> TransactionHistoryResponse {
        TransactionHistoryResponse {
            transactions: Some(vec![
                Transaction::new(200.0),
                Transaction { amount: None },
                Transaction::new(50.0),
            ]),
        }
    }

    #[derive(Default)]
    struct MockApi {
        fail_profile: bool,
        fail_transactions: bool,
        calls: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    #[async_trait]
    impl LoyaltyApi for MockApi {
        async fn fetch_profile(&self) -> Result<CustomerProfile> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail_profile {
                return Err(Error::NetworkError("connection reset".to_string()));
            }
            Ok(sample_profile())
        }

        async fn fetch_transactions(&self) -> Result<TransactionHistoryResponse> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_transactions {
                return Err(Error::SessionExpired);
            }
            Ok(sample_history())
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let controller = ProfileViewController::new(MockApi::default(), ViewOptions::default());
        assert_eq!(controller.state(), ProfileViewState::Empty);
    }

    #[tokio::test]
    async fn test_successful_load_derives_values() {
        let controller = ProfileViewController::new(MockApi::default(), ViewOptions::default());

        let state = controller.load(now()).await;
        let view = state.view().expect("loaded");
        assert_eq!(view.name, "Asha Rao");
        assert_eq!(view.tier, "No tier assigned");
        assert_eq!(view.points_balance, 150.0);
        assert_eq!(view.expiring_points, 100.0);
        assert_eq!(view.lifetime_spend, 250.0);
        assert_eq!(controller.state(), state);
    }

    #[tokio::test]
    async fn test_both_fetches_failing_yields_error_state() {
        let api = MockApi {
            fail_profile: true,
            fail_transactions: true,
            ..MockApi::default()
        };
        let controller = ProfileViewController::new(api, ViewOptions::default());

        let state = controller.load(now()).await;
        assert_eq!(state.error(), Some(PROFILE_UNAVAILABLE));
        assert!(!state.is_loading());
        assert!(state.view().is_none());
    }

    #[tokio::test]
    async fn test_partial_failure_is_total_failure() {
        let api = MockApi {
            fail_transactions: true,
            ..MockApi::default()
        };
        let controller = ProfileViewController::new(api, ViewOptions::default());

        let state = controller.load(now()).await;
        assert_eq!(state, ProfileViewState::Failed(PROFILE_UNAVAILABLE.to_string()));
    }

    #[tokio::test]
    async fn test_each_load_fetches_both_endpoints_once() {
        let controller = ProfileViewController::new(MockApi::default(), ViewOptions::default());

        controller.load(now()).await;
        assert_eq!(controller.api.calls.load(Ordering::SeqCst), 2);

        controller.load(now()).await;
        assert_eq!(controller.api.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_retried() {
        let api = MockApi {
            fail_profile: true,
            fail_transactions: true,
            ..MockApi::default()
        };
        let controller = ProfileViewController::new(api, ViewOptions::default());

        controller.load(now()).await;
        let first = controller.api.calls.load(Ordering::SeqCst);
        assert!((1..=2).contains(&first));

        controller.load(now()).await;
        let second = controller.api.calls.load(Ordering::SeqCst) - first;
        assert!((1..=2).contains(&second));
    }

    #[tokio::test]
    async fn test_reporting_sees_loading_even_on_immediate_failure() {
        let api = MockApi {
            fail_profile: true,
            ..MockApi::default()
        };
        let controller = ProfileViewController::new(api, ViewOptions::default());

        let mut seen = Vec::new();
        let final_state = controller
            .load_reporting(now(), |state| seen.push(state.clone()))
            .await;

        assert_eq!(
            seen,
            vec![
                ProfileViewState::Loading,
                ProfileViewState::Failed(PROFILE_UNAVAILABLE.to_string()),
            ]
        );
        assert_eq!(controller.state(), final_state);
    }

    #[tokio::test]
    async fn test_loading_is_published_while_in_flight() {
        let gate = Arc::new(Notify::new());
        let api = MockApi {
            gate: Some(gate.clone()),
            ..MockApi::default()
        };
        let controller = ProfileViewController::new(api, ViewOptions::default());
        let mut rx = controller.subscribe();

        let observer = async {
            rx.changed().await.unwrap();
            let seen = rx.borrow_and_update().clone();
            gate.notify_one();
            seen
        };

        let (final_state, seen) = tokio::join!(controller.load(now()), observer);
        assert_eq!(seen, ProfileViewState::Loading);
        assert!(final_state.view().is_some());
    }

    #[tokio::test]
    async fn test_custom_window_is_applied() {
        let options = ViewOptions {
            warning_window: WarningWindow::new(45.0).unwrap(),
            ..ViewOptions::default()
        };
        let controller = ProfileViewController::new(MockApi::default(), options);

        let state = controller.load(now()).await;
        assert_eq!(state.view().unwrap().expiring_points, 150.0);
    }
}
