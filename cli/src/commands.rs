//! Subcommand handlers

use crate::state::AppState;
use chrono::Utc;
use loyalty_core::WarningWindow;
use loyalty_engine::{render, ProfileViewController, ViewOptions};
use loyalty_networking::LoyaltyClient;
use tracing::{debug, info};

pub async fn login(state: &AppState, token: &str) -> anyhow::Result<()> {
    state.store.login(token).await?;
    println!("Session saved.");
    Ok(())
}

/// Load the profile once and print it.
///
/// A failed load is shown to the user and is not an error of the command.
pub async fn profile(state: &AppState, warning_days: Option<f64>) -> anyhow::Result<()> {
    let session = state.store.context().await?;
    if !session.is_authenticated() {
        info!("No stored session, requesting profile without a token");
    }

    let settings = state.store.display_settings().await?;
    let warning_window = match warning_days {
        Some(days) => WarningWindow::new(days)?,
        None => settings.warning_window,
    };
    let options = ViewOptions {
        warning_window,
        currency_symbol: settings.currency_symbol,
    };

    let client = LoyaltyClient::new(&state.api_url, session)?;
    let controller = ProfileViewController::new(client, options);

    let final_state = controller
        .load_reporting(Utc::now(), |view_state| println!("{}", render(view_state)))
        .await;

    debug!("Profile view finished in state {:?}", final_state);
    Ok(())
}

pub async fn logout(state: &AppState) -> anyhow::Result<()> {
    let route = state.store.logout().await?;
    println!("Logged out. Navigating to {}", route.path());
    Ok(())
}

pub async fn settings(
    state: &AppState,
    warning_days: Option<f64>,
    currency: Option<String>,
) -> anyhow::Result<()> {
    let mut settings = state.store.display_settings().await?;
    let changed = warning_days.is_some() || currency.is_some();

    if let Some(days) = warning_days {
        settings.warning_window = WarningWindow::new(days)?;
    }
    if let Some(symbol) = currency {
        settings.currency_symbol = symbol;
    }

    if changed {
        state.store.save_display_settings(&settings).await?;
        info!("Display settings updated");
    }

    println!("Data directory: {}", state.data_dir.display());
    println!("Backend: {}", state.api_url);
    println!("Warning window: {} days", settings.warning_window);
    println!("Currency symbol: {}", settings.currency_symbol);
    Ok(())
}
