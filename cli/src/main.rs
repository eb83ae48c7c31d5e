//! Loyalty CLI - Main entry point

mod cli;
mod commands;
mod state;

use clap::Parser;
use cli::{Cli, Commands};
use state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let data_dir = cli.data_dir.clone().unwrap_or_else(state::default_data_dir);
    tracing::debug!("Using data directory {}", data_dir.display());

    let state = AppState::open(data_dir, cli.api_url.clone()).await?;

    match cli.command {
        Commands::Login { token } => commands::login(&state, &token).await?,
        Commands::Profile { warning_days } => commands::profile(&state, warning_days).await?,
        Commands::Logout => commands::logout(&state).await?,
        Commands::Settings {
            warning_days,
            currency,
        } => commands::settings(&state, warning_days, currency).await?,
    }

    Ok(())
}
