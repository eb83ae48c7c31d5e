//! Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Loyalty program customer profile viewer
#[derive(Parser, Debug)]
#[command(name = "loyalty")]
#[command(version, about = "View your loyalty points and lifetime spend")]
pub struct Cli {
    /// Backend base URL
    #[arg(long, env = "LOYALTY_API_URL", default_value = loyalty_networking::http::DEFAULT_BASE_URL)]
    pub api_url: String,

    /// Directory holding the local session database
    #[arg(long, env = "LOYALTY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "loyalty_cli=info,loyalty_engine=info,loyalty_networking=info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store a bearer token as the current session
    Login {
        #[arg(long, env = "LOYALTY_TOKEN", hide_env_values = true)]
        token: String,
    },

    /// Fetch and show the customer profile
    Profile {
        /// Override the expiry warning window for this run
        #[arg(long)]
        warning_days: Option<f64>,
    },

    /// Clear the local session
    Logout,

    /// Show or change display settings
    Settings {
        /// Days ahead that count as "expiring soon"
        #[arg(long)]
        warning_days: Option<f64>,

        /// Symbol printed before the lifetime spend
        #[arg(long)]
        currency: Option<String>,
    },
}
