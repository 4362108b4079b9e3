//! Command-line arguments for the quote server.
use std::time::Duration;

use clap::Parser;
use quote_common::net::{API_TIMEOUT, DB_TIMEOUT, LISTEN_ADDRESS, UPSTREAM_URL};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Serves the current USD-BRL bid on GET /cotacao", long_about = None)]
pub struct Args {
    /// Address to listen on.
    #[arg(long, default_value = LISTEN_ADDRESS)]
    pub listen: String,

    /// External currency API returning the USD-BRL quote.
    #[arg(long, default_value = UPSTREAM_URL)]
    pub upstream_url: String,

    /// SQLite database receiving every fetched quote.
    #[arg(long, default_value = "sqlite://quotes.db")]
    pub database_url: String,

    /// Deadline in milliseconds for the external API call.
    #[arg(long, default_value_t = API_TIMEOUT.as_millis() as u64)]
    pub api_timeout_ms: u64,

    /// Deadline in milliseconds for persisting a quote.
    #[arg(long, default_value_t = DB_TIMEOUT.as_millis() as u64)]
    pub db_timeout_ms: u64,
}

impl Args {
    /// Deadline for the external API call.
    pub fn api_timeout(&self) -> Duration {
        Duration::from_millis(self.api_timeout_ms)
    }

    /// Deadline for the storage write.
    pub fn db_timeout(&self) -> Duration {
        Duration::from_millis(self.db_timeout_ms)
    }
}
