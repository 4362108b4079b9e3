//! Command-line arguments for the quote client.
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quote_common::net::{CLIENT_TIMEOUT, SERVER_URL};

/// Default file receiving the bid.
pub const OUTPUT_FILE: &str = "cotacao.txt";

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about = "Fetches the USD-BRL bid from the quote server once", long_about = None)]
pub struct Args {
    /// Quote endpoint of the server.
    #[arg(long, default_value = SERVER_URL)]
    pub server_url: String,

    /// Deadline in milliseconds for the whole request.
    #[arg(long, default_value_t = CLIENT_TIMEOUT.as_millis() as u64)]
    pub timeout_ms: u64,

    /// File the bid is written to; overwritten on every run.
    #[arg(long, default_value = OUTPUT_FILE)]
    pub output: PathBuf,
}

impl Args {
    /// Deadline for the server call.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
