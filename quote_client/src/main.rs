//! Quote client binary.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server-url http://localhost:8080/cotacao --output cotacao.txt
//! ```
use clap::Parser;
use log::error;
use quote_client::args::Args;
use quote_common::QuoteError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), QuoteError> {
    init_logger();
    let args = Args::parse();

    if let Err(e) = quote_client::run(&args).await {
        if e.is_timeout() {
            error!("Quote server did not answer in time: {}", e);
        } else {
            error!("Failed to fetch quote from {}: {}", args.server_url, e);
        }
        return Err(e);
    }
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
