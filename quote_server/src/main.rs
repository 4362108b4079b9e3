//! Quote server binary: parses arguments, opens the database and serves `GET /cotacao`.
use std::sync::Arc;

use clap::Parser;
use log::error;
use quote_server::args::Args;
use quote_server::store::SqliteQuoteStore;
use quote_server::upstream::QuoteFetcher;
use quote_server::{AppState, serve};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    let args = Args::parse();

    let store = SqliteQuoteStore::connect(&args.database_url)
        .await
        .inspect_err(|e| error!("Failed to open database {}: {}", args.database_url, e))?;

    let fetcher = QuoteFetcher::new(&args.upstream_url, args.api_timeout());
    let state = AppState::new(fetcher, Arc::new(store), args.db_timeout());

    let listener = TcpListener::bind(&args.listen)
        .await
        .inspect_err(|e| error!("Failed to bind {}: {}", args.listen, e))?;
    serve(listener, state).await?;
    Ok(())
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
