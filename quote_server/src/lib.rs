//! USD-BRL quote server.
//!
//! Exposes a single endpoint, `GET /cotacao`. Each call fetches the live quote from
//! an external currency API, appends it to a local SQLite database and answers with
//! `{"bid": "<bid>"}`. The building blocks:
//!
//! - `QuoteFetcher` — calls the external API under a short deadline and validates the payload.
//! - `QuoteStore` / `SqliteQuoteStore` — append-only storage behind a single-connection pool.
//! - `handler::get_quote` — ties the two together and maps failures onto 502/504.
//!
//! Failure mapping:
//! - external API deadline exceeded → `504`
//! - transport failure, non-200 status, undecodable body, empty bid → `502`
//! - storage failure or storage deadline exceeded → logged only, response unaffected
#![warn(missing_docs)]

use axum::Router;
use axum::routing::get;
use log::info;
use quote_common::net::QUOTE_PATH;
use tokio::net::TcpListener;

pub mod args;
pub mod error;
pub mod handler;
pub mod model;
pub mod store;
pub mod upstream;

pub use handler::AppState;

/// Build the HTTP router serving the quote endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(QUOTE_PATH, get(handler::get_quote))
        .with_state(state)
}

/// Serve requests on `listener` until it fails.
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    info!("Quote server listening on http://{}{}", listener.local_addr()?, QUOTE_PATH);
    axum::serve(listener, router(state)).await
}
