//! The `GET /cotacao` handler.
//!
//! Each request runs as its own task. The external call and the storage write
//! each get their own deadline; when the caller disconnects, axum drops the
//! handler future and both are cancelled with it.

use std::sync::Arc;
use std::time::Duration;

use axum::Json;
use axum::extract::State;
use log::{error, info, warn};
use quote_common::QuoteResponse;
use tokio::time::timeout;

use crate::error::UpstreamError;
use crate::model::quote::Quote;
use crate::store::QuoteStore;
use crate::upstream::QuoteFetcher;

/// Shared per-server state handed to every request.
#[derive(Clone)]
pub struct AppState {
    /// External API client.
    pub fetcher: Arc<QuoteFetcher>,
    /// Where fetched quotes are appended.
    pub store: Arc<dyn QuoteStore>,
    /// Deadline for a single storage write.
    pub db_timeout: Duration,
}

impl AppState {
    /// Bundle the fetcher, store and storage deadline.
    pub fn new(fetcher: QuoteFetcher, store: Arc<dyn QuoteStore>, db_timeout: Duration) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            store,
            db_timeout,
        }
    }
}

/// Fetch the current quote, persist it, return its bid.
///
/// Storage problems are logged and never change the response.
pub async fn get_quote(
    State(state): State<AppState>,
) -> Result<Json<QuoteResponse>, UpstreamError> {
    let quote = match state.fetcher.fetch().await {
        Ok(quote) => quote,
        Err(e) if e.is_timeout() => {
            warn!("External API timed out: {}", e);
            return Err(e.into());
        }
        Err(e) => {
            error!("External API call failed: {}", e);
            return Err(e.into());
        }
    };

    persist(state.store.as_ref(), &quote, state.db_timeout).await;

    info!("Served bid {} ({}-{})", quote.bid, quote.code, quote.codein);
    Ok(Json(quote.to_response()))
}

async fn persist(store: &dyn QuoteStore, quote: &Quote, deadline: Duration) {
    match timeout(deadline, store.append(quote)).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => error!("Failed to persist quote: {}", e),
        Err(_) => error!("Persisting quote exceeded {:?}", deadline),
    }
}
