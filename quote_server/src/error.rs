//! Mapping of upstream failures onto HTTP responses.
//!
//! A deadline overrun is reported as `504 Gateway Timeout`; every other way the
//! external API can let us down is a `502 Bad Gateway`. Bodies are short plain-text
//! messages; the underlying cause is logged, never sent to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quote_common::QuoteError;
use thiserror::Error;

/// Failure to obtain a quote from the external API.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct UpstreamError(#[from] pub QuoteError);

impl UpstreamError {
    /// Status code and caller-facing message for this failure.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            QuoteError::Timeout(_) => (StatusCode::GATEWAY_TIMEOUT, "upstream API timed out"),
            QuoteError::Status(_) => (StatusCode::BAD_GATEWAY, "upstream API failure"),
            QuoteError::SerdeJson(_) => (StatusCode::BAD_GATEWAY, "failed to process quote"),
            QuoteError::EmptyBid => (StatusCode::BAD_GATEWAY, "quote unavailable"),
            QuoteError::Transport(_) | QuoteError::Io(_) => {
                (StatusCode::BAD_GATEWAY, "failed to fetch quote")
            }
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, format!("{message}\n")).into_response()
    }
}
