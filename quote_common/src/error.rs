//! Error types shared between client and server.
//!
//! The `QuoteError` enum covers every way an outbound quote request can fail,
//! plus file I/O on the client side. Each variant maps to exactly one outcome the
//! server reports to its callers (see `quote_server::error`).
use std::io;
use std::time::Duration;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets/files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The response body could not be decoded as the expected JSON document.
    #[error("JSON decode error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The request did not complete within its deadline.
    #[error("deadline of {0:?} exceeded")]
    Timeout(Duration),

    /// Connection, TLS or body transfer failure reported by `reqwest`.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The peer answered with a status other than 200.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// A quote was decoded but its `bid` field is missing or empty.
    #[error("quote has no bid")]
    EmptyBid,
}

impl QuoteError {
    /// Whether the failure was caused by an elapsed deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, QuoteError::Timeout(_))
    }
}
