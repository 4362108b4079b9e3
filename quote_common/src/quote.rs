//! Quote payload exchanged between the server and the client.
//!
//! The server answers `GET /cotacao` with a JSON object carrying only the bid;
//! the client decodes the same type. Keeping it here avoids two copies drifting apart.
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::result::Result;

/// Simplified quote returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// Bid price as a decimal-formatted string, e.g. `"5.43"`.
    #[serde(default)]
    pub bid: String,
}

impl QuoteResponse {
    /// Create a response carrying `bid`.
    pub fn new(bid: &str) -> Self {
        Self {
            bid: bid.to_string(),
        }
    }

    /// Take the bid out of the response, rejecting an empty one.
    pub fn into_bid(self) -> Result<String> {
        if self.bid.is_empty() {
            return Err(QuoteError::EmptyBid);
        }
        Ok(self.bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_single_bid_field() {
        let json = serde_json::to_string(&QuoteResponse::new("5.43")).unwrap();
        assert_eq!(json, r#"{"bid":"5.43"}"#);
    }

    #[test]
    fn missing_bid_is_rejected() {
        let response: QuoteResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(response.into_bid(), Err(QuoteError::EmptyBid)));
    }

    #[test]
    fn blank_bid_is_passed_through() {
        assert_eq!(QuoteResponse::new("  ").into_bid().unwrap(), "  ");
    }
}
