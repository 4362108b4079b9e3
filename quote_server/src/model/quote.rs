//! Quote record and the external API payload it is decoded from.
//!
//! The external API answers with `{"USDBRL": {"code": ..., "codein": ..., "bid": ..., ...}}`
//! carrying many more fields than we keep. Only `code`, `codein` and `bid` are read;
//! a missing or `null` object or field decodes as an empty string and is then rejected
//! by [`Quote::from_upstream`].

use chrono::{DateTime, Utc};
use quote_common::{QuoteError, QuoteResponse, Result};
use serde::Deserialize;

/// Top-level document returned by the external currency API.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamResponse {
    /// Dollar to real quote.
    #[serde(rename = "USDBRL", default)]
    pub usd_brl: Option<UpstreamQuote>,
}

/// Fields of the USD-BRL quote we care about.
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamQuote {
    /// Source currency code, e.g. `USD`.
    #[serde(default)]
    pub code: Option<String>,
    /// Target currency code, e.g. `BRL`.
    #[serde(default)]
    pub codein: Option<String>,
    /// Bid price as text.
    #[serde(default)]
    pub bid: Option<String>,
}

/// A fetched quote, as appended to the `quotes` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    /// Source currency code.
    pub code: String,
    /// Target currency code.
    pub codein: String,
    /// Bid price as a decimal-formatted string.
    pub bid: String,
    /// UTC instant the quote was received.
    pub timestamp: DateTime<Utc>,
}

impl Quote {
    /// Build a `Quote` stamped with the current time from an upstream payload.
    ///
    /// Fails with [`QuoteError::EmptyBid`] when the payload carried no bid.
    pub fn from_upstream(response: UpstreamResponse) -> Result<Quote> {
        let UpstreamQuote { code, codein, bid } = response.usd_brl.unwrap_or_default();
        let bid = bid.unwrap_or_default();
        if bid.is_empty() {
            return Err(QuoteError::EmptyBid);
        }
        Ok(Quote {
            code: code.unwrap_or_default(),
            codein: codein.unwrap_or_default(),
            bid,
            timestamp: Utc::now(),
        })
    }

    /// The payload returned to callers of `/cotacao`.
    pub fn to_response(&self) -> QuoteResponse {
        QuoteResponse::new(&self.bid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_upstream_fields_are_ignored() {
        let body = r#"{"USDBRL":{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro",
            "high":"5.47","low":"5.40","bid":"5.43","ask":"5.44","timestamp":"1700000000"}}"#;
        let response: UpstreamResponse = serde_json::from_str(body).unwrap();
        let quote = Quote::from_upstream(response).unwrap();
        assert_eq!(quote.code, "USD");
        assert_eq!(quote.codein, "BRL");
        assert_eq!(quote.bid, "5.43");
        assert_eq!(quote.to_response(), QuoteResponse::new("5.43"));
    }

    #[test]
    fn missing_bid_is_rejected() {
        let body = r#"{"USDBRL":{"code":"USD","codein":"BRL"}}"#;
        let response: UpstreamResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            Quote::from_upstream(response),
            Err(QuoteError::EmptyBid)
        ));
    }

    #[test]
    fn null_bid_is_rejected() {
        let body = r#"{"USDBRL":{"code":"USD","codein":"BRL","bid":null}}"#;
        let response: UpstreamResponse = serde_json::from_str(body).unwrap();
        assert!(matches!(
            Quote::from_upstream(response),
            Err(QuoteError::EmptyBid)
        ));
    }

    #[test]
    fn null_pair_object_is_rejected() {
        let response: UpstreamResponse = serde_json::from_str(r#"{"USDBRL":null}"#).unwrap();
        assert!(matches!(
            Quote::from_upstream(response),
            Err(QuoteError::EmptyBid)
        ));
    }

    #[test]
    fn missing_pair_object_is_rejected() {
        let response: UpstreamResponse = serde_json::from_str("{}").unwrap();
        assert!(matches!(
            Quote::from_upstream(response),
            Err(QuoteError::EmptyBid)
        ));
    }
}
