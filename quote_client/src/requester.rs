//! Single-shot request for the current bid.
use std::time::Duration;

use log::debug;
use quote_common::http::get_json;
use quote_common::{QuoteResponse, Result};
use reqwest::Client;

/// Calls the quote server's endpoint under a fixed deadline.
pub struct QuoteRequester {
    client: Client,
    url: String,
    deadline: Duration,
}

impl QuoteRequester {
    /// Create a requester for the endpoint at `url`.
    pub fn new(url: &str, deadline: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            deadline,
        }
    }

    /// Ask the server for the bid. Timeouts, transport failures, non-200 answers,
    /// undecodable bodies and empty bids are all errors.
    pub async fn request_bid(&self) -> Result<String> {
        debug!("Requesting bid from {} (deadline {:?})", self.url, self.deadline);
        let response: QuoteResponse = get_json(&self.client, &self.url, self.deadline).await?;
        response.into_bid()
    }
}
