//! Client for the external currency API.
use std::time::Duration;

use log::debug;
use quote_common::Result;
use quote_common::http::get_json;
use reqwest::Client;

use crate::model::quote::{Quote, UpstreamResponse};

/// Fetches the current USD-BRL quote from a fixed URL under a fixed deadline.
pub struct QuoteFetcher {
    client: Client,
    url: String,
    deadline: Duration,
}

impl QuoteFetcher {
    /// Create a fetcher for `url`; every call is bounded by `deadline`.
    pub fn new(url: &str, deadline: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.to_string(),
            deadline,
        }
    }

    /// Fetch and validate one quote. No retries.
    pub async fn fetch(&self) -> Result<Quote> {
        debug!("Requesting quote from {}", self.url);
        let response: UpstreamResponse = get_json(&self.client, &self.url, self.deadline).await?;
        Quote::from_upstream(response)
    }
}
