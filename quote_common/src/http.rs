//! Deadline-bounded JSON GET shared by every outbound call.
//!
//! Both hops of the system (server → external API, client → server) follow the
//! same chain: send, check for `200 OK`, read the body, decode JSON. The whole
//! chain runs under a single deadline; when it elapses the in-flight request
//! future is dropped, which aborts the connection.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tokio::time::timeout;

use crate::error::QuoteError;
use crate::result::Result;

/// Issue `GET url` and decode the body as `T`, failing once `deadline` elapses.
///
/// Failure mapping:
/// - deadline elapsed → [`QuoteError::Timeout`]
/// - connection or body transfer failure → [`QuoteError::Transport`]
/// - any status but 200 → [`QuoteError::Status`]
/// - body is not valid JSON for `T` → [`QuoteError::SerdeJson`]
pub async fn get_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    deadline: Duration,
) -> Result<T> {
    let request = async {
        let response = client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(QuoteError::Status(status.as_u16()));
        }
        let body = response.bytes().await?;
        Ok::<T, QuoteError>(serde_json::from_slice(&body)?)
    };

    timeout(deadline, request)
        .await
        .map_err(|_| QuoteError::Timeout(deadline))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteResponse;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_mock_server(template: ResponseTemplate) -> MockServer {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/quote"))
            .respond_with(template)
            .mount(&mock_server)
            .await;
        mock_server
    }

    async fn get(server: &MockServer, deadline: Duration) -> Result<QuoteResponse> {
        let url = format!("{}/quote", server.uri());
        get_json::<QuoteResponse>(&Client::new(), &url, deadline).await
    }

    #[tokio::test]
    async fn decodes_ok_response() {
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.43"}"#))
                .await;
        let response = get(&server, Duration::from_secs(2)).await.unwrap();
        assert_eq!(response, QuoteResponse::new("5.43"));
    }

    #[tokio::test]
    async fn non_ok_status_is_reported() {
        let server = create_mock_server(ResponseTemplate::new(500)).await;
        let err = get(&server, Duration::from_secs(2)).await.unwrap_err();
        assert!(matches!(err, QuoteError::Status(500)));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let server =
            create_mock_server(ResponseTemplate::new(200).set_body_string("not json")).await;
        let err = get(&server, Duration::from_secs(2)).await.unwrap_err();
        assert!(matches!(err, QuoteError::SerdeJson(_)));
    }

    #[tokio::test]
    async fn slow_peer_hits_the_deadline() {
        let server = create_mock_server(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"bid":"5.43"}"#)
                .set_delay(Duration::from_millis(500)),
        )
        .await;
        let err = get(&server, Duration::from_millis(50)).await.unwrap_err();
        assert!(err.is_timeout());
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let url = {
            let server = MockServer::builder().start().await;
            format!("{}/quote", server.uri())
        };
        let err = get_json::<QuoteResponse>(&Client::new(), &url, Duration::from_secs(2))
            .await
            .unwrap_err();
        assert!(matches!(err, QuoteError::Transport(_)));
    }
}
