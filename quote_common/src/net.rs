//! Shared networking constants used by client and server.
use std::time::Duration;

/// Path of the single quote endpoint.
pub const QUOTE_PATH: &str = "/cotacao";
/// Default bind address of the server.
pub const LISTEN_ADDRESS: &str = "0.0.0.0:8080";
/// Default URL the client calls.
pub const SERVER_URL: &str = "http://localhost:8080/cotacao";
/// External currency API serving the USD-BRL quote.
pub const UPSTREAM_URL: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

/// Deadline for the server's call to the external API.
pub const API_TIMEOUT: Duration = Duration::from_millis(200);
/// Deadline for persisting a quote.
pub const DB_TIMEOUT: Duration = Duration::from_millis(10);
/// Deadline for the client's call to the server.
pub const CLIENT_TIMEOUT: Duration = Duration::from_millis(300);
