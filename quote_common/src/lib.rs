//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error` — unified error type `QuoteError` used across the workspace.
//! - `result` — handy `Result<T, QuoteError>` alias.
//! - `quote` — the `QuoteResponse` payload exchanged between server and client.
//! - `http` — deadline-bounded JSON GET used for every outbound call.
//! - `net` — addresses, paths and timeouts shared by both binaries.
#![warn(missing_docs)]
pub mod error;
pub mod http;
pub mod net;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use quote::QuoteResponse;
pub use result::Result;
