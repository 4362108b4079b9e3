//! Domain models for the quote server.
//!
//! - `quote` — the persisted `Quote` record and the external API payload it is built from.

pub mod quote;
