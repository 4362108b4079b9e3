//! Quote Client — asks the quote server for the current USD-BRL bid once and
//! writes `Dólar: <bid>` to a local file, replacing whatever it held.
//!
//! Every failure is terminal: there is no retry, and the output file is only
//! touched after a valid bid has been received.
#![warn(missing_docs)]
pub mod args;
pub mod output;
pub mod requester;

use log::info;
use quote_common::Result;

use crate::args::Args;
use crate::requester::QuoteRequester;

/// Fetch the bid and write it out, returning the line written.
pub async fn run(args: &Args) -> Result<String> {
    let requester = QuoteRequester::new(&args.server_url, args.timeout());
    let bid = requester.request_bid().await?;
    let line = output::write_bid(&args.output, &bid)?;
    info!("Quote saved to {}: {}", args.output.display(), line);
    Ok(line)
}
