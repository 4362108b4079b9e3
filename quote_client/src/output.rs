//! Writing the bid to the output file.
use std::fs;
use std::path::Path;

use quote_common::Result;

/// Line written for `bid`.
pub fn format_line(bid: &str) -> String {
    format!("Dólar: {}", bid)
}

/// Overwrite `path` with the formatted line and return it.
pub fn write_bid(path: &Path, bid: &str) -> Result<String> {
    let line = format_line(bid);
    fs::write(path, &line)?;
    Ok(line)
}
