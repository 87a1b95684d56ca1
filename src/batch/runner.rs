//! The batch runner: replay a previous run's prefix, then go live
//!
//! Two phases. REPLAY emits rows from a previous run's output verbatim,
//! one per input row, until the previous rows run out; LIVE resolves each
//! remaining input row through the site resolver. The transition happens
//! exactly once and never reverses.
//!
//! Correctness of resume rests on positional correspondence: the previous
//! output must be a prefix of the current input, in the same order. Rows
//! are never matched by content.
//!
//! Output is flushed after every row, so a killed process loses at most
//! the in-flight row and the partial output is itself a valid `previous`
//! for the next run.

use crate::logo::resolve_site;
use crate::BatchResult;
use csv::StringRecord;
use reqwest::Client;
use std::io::Write;
use std::path::Path;

/// Input column holding the organization's website URL.
pub const WEBSITE_COLUMN: &str = "Web";

/// Column appended to every output row.
pub const LOGO_URL_COLUMN: &str = "Logo URL";

/// Runs a batch over the input table, streaming rows to `out`
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `input` - Path to the input CSV (header row required)
/// * `previous` - Optional partial output of an earlier run, replayed as a
///   prefix
/// * `out` - Output sink; rows are flushed as they are written
///
/// # Errors
///
/// Only structural problems are fatal: an unopenable or malformed input
/// table, an unreadable previous table, or a failed write to the sink.
/// Per-row resolution failures yield an empty logo field and a stderr
/// diagnostic.
pub async fn run_batch<W: Write>(
    client: &Client,
    input: &Path,
    previous: Option<&Path>,
    out: W,
) -> BatchResult<()> {
    let mut reader = csv::Reader::from_path(input)?;
    let headers = reader.headers()?.clone();
    let website_index = headers.iter().position(|field| field == WEBSITE_COLUMN);
    if website_index.is_none() {
        tracing::warn!(
            "input table has no {:?} column; all live rows will get an empty logo",
            WEBSITE_COLUMN
        );
    }

    let previous_rows = match previous {
        Some(path) => load_previous(path)?,
        None => Vec::new(),
    };
    if !previous_rows.is_empty() {
        tracing::info!("replaying {} rows from previous output", previous_rows.len());
    }

    let mut writer = csv::Writer::from_writer(out);
    let mut output_headers = headers.clone();
    output_headers.push_field(LOGO_URL_COLUMN);
    writer.write_record(&output_headers)?;
    writer.flush()?;

    let mut replay = previous_rows.into_iter();
    for record in reader.records() {
        let record = record?;

        // REPLAY: emit the previously-computed row for this position.
        if let Some(previous_row) = replay.next() {
            writer.write_record(&previous_row)?;
            writer.flush()?;
            continue;
        }

        // LIVE: resolve this row's website.
        let website = website_index
            .and_then(|index| record.get(index))
            .unwrap_or("");
        let logo_url = if website.is_empty() {
            String::new()
        } else {
            resolve_site(client, website).await
        };

        let mut output_record = record;
        output_record.push_field(&logo_url);
        writer.write_record(&output_record)?;
        writer.flush()?;
    }

    Ok(())
}

/// Loads the rows of a previous run's output, minus its header
fn load_previous(path: &Path) -> BatchResult<Vec<StringRecord>> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }
    Ok(rows)
}
