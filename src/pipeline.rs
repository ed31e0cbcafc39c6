//! Pipeline orchestration: fetch, project to CSV, write to disk
//!
//! The three stages run strictly in sequence on one task. Nothing is
//! persisted between runs and no state survives a failure except a possibly
//! truncated output file from a failed write.

use crate::client::fetch_suggestions;
use crate::config::Config;
use crate::csv_export::to_csv;
use crate::error::Result;
use crate::writer::write_csv;
use std::path::PathBuf;
use tracing::info;

/// Run the whole pipeline for one query
///
/// Fetches suggestions, projects them through the configured column list,
/// and writes the CSV to the configured output path. Returns the path that
/// was written.
pub async fn run(config: &Config, query: &str) -> Result<PathBuf> {
    let records = fetch_suggestions(config, query).await?;
    let csv = to_csv(&records, &config.columns)?;
    write_csv(&config.output_path, &csv).await?;

    info!(
        query,
        records = records.len(),
        path = %config.output_path.display(),
        "export complete"
    );
    Ok(config.output_path.clone())
}
