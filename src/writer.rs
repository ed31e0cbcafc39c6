//! Output file writing

use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Write the CSV content to `path`, creating or truncating the file
///
/// The whole content is written and flushed before returning; the handle is
/// closed on every exit path. On failure the error carries the path and the
/// underlying cause. A partially written file may remain after a failure;
/// no cleanup is attempted.
pub async fn write_csv(path: &Path, content: &str) -> Result<()> {
    tokio::fs::write(path, content)
        .await
        .map_err(|e| Error::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(path = %path.display(), bytes = content.len(), "wrote output file");
    Ok(())
}
