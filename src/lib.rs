//! # suggest-export
//!
//! Small pipeline that queries a REST endpoint for city/location
//! suggestions and writes the result as a flat CSV file.
//!
//! Three stages, strictly sequential: fetch the suggestion records for a
//! query, project them through a configurable column list into CSV text,
//! write the text to the output file. One HTTP request per run, no retries,
//! everything held in memory.
//!
//! ## Quick start
//!
//! ```no_run
//! use suggest_export::{pipeline, Config};
//!
//! #[tokio::main]
//! async fn main() -> suggest_export::Result<()> {
//!     let config = Config::default();
//!     let path = pipeline::run(&config, "Berlin").await?;
//!     println!("wrote {}", path.display());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// HTTP client for the suggestion endpoint
pub mod client;
/// Configuration types
pub mod config;
/// CSV projection of suggestion records
pub mod csv_export;
/// Error types
pub mod error;
/// Pipeline orchestration
pub mod pipeline;
/// Output file writing
pub mod writer;

// Re-export commonly used types
pub use config::Config;
pub use csv_export::{to_csv, Column, ColumnPath};
pub use error::{Error, Result};

/// Extract the query from the positional command-line arguments
///
/// `args` are the arguments after the program name. Exactly one is
/// expected; any other count fails with [`Error::Arguments`] before any
/// network activity happens.
pub fn parse_query(args: impl Iterator<Item = String>) -> Result<String> {
    let mut args: Vec<String> = args.collect();
    if args.len() != 1 {
        return Err(Error::Arguments {
            expected: 1,
            actual: args.len(),
        });
    }
    Ok(args.remove(0))
}
