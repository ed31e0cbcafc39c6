//! CLI entry point for suggest-export
//!
//! `suggest-export <query>` fetches suggestions for the query and writes
//! them to the configured CSV file. Success is silent on stdout and exits 0;
//! logs go to stderr. Failures are logged at error severity and mapped to a
//! non-zero exit code.

use suggest_export::{parse_query, pipeline, Config, Error};
use tracing::error;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = try_main().await {
        error!(error = %e, "export failed");
        std::process::exit(e.exit_code());
    }
}

async fn try_main() -> Result<(), Error> {
    // Arity is checked before the config is even loaded, so a usage error
    // never triggers network activity.
    let query = parse_query(std::env::args().skip(1))?;
    let config = Config::from_env()?;
    pipeline::run(&config, &query).await?;
    Ok(())
}
