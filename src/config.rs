//! Configuration for suggest-export

use crate::csv_export::Column;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pipeline configuration
///
/// All fields have working defaults, so `Config::default()` works with no
/// configuration at all. A handful of environment variables override
/// individual fields, see [`Config::from_env`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL the encoded query is appended to
    /// (default: the GoEuro position-suggest endpoint)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds; `None` disables the timeout
    /// (default: 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: Option<u64>,

    /// Path of the CSV file to write (default: "./result.csv")
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Output columns, in order
    ///
    /// The default set labels both coordinate columns with the container
    /// key `geo_position`, which existing consumers of the CSV expect.
    #[serde(default = "Column::default_set")]
    pub columns: Vec<Column>,
}

fn default_api_base_url() -> String {
    "http://api.goeuro.com/api/v2/position/suggest/en/".to_string()
}

fn default_timeout_secs() -> Option<u64> {
    Some(30)
}

fn default_output_path() -> PathBuf {
    PathBuf::from("./result.csv")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            output_path: default_output_path(),
            columns: Column::default_set(),
        }
    }
}

impl Config {
    /// Build a configuration from defaults plus environment overrides
    ///
    /// Recognized variables:
    /// - `SUGGEST_EXPORT_URL` — base URL
    /// - `SUGGEST_EXPORT_TIMEOUT_SECS` — timeout in seconds, `0` disables it
    /// - `SUGGEST_EXPORT_OUTPUT` — output file path
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("SUGGEST_EXPORT_URL") {
            config.api_base_url = url;
        }
        if let Ok(timeout) = std::env::var("SUGGEST_EXPORT_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| Error::Config {
                message: format!("'{timeout}' is not a valid timeout in seconds"),
                key: Some("SUGGEST_EXPORT_TIMEOUT_SECS".into()),
            })?;
            config.timeout_secs = if secs == 0 { None } else { Some(secs) };
        }
        if let Ok(path) = std::env::var("SUGGEST_EXPORT_OUTPUT") {
            config.output_path = PathBuf::from(path);
        }

        Ok(config)
    }
}
