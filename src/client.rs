//! HTTP client for the position-suggest endpoint
//!
//! One GET per run: the percent-encoded query is appended to the configured
//! base URL, the full body is read as text and parsed as a JSON array of
//! suggestion records. No retries, no pagination.

use crate::config::Config;
use crate::error::{Error, Result};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Build the request URL for a query
///
/// The query is percent-encoded (UTF-8, standard URL escaping) and appended
/// to the base URL. The URL is constructed fresh on every call; nothing is
/// accumulated across invocations.
pub fn build_request_url(base_url: &str, query: &str) -> Result<Url> {
    let full = format!("{}{}", base_url, urlencoding::encode(query));
    Url::parse(&full).map_err(|e| Error::Network(format!("invalid request URL '{full}': {e}")))
}

/// Fetch suggestion records for a query
///
/// Issues a single GET with an `Accept-Charset: UTF-8` header and parses
/// the response body as a JSON array. Schema is not enforced beyond that:
/// each element comes back as a raw [`Value`] and field extraction happens
/// later, best-effort, in the CSV projection.
///
/// # Errors
///
/// - [`Error::Network`] when the connection fails, times out, or the body
///   cannot be read
/// - [`Error::Status`] when the server answers with a non-success status
/// - [`Error::Parse`] when the body is not a JSON array
pub async fn fetch_suggestions(config: &Config, query: &str) -> Result<Vec<Value>> {
    let url = build_request_url(&config.api_base_url, query)?;

    let mut builder = reqwest::Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder
        .build()
        .map_err(|e| Error::Network(format!("failed to create HTTP client: {e}")))?;

    debug!(url = %url, "fetching suggestions");

    let response = client
        .get(url.clone())
        .header("Accept-Charset", "UTF-8")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                Error::Network(format!("timeout fetching '{url}'"))
            } else if e.is_connect() {
                Error::Network(format!("connection failed for '{url}': {e}"))
            } else {
                Error::Network(format!("failed to fetch '{url}': {e}"))
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let body = response.text().await.map_err(|e| {
        Error::Network(format!("failed to read response body from '{url}': {e}"))
    })?;

    let records: Vec<Value> = serde_json::from_str(&body)?;
    debug!(count = records.len(), "parsed suggestion records");
    Ok(records)
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BASE: &str = "http://api.goeuro.com/api/v2/position/suggest/en/";

    #[test]
    fn plain_query_is_appended_verbatim() {
        let url = build_request_url(BASE, "Berlin").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.goeuro.com/api/v2/position/suggest/en/Berlin"
        );
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let url = build_request_url(BASE, "Frankfurt am Main & more/less").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.goeuro.com/api/v2/position/suggest/en/Frankfurt%20am%20Main%20%26%20more%2Fless"
        );
    }

    #[test]
    fn base_path_is_left_untouched() {
        let url = build_request_url(BASE, "a b").unwrap();
        assert!(url
            .as_str()
            .starts_with("http://api.goeuro.com/api/v2/position/suggest/en/"));
        assert!(url.path().starts_with("/api/v2/position/suggest/en/"));
    }

    #[test]
    fn non_ascii_query_is_utf8_encoded() {
        let url = build_request_url(BASE, "München").unwrap();
        assert_eq!(
            url.as_str(),
            "http://api.goeuro.com/api/v2/position/suggest/en/M%C3%BCnchen"
        );
    }

    fn test_config(base_url: String) -> Config {
        Config {
            api_base_url: base_url,
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn fetches_and_parses_suggestion_records() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/position/suggest/en/Berlin"))
            .and(header("Accept-Charset", "UTF-8"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"_id":"1","name":"Berlin","type":"city","geo_position":{"latitude":52.52,"longitude":13.4}}]"#,
            ))
            .mount(&mock_server)
            .await;

        let config = test_config(format!("{}/api/v2/position/suggest/en/", mock_server.uri()));
        let records = fetch_suggestions(&config, "Berlin").await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["name"], "Berlin");
        assert_eq!(records[0]["geo_position"]["latitude"], 52.52);
    }

    #[tokio::test]
    async fn query_is_encoded_in_the_request_path() {
        let mock_server = MockServer::start().await;

        // The mock only answers the percent-encoded path, so the request
        // fails unless the client actually encoded the space.
        Mock::given(method("GET"))
            .and(path("/suggest/en/New%20York"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let config = test_config(format!("{}/suggest/en/", mock_server.uri()));
        let records = fetch_suggestions(&config, "New York").await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/suggest/en/Nowhere"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let config = test_config(format!("{}/suggest/en/", mock_server.uri()));
        let err = fetch_suggestions(&config, "Nowhere").await.unwrap_err();

        match err {
            Error::Status { status, url } => {
                assert_eq!(status, 500);
                assert!(url.contains("/suggest/en/Nowhere"));
            }
            other => panic!("expected Status error, got {other}"),
        }
    }

    #[tokio::test]
    async fn non_json_body_is_a_parse_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/suggest/en/Berlin"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let config = test_config(format!("{}/suggest/en/", mock_server.uri()));
        let err = fetch_suggestions(&config, "Berlin").await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_connection_error() {
        // Grab a free port and release it again so nothing is listening
        // there when the client connects.
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let config = test_config(format!("http://{addr}/suggest/en/"));
        let err = fetch_suggestions(&config, "Berlin").await.unwrap_err();

        match err {
            Error::Network(msg) => assert!(msg.contains("connection failed")),
            other => panic!("expected Network error, got {other}"),
        }
    }
}
