//! HTTP client for the Alpha Vantage query API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{IntradayQuery, Query},
    types::{IntradayResponse, Response},
    Error,
};

/// Request timeout for Alpha Vantage calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const QUERY_PATH: &str = "/query";

/// HTTP client for the Alpha Vantage query API.
///
/// Every endpoint lives under `/query` and is selected by the `function`
/// parameter. Application errors (bad symbol, rate limits) come back as
/// HTTP 200 with a single message key, so the body is checked for those
/// before it is decoded.
pub struct Client {
    client: reqwest::Client,
    /// Base URL for the API. Defaults to `https://www.alphavantage.co`.
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production Alpha Vantage API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url("https://www.alphavantage.co")
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        Ok(Self {
            client,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn get_url(&self, path: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(query.add_to_url(&url))
    }

    async fn get<T, Q>(&self, query: &Q) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(QUERY_PATH, query)?;
        tracing::debug!("GET {}", redact_api_key(&url));

        let resp = self.client.get(url).send().await.map_err(|e| {
            tracing::error!("Failed to get resource: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let raw = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Response is not JSON: {} | body: {}", e, snippet);
            Error::MalformedPayload(format!("response is not JSON: {}", e))
        })?;
        check_api_message(&raw)?;

        // `raw` keeps document order (serde_json `preserve_order`), so the
        // dump matches the feed; the typed decode reads the text directly.
        let data = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::MalformedPayload(e.to_string())
        })?;

        Ok(Response { raw, data })
    }

    /// Fetches intraday bars for the query's symbol and interval.
    pub async fn get_intraday(
        &self,
        query: &IntradayQuery,
    ) -> Result<Response<IntradayResponse>, Error> {
        self.get::<IntradayResponse, IntradayQuery>(query).await
    }
}

/// Maps Alpha Vantage's in-band error objects onto error variants.
fn check_api_message(raw: &serde_json::Value) -> Result<(), Error> {
    let message = |key: &str| {
        raw.get(key)
            .map(|v| v.as_str().map(str::to_string).unwrap_or_else(|| v.to_string()))
    };
    if let Some(msg) = message("Error Message") {
        tracing::error!("API error message: {}", msg);
        return Err(Error::ApiMessage(msg));
    }
    if let Some(msg) = message("Note").or_else(|| message("Information")) {
        tracing::warn!("API throttled the request: {}", msg);
        return Err(Error::RateLimited(msg));
    }
    Ok(())
}

fn redact_api_key(url: &Url) -> Url {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == "apikey" {
                (k.into_owned(), "REDACTED".to_string())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_api_key_only() {
        let url = Url::parse("https://example.com/query?function=X&apikey=secret&symbol=DIS")
            .unwrap();
        let redacted = redact_api_key(&url);
        let query = redacted.query().unwrap();
        assert!(query.contains("apikey=REDACTED"));
        assert!(query.contains("symbol=DIS"));
        assert!(!query.contains("secret"));
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(5000);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());

        assert_eq!(truncate_body("short"), "short");
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
    }

    #[test]
    fn error_message_key_maps_to_api_message() {
        let raw = serde_json::json!({ "Error Message": "Invalid API call." });
        let err = check_api_message(&raw).unwrap_err();
        assert!(matches!(err, Error::ApiMessage(ref m) if m == "Invalid API call."));
    }

    #[test]
    fn note_and_information_map_to_rate_limited() {
        let raw = serde_json::json!({ "Note": "Thank you for using Alpha Vantage!" });
        assert!(matches!(
            check_api_message(&raw).unwrap_err(),
            Error::RateLimited(_)
        ));

        let raw = serde_json::json!({ "Information": "premium endpoint" });
        assert!(matches!(
            check_api_message(&raw).unwrap_err(),
            Error::RateLimited(_)
        ));
    }

    #[test]
    fn regular_payload_passes() {
        let raw = serde_json::json!({ "Meta Data": {}, "Time Series (5min)": {} });
        assert!(check_api_message(&raw).is_ok());
    }

    #[test]
    fn client_creation_with_base_url() {
        let client = Client::with_base_url("http://localhost:1234/").unwrap();
        assert_eq!(client.base_api_url, "http://localhost:1234");
    }
}
