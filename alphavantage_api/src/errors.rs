//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The body was not JSON, or lacked the metadata / time series sections.
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
    /// Alpha Vantage answered 200 with an `"Error Message"` object.
    #[error("API returned an error: {0}")]
    ApiMessage(String),
    /// Alpha Vantage answered 200 with a `"Note"` or `"Information"` object.
    #[error("Rate limited by Alpha Vantage: {0}")]
    RateLimited(String),
}
