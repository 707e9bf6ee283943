//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`OutputSize`].

use std::str::FromStr;

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for the API key and output size.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the API key sent as `apikey`.
    fn with_api_key(mut self, api_key: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().api_key = api_key.to_string();
        self
    }

    /// Sets how much history the API returns.
    fn with_output_size(mut self, output_size: OutputSize) -> Self
    where
        Self: Sized,
    {
        self.get_common().output_size = output_size;
        self
    }
}

/// Amount of history returned per request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputSize {
    /// The latest 100 data points.
    Compact,
    /// The full available history. This is the default.
    #[default]
    Full,
}

impl std::fmt::Display for OutputSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                OutputSize::Compact => "compact",
                OutputSize::Full => "full",
            }
        )
    }
}

impl FromStr for OutputSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "compact" => Ok(OutputSize::Compact),
            "full" => Ok(OutputSize::Full),
            _ => Err(format!(
                "unknown output size '{}'. Valid values: compact, full",
                s
            )),
        }
    }
}

/// Fields shared by all query types.
#[derive(Clone, Default)]
pub struct QueryCommon {
    /// API credential. An empty key is still sent; the API rejects it.
    pub api_key: String,
    /// Output size. Defaults to full.
    pub output_size: OutputSize,
}

impl QueryCommon {
    /// Appends the output size and API key to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("outputsize", &self.output_size.to_string());
        url.query_pairs_mut()
            .append_pair("apikey", self.api_key.as_str());
        url
    }
}
