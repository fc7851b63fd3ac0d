//! The dictionary client and builder.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::types::Lookup;

/// Default base URL for the dictionary service.
const DEFAULT_URL: &str = "https://dictionary.yandex.net/api/v1/dicservice.json";

/// Query parameter carrying the API key.
const PARAM_KEY: &str = "key";

/// The client for the dictionary service.
///
/// # Example
///
/// ```no_run
/// use yadict::DictionaryClient;
///
/// # async fn example() -> yadict::Result<()> {
/// let client = DictionaryClient::new("dict.1.1.XXXX");
/// let lookup = client.lookup("en-ru", "time").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct DictionaryClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

impl DictionaryClient {
    /// Create a client for the public service with default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::builder().api_key(api_key).build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// List the supported translation directions, e.g. `["en-ru", "ru-en"]`.
    pub async fn languages(&self) -> Result<Vec<String>> {
        self.fetch("getLangs", &[]).await
    }

    /// Look up `text` in the given translation direction (e.g. `"en-ru"`).
    ///
    /// The text is passed through URL encoding only; oversized input is
    /// rejected by the service itself (HTTP 413). An empty `def` array in
    /// the response is a successful lookup with zero entries.
    pub async fn lookup(&self, lang: &str, text: &str) -> Result<Lookup> {
        self.fetch("lookup", &[("lang", lang), ("text", text)]).await
    }

    /// Build, log (redacted), and execute a GET request against `method`.
    async fn fetch<R>(&self, method: &str, params: &[(&str, &str)]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = self
            .http_client
            .get(format!("{}/{}", self.base_url, method))
            .query(&[(PARAM_KEY, self.api_key.as_str())])
            .query(params)
            .build()?;
        debug!(url = %redacted(request.url()), "dictionary request");

        let response = self.http_client.execute(request).await?;
        let status = response.status();
        debug!(%status, "dictionary response");

        if status != StatusCode::OK {
            return Err(ApiError::from_status(status).into());
        }
        Ok(response.json().await?)
    }
}

/// Render a request URL for logging with the API key value replaced.
///
/// The output is display-only, not a parseable URL.
fn redacted(url: &Url) -> String {
    let query = url
        .query_pairs()
        .map(|(name, value)| {
            if name == PARAM_KEY {
                format!("{name}=…")
            } else {
                format!("{name}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join("&");

    let mut shown = url.clone();
    shown.set_query(None);
    format!("{shown}?{query}")
}

/// Builder for creating a customized [`DictionaryClient`].
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: String,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: String::new(),
            timeout: None,
        }
    }

    /// Set the service base URL. Defaults to the public dictionary service.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key used to sign every request.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set a request timeout. No timeout is configured by default.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client.
    pub fn build(self) -> DictionaryClient {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().expect("Failed to build HTTP client");

        DictionaryClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacted_url_never_contains_the_key() {
        let key = "dict.1.1.20220422T160215Z.0f5a4ca9b16d7e2f";
        let url = Url::parse(&format!(
            "https://dictionary.yandex.net/api/v1/dicservice.json/lookup?key={key}&lang=en-ru&text=time"
        ))
        .unwrap();

        let shown = redacted(&url);
        assert!(!shown.contains(key));
        assert!(shown.contains("key=…"));
        assert!(shown.contains("lang=en-ru"));
        assert!(shown.contains("text=time"));
    }

    #[test]
    fn redacted_url_keeps_host_and_path() {
        let url = Url::parse("http://127.0.0.1:9999/lookup?key=secret&lang=en-ru").unwrap();
        let shown = redacted(&url);
        assert!(shown.starts_with("http://127.0.0.1:9999/lookup?"));
        assert!(!shown.contains("secret"));
    }
}
