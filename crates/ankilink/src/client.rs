//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::{Error, Result};
use crate::protocol::{API_VERSION, Request, Response};
use crate::types::{NameKind, Note, Permission};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// The client for the AnkiConnect automation endpoint.
///
/// # Example
///
/// ```no_run
/// use ankilink::AnkiClient;
///
/// # async fn example() -> ankilink::Result<()> {
/// let client = AnkiClient::new();
/// client.request_permission().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AnkiClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with no API key and no timeout;
    /// an unreachable endpoint fails fast with connection-refused.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Verify that the endpoint is reachable, authorized, and recent enough.
    ///
    /// Succeeds iff the endpoint answers without an error, reports
    /// permission `"granted"`, and speaks API version 6 or newer. Every
    /// other combination (connection refused included) is an `Err` with a
    /// descriptive message; this path fires routinely when Anki is not
    /// running and must stay cheap to handle.
    pub async fn request_permission(&self) -> Result<Permission> {
        let permission: Permission = self.invoke_without_params("requestPermission").await?;
        if permission.permission != "granted" {
            return Err(Error::PermissionDenied(permission.permission));
        }
        if permission.version < API_VERSION {
            return Err(Error::UnsupportedVersion(permission.version));
        }
        Ok(permission)
    }

    /// Add a new note. Returns the ID of the created note.
    pub async fn add_note(&self, note: Note) -> Result<i64> {
        #[derive(Serialize)]
        struct AddNoteParams {
            note: Note,
        }
        self.invoke("addNote", AddNoteParams { note }).await
    }

    /// List deck or model names.
    pub async fn names(&self, kind: NameKind) -> Result<Vec<String>> {
        self.invoke_without_params(kind.action()).await
    }

    /// Execute an action with parameters.
    async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = Request::new(action, params, self.api_key.as_deref());
        self.send(&request).await
    }

    /// Execute an action without parameters.
    async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = Request::without_params(action, self.api_key.as_deref());
        self.send(&request).await
    }

    /// Send a request and decode the `{result, error}` envelope.
    async fn send<T, R>(&self, request: &Request<'_, T>) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        debug!(action = request.action, "anki request");

        let response = self
            .http_client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })?;

        // Failures arrive both as non-2xx statuses and as `error` fields
        // at 200; check the status first.
        let response = response.error_for_status()?;
        let body: Response<R> = response.json().await?;

        // An empty error string counts as no error.
        let error = body.error.filter(|error| !error.is_empty());
        match (body.result, error) {
            (Some(result), None) => Ok(result),
            (_, Some(error)) => Err(Error::AnkiConnect(error)),
            (None, None) => Err(Error::EmptyResponse),
        }
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use ankilink::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .api_key("my-secret-key")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: None,
        }
    }

    /// Set the endpoint URL. Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key, required only if the endpoint is configured for one.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a request timeout. No timeout is configured by default.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().expect("Failed to build HTTP client");

        AnkiClient {
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
