//! Core NetOrca client implementation.

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::types::PointOfView;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// A client for interacting with the NetOrca API.
///
/// The client is immutable after construction and cheap to clone; a single
/// instance may be shared across tasks.
///
/// # Example
///
/// ```no_run
/// use netorca_client::{Client, ServiceItemFilters};
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(
///     "https://api.example.com",
///     "my-secret-key",
///     "v1",
///     Duration::from_secs(5),
/// )?;
///
/// let page = client.list_service_items(&ServiceItemFilters::default()).await?;
/// println!("{} service items", page.count);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    /// Normalized base URL, always ending in `{api_version}/`.
    base_url: String,
    /// API key sent as `Authorization: Api-Key {key}`.
    api_key: String,
    /// HTTP client carrying the per-call timeout.
    http: HttpClient,
}

impl Client {
    /// Create a new NetOrca client.
    ///
    /// The base URL is normalized by appending a trailing `/` if missing,
    /// then the version segment, so `http://x` with version `v1` becomes
    /// `http://x/v1/`. No network call is made at construction time.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] if the base URL is empty or
    /// does not start with `http://` or `https://`, or if the API key or
    /// API version is empty.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        api_version: &str,
        timeout: Duration,
    ) -> Result<Self> {
        let mut base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.is_empty() {
            return Err(ClientError::InvalidArgument(
                "base URL cannot be empty".to_string(),
            ));
        }
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ClientError::InvalidArgument(
                "base URL must start with http:// or https://".to_string(),
            ));
        }
        if api_version.is_empty() {
            return Err(ClientError::InvalidArgument(
                "API version cannot be empty".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(ClientError::InvalidArgument(
                "API key cannot be empty".to_string(),
            ));
        }

        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        base_url.push_str(api_version);
        base_url.push('/');

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self {
            base_url,
            api_key,
            http,
        })
    }

    /// Create a client from a loaded [`Config`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidArgument`] under the same conditions as
    /// [`Client::new`].
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.base_url.clone(),
            config.api_key.clone(),
            &config.api_version,
            config.request_timeout,
        )
    }

    /// The normalized base URL, ending in the version segment.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL for a list endpoint.
    fn collection_url(&self, pov: PointOfView, collection: &str, query: &str) -> String {
        let mut url = format!("{}orcabase/{}/{}", self.base_url, pov.as_str(), collection);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// Add authentication and accept headers to a request.
    fn with_headers(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", format!("Api-Key {}", self.api_key))
            .header("Accept", "application/json")
    }

    /// Fetch one page of a list endpoint and decode it.
    ///
    /// Shared by all list operations: builds the URL from the point of view,
    /// collection name and pre-encoded query, classifies the response and
    /// decodes the body. Non-200 responses surface the status line only.
    pub(crate) async fn list<T: DeserializeOwned>(
        &self,
        pov: PointOfView,
        collection: &str,
        query: &str,
    ) -> Result<T> {
        let url = self.collection_url(pov, collection, query);
        debug!(%url, "calling API");

        let response = self
            .with_headers(self.http.get(&url))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::RequestFailed {
                status: status.to_string(),
            });
        }

        let body = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }

    /// Issue a PATCH with a JSON body and decode the updated entity.
    ///
    /// Non-200 responses carry both the status line and the raw body text,
    /// preserving server-side validation detail.
    pub(crate) async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "calling API");

        let response = self
            .with_headers(self.http.patch(&url))
            .json(body)
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if status != StatusCode::OK {
            let text = response.text().await.map_err(classify)?;
            return Err(ClientError::UpdateRejected {
                status: status.to_string(),
                body: text,
            });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        serde_json::from_slice(&bytes).map_err(ClientError::Decode)
    }
}

/// Classify a transport-level failure.
fn classify(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout
    } else {
        ClientError::Transport(err)
    }
}
