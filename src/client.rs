use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use url::Url;

use crate::config::ClientConfig;
use crate::error::{HypixelError, Result};

#[derive(Clone)]
pub struct HypixelClient {
    pub(crate) http: Client,
    pub(crate) key: SecretString,
    pub(crate) base_url: Url,
}

impl std::fmt::Debug for HypixelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HypixelClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl HypixelClient {
    /// Create a client for the public API using the given key.
    /// No request is made until an endpoint is called.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| HypixelError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            key: config.api_key,
            base_url,
        })
    }

    /// Build a client from `HYPIXEL_API_KEY` / `HYPIXEL_API_URL`.
    pub fn from_env() -> Result<Self> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL for a keyed endpoint: `key` first, then `params` in order.
    pub(crate) fn endpoint_url(&self, path: &str, params: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("key", self.key.expose_secret());
            for (name, value) in params {
                query.append_pair(name, value);
            }
        }
        Ok(url)
    }

    /// URL for an endpoint that takes no key and no parameters.
    pub(crate) fn keyless_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// GET `path` with the API key and `params`, returning the JSON body as-is.
    ///
    /// HTTP status codes are not inspected: an error payload such as
    /// `{"success": false, "cause": "..."}` comes back as a normal value.
    pub async fn request(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = self.endpoint_url(path, params)?;
        tracing::debug!(
            path,
            params = ?params.iter().map(|(name, _)| *name).collect::<Vec<_>>(),
            "GET"
        );
        self.fetch(path, url).await
    }

    /// GET `path` without attaching the API key.
    pub async fn request_keyless(&self, path: &str) -> Result<Value> {
        let url = self.keyless_url(path)?;
        tracing::debug!(path, "GET (keyless)");
        self.fetch(path, url).await
    }

    async fn fetch(&self, path: &str, url: Url) -> Result<Value> {
        // reqwest errors embed the request URL, which carries the key
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| HypixelError::Http(e.without_url()))?;
        let status = resp.status();
        let body = resp
            .bytes()
            .await
            .map_err(|e| HypixelError::Http(e.without_url()))?;
        tracing::trace!(path, %status, bytes = body.len(), "response");

        serde_json::from_slice(&body).map_err(|source| {
            tracing::warn!(path, %status, error = %source, "response body is not valid JSON");
            HypixelError::Json {
                path: path.to_string(),
                source,
            }
        })
    }
}
