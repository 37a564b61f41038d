//! Client configuration.

use secrecy::SecretString;

use crate::error::HypixelError;

/// Address every request is resolved against unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://api.hypixel.net/";

pub const DEFAULT_USER_AGENT: &str = concat!("hypixel-api/", env!("CARGO_PKG_VERSION"));

/// Settings used to build a [`HypixelClient`](crate::HypixelClient).
///
/// The API key is held as a [`SecretString`] so it never shows up in
/// `Debug` output or logs.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Key sent as the `key` query parameter on every keyed endpoint.
    pub api_key: SecretString,

    /// Base URL for the API. Point this at a proxy or a mock server in tests.
    pub base_url: String,

    /// `User-Agent` header value.
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into().into_boxed_str()),
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Load configuration from the process environment.
    ///
    /// - `HYPIXEL_API_KEY` is required
    /// - `HYPIXEL_API_URL` overrides the base URL
    pub fn from_env() -> Result<Self, HypixelError> {
        use std::env;

        let api_key = env::var("HYPIXEL_API_KEY")
            .map_err(|_| HypixelError::Config("HYPIXEL_API_KEY is not set".into()))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("HYPIXEL_API_URL") {
            config.base_url = base_url;
        }
        Ok(config)
    }

    /// Like [`from_env`](Self::from_env), after loading a `.env` file from
    /// the working directory if one exists.
    #[cfg(feature = "env")]
    pub fn from_dotenv() -> Result<Self, HypixelError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Parse the base URL, making sure it ends in `/` so relative paths
    /// are appended instead of replacing the last segment.
    pub(crate) fn parsed_base_url(&self) -> Result<url::Url, HypixelError> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Ok(url::Url::parse(&base)?)
    }
}
