//! Client configuration.
//!
//! `VerifyIdConfig` carries everything the client needs: the API key sent as
//! the `x-api-key` header, the base URL, the request timeout, and the strict
//! flag. Configuration is injected by the caller — the library never reads
//! environment variables or framework config; resolving those belongs to the
//! application wiring around it.

use url::Url;

/// Default base URL of the VerifyID.io API.
pub const DEFAULT_BASE_URL: &str = "https://api.verifyid.io";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors from client configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The API key is empty. The upstream service would reject every request
    /// anyway; failing at construction surfaces the misconfiguration early.
    #[error("API key must not be empty")]
    EmptyApiKey,

    /// The API key contains bytes that cannot be carried in an HTTP header.
    #[error("API key contains characters not permitted in an HTTP header")]
    InvalidApiKey,

    /// The base URL is not a parseable absolute URL.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl {
        /// The URL that failed to parse.
        url: String,
        /// Description of the parse failure.
        reason: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

/// Configuration for [`VerifyIdClient`](crate::VerifyIdClient).
///
/// Immutable once handed to the client. `base_url` is used exactly as given:
/// no trailing-slash normalization is performed, so `with_base_url` callers
/// must pass the URL without a trailing slash (endpoint paths all begin with
/// `/`).
#[derive(Debug, Clone)]
pub struct VerifyIdConfig {
    /// API key sent as the `x-api-key` header on every request.
    pub api_key: String,
    /// Base URL of the API (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Request timeout in seconds (default: [`DEFAULT_TIMEOUT_SECS`]).
    pub timeout_secs: u64,
    /// When set, non-2xx statuses and undecodable bodies become errors
    /// instead of being passed through. See [`VerifyIdConfig::strict`].
    pub strict: bool,
}

impl VerifyIdConfig {
    /// Create a configuration for the production API with default timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            strict: false,
        }
    }

    /// Override the base URL. The value is stored verbatim.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Enable strict mode.
    ///
    /// The upstream API (and the original SDK) return error payloads with
    /// non-2xx statuses and the client normally passes those bodies through
    /// undistinguished from success. In strict mode the client instead fails
    /// with [`VerifyIdError::Api`](crate::VerifyIdError::Api) on a non-2xx
    /// status and [`VerifyIdError::Decode`](crate::VerifyIdError::Decode) on
    /// a body that is not valid JSON.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Validate the configuration. Called by the client constructor.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        // Parse-validate only; the stored string stays untouched.
        Url::parse(&self.base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}
