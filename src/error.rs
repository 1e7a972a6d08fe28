//! VerifyID client error types.

/// Errors from VerifyID API calls.
#[derive(Debug, thiserror::Error)]
pub enum VerifyIdError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// HTTP transport error (connection refused, DNS, TLS). Never retried.
    #[error("HTTP error calling {endpoint}: {source}")]
    Transport {
        /// The endpoint path being called.
        endpoint: String,
        /// The underlying transport error.
        source: reqwest::Error,
    },

    /// The request timed out.
    #[error("request to {endpoint} timed out after {elapsed_ms}ms")]
    Timeout {
        /// The endpoint path being called.
        endpoint: String,
        /// Configured timeout in milliseconds.
        elapsed_ms: u64,
    },

    /// The API returned a non-2xx status. Raised only in strict mode; the
    /// default behavior passes the response body through regardless of
    /// status.
    #[error("VerifyID API {endpoint} returned {status}: {body}")]
    Api {
        /// The endpoint path being called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// The response body was not valid JSON. Raised only in strict mode; the
    /// default behavior yields `Value::Null` for an undecodable body.
    #[error("failed to decode response from {endpoint} as JSON: {source}; body: {body}")]
    Decode {
        /// The endpoint path being called.
        endpoint: String,
        /// Raw response body that failed to decode.
        body: String,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = VerifyIdError::Api {
            endpoint: "/face-match".into(),
            status: 422,
            body: r#"{"error":"bad threshold"}"#.into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/face-match"));
        assert!(msg.contains("422"));
        assert!(msg.contains("bad threshold"));
    }

    #[test]
    fn decode_error_display_names_raw_body() {
        let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let err = VerifyIdError::Decode {
            endpoint: "/liveness-detection".into(),
            body: "<html>".into(),
            source,
        };
        assert!(err.to_string().contains("<html>"));
    }

    #[test]
    fn config_error_converts() {
        let err: VerifyIdError = ConfigError::EmptyApiKey.into();
        assert!(matches!(err, VerifyIdError::Config(_)));
    }

    #[test]
    fn timeout_error_display() {
        let err = VerifyIdError::Timeout {
            endpoint: "/document-reader".into(),
            elapsed_ms: 30_000,
        };
        assert!(err.to_string().contains("30000"));
    }
}
