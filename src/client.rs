//! HTTP client for the VerifyID.io identity-verification API.
//!
//! `VerifyIdClient` wraps a `reqwest::Client` configured once with the
//! `x-api-key` and `Content-Type` headers and the request timeout. Each
//! public method maps one documented endpoint: it assembles the typed
//! payload, POSTs it, and returns the decoded JSON response verbatim. The
//! client holds no per-call state and is `Send + Sync`; share it behind an
//! `Arc` across tasks.
//!
//! ## Status handling
//!
//! By default the HTTP status code is not inspected: a 4xx/5xx response with
//! a JSON body is returned to the caller like any other response, and a body
//! that is not valid JSON decodes to `Value::Null`. This mirrors the upstream
//! API's error convention. [`VerifyIdConfig::strict`] opts into failing with
//! [`VerifyIdError::Api`] / [`VerifyIdError::Decode`] instead.

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::config::{ConfigError, VerifyIdConfig};
use crate::error::VerifyIdError;
use crate::types::{
    AmlScreeningRequest, DocumentReadRequest, FaceMatchRequest, FullKycRequest, ImageRequest,
    DEFAULT_MATCH_THRESHOLD,
};

/// Client for the VerifyID.io API.
#[derive(Debug)]
pub struct VerifyIdClient {
    client: reqwest::Client,
    base_url: String,
    timeout_ms: u64,
    strict: bool,
}

impl VerifyIdClient {
    /// Create a new client from configuration.
    ///
    /// Fails with [`ConfigError::EmptyApiKey`] if the API key is empty — the
    /// original SDK deferred that failure to the first API response; failing
    /// here surfaces the misconfiguration at construction instead.
    pub fn new(config: VerifyIdConfig) -> Result<Self, VerifyIdError> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    "x-api-key",
                    reqwest::header::HeaderValue::from_str(&config.api_key)
                        .map_err(|_| ConfigError::InvalidApiKey)?,
                );
                headers.insert(
                    reqwest::header::CONTENT_TYPE,
                    reqwest::header::HeaderValue::from_static("application/json"),
                );
                headers
            })
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            timeout_ms: config.timeout_secs * 1_000,
            strict: config.strict,
        })
    }

    /// The base URL this client POSTs against, exactly as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shared request executor: POST the payload to `base_url + endpoint` and
    /// decode the response body as JSON.
    async fn request<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        payload: &B,
    ) -> Result<Value, VerifyIdError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(endpoint, "dispatching VerifyID request");

        let resp = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VerifyIdError::Timeout {
                        endpoint: endpoint.to_string(),
                        elapsed_ms: self.timeout_ms,
                    }
                } else {
                    VerifyIdError::Transport {
                        endpoint: endpoint.to_string(),
                        source: e,
                    }
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| VerifyIdError::Transport {
            endpoint: endpoint.to_string(),
            source: e,
        })?;
        debug!(endpoint, status = status.as_u16(), "VerifyID response received");

        if self.strict && !status.is_success() {
            return Err(VerifyIdError::Api {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(source) if self.strict => Err(VerifyIdError::Decode {
                endpoint: endpoint.to_string(),
                body,
                source,
            }),
            // Lenient mode keeps the original SDK's silent-null decode.
            Err(_) => Ok(Value::Null),
        }
    }

    /// Full KYC verification: document OCR, face match against the selfie,
    /// and liveness in one call.
    ///
    /// `threshold` defaults to [`DEFAULT_MATCH_THRESHOLD`] when `None`.
    pub async fn full_kyc_verification(
        &self,
        front_image: impl Into<String>,
        selfie_image: impl Into<String>,
        back_image: Option<String>,
        threshold: Option<f64>,
    ) -> Result<Value, VerifyIdError> {
        let payload = FullKycRequest {
            front_image: front_image.into(),
            selfie_image: selfie_image.into(),
            threshold: threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD),
            back_image,
        };
        self.request("/kyc/full_verification", &payload).await
    }

    /// Face match: compare the portrait on a document image against a selfie.
    ///
    /// `threshold` defaults to [`DEFAULT_MATCH_THRESHOLD`] when `None`.
    pub async fn face_match(
        &self,
        front_image: impl Into<String>,
        selfie_image: impl Into<String>,
        threshold: Option<f64>,
    ) -> Result<Value, VerifyIdError> {
        let payload = FaceMatchRequest {
            front_image: front_image.into(),
            selfie_image: selfie_image.into(),
            threshold: threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD),
        };
        self.request("/face-match", &payload).await
    }

    /// Passive liveness check on a selfie image.
    pub async fn liveness_detection(
        &self,
        image_base64: impl Into<String>,
    ) -> Result<Value, VerifyIdError> {
        let payload = ImageRequest {
            image_base64: image_base64.into(),
        };
        self.request("/liveness-detection", &payload).await
    }

    /// Test whether a face image is synthetic.
    pub async fn deepfake_detection(
        &self,
        image_base64: impl Into<String>,
    ) -> Result<Value, VerifyIdError> {
        let payload = ImageRequest {
            image_base64: image_base64.into(),
        };
        self.request("/deepfake-detection", &payload).await
    }

    /// Document reader (OCR): extract text and KYC fields from an ID or
    /// passport image.
    pub async fn document_reader(
        &self,
        image_front: impl Into<String>,
        image_back: Option<String>,
    ) -> Result<Value, VerifyIdError> {
        let payload = DocumentReadRequest {
            image_front: image_front.into(),
            image_back,
        };
        self.request("/document-reader", &payload).await
    }

    /// Extract card number and holder name from a credit card image.
    pub async fn credit_card_reader(
        &self,
        image_base64: impl Into<String>,
    ) -> Result<Value, VerifyIdError> {
        let payload = ImageRequest {
            image_base64: image_base64.into(),
        };
        self.request("/credit-card-reader", &payload).await
    }

    /// Extract data from a barcode image (usually the back of an ID).
    pub async fn barcode_reader(
        &self,
        image_base64: impl Into<String>,
    ) -> Result<Value, VerifyIdError> {
        let payload = ImageRequest {
            image_base64: image_base64.into(),
        };
        self.request("/barcode-reader", &payload).await
    }

    /// Search AML, PEP, and crime watchlists.
    ///
    /// All query fields are optional; a default request sends `{}`.
    pub async fn aml_pep_crime_checker(
        &self,
        query: AmlScreeningRequest,
    ) -> Result<Value, VerifyIdError> {
        self.request("/aml-pep-crime-checker", &query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_empty_api_key() {
        let result = VerifyIdClient::new(VerifyIdConfig::new(""));
        assert!(matches!(
            result.unwrap_err(),
            VerifyIdError::Config(ConfigError::EmptyApiKey)
        ));
    }

    #[test]
    fn new_rejects_api_key_with_header_forbidden_bytes() {
        let result = VerifyIdClient::new(VerifyIdConfig::new("bad\nkey"));
        assert!(matches!(
            result.unwrap_err(),
            VerifyIdError::Config(ConfigError::InvalidApiKey)
        ));
    }

    #[test]
    fn default_base_url() {
        let client = VerifyIdClient::new(VerifyIdConfig::new("test-key")).expect("client build");
        assert_eq!(client.base_url(), "https://api.verifyid.io");
    }

    #[test]
    fn explicit_base_url_kept_verbatim() {
        // No trailing-slash normalization.
        let config = VerifyIdConfig::new("test-key").with_base_url("https://sandbox.verifyid.io/");
        let client = VerifyIdClient::new(config).expect("client build");
        assert_eq!(client.base_url(), "https://sandbox.verifyid.io/");
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VerifyIdClient>();
    }
}
