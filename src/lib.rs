//! # VerifyID Rust Client
//!
//! Typed Rust HTTP client for the [VerifyID.io](https://verifyid.io)
//! identity-verification API: document OCR, face match, liveness and
//! deepfake detection, credit-card and barcode reading, and AML/PEP/crime
//! screening.
//!
//! Each API endpoint maps to one async method on [`VerifyIdClient`]. The
//! client assembles the JSON payload from typed arguments, POSTs it with the
//! `x-api-key` header, and returns the decoded response as a
//! [`serde_json::Value`] — the API's response schemas are not validated
//! client-side.
//!
//! ## Example
//!
//! ```no_run
//! use verifyid_client::{VerifyIdClient, VerifyIdConfig};
//!
//! # async fn run() -> Result<(), verifyid_client::VerifyIdError> {
//! let client = VerifyIdClient::new(VerifyIdConfig::new("your-api-key"))?;
//! let result = client
//!     .face_match("frontB64", "selfieB64", None)
//!     .await?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Error convention
//!
//! The upstream API signals request errors through the response body, so by
//! default the client does not inspect the HTTP status code and returns the
//! body's JSON as-is; a body that is not valid JSON decodes to `Null`.
//! [`VerifyIdConfig::strict`] opts into hard failures on non-2xx statuses
//! and undecodable bodies.

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::VerifyIdClient;
pub use config::{ConfigError, VerifyIdConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use error::VerifyIdError;
pub use types::{
    AmlScreeningRequest, DocumentReadRequest, EntityKind, FaceMatchRequest, FullKycRequest,
    ImageRequest, ScreeningDataset, DEFAULT_MATCH_THRESHOLD,
};
