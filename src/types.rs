//! Request payload types for the VerifyID API.
//!
//! One `Serialize` struct per endpoint. Optional fields are skipped when
//! absent so the wire payload never carries a `null` — the API treats a
//! missing key and an explicit null differently. Image fields are
//! base64-encoded image strings; the client does not validate or re-encode
//! them.

use serde::{Serialize, Serializer};
use std::fmt;

/// Default face-match similarity threshold used when the caller does not
/// supply one. The API interprets thresholds on a [0, 1] scale; no
/// client-side range check is performed.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Payload for `/kyc/full_verification`.
#[derive(Debug, Clone, Serialize)]
pub struct FullKycRequest {
    /// Base64-encoded front of the ID document or passport.
    pub front_image: String,
    /// Base64-encoded selfie image.
    pub selfie_image: String,
    /// Face-match similarity threshold.
    pub threshold: f64,
    /// Base64-encoded back of the ID document, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_image: Option<String>,
}

/// Payload for `/face-match`.
#[derive(Debug, Clone, Serialize)]
pub struct FaceMatchRequest {
    /// Base64-encoded front of the ID document or passport.
    pub front_image: String,
    /// Base64-encoded selfie image.
    pub selfie_image: String,
    /// Face-match similarity threshold.
    pub threshold: f64,
}

/// Single-image payload shared by `/liveness-detection`,
/// `/deepfake-detection`, `/credit-card-reader`, and `/barcode-reader`.
#[derive(Debug, Clone, Serialize)]
pub struct ImageRequest {
    /// Base64-encoded image.
    pub image_base64: String,
}

/// Payload for `/document-reader`.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentReadRequest {
    /// Base64-encoded front of the document.
    pub image_front: String,
    /// Base64-encoded back of the document, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_back: Option<String>,
}

/// Entity type for AML/PEP screening.
///
/// Serializes as the wire integers the API expects (0 = person, 1 = company).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A natural person.
    Person,
    /// A company or other legal entity.
    Company,
}

impl EntityKind {
    /// Wire code for this entity type.
    pub fn code(self) -> u8 {
        match self {
            Self::Person => 0,
            Self::Company => 1,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person => write!(f, "Person"),
            Self::Company => write!(f, "Company"),
        }
    }
}

impl Serialize for EntityKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Watchlist dataset selector for AML/PEP screening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreeningDataset {
    /// International sanctions lists.
    Sanctions,
    /// Politically exposed persons.
    Peps,
    /// Criminal watchlists.
    Crime,
    /// All datasets.
    All,
}

impl fmt::Display for ScreeningDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sanctions => write!(f, "sanctions"),
            Self::Peps => write!(f, "peps"),
            Self::Crime => write!(f, "crime"),
            Self::All => write!(f, "all"),
        }
    }
}

/// Payload for `/aml-pep-crime-checker`.
///
/// Every field is optional; the default value serializes as `{}` and the
/// request is still issued (the API interprets an empty query server-side).
#[derive(Debug, Clone, Default, Serialize)]
pub struct AmlScreeningRequest {
    /// Full name of the person, or company/business name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Entity type of the subject.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<EntityKind>,
    /// 2-letter ISO country code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Which watchlist datasets to search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<ScreeningDataset>,
}
