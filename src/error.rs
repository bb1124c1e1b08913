use crate::registry::AttributeKind;
use thiserror::Error;

/// Validation failure. Carries the offending value and a tag identifying
/// what was violated; callers inspect both to build a precise diagnostic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid characters [{kind}]: {value:?}")]
    InvalidCharacters { kind: AttributeKind, value: String },

    #[error("unsupported country code: {value:?}")]
    UnsupportedCountry { value: String },

    #[error("invalid length, expected {expected} got {actual}: {value:?}")]
    LengthMismatch {
        expected: usize,
        actual: usize,
        value: String,
    },

    #[error("check digits do not match: {value:?}")]
    ChecksumMismatch { value: String },

    #[error("missing attribute [{kind}] for country {country}")]
    MissingAttribute {
        kind: AttributeKind,
        country: String,
    },

    #[error("malformed iban string: {value:?}")]
    Malformed { value: String },
}
