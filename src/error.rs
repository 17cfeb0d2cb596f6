//! Error types for KBRN validation

use thiserror::Error;

/// Failures raised while validating or decomposing a KBRN string.
///
/// All variants indicate malformed caller data and are non-retryable.
/// Validation never coerces: nothing is truncated, guessed, or
/// auto-corrected on the way to an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KbrnError {
    /// Input matches neither the plain (`1208147521`) nor the delimited
    /// (`120-81-47521`) shape.
    #[error("invalid KBRN format (expected 10 digits or 3-2-5 delimited form): {value:?}")]
    InvalidFormat { value: String },

    /// Shape is valid but the trailing check digit does not match the
    /// value computed from the first nine digits.
    #[error("invalid checksum for {value:?}: expected check digit '{expected}', found '{found}'")]
    ChecksumMismatch {
        value: String,
        expected: char,
        found: char,
    },

    /// A checksum body was not exactly nine characters long.
    #[error("checksum body must be exactly 9 characters, got {actual}")]
    InvalidBodyLength { actual: usize },

    /// A checksum body contained a character outside `0-9`.
    #[error("checksum body must contain only ASCII digits, found {found:?}")]
    NonDigitCharacter { found: char },

    /// An entity type code was not a two-digit ASCII string.
    #[error("entity type code must be exactly two ASCII digits: {value:?}")]
    InvalidEntityTypeCode { value: String },
}

pub type Result<T> = std::result::Result<T, KbrnError>;
