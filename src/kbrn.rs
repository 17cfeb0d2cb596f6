//! The KBRN value object
//!
//! [`Kbrn`] is the validated domain type for Korean Business Registration
//! Numbers. Construction is the single validation gate: a value is
//! normalized to the plain ten-digit form, shape-checked, and
//! checksum-checked before an instance can exist. Everything else on the
//! type is a pure derivation from the stored plain form.

use std::fmt;
use std::str::FromStr;

use nutype::nutype;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::checksum;
use crate::entity_type::BusinessEntityType;
use crate::error::{KbrnError, Result};
use crate::format;

/// Strips the hyphens from delimited input so only the plain form is
/// ever stored. Anything else passes through untouched for validation
/// to reject.
fn normalize(value: String) -> String {
    if format::is_delimited_format(&value) {
        value.replace('-', "")
    } else {
        value
    }
}

/// Shape first, then checksum: a malformed value must never surface as
/// a checksum failure.
fn validate(value: &str) -> std::result::Result<(), KbrnError> {
    if !format::is_plain_format(value) {
        return Err(KbrnError::InvalidFormat {
            value: value.to_owned(),
        });
    }
    let expected = checksum::checksum(&value[..9])?;
    let found = char::from(value.as_bytes()[9]);
    if found != expected {
        return Err(KbrnError::ChecksumMismatch {
            value: value.to_owned(),
            expected,
            found,
        });
    }
    Ok(())
}

/// A validated Korean Business Registration Number.
///
/// Stores only the canonical plain ten-digit form; the delimited form
/// and all substructure are recomputed on demand. Two values are equal
/// iff their digits are equal, regardless of which textual form they
/// were parsed from.
///
/// # Examples
///
/// ```
/// use kbrn::{BusinessEntityType, Kbrn};
///
/// let number = Kbrn::parse("120-81-47521")?;
/// assert_eq!(number.plain_value(), "1208147521");
/// assert_eq!(number.delimited_value(), "120-81-47521");
/// assert_eq!(number.entity_type(), BusinessEntityType::ForProfitCorporateHq);
/// assert_eq!(number, Kbrn::parse("1208147521")?);
/// # Ok::<(), kbrn::KbrnError>(())
/// ```
#[nutype(
    sanitize(with = normalize),
    validate(with = validate, error = KbrnError),
    derive(Clone, PartialEq, Eq, Hash, AsRef, Deref)
)]
pub struct Kbrn(String);

impl Kbrn {
    /// Parses a KBRN from either accepted textual form.
    ///
    /// # Errors
    ///
    /// [`KbrnError::InvalidFormat`] when `value` matches neither shape
    /// (including the empty string), [`KbrnError::ChecksumMismatch`]
    /// when the shape is fine but the check digit is wrong.
    pub fn parse(value: &str) -> Result<Self> {
        Self::try_new(value.to_owned())
    }

    /// True when `value` parses as a KBRN, checksum included.
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// The canonical plain ten-digit form.
    pub fn plain_value(&self) -> &str {
        self
    }

    /// The hyphen-delimited 3-2-5 form, recomputed from the stored digits.
    pub fn delimited_value(&self) -> String {
        format!(
            "{}-{}-{}",
            self.serial_prefix(),
            self.entity_type_code(),
            self.serial_suffix()
        )
    }

    /// The first three digits.
    pub fn serial_prefix(&self) -> &str {
        &self.plain_value()[..3]
    }

    /// The middle two digits encoding the business category.
    pub fn entity_type_code(&self) -> &str {
        &self.plain_value()[3..5]
    }

    /// The last five digits (serial plus check digit).
    pub fn serial_suffix(&self) -> &str {
        &self.plain_value()[5..]
    }

    /// The first nine digits, the input to the checksum.
    pub fn body(&self) -> &str {
        &self.plain_value()[..9]
    }

    /// The tenth digit.
    pub fn check_digit(&self) -> char {
        // the shape invariant guarantees ten ASCII digits
        char::from(self.plain_value().as_bytes()[9])
    }

    /// The business category derived from [`entity_type_code`].
    ///
    /// [`entity_type_code`]: Self::entity_type_code
    pub fn entity_type(&self) -> BusinessEntityType {
        let code = self.entity_type_code().as_bytes();
        BusinessEntityType::classify((code[0] - b'0') * 10 + (code[1] - b'0'))
    }

    /// Re-validates the check digit. Always true for a constructed
    /// instance; kept for API symmetry with [`checksum::has_valid_checksum`].
    pub fn has_valid_checksum(&self) -> bool {
        checksum::has_valid_checksum(self.plain_value()).unwrap_or(false)
    }
}

impl fmt::Display for Kbrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.delimited_value())
    }
}

/// Log-only rendering; never round-trip this, use [`Kbrn::plain_value`]
/// or [`Kbrn::delimited_value`] instead.
impl fmt::Debug for Kbrn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KBRN{{'{}'}}", self.delimited_value())
    }
}

impl FromStr for Kbrn {
    type Err = KbrnError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Serializes to the delimited form, the conventional external
/// presentation of this identifier.
impl Serialize for Kbrn {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.delimited_value())
    }
}

/// Deserializes from a string in either accepted form. An invalid
/// string is a hard error; a non-string token is a type error.
impl<'de> Deserialize<'de> for Kbrn {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
