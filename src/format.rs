//! Textual format rules for KBRN strings
//!
//! Two representations are accepted everywhere a KBRN string is taken:
//! the plain form (`1208147521`) and the delimited 3-2-5 form
//! (`120-81-47521`). This module owns the shape predicates and the
//! conversions between the two forms. Conversions are idempotent:
//! input already in the target form is returned unchanged.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{KbrnError, Result};

/// Plain form: exactly ten ASCII digits.
///
/// The explicit `[0-9]` class is deliberate; the regex crate's `\d`
/// matches Unicode decimal digits.
static PLAIN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{10}$").expect("plain KBRN pattern"));

/// Delimited form: digit groups of 3, 2, and 5 separated by hyphens.
static DELIMITED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[0-9]{3}-[0-9]{2}-[0-9]{5}$").expect("delimited KBRN pattern"));

/// True iff `value` is exactly ten ASCII digits.
pub fn is_plain_format(value: &str) -> bool {
    PLAIN_PATTERN.is_match(value)
}

/// True iff `value` is in the hyphen-delimited 3-2-5 form.
pub fn is_delimited_format(value: &str) -> bool {
    DELIMITED_PATTERN.is_match(value)
}

/// True iff `value` is in either accepted form.
pub fn is_valid_format(value: &str) -> bool {
    is_plain_format(value) || is_delimited_format(value)
}

/// Converts a KBRN string to the plain form, stripping hyphens from
/// delimited input. Plain input is returned as-is.
///
/// # Errors
///
/// [`KbrnError::InvalidFormat`] when `value` is in neither form.
pub fn to_plain(value: &str) -> Result<String> {
    if is_plain_format(value) {
        return Ok(value.to_owned());
    }
    if is_delimited_format(value) {
        return Ok(value.replace('-', ""));
    }
    Err(KbrnError::InvalidFormat {
        value: value.to_owned(),
    })
}

/// Converts a KBRN string to the delimited form, inserting hyphens after
/// the third and fifth digits of plain input. Delimited input is
/// returned as-is.
///
/// # Errors
///
/// [`KbrnError::InvalidFormat`] when `value` is in neither form.
pub fn to_delimited(value: &str) -> Result<String> {
    if is_delimited_format(value) {
        return Ok(value.to_owned());
    }
    if is_plain_format(value) {
        return Ok(format!("{}-{}-{}", &value[..3], &value[3..5], &value[5..]));
    }
    Err(KbrnError::InvalidFormat {
        value: value.to_owned(),
    })
}
