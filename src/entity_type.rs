//! Business entity classification
//!
//! The middle two digits of a KBRN encode the registrant's business
//! category. The ranges are published by the Korean National Tax
//! Service; codes outside any published range classify as `Undefined`
//! rather than failing.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::{KbrnError, Result};

/// Business entity category encoded by the entity type code of a KBRN.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessEntityType {
    /// Individual business subject to VAT (codes 01-79).
    #[display("individual (taxable)")]
    IndividualTaxable,
    /// Individual business exempt from VAT (codes 90-99).
    #[display("individual (tax-exempt)")]
    IndividualTaxExempt,
    /// Head office of a for-profit corporation (codes 81, 86, 87, 88).
    #[display("for-profit corporation (head office)")]
    ForProfitCorporateHq,
    /// Non-profit corporation (code 82).
    #[display("non-profit corporation")]
    NonProfitCorporation,
    /// Branch office of a for-profit corporation (code 85).
    #[display("for-profit corporation (branch)")]
    ForProfitCorporateBranch,
    /// Codes with no published meaning (00, 80, 83, 84, 89).
    #[display("undefined")]
    Undefined,
}

impl BusinessEntityType {
    /// Classifies a two-digit entity type code.
    ///
    /// # Errors
    ///
    /// [`KbrnError::InvalidEntityTypeCode`] when `code` is not exactly
    /// two ASCII digits.
    ///
    /// # Examples
    ///
    /// ```
    /// use kbrn::BusinessEntityType;
    ///
    /// let entity_type = BusinessEntityType::from_code("82")?;
    /// assert_eq!(entity_type, BusinessEntityType::NonProfitCorporation);
    /// # Ok::<(), kbrn::KbrnError>(())
    /// ```
    pub fn from_code(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(KbrnError::InvalidEntityTypeCode {
                value: code.to_owned(),
            });
        }
        Ok(Self::classify((bytes[0] - b'0') * 10 + (bytes[1] - b'0')))
    }

    /// Total classification over numeric codes; anything above 99 or in
    /// an unpublished gap maps to `Undefined`.
    pub(crate) fn classify(code: u8) -> Self {
        match code {
            1..=79 => Self::IndividualTaxable,
            90..=99 => Self::IndividualTaxExempt,
            81 | 86 | 87 | 88 => Self::ForProfitCorporateHq,
            82 => Self::NonProfitCorporation,
            85 => Self::ForProfitCorporateBranch,
            _ => Self::Undefined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_published_ranges() {
        assert_eq!(
            BusinessEntityType::from_code("01").unwrap(),
            BusinessEntityType::IndividualTaxable
        );
        assert_eq!(
            BusinessEntityType::from_code("79").unwrap(),
            BusinessEntityType::IndividualTaxable
        );
        assert_eq!(
            BusinessEntityType::from_code("90").unwrap(),
            BusinessEntityType::IndividualTaxExempt
        );
        assert_eq!(
            BusinessEntityType::from_code("99").unwrap(),
            BusinessEntityType::IndividualTaxExempt
        );
        for code in ["81", "86", "87", "88"] {
            assert_eq!(
                BusinessEntityType::from_code(code).unwrap(),
                BusinessEntityType::ForProfitCorporateHq
            );
        }
        assert_eq!(
            BusinessEntityType::from_code("82").unwrap(),
            BusinessEntityType::NonProfitCorporation
        );
        assert_eq!(
            BusinessEntityType::from_code("85").unwrap(),
            BusinessEntityType::ForProfitCorporateBranch
        );
    }

    #[test]
    fn classifies_gaps_as_undefined() {
        for code in ["00", "80", "83", "84", "89"] {
            assert_eq!(
                BusinessEntityType::from_code(code).unwrap(),
                BusinessEntityType::Undefined
            );
        }
    }

    #[test]
    fn every_two_digit_code_classifies() {
        for code in 0..=99u8 {
            let formatted = format!("{code:02}");
            assert!(BusinessEntityType::from_code(&formatted).is_ok());
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["", "8", "820", "8a", "-1", "  ", "８２"] {
            assert_eq!(
                BusinessEntityType::from_code(code),
                Err(KbrnError::InvalidEntityTypeCode {
                    value: code.to_owned()
                })
            );
        }
    }

    #[test]
    fn renders_human_readable_names() {
        assert_eq!(
            BusinessEntityType::NonProfitCorporation.to_string(),
            "non-profit corporation"
        );
        assert_eq!(BusinessEntityType::Undefined.to_string(), "undefined");
    }
}
