//! Check digit computation for KBRN bodies
//!
//! The tenth digit of a KBRN is a check digit over the first nine. Each
//! body digit is multiplied by its positional weight, the product of the
//! ninth digit and 5 contributes an extra `floor(d9 * 5 / 10)` correction,
//! and the check digit is the tens' complement of the total modulo 10.
//! All arithmetic is unsigned integer arithmetic.

use crate::error::{KbrnError, Result};
use crate::format;

/// Positional weights applied to the nine digits of a KBRN body.
pub const WEIGHTS: [u32; 9] = [1, 3, 7, 1, 3, 7, 1, 3, 5];

/// Computes the check digit for a nine-digit KBRN body.
///
/// # Errors
///
/// [`KbrnError::InvalidBodyLength`] when `body` is not exactly nine
/// characters, [`KbrnError::NonDigitCharacter`] when any character is
/// outside `0-9`.
pub fn checksum(body: &str) -> Result<char> {
    let chars: Vec<char> = body.chars().collect();
    if chars.len() != 9 {
        return Err(KbrnError::InvalidBodyLength {
            actual: chars.len(),
        });
    }

    let mut digits = [0u32; 9];
    for (slot, ch) in digits.iter_mut().zip(&chars) {
        *slot = ch
            .to_digit(10)
            .ok_or(KbrnError::NonDigitCharacter { found: *ch })?;
    }

    let weighted: u32 = digits.iter().zip(WEIGHTS).map(|(digit, weight)| digit * weight).sum();
    let correction = digits[8] * 5 / 10;
    let check = (10 - (weighted + correction) % 10) % 10;

    // check < 10, so this always lands on an ASCII digit
    Ok(char::from(b'0' + check as u8))
}

/// Tests whether a KBRN string carries a valid check digit.
///
/// Accepts both textual forms; delimited input is normalized to plain
/// form before the check digit is recomputed.
///
/// # Errors
///
/// [`KbrnError::InvalidFormat`] when `value` is in neither accepted form.
pub fn has_valid_checksum(value: &str) -> Result<bool> {
    let plain = format::to_plain(value)?;
    let expected = checksum(&plain[..9])?;
    Ok(char::from(plain.as_bytes()[9]) == expected)
}
