//! End-to-end parsing behavior across valid and invalid inputs
//!
//! The valid fixtures below are real-shaped numbers whose check digits
//! satisfy the weighted-sum scheme, covering every business entity
//! category.

use kbrn::{BusinessEntityType, Kbrn, KbrnError};
use rstest::rstest;

#[rstest]
#[case("1208147521", "120-81-47521")]
#[case("2208162517", "220-81-62517")]
#[case("1018131028", "101-81-31028")]
#[case("3128600019", "312-86-00019")]
#[case("2148751230", "214-87-51230")]
#[case("4899001237", "489-90-01237")]
#[case("6099145501", "609-91-45501")]
#[case("1304100997", "130-41-00997")]
#[case("5285123459", "528-51-23459")]
#[case("1101829992", "110-18-29992")]
#[case("3058234565", "305-82-34565")]
#[case("7770791236", "777-07-91236")]
#[case("9999999997", "999-99-99997")]
#[case("0000000000", "000-00-00000")]
fn accepts_valid_numbers_in_both_forms(#[case] plain: &str, #[case] delimited: &str) {
    let from_plain = Kbrn::parse(plain).unwrap();
    let from_delimited = Kbrn::parse(delimited).unwrap();

    assert_eq!(from_plain, from_delimited);
    assert_eq!(from_plain.plain_value(), plain);
    assert_eq!(from_plain.delimited_value(), delimited);
    assert_eq!(from_delimited.plain_value(), plain);
    assert!(from_plain.has_valid_checksum());
}

#[rstest]
#[case("1208147521", BusinessEntityType::ForProfitCorporateHq)]
#[case("2148751230", BusinessEntityType::ForProfitCorporateHq)]
#[case("4899001237", BusinessEntityType::IndividualTaxExempt)]
#[case("1304100997", BusinessEntityType::IndividualTaxable)]
#[case("3058234565", BusinessEntityType::NonProfitCorporation)]
#[case("7770791236", BusinessEntityType::IndividualTaxable)]
#[case("0000000000", BusinessEntityType::Undefined)]
fn derives_the_entity_type(#[case] value: &str, #[case] expected: BusinessEntityType) {
    assert_eq!(Kbrn::parse(value).unwrap().entity_type(), expected);
}

#[test]
fn decomposes_a_known_number() {
    let number = Kbrn::parse("1208147521").unwrap();
    assert_eq!(number.serial_prefix(), "120");
    assert_eq!(number.entity_type_code(), "81");
    assert_eq!(number.serial_suffix(), "47521");
    assert_eq!(number.body(), "120814752");
    assert_eq!(number.check_digit(), '1');
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("22081625170")] // eleven digits
#[case("120814752")] // nine digits
#[case("120-814-7521")] // hyphens in the wrong places
#[case("12-08-147521")]
#[case("1-208-147521")]
#[case("120-81-475211")]
#[case("120_81_47521")] // wrong delimiter
#[case("120.81.47521")]
#[case("12a8147521")] // letters
#[case("abc-de-fghij")]
#[case(" 1208147521")] // stray whitespace
#[case("1208147521 ")]
#[case("120- 81-47521")]
fn rejects_malformed_shapes_with_a_format_error(#[case] value: &str) {
    let result = Kbrn::parse(value);
    assert!(
        matches!(result, Err(KbrnError::InvalidFormat { .. })),
        "expected InvalidFormat for {value:?}, got {result:?}"
    );
    assert!(!Kbrn::is_valid(value));
}

#[rstest]
#[case("1208147521")]
#[case("2208162517")]
#[case("5285123459")]
fn rejects_every_wrong_check_digit(#[case] valid: &str) {
    let body = &valid[..9];
    let actual = valid.as_bytes()[9];
    for digit in b'0'..=b'9' {
        if digit == actual {
            continue;
        }
        let mutated = format!("{}{}", body, char::from(digit));
        assert!(
            matches!(
                Kbrn::parse(&mutated),
                Err(KbrnError::ChecksumMismatch { .. })
            ),
            "expected ChecksumMismatch for {mutated:?}"
        );
    }
}

#[test]
fn checksum_failure_reports_both_digits() {
    assert_eq!(
        Kbrn::parse("120-81-47520"),
        Err(KbrnError::ChecksumMismatch {
            value: "1208147520".to_owned(),
            expected: '1',
            found: '0',
        })
    );
}

#[test]
fn serde_round_trips_through_the_delimited_form() {
    let number = Kbrn::parse("220-81-62517").unwrap();
    let json = serde_json::to_string(&number).unwrap();
    assert_eq!(json, "\"220-81-62517\"");
    assert_eq!(serde_json::from_str::<Kbrn>(&json).unwrap(), number);
}
