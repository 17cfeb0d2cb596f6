//! Field-level serde policies for KBRN values
//!
//! The [`Kbrn`](crate::Kbrn) `Deserialize` impl treats any invalid
//! string as a hard error. External payloads, however, often encode
//! "no value" as an empty string rather than null. That softer policy
//! belongs to the adapter layer, not the core type, so it is offered
//! here as an opt-in field attribute instead of a default.

/// Serde policy for `Option<Kbrn>` fields where the empty string means
/// "absent".
///
/// Serializes `Some` as the delimited string and `None` as null.
/// Deserializes null and `""` to `None`; a present-but-invalid string
/// is still a hard error, and a non-string token is a type error.
///
/// # Examples
///
/// ```
/// use kbrn::Kbrn;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Registration {
///     #[serde(default, with = "kbrn::serde_support::optional")]
///     number: Option<Kbrn>,
/// }
///
/// let present: Registration = serde_json::from_str(r#"{"number": "120-81-47521"}"#)?;
/// assert!(present.number.is_some());
///
/// let empty: Registration = serde_json::from_str(r#"{"number": ""}"#)?;
/// assert!(empty.number.is_none());
/// # Ok::<(), serde_json::Error>(())
/// ```
pub mod optional {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::kbrn::Kbrn;

    pub fn serialize<S>(value: &Option<Kbrn>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(number) => serializer.serialize_some(&number.delimited_value()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Kbrn>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(value) => Kbrn::parse(value).map(Some).map_err(D::Error::custom),
        }
    }
}
