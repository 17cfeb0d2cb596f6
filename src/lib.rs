//! Validation, normalization, and decomposition of Korean Business
//! Registration Numbers (KBRN).
//!
//! A KBRN is a ten-digit identifier with an embedded check digit and a
//! fixed substructure: a three-digit serial prefix, a two-digit business
//! entity type code, and a five-digit serial suffix whose last digit is
//! the check digit. Two textual forms are accepted everywhere: the plain
//! form (`1208147521`) and the hyphen-delimited 3-2-5 form
//! (`120-81-47521`).
//!
//! [`Kbrn`] is the validated value object; it can only be constructed
//! through parsing, so every instance is well-formed with a correct
//! check digit. The underlying format rules, checksum algorithm, and
//! entity-type classification are also exposed directly for callers
//! that want the pieces without the type.
//!
//! ```
//! use kbrn::{BusinessEntityType, Kbrn};
//!
//! let number = Kbrn::parse("120-81-47521")?;
//! assert_eq!(number.plain_value(), "1208147521");
//! assert_eq!(number.serial_prefix(), "120");
//! assert_eq!(number.entity_type_code(), "81");
//! assert_eq!(number.entity_type(), BusinessEntityType::ForProfitCorporateHq);
//! # Ok::<(), kbrn::KbrnError>(())
//! ```
//!
//! Everything in this crate is a pure computation over immutable values;
//! all types are `Send + Sync` and safe to use from any thread.

pub mod checksum;
pub mod entity_type;
pub mod error;
pub mod format;
pub mod kbrn;
pub mod serde_support;

pub use entity_type::BusinessEntityType;
pub use error::{KbrnError, Result};
pub use kbrn::Kbrn;
