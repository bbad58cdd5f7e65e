//! Parsing, normalization, formatting and validation of international
//! phone numbers.
//!
//! The entry point is [`PhoneUtil`], which owns the default country/area
//! configuration and the parsing machinery. Parsed numbers come back as
//! immutable [`PhoneNumber`] values that render themselves through a small
//! template language or one of the [`NamedFormat`] presets.
//!
//! ```
//! use phoner::PhoneUtil;
//!
//! let util = PhoneUtil::new();
//! let number = util.parse("+1 545-545-5454 ext. 4307").unwrap().unwrap();
//! assert_eq!(number.to_string(), "+15455455454");
//! assert_eq!(number.extension(), Some("4307"));
//! ```

pub mod country;
mod phoneutil;

pub use phoneutil::errors::{PhoneNumberError, Result};
pub use phoneutil::formats::NamedFormat;
pub use phoneutil::phone_number::PhoneNumber;
pub use phoneutil::phoneutil::{normalize, PhoneUtil};

#[cfg(test)]
mod tests;
