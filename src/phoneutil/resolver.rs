use std::sync::Arc;

use log::trace;

use crate::country::CountryDirectory;

/// Maximum number of digits a country calling code can occupy.
pub(crate) const MAX_COUNTRY_CODE_LENGTH: usize = 3;

/// Strategy deciding where the country calling code ends in the digit string
/// that followed a `+`. Isolated behind a trait so the directory-backed and
/// the fixed-width variants can be swapped without touching the parser.
pub(crate) trait CountryCodeResolver {
    /// Splits `digits` into `(country_code, rest)`. Returns `None` when
    /// `digits` holds nothing to split.
    fn split_country_code<'a>(&self, digits: &'a str) -> Option<(&'a str, &'a str)>;
}

/// Longest-prefix match against the dialing codes of a directory. When no
/// record matches, the split degrades to the fixed-width assumption instead
/// of failing.
pub(crate) struct DirectoryResolver {
    directory: Arc<CountryDirectory>,
}

impl DirectoryResolver {
    pub fn new(directory: Arc<CountryDirectory>) -> Self {
        Self { directory }
    }
}

impl CountryCodeResolver for DirectoryResolver {
    fn split_country_code<'a>(&self, digits: &'a str) -> Option<(&'a str, &'a str)> {
        let longest = digits.len().min(MAX_COUNTRY_CODE_LENGTH);
        for width in (1..=longest).rev() {
            let (code, rest) = digits.split_at(width);
            if self.directory.contains_dialing_code(code) {
                return Some((code, rest));
            }
        }
        trace!("no dialing code matches '{digits}', assuming a one-digit country code");
        FixedWidthResolver.split_country_code(digits)
    }
}

/// Used when no directory was supplied. Assumes a one-digit country code.
pub(crate) struct FixedWidthResolver;

impl CountryCodeResolver for FixedWidthResolver {
    fn split_country_code<'a>(&self, digits: &'a str) -> Option<(&'a str, &'a str)> {
        if digits.is_empty() {
            None
        } else {
            Some(digits.split_at(1))
        }
    }
}
