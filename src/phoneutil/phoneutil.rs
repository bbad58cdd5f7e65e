// Copyright (C) 2026 Phoner Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use log::trace;

use crate::country::CountryDirectory;

use super::errors::{PhoneNumberError, Result};
use super::phone_number::PhoneNumber;
use super::phone_regexps::PhoneRegExps;
use super::resolver::{
    CountryCodeResolver, DirectoryResolver, FixedWidthResolver, MAX_COUNTRY_CODE_LENGTH,
};

/// Digits taken for the area code when splitting a bare digit string.
const AREA_CODE_WIDTH: usize = 3;
/// Longest area code the validity shape check accepts.
const MAX_AREA_CODE_DIGITS: usize = 5;
/// Subscriber-number length bounds accepted by the validity shape check.
const MIN_SUBSCRIBER_DIGITS: usize = 3;
const MAX_SUBSCRIBER_DIGITS: usize = 10;

/// Strips punctuation noise from a phone number and resolves international
/// prefixes. Returns `None` for empty input; the input itself is never
/// modified.
///
/// A literal `(0)` group at the very start is deleted entirely. Every
/// character that is not an ASCII digit or a leading `+` is dropped. A
/// leading `00`, `+0` or `+00` collapses to a single `+`, while a bare
/// single leading `0` is a domestic trunk prefix and is dropped without
/// producing a `+`.
///
/// ```
/// assert_eq!(phoner::normalize("(0)512-5486").as_deref(), Some("5125486"));
/// assert_eq!(phoner::normalize("00512-5486").as_deref(), Some("+5125486"));
/// ```
pub fn normalize(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    let text = text.strip_prefix("(0)").unwrap_or(text);
    let mut cleaned = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_digit() || (ch == '+' && cleaned.is_empty()) {
            cleaned.push(ch);
        }
    }
    if let Some(digits) = cleaned.strip_prefix('+') {
        return Some(fast_cat::concat_str!("+", digits.trim_start_matches('0')));
    }
    if let Some(digits) = cleaned.strip_prefix("00") {
        return Some(fast_cat::concat_str!("+", digits.trim_start_matches('0')));
    }
    if let Some(digits) = cleaned.strip_prefix('0') {
        return Some(digits.to_owned());
    }
    Some(cleaned)
}

/// The phone number engine.
///
/// Owns the default country/area configuration, the country-code resolution
/// strategy and the parsing regexes. Defaults are read at the moment a
/// number is constructed or parsed; changing them afterwards does not touch
/// numbers that already exist.
pub struct PhoneUtil {
    default_country_code: Option<String>,
    default_area_code: Option<String>,
    resolver: Box<dyn CountryCodeResolver>,
    reg_exps: PhoneRegExps,
}

impl Default for PhoneUtil {
    fn default() -> Self {
        Self::new()
    }
}

impl PhoneUtil {
    /// An engine without directory data. Country-code boundaries fall back
    /// to the fixed one-digit assumption.
    pub fn new() -> Self {
        Self {
            default_country_code: None,
            default_area_code: None,
            resolver: Box::new(FixedWidthResolver),
            reg_exps: PhoneRegExps::new(),
        }
    }

    /// An engine that resolves country codes by longest-prefix match against
    /// the given directory. Pass [`CountryDirectory::global`]'s value to use
    /// the process-wide table.
    pub fn with_directory(directory: Arc<CountryDirectory>) -> Self {
        let mut util = Self::new();
        util.resolver = Box::new(DirectoryResolver::new(directory));
        util
    }

    /// Chaining helper for setting the default country code up front.
    pub fn with_default_country_code(mut self, country_code: &str) -> Self {
        self.default_country_code = Some(country_code.to_owned());
        self
    }

    /// Chaining helper for setting the default area code up front.
    pub fn with_default_area_code(mut self, area_code: &str) -> Self {
        self.default_area_code = Some(area_code.to_owned());
        self
    }

    pub fn default_country_code(&self) -> Option<&str> {
        self.default_country_code.as_deref()
    }

    pub fn set_default_country_code(&mut self, country_code: Option<&str>) {
        self.default_country_code = country_code.map(str::to_owned);
    }

    pub fn default_area_code(&self) -> Option<&str> {
        self.default_area_code.as_deref()
    }

    pub fn set_default_area_code(&mut self, area_code: Option<&str>) {
        self.default_area_code = area_code.map(str::to_owned);
    }

    /// Builds a number, falling back to the configured defaults for the
    /// codes that were not given.
    ///
    /// Check order is fixed: an empty `number` is rejected first, an
    /// unresolvable country code next and an unresolvable area code last,
    /// so a call missing both codes with no defaults reports the country
    /// code. `number` and `extension` are stored verbatim.
    pub fn construct(
        &self,
        number: &str,
        area_code: Option<&str>,
        country_code: Option<&str>,
        extension: Option<&str>,
    ) -> Result<PhoneNumber> {
        if number.is_empty() {
            return Err(PhoneNumberError::BlankNumber);
        }
        let country_code = country_code
            .or(self.default_country_code.as_deref())
            .ok_or(PhoneNumberError::CountryCode)?;
        let area_code = area_code
            .or(self.default_area_code.as_deref())
            .ok_or(PhoneNumberError::AreaCode)?;
        PhoneNumber::with_extension(number, area_code, country_code, extension)
    }

    /// Parses free-form text into a [`PhoneNumber`].
    ///
    /// Returns `Ok(None)` for empty input. A trailing extension marker is
    /// extracted first, the remainder is normalized, the country code is
    /// split off by the configured resolver when the text carried a `+`,
    /// and the result goes through [`PhoneUtil::construct`], whose errors
    /// propagate unchanged. The input is never modified.
    pub fn parse(&self, text: &str) -> Result<Option<PhoneNumber>> {
        self.parse_with_fallback(text, None)
    }

    fn parse_with_fallback(
        &self,
        text: &str,
        fallback_country_code: Option<&str>,
    ) -> Result<Option<PhoneNumber>> {
        if text.is_empty() {
            return Ok(None);
        }
        let (remainder, extension) = self.strip_extension(text);
        let Some(normalized) = normalize(remainder) else {
            return Ok(None);
        };
        trace!("normalized '{text}' to '{normalized}'");
        let (country_code, rest) = match normalized.strip_prefix('+') {
            Some(digits) => match self.resolver.split_country_code(digits) {
                Some((code, rest)) => (Some(code), rest),
                None => (None, digits),
            },
            // Without an international prefix the whole string is domestic;
            // the country code comes from the defaults or not at all.
            None => (None, normalized.as_str()),
        };
        let country_code = country_code.or(fallback_country_code);
        let (area_code, number) = split_area_code(rest);
        self.construct(number, area_code, country_code, extension)
            .map(Some)
    }

    /// Splits a trailing extension off `text`. Returns the remaining slice
    /// and the extension digits, if any.
    fn strip_extension<'a>(&self, text: &'a str) -> (&'a str, Option<&'a str>) {
        match self.reg_exps.extension_pattern.captures(text) {
            Some(caps) => {
                let matched = caps.get(0).expect("group 0 always present");
                let digits = caps.get(1).map(|m| m.as_str());
                (&text[..matched.start()], digits)
            }
            None => (text, None),
        }
    }

    /// Whether `text` parses into a plausibly shaped phone number. Never
    /// panics and never returns an error; every parse failure reads as
    /// `false`.
    pub fn is_valid(&self, text: &str) -> bool {
        self.validity_of(text, None)
    }

    /// Like [`PhoneUtil::is_valid`], with `country_code` acting as a
    /// fallback default country code for this one call. The engine
    /// configuration is left untouched.
    pub fn is_valid_with_country_code(&self, text: &str, country_code: &str) -> bool {
        self.validity_of(text, Some(country_code))
    }

    fn validity_of(&self, text: &str, fallback_country_code: Option<&str>) -> bool {
        match self.parse_with_fallback(text, fallback_country_code) {
            Ok(Some(number)) => self.passes_shape_check(&number),
            Ok(None) | Err(_) => false,
        }
    }

    fn passes_shape_check(&self, number: &PhoneNumber) -> bool {
        let digits = &self.reg_exps.digits_pattern;
        digits.is_match(number.country_code())
            && number.country_code().len() <= MAX_COUNTRY_CODE_LENGTH
            && digits.is_match(number.area_code())
            && number.area_code().len() <= MAX_AREA_CODE_DIGITS
            && digits.is_match(number.number())
            && (MIN_SUBSCRIBER_DIGITS..=MAX_SUBSCRIBER_DIGITS).contains(&number.number().len())
            && number.extension().map_or(true, |ext| digits.is_match(ext))
    }
}

/// The first [`AREA_CODE_WIDTH`] digits are the area code when enough digits
/// remain for a subscriber number. Shorter remainders keep everything as the
/// subscriber number so a default area code can take over.
fn split_area_code(digits: &str) -> (Option<&str>, &str) {
    if digits.len() > AREA_CODE_WIDTH {
        let (area_code, number) = digits.split_at(AREA_CODE_WIDTH);
        (Some(area_code), number)
    } else {
        (None, digits)
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize, split_area_code};

    #[test]
    fn normalize_keeps_only_digits_and_a_leading_plus() {
        assert_eq!(normalize("+1 545-545-5454").as_deref(), Some("+15455455454"));
        assert_eq!(normalize("091/512-5486").as_deref(), Some("915125486"));
    }

    #[test]
    fn normalize_empty_input_is_none() {
        assert_eq!(normalize(""), None);
    }

    #[test]
    fn short_remainders_are_all_subscriber_number() {
        assert_eq!(split_area_code("123"), (None, "123"));
        assert_eq!(split_area_code("1234"), (Some("123"), "4"));
    }
}
