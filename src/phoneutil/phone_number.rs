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

use std::fmt;

use super::errors::{PhoneNumberError, Result};
use super::formats::NamedFormat;

/// An immutable phone number value.
///
/// `country_code`, `area_code` and `number` are mandatory and non-empty once
/// a value exists; construction fails before the invariant could be broken.
/// The extension is optional, and an empty extension is normalized to absent
/// so equality cannot tell the two apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber {
    country_code: String,
    area_code: String,
    number: String,
    extension: Option<String>,
}

impl PhoneNumber {
    /// Builds a number with every field given explicitly.
    pub fn new(number: &str, area_code: &str, country_code: &str) -> Result<Self> {
        Self::with_extension(number, area_code, country_code, None)
    }

    /// Builds a number with an optional extension.
    ///
    /// The field checks run in a fixed order: blank subscriber number first,
    /// then missing country code, then missing area code.
    pub fn with_extension(
        number: &str,
        area_code: &str,
        country_code: &str,
        extension: Option<&str>,
    ) -> Result<Self> {
        if number.is_empty() {
            return Err(PhoneNumberError::BlankNumber);
        }
        if country_code.is_empty() {
            return Err(PhoneNumberError::CountryCode);
        }
        if area_code.is_empty() {
            return Err(PhoneNumberError::AreaCode);
        }
        Ok(Self {
            country_code: country_code.to_owned(),
            area_code: area_code.to_owned(),
            number: number.to_owned(),
            extension: extension.filter(|e| !e.is_empty()).map(str::to_owned),
        })
    }

    /// Country dialing code, digits only, no leading `+`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Area code, digits only, no trunk prefix.
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// Subscriber number.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Canonical `+<country><area><number>` form with no separators. The
    /// extension is not part of the canonical form.
    pub fn canonical(&self) -> String {
        fast_cat::concat_str!(
            "+",
            self.country_code.as_str(),
            self.area_code.as_str(),
            self.number.as_str()
        )
    }

    /// Renders the number through a template, scanned left to right.
    ///
    /// Specifiers: `%c` country code, `%a` area code, `%A` area code with a
    /// literal leading `0`, `%n` subscriber number, `%f`/`%l` first/second
    /// half of the subscriber number, `%x` extension (empty when absent) and
    /// `%d{...}`, a block emitted only when an extension is present.
    /// Specifiers inside a `%d` block are substituted as usual. Everything
    /// else, including unrecognized specifiers, is copied through verbatim;
    /// formatting never fails.
    pub fn format(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len() + 16);
        let mut chars = template.chars().peekable();
        while let Some(ch) = chars.next() {
            if ch != '%' {
                out.push(ch);
                continue;
            }
            match chars.next() {
                Some('c') => out.push_str(&self.country_code),
                Some('a') => out.push_str(&self.area_code),
                Some('A') => {
                    out.push('0');
                    out.push_str(&self.area_code);
                }
                Some('n') => out.push_str(&self.number),
                Some('f') => out.push_str(self.number_halves().0),
                Some('l') => out.push_str(self.number_halves().1),
                Some('x') => {
                    if let Some(extension) = &self.extension {
                        out.push_str(extension);
                    }
                }
                Some('d') => {
                    if chars.peek() != Some(&'{') {
                        out.push_str("%d");
                        continue;
                    }
                    chars.next();
                    let mut block = String::new();
                    let mut closed = false;
                    for inner in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        block.push(inner);
                    }
                    if !closed {
                        // An unterminated block is kept as literal text.
                        out.push_str("%d{");
                        out.push_str(&block);
                    } else if self.extension.is_some() {
                        out.push_str(&self.format(&block));
                    }
                }
                Some(other) => {
                    out.push('%');
                    out.push(other);
                }
                None => out.push('%'),
            }
        }
        out
    }

    /// Renders through one of the preset templates.
    pub fn format_named(&self, preset: NamedFormat) -> String {
        self.format(preset.template())
    }

    /// Splits the subscriber number at its midpoint, the extra digit of an
    /// odd-length number going to the second half: `5125486` reads `512-5486`.
    fn number_halves(&self) -> (&str, &str) {
        let mut mid = self.number.len() / 2;
        while !self.number.is_char_boundary(mid) {
            mid -= 1;
        }
        self.number.split_at(mid)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical())
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneNumber;
    use crate::phoneutil::errors::PhoneNumberError;

    fn number() -> PhoneNumber {
        PhoneNumber::new("5125486", "91", "385").unwrap()
    }

    #[test]
    fn construction_checks_fields_in_order() {
        assert_eq!(
            PhoneNumber::new("", "", ""),
            Err(PhoneNumberError::BlankNumber)
        );
        assert_eq!(
            PhoneNumber::new("5125486", "", ""),
            Err(PhoneNumberError::CountryCode)
        );
        assert_eq!(
            PhoneNumber::new("5125486", "", "385"),
            Err(PhoneNumberError::AreaCode)
        );
    }

    #[test]
    fn empty_extension_is_absent() {
        let explicit = PhoneNumber::with_extension("5125486", "91", "385", Some("")).unwrap();
        assert_eq!(explicit.extension(), None);
        assert_eq!(explicit, number());
    }

    #[test]
    fn halves_split_gives_the_extra_digit_to_the_second_half() {
        assert_eq!(number().format("%f-%l"), "512-5486");
        let even = PhoneNumber::new("123456", "91", "385").unwrap();
        assert_eq!(even.format("%f-%l"), "123-456");
    }

    #[test]
    fn unrecognized_specifiers_pass_through() {
        assert_eq!(number().format("%z%c"), "%z385");
        assert_eq!(number().format("100%"), "100%");
    }

    #[test]
    fn unterminated_conditional_block_is_literal() {
        assert_eq!(number().format("%n%d{ #"), "5125486%d{ #");
    }

    #[test]
    fn conditional_block_substitutes_nested_specifiers() {
        let with_ext = PhoneNumber::with_extension("5125486", "91", "385", Some("42")).unwrap();
        assert_eq!(with_ext.format("%n%d{ ext. %x}"), "5125486 ext. 42");
        assert_eq!(number().format("%n%d{ ext. %x}"), "5125486");
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(number().to_string(), "+385915125486");
        assert_eq!(number().canonical(), number().format("+%c%a%n"));
    }
}
