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

use regex::Regex;

/// Helper struct holding the fixed regular expressions used by the engine.
pub(super) struct PhoneRegExps {
    /// Trailing extension marker: `ext`, `ext.` or `x`, case-insensitive,
    /// optionally surrounded by spaces and punctuation, followed by the
    /// extension digits at the very end of the input. The digits are the
    /// only capture group.
    pub extension_pattern: Regex,

    /// Digit-only strings, used by the validity shape check.
    pub digits_pattern: Regex,
}

impl PhoneRegExps {
    pub fn new() -> Self {
        Self {
            extension_pattern: Regex::new(r"(?i)[\s.\-]*(?:ext\.?|x)[\s.\-:#]*(\d+)\s*$")
                .expect("Invalid constant pattern!"),
            digits_pattern: Regex::new(r"^\d+$").expect("Invalid constant pattern!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhoneRegExps;

    #[test]
    fn check_regexps_are_compiling() {
        PhoneRegExps::new();
    }

    #[test]
    fn extension_pattern_matches_common_markers() {
        let regexps = PhoneRegExps::new();
        for (text, extension) in [
            ("+1 545-545-5454 ext. 4307", "4307"),
            ("+1 (123) 456-7890 x321", "321"),
            ("5125486 EXT 99", "99"),
            ("5125486x42", "42"),
        ] {
            let caps = regexps.extension_pattern.captures(text).unwrap();
            assert_eq!(&caps[1], extension);
        }
        assert!(regexps
            .extension_pattern
            .captures("+1 545-545-5454")
            .is_none());
    }
}
