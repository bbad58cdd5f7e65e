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

use thiserror::Error;

/// Helper type for fallible engine operations.
pub type Result<T> = std::result::Result<T, PhoneNumberError>;

/// Input-validation failures raised while building a phone number value.
/// Every variant is a caller mistake; nothing here is an internal condition
/// worth panicking over.
///
/// The checks run in a fixed order: a blank subscriber number is reported
/// before a missing country code, and a missing area code is only reported
/// once the country code resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    /// The subscriber number was empty.
    #[error("Must enter number")]
    BlankNumber,
    /// No explicit country code and no default to fall back on.
    #[error("Must enter country code or set a default country code")]
    CountryCode,
    /// No explicit area code and no default to fall back on.
    #[error("Must enter area code or set a default area code")]
    AreaCode,
}
