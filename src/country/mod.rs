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

//! The country dialing-code reference table.
//!
//! The table data itself comes from an external collaborator; this module
//! only stores the records and answers lookups against them.

use std::sync::{Arc, OnceLock};

use log::debug;

/// One row of the dialing-code reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRecord {
    /// Human readable country name.
    pub name: String,
    /// Two-letter ISO 3166-1 code. Lookups compare it case-insensitively.
    pub isocode: String,
    /// International dialing code. Not unique; shared-code territories exist.
    pub country_code: String,
}

impl CountryRecord {
    pub fn new(name: &str, isocode: &str, country_code: &str) -> Self {
        Self {
            name: name.to_owned(),
            isocode: isocode.to_owned(),
            country_code: country_code.to_owned(),
        }
    }
}

/// In-memory collection of [`CountryRecord`]s.
///
/// A directory can be built directly with [`CountryDirectory::from_records`],
/// or populated once per process through [`CountryDirectory::load`]. Queries
/// never load implicitly; callers that rely on the process-wide directory
/// must call `load` first.
#[derive(Debug, Default)]
pub struct CountryDirectory {
    records: Vec<CountryRecord>,
}

static GLOBAL_DIRECTORY: OnceLock<Arc<CountryDirectory>> = OnceLock::new();

impl CountryDirectory {
    /// Builds a directory from any iterable of records.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = CountryRecord>,
    {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Populates the process-wide directory exactly once. Records passed to
    /// later calls are ignored and the call degrades to an accessor.
    pub fn load<I>(records: I) -> Arc<CountryDirectory>
    where
        I: IntoIterator<Item = CountryRecord>,
    {
        if GLOBAL_DIRECTORY.get().is_some() {
            debug!("country directory is already loaded, ignoring the new records");
        }
        Arc::clone(GLOBAL_DIRECTORY.get_or_init(|| Arc::new(Self::from_records(records))))
    }

    /// The process-wide directory, `None` until [`CountryDirectory::load`]
    /// has run.
    pub fn global() -> Option<Arc<CountryDirectory>> {
        GLOBAL_DIRECTORY.get().map(Arc::clone)
    }

    /// First record whose ISO code matches, ignoring ASCII case.
    pub fn find_by_isocode(&self, isocode: &str) -> Option<&CountryRecord> {
        self.records
            .iter()
            .find(|record| record.isocode.eq_ignore_ascii_case(isocode))
    }

    /// Whether any record carries exactly this dialing code.
    pub fn contains_dialing_code(&self, country_code: &str) -> bool {
        self.records
            .iter()
            .any(|record| record.country_code == country_code)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
