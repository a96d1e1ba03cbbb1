// Multini - duplicate-key INI configuration parsing
//
// Copyright (c) 2025 Multini contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Section splitting for downstream consumers.
//!
//! Two section names are reserved as cross-cutting buckets: `default` holds
//! shared fallback values and `all` applies to every consumer. Both are
//! ordinary sections as far as the parser is concerned (and distinct from
//! the parser-level `DEFAULT` defaults bucket, which is configured via
//! [`ParseOptions::default_section_name`](multini_core::ParseOptions));
//! the split happens here, on the parsed document.

use multini_core::Document;
use std::collections::BTreeMap;

/// Section name reserved for shared fallback values.
pub const DEFAULT_SECTION: &str = "default";

/// Section name reserved for cross-cutting values.
pub const ALL_SECTION: &str = "all";

/// Section names never routed to the per-consumer bucket.
pub const RESERVED_SECTIONS: [&str; 2] = [DEFAULT_SECTION, ALL_SECTION];

/// A section's options as normalized value lists, keyed by option name.
pub type SectionValues = BTreeMap<String, Vec<String>>;

/// A parsed document split into its consumer-facing buckets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ConfigBuckets {
    /// Options of the reserved `default` section, if present.
    pub default: Option<SectionValues>,
    /// Options of the reserved `all` section, if present.
    pub all: Option<SectionValues>,
    /// Every non-reserved section, keyed by section name.
    pub rest: BTreeMap<String, SectionValues>,
}

impl ConfigBuckets {
    /// Returns true if no section landed in any bucket.
    pub fn is_empty(&self) -> bool {
        self.default.is_none() && self.all.is_none() && self.rest.is_empty()
    }
}

/// Split a parsed document into the `default`, `all`, and per-consumer
/// buckets.
///
/// Every option value comes out in normalized list form: a valueless option
/// is an empty list, a single-valued option a one-element list, a repeated
/// option its occurrences in source order.
///
/// ```rust
/// use multini::buckets::split;
///
/// let doc = multini::parse("[default]\nretries = 3\n[web]\nport = 80\nport = 8080\n").unwrap();
/// let buckets = split(&doc);
/// assert_eq!(buckets.default.unwrap()["retries"], vec!["3"]);
/// assert_eq!(buckets.rest["web"]["port"], vec!["80", "8080"]);
/// ```
pub fn split(doc: &Document) -> ConfigBuckets {
    let mut buckets = ConfigBuckets::default();
    for (name, section) in doc.sections() {
        let values = section.normalized_values();
        match name {
            DEFAULT_SECTION => buckets.default = Some(values),
            ALL_SECTION => buckets.all = Some(values),
            _ => {
                buckets.rest.insert(name.to_string(), values);
            }
        }
    }
    buckets
}
