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

//! Document structure for parsed configuration files.

use std::collections::BTreeMap;

/// The value(s) bound to one option name within a section.
///
/// An option declared with no delimiter holds no value at all (`Absent`),
/// which is distinct from an empty string. The first valued declaration
/// produces `Single`; the moment the same (section, option) pair is declared
/// again the value is promoted to `Multi`, and it never reverts. Occurrence
/// order is preserved exactly as encountered in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OptionValue {
    /// Declared without a value.
    Absent,
    /// Exactly one value was ever assigned.
    Single(String),
    /// One value per occurrence, in source order.
    Multi(Vec<String>),
}

impl OptionValue {
    /// Append one more occurrence, promoting `Single` to `Multi`.
    ///
    /// ```rust
    /// use multini_core::OptionValue;
    ///
    /// let mut value = OptionValue::Single("a".to_string());
    /// value.push("b".to_string());
    /// assert_eq!(value, OptionValue::Multi(vec!["a".to_string(), "b".to_string()]));
    /// ```
    pub fn push(&mut self, value: String) {
        match self {
            Self::Absent => *self = Self::Single(value),
            Self::Single(first) => {
                let first = std::mem::take(first);
                *self = Self::Multi(vec![first, value]);
            }
            Self::Multi(values) => values.push(value),
        }
    }

    /// The normalized value list: `Absent` is empty, `Single` has one
    /// element, `Multi` is its list as-is.
    pub fn normalized(&self) -> Vec<&str> {
        match self {
            Self::Absent => Vec::new(),
            Self::Single(v) => vec![v.as_str()],
            Self::Multi(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Number of values held (0 for `Absent`).
    pub fn len(&self) -> usize {
        match self {
            Self::Absent => 0,
            Self::Single(_) => 1,
            Self::Multi(values) => values.len(),
        }
    }

    /// Returns true if no value is held.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the option was declared without a value.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Try to get the value as a single string.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            _ => None,
        }
    }
}

/// A named group of options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Section {
    options: BTreeMap<String, OptionValue>,
}

impl Section {
    pub(crate) fn from_options(options: BTreeMap<String, OptionValue>) -> Self {
        Self { options }
    }

    /// Get an option's value. Names are matched case-normalized (lowercase).
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(&name.to_lowercase())
    }

    /// Iterate option names in sorted order.
    pub fn option_names(&self) -> impl Iterator<Item = &str> {
        self.options.keys().map(String::as_str)
    }

    /// Iterate (name, value) pairs in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.options.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every option's normalized value list, keyed by option name.
    ///
    /// This is the form the downstream section-splitting consumer reads.
    pub fn normalized_values(&self) -> BTreeMap<String, Vec<String>> {
        self.options
            .iter()
            .map(|(name, value)| {
                let values = value.normalized().iter().map(|v| v.to_string()).collect();
                (name.clone(), values)
            })
            .collect()
    }

    /// Number of options in the section.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the section holds no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// A parsed configuration document.
///
/// Built incrementally by the parser and read-only once the scan completes.
/// The distinguished default section is held apart from the named sections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Document {
    defaults: Section,
    sections: BTreeMap<String, Section>,
}

impl Document {
    pub(crate) fn from_parts(defaults: Section, sections: BTreeMap<String, Section>) -> Self {
        Self { defaults, sections }
    }

    /// The shared defaults bucket (options under the default section header).
    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    /// Get a named section.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Iterate section names in sorted order. The defaults bucket is not a
    /// named section and is never listed here.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterate (name, section) pairs in sorted order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Normalized value lists for a named section, or `None` if absent.
    pub fn normalized(&self, name: &str) -> Option<BTreeMap<String, Vec<String>>> {
        self.sections.get(name).map(Section::normalized_values)
    }

    /// Number of named sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns true if no named section was parsed.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
