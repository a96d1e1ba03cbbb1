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

//! Error types for configuration parsing.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErrorKind {
    /// An option or continuation line appeared before any section header.
    MissingSectionHeader,
    /// Re-declared section header in strict mode.
    DuplicateSection,
    /// Re-declared option within a section in strict mode.
    DuplicateOption,
    /// A line that matched no known line form.
    MalformedLine,
    /// Aggregated malformed-line failures raised at end of scan.
    Parse,
    /// I/O error (file operations).
    IO,
}

impl fmt::Display for ConfigErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSectionHeader => write!(f, "MissingSectionHeaderError"),
            Self::DuplicateSection => write!(f, "DuplicateSectionError"),
            Self::DuplicateOption => write!(f, "DuplicateOptionError"),
            Self::MalformedLine => write!(f, "MalformedLineError"),
            Self::Parse => write!(f, "ParseError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// One malformed line recorded during a scan.
///
/// Malformed option lines do not stop the scan; each one is recorded as a
/// `LineDefect` and the full ordered list is surfaced in a single
/// [`ConfigErrorKind::Parse`] error once the input has been fully consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDefect {
    /// Line number (1-based).
    pub line: usize,
    /// The raw text of the offending line.
    pub text: String,
}

impl LineDefect {
    /// Record a defect for a line.
    pub fn new(line: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

impl fmt::Display for LineDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?}", self.line, self.text)
    }
}

/// An error that occurred while parsing a configuration input.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct ConfigError {
    /// The kind of error.
    pub kind: ConfigErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based; the first offending line for aggregates).
    pub line: usize,
    /// Every recorded malformed line, in input order.
    ///
    /// Empty for all kinds except [`ConfigErrorKind::Parse`].
    pub defects: Vec<LineDefect>,
}

impl ConfigError {
    /// Create a new error.
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            defects: Vec::new(),
        }
    }

    /// An option-like line appeared before any section header.
    pub fn missing_section_header(line: usize, text: &str) -> Self {
        Self::new(
            ConfigErrorKind::MissingSectionHeader,
            format!("no section header before {text:?}"),
            line,
        )
    }

    /// A section was re-declared while strict duplicate checking is on.
    pub fn duplicate_section(name: &str, line: usize) -> Self {
        Self::new(
            ConfigErrorKind::DuplicateSection,
            format!("section {name:?} already declared"),
            line,
        )
    }

    /// An option was re-declared while strict duplicate checking is on.
    pub fn duplicate_option(section: &str, name: &str, line: usize) -> Self {
        Self::new(
            ConfigErrorKind::DuplicateOption,
            format!("option {name:?} in section {section:?} already declared"),
            line,
        )
    }

    /// Wrap every malformed line recorded during a scan.
    ///
    /// The defect list must be non-empty and in input order; the error's
    /// `line` is the first offending line.
    pub fn aggregate(defects: Vec<LineDefect>) -> Self {
        let line = defects.first().map(|d| d.line).unwrap_or(0);
        let listing = defects
            .iter()
            .map(LineDefect::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        Self {
            kind: ConfigErrorKind::Parse,
            message: format!("{} malformed line(s): {}", defects.len(), listing),
            line,
            defects,
        }
    }

    /// I/O failure while acquiring the input.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::IO, message, 0)
    }
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
