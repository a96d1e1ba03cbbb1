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

//! # Multini - INI configuration files with duplicate-key value lists
//!
//! Multini parses an INI-style format where repeating a key within a
//! section collects every value into an ordered list, values continue
//! across indented lines, and comment markers are configurable.
//!
//! ## Quick Start
//!
//! ```rust
//! use multini::parse;
//!
//! let doc = parse(
//!     "[web]\n\
//!      host = front1\n\
//!      host = front2\n\
//!      banner = hello\n\
//!      \x20 operator\n",
//! )
//! .expect("valid config");
//!
//! let web = doc.section("web").unwrap();
//! assert_eq!(web.get("host").unwrap().normalized(), vec!["front1", "front2"]);
//! assert_eq!(web.get("banner").unwrap().normalized(), vec!["hello\noperator"]);
//! ```
//!
//! ## Modules
//!
//! - [`buckets`]: splitting a parsed document into the reserved `default`
//!   and `all` buckets and the per-consumer rest.
//!
//! Parsing never touches the filesystem by itself; [`from_file`] and
//! [`from_reader`] are thin acquisition wrappers over the same engine.

// Re-export core types
pub use multini_core::{
    // Functions
    parse_lines,
    // Errors
    ConfigError,
    ConfigErrorKind,
    ConfigResult,
    // Main types
    Document,
    LineDefect,
    OptionValue,
    // Parser
    ParseOptions,
    ParseOptionsBuilder,
    Section,
};

pub mod buckets;
pub use buckets::{split, ConfigBuckets};

// Error handling extensions
mod error_ext;
pub use error_ext::ConfigResultExt;

// Re-export lexer utilities
pub mod lex {
    //! Line-classification helpers
    pub use multini_core::lex::{comment_start, indent_level, section_header, split_option};
}

use std::io::BufRead;
use std::path::Path;

/// Parse a configuration document from a string with default options.
///
/// # Examples
///
/// ```rust
/// use multini::parse;
///
/// let doc = parse("[s]\nk = v\n").unwrap();
/// assert_eq!(doc.section("s").unwrap().get("k").unwrap().as_single(), Some("v"));
/// ```
#[inline]
pub fn parse(input: &str) -> ConfigResult<Document> {
    multini_core::parse(input)
}

/// Parse a configuration document from a string with custom options.
#[inline]
pub fn parse_with_options(input: &str, options: ParseOptions) -> ConfigResult<Document> {
    multini_core::parse_with_options(input, options)
}

/// Parse a configuration document from a buffered reader.
///
/// Lines are decoded and fed to the engine; the reader is dropped whether
/// parsing succeeds or fails. Decoding failures map to
/// [`ConfigErrorKind::IO`].
pub fn from_reader<R: BufRead>(reader: R) -> ConfigResult<Document> {
    from_reader_with_options(reader, ParseOptions::default())
}

/// Parse from a buffered reader with custom options.
pub fn from_reader_with_options<R: BufRead>(
    reader: R,
    options: ParseOptions,
) -> ConfigResult<Document> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        lines.push(line.map_err(|e| ConfigError::io(e.to_string()))?);
    }
    parse_lines(lines, options)
}

/// Parse a configuration file from a filesystem path.
///
/// The file handle is scoped to this call and released on success and
/// failure alike.
pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Document> {
    from_file_with_options(path, ParseOptions::default())
}

/// Parse a configuration file with custom options.
pub fn from_file_with_options(
    path: impl AsRef<Path>,
    options: ParseOptions,
) -> ConfigResult<Document> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::io(format!("{}: {}", path.display(), e)))?;
    parse_with_options(&content, options)
}

/// Validate configuration text without keeping the document.
///
/// Returns `Ok(())` if valid, `Err` with details if invalid.
#[inline]
pub fn validate(input: &str) -> ConfigResult<()> {
    parse(input).map(|_| ())
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
