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

//! Lexical helpers for line classification.
//!
//! The parser classifies each physical line in a fixed order: comment
//! stripping, blank handling, indentation measurement, then header/option
//! recognition. These helpers implement the individual checks; the ordering
//! and the state they feed live in [`crate::parser`].

/// Find the byte offset where a comment begins on a line, if any.
///
/// Full-line markers win: if the line's trimmed content begins with one, the
/// whole line is a comment (offset 0). Otherwise the earliest inline marker
/// that sits at position 0 or immediately after whitespace starts the
/// comment. Markers in any other position are ordinary value text.
///
/// ```rust
/// use multini_core::lex::comment_start;
///
/// let markers = ['#', ';'];
/// assert_eq!(comment_start("# whole line", &markers, &markers), Some(0));
/// assert_eq!(comment_start("key = value # trailing", &markers, &markers), Some(12));
/// assert_eq!(comment_start("key = a#b", &markers, &markers), None);
/// ```
pub fn comment_start(
    line: &str,
    full_line_markers: &[char],
    inline_markers: &[char],
) -> Option<usize> {
    let trimmed = line.trim();
    if full_line_markers.iter().any(|&m| trimmed.starts_with(m)) {
        return Some(0);
    }

    let mut prev: Option<char> = None;
    for (i, c) in line.char_indices() {
        if inline_markers.contains(&c) && prev.map_or(true, char::is_whitespace) {
            return Some(i);
        }
        prev = Some(c);
    }
    None
}

/// The column of the first non-whitespace character, in characters.
///
/// Lines containing only whitespace report 0, but the parser never compares
/// indentation for those (blank lines are handled before measurement).
pub fn indent_level(line: &str) -> usize {
    line.chars()
        .position(|c| !c.is_whitespace())
        .unwrap_or(0)
}

/// Match a section header line, returning the header name.
///
/// The name is the text between the opening `[` and the last `]`; anything
/// after that `]` is ignored. An empty name does not match.
pub fn section_header(content: &str) -> Option<&str> {
    let rest = content.strip_prefix('[')?;
    let end = rest.rfind(']')?;
    let header = &rest[..end];
    if header.is_empty() {
        return None;
    }
    Some(header)
}

/// Split an option declaration at its earliest delimiter.
///
/// Returns the case-normalized name (trailing whitespace trimmed, then
/// lowercased) and the trimmed value text. `None` means no delimiter occurs
/// anywhere in the content; an empty name is returned as-is for the caller
/// to reject.
pub fn split_option(content: &str, delimiters: &[char]) -> Option<(String, String)> {
    let (at, delim) = content
        .char_indices()
        .find(|(_, c)| delimiters.contains(c))?;
    let name = content[..at].trim_end().to_lowercase();
    let value = content[at + delim.len_utf8()..].trim().to_string();
    Some((name, value))
}
