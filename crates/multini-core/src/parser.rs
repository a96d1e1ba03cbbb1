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

//! Line-by-line parser for INI-style configuration input.
//!
//! Each physical line is classified in a fixed order:
//!
//! 1. Comment stripping (full-line markers, then the earliest qualifying
//!    inline marker).
//! 2. Blank handling: with `allow_blank_lines_in_values` a genuinely blank
//!    line becomes an empty segment of the open option's value; without it,
//!    a blank line terminates any pending continuation.
//! 3. Indentation measurement on the untrimmed line.
//! 4. Continuation: deeper indentation than the open option's declaration
//!    line extends that option's value.
//! 5. Section header or option declaration, which also resets the
//!    continuation baseline.
//!
//! Duplicate option declarations within a section accumulate into an ordered
//! value list; duplicate section headers reopen the existing section. Under
//! [`ParseOptions::strict_duplicates`] either is a fatal error instead.
//!
//! Malformed option lines do not stop the scan. They are recorded and
//! surfaced together in one aggregated [`ConfigError`] after the whole input
//! has been consumed, so every defect is reported in a single pass.

use crate::document::{Document, Section};
use crate::error::{ConfigError, ConfigResult, LineDefect};
use crate::lex;
use std::collections::BTreeMap;

/// Baseline value that no real indentation can exceed. Assigning it ends
/// any pending continuation.
const NO_CONTINUATION: usize = usize::MAX;

/// Parsing options for configuring scan behavior.
///
/// All fields have working defaults; use [`ParseOptions::builder`] for
/// fluent construction.
///
/// # Examples
///
/// ```rust
/// use multini_core::ParseOptions;
///
/// let options = ParseOptions::builder()
///     .strict_duplicates(true)
///     .default_section_name("GLOBAL")
///     .build();
/// assert!(options.strict_duplicates);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Characters that begin a trailing comment when preceded by whitespace
    /// or at the start of a line (default `['#', ';']`).
    pub inline_comment_markers: Vec<char>,
    /// Characters that mark a whole line as a comment when they begin its
    /// trimmed content (default `['#', ';']`).
    pub full_line_comment_markers: Vec<char>,
    /// Characters that separate an option name from its value
    /// (default `['=', ':']`).
    pub delimiters: Vec<char>,
    /// Treat blank lines inside an indented value as empty segments of that
    /// value (default `true`). When off, a blank line ends the value.
    pub allow_blank_lines_in_values: bool,
    /// Header name routed to the shared defaults bucket instead of a named
    /// section (default `"DEFAULT"`).
    pub default_section_name: String,
    /// Fail on re-declared sections or options instead of reopening and
    /// accumulating (default `false`).
    pub strict_duplicates: bool,
    /// Accept a bare `name` line with no delimiter as a valueless option
    /// (default `false`). Without this, such lines are malformed.
    pub allow_valueless: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            inline_comment_markers: vec!['#', ';'],
            full_line_comment_markers: vec!['#', ';'],
            delimiters: vec!['=', ':'],
            allow_blank_lines_in_values: true,
            default_section_name: "DEFAULT".to_string(),
            strict_duplicates: false,
            allow_valueless: false,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for ergonomic construction of [`ParseOptions`].
#[derive(Debug, Clone)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    /// Set the inline comment marker characters.
    pub fn inline_comment_markers(mut self, markers: impl Into<Vec<char>>) -> Self {
        self.options.inline_comment_markers = markers.into();
        self
    }

    /// Set the full-line comment marker characters.
    pub fn full_line_comment_markers(mut self, markers: impl Into<Vec<char>>) -> Self {
        self.options.full_line_comment_markers = markers.into();
        self
    }

    /// Set the name/value delimiter characters.
    pub fn delimiters(mut self, delimiters: impl Into<Vec<char>>) -> Self {
        self.options.delimiters = delimiters.into();
        self
    }

    /// Keep blank lines inside indented values as empty segments.
    pub fn allow_blank_lines_in_values(mut self, allow: bool) -> Self {
        self.options.allow_blank_lines_in_values = allow;
        self
    }

    /// Set the header name routed to the defaults bucket.
    pub fn default_section_name(mut self, name: impl Into<String>) -> Self {
        self.options.default_section_name = name.into();
        self
    }

    /// Fail on re-declared sections and options.
    pub fn strict_duplicates(mut self, strict: bool) -> Self {
        self.options.strict_duplicates = strict;
        self
    }

    /// Accept delimiter-less option lines as valueless options.
    pub fn allow_valueless(mut self, allow: bool) -> Self {
        self.options.allow_valueless = allow;
        self
    }

    /// Build the ParseOptions.
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

impl Default for ParseOptionsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a configuration document from a string with default options.
pub fn parse(input: &str) -> ConfigResult<Document> {
    parse_with_options(input, ParseOptions::default())
}

/// Parse a configuration document from a string with custom options.
pub fn parse_with_options(input: &str, options: ParseOptions) -> ConfigResult<Document> {
    parse_lines(input.lines(), options)
}

/// Parse a configuration document from an ordered sequence of lines.
///
/// This is the generic entry point: anything yielding line-like items works,
/// a `str::lines` iterator as well as lines decoded from a reader. Locating
/// and opening the underlying input is the caller's responsibility; the
/// engine itself never touches the filesystem.
pub fn parse_lines<I, S>(lines: I, options: ParseOptions) -> ConfigResult<Document>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParseState::new();
    for (idx, line) in lines.into_iter().enumerate() {
        state.scan_line(line.as_ref(), idx + 1, &options)?;
    }
    state.finish()
}

// --- Parse state ---

/// Where option declarations currently land.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Defaults,
    Section(String),
}

/// An option's value while the scan is still running: either declared
/// valueless, or one fragment list per occurrence. Fragments are joined
/// only at finalization.
#[derive(Debug)]
enum PendingValue {
    Absent,
    Occurrences(Vec<Vec<String>>),
}

impl PendingValue {
    fn single(value: String) -> Self {
        Self::Occurrences(vec![vec![value]])
    }

    /// Record one more occurrence of the option. A previously valueless
    /// declaration is replaced by the new value.
    fn push_occurrence(&mut self, value: String) {
        match self {
            Self::Absent => *self = Self::single(value),
            Self::Occurrences(occurrences) => occurrences.push(vec![value]),
        }
    }

    /// Append a continuation fragment to the latest occurrence. Returns
    /// false when there is no occurrence to extend (valueless option).
    fn push_fragment(&mut self, fragment: String) -> bool {
        match self {
            Self::Absent => false,
            Self::Occurrences(occurrences) => match occurrences.last_mut() {
                Some(fragments) => {
                    fragments.push(fragment);
                    true
                }
                None => false,
            },
        }
    }

    fn finish(self) -> crate::OptionValue {
        match self {
            Self::Absent => crate::OptionValue::Absent,
            Self::Occurrences(occurrences) => {
                let mut values: Vec<String> = occurrences
                    .into_iter()
                    .map(|fragments| fragments.join("\n").trim_end().to_string())
                    .collect();
                if values.len() == 1 {
                    crate::OptionValue::Single(values.remove(0))
                } else {
                    crate::OptionValue::Multi(values)
                }
            }
        }
    }
}

/// Mutable scan state threaded through the line loop. Never exposed to
/// callers mid-scan; [`ParseState::finish`] consumes it.
#[derive(Debug)]
struct ParseState {
    defaults: BTreeMap<String, PendingValue>,
    sections: BTreeMap<String, BTreeMap<String, PendingValue>>,
    cursor: Option<Cursor>,
    open_option: Option<String>,
    indent_baseline: usize,
    defects: Vec<LineDefect>,
}

impl ParseState {
    fn new() -> Self {
        Self {
            defaults: BTreeMap::new(),
            sections: BTreeMap::new(),
            cursor: None,
            open_option: None,
            indent_baseline: 0,
            defects: Vec::new(),
        }
    }

    fn map_for(&mut self, cursor: &Cursor) -> &mut BTreeMap<String, PendingValue> {
        match cursor {
            Cursor::Defaults => &mut self.defaults,
            Cursor::Section(name) => self.sections.entry(name.clone()).or_default(),
        }
    }

    fn scan_line(&mut self, raw: &str, lineno: usize, options: &ParseOptions) -> ConfigResult<()> {
        let comment = lex::comment_start(
            raw,
            &options.full_line_comment_markers,
            &options.inline_comment_markers,
        );
        let effective = comment.map_or(raw, |at| &raw[..at]);
        let content = effective.trim();

        if content.is_empty() {
            self.scan_blank(comment.is_some(), options);
            return Ok(());
        }

        let indent = lex::indent_level(raw);

        // Continuation: deeper than the open option's declaration line.
        if indent > self.indent_baseline {
            if let (Some(cursor), Some(name)) = (self.cursor.clone(), self.open_option.clone()) {
                let appended = self
                    .map_for(&cursor)
                    .get_mut(&name)
                    .is_some_and(|pending| pending.push_fragment(content.to_string()));
                if !appended {
                    // Continuation onto a valueless option has nothing to
                    // extend; recorded, not fatal.
                    self.defects.push(LineDefect::new(lineno, raw));
                }
                return Ok(());
            }
        }

        self.indent_baseline = indent;

        if let Some(header) = lex::section_header(content) {
            return self.open_section(header, lineno, options);
        }

        let cursor = match self.cursor.clone() {
            Some(cursor) => cursor,
            None => return Err(ConfigError::missing_section_header(lineno, raw)),
        };

        match lex::split_option(content, &options.delimiters) {
            Some((name, _)) if name.is_empty() => {
                self.defects.push(LineDefect::new(lineno, raw));
                self.open_option = None;
            }
            Some((name, value)) => {
                self.declare_option(&cursor, name, Some(value), lineno, options)?;
            }
            None if options.allow_valueless => {
                self.declare_option(&cursor, content.to_lowercase(), None, lineno, options)?;
            }
            None => {
                self.defects.push(LineDefect::new(lineno, raw));
                self.open_option = None;
            }
        }
        Ok(())
    }

    /// Blank effective content: either an empty value segment or the end of
    /// any pending continuation.
    fn scan_blank(&mut self, had_comment: bool, options: &ParseOptions) {
        if options.allow_blank_lines_in_values {
            // Only a physically blank line extends a value; a comment-only
            // line is skipped outright.
            if had_comment {
                return;
            }
            if let (Some(cursor), Some(name)) = (self.cursor.clone(), self.open_option.clone()) {
                if let Some(pending) = self.map_for(&cursor).get_mut(&name) {
                    pending.push_fragment(String::new());
                }
            }
        } else {
            self.indent_baseline = NO_CONTINUATION;
        }
    }

    fn open_section(
        &mut self,
        header: &str,
        lineno: usize,
        options: &ParseOptions,
    ) -> ConfigResult<()> {
        if header == options.default_section_name {
            // Reopening the defaults bucket is never a duplicate.
            self.cursor = Some(Cursor::Defaults);
        } else {
            if self.sections.contains_key(header) {
                if options.strict_duplicates {
                    return Err(ConfigError::duplicate_section(header, lineno));
                }
            } else {
                self.sections.insert(header.to_string(), BTreeMap::new());
            }
            self.cursor = Some(Cursor::Section(header.to_string()));
        }
        // A continuation line cannot directly follow a header.
        self.open_option = None;
        Ok(())
    }

    fn declare_option(
        &mut self,
        cursor: &Cursor,
        name: String,
        value: Option<String>,
        lineno: usize,
        options: &ParseOptions,
    ) -> ConfigResult<()> {
        let section_name = match cursor {
            Cursor::Defaults => options.default_section_name.clone(),
            Cursor::Section(section) => section.clone(),
        };

        let map = self.map_for(cursor);
        if options.strict_duplicates && map.contains_key(&name) {
            return Err(ConfigError::duplicate_option(&section_name, &name, lineno));
        }
        match value {
            Some(value) => match map.get_mut(&name) {
                Some(pending) => pending.push_occurrence(value),
                None => {
                    map.insert(name.clone(), PendingValue::single(value));
                }
            },
            // A valueless re-declaration resets any earlier values.
            None => {
                map.insert(name.clone(), PendingValue::Absent);
            }
        }
        self.open_option = Some(name);
        Ok(())
    }

    /// Join pending fragments and build the document, or fail with the
    /// aggregate of every recorded defect.
    fn finish(self) -> ConfigResult<Document> {
        if !self.defects.is_empty() {
            return Err(ConfigError::aggregate(self.defects));
        }
        let finalize = |map: BTreeMap<String, PendingValue>| {
            Section::from_options(map.into_iter().map(|(k, v)| (k, v.finish())).collect())
        };
        let defaults = finalize(self.defaults);
        let sections = self
            .sections
            .into_iter()
            .map(|(name, options)| (name, finalize(options)))
            .collect();
        Ok(Document::from_parts(defaults, sections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigErrorKind;
    use crate::OptionValue;

    fn values(doc: &Document, section: &str, option: &str) -> Vec<String> {
        doc.section(section)
            .and_then(|s| s.get(option))
            .map(|v| v.normalized().iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    // ==================== Basic parsing tests ====================

    #[test]
    fn test_parse_single_option() {
        let doc = parse("[net]\nhost = db1\n").unwrap();
        assert_eq!(values(&doc, "net", "host"), vec!["db1"]);
    }

    #[test]
    fn test_parse_colon_delimiter() {
        let doc = parse("[net]\nhost: db1\n").unwrap();
        assert_eq!(values(&doc, "net", "host"), vec!["db1"]);
    }

    #[test]
    fn test_option_names_are_lowercased() {
        let doc = parse("[net]\nHostName = db1\n").unwrap();
        assert_eq!(values(&doc, "net", "hostname"), vec!["db1"]);
    }

    #[test]
    fn test_empty_value_is_single_empty_string() {
        let doc = parse("[net]\nhost =\n").unwrap();
        let value = doc.section("net").unwrap().get("host").unwrap();
        assert_eq!(value, &OptionValue::Single(String::new()));
        assert!(!value.is_absent());
    }

    #[test]
    fn test_section_names_listed() {
        let doc = parse("[b]\nx = 1\n[a]\ny = 2\n").unwrap();
        let names: Vec<&str> = doc.section_names().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_input_parses_to_empty_document() {
        let doc = parse("").unwrap();
        assert!(doc.is_empty());
        assert!(doc.defaults().is_empty());
    }

    // ==================== Duplicate accumulation tests ====================

    #[test]
    fn test_duplicate_option_accumulates_in_order() {
        let doc = parse("[s]\nk = v1\nk = v2\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v1", "v2"]);
    }

    #[test]
    fn test_third_occurrence_extends_list() {
        let doc = parse("[s]\nk = v1\nk = v2\nk = v3\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v1", "v2", "v3"]);
    }

    #[test]
    fn test_single_occurrence_stays_single() {
        let doc = parse("[s]\nk = v\n").unwrap();
        let value = doc.section("s").unwrap().get("k").unwrap();
        assert_eq!(value, &OptionValue::Single("v".to_string()));
    }

    #[test]
    fn test_duplicates_interleaved_with_other_options() {
        let doc = parse("[s]\nk = v1\nother = x\nk = v2\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v1", "v2"]);
        assert_eq!(values(&doc, "s", "other"), vec!["x"]);
    }

    // ==================== Section reopening tests ====================

    #[test]
    fn test_section_reopening_merges_options() {
        let doc = parse("[A]\nk=1\n[B]\nj=2\n[A]\nk=3\n").unwrap();
        assert_eq!(values(&doc, "A", "k"), vec!["1", "3"]);
        assert_eq!(values(&doc, "B", "j"), vec!["2"]);
        assert_eq!(doc.section_names().count(), 2);
    }

    #[test]
    fn test_reopened_section_does_not_continue_old_option() {
        // The header clears the open option, so the indented line under the
        // reopened section is a new statement, not a continuation.
        let err = parse("[A]\nk = v\n[A]\n  stray words\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
    }

    // ==================== Continuation tests ====================

    #[test]
    fn test_continuation_joins_with_newline() {
        let doc = parse("[s]\nk = a\n  b\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a\nb"]);
    }

    #[test]
    fn test_multiple_continuation_fragments() {
        let doc = parse("[s]\nk = a\n  b\n  c\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a\nb\nc"]);
    }

    #[test]
    fn test_continuation_requires_deeper_indent() {
        // Same indent as the declaration is a new statement, and a bare
        // word is not a valid one.
        let err = parse("[s]\nk = a\nb\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
    }

    #[test]
    fn test_indented_option_line_is_not_a_continuation_of_nothing() {
        // No option open after the header; indentation alone does not make
        // a continuation.
        let doc = parse("[s]\n  k = v\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v"]);
    }

    #[test]
    fn test_indented_line_with_delimiter_still_continues_open_option() {
        // Anything deeper than the open option extends its value, even text
        // that looks like a declaration.
        let doc = parse("[s]\na = 1\n  b = 2\n").unwrap();
        assert_eq!(values(&doc, "s", "a"), vec!["1\nb = 2"]);
        assert!(doc.section("s").unwrap().get("b").is_none());
    }

    #[test]
    fn test_continuation_baseline_follows_option_indent() {
        // An option declared at indent 2 (no option open after the header)
        // sets the baseline, so indent 4 continues it and indent 0 does not.
        let doc = parse("[s]\n  b = 2\n    more\nc = x\n").unwrap();
        assert_eq!(values(&doc, "s", "b"), vec!["2\nmore"]);
        assert_eq!(values(&doc, "s", "c"), vec!["x"]);
    }

    #[test]
    fn test_duplicate_occurrences_join_continuations_separately() {
        let doc = parse("[s]\nk = a\n  a2\nk = b\n  b2\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a\na2", "b\nb2"]);
    }

    // ==================== Comment tests ====================

    #[test]
    fn test_full_line_comment_skipped() {
        let doc = parse("[s]\n# note\nk = v\n; note\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v"]);
    }

    #[test]
    fn test_inline_comment_stripped_after_whitespace() {
        let doc = parse("[s]\nk = v # trailing\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v"]);
    }

    #[test]
    fn test_comment_stripping_idempotence() {
        let plain = parse("[s]\nk = v\n").unwrap();
        let suffixed = parse("[s]\nk = v # comment\n").unwrap();
        assert_eq!(plain, suffixed);
    }

    #[test]
    fn test_marker_without_preceding_whitespace_is_value_text() {
        let doc = parse("[s]\nk = a#b\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a#b"]);
    }

    #[test]
    fn test_comment_on_section_header_line() {
        let doc = parse("[s] ; comment\nk = v\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v"]);
    }

    #[test]
    fn test_custom_comment_markers() {
        let options = ParseOptions::builder()
            .inline_comment_markers(vec!['!'])
            .full_line_comment_markers(vec!['!'])
            .build();
        let doc = parse_with_options("[s]\n# not a comment = 1\nk = v ! note\n", options).unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v"]);
        assert_eq!(values(&doc, "s", "# not a comment"), vec!["1"]);
    }

    // ==================== Blank line mode tests ====================

    #[test]
    fn test_blank_line_preserved_inside_value() {
        let doc = parse("[s]\nk = a\n\n  b\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a\n\nb"]);
    }

    #[test]
    fn test_blank_line_with_comment_not_preserved() {
        // A comment-only line between continuations adds no empty segment.
        let doc = parse("[s]\nk = a\n# note\n  b\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a\nb"]);
    }

    #[test]
    fn test_trailing_blank_segments_trimmed() {
        let doc = parse("[s]\nk = a\n\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a"]);
    }

    #[test]
    fn test_blank_line_terminates_value_when_disabled() {
        let options = ParseOptions::builder()
            .allow_blank_lines_in_values(false)
            .build();
        let doc = parse_with_options("[s]\nk = a\n\n  j = b\n", options).unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a"]);
        assert_eq!(values(&doc, "s", "j"), vec!["b"]);
    }

    #[test]
    fn test_blank_line_disabled_indented_garbage_is_malformed() {
        let options = ParseOptions::builder()
            .allow_blank_lines_in_values(false)
            .build();
        let err = parse_with_options("[s]\nk = a\n\n  stray words\n", options).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
        assert_eq!(err.defects.len(), 1);
        assert_eq!(err.defects[0].line, 4);
    }

    #[test]
    fn test_blank_line_before_any_option_is_skipped() {
        let doc = parse("\n\n[s]\nk = v\n").unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v"]);
    }

    // ==================== Error aggregation tests ====================

    #[test]
    fn test_malformed_lines_aggregate_in_order() {
        let err = parse("[s]\nbogus line\nanother bad one\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
        assert_eq!(err.defects.len(), 2);
        assert_eq!(err.defects[0].line, 2);
        assert_eq!(err.defects[0].text, "bogus line");
        assert_eq!(err.defects[1].line, 3);
        assert_eq!(err.defects[1].text, "another bad one");
    }

    #[test]
    fn test_malformed_line_does_not_stop_scan() {
        // The option after the bad line is still parsed; the overall result
        // is still a failure.
        let err = parse("[s]\nbogus\nk = v\n").unwrap_err();
        assert_eq!(err.defects.len(), 1);
    }

    #[test]
    fn test_empty_option_name_is_malformed() {
        let err = parse("[s]\n= v\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
        assert_eq!(err.defects[0].line, 2);
    }

    #[test]
    fn test_malformed_line_closes_open_option() {
        // After the malformed line, the indented line has no option to
        // continue and is malformed itself.
        let err = parse("[s]\nk = a\nbogus\n  not a continuation\n").unwrap_err();
        assert_eq!(err.defects.len(), 2);
        assert_eq!(err.defects[0].line, 3);
        assert_eq!(err.defects[1].line, 4);
    }

    // ==================== Missing section header tests ====================

    #[test]
    fn test_option_before_header_is_fatal() {
        let err = parse("k=1\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::MissingSectionHeader);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_missing_header_skips_comments_and_blanks() {
        let err = parse("# leading comment\n\nk=1\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::MissingSectionHeader);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_missing_header_aborts_scan_immediately() {
        // The later malformed line is never reached.
        let err = parse("k=1\nbogus\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::MissingSectionHeader);
    }

    // ==================== Default section tests ====================

    #[test]
    fn test_default_section_routed_to_defaults() {
        let doc = parse("[DEFAULT]\nshared = x\n[s]\nk = v\n").unwrap();
        assert_eq!(
            doc.defaults().get("shared").unwrap().as_single(),
            Some("x")
        );
        assert_eq!(doc.section_names().collect::<Vec<_>>(), vec!["s"]);
    }

    #[test]
    fn test_custom_default_section_name() {
        let options = ParseOptions::builder()
            .default_section_name("GLOBAL")
            .build();
        let doc = parse_with_options("[GLOBAL]\nshared = x\n", options).unwrap();
        assert_eq!(doc.defaults().get("shared").unwrap().as_single(), Some("x"));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_default_section_accumulates_duplicates() {
        let doc = parse("[DEFAULT]\nk = 1\nk = 2\n").unwrap();
        assert_eq!(doc.defaults().get("k").unwrap().normalized(), vec!["1", "2"]);
    }

    // ==================== Strict duplicates tests ====================

    #[test]
    fn test_strict_duplicate_section_is_fatal() {
        let options = ParseOptions::builder().strict_duplicates(true).build();
        let err = parse_with_options("[A]\nk=1\n[A]\nk=2\n", options).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::DuplicateSection);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_strict_duplicate_option_is_fatal() {
        let options = ParseOptions::builder().strict_duplicates(true).build();
        let err = parse_with_options("[A]\nk=1\nk=2\n", options).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::DuplicateOption);
        assert_eq!(err.line, 3);
    }

    #[test]
    fn test_strict_mode_allows_distinct_names() {
        let options = ParseOptions::builder().strict_duplicates(true).build();
        let doc = parse_with_options("[A]\nk=1\nj=2\n[B]\nk=3\n", options).unwrap();
        assert_eq!(values(&doc, "A", "k"), vec!["1"]);
        assert_eq!(values(&doc, "B", "k"), vec!["3"]);
    }

    #[test]
    fn test_strict_mode_defaults_bucket_reopen_allowed() {
        let options = ParseOptions::builder().strict_duplicates(true).build();
        let doc =
            parse_with_options("[DEFAULT]\na=1\n[s]\nk=1\n[DEFAULT]\nb=2\n", options).unwrap();
        assert_eq!(doc.defaults().get("a").unwrap().as_single(), Some("1"));
        assert_eq!(doc.defaults().get("b").unwrap().as_single(), Some("2"));
    }

    // ==================== Valueless option tests ====================

    #[test]
    fn test_valueless_rejected_by_default() {
        let err = parse("[s]\nflag\n").unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
    }

    #[test]
    fn test_valueless_accepted_when_allowed() {
        let options = ParseOptions::builder().allow_valueless(true).build();
        let doc = parse_with_options("[s]\nFlag\n", options).unwrap();
        let value = doc.section("s").unwrap().get("flag").unwrap();
        assert!(value.is_absent());
        assert!(value.normalized().is_empty());
    }

    #[test]
    fn test_valueless_redeclaration_resets_value() {
        let options = ParseOptions::builder().allow_valueless(true).build();
        let doc = parse_with_options("[s]\nk = v\nk\n", options).unwrap();
        assert!(doc.section("s").unwrap().get("k").unwrap().is_absent());
    }

    #[test]
    fn test_continuation_after_valueless_is_malformed() {
        let options = ParseOptions::builder().allow_valueless(true).build();
        let err = parse_with_options("[s]\nflag\n  tail\n", options).unwrap_err();
        assert_eq!(err.kind, ConfigErrorKind::Parse);
        assert_eq!(err.defects[0].line, 3);
    }

    // ==================== parse_lines tests ====================

    #[test]
    fn test_parse_lines_from_vec() {
        let lines = vec!["[s]", "k = a", "  b"];
        let doc = parse_lines(lines, ParseOptions::default()).unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["a\nb"]);
    }

    #[test]
    fn test_parse_lines_owned_strings() {
        let lines: Vec<String> = vec!["[s]".to_string(), "k = v".to_string()];
        let doc = parse_lines(lines, ParseOptions::default()).unwrap();
        assert_eq!(values(&doc, "s", "k"), vec!["v"]);
    }
}
