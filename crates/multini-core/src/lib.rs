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

//! Core parser and data model for duplicate-key INI configuration files.
//!
//! This crate parses an INI-style text format that departs from the
//! conventional model in three ways:
//!
//! - A key repeated within a section collects every occurrence into an
//!   ordered value list instead of letting the last value win.
//! - A value continues across physical lines that are indented deeper than
//!   its declaration line.
//! - Comments appear as full lines or trailing fragments, with configurable
//!   marker characters.
//!
//! The line-by-line engine is reached through [`parse`],
//! [`parse_with_options`], and the generic [`parse_lines`]; [`lex`] exposes
//! the individual line-classification helpers it is built from.

mod document;
mod error;
pub mod lex;
mod parser;

pub use document::{Document, OptionValue, Section};
pub use error::{ConfigError, ConfigErrorKind, ConfigResult, LineDefect};
pub use parser::{parse, parse_lines, parse_with_options, ParseOptions, ParseOptionsBuilder};
