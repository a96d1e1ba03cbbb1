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

//! Error context helpers for improved ergonomics.
//!
//! Extension methods on `Result<T, ConfigError>` that annotate errors with
//! where they happened as they propagate up the call stack.
//!
//! # Examples
//!
//! ```rust
//! use multini::{parse, ConfigResultExt};
//!
//! fn load_profile(name: &str, content: &str) -> multini::ConfigResult<multini::Document> {
//!     parse(content).context(format!("loading profile {name}"))
//! }
//!
//! let err = load_profile("ops", "no header here").unwrap_err();
//! assert!(err.message.contains("loading profile ops"));
//! ```

use crate::ConfigError;
use std::fmt;

/// Extension trait for adding context to `Result<T, ConfigError>`.
pub trait ConfigResultExt<T> {
    /// Add context to an error.
    ///
    /// Evaluates the context eagerly; prefer [`ConfigResultExt::with_context`]
    /// when the message is expensive to build.
    fn context<C: fmt::Display>(self, context: C) -> Result<T, ConfigError>;

    /// Add context to an error, computed only on the error path.
    fn with_context<C: fmt::Display, F: FnOnce() -> C>(self, f: F) -> Result<T, ConfigError>;
}

impl<T> ConfigResultExt<T> for Result<T, ConfigError> {
    fn context<C: fmt::Display>(self, context: C) -> Result<T, ConfigError> {
        self.map_err(|mut e| {
            e.message = format!("{} ({})", e.message, context);
            e
        })
    }

    fn with_context<C: fmt::Display, F: FnOnce() -> C>(self, f: F) -> Result<T, ConfigError> {
        self.map_err(|mut e| {
            e.message = format!("{} ({})", e.message, f());
            e
        })
    }
}
