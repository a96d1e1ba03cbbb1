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

//! CLI command implementations.

mod completion;
mod dump;
mod sections;
mod validate;

pub use completion::completion;
pub use dump::dump;
pub use sections::sections;
pub use validate::validate;

use std::fs;

/// Default maximum file size to prevent OOM on absurd inputs (64 MB).
/// Can be overridden via the MULTINI_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("MULTINI_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
pub fn read_file(path: &str) -> Result<String, String> {
    let metadata =
        fs::metadata(path).map_err(|e| format!("Cannot access file '{}': {}", path, e))?;
    let max_size = get_max_file_size();
    if metadata.len() > max_size {
        return Err(format!(
            "File '{}' is too large ({} bytes, limit {} bytes)",
            path,
            metadata.len(),
            max_size
        ));
    }
    fs::read_to_string(path).map_err(|e| format!("Cannot read file '{}': {}", path, e))
}
