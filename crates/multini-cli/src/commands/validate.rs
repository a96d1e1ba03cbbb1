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

//! Validate command - configuration file syntax validation.

use super::read_file;
use colored::Colorize;
use multini::{parse_with_options, ParseOptions};

/// Validate a configuration file.
///
/// Parses the file and prints a summary on success. On failure, every
/// recorded malformed line is listed before the error is returned, so a
/// single run reports all defects at once.
///
/// # Arguments
///
/// * `file` - Path to the configuration file to validate
/// * `strict` - If `true`, re-declared sections and options are errors
pub fn validate(file: &str, strict: bool) -> Result<(), String> {
    let content = read_file(file)?;

    let options = ParseOptions::builder().strict_duplicates(strict).build();

    match parse_with_options(&content, options) {
        Ok(doc) => {
            println!("{} {}", "✓".green().bold(), file);
            println!("  Sections: {}", doc.section_names().count());
            println!("  Defaults: {} option(s)", doc.defaults().len());
            if strict {
                println!("  Mode: strict (duplicates are errors)");
            }
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            for defect in &e.defects {
                println!("  {}", defect);
            }
            Err(format!("{}", e))
        }
    }
}
