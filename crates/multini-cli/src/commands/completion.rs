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

//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{generate, shells};
use std::io;

/// Generate a shell completion script to stdout.
///
/// Supported shells: bash, zsh, fish, powershell, elvish.
pub fn completion(shell: &str) -> Result<(), String> {
    let mut cmd = crate::cli::Cli::command();
    let name = cmd.get_name().to_string();
    let mut out = io::stdout();
    match shell.to_lowercase().as_str() {
        "bash" => generate(shells::Bash, &mut cmd, name, &mut out),
        "zsh" => generate(shells::Zsh, &mut cmd, name, &mut out),
        "fish" => generate(shells::Fish, &mut cmd, name, &mut out),
        "powershell" | "pwsh" => generate(shells::PowerShell, &mut cmd, name, &mut out),
        "elvish" => generate(shells::Elvish, &mut cmd, name, &mut out),
        other => {
            return Err(format!(
                "Unsupported shell '{}' (expected bash, zsh, fish, powershell, or elvish)",
                other
            ))
        }
    }
    Ok(())
}
