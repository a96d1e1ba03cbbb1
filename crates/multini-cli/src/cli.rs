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

//! CLI command definitions and argument parsing.

use crate::commands;
use clap::{Parser, Subcommand};

/// Multini - duplicate-key INI configuration toolkit.
#[derive(Parser)]
#[command(name = "multini")]
#[command(author, version, about = "Multini - duplicate-key INI configuration toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file
    ///
    /// Parses the file and reports section counts, or every malformed line
    /// when the parse fails.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Fail on re-declared sections and options
        #[arg(short, long)]
        strict: bool,
    },

    /// List the section names in a configuration file
    Sections {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Split a configuration file into buckets and emit JSON
    ///
    /// The reserved `default` and `all` sections become their own buckets;
    /// every other section lands in the rest bucket. Option values are
    /// emitted as normalized lists.
    Dump {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Generate shell completion scripts
    ///
    /// Supported shells: bash, zsh, fish, powershell, elvish
    Completion {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: String,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    pub fn execute(self) -> Result<(), String> {
        match self {
            Commands::Validate { file, strict } => commands::validate(&file, strict),
            Commands::Sections { file } => commands::sections(&file),
            Commands::Dump { file, pretty } => commands::dump(&file, pretty),
            Commands::Completion { shell } => commands::completion(&shell),
        }
    }
}
