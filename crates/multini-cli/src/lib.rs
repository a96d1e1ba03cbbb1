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

//! Multini CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: Parse a configuration file and report its health
//! - **sections**: List the section names in a file
//! - **dump**: Split a file into its consumer buckets and emit JSON
//! - **completion**: Generate shell completion scripts

pub mod cli;
pub mod commands;
