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

//! Basic usage example for the multini library

use multini::buckets::split;
use multini::parse;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example configuration with repeated keys and a continued value
    let config_text = "\
# service wiring
[default]
retries = 3

[all]
notify = ops@example.com

[geoip]
source = maxmind
source = ip2location ; fallback
motd = enriched lookups
  powered by multini
";

    println!("=== Parsing ===");
    let doc = parse(config_text)?;
    println!("Sections: {:?}", doc.section_names().collect::<Vec<_>>());
    println!();

    println!("=== Value lists ===");
    let geoip = doc.section("geoip").expect("geoip section");
    for (name, value) in geoip.iter() {
        println!("{name} = {:?}", value.normalized());
    }
    println!();

    println!("=== Buckets ===");
    let buckets = split(&doc);
    println!("default: {:?}", buckets.default);
    println!("all:     {:?}", buckets.all);
    println!("rest:    {:?}", buckets.rest.keys().collect::<Vec<_>>());

    Ok(())
}
