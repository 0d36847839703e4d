/*
 * Copyright (c) 2025 Yunshan Networks
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::env;
use std::error::Error;
use std::path::PathBuf;

// Compiles the layout probe against the shipped header, so the tests compare
// the Rust records with what a C consumer of nt.h actually sees.
fn main() -> Result<(), Box<dyn Error>> {
    let root = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let include = root.join("../../include");

    cc::Build::new()
        .file(root.join("c/nt_probe.c"))
        .include(&include)
        .warnings(false)
        .compile("nt_probe");

    println!("cargo:rerun-if-changed=c/nt_probe.c");
    println!("cargo:rerun-if-changed={}", include.join("nt.h").display());
    Ok(())
}
