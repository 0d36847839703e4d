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

use std::error::Error;
use std::process::Command;

struct EnvCommand(&'static str, Vec<&'static str>);

// Outside a git checkout (e.g. a vendored tarball) the fields fall back to
// placeholders instead of failing the build.
fn set_build_info() -> Result<(), Box<dyn Error>> {
    let fallback_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let entries = vec![
        (
            EnvCommand("NTAPI_STUB_REVISION", vec!["git", "rev-parse", "--short", "HEAD"]),
            "unknown".to_owned(),
        ),
        (
            EnvCommand(
                "NTAPI_STUB_COMMIT_DATE",
                vec!["git", "show", "-s", "--format=%cd", "--date=short", "HEAD"],
            ),
            fallback_date,
        ),
    ];
    for (e, fallback) in entries {
        let value = Command::new(e.1[0])
            .args(&e.1[1..])
            .output()
            .ok()
            .filter(|o| o.status.success())
            .and_then(|o| String::from_utf8(o.stdout).ok())
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback);
        println!("cargo:rustc-env={}={}", e.0, value);
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=include/nt.h");
    set_build_info()?;
    Ok(())
}
