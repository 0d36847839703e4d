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

//! Link-compatible stand-in for the Napatech NTAPI capture library.
//!
//! Builds `libntapi` exporting the `NT_*` functions declared in
//! `include/nt.h`. Every stream opens, every read reports a single idle
//! stream, and packet retrieval always comes back empty.

pub mod config;
pub mod consts;
pub mod error;
pub mod ffi;
pub mod stream;
pub mod types;
mod utils;

pub use error::{Error, Result};
