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

//! Keeps panics from unwinding into the C caller.

/// Runs an export body returning `NT_STATUS`; a panic becomes
/// `NT_ERROR_INVALID_PARAMETER`.
macro_rules! ffi_guard {
    ($($body:tt)*) => {{
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(move || { $($body)* })) {
            Ok(status) => status,
            Err(_) => {
                ::log::error!("panic caught at the ntapi boundary");
                $crate::consts::NT_ERROR_INVALID_PARAMETER
            }
        }
    }};
}

/// Same as `ffi_guard!` for exports with other return types.
macro_rules! ffi_guard_or {
    ($default:expr, $($body:tt)*) => {{
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(move || { $($body)* })) {
            Ok(r) => r,
            Err(_) => {
                ::log::error!("panic caught at the ntapi boundary");
                $default
            }
        }
    }};
}

pub(crate) use ffi_guard;
pub(crate) use ffi_guard_or;
