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

//! Exported `NT_*` symbols, one prototype of `include/nt.h` each.
//!
//! Every export is stateless: output depends only on its arguments and the
//! process configuration, which is fixed once loaded. Handles written by the
//! open calls point at a private marker and are never dereferenced.

#![allow(non_snake_case)]

mod lifecycle;
mod netrx;
mod ntpl;
mod packet;
mod read;

use std::borrow::Cow;
use std::ffi::CStr;

use libc::{c_char, c_void};

pub use lifecycle::*;
pub(crate) use lifecycle::explain_into;
pub use netrx::*;
pub use ntpl::*;
pub use packet::*;
pub use read::*;

static HANDLE_MARKER: u8 = 0;

pub(crate) fn placeholder_handle() -> *mut c_void {
    &HANDLE_MARKER as *const u8 as *mut c_void
}

/// Stores a placeholder handle into a caller's out-parameter, if any.
pub(crate) unsafe fn write_handle(out: *mut *mut c_void) {
    if !out.is_null() {
        *out = placeholder_handle();
    }
}

/// Lossy view of a caller string, for logging only.
pub(crate) unsafe fn c_str_lossy<'a>(s: *const c_char) -> Cow<'a, str> {
    if s.is_null() {
        Cow::Borrowed("<null>")
    } else {
        CStr::from_ptr(s).to_string_lossy()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use super::*;

    #[test]
    fn placeholder_is_stable_and_non_null() {
        assert!(!placeholder_handle().is_null());
        assert_eq!(placeholder_handle(), placeholder_handle());
    }

    #[test]
    fn write_handle_tolerates_null() {
        unsafe { write_handle(ptr::null_mut()) };
        let mut h: *mut c_void = ptr::null_mut();
        unsafe { write_handle(&mut h) };
        assert_eq!(h, placeholder_handle());
    }

    #[test]
    fn lossy_strings() {
        assert_eq!(unsafe { c_str_lossy(ptr::null()) }, "<null>");
        let s = b"port == 0\0";
        assert_eq!(unsafe { c_str_lossy(s.as_ptr() as *const c_char) }, "port == 0");
        let bad = b"a\xffb\0";
        assert_eq!(
            unsafe { c_str_lossy(bad.as_ptr() as *const c_char) },
            "a\u{fffd}b"
        );
    }
}
