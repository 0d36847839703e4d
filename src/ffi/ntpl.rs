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

use libc::{c_char, c_int};
use log::debug;

use super::c_str_lossy;
use crate::consts::{NT_SUCCESS, STUB_NTPL_ID};
use crate::types::{NtConfigStream_t, NtErrorData, NtNtplInfo_t, NT_STATUS};
use crate::utils::guard::ffi_guard;

/// Accepts any NTPL text without looking at it. The text is only logged.
#[no_mangle]
pub unsafe extern "C" fn NT_NTPL(
    _h_stream: NtConfigStream_t,
    ntpl_buffer: *const c_char,
    info: *mut NtNtplInfo_t,
    validate: c_int,
) -> NT_STATUS {
    ffi_guard! {
        debug!(
            "NT_NTPL validate={} accepted unchecked: {}",
            validate,
            c_str_lossy(ntpl_buffer)
        );
        if let Some(info) = info.as_mut() {
            info.ntpl_id = STUB_NTPL_ID;
            info.u.error_data = NtErrorData::default();
        }
        NT_SUCCESS
    }
}
